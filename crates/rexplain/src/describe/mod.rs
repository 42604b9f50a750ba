//! The description generator: walks a parsed token sequence and produces
//! one English sentence per consumed window of tokens.
//!
//! The entry point is [`generate`]. Sentence assembly is layered the same
//! way the phrasing composes: the sentence composer drives the generic item
//! builder, which dispatches to the specific-item, character-set,
//! character-range, group, and quantifier builders.

mod char_set;
mod error;
mod group;
mod item;
mod phrase;
mod plural;
mod quantifier;
mod sentence;

pub use error::{DescribeError, compute_suggestions};

use crate::types::{PatternItems, Token};

/// Whether descriptions phrase a search pattern or a replacement pattern.
///
/// The mode only changes the default sentence verb: "Match" for search,
/// "Add" for replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Search,
    Replace,
}

impl Mode {
    pub(crate) fn verb(self) -> &'static str {
        match self {
            Self::Search => "Match",
            Self::Replace => "Add",
        }
    }

    pub(crate) fn verb_lowercase(self) -> &'static str {
        match self {
            Self::Search => "match",
            Self::Replace => "add",
        }
    }
}

/// Describe a parsed token sequence as an ordered document of sentences.
///
/// The input tree is treated as immutable and is assumed well-formed, with
/// capture numbers pre-assigned by the parser; no validation is performed.
/// Concatenating the output item texts reproduces the concatenated input
/// token texts exactly.
pub fn generate(tokens: &[Token], mode: Mode) -> Result<PatternItems, DescribeError> {
    let mut cursor = Cursor::new(tokens);
    let mut state = GenState::new(mode);
    let mut items = PatternItems::new();
    while !cursor.at_end() {
        items.push(sentence::compose(&mut cursor, &mut state)?);
    }
    Ok(items)
}

/// Read position over a token slice, threaded by `&mut` through the
/// builders so every consumption is explicit.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    /// The next unconsumed token, if any.
    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// The token `offset` positions past the cursor.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Consume and return the next token.
    pub(crate) fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume `count` tokens without looking at them.
    pub(crate) fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.tokens.len());
    }

    /// Concatenated text of the next `len` tokens, or None when fewer
    /// remain.
    pub(crate) fn window_text(&self, len: usize) -> Option<String> {
        let end = self.pos + len;
        if end > self.tokens.len() {
            return None;
        }
        Some(
            self.tokens[self.pos..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect(),
        )
    }

    /// Concatenated text of the tokens consumed since `from`.
    pub(crate) fn consumed_text(&self, from: usize) -> String {
        self.tokens[from..self.pos]
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }
}

/// Generator state threaded across one whole document.
pub(crate) struct GenState {
    pub(crate) mode: Mode,
    groups_seen: u32,
}

impl GenState {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            groups_seen: 0,
        }
    }

    /// Account for one capturing-flavored group and return its number.
    ///
    /// Pre-assigned numbers win; the encounter-order counter fills in when a
    /// token arrives unnumbered and stays synchronized with assignments so
    /// mixed input still numbers monotonically.
    pub(crate) fn claim_group_number(&mut self, assigned: Option<u32>) -> u32 {
        let number = assigned.unwrap_or(self.groups_seen + 1);
        self.groups_seen = self.groups_seen.max(number);
        number
    }
}

/// Flags describing where in the tree the current item is being built.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ItemCtx {
    /// Inside a character set: literals are quoted, classes pluralize.
    pub(crate) in_char_set: bool,
    /// Inside another group's rendering: group name suffixes and capture
    /// clauses are deferred to the enclosing group.
    pub(crate) in_group: bool,
    /// Inside the operand of an outer quantifier.
    pub(crate) under_quantifier: bool,
}
