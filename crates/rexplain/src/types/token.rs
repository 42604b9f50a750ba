use bon::Builder;
use serde::{Deserialize, Serialize};

/// Syntactic category of a parsed token.
///
/// The parser that produces token trees lives outside this crate; these tags
/// are the contract it fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenTag {
    /// A single literal character.
    LiteralChar,
    /// A run of literal characters the parser kept together.
    LiteralString,
    /// A backslash escape for a single character (`\t`, `\.`, ...).
    EscapedChar,
    /// A zero-width position assertion (`^`, `$`, `\b`, ...).
    AnchorControl,
    /// A shorthand character class (`\d`, `\w`, `\s` and negations).
    CharClass,
    /// The `.` wildcard.
    DotChar,
    /// A backslash-u or backslash-x hex code-point escape.
    UnicodeSeq,
    /// A `\p{...}`/`\P{...}` Unicode category sequence.
    UnicodeCategorySeq,
    /// Character-set punctuation: brackets, negation caret, subtraction.
    CharSetControlChar,
    /// A backreference (`\1`, `\k<name>`).
    BackRef,
    /// A replacement-pattern capture reference (`$1`, `${name}`).
    Replacement,
    /// A repetition operator (`*`, `+`, `?`, `{n,m}` and lazy variants).
    Quantifier,
    /// A bracketed character set; `items` holds its contents.
    CharSet,
    /// A character range inside a set; `items` holds the endpoints.
    CharRange,
    /// A group of any kind; `items` holds markers and body.
    Group,
    /// The `|` alternation operator.
    AltChar,
    /// A numeric bound inside a `{...}` quantifier.
    Number,
    /// Group punctuation: parentheses and the `(?` family of markers.
    GroupControlChar,
    /// A quoted group name; `items` wraps the [`TokenTag::GroupName`].
    NameQuote,
    /// The bare text of a group name.
    GroupName,
    /// A run of inline option flags (`i`, `m-s`, ...).
    OptionSet,
}

impl TokenTag {
    /// True for tokens that only mark group syntax and carry no content of
    /// their own. The group builder skips them wherever they appear.
    pub fn is_group_marker(self) -> bool {
        matches!(
            self,
            Self::GroupControlChar | Self::NameQuote | Self::GroupName | Self::OptionSet
        )
    }
}

/// The flavor of a [`TokenTag::Group`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// Plain `(...)`.
    Capturing,
    /// `(?<name>...)`.
    Named,
    /// `(?<push-pop>...)` balancing definition.
    Balancing,
    /// `(?(name)...)` conditional on a named group.
    BackrefNamed,
    /// `(?=...)`.
    LookaheadPositive,
    /// `(?!...)`.
    LookaheadNegative,
    /// `(?<=...)`.
    LookbehindPositive,
    /// `(?<!...)`.
    LookbehindNegative,
    /// `(?>...)` atomic group.
    NonBacktracking,
    /// `(?imnsx-imnsx:...)` inline option scope.
    LocalOptions,
}

impl GroupKind {
    /// True for kinds that consume a capture-group number.
    pub fn is_capturing(self) -> bool {
        matches!(
            self,
            Self::Capturing | Self::Named | Self::Balancing | Self::BackrefNamed
        )
    }
}

/// One node of a parsed pattern, produced by an external parser.
///
/// `text` is the exact source substring the token consumed; when `items` is
/// non-empty, `text` equals the concatenation of the items' `text` in order,
/// so composite tokens carry their delimiters as marker sub-tokens. Trees
/// are treated as immutable here.
///
/// # Example
///
/// ```
/// use rexplain::{Token, TokenTag};
///
/// let plus = Token::builder()
///     .tag(TokenTag::Quantifier)
///     .text("+?")
///     .is_multiplying(true)
///     .build();
/// assert!(plus.is_lazy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Token {
    pub tag: TokenTag,
    pub text: String,
    /// Ordered sub-tokens; non-empty only for CharSet, CharRange, Group,
    /// OptionSet, and NameQuote tokens.
    #[builder(default)]
    #[serde(default)]
    pub items: Vec<Token>,
    /// Group flavor; set on Group tokens only.
    #[serde(default)]
    pub group_kind: Option<GroupKind>,
    /// Capture number, pre-assigned by the parser in left-to-right,
    /// outermost-first encounter order for capturing-flavored groups.
    #[serde(default)]
    pub group_number: Option<u32>,
    /// Group name for named flavors; backreference name for `\k<name>`.
    #[serde(default)]
    pub name: Option<String>,
    /// Options enabled by a LocalOptions group.
    #[serde(default)]
    pub using_options: Option<Box<Token>>,
    /// Options disabled by a LocalOptions group.
    #[serde(default)]
    pub cancel_options: Option<Box<Token>>,
    /// True when a quantifier can repeat its operand more than once.
    #[builder(default)]
    #[serde(default)]
    pub is_multiplying: bool,
    /// Lower numeric bound token of a `{n}`/`{n,}`/`{n,m}` quantifier.
    #[serde(default)]
    pub low_limit: Option<Box<Token>>,
    /// Upper numeric bound token of a `{n,m}` quantifier.
    #[serde(default)]
    pub high_limit: Option<Box<Token>>,
}

impl Token {
    /// True when a quantifier asks for the shortest possible match, implied
    /// by a trailing `?` after the operator itself.
    pub fn is_lazy(&self) -> bool {
        self.text.len() > 1 && self.text.ends_with('?')
    }

    /// True for groups whose kind consumes a capture-group number.
    pub fn is_capturing_flavored(&self) -> bool {
        self.group_kind.is_some_and(GroupKind::is_capturing)
    }
}
