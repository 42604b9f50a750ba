//! The generic item builder: one quantified, possibly alternated unit.
//!
//! Composite tokens dispatch to their dedicated builders; everything else
//! resolves through the specific-item table below.

use rexplain_semantics as semantics;

use super::{Cursor, DescribeError, GenState, ItemCtx, char_set, group, phrase, quantifier};
use crate::types::{Token, TokenTag};

/// Build the phrase for the next item at the cursor, consuming the item,
/// any trailing quantifier, and any alternation it heads.
pub(crate) fn build(
    cursor: &mut Cursor<'_>,
    state: &mut GenState,
    ctx: ItemCtx,
) -> Result<String, DescribeError> {
    let Some(token) = cursor.bump() else {
        return Err(DescribeError::MissingOperand {
            builder: "item builder",
        });
    };
    let will_quantify = cursor
        .peek()
        .is_some_and(|next| next.tag == TokenTag::Quantifier);

    let (mut result, clauses) = match token.tag {
        TokenTag::CharSet => (char_set::build_set(token, state, ctx)?, Vec::new()),
        TokenTag::CharRange => (char_set::build_range(token)?, Vec::new()),
        TokenTag::Group => {
            let built = group::build(token, state, ctx, will_quantify)?;
            (built.phrase, built.clauses)
        }
        _ => (specific(token, ctx)?, Vec::new()),
    };

    if will_quantify {
        result = quantifier::apply(result, token, cursor, state, ctx)?;
    }
    for clause in clauses {
        result = format!("{result}. {clause}");
    }

    if cursor
        .peek()
        .is_some_and(|next| next.tag == TokenTag::AltChar)
    {
        cursor.advance(1);
        let right = build(cursor, state, ctx)?;
        // Flatten chained alternations into one "either a or b or c".
        let right_tail = right.strip_prefix("either ").unwrap_or(&right);
        result = format!("either {result} or {right_tail}");
    }

    Ok(result)
}

/// Base phrase for one atomic token. Composite and operator tags are
/// structurally forbidden here.
fn specific(token: &Token, ctx: ItemCtx) -> Result<String, DescribeError> {
    match token.tag {
        TokenTag::LiteralChar => Ok(literal_char(token, ctx)),
        TokenTag::LiteralString => Ok(if ctx.in_group {
            format!("the literal characters \"{}\"", token.text)
        } else {
            format!("a literal string \"{}\"", token.text)
        }),
        TokenTag::EscapedChar => Ok(escaped_char(token, ctx)),
        TokenTag::AnchorControl => semantics::anchor_phrase(&token.text)
            .map(ToString::to_string)
            .ok_or_else(|| {
                DescribeError::miss("anchor", &token.text, semantics::accepted_anchor_texts())
            }),
        TokenTag::CharClass => char_class(token, ctx),
        TokenTag::DotChar => Ok("any character".to_string()),
        TokenTag::UnicodeSeq => unicode_seq(token),
        TokenTag::UnicodeCategorySeq => unicode_category(token, ctx),
        TokenTag::CharSetControlChar => semantics::set_connector_phrase(&token.text)
            .map(ToString::to_string)
            .ok_or_else(|| DescribeError::miss("character-set connector", &token.text, &[])),
        TokenTag::BackRef => Ok(capture_reference(token, "in")),
        TokenTag::Replacement => Ok(capture_reference(token, "by")),
        forbidden => Err(DescribeError::UnexpectedToken {
            tag: forbidden,
            builder: "specific-item builder",
        }),
    }
}

fn literal_char(token: &Token, ctx: ItemCtx) -> String {
    if ctx.in_char_set {
        return format!("\"{}\"", token.text);
    }
    match token
        .text
        .chars()
        .next()
        .and_then(semantics::character_name)
    {
        Some(name) => phrase::with_article(name),
        None => format!("a literal character \"{}\"", token.text),
    }
}

fn escaped_char(token: &Token, ctx: ItemCtx) -> String {
    if let Some(name) = semantics::escape_phrase(&token.text) {
        return phrase::with_article(name);
    }
    // Not a control escape: describe the character behind the backslash.
    let Some(c) = token.text.chars().last() else {
        return String::new();
    };
    if ctx.in_char_set {
        return format!("\"{c}\"");
    }
    match semantics::character_name(c) {
        Some(name) => phrase::with_article(name),
        None => format!("a literal character \"{c}\""),
    }
}

fn char_class(token: &Token, ctx: ItemCtx) -> Result<String, DescribeError> {
    let singular = semantics::char_class_phrase(&token.text).ok_or_else(|| {
        DescribeError::miss(
            "character class",
            &token.text,
            semantics::accepted_char_class_texts(),
        )
    })?;
    Ok(if ctx.in_char_set {
        format!("all {}", phrase::pluralized(singular))
    } else {
        phrase::with_article(singular)
    })
}

fn unicode_seq(token: &Token) -> Result<String, DescribeError> {
    let hex = token.text.get(2..).unwrap_or("");
    let code_point = u32::from_str_radix(hex, 16)
        .map_err(|_| DescribeError::miss("Unicode character", &token.text, &[]))?;
    if let Some(name) = semantics::unicode_char_phrase(code_point) {
        return Ok(phrase::with_article(&format!("{name} character")));
    }
    if let Some(c) = char::from_u32(code_point) {
        if c.is_ascii_graphic() {
            return Ok(format!("the Unicode character \"{c}\""));
        }
    }
    Err(DescribeError::miss(
        "Unicode character",
        &token.text,
        &[],
    ))
}

fn unicode_category(token: &Token, ctx: ItemCtx) -> Result<String, DescribeError> {
    let negated = token.text.starts_with(r"\P");
    let key = token
        .text
        .get(2..)
        .unwrap_or("")
        .trim_start_matches('{')
        .trim_end_matches('}');
    let singular = semantics::unicode_category_phrase(key).ok_or_else(|| {
        DescribeError::miss("Unicode category", key, semantics::accepted_category_keys())
    })?;
    Ok(match (ctx.in_char_set, negated) {
        (false, false) => phrase::with_article(singular),
        (false, true) => format!("any character except {}", phrase::with_article(singular)),
        (true, false) => format!("all {}", phrase::pluralized(singular)),
        (true, true) => format!("all characters except {}", phrase::pluralized(singular)),
    })
}

/// Shared phrasing for backreferences and replacement references; only the
/// preposition differs.
fn capture_reference(token: &Token, preposition: &str) -> String {
    let label = match &token.name {
        Some(name) => format!("\"{name}\""),
        None => {
            let digits: String = token.text.chars().filter(char::is_ascii_digit).collect();
            digits
                .parse::<u32>()
                .map_or(digits, phrase::ordinal_label)
        }
    };
    format!("the string captured {preposition} the {label} capturing group")
}
