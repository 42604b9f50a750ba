//! Repetition phrasing.
//!
//! Which template family applies depends on the shape of the quantified
//! item: character-counting classes read "one or more digits", capturing
//! groups take a plain suffix, and everything else gets the comma-joined
//! long form. Numeric bounds are phrased programmatically.

use rexplain_semantics as semantics;

use super::{Cursor, DescribeError, GenState, ItemCtx, item, phrase, plural};
use crate::types::{Token, TokenTag};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    /// Counts characters: "one or more {0}".
    Short,
    /// Counts repetitions, appended after the phrase.
    Suffix,
    /// Counts repetitions, comma-joined behind the phrase.
    Long,
}

/// Consume the quantifier at the cursor and fold it into `base`, the phrase
/// for `preceding`.
pub(crate) fn apply(
    base: String,
    preceding: &Token,
    cursor: &mut Cursor<'_>,
    state: &mut GenState,
    ctx: ItemCtx,
) -> Result<String, DescribeError> {
    let Some(q) = cursor.bump() else {
        return Err(DescribeError::MissingOperand {
            builder: "quantifier builder",
        });
    };

    // ".*" reads as a scan up to whatever comes next, so the following item
    // is phrased here and consumed with this sentence.
    if preceding.tag == TokenTag::DotChar && q.text == "*" && !cursor.at_end() {
        let next = item::build(cursor, state, ctx)?;
        return Ok(format!("{base} until {next}"));
    }

    let style = select_style(preceding, ctx);
    let template = if q.text.starts_with('{') {
        numeric_template(q, style)
    } else {
        static_template(q, style)?
    };

    let mut quantified = phrase::strip_article(&base).to_string();
    if q.is_multiplying && !quantified.contains("captured") {
        quantified = phrase::pluralized(&quantified);
    }
    Ok(if template.contains("{0}") {
        template.replace("{0}", &quantified)
    } else {
        format!("{quantified} {template}")
    })
}

fn select_style(preceding: &Token, ctx: ItemCtx) -> Style {
    if counts_characters(preceding) {
        return Style::Short;
    }
    if preceding.tag == TokenTag::Group
        && preceding.is_capturing_flavored()
        && !ctx.under_quantifier
    {
        return if contains_nested_group(preceding) {
            Style::Long
        } else {
            Style::Suffix
        };
    }
    Style::Long
}

/// Character classes count characters, as does a group whose body is
/// exactly one class.
fn counts_characters(token: &Token) -> bool {
    match token.tag {
        TokenTag::CharClass | TokenTag::UnicodeCategorySeq => true,
        TokenTag::Group => {
            let mut body = token.items.iter().filter(|t| !t.tag.is_group_marker());
            match (body.next(), body.next()) {
                (Some(only), None) => matches!(
                    only.tag,
                    TokenTag::CharClass | TokenTag::UnicodeCategorySeq
                ),
                _ => false,
            }
        }
        _ => false,
    }
}

fn contains_nested_group(token: &Token) -> bool {
    token.items.iter().any(|t| t.tag == TokenTag::Group)
}

fn static_template(q: &Token, style: Style) -> Result<String, DescribeError> {
    let found = match style {
        Style::Short => semantics::quantifier_short(&q.text),
        Style::Suffix => semantics::quantifier_suffix(&q.text),
        Style::Long => semantics::quantifier_long(&q.text),
    };
    found.map(ToString::to_string).ok_or_else(|| {
        DescribeError::miss(
            "quantifier template",
            &q.text,
            semantics::accepted_quantifier_texts(),
        )
    })
}

/// `{n}`, `{n,}`, and `{n,m}` bypass the static tables.
fn numeric_template(q: &Token, style: Style) -> String {
    let low = limit_value(q.low_limit.as_deref());
    let high = limit_value(q.high_limit.as_deref());

    let mut counted = if !q.text.contains(',') {
        let n = low.unwrap_or_default();
        format!("exactly {} {}", phrase::numeral_label(n), times_word(n))
    } else if let (Some(n), Some(m)) = (low, high) {
        format!(
            "between {} and {} times",
            phrase::numeral_label(n),
            phrase::numeral_label(m)
        )
    } else {
        let n = low.unwrap_or_default();
        format!("at least {} {}", phrase::numeral_label(n), times_word(n))
    };
    if q.is_lazy() {
        counted.push_str(", but as few times as possible");
    }
    match style {
        Style::Long => format!("{{0}}, {counted}"),
        Style::Short | Style::Suffix => counted,
    }
}

fn limit_value(limit: Option<&Token>) -> Option<u64> {
    limit.and_then(|t| t.text.parse().ok())
}

fn times_word(n: u64) -> &'static str {
    if plural::plural_category(n) == "one" {
        "time"
    } else {
        "times"
    }
}
