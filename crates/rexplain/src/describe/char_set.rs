//! Character-set and character-range composition.

use rexplain_semantics as semantics;

use super::{Cursor, DescribeError, GenState, ItemCtx, item};
use crate::types::{Token, TokenTag};

/// Phrase the contents of a bracketed character set.
///
/// Well-known whole sets resolve to canned fragments. Otherwise the
/// sub-phrases accumulate into alternatives: "all ..." phrases merge with
/// "and", "except" connectors splice onto the previous alternative, and the
/// rest join with "or".
pub(crate) fn build_set(
    token: &Token,
    state: &mut GenState,
    ctx: ItemCtx,
) -> Result<String, DescribeError> {
    if let Some(canned) = semantics::set_special(&token.text) {
        return Ok(canned.to_string());
    }

    let inner = ItemCtx {
        in_char_set: true,
        ..ctx
    };
    let mut cursor = Cursor::new(&token.items);
    let mut alternatives: Vec<String> = Vec::new();
    while let Some(next) = cursor.peek() {
        if next.tag == TokenTag::CharSetControlChar && matches!(next.text.as_str(), "[" | "]") {
            cursor.advance(1);
        } else {
            let piece = item::build(&mut cursor, state, inner)?;
            merge_alternative(&mut alternatives, piece);
        }
    }

    Ok(
        if alternatives.len() == 2 && !alternatives[0].contains("except") {
            format!("either {} or {}", alternatives[0], alternatives[1])
        } else {
            alternatives.join(" or ")
        },
    )
}

fn merge_alternative(alternatives: &mut Vec<String>, piece: String) {
    match alternatives.last_mut() {
        Some(last)
            if piece.starts_with("except")
                || last.ends_with("except")
                || last.ends_with("except for") =>
        {
            // Continuation of an exclusion, not a new alternative. A
            // leading "all" reads doubled after "except", so drop it.
            let tail = piece.strip_prefix("all ").unwrap_or(&piece);
            *last = format!("{last} {tail}");
        }
        Some(last) if piece.starts_with("all ") && last.starts_with("all ") => {
            let tail = piece.strip_prefix("all ").unwrap_or(&piece);
            *last = format!("{last} and {tail}");
        }
        _ => alternatives.push(piece),
    }
}

/// Phrase a range between two endpoints.
///
/// Same-case endpoints hoist the case name onto the whole phrase; mixed
/// cases annotate each endpoint separately.
pub(crate) fn build_range(token: &Token) -> Result<String, DescribeError> {
    let endpoints: Vec<&Token> = token
        .items
        .iter()
        .filter(|t| t.tag != TokenTag::CharSetControlChar)
        .collect();
    let (Some(lo), Some(hi)) = (endpoints.first(), endpoints.last()) else {
        return Err(DescribeError::MissingOperand {
            builder: "character-range builder",
        });
    };

    let lo_case = case_name(&lo.text);
    let hi_case = case_name(&hi.text);
    Ok(match (lo_case, hi_case) {
        (Some(shared), Some(other)) if shared == other => {
            format!(
                "any {shared} character from \"{}\" to \"{}\"",
                lo.text, hi.text
            )
        }
        _ => format!(
            "any character from {} to {}",
            cased_endpoint(lo_case, &lo.text),
            cased_endpoint(hi_case, &hi.text)
        ),
    })
}

fn case_name(text: &str) -> Option<&'static str> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_uppercase() {
        Some("uppercase")
    } else if c.is_lowercase() {
        Some("lowercase")
    } else {
        None
    }
}

fn cased_endpoint(case: Option<&str>, text: &str) -> String {
    match case {
        Some(case) => format!("{case} \"{text}\""),
        None => format!("\"{text}\""),
    }
}
