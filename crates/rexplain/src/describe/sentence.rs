//! Sentence composition: canned special cases, class merging, prefixing,
//! and termination.

use rexplain_semantics as semantics;

use super::{Cursor, DescribeError, GenState, ItemCtx, item, phrase};
use crate::types::{PatternItem, TokenTag};

/// Compose the next sentence at the cursor.
pub(crate) fn compose(
    cursor: &mut Cursor<'_>,
    state: &mut GenState,
) -> Result<PatternItem, DescribeError> {
    let start = cursor.pos();

    // Canned phrases cover windows of up to three tokens; the longest match
    // wins. A window is skipped when consuming it would orphan a following
    // quantifier or alternation operator.
    for window in (1..=3).rev() {
        if let Some(text) = cursor.window_text(window)
            && let Some(canned) = semantics::sentence_special(&text)
            && !cursor
                .peek_at(window)
                .is_some_and(|after| matches!(after.tag, TokenTag::Quantifier | TokenTag::AltChar))
        {
            let mut description = canned.to_string();
            if let Some(last) = cursor.peek_at(window - 1)
                && last.tag == TokenTag::Group
                && last.is_capturing_flavored()
                && let Some(assigned) = last.group_number
            {
                let number = state.claim_group_number(Some(assigned));
                description.push_str(&format!(
                    ". This is the {} capturing group",
                    phrase::ordinal_label(number)
                ));
            }
            cursor.advance(window);
            return Ok(PatternItem::new(
                cursor.consumed_text(start),
                terminated(description),
            ));
        }
    }

    let driving_tag = cursor.peek().map(|t| t.tag);
    let mut description = item::build(cursor, state, ItemCtx::default())?;

    // A trailing character class folds into the same sentence.
    if cursor
        .peek()
        .is_some_and(|next| next.tag == TokenTag::CharClass)
    {
        let second = item::build(cursor, state, ItemCtx::default())?;
        description = format!(
            "{} followed by {second}",
            phrase::promote_article(&description)
        );
    }

    if !phrase::starts_uppercase(&description) {
        let prefix = match driving_tag {
            Some(TokenTag::AnchorControl) if start == 0 => {
                if description.starts_with("where") {
                    "Start ".to_string()
                } else {
                    "Start at ".to_string()
                }
            }
            Some(TokenTag::AnchorControl) if start + 1 == cursor.len() => "End at ".to_string(),
            _ => format!("{} ", state.mode.verb()),
        };
        description = format!("{prefix}{description}");
    }

    Ok(PatternItem::new(
        cursor.consumed_text(start),
        terminated(description),
    ))
}

fn terminated(mut description: String) -> String {
    if !description.ends_with('.') {
        description.push('.');
    }
    description
}
