//! Group phrasing: marker skipping, body joining, kind-specific framing,
//! and capture-number clauses.

use rexplain_semantics as semantics;

use super::{Cursor, DescribeError, GenState, ItemCtx, Mode, item, phrase};
use crate::types::{GroupKind, Token, TokenTag};

/// A rendered group: the quantifiable phrase plus trailing clauses that
/// must land after any quantifier the caller applies.
pub(crate) struct BuiltGroup {
    pub(crate) phrase: String,
    pub(crate) clauses: Vec<String>,
}

pub(crate) fn build(
    token: &Token,
    state: &mut GenState,
    ctx: ItemCtx,
    will_quantify: bool,
) -> Result<BuiltGroup, DescribeError> {
    let Some(kind) = token.group_kind else {
        return Err(DescribeError::UnexpectedToken {
            tag: token.tag,
            builder: "group builder",
        });
    };

    // Claim the capture number before descending so numbering stays
    // outermost-first even when tokens arrive unnumbered.
    let number = kind
        .is_capturing()
        .then(|| state.claim_group_number(token.group_number));

    let inner = ItemCtx {
        in_char_set: false,
        in_group: true,
        under_quantifier: ctx.under_quantifier || will_quantify,
    };
    let (joined, pieces) = join_body(&token.items, state, inner)?;

    let contains_nested = token.items.iter().any(|t| t.tag == TokenTag::Group);
    let mut result = joined;
    if (contains_nested || (will_quantify && pieces > 1)) && !result.is_empty() {
        result = format!("the pattern of {result}");
    }

    match kind {
        GroupKind::Capturing => {}
        GroupKind::Named => {
            if !ctx.in_group {
                if let Some(name) = group_name(token) {
                    result = format!("{result}, and name this group \"{name}\"");
                }
            }
        }
        GroupKind::Balancing => {
            let (pushed, popped) = balancing_names(token);
            result = format!(
                "{result}, assign the substring between the \"{popped}\" group and the \
                 current group to \"{pushed}\", and delete the definition of the \
                 \"{popped}\" group"
            );
        }
        GroupKind::BackrefNamed => {
            let name = group_name(token).unwrap_or_default();
            let sentence = format!("{} {result}", state.mode.verb());
            result = format!(
                "If the \"{name}\" group exists, {}",
                phrase::lowercase_first(&sentence)
            );
        }
        GroupKind::LookaheadPositive => {
            result = assertion(
                "the previous match is followed by",
                "If so, the match was successful",
                true,
                &result,
            );
        }
        GroupKind::LookaheadNegative => {
            result = assertion(
                "the previous match is followed by",
                "If it is not, the match was successful",
                false,
                &result,
            );
        }
        GroupKind::LookbehindPositive => {
            result = assertion(
                "the next match is preceded by",
                "If so, the match is possible",
                true,
                &result,
            );
        }
        GroupKind::LookbehindNegative => {
            result = assertion(
                "the next match is preceded by",
                "If it is not, the match is possible",
                false,
                &result,
            );
        }
        GroupKind::NonBacktracking => {
            result = format!("{result}, but do not backtrack to the following match");
        }
        GroupKind::LocalOptions => {
            result = local_options(token, &result, state.mode)?;
        }
    }

    let mut clauses = Vec::new();
    if let Some(number) = number {
        if !ctx.in_group {
            clauses.push(format!(
                "This is the {} capturing group",
                phrase::ordinal_label(number)
            ));
            let inner_labels = descendant_capture_labels(token, number);
            if !inner_labels.is_empty() {
                clauses.push(format!(
                    "This expression also defines the {} capturing group",
                    inner_labels.join(" and ")
                ));
            }
        }
    }

    Ok(BuiltGroup {
        phrase: result,
        clauses,
    })
}

/// Build and join the group's non-marker sub-items.
///
/// Joining starts with " followed by ", switches to comma style once the
/// accumulated clause already reads as a list, and continues with "and
/// follow the match by " right after a balancing assignment.
fn join_body(
    items: &[Token],
    state: &mut GenState,
    ctx: ItemCtx,
) -> Result<(String, usize), DescribeError> {
    let mut cursor = Cursor::new(items);
    let mut joined = String::new();
    let mut pieces = 0usize;
    let mut after_assign = false;
    while let Some(next) = cursor.peek() {
        if next.tag.is_group_marker() {
            cursor.advance(1);
        } else {
            let piece = item::build(&mut cursor, state, ctx)?;
            pieces += 1;
            joined = if joined.is_empty() {
                piece.clone()
            } else if after_assign {
                format!("{joined}, and follow the match by {piece}")
            } else if joined.contains(',') || joined.contains("followed") {
                format!("{joined}, {piece}")
            } else {
                format!("{joined} followed by {piece}")
            };
            after_assign = piece.contains(", assign");
        }
    }
    Ok((joined, pieces))
}

/// Frame a lookaround body as an assertion pair of sentences.
fn assertion(direction: &str, outcome: &str, holds_when_empty: bool, body: &str) -> String {
    if body.is_empty() {
        let verdict = if holds_when_empty { "true" } else { "false" };
        return format!(
            "Determine whether {direction} the empty string. This assertion is always \
             {verdict}. {outcome}"
        );
    }
    format!("Determine whether {direction} {body}. {outcome}")
}

fn local_options(token: &Token, body: &str, mode: Mode) -> Result<String, DescribeError> {
    let enabled = option_list(token.using_options.as_deref())?;
    let canceled = option_list(token.cancel_options.as_deref())?;
    let lead = match (enabled.is_empty(), canceled.is_empty()) {
        (false, false) => format!("Using {enabled}, and canceling {canceled}"),
        (false, true) => format!("Using {enabled}"),
        (true, false) => format!("Canceling {canceled}"),
        (true, true) => "Using the current options".to_string(),
    };
    Ok(if body.is_empty() {
        format!("{lead}, perform the following matches")
    } else {
        format!("{lead}, {} {body}", mode.verb_lowercase())
    })
}

fn option_list(set: Option<&Token>) -> Result<String, DescribeError> {
    let Some(set) = set else {
        return Ok(String::new());
    };
    let mut phrases = Vec::new();
    for flag in set.text.chars().filter(|c| !matches!(c, '-' | ':')) {
        let named = semantics::option_phrase(flag).ok_or_else(|| {
            DescribeError::miss(
                "option",
                &flag.to_string(),
                semantics::accepted_option_flags(),
            )
        })?;
        phrases.push(named);
    }
    Ok(phrases.join(" and "))
}

/// The group's own name, from the token field or its name sub-tokens.
fn group_name(token: &Token) -> Option<String> {
    token
        .name
        .clone()
        .or_else(|| find_group_name(&token.items).map(ToString::to_string))
}

/// Balancing names split as `pushed-popped`: the new capture and the
/// previously-defined group it consumes.
fn balancing_names(token: &Token) -> (String, String) {
    let raw = group_name(token).unwrap_or_default();
    match raw.split_once('-') {
        Some((pushed, popped)) => (pushed.to_string(), popped.to_string()),
        None => (raw.clone(), raw),
    }
}

fn find_group_name(items: &[Token]) -> Option<&str> {
    for token in items {
        match token.tag {
            TokenTag::GroupName => return Some(&token.text),
            TokenTag::NameQuote => {
                if let Some(name) = find_group_name(&token.items) {
                    return Some(name);
                }
            }
            _ => {}
        }
    }
    None
}

/// Labels for every capturing-flavored group below `token`, in document
/// order: quoted names for named flavors, ordinals otherwise.
fn descendant_capture_labels(token: &Token, outer_number: u32) -> Vec<String> {
    let mut labels = Vec::new();
    let mut fallback = outer_number;
    collect_labels(&token.items, &mut labels, &mut fallback);
    labels
}

fn collect_labels(items: &[Token], labels: &mut Vec<String>, fallback: &mut u32) {
    for token in items {
        if token.tag == TokenTag::Group && token.is_capturing_flavored() {
            *fallback += 1;
            let label = match token.group_kind {
                Some(GroupKind::Named | GroupKind::Balancing | GroupKind::BackrefNamed) => {
                    match group_name(token) {
                        Some(name) => {
                            // A balancing pair labels the group it defines.
                            let defined = name.split('-').next().unwrap_or(&name).to_string();
                            format!("\"{defined}\"")
                        }
                        None => phrase::ordinal_label(token.group_number.unwrap_or(*fallback)),
                    }
                }
                _ => phrase::ordinal_label(token.group_number.unwrap_or(*fallback)),
            };
            labels.push(label);
        }
        collect_labels(&token.items, labels, fallback);
    }
}
