//! Error types for the description generator.
//!
//! Both variants signal a mismatch between the token tree and this crate's
//! tables, never bad user input: the external parser owns input validation.

use strsim::levenshtein;
use thiserror::Error;

use crate::types::TokenTag;

/// A fatal generation failure.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// A static table has no entry for a token the tree presented.
    #[error("no {table} entry for '{key}'{}", suggestion_list(suggestions))]
    LookupMiss {
        table: &'static str,
        key: String,
        suggestions: Vec<String>,
    },

    /// A token tag reached a builder that cannot describe it.
    #[error("{tag:?} token cannot be described by the {builder}")]
    UnexpectedToken {
        tag: TokenTag,
        builder: &'static str,
    },

    /// A builder needed an operand the token sequence did not provide.
    #[error("the {builder} ran out of tokens")]
    MissingOperand { builder: &'static str },
}

impl DescribeError {
    /// Build a [`DescribeError::LookupMiss`] with suggestions drawn from the
    /// table's accepted keys.
    pub(crate) fn miss(table: &'static str, key: &str, accepted: &[&str]) -> Self {
        Self::LookupMiss {
            table,
            key: key.to_string(),
            suggestions: compute_suggestions(key, accepted),
        }
    }
}

fn suggestion_list(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}

/// Close matches for `input` among `accepted`, by edit distance.
///
/// Returns at most three candidates within distance 2, closest first.
pub fn compute_suggestions(input: &str, accepted: &[&str]) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = accepted
        .iter()
        .map(|candidate| (levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
