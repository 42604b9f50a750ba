//! Equality comparison between two generated documents.
//!
//! Comparison is deliberately forgiving about surface form: only the first
//! sentence of each description is considered, punctuation and filler words
//! are discarded, and plural endings are folded away. The goal is to catch
//! semantic drift between generator versions, not wording drift.

use rexplain_semantics::STOP_WORDS;

use crate::types::PatternItems;

/// Compare two documents item by item.
///
/// Each pair must cover the same source text and normalize to the same word
/// list. As a side effect the verdict for every compared pair is recorded
/// into `ours[i].is_ok`; `theirs` is never touched. Returns false when the
/// item counts differ or any pair disagrees.
pub fn are_equal(ours: &mut PatternItems, theirs: &PatternItems) -> bool {
    let mut equal = ours.len() == theirs.len();
    let pairs = ours.len().min(theirs.len());
    for i in 0..pairs {
        let pair_ok = ours[i].text == theirs[i].text
            && normalized_words(&ours[i].description) == normalized_words(&theirs[i].description);
        ours[i].is_ok = Some(pair_ok);
        equal = equal && pair_ok;
    }
    equal
}

/// Reduce a description to its comparable word list.
///
/// Truncates after the first period, maps hyphens to spaces, drops all
/// other punctuation, lowercases, removes stop words, and singularizes a
/// trailing "es"/"s" on each remaining word.
fn normalized_words(description: &str) -> Vec<String> {
    let first_sentence = match description.find('.') {
        Some(end) => &description[..=end],
        None => description,
    };

    let mut cleaned = String::with_capacity(first_sentence.len());
    for c in first_sentence.chars() {
        if c == '-' {
            cleaned.push(' ');
        } else if c.is_alphanumeric() || c.is_whitespace() {
            cleaned.extend(c.to_lowercase());
        }
    }

    cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(|word| {
            word.strip_suffix("es")
                .or_else(|| word.strip_suffix('s'))
                .unwrap_or(word)
                .to_string()
        })
        .collect()
}
