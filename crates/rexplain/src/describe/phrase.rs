//! Small English phrase helpers shared by the builders.

use rexplain_semantics as semantics;
use unicode_segmentation::UnicodeSegmentation;

/// Prefix an indefinite article unless the phrase supplies its own opening.
///
/// Phrases that already start uppercase, or with "the"/"where", are left
/// bare. Vowel-initial phrases (including "y") take "an".
pub(crate) fn with_article(phrase: &str) -> String {
    let Some(first) = phrase.chars().next() else {
        return String::new();
    };
    if first.is_uppercase() || phrase.starts_with("the ") || phrase.starts_with("where") {
        return phrase.to_string();
    }
    let article = if matches!(first.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y') {
        "an "
    } else {
        "a "
    };
    format!("{article}{phrase}")
}

/// Drop one leading indefinite article, if present.
pub(crate) fn strip_article(phrase: &str) -> &str {
    phrase
        .strip_prefix("an ")
        .or_else(|| phrase.strip_prefix("a "))
        .unwrap_or(phrase)
}

/// Turn a leading indefinite article into "the".
pub(crate) fn promote_article(phrase: &str) -> String {
    if let Some(rest) = phrase.strip_prefix("an ") {
        return format!("the {rest}");
    }
    if let Some(rest) = phrase.strip_prefix("a ") {
        return format!("the {rest}");
    }
    phrase.to_string()
}

/// Plural form of a phrase.
///
/// Quoted literals, phrases already ending in "s", and phrases beginning
/// with "any " or "the pattern" keep their shape.
pub(crate) fn pluralized(phrase: &str) -> String {
    if phrase.ends_with('s')
        || phrase.ends_with('"')
        || phrase.starts_with("any ")
        || phrase.starts_with("the pattern")
    {
        return phrase.to_string();
    }
    format!("{phrase}s")
}

pub(crate) fn starts_uppercase(phrase: &str) -> bool {
    phrase.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercase the first grapheme, leaving the rest untouched.
pub(crate) fn lowercase_first(phrase: &str) -> String {
    let mut graphemes = phrase.graphemes(true);
    match graphemes.next() {
        None => String::new(),
        Some(first) => format!("{}{}", first.to_lowercase(), graphemes.as_str()),
    }
}

/// Spelled-out ordinal, falling back to the digit string past the table.
pub(crate) fn ordinal_label(n: u32) -> String {
    semantics::ordinal(n).map_or_else(|| n.to_string(), ToString::to_string)
}

/// Spelled-out numeral, falling back to the digit string past the table.
pub(crate) fn numeral_label(n: u64) -> String {
    semantics::numeral(n).map_or_else(|| n.to_string(), ToString::to_string)
}
