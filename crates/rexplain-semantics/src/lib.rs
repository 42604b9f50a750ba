//! Shared English wording tables for regex descriptions.
//!
//! This crate centralizes every static phrase table so the generator and the
//! comparator resolve wording from one place and cannot drift apart. All
//! lookups are keyed by the literal token text the parser produced.

/// English name of an escape sequence, without article.
///
/// Covers the control escapes that have conventional names. `\b` is only
/// routed here when the parser tagged it as an escaped character (inside a
/// character set); as an anchor it resolves through [`anchor_phrase`].
pub fn escape_phrase(text: &str) -> Option<&'static str> {
    match text {
        r"\a" => Some("bell character"),
        r"\b" => Some("backspace character"),
        r"\t" => Some("tab character"),
        r"\r" => Some("carriage return character"),
        r"\v" => Some("vertical tab character"),
        r"\f" => Some("form feed character"),
        r"\n" => Some("new line character"),
        r"\e" => Some("escape character"),
        _ => None,
    }
}

/// English name of a punctuation or space character, without article.
pub fn character_name(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("space"),
        '!' => Some("exclamation mark"),
        '"' => Some("quotation mark"),
        '#' => Some("number sign"),
        '$' => Some("dollar sign"),
        '%' => Some("percent sign"),
        '&' => Some("ampersand"),
        '\'' => Some("apostrophe"),
        '(' => Some("opening parenthesis"),
        ')' => Some("closing parenthesis"),
        '*' => Some("asterisk"),
        '+' => Some("plus sign"),
        ',' => Some("comma"),
        '-' => Some("hyphen"),
        '.' => Some("period"),
        '/' => Some("forward slash"),
        ':' => Some("colon"),
        ';' => Some("semicolon"),
        '<' => Some("less-than sign"),
        '=' => Some("equals sign"),
        '>' => Some("greater-than sign"),
        '?' => Some("question mark"),
        '@' => Some("at sign"),
        '[' => Some("opening square bracket"),
        '\\' => Some("backslash"),
        ']' => Some("closing square bracket"),
        '^' => Some("caret"),
        '_' => Some("underscore"),
        '`' => Some("grave accent"),
        '{' => Some("opening curly brace"),
        '|' => Some("vertical bar"),
        '}' => Some("closing curly brace"),
        '~' => Some("tilde"),
        _ => None,
    }
}

/// Anchor phrase fragment, ready for a "Start at"/"End at"/"Match" prefix.
///
/// Fragments that begin with "where" take the bare "Start " prefix instead
/// of "Start at ".
pub fn anchor_phrase(text: &str) -> Option<&'static str> {
    match text {
        "^" => Some("the beginning of the input or line"),
        "$" => Some("the end of the input or line"),
        r"\A" => Some("the beginning of the input"),
        r"\Z" => Some("the end of the input, or before the new line at the end of the input"),
        r"\z" => Some("the very end of the input"),
        r"\G" => Some("where the previous match ended"),
        r"\b" => Some("where a word boundary occurs"),
        r"\B" => Some("where there is no word boundary"),
        _ => None,
    }
}

/// Singular name of a shorthand character class, without article.
pub fn char_class_phrase(text: &str) -> Option<&'static str> {
    match text {
        r"\d" => Some("digit"),
        r"\D" => Some("non-digit"),
        r"\w" => Some("word character"),
        r"\W" => Some("non-word character"),
        r"\s" => Some("white-space character"),
        r"\S" => Some("non-white-space character"),
        _ => None,
    }
}

/// Singular name of a Unicode general category or named block, keyed by the
/// identifier between the braces of `\p{...}`.
pub fn unicode_category_phrase(key: &str) -> Option<&'static str> {
    match key {
        "L" => Some("letter"),
        "Lu" => Some("uppercase letter"),
        "Ll" => Some("lowercase letter"),
        "Lt" => Some("title-case letter"),
        "N" => Some("number"),
        "Nd" => Some("decimal digit"),
        "P" => Some("punctuation mark"),
        "S" => Some("symbol"),
        "Sm" => Some("math symbol"),
        "Sc" => Some("currency symbol"),
        "Z" => Some("separator"),
        "Zs" => Some("space separator"),
        "C" => Some("control character"),
        "M" => Some("combining mark"),
        "IsBasicLatin" => Some("basic Latin character"),
        "IsGreek" => Some("Greek character"),
        "IsCyrillic" => Some("Cyrillic character"),
        "IsHebrew" => Some("Hebrew character"),
        "IsArabic" => Some("Arabic character"),
        _ => None,
    }
}

/// Name of a Unicode code point written as a backslash-u or backslash-x
/// hex sequence, without article or the trailing "character".
pub fn unicode_char_phrase(code_point: u32) -> Option<&'static str> {
    match code_point {
        0x0007 => Some("bell"),
        0x0008 => Some("backspace"),
        0x0009 => Some("tab"),
        0x000A => Some("new line"),
        0x000D => Some("carriage return"),
        0x001B => Some("escape"),
        0x0020 => Some("space"),
        0x00A0 => Some("no-break space"),
        0x00A3 => Some("pound sign"),
        0x00A5 => Some("yen sign"),
        0x00A9 => Some("copyright sign"),
        0x00AE => Some("registered sign"),
        0x00B0 => Some("degree sign"),
        0x2013 => Some("en dash"),
        0x2014 => Some("em dash"),
        0x2022 => Some("bullet"),
        0x20AC => Some("euro sign"),
        _ => None,
    }
}

/// Phrase for a single inline option flag, as used after "Using".
pub fn option_phrase(flag: char) -> Option<&'static str> {
    match flag {
        'i' => Some("case-insensitive matching"),
        'm' => Some("multiline matching"),
        's' => Some("single-line matching"),
        'n' => Some("explicit capture"),
        'x' => Some("pattern white-space ignoring"),
        _ => None,
    }
}

/// Connector fragment for a character-set control character.
pub fn set_connector_phrase(text: &str) -> Option<&'static str> {
    match text {
        "^" => Some("all characters except"),
        "-" => Some("except for"),
        _ => None,
    }
}

/// Suffix-form quantifier template: counts repetitions, appended after the
/// quantified phrase with a space.
pub fn quantifier_suffix(text: &str) -> Option<&'static str> {
    match text {
        "*" => Some("any number of times"),
        "*?" => Some("any number of times, but as few times as possible"),
        "+" => Some("one or more times"),
        "+?" => Some("one or more times, but as few times as possible"),
        "?" => Some("zero or one time"),
        "??" => Some("zero or one time, but as few times as possible"),
        _ => None,
    }
}

/// Long-form quantifier template: counts repetitions, comma-joined behind
/// the `{0}` placeholder.
pub fn quantifier_long(text: &str) -> Option<&'static str> {
    match text {
        "*" => Some("{0}, any number of times"),
        "*?" => Some("{0}, any number of times, but as few times as possible"),
        "+" => Some("{0}, one or more times"),
        "+?" => Some("{0}, one or more times, but as few times as possible"),
        "?" => Some("{0}, zero or one time"),
        "??" => Some("{0}, zero or one time, but as few times as possible"),
        _ => None,
    }
}

/// Short-form quantifier template: counts characters rather than
/// repetitions, with the pluralized item in the `{0}` placeholder.
pub fn quantifier_short(text: &str) -> Option<&'static str> {
    match text {
        "*" => Some("any number of {0}"),
        "*?" => Some("any number of {0}, but as few characters as possible"),
        "+" => Some("one or more {0}"),
        "+?" => Some("one or more {0}, but as few characters as possible"),
        "?" => Some("zero or one {0}"),
        "??" => Some("zero or one {0}, but as few characters as possible"),
        _ => None,
    }
}

/// Canned whole sentences for well-known token windows, keyed by the
/// concatenated source text of up to three consecutive tokens. Values carry
/// no trailing period; the sentence composer terminates them.
pub fn sentence_special(text: &str) -> Option<&'static str> {
    match text {
        "(.+)" => Some("Match any character one or more times"),
        "(.*)" => Some("Match any character any number of times"),
        r"\r\n" => Some("Match a carriage return character followed by a new line character"),
        r"\r?\n" => {
            Some("Match zero or one occurrence of a carriage return character followed by a new line character")
        }
        "[aeiou]" => Some("Match all vowels"),
        "[AEIOU]" => Some("Match all uppercase vowels"),
        "[0-9]" => Some("Match all digits"),
        "[a-z]" => Some("Match all lowercase letters"),
        "[A-Z]" => Some("Match all uppercase letters"),
        "[a-zA-Z]" => Some("Match all letters"),
        _ => None,
    }
}

/// Canned fragments for well-known whole character sets, keyed by the set's
/// full source text including brackets.
pub fn set_special(text: &str) -> Option<&'static str> {
    match text {
        "[aeiou]" => Some("all vowels"),
        "[AEIOU]" => Some("all uppercase vowels"),
        "[0-9]" => Some("all digits"),
        "[a-z]" => Some("all lowercase letters"),
        "[A-Z]" => Some("all uppercase letters"),
        "[a-zA-Z]" => Some("all letters"),
        _ => None,
    }
}

/// Spelled-out numeral for 0 through 10.
pub fn numeral(n: u64) -> Option<&'static str> {
    match n {
        0 => Some("zero"),
        1 => Some("one"),
        2 => Some("two"),
        3 => Some("three"),
        4 => Some("four"),
        5 => Some("five"),
        6 => Some("six"),
        7 => Some("seven"),
        8 => Some("eight"),
        9 => Some("nine"),
        10 => Some("ten"),
        _ => None,
    }
}

/// Spelled-out ordinal for 1 through 9.
pub fn ordinal(n: u32) -> Option<&'static str> {
    match n {
        1 => Some("first"),
        2 => Some("second"),
        3 => Some("third"),
        4 => Some("fourth"),
        5 => Some("fifth"),
        6 => Some("sixth"),
        7 => Some("seventh"),
        8 => Some("eighth"),
        9 => Some("ninth"),
        _ => None,
    }
}

/// Words the comparator discards before comparing two descriptions.
///
/// The two misspelled occurrence entries are deliberate; descriptions from
/// older generators contain them.
pub const STOP_WORDS: &[&str] = &[
    "a",
    "an",
    "the",
    "marks",
    "mark",
    "character",
    "characters",
    "either",
    "all",
    "any",
    "or",
    "and",
    "occurrences",
    "occurrence",
    "occurences",
    "occurence",
    "of",
    "at",
];

/// Anchor texts with table entries, for diagnostics and typo suggestions.
pub fn accepted_anchor_texts() -> &'static [&'static str] {
    &["^", "$", r"\A", r"\Z", r"\z", r"\G", r"\b", r"\B"]
}

/// Shorthand-class texts with table entries.
pub fn accepted_char_class_texts() -> &'static [&'static str] {
    &[r"\d", r"\D", r"\w", r"\W", r"\s", r"\S"]
}

/// Quantifier texts with template entries.
pub fn accepted_quantifier_texts() -> &'static [&'static str] {
    &["*", "*?", "+", "+?", "?", "??"]
}

/// Unicode category keys with table entries.
pub fn accepted_category_keys() -> &'static [&'static str] {
    &[
        "L", "Lu", "Ll", "Lt", "N", "Nd", "P", "S", "Sm", "Sc", "Z", "Zs", "C", "M",
        "IsBasicLatin", "IsGreek", "IsCyrillic", "IsHebrew", "IsArabic",
    ]
}

/// Option flags with table entries.
pub fn accepted_option_flags() -> &'static [&'static str] {
    &["i", "m", "s", "n", "x"]
}
