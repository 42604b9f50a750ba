//! Character-set and character-range composition.

use rexplain::{Mode, Token, TokenTag, generate};

fn lit(c: char) -> Token {
    Token::builder()
        .tag(TokenTag::LiteralChar)
        .text(c.to_string())
        .build()
}

fn class(text: &str) -> Token {
    Token::builder().tag(TokenTag::CharClass).text(text).build()
}

fn csc(text: &str) -> Token {
    Token::builder()
        .tag(TokenTag::CharSetControlChar)
        .text(text)
        .build()
}

fn char_set(body: Vec<Token>) -> Token {
    let mut items = vec![csc("[")];
    items.extend(body);
    items.push(csc("]"));
    let text: String = items.iter().map(|t| t.text.as_str()).collect();
    Token::builder()
        .tag(TokenTag::CharSet)
        .text(text)
        .items(items)
        .build()
}

fn range(lo: char, hi: char) -> Token {
    let items = vec![lit(lo), csc("-"), lit(hi)];
    Token::builder()
        .tag(TokenTag::CharRange)
        .text(format!("{lo}-{hi}"))
        .items(items)
        .build()
}

fn describe_one(tokens: &[Token]) -> String {
    let items = generate(tokens, Mode::Search).unwrap();
    assert_eq!(items.len(), 1);
    items[0].description.clone()
}

// =============================================================================
// Plain alternatives
// =============================================================================

#[test]
fn three_literals_join_with_or() {
    let set = char_set("abc".chars().map(lit).collect());
    assert_eq!(describe_one(&[set]), "Match \"a\" or \"b\" or \"c\".");
}

#[test]
fn two_literals_read_as_either() {
    let set = char_set("ab".chars().map(lit).collect());
    assert_eq!(describe_one(&[set]), "Match either \"a\" or \"b\".");
}

#[test]
fn literal_and_class_mix() {
    let set = char_set(vec![lit('a'), class("\\d")]);
    assert_eq!(describe_one(&[set]), "Match either \"a\" or all digits.");
}

// =============================================================================
// "all ..." phrases merge with "and"
// =============================================================================

#[test]
fn classes_merge_under_one_all() {
    let set = char_set(vec![class("\\d"), class("\\s")]);
    assert_eq!(
        describe_one(&[set]),
        "Match all digits and white-space characters."
    );
}

// =============================================================================
// Negation and subtraction splice onto the previous phrase
// =============================================================================

#[test]
fn negated_set() {
    let set = char_set(vec![csc("^"), lit('a'), lit('b')]);
    assert_eq!(
        describe_one(&[set]),
        "Match all characters except \"a\" or \"b\"."
    );
}

#[test]
fn negated_class_drops_the_doubled_all() {
    let set = char_set(vec![csc("^"), class("\\d")]);
    assert_eq!(describe_one(&[set]), "Match all characters except digits.");
}

#[test]
fn subtracted_set() {
    let vowels = char_set("aeiou".chars().map(lit).collect());
    let set = char_set(vec![range('a', 'z'), csc("-"), vowels]);
    assert_eq!(
        describe_one(&[set]),
        "Match any lowercase character from \"a\" to \"z\" except for vowels."
    );
}

// =============================================================================
// Ranges
// =============================================================================

#[test]
fn caseless_range() {
    let set = char_set(vec![range('0', '5')]);
    assert_eq!(
        describe_one(&[set]),
        "Match any character from \"0\" to \"5\"."
    );
}

#[test]
fn same_case_range_hoists_the_case() {
    let set = char_set(vec![range('b', 'd')]);
    assert_eq!(
        describe_one(&[set]),
        "Match any lowercase character from \"b\" to \"d\"."
    );
}

#[test]
fn mixed_case_range_annotates_each_endpoint() {
    let set = char_set(vec![range('a', 'Z')]);
    assert_eq!(
        describe_one(&[set]),
        "Match any character from lowercase \"a\" to uppercase \"Z\"."
    );
}

#[test]
fn two_ranges_read_as_either() {
    let set = char_set(vec![range('b', 'd'), range('X', 'Z')]);
    assert_eq!(
        describe_one(&[set]),
        "Match either any lowercase character from \"b\" to \"d\" or any uppercase \
         character from \"X\" to \"Z\"."
    );
}
