//! Document-level properties: reconstruction, idempotence, termination,
//! numbering monotonicity, and serialization round-trips.

use rexplain::{GroupKind, Mode, PatternItems, Token, TokenTag, generate};

fn lit(c: char) -> Token {
    Token::builder()
        .tag(TokenTag::LiteralChar)
        .text(c.to_string())
        .build()
}

fn class(text: &str) -> Token {
    Token::builder().tag(TokenTag::CharClass).text(text).build()
}

fn anchor(text: &str) -> Token {
    Token::builder()
        .tag(TokenTag::AnchorControl)
        .text(text)
        .build()
}

fn quantifier(text: &str, multiplying: bool) -> Token {
    Token::builder()
        .tag(TokenTag::Quantifier)
        .text(text)
        .is_multiplying(multiplying)
        .build()
}

fn gcc(text: &str) -> Token {
    Token::builder()
        .tag(TokenTag::GroupControlChar)
        .text(text)
        .build()
}

fn capturing(number: u32, body: Vec<Token>) -> Token {
    let mut items = vec![gcc("(")];
    items.extend(body);
    items.push(gcc(")"));
    let text: String = items.iter().map(|t| t.text.as_str()).collect();
    Token::builder()
        .tag(TokenTag::Group)
        .text(text)
        .items(items)
        .group_kind(GroupKind::Capturing)
        .group_number(number)
        .build()
}

/// A composite pattern touching anchors, groups, classes, quantifiers, and
/// literals: `^(\w+)@\d+;.*$` spread over several sentences.
fn composite() -> Vec<Token> {
    vec![
        anchor("^"),
        capturing(1, vec![class("\\w"), quantifier("+", true)]),
        lit('@'),
        class("\\d"),
        quantifier("+", true),
        lit(';'),
        Token::builder().tag(TokenTag::DotChar).text(".").build(),
        quantifier("*", true),
        anchor("$"),
    ]
}

#[test]
fn output_text_reconstructs_the_input() {
    let tokens = composite();
    let source: String = tokens.iter().map(|t| t.text.as_str()).collect();
    let items = generate(&tokens, Mode::Search).unwrap();
    assert_eq!(items.text(), source);
}

#[test]
fn generation_is_idempotent() {
    let tokens = composite();
    let first = generate(&tokens, Mode::Search).unwrap();
    let second = generate(&tokens, Mode::Search).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_description_ends_with_one_period() {
    let items = generate(&composite(), Mode::Search).unwrap();
    for item in &items {
        assert!(
            item.description.ends_with('.') && !item.description.ends_with(".."),
            "bad termination: {:?}",
            item.description
        );
    }
}

#[test]
fn group_numbers_appear_in_increasing_order() {
    let tokens = [
        capturing(1, vec![lit('a')]),
        capturing(2, vec![lit('b')]),
        capturing(3, vec![lit('c')]),
    ];
    let items = generate(&tokens, Mode::Search).unwrap();
    let document = items.to_string();
    let first = document.find("first capturing group").unwrap();
    let second = document.find("second capturing group").unwrap();
    let third = document.find("third capturing group").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn document_snapshot() {
    let tokens = [anchor("^"), class("\\d"), quantifier("+", true), anchor("$")];
    let items = generate(&tokens, Mode::Search).unwrap();
    insta::assert_snapshot!(
        items.to_string(),
        @"Start at the beginning of the input or line. Match one or more digits. End at the end of the input or line."
    );
}

// =============================================================================
// Serialization round-trips
// =============================================================================

#[test]
fn token_trees_round_trip_through_json() {
    let tokens = composite();
    let json = serde_json::to_string(&tokens).unwrap();
    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(tokens, back);
}

#[test]
fn documents_round_trip_through_json() {
    let items = generate(&composite(), Mode::Search).unwrap();
    let json = serde_json::to_string(&items).unwrap();
    let back: PatternItems = serde_json::from_str(&json).unwrap();
    assert_eq!(items, back);
}

#[test]
fn sparse_token_json_deserializes_with_defaults() {
    let token: Token = serde_json::from_str(r#"{"tag":"LiteralChar","text":"a"}"#).unwrap();
    assert_eq!(token.text, "a");
    assert!(token.items.is_empty());
    assert!(!token.is_multiplying);
    assert!(token.group_kind.is_none());
}
