//! Quantifier phrasing: template families, numeric bounds, laziness, and
//! the dot-star scan.

use rexplain::{GroupKind, Mode, Token, TokenTag, generate};

fn lit(c: char) -> Token {
    Token::builder()
        .tag(TokenTag::LiteralChar)
        .text(c.to_string())
        .build()
}

fn class(text: &str) -> Token {
    Token::builder().tag(TokenTag::CharClass).text(text).build()
}

fn dot() -> Token {
    Token::builder().tag(TokenTag::DotChar).text(".").build()
}

fn quantifier(text: &str, multiplying: bool) -> Token {
    Token::builder()
        .tag(TokenTag::Quantifier)
        .text(text)
        .is_multiplying(multiplying)
        .build()
}

fn number(text: &str) -> Token {
    Token::builder().tag(TokenTag::Number).text(text).build()
}

fn bounded(text: &str, low: &str, high: Option<&str>, multiplying: bool) -> Token {
    Token::builder()
        .tag(TokenTag::Quantifier)
        .text(text)
        .is_multiplying(multiplying)
        .low_limit(Box::new(number(low)))
        .maybe_high_limit(high.map(|h| Box::new(number(h))))
        .build()
}

fn gcc(text: &str) -> Token {
    Token::builder()
        .tag(TokenTag::GroupControlChar)
        .text(text)
        .build()
}

fn capturing(group_number: u32, body: Vec<Token>) -> Token {
    let mut items = vec![gcc("(")];
    items.extend(body);
    items.push(gcc(")"));
    let text: String = items.iter().map(|t| t.text.as_str()).collect();
    Token::builder()
        .tag(TokenTag::Group)
        .text(text)
        .items(items)
        .group_kind(GroupKind::Capturing)
        .group_number(group_number)
        .build()
}

fn describe_one(tokens: &[Token]) -> String {
    let items = generate(tokens, Mode::Search).unwrap();
    assert_eq!(items.len(), 1);
    items[0].description.clone()
}

// =============================================================================
// Long form: counts repetitions, comma-joined
// =============================================================================

#[test]
fn literal_plus_reads_long_form() {
    assert_eq!(
        describe_one(&[lit('a'), quantifier("+", true)]),
        "Match literal character \"a\", one or more times."
    );
}

#[test]
fn literal_question_mark_reads_long_form() {
    assert_eq!(
        describe_one(&[lit('a'), quantifier("?", false)]),
        "Match literal character \"a\", zero or one time."
    );
}

// =============================================================================
// Short form: counts characters
// =============================================================================

#[test]
fn class_plus_counts_characters() {
    assert_eq!(
        describe_one(&[class("\\d"), quantifier("+", true)]),
        "Match one or more digits."
    );
}

#[test]
fn class_star_counts_characters() {
    assert_eq!(
        describe_one(&[class("\\d"), quantifier("*", true)]),
        "Match any number of digits."
    );
}

#[test]
fn class_question_mark_stays_singular() {
    assert_eq!(
        describe_one(&[class("\\d"), quantifier("?", false)]),
        "Match zero or one digit."
    );
}

#[test]
fn lazy_class_counts_characters() {
    assert_eq!(
        describe_one(&[class("\\d"), quantifier("+?", true)]),
        "Match one or more digits, but as few characters as possible."
    );
}

#[test]
fn single_class_group_counts_characters() {
    let group = capturing(1, vec![class("\\d")]);
    assert_eq!(
        describe_one(&[group, quantifier("+", true)]),
        "Match one or more digits. This is the first capturing group."
    );
}

// =============================================================================
// Capturing groups: suffix form, long form with nesting
// =============================================================================

#[test]
fn flat_group_takes_the_suffix_form() {
    let body = Token::builder()
        .tag(TokenTag::LiteralString)
        .text("abc")
        .build();
    let group = capturing(1, vec![body]);
    assert_eq!(
        describe_one(&[group, quantifier("+", true)]),
        "Match the literal characters \"abc\" one or more times. This is the first capturing group."
    );
}

#[test]
fn nested_group_takes_the_long_form() {
    let inner = capturing(2, vec![lit('a')]);
    let outer = capturing(1, vec![inner, lit('b')]);
    assert_eq!(
        describe_one(&[outer, quantifier("+", true)]),
        "Match the pattern of a literal character \"a\" followed by a literal character \"b\", \
         one or more times. This is the first capturing group. This expression also defines \
         the second capturing group."
    );
}

// =============================================================================
// Numeric bounds
// =============================================================================

#[test]
fn exact_count_spelled_out() {
    assert_eq!(
        describe_one(&[class("\\w"), bounded("{3}", "3", None, true)]),
        "Match word characters exactly three times."
    );
}

#[test]
fn exact_count_of_one_stays_singular() {
    assert_eq!(
        describe_one(&[lit('a'), bounded("{1}", "1", None, false)]),
        "Match literal character \"a\", exactly one time."
    );
}

#[test]
fn open_ended_count() {
    assert_eq!(
        describe_one(&[lit('a'), bounded("{2,}", "2", None, true)]),
        "Match literal character \"a\", at least two times."
    );
}

#[test]
fn bounded_range_count() {
    assert_eq!(
        describe_one(&[lit('a'), bounded("{2,5}", "2", Some("5"), true)]),
        "Match literal character \"a\", between two and five times."
    );
}

#[test]
fn lazy_bounded_range() {
    assert_eq!(
        describe_one(&[lit('a'), bounded("{2,5}?", "2", Some("5"), true)]),
        "Match literal character \"a\", between two and five times, but as few times as possible."
    );
}

#[test]
fn counts_past_the_numeral_table_render_as_digits() {
    assert_eq!(
        describe_one(&[lit('a'), bounded("{12}", "12", None, true)]),
        "Match literal character \"a\", exactly 12 times."
    );
}

// =============================================================================
// The dot-star scan
// =============================================================================

#[test]
fn dot_star_scans_until_the_next_item() {
    assert_eq!(
        describe_one(&[dot(), quantifier("*", true), lit(';')]),
        "Match any character until a semicolon."
    );
}

#[test]
fn dot_star_scan_keeps_the_next_quantifier() {
    assert_eq!(
        describe_one(&[dot(), quantifier("*", true), class("\\d"), quantifier("+", true)]),
        "Match any character until one or more digits."
    );
}

#[test]
fn trailing_dot_star_falls_back_to_the_long_form() {
    assert_eq!(
        describe_one(&[dot(), quantifier("*", true)]),
        "Match any character, any number of times."
    );
}

// =============================================================================
// Pluralization guards
// =============================================================================

#[test]
fn captured_strings_do_not_pluralize() {
    let backref = Token::builder().tag(TokenTag::BackRef).text("\\1").build();
    assert_eq!(
        describe_one(&[backref, quantifier("+", true)]),
        "Match the string captured in the first capturing group, one or more times."
    );
}
