use topicmatch::{
    Keywords, Operator, ParenPolicy, ParseError, ParseOptions, Postfix, Token, parse, parse_with,
    tokenize,
};

fn postfix(rule: &str) -> String {
    parse(rule).unwrap().to_string()
}

fn strict() -> ParseOptions {
    ParseOptions::new().paren_policy(ParenPolicy::Strict)
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

#[test]
fn tokenize_splits_on_separators_and_parens() {
    let tokens = tokenize("centre AND (CityA OR CityB)", &Keywords::english()).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Operand("centre".to_owned()),
            Token::Operator(Operator::And),
            Token::Open,
            Token::Operand("citya".to_owned()),
            Token::Operator(Operator::Or),
            Token::Operand("cityb".to_owned()),
            Token::Close,
        ]
    );
}

#[test]
fn tokenize_parens_without_spaces() {
    let tokens = tokenize("(a)", &Keywords::english()).unwrap();
    assert_eq!(
        tokens,
        vec![Token::Open, Token::Operand("a".to_owned()), Token::Close]
    );
}

#[test]
fn tokenize_keywords_case_insensitive() {
    let tokens = tokenize("a and b Or NoT c", &Keywords::english()).unwrap();
    let ops: Vec<Operator> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Operator(op) => Some(*op),
            _ => None,
        })
        .collect();
    assert_eq!(ops, vec![Operator::And, Operator::Or, Operator::Not]);
}

#[test]
fn tokenize_punctuation_is_separator() {
    let tokens = tokenize("new-york, AND; paris!", &Keywords::english()).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Operand("new".to_owned()),
            Token::Operand("york".to_owned()),
            Token::Operator(Operator::And),
            Token::Operand("paris".to_owned()),
        ]
    );
}

#[test]
fn tokenize_underscore_and_digits_are_word_chars() {
    let tokens = tokenize("covid_19 OR g20", &Keywords::english()).unwrap();
    assert_eq!(tokens[0], Token::Operand("covid_19".to_owned()));
    assert_eq!(tokens[2], Token::Operand("g20".to_owned()));
}

#[test]
fn tokenize_empty_keywords_makes_everything_operand() {
    let tokens = tokenize("a AND b", &Keywords::empty()).unwrap();
    assert!(tokens.iter().all(|t| matches!(t, Token::Operand(_))));
    assert_eq!(tokens.len(), 3);
}

// ---------------------------------------------------------------------------
// Precedence and grouping
// ---------------------------------------------------------------------------

#[test]
fn parse_flagship_rule() {
    assert_eq!(
        postfix("centre AND (CityA OR CityB) AND NOT CityC"),
        "centre citya cityb OR AND cityc NOT AND"
    );
}

#[test]
fn parse_and_over_or() {
    assert_eq!(postfix("a OR b AND c"), "a b c AND OR");
    assert_eq!(postfix("a AND b OR c"), "a b AND c OR");
}

#[test]
fn parse_left_associative() {
    assert_eq!(postfix("a OR b OR c"), "a b OR c OR");
    assert_eq!(postfix("a AND b AND c AND d"), "a b AND c AND d AND");
}

#[test]
fn parse_not_binds_to_next_operand() {
    assert_eq!(postfix("NOT a AND b"), "a NOT b AND");
    assert_eq!(postfix("a OR NOT b"), "a b NOT OR");
}

#[test]
fn parse_not_of_group() {
    assert_eq!(postfix("NOT (a OR b)"), "a b OR NOT");
}

#[test]
fn parse_nested_groups() {
    assert_eq!(postfix("((a OR b) AND (c OR d))"), "a b OR c d OR AND");
    assert_eq!(postfix("a AND (b OR (c AND NOT d))"), "a b c d NOT AND OR AND");
}

#[test]
fn parse_operands_are_case_folded() {
    let parsed = parse("CityA OR cityb").unwrap();
    assert_eq!(parsed.operands(), vec!["citya", "cityb"]);
}

#[test]
fn parse_operands_deduplicated_in_first_seen_order() {
    let parsed = parse("b AND a OR b").unwrap();
    assert_eq!(parsed.operands(), vec!["b", "a"]);
}

#[test]
fn parse_is_deterministic() {
    let rule = "x AND NOT (y OR z) OR w";
    assert_eq!(parse(rule).unwrap(), parse(rule).unwrap());
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

#[test]
fn parse_russian_keywords() {
    let options = ParseOptions::new().keywords(Keywords::russian());
    let parsed = parse_with("центр и (Екатеринбург или Екб) и не Москва", &options).unwrap();
    assert_eq!(
        parsed.to_string(),
        "центр екатеринбург екб OR AND москва NOT AND"
    );
}

#[test]
fn parse_russian_keywords_case_insensitive() {
    let options = ParseOptions::new().keywords(Keywords::russian());
    assert_eq!(
        parse_with("а И б ИЛИ НЕ в", &options).unwrap().to_string(),
        "а б AND в NOT OR"
    );
}

#[test]
fn english_words_are_operands_under_russian_keywords() {
    let options = ParseOptions::new().keywords(Keywords::russian());
    let parsed = parse_with("and", &options).unwrap();
    assert_eq!(parsed.operands(), vec!["and"]);
}

#[test]
fn merged_keywords_accept_both_languages() {
    let keywords = Keywords::english().merge(Keywords::russian());
    let options = ParseOptions::new().keywords(keywords);
    assert_eq!(
        parse_with("a AND b или c", &options).unwrap().to_string(),
        "a b AND c OR"
    );
}

#[test]
fn custom_alias() {
    let keywords = Keywords::english().alias(Operator::Not, "without");
    let options = ParseOptions::new().keywords(keywords);
    assert_eq!(
        parse_with("sport AND without football", &options)
            .unwrap()
            .to_string(),
        "sport football NOT AND"
    );
}

// ---------------------------------------------------------------------------
// Parenthesis policy
// ---------------------------------------------------------------------------

#[test]
fn lenient_stray_close_flushes_stack() {
    assert_eq!(postfix("a AND b) OR c"), "a b AND c OR");
    assert_eq!(postfix("(a OR b)) AND c"), "a b OR c AND");
}

#[test]
fn lenient_stray_open_is_dropped() {
    assert_eq!(postfix("(a OR b"), "a b OR");
    assert_eq!(postfix("a AND (b OR c"), "a b c OR AND");
}

#[test]
fn strict_unmatched_close() {
    assert_eq!(
        parse_with("a AND b)", &strict()),
        Err(ParseError::UnmatchedClose { offset: 7 })
    );
}

#[test]
fn strict_unmatched_open_reports_outermost() {
    assert_eq!(
        parse_with("x OR ((a AND b)", &strict()),
        Err(ParseError::UnmatchedOpen { offset: 5 })
    );
}

#[test]
fn strict_offsets_are_bytes() {
    assert_eq!(
        parse_with("центр)", &strict()),
        Err(ParseError::UnmatchedClose { offset: 10 })
    );
}

#[test]
fn strict_accepts_balanced() {
    assert_eq!(
        parse_with("(a OR b) AND c", &strict()),
        parse("(a OR b) AND c")
    );
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn parse_empty_and_blank() {
    assert_eq!(parse("").unwrap(), Postfix::default());
    assert!(parse("   ").unwrap().is_empty());
    assert!(parse("?!,.").unwrap().is_empty());
    assert!(parse("()").unwrap().is_empty());
}

#[test]
fn parse_operator_only_rules_do_not_fail() {
    for rule in ["AND", "NOT", "OR OR", "a AND", "AND a"] {
        assert!(parse(rule).is_ok(), "rule {rule:?}");
        assert!(parse(rule).unwrap().validate().is_err(), "rule {rule:?}");
    }
}
