mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::is_word_char;

use winnow::Parser;
use winnow::stream::LocatingSlice;

use crate::{Keywords, ParseOptions, Postfix, Token};

use self::lexer::{Lexeme, Spanned};

/// Parse a rule string into postfix order with the default options
/// (English keywords, lenient parentheses).
///
/// # Errors
///
/// Never fails under the default options; see [`parse_with`].
///
/// # Example
///
/// ```
/// let postfix = topicmatch::parse("a OR b AND c").unwrap();
/// assert_eq!(postfix.to_string(), "a b c AND OR");
/// ```
pub fn parse(rule: &str) -> Result<Postfix, ParseError> {
    parse_with(rule, &ParseOptions::default())
}

/// Parse a rule string into postfix order.
///
/// # Errors
///
/// Returns [`ParseError`] for unmatched parentheses when the options ask
/// for [`ParenPolicy::Strict`](crate::ParenPolicy::Strict).
pub fn parse_with(rule: &str, options: &ParseOptions) -> Result<Postfix, ParseError> {
    let tokens = classify(lex(rule)?, options.vocabulary());
    let postfix = parser::to_postfix(tokens, options.parens())?;
    tracing::debug!(rule, postfix = %postfix, "parsed rule");
    Ok(postfix)
}

/// Split a rule into tokens, resolving operator keywords.
///
/// Operands come back case-folded.
///
/// # Errors
///
/// Returns [`ParseError::Lex`] if the rule cannot be scanned.
pub fn tokenize(rule: &str, keywords: &Keywords) -> Result<Vec<Token>, ParseError> {
    Ok(classify(lex(rule)?, keywords)
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

fn lex(rule: &str) -> Result<Vec<Spanned<'_>>, ParseError> {
    lexer::lexemes
        .parse(LocatingSlice::new(rule))
        .map_err(|e| ParseError::Lex {
            offset: e.offset(),
            message: e.inner().to_string(),
        })
}

fn classify(lexemes: Vec<Spanned<'_>>, keywords: &Keywords) -> Vec<(Token, usize)> {
    lexemes
        .into_iter()
        .map(|Spanned { lexeme, offset }| {
            let token = match lexeme {
                Lexeme::Open => Token::Open,
                Lexeme::Close => Token::Close,
                Lexeme::Word(word) => {
                    let folded = word.to_lowercase();
                    match keywords.lookup(&folded) {
                        Some(op) => Token::Operator(op),
                        None => Token::Operand(folded),
                    }
                }
            };
            (token, offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operator, ParenPolicy};

    #[test]
    fn tokenize_folds_case_and_resolves_keywords() {
        let tokens = tokenize("Centre And NOT CityC", &Keywords::english()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operand("centre".into()),
                Token::Operator(Operator::And),
                Token::Operator(Operator::Not),
                Token::Operand("cityc".into()),
            ]
        );
    }

    #[test]
    fn foreign_keywords_are_operands() {
        let tokens = tokenize("a и b", &Keywords::english()).unwrap();
        assert_eq!(tokens[1], Token::Operand("и".into()));
    }

    #[test]
    fn parse_precedence() {
        assert_eq!(parse("a OR b AND c").unwrap().to_string(), "a b c AND OR");
    }

    #[test]
    fn parse_grouping() {
        assert_eq!(parse("(a OR b) AND c").unwrap().to_string(), "a b OR c AND");
    }

    #[test]
    fn parse_not_binds_tightest() {
        assert_eq!(parse("NOT a AND b").unwrap().to_string(), "a NOT b AND");
        assert_eq!(parse("a AND NOT b").unwrap().to_string(), "a b NOT AND");
    }

    #[test]
    fn parse_russian_keywords() {
        let options = ParseOptions::new().keywords(Keywords::russian());
        let postfix = parse_with("Центр и (Екатеринбург или Екб) и не Москва", &options).unwrap();
        assert_eq!(
            postfix.to_string(),
            "центр екатеринбург екб OR AND москва NOT AND"
        );
    }

    #[test]
    fn strict_offsets_point_into_rule() {
        let options = ParseOptions::new().paren_policy(ParenPolicy::Strict);
        assert_eq!(
            parse_with("a AND b)", &options),
            Err(ParseError::UnmatchedClose { offset: 7 })
        );
        assert_eq!(
            parse_with("a AND (b", &options),
            Err(ParseError::UnmatchedOpen { offset: 6 })
        );
    }

    #[test]
    fn lenient_never_fails_on_parens() {
        assert!(parse(")) a ((").is_ok());
    }

    #[test]
    fn parse_is_deterministic() {
        let rule = "centre AND (CityA OR CityB) AND NOT CityC";
        assert_eq!(parse(rule).unwrap(), parse(rule).unwrap());
    }
}
