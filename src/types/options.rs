use std::collections::HashMap;

use super::token::Operator;

/// The words recognised as operators in a rule.
///
/// Matching is case-insensitive: aliases are stored case-folded and rule
/// words are case-folded before lookup.
///
/// # Example
///
/// ```
/// use topicmatch::{Keywords, Operator};
///
/// let keywords = Keywords::english().alias(Operator::And, "plus");
/// assert_eq!(keywords.lookup("plus"), Some(Operator::And));
/// assert_eq!(keywords.lookup("AND"), Some(Operator::And));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    words: HashMap<String, Operator>,
}

impl Keywords {
    /// No operator words at all. Every word is an operand.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// `and`, `or`, `not`.
    #[must_use]
    pub fn english() -> Self {
        Self::empty()
            .alias(Operator::And, "and")
            .alias(Operator::Or, "or")
            .alias(Operator::Not, "not")
    }

    /// `и`, `или`, `не`.
    #[must_use]
    pub fn russian() -> Self {
        Self::empty()
            .alias(Operator::And, "и")
            .alias(Operator::Or, "или")
            .alias(Operator::Not, "не")
    }

    /// Register `word` as an operator keyword. A later alias for the same word
    /// replaces the earlier one.
    #[must_use]
    pub fn alias(mut self, op: Operator, word: &str) -> Self {
        self.words.insert(word.to_lowercase(), op);
        self
    }

    /// Combine two vocabularies. Entries from `other` win on conflict.
    #[must_use]
    pub fn merge(mut self, other: Keywords) -> Self {
        self.words.extend(other.words);
        self
    }

    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Operator> {
        if let Some(op) = self.words.get(word) {
            return Some(*op);
        }
        self.words.get(&word.to_lowercase()).copied()
    }

    /// All keywords mapped to `op`, sorted.
    #[must_use]
    pub fn words_for(&self, op: Operator) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, o)| **o == op)
            .map(|(w, _)| w.as_str())
            .collect();
        words.sort_unstable();
        words
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::english()
    }
}

/// How the parser treats parentheses that have no partner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParenPolicy {
    /// A stray `)` flushes the operator stack and is ignored; a `(` still
    /// open at the end is dropped. Both are logged at `warn`.
    #[default]
    Lenient,
    /// Any unmatched parenthesis is a [`ParseError`](crate::parse::ParseError).
    Strict,
}

/// Parser configuration.
///
/// # Example
///
/// ```
/// use topicmatch::{Keywords, ParenPolicy, ParseOptions};
///
/// let options = ParseOptions::new()
///     .keywords(Keywords::russian())
///     .paren_policy(ParenPolicy::Strict);
/// assert_eq!(options.parens(), ParenPolicy::Strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    keywords: Keywords,
    parens: ParenPolicy,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn paren_policy(mut self, parens: ParenPolicy) -> Self {
        self.parens = parens;
        self
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Keywords {
        &self.keywords
    }

    #[must_use]
    pub fn parens(&self) -> ParenPolicy {
        self.parens
    }
}
