use std::fmt;

use super::normalizer::Normalizer;
use super::options::ParseOptions;
use super::postfix::Postfix;
use super::report::RuleReport;
use crate::{RuleChecker, TopicMatchError};

/// A rule whose source text has been parsed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    pub(crate) source: String,
    pub(crate) postfix: Postfix,
}

impl CompiledRule {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }
}

/// Builder for a [`RuleBook`].
///
/// # Example
///
/// ```
/// use topicmatch::{Keywords, ParseOptions, RuleBookBuilder};
///
/// let book = RuleBookBuilder::new()
///     .options(ParseOptions::new().keywords(Keywords::russian()))
///     .rule("центр и (екатеринбург или екб) и не москва")
///     .rule("центр и москва")
///     .compile()
///     .unwrap();
/// assert_eq!(book.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RuleBookBuilder {
    rules: Vec<String>,
    options: ParseOptions,
}

impl RuleBookBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn rule(mut self, source: &str) -> Self {
        self.rules.push(source.to_owned());
        self
    }

    /// Parse and validate every rule.
    ///
    /// # Errors
    ///
    /// Returns [`TopicMatchError::Rule`] for the first rule that fails to
    /// parse or is not a well-formed expression. `line` is the rule's
    /// 1-based position.
    pub fn compile(self) -> Result<RuleBook, TopicMatchError> {
        RuleBook::from_rules(self.rules.iter().map(String::as_str), &self.options)
    }
}

/// An ordered collection of parsed rules, checked together against a text.
///
/// Immutable after construction and safe to share behind `Arc`. Rules are
/// parsed once; evaluating the book builds the term table for the text once
/// and runs every rule over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBook {
    pub(crate) rules: Vec<CompiledRule>,
}

impl RuleBook {
    /// Parse and validate `rules` in order.
    ///
    /// # Errors
    ///
    /// Returns [`TopicMatchError::Rule`] for the first failing rule, with its
    /// 1-based position as `line`.
    pub fn from_rules<'a>(
        rules: impl IntoIterator<Item = &'a str>,
        options: &ParseOptions,
    ) -> Result<Self, TopicMatchError> {
        Self::compile_numbered(
            rules.into_iter().enumerate().map(|(i, r)| (i + 1, r)),
            options,
        )
    }

    /// Parse a rule file: one rule per line, blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TopicMatchError::Rule`] naming the file line of the first
    /// failing rule.
    pub fn from_text(input: &str, options: &ParseOptions) -> Result<Self, TopicMatchError> {
        let numbered = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));
        Self::compile_numbered(numbered, options)
    }

    /// Read a rule file and parse it with [`from_text`](Self::from_text).
    ///
    /// # Errors
    ///
    /// Returns [`TopicMatchError`] on I/O or rule failure.
    pub fn from_file(
        path: impl AsRef<std::path::Path>,
        options: &ParseOptions,
    ) -> Result<Self, TopicMatchError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_text(&input, options)
    }

    fn compile_numbered<'a>(
        rules: impl Iterator<Item = (usize, &'a str)>,
        options: &ParseOptions,
    ) -> Result<Self, TopicMatchError> {
        let mut compiled = Vec::new();
        for (line, source) in rules {
            let postfix = crate::parse::parse_with(source, options)
                .map_err(|e| TopicMatchError::rule(line, source, e.into()))?;
            postfix
                .validate()
                .map_err(|e| TopicMatchError::rule(line, source, e.into()))?;
            compiled.push(CompiledRule {
                source: source.to_owned(),
                postfix,
            });
        }
        tracing::debug!(rules = compiled.len(), "compiled rule book");
        Ok(Self { rules: compiled })
    }

    /// Check every rule against `text`, in order.
    pub fn evaluate<N: Normalizer>(&self, checker: &RuleChecker<N>, text: &str) -> Vec<RuleReport> {
        let presence = checker.presence(text);
        self.rules
            .iter()
            .map(|rule| {
                let outcome = crate::evaluate::evaluate(&rule.postfix, &presence)
                    .map_err(TopicMatchError::from);
                RuleReport::new(rule.source.as_str(), outcome)
            })
            .collect()
    }

    /// Source text of every rule that matches `text`.
    #[must_use]
    pub fn matching<N: Normalizer>(&self, checker: &RuleChecker<N>, text: &str) -> Vec<&str> {
        let presence = checker.presence(text);
        self.rules
            .iter()
            .filter(|rule| crate::evaluate::evaluate(&rule.postfix, &presence) == Ok(true))
            .map(|rule| rule.source.as_str())
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CompiledRule> {
        self.rules.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(feature = "binary-cache")]
impl RuleBook {
    /// Serialize the parsed rules to a self-checking binary blob.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`](crate::serial::SerializeError) if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, crate::serial::SerializeError> {
        crate::serial::encode(self)
    }

    /// Load a rule book previously produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`](crate::serial::DeserializeError) on
    /// format, integrity, or validation failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, crate::serial::DeserializeError> {
        crate::serial::decode(bytes)
    }

    /// # Errors
    ///
    /// Returns [`SerializeError`](crate::serial::SerializeError) on
    /// encoding or I/O failure.
    pub fn to_binary_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), crate::serial::SerializeError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`DeserializeError`](crate::serial::DeserializeError) on
    /// I/O, format, integrity, or validation failure.
    pub fn from_binary_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, crate::serial::DeserializeError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl<'a> IntoIterator for &'a RuleBook {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleBook({} rules)", self.rules.len())
    }
}
