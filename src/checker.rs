use crate::{Normalizer, ParseOptions, RuleReport, TermPresence, TopicMatchError};

/// Checks texts against topic rules using an injected [`Normalizer`].
///
/// The checker owns its normalizer and parse options. It holds no mutable
/// state, so one instance can serve many threads when `N` is `Sync`.
///
/// # Example
///
/// ```
/// use topicmatch::{Lowercase, RuleChecker};
///
/// let checker = RuleChecker::new(Lowercase);
/// let text = "The centre of CityA hosted an event yesterday.";
/// assert!(checker.check(text, "centre AND (CityA OR CityB) AND NOT CityC").unwrap());
/// assert!(!checker.check(text, "centre AND CityC").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleChecker<N> {
    normalizer: N,
    options: ParseOptions,
}

impl<N: Normalizer> RuleChecker<N> {
    #[must_use]
    pub fn new(normalizer: N) -> Self {
        Self::with_options(normalizer, ParseOptions::default())
    }

    #[must_use]
    pub fn with_options(normalizer: N, options: ParseOptions) -> Self {
        Self {
            normalizer,
            options,
        }
    }

    #[must_use]
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Build the term table for `text` with this checker's normalizer.
    #[must_use]
    pub fn presence(&self, text: &str) -> TermPresence {
        TermPresence::from_text(text, &self.normalizer)
    }

    /// Does `text` satisfy `rule`?
    ///
    /// # Errors
    ///
    /// Returns [`TopicMatchError::Parse`] or [`TopicMatchError::Eval`] when
    /// the rule is malformed.
    pub fn check(&self, text: &str, rule: &str) -> Result<bool, TopicMatchError> {
        let postfix = crate::parse::parse_with(rule, &self.options)?;
        let presence = self.presence(text);
        Ok(crate::evaluate::evaluate(&postfix, &presence)?)
    }

    /// Check `text` against every rule, building the term table once.
    ///
    /// A malformed rule yields an error report and the remaining rules are
    /// still checked.
    pub fn check_all<S: AsRef<str>>(&self, text: &str, rules: &[S]) -> Vec<RuleReport> {
        let presence = self.presence(text);
        rules
            .iter()
            .map(|rule| {
                let rule = rule.as_ref();
                let outcome = self.check_with(&presence, rule);
                if let Err(e) = &outcome {
                    tracing::warn!(rule, error = %e, "rule check failed");
                }
                RuleReport::new(rule, outcome)
            })
            .collect()
    }

    fn check_with(&self, presence: &TermPresence, rule: &str) -> Result<bool, TopicMatchError> {
        let postfix = crate::parse::parse_with(rule, &self.options)?;
        Ok(crate::evaluate::evaluate(&postfix, presence)?)
    }
}

/// One-shot check with default parse options.
///
/// Prefer a [`RuleChecker`] or [`RuleBook`](crate::RuleBook) when checking
/// many rules or texts.
///
/// # Errors
///
/// Returns [`TopicMatchError`] when the rule is malformed.
pub fn check_rule(
    text: &str,
    rule: &str,
    normalizer: &impl Normalizer,
) -> Result<bool, TopicMatchError> {
    let postfix = crate::parse::parse(rule)?;
    let presence = TermPresence::from_text(text, normalizer);
    Ok(crate::evaluate::evaluate(&postfix, &presence)?)
}
