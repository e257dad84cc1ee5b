use std::fmt;

use crate::TopicMatchError;

/// The outcome of checking one rule against one text.
///
/// Batch checks return one report per rule so that a malformed rule is
/// reported next to its source text instead of aborting the batch.
#[derive(Debug)]
#[must_use]
pub struct RuleReport {
    rule: String,
    outcome: Result<bool, TopicMatchError>,
}

impl RuleReport {
    pub fn new(rule: impl Into<String>, outcome: Result<bool, TopicMatchError>) -> Self {
        Self {
            rule: rule.into(),
            outcome,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn outcome(&self) -> &Result<bool, TopicMatchError> {
        &self.outcome
    }

    /// `true` only for a successful evaluation that matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        matches!(self.outcome, Ok(true))
    }

    #[must_use]
    pub fn error(&self) -> Option<&TopicMatchError> {
        self.outcome.as_ref().err()
    }

    pub fn into_outcome(self) -> Result<bool, TopicMatchError> {
        self.outcome
    }
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(true) => write!(f, "{} => match", self.rule),
            Ok(false) => write!(f, "{} => no match", self.rule),
            Err(e) => write!(f, "{} => error: {e}", self.rule),
        }
    }
}
