use thiserror::Error;

use crate::EvalError;
use crate::parse::ParseError;

/// Unified error type covering parsing, evaluation, and I/O.
///
/// Returned by [`RuleChecker::check()`](crate::RuleChecker::check) and by the
/// [`RuleBook`](crate::RuleBook) constructors.
#[derive(Debug, Error)]
pub enum TopicMatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("rule {line} ({rule:?}): {source}")]
    Rule {
        line: usize,
        rule: String,
        source: Box<TopicMatchError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "binary-cache")]
    #[error(transparent)]
    Serialize(#[from] crate::serial::SerializeError),

    #[cfg(feature = "binary-cache")]
    #[error(transparent)]
    Deserialize(#[from] crate::serial::DeserializeError),
}

impl TopicMatchError {
    pub(crate) fn rule(line: usize, rule: &str, source: TopicMatchError) -> Self {
        TopicMatchError::Rule {
            line,
            rule: rule.to_owned(),
            source: Box::new(source),
        }
    }
}
