mod error;
mod normalizer;
mod options;
mod postfix;
mod presence;
mod report;
mod rulebook;
mod token;

pub use error::EvalError;
pub use normalizer::{Lowercase, Normalizer};
pub use options::{Keywords, ParenPolicy, ParseOptions};
pub use postfix::{Postfix, PostfixToken};
pub use presence::{TermPresence, extract_terms};
pub use report::RuleReport;
pub use rulebook::{CompiledRule, RuleBook, RuleBookBuilder};
pub use token::{Operator, Token};
