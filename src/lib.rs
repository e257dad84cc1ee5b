//! Boolean topic rules over free text.
//!
//! A rule such as `centre AND (CityA OR CityB) AND NOT CityC` is parsed once
//! into postfix order and evaluated against the set of canonical terms found
//! in a text. Word normalization is supplied by the caller through the
//! [`Normalizer`] trait.
//!
//! ```
//! use topicmatch::{Lowercase, RuleChecker};
//!
//! let checker = RuleChecker::new(Lowercase);
//! let matched = checker
//!     .check("The centre of CityA hosted an event.", "centre AND NOT CityC")
//!     .unwrap();
//! assert!(matched);
//! ```

mod checker;
mod error;
mod evaluate;
pub mod parse;
#[cfg(feature = "binary-cache")]
pub mod serial;
mod types;

pub use checker::{RuleChecker, check_rule};
pub use error::TopicMatchError;
pub use evaluate::evaluate;
pub use parse::{ParseError, parse, parse_with, tokenize};
#[cfg(feature = "binary-cache")]
pub use serial::{DeserializeError, SerializeError};
pub use types::{
    CompiledRule, EvalError, Keywords, Lowercase, Normalizer, Operator, ParenPolicy,
    ParseOptions, Postfix, PostfixToken, RuleBook, RuleBookBuilder, RuleReport, TermPresence,
    Token, extract_terms,
};
