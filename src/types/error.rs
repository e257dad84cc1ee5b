use thiserror::Error;

use super::token::Operator;

/// Structural failures of a postfix program.
///
/// These point at a malformed rule (or a parser bug), never at the text being
/// checked: a term missing from the text is simply `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("operator {operator} at position {position} has too few operands")]
    StackUnderflow { operator: Operator, position: usize },

    #[error("{count} values left on the stack; sub-expressions are missing a combining operator")]
    LeftoverOperands { count: usize },

    #[error("empty expression")]
    EmptyExpression,
}
