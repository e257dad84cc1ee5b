use crate::{EvalError, Postfix, PostfixToken, TermPresence};

/// Run a postfix program against a term table.
///
/// Operands push their presence (absent terms read `false`); each operator
/// pops its operands, right-hand side first, and pushes the result.
///
/// # Errors
///
/// Returns [`EvalError`] if the program is malformed: an operator without
/// enough operands, an empty program, or more than one value left at the end.
///
/// # Example
///
/// ```
/// use topicmatch::{TermPresence, evaluate, parse};
///
/// let postfix = parse("a OR b AND c").unwrap();
/// let presence = TermPresence::new().set("b", true).set("c", true);
/// assert_eq!(evaluate(&postfix, &presence), Ok(true));
/// ```
pub fn evaluate(postfix: &Postfix, presence: &TermPresence) -> Result<bool, EvalError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for (position, token) in postfix.iter().enumerate() {
        match token {
            PostfixToken::Operand(term) => stack.push(presence.get(term)),
            PostfixToken::Operator(op) => {
                let arity = op.arity();
                if stack.len() < arity {
                    return Err(EvalError::StackUnderflow {
                        operator: *op,
                        position,
                    });
                }
                let operands = stack.split_off(stack.len() - arity);
                stack.push(op.apply(&operands));
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvalError::EmptyExpression),
        values => Err(EvalError::LeftoverOperands {
            count: values.len(),
        }),
    }
}
