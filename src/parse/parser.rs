use crate::{Operator, ParenPolicy, Postfix, PostfixToken, Token};

use super::error::ParseError;

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    Barrier { offset: usize },
}

/// Shunting-yard conversion of classified tokens to postfix order.
pub(crate) fn to_postfix(
    tokens: Vec<(Token, usize)>,
    parens: ParenPolicy,
) -> Result<Postfix, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for (token, offset) in tokens {
        match token {
            Token::Operand(term) => output.push(PostfixToken::Operand(term)),
            Token::Operator(op) => {
                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    if !op.yields_to(top) {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }
                stack.push(StackEntry::Operator(op));
            }
            Token::Open => stack.push(StackEntry::Barrier { offset }),
            Token::Close => close_group(&mut stack, &mut output, offset, parens)?,
        }
    }

    if parens == ParenPolicy::Strict
        && let Some(offset) = stack.iter().find_map(|entry| match entry {
            StackEntry::Barrier { offset } => Some(*offset),
            StackEntry::Operator(_) => None,
        })
    {
        return Err(ParseError::UnmatchedOpen { offset });
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixToken::Operator(op)),
            StackEntry::Barrier { offset } => {
                tracing::warn!(offset, "dropping unmatched '('");
            }
        }
    }

    Ok(Postfix::new(output))
}

fn close_group(
    stack: &mut Vec<StackEntry>,
    output: &mut Vec<PostfixToken>,
    offset: usize,
    parens: ParenPolicy,
) -> Result<(), ParseError> {
    loop {
        match stack.pop() {
            Some(StackEntry::Operator(op)) => output.push(PostfixToken::Operator(op)),
            Some(StackEntry::Barrier { .. }) => return Ok(()),
            None => {
                return match parens {
                    ParenPolicy::Strict => Err(ParseError::UnmatchedClose { offset }),
                    ParenPolicy::Lenient => {
                        tracing::warn!(offset, "ignoring unmatched ')'");
                        Ok(())
                    }
                };
            }
        }
    }
}
