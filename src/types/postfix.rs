use std::fmt;

use super::error::EvalError;
use super::token::Operator;

/// One step of a [`Postfix`] program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    Operand(String),
    Operator(Operator),
}

/// A rule in reverse Polish order: operands and operators only, every
/// operator placed after the operands it consumes.
///
/// Produced by [`parse()`](crate::parse::parse). A `Postfix` is immutable and
/// can be shared across threads and evaluated any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl PostfixToken {
    #[must_use]
    pub fn operand(term: &str) -> Self {
        PostfixToken::Operand(term.to_owned())
    }
}

impl Postfix {
    #[must_use]
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostfixToken> {
        self.tokens.iter()
    }

    /// Distinct operand terms, in first-seen order.
    #[must_use]
    pub fn operands(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if let PostfixToken::Operand(term) = token
                && !seen.contains(&term.as_str())
            {
                seen.push(term);
            }
        }
        seen
    }

    /// Check that the sequence leaves exactly one value on an evaluation stack.
    ///
    /// Stack depth does not depend on term values, so a sequence that passes
    /// here never fails [`evaluate()`](crate::evaluate).
    ///
    /// # Errors
    ///
    /// Returns the same [`EvalError`] evaluation would produce.
    pub fn validate(&self) -> Result<(), EvalError> {
        let mut depth = 0_usize;
        for (position, token) in self.tokens.iter().enumerate() {
            match token {
                PostfixToken::Operand(_) => depth += 1,
                PostfixToken::Operator(op) => {
                    if depth < op.arity() {
                        return Err(EvalError::StackUnderflow {
                            operator: *op,
                            position,
                        });
                    }
                    depth = depth - op.arity() + 1;
                }
            }
        }
        match depth {
            0 => Err(EvalError::EmptyExpression),
            1 => Ok(()),
            count => Err(EvalError::LeftoverOperands { count }),
        }
    }
}

impl From<Vec<PostfixToken>> for Postfix {
    fn from(tokens: Vec<PostfixToken>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<PostfixToken> for Postfix {
    fn from_iter<T: IntoIterator<Item = PostfixToken>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Operand(term) => write!(f, "{term}"),
            PostfixToken::Operator(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
