use std::fmt;

/// Boolean operators supported in topic rules.
///
/// Precedence is fixed by the grammar: `Or` < `And` < `Not`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Or,
    And,
    Not,
}

/// A lexical unit of a rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A case-folded term to look up in the text.
    Operand(String),
    Operator(Operator),
    Open,
    Close,
}

impl Operator {
    /// Binding strength. Higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Or => 1,
            Operator::And => 2,
            Operator::Not => 3,
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }

    /// Whether an incoming `self` pops `top` off the operator stack.
    ///
    /// Binary operators are left-associative. `Not` is a prefix operator and
    /// never pops a pending `Not`.
    pub(crate) fn yields_to(self, top: Operator) -> bool {
        if self == Operator::Not {
            return top.precedence() > self.precedence();
        }
        top.precedence() >= self.precedence()
    }

    pub(crate) fn apply(self, operands: &[bool]) -> bool {
        match (self, operands) {
            (Operator::And, [left, right]) => *left && *right,
            (Operator::Or, [left, right]) => *left || *right,
            (Operator::Not, [value]) => !*value,
            _ => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Or => write!(f, "OR"),
            Operator::And => write!(f, "AND"),
            Operator::Not => write!(f, "NOT"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(term) => write!(f, "{term}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}
