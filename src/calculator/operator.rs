//! Binary operators and their precedence classes.

use std::fmt;

/// Precedence class of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    High,
}

/// One of the four supported binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Get the precedence class of this operator.
    pub fn priority(self) -> Priority {
        match self {
            Self::Add | Self::Subtract => Priority::Low,
            Self::Multiply | Self::Divide => Priority::High,
        }
    }

    pub fn is_low(self) -> bool {
        self.priority() == Priority::Low
    }

    pub fn is_high(self) -> bool {
        self.priority() == Priority::High
    }

    /// Combine two operands. Division by zero follows IEEE-754.
    pub fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }

    /// Symbol used in logs and the default key map.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
