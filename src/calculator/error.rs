//! Errors raised by the calculator core.
//!
//! None of these are caused by user input. A `Parse` error means the
//! accumulator let an invalid literal through, and the remaining variants
//! mean the reducer reached a slot layout its precedence rules do not cover.

use std::num::ParseFloatError;

use super::operator::Operator;

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// The input buffer does not hold a valid number.
    #[error("input buffer {buffer:?} is not a valid number")]
    Parse {
        buffer: String,
        #[source]
        source: ParseFloatError,
    },

    /// `apply` was asked to combine two operands with an empty slot.
    #[error("no operation to perform")]
    NoOperation,

    /// The reducer reached depth 3 with an operator layout other than low-high.
    #[error("unexpected operator layout {operators:?} at depth {depth}")]
    UnexpectedState {
        depth: usize,
        operators: [Option<Operator>; 3],
    },

    /// A depth the reducer never rests at.
    #[error("reducer reached depth {depth}, the precedence collapse is broken")]
    UnreachableDepth { depth: usize },
}

impl CalcError {
    /// Whether this error comes from the reducer rather than the input buffer.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::Parse { .. })
    }
}
