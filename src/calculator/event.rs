//! Discrete input events consumed by the calculator.

use std::fmt;
use std::str::FromStr;

use super::operator::Operator;

/// One user action, already decoded from a physical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A decimal digit, 0 through 9.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// Reset the display and every pending operand.
    FullClear,
    /// Reset the display only ("CE").
    ClearDisplay,
}

/// Error for unknown event names in key bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input event {0:?}")]
pub struct UnknownEvent(pub String);

impl FromStr for InputEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if let [digit @ b'0'..=b'9'] = name.as_bytes() {
            return Ok(Self::Digit(digit - b'0'));
        }

        match name.as_str() {
            "decimal" | "dot" => Ok(Self::DecimalPoint),
            "add" | "plus" => Ok(Self::Operator(Operator::Add)),
            "subtract" | "minus" => Ok(Self::Operator(Operator::Subtract)),
            "multiply" | "times" => Ok(Self::Operator(Operator::Multiply)),
            "divide" => Ok(Self::Operator(Operator::Divide)),
            "equals" => Ok(Self::Equals),
            "clear" | "full_clear" => Ok(Self::FullClear),
            "clear_display" => Ok(Self::ClearDisplay),
            _ => Err(UnknownEvent(s.to_string())),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::DecimalPoint => f.write_str("decimal"),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Equals => f.write_str("equals"),
            Self::FullClear => f.write_str("clear"),
            Self::ClearDisplay => f.write_str("clear_display"),
        }
    }
}
