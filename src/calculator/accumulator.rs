//! Digit-by-digit construction of the number being typed.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::CalcError;

/// Number of digits after the decimal point in a displayed result.
pub const RESULT_PRECISION: usize = 6;

lazy_static! {
    /// Matches literals the accumulator may hold: an optional minus sign,
    /// at least one digit and at most one decimal point.
    static ref NUMERIC_LITERAL: Regex = Regex::new(r"^-?\d+(\.\d*)?$").unwrap();
}

/// Float spellings produced by `format_result` for non-finite values.
const NON_FINITE: &[&str] = &["inf", "-inf", "NaN"];

fn is_non_finite(buffer: &str) -> bool {
    NON_FINITE.contains(&buffer)
}

/// Check whether `buffer` is something the accumulator is allowed to hold.
pub fn is_valid_literal(buffer: &str) -> bool {
    NUMERIC_LITERAL.is_match(buffer) || is_non_finite(buffer)
}

/// Format a computed result for display.
pub fn format_result(value: f64) -> String {
    format!("{:.*}", RESULT_PRECISION, value)
}

/// Text buffer for the number currently being entered.
#[derive(Clone, Debug)]
pub struct InputAccumulator {
    buffer: String,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self {
            buffer: "0".to_string(),
        }
    }
}

impl InputAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the buffer as it should be displayed.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Append a digit, replacing a lone zero (keeping its sign).
    pub fn append_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        let c = char::from(b'0' + digit);

        if self.buffer == "0" || is_non_finite(&self.buffer) {
            self.buffer.clear();
        } else if self.buffer == "-0" {
            self.buffer.truncate(1);
        }
        self.buffer.push(c);

        tracing::trace!(buffer = %self.buffer, "digit entered");
        self.check_literal();
    }

    /// Append a decimal point unless the buffer already has one.
    pub fn append_decimal_point(&mut self) {
        if is_non_finite(&self.buffer) {
            self.buffer = "0.".to_string();
        } else if !self.buffer.contains('.') {
            self.buffer.push('.');
        }
        self.check_literal();
    }

    /// Start a negative number if nothing has been typed yet.
    ///
    /// Returns `false` when the buffer is not a lone zero; the caller should
    /// treat the key as a subtraction instead.
    pub fn negate_if_zero(&mut self) -> bool {
        if self.buffer == "0" {
            self.buffer = "-0".to_string();
            true
        } else {
            false
        }
    }

    /// Parse the buffer into a number.
    pub fn current_value(&self) -> Result<f64, CalcError> {
        self.buffer
            .parse::<f64>()
            .map_err(|source| CalcError::Parse {
                buffer: self.buffer.clone(),
                source,
            })
    }

    /// Replace the buffer with a formatted result.
    pub fn set_result(&mut self, value: f64) {
        self.buffer = format_result(value);
        self.check_literal();
    }

    /// Reset the buffer to "0".
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer.push('0');
    }

    fn check_literal(&self) {
        debug_assert!(
            is_valid_literal(&self.buffer),
            "accumulator holds an invalid literal: {:?}",
            self.buffer
        );
    }
}
