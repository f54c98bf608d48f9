//! Event dispatch tying the input buffer to the reducer.

use super::accumulator::InputAccumulator;
use super::error::CalcError;
use super::event::InputEvent;
use super::operator::Operator;
use super::reducer::ExpressionReducer;

/// A calculator driven one key at a time.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    input: InputAccumulator,
    reducer: ExpressionReducer,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display string.
    pub fn display(&self) -> &str {
        self.input.display()
    }

    pub fn reducer(&self) -> &ExpressionReducer {
        &self.reducer
    }

    /// Process one event and return the updated display.
    pub fn handle(&mut self, event: InputEvent) -> Result<&str, CalcError> {
        match event {
            InputEvent::Digit(d) => self.input.append_digit(d),
            InputEvent::DecimalPoint => self.input.append_decimal_point(),
            InputEvent::Operator(op) => self.operator(op)?,
            InputEvent::Equals => {
                self.equals()?;
            }
            InputEvent::FullClear => self.full_clear(),
            InputEvent::ClearDisplay => self.clear_display(),
        }
        Ok(self.display())
    }

    /// Handle an operator key. Minus on an untouched display starts a
    /// negative number instead of subtracting.
    pub fn operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if op == Operator::Subtract && self.input.negate_if_zero() {
            tracing::trace!("minus starts a negative number");
            return Ok(());
        }
        self.submit_operator(op)
    }

    /// Move the typed number into the reducer followed by `op`.
    pub fn submit_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let value = self.input.current_value()?;
        self.input.clear();
        self.reducer.submit_operator(value, op)
    }

    /// Evaluate everything pending and show the result.
    pub fn equals(&mut self) -> Result<f64, CalcError> {
        let value = self.input.current_value()?;
        let result = self.reducer.equals(value)?;
        self.input.set_result(result);
        Ok(result)
    }

    /// Reset the display without touching pending operations.
    pub fn clear_display(&mut self) {
        self.input.clear();
    }

    /// Reset the display and all pending operations.
    pub fn full_clear(&mut self) {
        self.input.clear();
        self.reducer.full_clear();
    }
}
