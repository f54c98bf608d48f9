//! Calculator core for keystroke-driven evaluation.
//!
//! This module provides functionality to:
//! - Build the number being typed one digit at a time
//! - Reduce pending operations by precedence as operators arrive
//! - Dispatch decoded input events and report the display string

mod accumulator;
mod controller;
mod error;
mod event;
mod operator;
mod reducer;

pub use accumulator::{InputAccumulator, format_result, is_valid_literal};
pub use controller::Calculator;
pub use error::CalcError;
pub use event::{InputEvent, UnknownEvent};
pub use operator::{Operator, Priority};
pub use reducer::ExpressionReducer;
