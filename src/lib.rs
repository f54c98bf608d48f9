//! Keystroke-driven four-function calculator.
//!
//! Numbers are entered one digit at a time and operators are reduced by
//! precedence as they arrive, using a fixed three-slot history instead of
//! an expression parser.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod input;
pub mod session;
