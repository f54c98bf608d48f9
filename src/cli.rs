//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Keystroke-driven four-function calculator.
///
/// Keys are read as characters: digits and `.` build a number,
/// `+ - * x /` are operators, `=` or Enter evaluates, `c` clears all and
/// `e` clears the current entry. A minus before any digit starts a
/// negative number.
#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about)]
pub struct Cli {
    /// Feed these keys and print the final display instead of reading stdin.
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print the display after every key (with --keys).
    #[arg(short, long, requires = "keys")]
    pub trace: bool,

    /// Path to the config file (default: <config dir>/keycalc/config.toml).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
