// keycalc-cli: shared utilities for CLI tools.

pub mod logging;

use std::io::{self, IsTerminal};
use std::process;

use clap::{Args, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use keycalc_core::{DEFAULT_ERROR_LABEL, DEFAULT_EXP_THRESHOLD};
use keycalc_engine::CalcOptions;

use crate::logging::{LogConfig, LogFormat, init_logging};

/// Flags shared by every tool.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Rounding tolerance that switches small results to exponential notation.
    #[arg(long, value_name = "T", default_value_t = DEFAULT_EXP_THRESHOLD)]
    pub threshold: f64,

    /// Literal shown when a calculation fails.
    #[arg(long = "error-label", value_name = "TEXT", default_value = DEFAULT_ERROR_LABEL)]
    pub error_label: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}

impl CommonArgs {
    pub fn options(&self) -> CalcOptions {
        CalcOptions::default()
            .with_exp_threshold(self.threshold)
            .with_error_label(self.error_label.clone())
    }

    /// Logging configuration with consistent precedence: explicit `-v`/`-q`
    /// flags win over `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
        };
        LogConfig {
            use_env_filter: !self.verbosity.is_present(),
            ..LogConfig::default()
                .with_level(self.verbosity.tracing_level_filter())
                .with_format(format)
                .with_ansi(io::stderr().is_terminal())
        }
    }

    /// Install logging or exit.
    pub fn init(&self) {
        if let Err(e) = init_logging(&self.log_config()) {
            fatal(&format!("failed to initialize logging: {e}"));
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Exit through [`fatal`] if writing output failed.
pub fn check_output(result: io::Result<()>) {
    if let Err(e) = result {
        fatal(&format!("failed to write output: {e}"));
    }
}

/// Named keys that span several characters.
const NAMED_KEYS: &[&str] = &["Enter", "Backspace"];

/// Split an input line into key names.
///
/// Whitespace separates words. A word that is a named key (`Enter`,
/// `Backspace`) is one key; any other word is one key per character.
///
/// ```
/// assert_eq!(
///     keycalc_cli::split_keys("12+3 Enter"),
///     vec!["1", "2", "+", "3", "Enter"]
/// );
/// ```
pub fn split_keys(line: &str) -> Vec<String> {
    line.split_whitespace()
        .flat_map(|word| {
            if NAMED_KEYS.contains(&word) {
                vec![word.to_string()]
            } else {
                word.chars().map(String::from).collect()
            }
        })
        .collect()
}
