// keycalc-eval: Evaluate calculator formulas.
//
// Formulas are taken from the arguments, or from stdin (one per line) when
// no argument is given. Each result is printed on its own line, formatted
// the way the calculator displays it:
//   1÷3          → 3.3333333e-1
//   200×5%       → 10
//   1÷0          → Error
//
// `*` and `/` are accepted as spellings of `×` and `÷`, and `r` of `√`.
//
// Usage:
//   keycalc-eval [OPTIONS] [FORMULA]...
//
// Options:
//   --strict     Exit with an error on the first failing formula
//   --raw        Print the unformatted value

use std::io::{self, BufRead, Write};

use clap::Parser;
use keycalc_cli::{CommonArgs, check_output, fatal};
use keycalc_engine::{CalcOptions, evaluate_with, try_evaluate};

#[derive(Parser)]
#[command(
    name = "keycalc-eval",
    version,
    about = "Evaluate calculator formulas strictly left to right"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Exit with an error on the first formula that cannot be evaluated.
    #[arg(long)]
    strict: bool,

    /// Print the unformatted value instead of the display form.
    #[arg(long)]
    raw: bool,

    /// Formulas to evaluate. Read from stdin when empty.
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,
}

/// Replace ASCII spellings with calculator symbols.
fn canonical(formula: &str) -> String {
    formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            'r' | 'R' => '√',
            _ => c,
        })
        .collect()
}

/// Display form of one formula. Fails only in strict mode.
fn render(formula: &str, cli: &Cli, options: &CalcOptions) -> Result<String, String> {
    let formula = canonical(formula);
    if !(cli.strict || cli.raw) {
        return Ok(text(&formula, options));
    }
    match try_evaluate(&formula) {
        Ok(value) if cli.raw => Ok(value.to_string()),
        Ok(_) => Ok(text(&formula, options)),
        Err(fault) if cli.strict => Err(format!("{formula}: {fault}")),
        Err(_) => Ok(options.error_label.clone()),
    }
}

fn text(formula: &str, options: &CalcOptions) -> String {
    evaluate_with(formula, options)
        .into_iter()
        .map(|u| u.value)
        .collect()
}

fn main() {
    let cli = Cli::parse();
    cli.common.init();
    let options = cli.common.options();

    let formulas: Vec<String> = if cli.formulas.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .map(|line| line.unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}"))))
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.formulas.clone()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failure = None;
    for formula in &formulas {
        match render(formula, &cli, &options) {
            Ok(result) => check_output(writeln!(out, "{result}")),
            Err(msg) => {
                failure = Some(msg);
                break;
            }
        }
    }

    check_output(out.flush());
    if let Some(msg) = failure {
        fatal(&msg);
    }
}
