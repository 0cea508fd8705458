// keycalc-table: Print the per-state input rules.
//
// One line per state, listing the unit types it appends, overwrites with,
// and resets on:
//   default      accept=dot,percent,muldiv,plus  overwrite=number,one,...  renew=-
//
// Usage:
//   keycalc-table [--format text|tsv] [STATE]...

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use keycalc_cli::{CommonArgs, check_output, fatal};
use keycalc_core::{StateName, UnitSet};
use keycalc_engine::rules;

#[derive(Parser)]
#[command(
    name = "keycalc-table",
    version,
    about = "Print which unit types each calculator state accepts"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output layout.
    #[arg(long, value_enum, default_value = "text")]
    format: TableFormat,

    /// States to print. All states when empty.
    #[arg(value_name = "STATE")]
    states: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableFormat {
    Text,
    Tsv,
}

fn names(set: UnitSet) -> String {
    if set.is_empty() {
        return "-".to_string();
    }
    set.iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    let cli = Cli::parse();
    cli.common.init();

    let states: Vec<StateName> = if cli.states.is_empty() {
        StateName::ALL.to_vec()
    } else {
        cli.states
            .iter()
            .map(|s| s.parse().unwrap_or_else(|e| fatal(&format!("{e}"))))
            .collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let TableFormat::Tsv = cli.format {
        check_output(writeln!(out, "state\taccept\toverwrite\trenew"));
    }
    for state in states {
        let r = rules(state);
        let (accept, overwrite, renew) = (names(r.accept), names(r.overwrite), names(r.renew));
        check_output(match cli.format {
            TableFormat::Text => writeln!(
                out,
                "{:<12} accept={accept}  overwrite={overwrite}  renew={renew}",
                state.as_str()
            ),
            TableFormat::Tsv => writeln!(out, "{state}\t{accept}\t{overwrite}\t{renew}"),
        });
    }

    check_output(out.flush());
}
