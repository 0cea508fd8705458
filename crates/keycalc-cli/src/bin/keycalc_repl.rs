// keycalc-repl: Drive a calculator session with keys from stdin.
//
// Each input line is a list of keys. Whitespace separates words; `Enter`
// and `Backspace` are single keys, any other word is one key per character.
// After every line the formula, the state and the last log line are printed:
//   12+3             [number]
//   15               [answer]    12+3=
//
// Usage:
//   keycalc-repl [OPTIONS]
//
// Example:
//   echo "12+3=" | keycalc-repl

use std::io::{self, BufRead, Write};

use clap::Parser;
use keycalc_cli::{CommonArgs, check_output, fatal, split_keys};
use keycalc_engine::CalcSession;

#[derive(Parser)]
#[command(
    name = "keycalc-repl",
    version,
    about = "Drive a calculator session with keys read from stdin"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Also print the unit types of the formula.
    #[arg(long)]
    units: bool,

    /// Print only the formula left after all input.
    #[arg(long = "final")]
    final_only: bool,
}

fn main() {
    let cli = Cli::parse();
    cli.common.init();

    let mut session = CalcSession::with_options(cli.common.options());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}")));
        let keys = split_keys(&line);
        if keys.is_empty() {
            continue;
        }
        for key in &keys {
            session.press_key(key.as_str());
        }
        if !cli.final_only {
            check_output(print_session(&mut out, &session, cli.units));
        }
    }

    if cli.final_only {
        check_output(print_session(&mut out, &session, cli.units));
    }
    check_output(out.flush());
}

fn print_session(out: &mut impl Write, session: &CalcSession, units: bool) -> io::Result<()> {
    let log = session.log_text();
    if log.is_empty() {
        writeln!(out, "{:<16} [{}]", session.text(), session.state())?;
    } else {
        writeln!(out, "{:<16} [{}]\t{}", session.text(), session.state(), log)?;
    }
    if units {
        let types: Vec<String> = session
            .units()
            .iter()
            .map(|u| {
                if u.in_root {
                    format!("{}*", u.unit_type)
                } else {
                    u.unit_type.to_string()
                }
            })
            .collect();
        writeln!(out, "  {}", types.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn print_session_lines() {
        let mut session = CalcSession::new();
        let mut buf = Vec::new();
        print_session(&mut buf, &session, true).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("{:<16} [default]\n  zero\n", "0")
        );

        for key in ["2", "+", "3", "Enter"] {
            session.press_key(key);
        }
        let mut buf = Vec::new();
        print_session(&mut buf, &session, false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("{:<16} [answer]\t2+3=\n", "5")
        );
    }

    #[test]
    fn print_session_reports_write_errors() {
        let session = CalcSession::new();
        let err = print_session(&mut ClosedPipe, &session, true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
