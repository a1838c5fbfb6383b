use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use multiplier::{parse_operand, Report, USAGE};

#[derive(Parser)]
#[command(name = "multiply-args", version)]
#[command(about = "Multiply the two integers given as arguments")]
struct Args {
    /// Exactly two integers, e.g. `6 7` or `-2 5`
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    operands: Vec<String>,

    /// Print the operands and product as a JSON object
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Treat every argument except `--json` as an operand, so flag-like text
    /// such as `-x` still goes through the count check and operand parsing.
    fn from_raw(raw: impl Iterator<Item = String>) -> Self {
        let mut json = false;
        let mut operands = Vec::new();
        for arg in raw {
            match arg.as_str() {
                "--json" => json = true,
                "--" => {}
                _ => operands.push(arg),
            }
        }
        Self { operands, json }
    }
}

fn main() -> ExitCode {
    multiplier::init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "falling back to raw operands");
            Args::from_raw(std::env::args().skip(1))
        }
    };

    if args.operands.len() != 2 {
        tracing::debug!(count = args.operands.len(), "wrong number of operands");
        println!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match run(&args.operands[0], &args.operands[1], args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(a: &str, b: &str, json: bool) -> anyhow::Result<()> {
    let report = Report::new(parse_operand(a)?, parse_operand(b)?);

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "{report}")?;
    }
    out.flush().context("failed to write result")?;
    Ok(())
}
