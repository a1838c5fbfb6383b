use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use multiplier::{Report, Tokens};

#[derive(Parser)]
#[command(name = "multiply-prompt", version)]
#[command(about = "Prompt for two integers on standard input and print their product")]
struct Args {
    /// Print the operands and product as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    multiplier::init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let a = ask(&mut out, &mut tokens, "Enter a number: ")?;
    let b = ask(&mut out, &mut tokens, "Enter another number: ")?;

    let report = Report::new(a, b);
    if args.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "{report}")?;
    }
    out.flush().context("failed to write result")?;
    Ok(())
}

/// Show `prompt` without a trailing newline, then read the next operand.
fn ask<W: Write, R: BufRead>(
    out: &mut W,
    tokens: &mut Tokens<R>,
    prompt: &str,
) -> anyhow::Result<i64> {
    write!(out, "{prompt}")?;
    out.flush().context("failed to write prompt")?;
    Ok(tokens.next_operand()?)
}
