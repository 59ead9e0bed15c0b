// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands the work to Layer 2, and prints what comes back.
//
// Commands:
//   1. `find`    — factorize one number, optionally export CSV
//   2. `session` — read numbers line by line, remember the last
//   3. `config`  — write or print the configuration
//
// Results go to stdout; logs go to stderr (see main.rs).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

pub mod presenter;

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::application::{
    factor_use_case::FactorUseCase,
    report::FactorReport,
    session::{Session, SessionEvent},
};
use crate::infra::config::AppConfig;
use commands::{Commands, ConfigCommand, FindArgs, SessionArgs};

#[derive(Parser, Debug)]
#[command(
    name = "factor-pairs",
    version,
    about = "Find every factor pair of an integer (excluding 1 × n) by trial division."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching handler.
    /// Handlers only route and print; they never compute.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Find(args)    => run_find(args),
            Commands::Session(args) => run_session(args),
            Commands::Config(cmd)   => run_config(cmd),
        }
    }
}

fn run_find(args: FindArgs) -> Result<()> {
    let cfg      = args.settings.resolve()?;
    let use_case = FactorUseCase::new(&cfg);

    // ValidationError converts into anyhow; main prints it and exits non-zero
    let result = use_case.execute(&args.number)?;

    if args.json {
        let report = FactorReport::from(&result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", presenter::render_result(&result));
    }

    if args.csv {
        let path = use_case.export(&result)?;
        if !args.json {
            println!("\nSaved CSV to {}", path.display());
        }
    }

    Ok(())
}

fn run_session(args: SessionArgs) -> Result<()> {
    let cfg      = args.settings.resolve()?;
    let use_case = FactorUseCase::new(&cfg);
    let mut session = Session::new(&use_case);

    let stdin = io::stdin();
    session_loop(&mut session, stdin.lock(), io::stdout())
}

/// Feed `input` to the session line by line until quit or EOF.
/// Lines are read as bytes; invalid UTF-8 becomes U+FFFD and is
/// rejected by the validator like any other non-digit.
fn session_loop<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    write!(out, "{}", presenter::render_help())?;

    let mut buf = Vec::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match session.handle(&line) {
            SessionEvent::Factored(r) => write!(out, "{}", presenter::render_result(&r))?,
            SessionEvent::Cached(r) => {
                write!(out, "{}", presenter::render_cached_notice(&r))?;
                write!(out, "{}", presenter::render_result(&r))?;
            }
            SessionEvent::Rejected(e) => write!(out, "{}", presenter::render_rejection(&e))?,
            SessionEvent::Exported { number, path } => {
                writeln!(
                    out,
                    "Saved factor pairs of {} to {}",
                    presenter::format_number(number),
                    path.display()
                )?;
            }
            SessionEvent::ExportFailed(e) => writeln!(out, "error: {e:#}")?,
            SessionEvent::NothingCached => {
                writeln!(out, "No result yet. Enter a number first.")?;
            }
            SessionEvent::Help => write!(out, "{}", presenter::render_help())?,
            SessionEvent::Quit => break,
        }
    }

    Ok(())
}

fn run_config(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Init { path, force } => {
            if path.exists() && !force {
                bail!(
                    "'{}' already exists. Use --force to overwrite it.",
                    path.display()
                );
            }
            AppConfig::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        ConfigCommand::Show { settings } => {
            let cfg = settings.resolve()?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }
    Ok(())
}
