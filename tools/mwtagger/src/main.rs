mod cli;
mod status;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use mwe_oracle::{LexiconTransducer, Transducer};
use mwe_tagger::{Tagger, TaggerError};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::status::ExitStatus;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success,
                _ => ExitStatus::CommandLine,
            };
            let _ = err.print();
            return status.into();
        }
    };

    init_tracing(cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitStatus::Unhandled.into()
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> anyhow::Result<ExitStatus> {
    if cli.files.is_empty() {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(ExitStatus::Success);
    }

    let transducer = match LexiconTransducer::load(&cli.fst) {
        Ok(transducer) => transducer,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(if err.is_not_found() {
                ExitStatus::MissingFile
            } else {
                ExitStatus::Unhandled
            });
        }
    };
    if !cli.quiet {
        writeln!(out, "Loaded binary fst: {}", cli.fst.display())?;
    }

    let mut session = transducer.open_session();
    let mut tagger = Tagger::new(&mut session, cli.config());
    let mut status = ExitStatus::Success;

    for path in &cli.files {
        match tagger.process_file(path, out) {
            Ok(result) => {
                debug!(path = %path.display(), records = result.len(), "tagged file");
            }
            Err(TaggerError::Open { path, source }) => {
                warn!(path = %path.display(), error = %source, "skipping unreadable input");
                status = status.or(ExitStatus::MissingFile);
            }
            Err(err @ TaggerError::MalformedInput { .. }) => {
                warn!(path = %path.display(), error = %err, "abandoning malformed input");
                status = status.or(ExitStatus::MalformedInput);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed on {}", path.display()));
            }
        }
    }

    out.flush()?;
    Ok(status)
}
