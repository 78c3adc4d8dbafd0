//! Rotas - fastest travel routes across a multimodal transportation network
//!
//! Computes the quickest way from one city to every other one, combining
//! car, train, bus, boat and plane connections.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use rotas_core::error::{ExitCode as RotasExitCode, RotasError};
use rotas_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RotasExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Report an argument error before a `Cli` exists.
///
/// Scripts asking for `--format json` get the same error envelope as any
/// other failure; everyone else gets clap's own message.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) || !json_requested(env::args().skip(1))
    {
        err.exit();
    }

    let error = parse_error_to_rotas(&err);
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn parse_error_to_rotas(err: &clap::Error) -> RotasError {
    let message = err.to_string().trim_end().to_string();
    match err.kind() {
        ErrorKind::InvalidValue
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::NoEquals => RotasError::UsageError(message),
        _ => RotasError::Other(message),
    }
}

/// Whether the raw arguments select JSON output.
fn json_requested<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
