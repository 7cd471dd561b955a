//! quill CLI: docstring integrity checking.
//!
//! The `quill` binary reads units and parsed docstring views produced by
//! the analysis collaborators, checks them, and prints a report. See
//! `quill --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};
use commands::check::CheckOverrides;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn quill_output::ReportFormatter> = if cli.json {
        Box::new(quill_output::json::JsonFormatter)
    } else {
        Box::new(quill_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            files,
            config,
            style,
            strictness,
            ignore,
            verbosity,
            message_template,
            raise_errors,
            workers,
        } => commands::check::run(
            &*formatter,
            &config,
            &files,
            CheckOverrides {
                style: style.map(Into::into),
                strictness: strictness.map(Into::into),
                ignore,
                message_template,
                raise_errors,
                workers,
            },
            verbosity,
        ),
        Commands::Codes => commands::codes::run(cli.json),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr; `QUILL_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("QUILL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
