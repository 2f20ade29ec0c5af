//! Tracing subscriber setup for the `formsift` binary.
//!
//! Events from the three formsift crates go to stderr so stdout carries only
//! command output. With `--output-format json` the events are JSON lines as
//! well; otherwise they are compact text, coloured on a terminal.
//!
//! `-v` raises the level from WARN to INFO, `-vv` to DEBUG, `-vvv` to TRACE,
//! and `--quiet` lowers it to ERROR. A set `RUST_LOG` replaces all of this.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown without `RUST_LOG`.
const LOG_TARGETS: [&str; 3] = ["formsift", "formsift_core", "formsift_adapters"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStyle {
    Text { ansi: bool },
    Json,
}

impl LogStyle {
    fn for_args(args: &GlobalArgs, stderr_is_terminal: bool) -> Self {
        match args.output_format {
            OutputFormat::Json => Self::Json,
            _ => Self::Text {
                ansi: !args.no_color && stderr_is_terminal,
            },
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity_level(args))));

    let (text, json) = match LogStyle::for_args(args, std::io::stderr().is_terminal()) {
        LogStyle::Text { ansi } => (
            Some(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(ansi)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogStyle::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn verbosity_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn default_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(verbose: u8, quiet: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            output_format,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn verbosity_selects_level() {
        let cases = [
            (0, false, "warn"),
            (1, false, "info"),
            (2, false, "debug"),
            (3, false, "trace"),
            (9, false, "trace"),
            (0, true, "error"),
            (2, true, "error"),
        ];
        for (verbose, quiet, expected) in cases {
            assert_eq!(
                verbosity_level(&global(verbose, quiet, OutputFormat::Auto)),
                expected,
                "-v x{verbose}, quiet={quiet}"
            );
        }
    }

    #[test]
    fn directives_name_every_crate() {
        assert_eq!(
            default_directives("debug"),
            "formsift=debug,formsift_core=debug,formsift_adapters=debug"
        );
        assert!(default_directives("info").parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn json_output_logs_json() {
        let args = global(0, false, OutputFormat::Json);
        assert_eq!(LogStyle::for_args(&args, true), LogStyle::Json);
    }

    #[test]
    fn text_logs_are_coloured_only_on_a_terminal() {
        let args = global(0, false, OutputFormat::Human);
        assert_eq!(LogStyle::for_args(&args, true), LogStyle::Text { ansi: true });
        assert_eq!(LogStyle::for_args(&args, false), LogStyle::Text { ansi: false });

        let no_color = GlobalArgs {
            no_color: true,
            ..args
        };
        assert_eq!(LogStyle::for_args(&no_color, true), LogStyle::Text { ansi: false });
    }
}
