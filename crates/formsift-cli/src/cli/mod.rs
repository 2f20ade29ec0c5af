//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::ffi::OsString;

use clap::{Args, Command, CommandFactory, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "formsift",
    bin_name = "formsift",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Find the form templates a set of fields belongs to",
    long_about = "formsift matches submitted form fields against stored templates. \
                  A template matches when it declares exactly the submitted field \
                  names and every value passes its declared type (text, email, \
                  phone, date).",
    after_help = "EXAMPLES:\n\
        \x20 formsift init\n\
        \x20 formsift get-tpl --f_login=user@mail.ru '--f_tel=+7 903 123 45 78'\n\
        \x20 formsift list --format json\n\
        \x20 formsift completions bash > /usr/share/bash-completion/completions/formsift",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find templates matching the given fields.
    #[command(
        name = "get-tpl",
        visible_alias = "get_tpl",
        about = "Find templates matching the given fields",
        long_about = "Find templates matching the given fields. Fields are passed as \
                      --f_KEY=VALUE or -F KEY=VALUE, in any order and mixed with \
                      other flags. Other arguments are ignored.",
        after_help = "EXAMPLES:\n\
            \x20 formsift get-tpl --f_login=user@mail.ru '--f_tel=+7 903 123 45 78'\n\
            \x20 formsift get-tpl -F order_id=42\n\
            \x20 formsift --output-format json get-tpl --f_order_id=42"
    )]
    GetTpl(GetTplArgs),

    /// List stored templates.
    #[command(
        visible_alias = "ls",
        about = "List stored templates",
        after_help = "EXAMPLES:\n\
            \x20 formsift list\n\
            \x20 formsift list --format json"
    )]
    List(ListArgs),

    /// Seed the store with the built-in templates.
    #[command(
        about = "Seed the template store",
        after_help = "EXAMPLES:\n\
            \x20 formsift init                   # default store\n\
            \x20 formsift --store forms.json init\n\
            \x20 formsift init --force           # replace existing templates"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 formsift completions bash > ~/.local/share/bash-completion/completions/formsift\n\
            \x20 formsift completions zsh  > ~/.zfunc/_formsift\n\
            \x20 formsift completions fish > ~/.config/fish/completions/formsift.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the formsift configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 formsift config get store.path\n\
            \x20 formsift config list\n\
            \x20 formsift config path"
    )]
    Config(ConfigCommands),
}

// ── get-tpl ───────────────────────────────────────────────────────────────────

/// Arguments for `formsift get-tpl`.
#[derive(Debug, Args)]
pub struct GetTplArgs {
    /// Field given as `KEY=VALUE`; may be repeated.
    #[arg(
        short = 'F',
        long = "field",
        value_name = "KEY=VALUE",
        value_parser = parse_field_pair,
        help = "Field as KEY=VALUE (repeatable)"
    )]
    pub fields: Vec<(String, String)>,

    /// Tokens clap has no flag for, in command-line order.
    ///
    /// Filled by [`parse_args`]; only `--f_<key>=<value>` entries become
    /// fields.
    #[arg(skip)]
    pub raw: Vec<String>,
}

/// Parse a `KEY=VALUE` pair, splitting on the first `=`.
fn parse_field_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// Prefix marking a `get-tpl` argument as a form field.
pub const FIELD_PREFIX: &str = "--f_";

const GET_TPL: &str = "get-tpl";

/// Parse the command line.
///
/// Inside `get-tpl`, every token that is not a known flag (`--f_` fields,
/// stray words, unknown options) is set aside before clap runs and handed
/// over in [`GetTplArgs::raw`]. Known flags such as `-F` or
/// `--output-format` keep parsing wherever they appear.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();
    let (known, raw) = split_raw_arguments(&cmd, args.into_iter().map(Into::into));

    let mut cli = Cli::try_parse_from(known)?;
    if let Commands::GetTpl(get_tpl) = &mut cli.command {
        get_tpl.raw = raw;
    }
    Ok(cli)
}

fn split_raw_arguments(
    root: &Command,
    args: impl IntoIterator<Item = OsString>,
) -> (Vec<OsString>, Vec<String>) {
    let mut args = args.into_iter();
    let mut known: Vec<OsString> = args.next().into_iter().collect();
    let mut raw = Vec::new();

    let mut get_tpl: Option<&Command> = None;
    let mut value_follows = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || value_follows {
            value_follows = false;
            known.push(arg);
            continue;
        }
        let Some(token) = arg.to_str() else {
            known.push(arg);
            continue;
        };

        match get_tpl {
            None => {
                if let Some(takes_next) = lookup_flag(root, token) {
                    value_follows = takes_next;
                } else if !token.starts_with('-') {
                    match root.find_subcommand(token) {
                        Some(sub) if sub.get_name() == GET_TPL => get_tpl = Some(sub),
                        _ => passthrough = true,
                    }
                }
                known.push(arg);
            }
            Some(sub) => {
                if token.starts_with(FIELD_PREFIX) {
                    raw.push(token.to_owned());
                    continue;
                }
                match lookup_flag(sub, token).or_else(|| lookup_flag(root, token)) {
                    Some(takes_next) => {
                        value_follows = takes_next;
                        known.push(arg);
                    }
                    None => raw.push(token.to_owned()),
                }
            }
        }
    }

    (known, raw)
}

/// Whether `token` names a flag of `cmd`, and if so whether its value is the
/// next argument.
fn lookup_flag(cmd: &Command, token: &str) -> Option<bool> {
    let (arg, inline_value) = if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        if name.is_empty() {
            return None;
        }
        (cmd.get_arguments().find(|a| a.get_long() == Some(name))?, inline)
    } else {
        let mut chars = token.strip_prefix('-')?.chars();
        let short = chars.next()?;
        (
            cmd.get_arguments().find(|a| a.get_short() == Some(short))?,
            chars.next().is_some(),
        )
    };
    Some(arg.get_action().takes_values() && !inline_value)
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `formsift list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Names with their field schemas.
    Table,
    /// One name per line.
    List,
    /// JSON array of documents.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `formsift init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace the templates of a non-empty store.
    #[arg(short = 'f', long = "force", help = "Overwrite existing templates")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `formsift completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `formsift config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `store.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn get_tpl(args: &[&str]) -> GetTplArgs {
        let cli = parse_args(args.iter().copied()).unwrap();
        let Commands::GetTpl(args) = cli.command else {
            panic!("expected GetTpl command");
        };
        args
    }

    #[test]
    fn parse_raw_field_arguments() {
        let cli = parse_args([
            "formsift",
            "get-tpl",
            "--f_login=user@mail.ru",
            "--f_tel=+7 903 123 45 78",
        ])
        .unwrap();
        let Commands::GetTpl(args) = cli.command else {
            panic!("expected GetTpl command");
        };
        assert_eq!(
            args.raw,
            vec!["--f_login=user@mail.ru", "--f_tel=+7 903 123 45 78"]
        );
        assert!(args.fields.is_empty());
    }

    #[test]
    fn underscore_alias() {
        let args = get_tpl(&["formsift", "get_tpl", "--f_order_id=1"]);
        assert_eq!(args.raw, vec!["--f_order_id=1"]);
    }

    #[test]
    fn field_flag_after_prefixed_field_still_parses() {
        let args = get_tpl(&[
            "formsift",
            "get-tpl",
            "--f_login=platonlap@mail.ru",
            "-F",
            "tel=+7 903 123 45 78",
        ]);
        assert_eq!(args.raw, vec!["--f_login=platonlap@mail.ru"]);
        assert_eq!(
            args.fields,
            vec![("tel".to_owned(), "+7 903 123 45 78".to_owned())]
        );
    }

    #[test]
    fn field_flag_before_prefixed_field_still_parses() {
        let args = get_tpl(&[
            "formsift",
            "get-tpl",
            "-Ftel=+7 903 123 45 78",
            "--f_login=platonlap@mail.ru",
        ]);
        assert_eq!(args.raw, vec!["--f_login=platonlap@mail.ru"]);
        assert_eq!(args.fields.len(), 1);
    }

    #[test]
    fn global_flags_after_prefixed_field_still_parse() {
        let cli = parse_args([
            "formsift",
            "get-tpl",
            "--f_order_id=42",
            "--output-format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.global.verbose, 2);
        let Commands::GetTpl(args) = cli.command else {
            panic!("expected GetTpl command");
        };
        assert_eq!(args.raw, vec!["--f_order_id=42"]);
    }

    #[test]
    fn unknown_tokens_are_kept_raw() {
        let args = get_tpl(&["formsift", "get-tpl", "--login=a@b.ru", "stray", "--f_note"]);
        assert_eq!(args.raw, vec!["--login=a@b.ru", "stray", "--f_note"]);
        assert!(args.fields.is_empty());
    }

    #[test]
    fn other_subcommands_reject_field_arguments() {
        assert!(parse_args(["formsift", "list", "--f_login=a@b.ru"]).is_err());
    }

    #[test]
    fn store_value_before_subcommand_is_not_a_subcommand() {
        let cli = parse_args(["formsift", "--store", "get-tpl", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn field_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "formsift",
            "get-tpl",
            "-F",
            "login=a@b.ru",
            "--field",
            "note=x=y",
        ])
        .unwrap();
        let Commands::GetTpl(args) = cli.command else {
            panic!("expected GetTpl command");
        };
        assert_eq!(
            args.fields,
            vec![
                ("login".to_owned(), "a@b.ru".to_owned()),
                ("note".to_owned(), "x=y".to_owned()),
            ]
        );
    }

    #[test]
    fn field_flag_requires_a_key() {
        assert!(Cli::try_parse_from(["formsift", "get-tpl", "-F", "=value"]).is_err());
        assert!(Cli::try_parse_from(["formsift", "get-tpl", "-F", "novalue"]).is_err());
    }

    #[test]
    fn global_store_flag() {
        let cli = Cli::try_parse_from(["formsift", "--store", "db.json", "list"]).unwrap();
        assert_eq!(
            cli.global.store.as_deref(),
            Some(std::path::Path::new("db.json"))
        );
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::try_parse_from(["formsift", "list"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["formsift", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
