//! Implementation of the `formsift get-tpl` command.
//!
//! Responsibility: turn the raw arguments into a [`FieldSet`], run the
//! matcher against the configured store, and print the template names.

use tracing::{debug, instrument, warn};

use formsift_adapters::JsonDocumentStore;
use formsift_core::{application::TemplateMatcher, domain::FieldSet};

use crate::{
    cli::{FIELD_PREFIX, GetTplArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Printed when no template matches.
pub const NO_MATCH_MESSAGE: &str = "No matching templates found";

#[instrument(skip_all)]
pub fn execute(args: GetTplArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fields = collect_fields(&args.raw, args.fields);
    if fields.is_empty() {
        return Err(CliError::NoFields);
    }

    let store_path = config.store.path;
    if !store_path.exists() {
        warn!(
            store = %store_path.display(),
            "Template store does not exist; run 'formsift init' to create it"
        );
    }

    debug!(store = %store_path.display(), fields = fields.len(), "Matching fields");
    let matcher = TemplateMatcher::new(Box::new(JsonDocumentStore::new(store_path)));
    let names = matcher.find_matching_templates(&fields)?;

    if output.format() == OutputFormat::Json {
        output.json(&names)?;
    } else if names.is_empty() {
        output.data(NO_MATCH_MESSAGE)?;
    } else {
        for name in &names {
            output.data(name)?;
        }
    }

    Ok(())
}

/// Build the field set from raw `--f_<key>=<value>` arguments and `-F` pairs.
///
/// Raw arguments without the prefix or without an `=` are skipped. The value
/// is everything after the first `=`, so it may itself contain `=`. An empty
/// key is kept; no template declares one. Later occurrences of a key replace
/// earlier ones and `-F` pairs are applied after raw arguments.
pub fn collect_fields(raw: &[String], pairs: Vec<(String, String)>) -> FieldSet {
    let mut fields = FieldSet::new();

    for arg in raw {
        let Some(rest) = arg.strip_prefix(FIELD_PREFIX) else {
            debug!(argument = %arg, "Ignoring argument without field prefix");
            continue;
        };
        let Some((key, value)) = rest.split_once('=') else {
            debug!(argument = %arg, "Ignoring field argument without '='");
            continue;
        };
        fields.insert(key, value);
    }

    for (key, value) in pairs {
        fields.insert(key, value);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| (*a).to_owned()).collect()
    }

    #[test]
    fn prefixed_arguments_become_fields() {
        let fields = collect_fields(
            &raw(&["--f_login=platonlap@mail.ru", "--f_tel=+7 903 123 45 78"]),
            Vec::new(),
        );
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("login"), Some("platonlap@mail.ru"));
        assert_eq!(fields.get("tel"), Some("+7 903 123 45 78"));
    }

    #[test]
    fn other_arguments_are_ignored() {
        let fields = collect_fields(&raw(&["--login=a@b.ru", "stray", "-x"]), Vec::new());
        assert!(fields.is_empty());
    }

    #[test]
    fn value_splits_on_first_equals() {
        let fields = collect_fields(&raw(&["--f_note=a=b"]), Vec::new());
        assert_eq!(fields.get("note"), Some("a=b"));
    }

    #[test]
    fn empty_value_is_kept() {
        let fields = collect_fields(&raw(&["--f_comment="]), Vec::new());
        assert_eq!(fields.get("comment"), Some(""));
    }

    #[test]
    fn field_without_equals_is_skipped() {
        let fields = collect_fields(
            &raw(&[
                "--f_note",
                "--f_login=platonlap@mail.ru",
                "--f_tel=+7 903 123 45 78",
            ]),
            Vec::new(),
        );
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("note"), None);
        assert_eq!(fields.get("login"), Some("platonlap@mail.ru"));
    }

    #[test]
    fn empty_name_is_kept() {
        let fields = collect_fields(&raw(&["--f_=x"]), Vec::new());
        assert_eq!(fields.get(""), Some("x"));
    }

    #[test]
    fn field_pairs_override_raw_arguments() {
        let fields = collect_fields(
            &raw(&["--f_login=first@mail.ru"]),
            vec![("login".into(), "second@mail.ru".into())],
        );
        assert_eq!(fields.get("login"), Some("second@mail.ru"));
    }
}
