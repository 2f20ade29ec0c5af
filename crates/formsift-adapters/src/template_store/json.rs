//! JSON file document store.
//!
//! Stores templates in the table layout used by TinyDB, so existing form
//! databases can be read as they are:
//!
//! ```json
//! {
//!   "_default": {
//!     "1": { "name": "Данные пользователя", "login": "email", "tel": "phone" },
//!     "2": { "name": "Проба", "f_name1": "email", "f_name2": "date" }
//!   }
//! }
//! ```
//!
//! Every attribute except `name` is a field whose value is the stored type
//! name. Documents are reported in ascending numeric id order. A missing or
//! blank file is an empty store. The whole file is read on every query; other
//! tables in the file are left untouched by writes, except by
//! [`JsonDocumentStore::overwrite`], which never reads the file.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument};

use formsift_core::{
    application::{ApplicationError, ports::TemplateRepository},
    domain::{NAME_ATTRIBUTE, Template, TemplateDocument},
    error::{CoreError, CoreResult},
};

/// Table holding template documents.
pub const DEFAULT_TABLE: &str = "_default";

/// File-backed template repository.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored documents in id order.
    pub fn documents(&self) -> CoreResult<Vec<TemplateDocument>> {
        Ok(self
            .load_table()?
            .into_iter()
            .map(|(_, doc)| doc)
            .collect())
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.load_table()?.is_empty())
    }

    /// Append a template; returns the id it was stored under.
    #[instrument(skip_all, fields(store = %self.path.display(), template = template.name()))]
    pub fn insert(&self, template: &Template) -> CoreResult<u64> {
        template.validate()?;
        let mut table = self.load_table()?;
        let id = table.keys().next_back().map_or(1, |last| last + 1);
        table.insert(id, TemplateDocument::from(template));
        self.save_table(&table)?;
        debug!(id, "Template stored");
        Ok(id)
    }

    /// Remove every document.
    pub fn truncate(&self) -> CoreResult<()> {
        self.save_table(&BTreeMap::new())
    }

    /// Replace the store's contents with `documents`, numbered from 1.
    ///
    /// Nothing is written unless every document is a valid template.
    #[instrument(skip_all, fields(store = %self.path.display(), count = documents.len()))]
    pub fn seed(&self, documents: &[TemplateDocument]) -> CoreResult<()> {
        let table = numbered(documents)?;
        self.save_table(&table)
    }

    /// Like [`seed`](Self::seed), but replaces the whole file without reading
    /// it first. Works on a file that is not valid JSON; drops other tables.
    #[instrument(skip_all, fields(store = %self.path.display(), count = documents.len()))]
    pub fn overwrite(&self, documents: &[TemplateDocument]) -> CoreResult<()> {
        let table = numbered(documents)?;
        self.write_tables(Map::new(), &table)
    }

    // ── file access ────────────────────────────────────────────────────────

    fn load_table(&self) -> Result<BTreeMap<u64, TemplateDocument>, JsonStoreError> {
        let Some(mut tables) = self.read_tables()? else {
            return Ok(BTreeMap::new());
        };

        let table = match tables.remove(DEFAULT_TABLE) {
            None => return Ok(BTreeMap::new()),
            Some(Value::Object(table)) => table,
            Some(_) => {
                return Err(JsonStoreError::Malformed {
                    path: self.path.clone(),
                    reason: format!("table '{DEFAULT_TABLE}' is not an object"),
                });
            }
        };

        table
            .into_iter()
            .map(|(id, attrs)| {
                let numeric = id.parse::<u64>().map_err(|_| JsonStoreError::Corrupt {
                    id: id.clone(),
                    reason: "document id is not a number".into(),
                })?;
                Ok((numeric, document_from_value(&id, attrs)?))
            })
            .collect()
    }

    fn read_tables(&self) -> Result<Option<Map<String, Value>>, JsonStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(JsonStoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&raw) {
            Ok(Value::Object(tables)) => Ok(Some(tables)),
            Ok(_) => Err(JsonStoreError::Malformed {
                path: self.path.clone(),
                reason: "top level is not an object".into(),
            }),
            Err(source) => Err(JsonStoreError::Parse {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save_table(&self, table: &BTreeMap<u64, TemplateDocument>) -> CoreResult<()> {
        let tables = self.read_tables()?.unwrap_or_default();
        self.write_tables(tables, table)
    }

    fn write_tables(
        &self,
        mut tables: Map<String, Value>,
        table: &BTreeMap<u64, TemplateDocument>,
    ) -> CoreResult<()> {
        let documents: Map<String, Value> = table
            .iter()
            .map(|(id, doc)| (id.to_string(), document_to_value(doc)))
            .collect();
        tables.insert(DEFAULT_TABLE.to_owned(), Value::Object(documents));

        let json = serde_json::to_string_pretty(&Value::Object(tables)).map_err(|source| {
            JsonStoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| JsonStoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| JsonStoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), documents = table.len(), "Store written");
        Ok(())
    }
}

impl TemplateRepository for JsonDocumentStore {
    #[instrument(skip_all, fields(store = %self.path.display()))]
    fn find_containing_all_keys(&self, keys: &[String]) -> CoreResult<Vec<TemplateDocument>> {
        Ok(self
            .load_table()?
            .into_values()
            .filter(|doc| doc.contains_all_keys(keys))
            .collect())
    }

    fn list(&self) -> CoreResult<Vec<TemplateDocument>> {
        self.documents()
    }
}

/// Check every document and number them from 1.
fn numbered(documents: &[TemplateDocument]) -> CoreResult<BTreeMap<u64, TemplateDocument>> {
    let mut table = BTreeMap::new();
    for (id, doc) in (1u64..).zip(documents) {
        Template::try_from(doc.clone())?;
        table.insert(id, doc.clone());
    }
    Ok(table)
}

fn document_from_value(id: &str, attrs: Value) -> Result<TemplateDocument, JsonStoreError> {
    let corrupt = |reason: String| JsonStoreError::Corrupt {
        id: id.to_owned(),
        reason,
    };

    let Value::Object(mut attrs) = attrs else {
        return Err(corrupt("document is not an object".into()));
    };

    let name = match attrs.remove(NAME_ATTRIBUTE) {
        Some(Value::String(name)) => name,
        Some(_) => return Err(corrupt(format!("'{NAME_ATTRIBUTE}' is not a string"))),
        None => return Err(corrupt(format!("missing '{NAME_ATTRIBUTE}' attribute"))),
    };

    let mut doc = TemplateDocument::new(name);
    for (field, value) in attrs {
        match value {
            Value::String(type_name) => {
                doc.fields.insert(field, type_name);
            }
            _ => return Err(corrupt(format!("field '{field}' has a non-string type"))),
        }
    }
    Ok(doc)
}

fn document_to_value(doc: &TemplateDocument) -> Value {
    let mut attrs = Map::new();
    attrs.insert(NAME_ATTRIBUTE.to_owned(), Value::String(doc.name.clone()));
    for (field, type_name) in &doc.fields {
        attrs.insert(field.clone(), Value::String(type_name.clone()));
    }
    Value::Object(attrs)
}

// ── errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum JsonStoreError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("'{}' is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("'{}' is not a document store: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("document '{id}' is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
}

impl From<JsonStoreError> for CoreError {
    fn from(err: JsonStoreError) -> Self {
        match err {
            JsonStoreError::Corrupt { id, reason } => {
                ApplicationError::CorruptDocument { id, reason }.into()
            }
            other => ApplicationError::RepositoryUnavailable {
                reason: other.to_string(),
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsift_core::domain::FieldType;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonDocumentStore {
        JsonDocumentStore::new(dir.path().join("forms_db.json"))
    }

    fn keys(ks: &[&str]) -> Vec<String> {
        ks.iter().map(|k| (*k).to_owned()).collect()
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty().unwrap());
        assert!(store
            .find_containing_all_keys(&keys(&["login"]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn reads_tinydb_layout_in_id_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"_default": {
                "10": {"name": "ten", "login": "email"},
                "2": {"name": "two", "login": "email", "tel": "phone"},
                "1": {"name": "one", "order_id": "text"}
            }}"#,
        )
        .unwrap();

        let names: Vec<String> = store
            .find_containing_all_keys(&keys(&["login"]))
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["two", "ten"]);

        let two = &store.documents().unwrap()[1];
        assert_eq!(two.fields.get("tel").map(String::as_str), Some("phone"));
        assert!(!two.fields.contains_key("name"));
    }

    #[test]
    fn seed_then_query() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.seed(&crate::builtin_templates::all_documents()).unwrap();

        let found = store
            .find_containing_all_keys(&keys(&["order_date", "login"]))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Проба2");

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("Данные пользователя"), "UTF-8 is written unescaped");
    }

    #[test]
    fn seed_rejects_invalid_documents_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let bad = TemplateDocument::new("bad").with_field("x", "number");
        assert!(store.seed(&[bad]).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn insert_appends_after_highest_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.seed(&crate::builtin_templates::all_documents()).unwrap();

        let note = Template::builder("Note")
            .field("body", FieldType::Text)
            .build()
            .unwrap();
        assert_eq!(store.insert(&note).unwrap(), 6);
        assert_eq!(store.documents().unwrap().last().unwrap().name, "Note");
    }

    #[test]
    fn truncate_keeps_other_tables() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"_default": {"1": {"name": "a", "x": "text"}}, "audit": {"1": {"who": "me"}}}"#,
        )
        .unwrap();

        store.truncate().unwrap();
        assert!(store.is_empty().unwrap());
        assert!(fs::read_to_string(store.path()).unwrap().contains("audit"));
    }

    #[test]
    fn seed_fails_on_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.seed(&crate::builtin_templates::all_documents()).is_err());
    }

    #[test]
    fn overwrite_replaces_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        store
            .overwrite(&crate::builtin_templates::all_documents())
            .unwrap();
        assert_eq!(store.documents().unwrap().len(), 5);
        let found = store
            .find_containing_all_keys(&keys(&["login", "tel"]))
            .unwrap();
        assert!(found.iter().any(|d| d.name == "Данные пользователя"));
    }

    #[test]
    fn overwrite_rejects_invalid_documents_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let bad = TemplateDocument::new("bad").with_field("x", "number");
        assert!(store.overwrite(&[bad]).is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn non_string_attribute_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"_default": {"1": {"name": "a", "age": 3}}}"#,
        )
        .unwrap();

        assert!(matches!(
            store.list(),
            Err(CoreError::Application(ApplicationError::CorruptDocument { .. }))
        ));
    }

    #[test]
    fn missing_name_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"_default": {"1": {"login": "email"}}}"#).unwrap();

        assert!(matches!(
            store.list(),
            Err(CoreError::Application(ApplicationError::CorruptDocument { .. }))
        ));
    }

    #[test]
    fn invalid_json_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.list(),
            Err(CoreError::Application(ApplicationError::RepositoryUnavailable { .. }))
        ));
    }

    #[test]
    fn unknown_type_is_kept_for_the_engine_to_report() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"_default": {"1": {"name": "a", "login": "mail"}}}"#,
        )
        .unwrap();

        let docs = store.list().unwrap();
        assert_eq!(docs[0].fields.get("login").map(String::as_str), Some("mail"));
    }
}
