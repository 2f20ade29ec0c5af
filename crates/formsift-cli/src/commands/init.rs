//! `formsift init`: seed the template store with the built-in templates.

use tracing::{info, instrument};

use formsift_adapters::{JsonDocumentStore, builtin_templates};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = JsonDocumentStore::new(config.store.path);
    let documents = builtin_templates::all_documents();

    // --force never reads the old file, so a broken store can be rebuilt.
    if args.force {
        store.overwrite(&documents)?;
    } else if store.is_empty()? {
        store.seed(&documents)?;
    } else {
        return Err(CliError::StoreExists {
            path: store.path().to_path_buf(),
        });
    }
    info!(store = %store.path().display(), count = documents.len(), "Store seeded");

    output.success(&format!(
        "Seeded {} with {} templates",
        store.path().display(),
        documents.len()
    ))?;

    Ok(())
}
