//! Implementation of the `formsift list` command.

use formsift_adapters::JsonDocumentStore;
use formsift_core::{
    application::TemplateCatalog,
    domain::{Template, TemplateDocument},
};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store_path = config.store.path;
    let catalog = TemplateCatalog::new(Box::new(JsonDocumentStore::new(&store_path)));
    let templates = catalog.list()?;

    // The global JSON output format applies to every command.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if templates.is_empty() {
                output.info(&format!(
                    "No templates in {} (run 'formsift init' to add the built-in set)",
                    store_path.display()
                ))?;
                return Ok(());
            }
            output.header(&format!("Templates in {}:", store_path.display()))?;
            for template in &templates {
                output.data(&format!("  {:?}  {}", template.name(), schema(template)))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                output.data(template.name())?;
            }
        }

        ListFormat::Json => {
            let documents: Vec<TemplateDocument> =
                templates.iter().map(TemplateDocument::from).collect();
            output.json(&documents)?;
        }
    }

    Ok(())
}

/// `field: type` pairs in field-name order.
fn schema(template: &Template) -> String {
    template
        .fields()
        .iter()
        .map(|(field, ty)| format!("{field}: {ty}"))
        .collect::<Vec<_>>()
        .join(", ")
}
