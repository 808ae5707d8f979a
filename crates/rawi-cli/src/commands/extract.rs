//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rawi_extractor::{Extractor, ExtractorConfig, Pipeline};
use rawi_llm::GeminiProvider;
use rawi_store::JsonFileStore;
use std::fs;
use std::path::Path;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    data_dir: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let api_key = args
        .api_key
        .or_else(|| config.api_key.clone())
        .ok_or_else(|| {
            CliError::Config(
                "No API key configured. Pass --api-key, set GOOGLE_API_KEY, or add \
                 api_key to the config file"
                    .to_string(),
            )
        })?;

    let model = args.model.unwrap_or_else(|| config.model.clone());

    println!("{}", formatter.info(&format!("Reading {}", args.pdf.display())));
    let bytes = fs::read(&args.pdf)?;
    let text = rawi_pdf::extract_text(&bytes)?;

    let provider = GeminiProvider::new(api_key, model);
    let extractor = Extractor::new(provider, ExtractorConfig::default());
    let store = JsonFileStore::new(data_dir)?;

    let mut pipeline = Pipeline::new(extractor, store);
    if let Some(dir) = args.artifacts {
        pipeline = pipeline.with_artifacts_dir(dir);
    }
    if let Some(path) = args.export {
        pipeline = pipeline.with_export_path(path);
    }

    let report = pipeline.run(&text).await?;

    if report.is_empty() {
        println!("{}", formatter.warning("No author sections found in the document"));
        return Ok(());
    }

    println!(
        "{}",
        formatter.info(&format!("Found {} author sections", report.sections_found))
    );
    println!();

    for success in &report.successes {
        let location = success
            .saved_to
            .as_ref()
            .map(|p| format!(" -> {}", p.display()))
            .unwrap_or_default();
        println!(
            "{}",
            formatter.success(&format!(
                "✓ {} ({}){}",
                success.identifier, success.phase, location
            ))
        );
    }

    for failure in &report.failures {
        println!("{}", formatter.error(&format!("✗ {}", failure)));
    }

    for warning in &report.persistence_warnings {
        println!(
            "{}",
            formatter.warning(&format!("! {}: {}", warning.identifier, warning.reason))
        );
    }

    println!();
    println!(
        "{} extracted, {} failed",
        report.successes.len(),
        report.failures.len()
    );
    if let Some(path) = &report.export_path {
        println!("Aggregate export written to {}", path.display());
    }

    Ok(())
}
