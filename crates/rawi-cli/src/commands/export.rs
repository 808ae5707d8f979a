//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use rawi_domain::traits::RecordStore;
use rawi_store::JsonFileStore;
use std::path::Path;

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    data_dir: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let store = JsonFileStore::new(data_dir)?;
    let entries = store.list_all()?;

    if entries.is_empty() {
        println!("{}", formatter.warning("No records to export"));
        return Ok(());
    }

    let written = store.export_all(&args.destination)?;
    println!(
        "{}",
        formatter.success(&format!(
            "Exported {} records to {}",
            entries.len(),
            written.display()
        ))
    );

    Ok(())
}
