//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use rawi_domain::traits::RecordStore;
use rawi_store::JsonFileStore;
use std::path::Path;

/// Execute the list command.
pub async fn execute_list(data_dir: &Path, formatter: &Formatter) -> Result<()> {
    let store = JsonFileStore::new(data_dir)?;
    let entries = store.list_all()?;

    println!("{}", formatter.format_entries(&entries)?);

    Ok(())
}
