//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rawi_domain::traits::RecordStore;
use rawi_store::JsonFileStore;
use std::path::Path;

/// Execute the search command.
pub async fn execute_search(
    args: SearchArgs,
    data_dir: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.term.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Search term cannot be empty".to_string(),
        ));
    }

    let store = JsonFileStore::new(data_dir)?;
    let entries = store.search(&args.term)?;

    println!("{}", formatter.format_entries(&entries)?);

    Ok(())
}
