//! Get command implementation.

use crate::cli::GetArgs;
use crate::error::Result;
use crate::output::Formatter;
use rawi_domain::traits::RecordStore;
use rawi_store::JsonFileStore;
use std::path::Path;

/// Execute the get command.
pub async fn execute_get(args: GetArgs, data_dir: &Path, formatter: &Formatter) -> Result<()> {
    let store = JsonFileStore::new(data_dir)?;

    match store.get(&args.identifier)? {
        Some(record) => {
            println!("{}", formatter.format_record(&record)?);
        }
        None => {
            println!(
                "{}",
                formatter.warning(&format!("No record found for '{}'", args.identifier))
            );
        }
    }

    Ok(())
}
