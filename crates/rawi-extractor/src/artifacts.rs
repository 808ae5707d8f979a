//! Per-identifier download artifacts
//!
//! Each processed author can leave two files behind: the raw section
//! content as `<stem>.txt` and the canonical record as
//! `<stem>_data.json`, where the stem is the filesystem-safe transform of
//! the identifier (illegal characters stripped, spaces to underscores).

use rawi_domain::naming::artifact_stem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write the raw section content for an identifier.
pub fn write_section_text(
    dir: &Path,
    identifier: &str,
    content: &str,
) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.txt", artifact_stem(identifier)));
    fs::write(&path, content)?;
    Ok(path)
}

/// Write the canonicalized record JSON for an identifier.
pub fn write_record_json(
    dir: &Path,
    identifier: &str,
    canonical: &str,
) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_data.json", artifact_stem(identifier)));
    fs::write(&path, canonical)?;
    Ok(path)
}
