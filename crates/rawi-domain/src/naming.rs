//! Filesystem-safe transforms of author identifiers
//!
//! Two transforms, both deterministic:
//! - [`storage_key`] names a record file inside the store directory:
//!   anything that is not alphanumeric, `-` or `_` becomes `_`.
//! - [`artifact_stem`] names download artifacts (`.txt`/`.json`): the
//!   characters illegal in common filesystems are stripped and spaces
//!   become underscores, keeping Arabic names readable.

/// Transform an identifier into the stem of its record file.
///
/// Alphanumeric here is Unicode-aware, so Arabic letters pass through
/// unchanged and distinct Arabic identifiers keep distinct keys.
pub fn storage_key(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Characters rejected by at least one mainstream filesystem.
const ILLEGAL: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Transform an identifier into the stem of its download artifacts.
pub fn artifact_stem(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !ILLEGAL.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
