//! Author section - a delimited span of source text for one author

use std::fmt;

/// A span of document text attributed to one author marker.
///
/// Sections are produced by the segmenter in document order (by marker
/// position, not ordinal value) and are immutable once created. The
/// identifier is `"<ordinal> - <name>"` with the ordinal digits exactly
/// as they appeared in the source, not renumbered.
///
/// Identifiers are not guaranteed unique: if the same ordinal+name text
/// recurs verbatim in a document, any map keyed by identifier collapses
/// the duplicates with the later occurrence winning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSection {
    /// `"<ordinal> - <name>"`, built from the marker as matched
    pub identifier: String,

    /// Ordinal parsed from the marker's digit string
    pub ordinal: u64,

    /// Author name captured after the dash, trimmed
    pub name: String,

    /// Raw span of source text between this marker and the next, trimmed
    pub content: String,
}

impl AuthorSection {
    /// Build a section from the matched marker parts and content span.
    ///
    /// The identifier keeps the digit string exactly as matched. The
    /// digit string is a display value; a run too long for `u64`
    /// saturates the ordinal rather than dropping the section and its
    /// span.
    pub fn from_marker(
        digits: &str,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let ordinal: u64 = digits.parse().unwrap_or(u64::MAX);
        let name = name.into();
        Self {
            identifier: format!("{} - {}", digits, name),
            ordinal,
            name,
            content: content.into(),
        }
    }
}

impl fmt::Display for AuthorSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_joins_ordinal_and_name() {
        let section = AuthorSection::from_marker("5", "القاضي", "نص تجريبي");
        assert_eq!(section.identifier, "5 - القاضي");
        assert_eq!(section.ordinal, 5);
    }

    #[test]
    fn identifier_keeps_source_digits() {
        // The digit string is a display value from the source.
        let section = AuthorSection::from_marker("07", "الفقيه", "");
        assert_eq!(section.identifier, "07 - الفقيه");
        assert_eq!(section.ordinal, 7);
    }

    #[test]
    fn oversized_digit_run_saturates_ordinal() {
        let digits = "99999999999999999999999";
        let section = AuthorSection::from_marker(digits, "فلان", "نص");
        assert_eq!(section.ordinal, u64::MAX);
        assert_eq!(section.identifier, format!("{} - فلان", digits));
        assert_eq!(section.content, "نص");
    }
}
