//! Document segmentation
//!
//! Splits raw dictionary text into per-author sections. An author heading
//! is an ordinal+name marker: one or more digits, an optional run of
//! whitespace, a dash, optional whitespace, then the rest of the line as
//! the author name. Biographical dictionaries also contain page ranges,
//! list markers and cross-references that look like headings
//! ("12- 34", "7- 12.3]"), so candidate markers are filtered before spans
//! are assigned.

use rawi_domain::AuthorSection;
use regex::Regex;
use std::sync::OnceLock;

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        // Group 1: ordinal digits. Group 2: rest of line after the dash.
        Regex::new(r"(\d+)\s*-\s*([^\n]+)").unwrap()
    })
}

/// A surviving marker match, prior to span assignment.
struct Marker<'t> {
    start: usize,
    end: usize,
    digits: &'t str,
    name: &'t str,
}

/// True when a candidate name is a numeric reference artifact rather than
/// an author heading: page ranges, cross-references, list markers. Such
/// names consist entirely of digits, periods, brackets, parens, dashes
/// and whitespace; anything containing a letter is kept, wherever the
/// letter falls.
fn is_reference_artifact(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_numeric() || c.is_whitespace() || matches!(c, '.' | '[' | ']' | '(' | ')' | '-'))
}

/// Split document text into author sections, in document order.
///
/// The i-th section's content is the text strictly between the end of its
/// marker and the start of the next surviving marker (end of text for the
/// last), trimmed. Text with no surviving markers yields an empty vector;
/// "no sections found" is the caller's signal, not an error.
///
/// Duplicate identifiers are preserved here in order; map-keyed consumers
/// collapse them last-write-wins.
pub fn segment(text: &str) -> Vec<AuthorSection> {
    let mut markers: Vec<Marker<'_>> = Vec::new();

    for caps in marker_regex().captures_iter(text) {
        let (Some(whole), Some(digits), Some(rest)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let name = rest.as_str().trim();
        if is_reference_artifact(name) {
            continue;
        }

        markers.push(Marker {
            start: whole.start(),
            end: whole.end(),
            digits: digits.as_str(),
            name,
        });
    }

    let mut sections = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let span_end = markers
            .get(i + 1)
            .map(|next| next.start)
            .unwrap_or(text.len());
        let content = text[marker.end..span_end].trim();
        sections.push(AuthorSection::from_marker(marker.digits, marker.name, content));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_yields_empty() {
        assert!(segment("").is_empty());
        assert!(segment("نص بلا علامات ترقيم").is_empty());
        assert!(segment("plain prose with numbers 123 but no dashes").is_empty());
    }

    #[test]
    fn two_sections_in_document_order() {
        let text = "5- القاضي\nنص تجريبي\n6- الفقيه\nنص آخر";
        let sections = segment(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].identifier, "5 - القاضي");
        assert_eq!(sections[0].content, "نص تجريبي");
        assert_eq!(sections[1].identifier, "6 - الفقيه");
        assert_eq!(sections[1].content, "نص آخر");
    }

    #[test]
    fn purely_numeric_name_is_excluded() {
        assert!(segment("12- 34").is_empty());
    }

    #[test]
    fn page_range_and_reference_names_are_excluded() {
        assert!(segment("7- 12.34]").is_empty());
        assert!(segment("10- 25-30").is_empty());
        assert!(segment("3- (45)").is_empty());
    }

    #[test]
    fn name_containing_letters_is_retained() {
        // Boundary case: a digit glyph inside the name does not make it a
        // reference artifact.
        let sections = segment("3- 4ياسين");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "4ياسين");
        assert_eq!(sections[0].identifier, "3 - 4ياسين");
    }

    #[test]
    fn document_with_only_false_positives_behaves_like_empty() {
        let with_artifacts = segment("12- 34\n56- 78]\n9- 10.11");
        assert!(with_artifacts.is_empty());
    }

    #[test]
    fn rejected_marker_text_stays_in_previous_section() {
        let text = "5- القاضي\nسيرة القاضي 12- 34\n6- الفقيه\nنص";
        let sections = segment(text);

        assert_eq!(sections.len(), 2);
        assert!(sections[0].content.contains("12- 34"));
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let text = "1- الأول\nسيرة الأول\n2- الثاني\nسيرة الثاني\nوتتمة السيرة";
        let sections = segment(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].content, "سيرة الثاني\nوتتمة السيرة");
    }

    #[test]
    fn marker_allows_whitespace_around_dash() {
        let sections = segment("17  -  ابن حجر\nسيرة");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "17 - ابن حجر");
        assert_eq!(sections[0].ordinal, 17);
    }

    #[test]
    fn oversized_ordinal_keeps_its_section() {
        // A digit run too long for u64 still delimits a span; the
        // identifier carries the source digits verbatim.
        let text = "99999999999999999999999- المعمر\nسيرة طويلة";
        let sections = segment(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "99999999999999999999999 - المعمر");
        assert_eq!(sections[0].ordinal, u64::MAX);
        assert_eq!(sections[0].content, "سيرة طويلة");
    }

    #[test]
    fn duplicate_markers_are_preserved_in_order() {
        let text = "5- القاضي\nأول\n5- القاضي\nثان";
        let sections = segment(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].identifier, sections[1].identifier);
        assert_eq!(sections[0].content, "أول");
        assert_eq!(sections[1].content, "ثان");
    }

    #[test]
    fn ordering_is_document_position_not_ordinal_value() {
        let text = "9- المتأخر\nنص\n2- المتقدم\nنص آخر";
        let sections = segment(text);

        assert_eq!(sections[0].ordinal, 9);
        assert_eq!(sections[1].ordinal, 2);
    }
}
