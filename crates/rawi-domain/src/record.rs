//! Structured biographical record schema and its index projection

use serde::{Deserialize, Serialize};

/// Structured biographical data for one author.
///
/// This is the schema the generation service is asked to fill. Every
/// field the source text may not cover is an explicit `Option`; a typed
/// view is derived best-effort from recovered JSON (extraction success
/// itself only requires syntactic well-formedness).
///
/// Records are never mutated after creation, only superseded by
/// re-extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Biographical profile of the author
    #[serde(default)]
    pub author: AuthorProfile,

    /// Hadiths attributed to the author, if the text names any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hadiths: Option<Vec<HadithRef>>,

    /// Places associated with the author, if the text names any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<PlaceRef>>,
}

/// The `author` object of an [`AuthorRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Full name as given in the biography
    #[serde(default)]
    pub full_name: Option<String>,

    /// Alternative names and kunyas
    #[serde(default)]
    pub aliases: Option<Vec<String>>,

    /// Named students
    #[serde(default)]
    pub students: Option<Vec<String>>,

    /// Named teachers
    #[serde(default)]
    pub teachers: Option<Vec<String>>,

    /// Birth year (Hijri, as given)
    #[serde(default)]
    pub birth_year: Option<i64>,

    /// Death year (Hijri, as given)
    #[serde(default)]
    pub death_year: Option<i64>,

    /// Place of birth
    #[serde(default)]
    pub birthplace: Option<String>,

    /// Cities the author primarily lived or taught in
    #[serde(default)]
    pub primary_locations: Option<Vec<String>>,

    /// Era or generation (tabaqa) label
    #[serde(default)]
    pub era: Option<String>,

    /// Journeys recorded in the biography
    #[serde(default)]
    pub travel_history: Option<Vec<TravelEntry>>,

    /// Whether the author travelled in search of hadith
    #[serde(default)]
    pub did_travel_for_hadith: Option<bool>,

    /// Reported changes in memory or reliability late in life
    #[serde(default)]
    pub memory_changes: Option<String>,

    /// Whether the author is reported to have practised tadlis
    #[serde(default)]
    pub known_tadlis: Option<bool>,

    /// Overall reliability grading
    #[serde(default)]
    pub scholarly_reliability: Option<String>,

    /// Evaluations quoted from other scholars
    #[serde(default)]
    pub scholarly_evaluations: Option<Vec<String>>,
}

/// One journey in an author's travel history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelEntry {
    /// Identifier for the journey
    #[serde(default)]
    pub travel_id: Option<String>,

    /// Destination city
    #[serde(default)]
    pub city: Option<String>,

    /// Year of the visit, when given
    #[serde(default)]
    pub year_visited: Option<i64>,
}

/// Reference to a hadith attributed to the author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HadithRef {
    /// Identifier of the hadith
    #[serde(default)]
    pub hadith_id: Option<String>,
}

/// Reference to a place associated with the author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRef {
    /// Identifier of the place
    #[serde(default)]
    pub place_id: Option<String>,

    /// Place name
    #[serde(default)]
    pub name: Option<String>,

    /// Kind of place (city, region, mosque, ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl AuthorRecord {
    /// Best-effort typed view of recovered JSON.
    ///
    /// Returns `None` when the value does not fit the schema (e.g. a year
    /// given as prose); callers persist the raw value regardless and only
    /// lose summary fields.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Summary projection of a stored [`AuthorRecord`].
///
/// The record store creates or updates one entry per successful save; the
/// index is a derived cache and is repopulated by later saves if lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Section identifier the record is keyed by
    pub identifier: String,

    /// Author's full name, when the typed view yielded one
    #[serde(default)]
    pub full_name: Option<String>,

    /// Birth year summary field
    #[serde(default)]
    pub birth_year: Option<i64>,

    /// Death year summary field
    #[serde(default)]
    pub death_year: Option<i64>,

    /// Era summary field
    #[serde(default)]
    pub era: Option<String>,

    /// Path of the stored record file
    pub file_path: String,

    /// Unix seconds when the record was extracted/saved
    pub extracted_at: u64,
}

impl IndexEntry {
    /// Build an entry by projecting the summary fields out of a record
    /// value. A value that does not fit the schema yields empty summary
    /// fields; the entry still points at the stored file.
    pub fn project(
        identifier: impl Into<String>,
        value: &serde_json::Value,
        file_path: impl Into<String>,
        extracted_at: u64,
    ) -> Self {
        let profile = AuthorRecord::from_value(value)
            .map(|r| r.author)
            .unwrap_or_default();
        Self {
            identifier: identifier.into(),
            full_name: profile.full_name,
            birth_year: profile.birth_year,
            death_year: profile.death_year,
            era: profile.era,
            file_path: file_path.into(),
            extracted_at,
        }
    }

    /// Case-insensitive match against identifier or full name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if self.identifier.to_lowercase().contains(&term) {
            return true;
        }
        self.full_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_view_of_full_record() {
        let value = json!({
            "author": {
                "full_name": "محمد بن إسماعيل البخاري",
                "aliases": ["أبو عبد الله"],
                "students": null,
                "teachers": ["علي بن المديني"],
                "birth_year": 194,
                "death_year": 256,
                "birthplace": "بخارى",
                "primary_locations": ["بخارى", "نيسابور"],
                "era": "أتباع أتباع التابعين",
                "travel_history": [
                    {"travel_id": "t1", "city": "بغداد", "year_visited": 210}
                ],
                "did_travel_for_hadith": true,
                "memory_changes": null,
                "known_tadlis": false,
                "scholarly_reliability": "ثقة حافظ",
                "scholarly_evaluations": ["إمام أهل الحديث"]
            },
            "hadiths": [{"hadith_id": "h1"}],
            "places": [{"place_id": "p1", "name": "بخارى", "type": "مدينة"}]
        });

        let record = AuthorRecord::from_value(&value).unwrap();
        assert_eq!(record.author.full_name.as_deref(), Some("محمد بن إسماعيل البخاري"));
        assert_eq!(record.author.birth_year, Some(194));
        assert_eq!(record.author.students, None);
        assert_eq!(record.author.did_travel_for_hadith, Some(true));
        assert_eq!(record.places.as_ref().unwrap()[0].kind.as_deref(), Some("مدينة"));
    }

    #[test]
    fn typed_view_tolerates_missing_fields() {
        let value = json!({"author": {"full_name": "الذهبي"}});
        let record = AuthorRecord::from_value(&value).unwrap();
        assert_eq!(record.author.full_name.as_deref(), Some("الذهبي"));
        assert_eq!(record.author.death_year, None);
        assert!(record.hadiths.is_none());
    }

    #[test]
    fn typed_view_rejects_mistyped_year() {
        let value = json!({"author": {"full_name": "فلان", "birth_year": "سنة مئتين"}});
        assert!(AuthorRecord::from_value(&value).is_none());
    }

    #[test]
    fn projection_survives_schema_mismatch() {
        let value = json!({"author": {"birth_year": "غير معروف"}});
        let entry = IndexEntry::project("3 - فلان", &value, "data/3_-_فلان.json", 1000);
        assert_eq!(entry.identifier, "3 - فلان");
        assert_eq!(entry.full_name, None);
        assert_eq!(entry.extracted_at, 1000);
    }

    #[test]
    fn projection_extracts_summary_fields() {
        let value = json!({
            "author": {"full_name": "مالك بن أنس", "birth_year": 93, "death_year": 179, "era": "تابعي التابعين"}
        });
        let entry = IndexEntry::project("1 - مالك", &value, "data/1_-_مالك.json", 42);
        assert_eq!(entry.full_name.as_deref(), Some("مالك بن أنس"));
        assert_eq!(entry.birth_year, Some(93));
        assert_eq!(entry.death_year, Some(179));
        assert_eq!(entry.era.as_deref(), Some("تابعي التابعين"));
    }

    #[test]
    fn search_matches_identifier_and_full_name() {
        let entry = IndexEntry {
            identifier: "5 - Al-Qadi".to_string(),
            full_name: Some("القاضي عياض".to_string()),
            birth_year: None,
            death_year: None,
            era: None,
            file_path: "x.json".to_string(),
            extracted_at: 0,
        };
        assert!(entry.matches("al-qadi"));
        assert!(entry.matches("القاضي"));
        assert!(!entry.matches("البخاري"));
    }
}
