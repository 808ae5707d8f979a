//! Prompt engineering for biographical extraction
//!
//! Two prompts per section at most. The primary prompt embeds the full
//! record schema and the whole section content. The fallback prompt is
//! stricter and smaller: a simplified schema, an excerpt of the content,
//! and an explicit demand for nothing but the JSON object - generation
//! services that wrapped or padded the first response usually comply the
//! second time.

/// Builds the prompts for one author section.
pub struct PromptBuilder<'a> {
    identifier: &'a str,
    content: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder for a section.
    pub fn new(identifier: &'a str, content: &'a str) -> Self {
        Self {
            identifier,
            content,
        }
    }

    /// Build the primary prompt: full schema, full content.
    pub fn primary(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("This data belongs to author: {}\n", self.identifier));
        prompt.push_str(&format!(
            "The context of this author is: {}\n",
            self.content
        ));
        prompt.push_str("- Return structured JSON data as follows:\n\n");
        prompt.push_str(RECORD_SCHEMA);
        prompt.push_str("\n\n");
        prompt.push_str(PRIMARY_RULES);

        prompt
    }

    /// Build the fallback prompt: simplified schema, excerpted content.
    ///
    /// `excerpt_chars` counts characters, not bytes - the content is
    /// Arabic script.
    pub fn fallback(&self, excerpt_chars: usize) -> String {
        let excerpt: String = self.content.chars().take(excerpt_chars).collect();

        let mut prompt = String::new();
        prompt.push_str(&format!(
            "Analyze this text about author {} and return ONLY a valid JSON object following this exact structure.\n",
            self.identifier
        ));
        prompt.push_str(
            "Your response should contain nothing but the JSON object itself - no explanations, no markdown:\n\n",
        );
        prompt.push_str(SIMPLIFIED_SCHEMA);
        prompt.push_str("\n\n");
        prompt.push_str(&format!(
            "Expand with other fields as appropriate from the text: {}...\n",
            excerpt
        ));

        prompt
    }
}

const RECORD_SCHEMA: &str = r#"```json
{
  "author": {
    "full_name": "string",
    "aliases": ["string"] | null,
    "students": ["string"] | null,
    "teachers": ["string"] | null,
    "birth_year": integer | null,
    "death_year": integer | null,
    "birthplace": "string" | null,
    "primary_locations": ["string"] | null,
    "era": "string" | null,
    "travel_history": [
      {
        "travel_id": "string",
        "city": "string",
        "year_visited": integer | null
      }
    ] | null,
    "did_travel_for_hadith": boolean | null,
    "memory_changes": "string" | null,
    "known_tadlis": boolean | null,
    "scholarly_reliability": "string" | null,
    "scholarly_evaluations": ["string"] | null
  },
  "hadiths": [
    {
      "hadith_id": "string"
    }
  ] | null,
  "places": [
    {
      "place_id": "string",
      "name": "string",
      "type": "string"
    }
  ] | null
}
```"#;

const PRIMARY_RULES: &str = r#"- Important: Provide a valid JSON response that can be parsed properly.
- Use null for any field the text does not cover.
- Make sure your response contains only valid JSON."#;

const SIMPLIFIED_SCHEMA: &str = r#"{
  "author": {
    "full_name": "The author's full name",
    "aliases": ["alias1", "alias2"] or null,
    "students": ["student1", "student2"] or null,
    "birth_year": 123 or null,
    "death_year": 456 or null
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_includes_identifier_and_content() {
        let builder = PromptBuilder::new("5 - القاضي", "نص السيرة الكامل");
        let prompt = builder.primary();

        assert!(prompt.contains("This data belongs to author: 5 - القاضي"));
        assert!(prompt.contains("نص السيرة الكامل"));
    }

    #[test]
    fn test_primary_includes_full_schema() {
        let builder = PromptBuilder::new("5 - القاضي", "نص");
        let prompt = builder.primary();

        assert!(prompt.contains("\"travel_history\""));
        assert!(prompt.contains("\"known_tadlis\""));
        assert!(prompt.contains("\"scholarly_evaluations\""));
        assert!(prompt.contains("only valid JSON"));
    }

    #[test]
    fn test_fallback_includes_simplified_schema_only() {
        let builder = PromptBuilder::new("5 - القاضي", "نص");
        let prompt = builder.fallback(500);

        assert!(prompt.contains("\"full_name\""));
        assert!(prompt.contains("\"death_year\""));
        assert!(!prompt.contains("\"travel_history\""));
        assert!(prompt.contains("nothing but the JSON object"));
    }

    #[test]
    fn test_fallback_truncates_by_characters() {
        // 600 Arabic characters; byte-wise truncation would split the
        // script mid-codepoint.
        let content: String = std::iter::repeat('س').take(600).collect();
        let builder = PromptBuilder::new("1 - فلان", &content);

        let prompt = builder.fallback(500);
        let embedded: usize = prompt.chars().filter(|c| *c == 'س').count();
        assert_eq!(embedded, 500);
    }

    #[test]
    fn test_fallback_keeps_short_content_whole() {
        let builder = PromptBuilder::new("1 - فلان", "نص قصير");
        let prompt = builder.fallback(500);
        assert!(prompt.contains("نص قصير..."));
    }
}
