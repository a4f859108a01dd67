//! Catalog record for a classified paper

use serde::{Deserialize, Serialize};

/// A single entry in the paper catalog.
///
/// Records are append-only: once a record is in the catalog it is never
/// edited in place. `filename` is the unique key — the catalog rejects a
/// second record with the same filename.
///
/// Field order here is the serialized field order; the catalog file is
/// kept under version control, so the layout must stay stable and
/// human-diffable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Full paper title as reported by the classifier
    pub title: String,

    /// Canonical category name (normalized, filesystem-safe)
    pub category: String,

    /// One-sentence summary of the paper's contribution
    #[serde(default)]
    pub summary: String,

    /// Why the classifier chose this category, when it said so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,

    /// Key concepts named by the classifier, in its order
    #[serde(default)]
    pub key_concepts: Vec<String>,

    /// Document filename — unique key across the catalog
    pub filename: String,

    /// Fully-qualified link to the archived copy
    pub reference_link: String,
}

impl PaperRecord {
    /// Basic integrity check: the key fields must be non-empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category must not be empty".to_string());
        }
        if self.filename.trim().is_empty() {
            return Err("filename must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PaperRecord {
        PaperRecord {
            title: "Flow Matching for Robot Control".to_string(),
            category: "Algorithmic Foundations".to_string(),
            summary: "Applies flow matching to manipulation policies.".to_string(),
            justification: None,
            key_concepts: vec!["flow matching".to_string(), "SDEs".to_string()],
            filename: "flow_matching.pdf".to_string(),
            reference_link: "https://example.com/papers/Algorithmic Foundations/flow_matching.pdf"
                .to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut record = sample_record();
        record.title = "  ".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_filename() {
        let mut record = sample_record();
        record.filename = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_serialized_field_order_is_stable() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let title_at = json.find("\"title\"").unwrap();
        let category_at = json.find("\"category\"").unwrap();
        let filename_at = json.find("\"filename\"").unwrap();
        let link_at = json.find("\"reference_link\"").unwrap();
        assert!(title_at < category_at);
        assert!(category_at < filename_at);
        assert!(filename_at < link_at);
    }

    #[test]
    fn test_absent_justification_is_skipped() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(!json.contains("justification"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{
            "title": "A Paper",
            "category": "Semantic Reasoning",
            "filename": "a_paper.pdf",
            "reference_link": "https://example.com/a_paper.pdf"
        }"#;
        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert!(record.summary.is_empty());
        assert!(record.key_concepts.is_empty());
        assert!(record.justification.is_none());
    }
}
