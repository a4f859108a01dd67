//! Normalize raw category labels into directory names

use crate::error::IngestError;
use regex::Regex;
use std::sync::LazyLock;

// Ordinal prefix as the rubric numbers its categories: "4. Robustness..."
static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+").expect("ordinal prefix pattern is valid"));

/// Map a raw classifier category label to its canonical directory name
///
/// The rubric numbers its categories and some revisions append a
/// parenthetical nickname, and the model often echoes both. Applied in
/// order:
///
/// 1. drop everything up to and including the first `N. ` ordinal prefix
/// 2. drop a trailing parenthetical suffix and trim
///
/// The result must be non-empty and usable as a single path component.
/// No allow-list is applied: the rubric taxonomy changes between prompt
/// revisions, so the label text is the only category signal.
pub fn normalize_category(raw: &str) -> Result<String, IngestError> {
    let mut label = raw.trim();

    if let Some(m) = ORDINAL_PREFIX.find(label) {
        label = &label[m.end()..];
    }

    let label = match (label.rfind('('), label.trim_end().ends_with(')')) {
        (Some(open), true) => label[..open].trim_end(),
        _ => label.trim_end(),
    };
    let label = label.trim();

    if label.is_empty() {
        return Err(IngestError::InvalidCategory(format!(
            "empty after normalization: {:?}",
            raw
        )));
    }
    if label == "." || label == ".." || label.chars().any(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(IngestError::InvalidCategory(format!(
            "not a safe directory name: {:?}",
            label
        )));
    }

    Ok(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_label_with_nickname() {
        assert_eq!(
            normalize_category("4. Robustness and Reliability (The Shields)").unwrap(),
            "Robustness and Reliability"
        );
    }

    #[test]
    fn test_plain_label_unchanged() {
        assert_eq!(
            normalize_category("Algorithmic Foundations").unwrap(),
            "Algorithmic Foundations"
        );
    }

    #[test]
    fn test_numbered_label_without_nickname() {
        assert_eq!(
            normalize_category("3. Semantic Reasoning").unwrap(),
            "Semantic Reasoning"
        );
    }

    #[test]
    fn test_nickname_without_number() {
        assert_eq!(
            normalize_category("Speed and Deployment (The Racers)").unwrap(),
            "Speed and Deployment"
        );
    }

    #[test]
    fn test_only_first_ordinal_prefix_is_dropped() {
        // A title-ish label with an interior dot-space must survive past
        // the first prefix
        assert_eq!(
            normalize_category("2. Systems at 10. Scale").unwrap(),
            "Systems at 10. Scale"
        );
    }

    #[test]
    fn test_interior_parenthetical_kept() {
        assert_eq!(
            normalize_category("Sim-to-Real (domain) Transfer").unwrap(),
            "Sim-to-Real (domain) Transfer"
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(
            normalize_category("  Semantic Reasoning  ").unwrap(),
            "Semantic Reasoning"
        );
    }

    #[test]
    fn test_empty_after_normalization_rejected() {
        assert!(normalize_category("1. (The Void)").is_err());
        assert!(normalize_category("   ").is_err());
    }

    #[test]
    fn test_path_separators_rejected() {
        assert!(normalize_category("Systems/Scale").is_err());
        assert!(normalize_category("Systems\\Scale").is_err());
    }

    #[test]
    fn test_dot_names_rejected() {
        assert!(normalize_category("1. ..").is_err());
    }

    #[test]
    fn test_deterministic() {
        let label = "5. Speed and Deployment (The Racers)";
        assert_eq!(
            normalize_category(label).unwrap(),
            normalize_category(label).unwrap()
        );
    }
}
