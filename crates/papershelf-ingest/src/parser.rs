//! Parse classifier output into a classification draft

use crate::error::IngestError;
use crate::types::ClassificationDraft;
use serde_json::Value;

/// Parse the classifier's raw text into a `ClassificationDraft`
///
/// The service is asked for a bare JSON object but routinely wraps it in a
/// markdown fence, with or without a language tag. Wrapping is stripped
/// defensively; once unwrapped, decoding is strict — any JSON syntax error
/// fails the document rather than salvaging a partial record.
pub fn parse_classifier_response(response: &str) -> Result<ClassificationDraft, IngestError> {
    let json_str = unwrap_payload(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| IngestError::MalformedResponse(format!("JSON parse error: {}", e)))?;

    let obj = json.as_object().ok_or_else(|| {
        IngestError::MalformedResponse("Expected a JSON object payload".to_string())
    })?;

    let title = required_string(obj, "title")?;
    let category = required_string(obj, "category")?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    // Some rubric revisions ask for a justification under different names
    let justification = ["justification", "bottleneck", "evidence"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.to_string());

    let key_concepts = match obj.get("key_concepts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut concepts = Vec::with_capacity(items.len());
            for item in items {
                let concept = item.as_str().ok_or_else(|| {
                    IngestError::MalformedResponse(
                        "key_concepts must be an array of strings".to_string(),
                    )
                })?;
                concepts.push(concept.to_string());
            }
            concepts
        }
        Some(_) => {
            return Err(IngestError::MalformedResponse(
                "key_concepts must be an array".to_string(),
            ))
        }
    };

    Ok(ClassificationDraft {
        title,
        category,
        summary,
        justification,
        key_concepts,
    })
}

/// Strip wrapping noise from the raw payload
///
/// Recognized wrappers, tried in order:
/// 1. language-tagged fence (```json ... ```)
/// 2. bare fence (``` ... ```)
/// 3. no wrapping — the trimmed payload is used as-is
fn unwrap_payload(response: &str) -> Result<String, IngestError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(IngestError::MalformedResponse(
                "Empty code block".to_string(),
            ));
        }

        // Skip the opening line (``` or ```json) and, when present, the
        // closing ``` line
        let mut end = lines.len();
        if lines[end - 1].trim() == "```" {
            end -= 1;
        }
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Extract a required, non-empty string field
fn required_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, IngestError> {
    let value = obj
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or_default();

    if value.is_empty() {
        return Err(IngestError::MalformedResponse(format!(
            "Missing or empty '{}'",
            key
        )));
    }
    Ok(value.to_string())
}
