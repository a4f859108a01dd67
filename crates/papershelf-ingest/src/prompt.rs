//! Rubric prompt handed to the classifier

/// Default classification rubric
///
/// Rubric taxonomy revisions are configuration, not code: pass a
/// replacement prompt through `RubricPrompt::custom` (wired to
/// `IngestConfig.rubric`) and the rest of the pipeline is unchanged, since
/// category names are taken from the classifier's output rather than an
/// allow-list.
pub const DEFAULT_RUBRIC: &str = r#"You are an expert Robotics AI researcher. Your job is to read the attached paper and classify it into ONE of these categories based on its primary focus:

1. Systems and Scale (Focus on training infra, memory, distributed computing)
2. Algorithmic Foundations (Focus on loss functions, math, Flow matching, SDEs)
3. Semantic Reasoning (Focus on long-horizon planning, CoT, sub-goals)
4. Robustness and Reliability (Focus on sim-to-real, domain shift, active correction)
5. Speed and Deployment (Focus on Hz, latency, quantization, edge compute)

Return ONLY a JSON object with this exact structure:
{
  "title": "Full Paper Title",
  "category": "Exact Category Name from the list above",
  "summary": "One sentence summary of the paper's contribution",
  "key_concepts": ["concept1", "concept2", "concept3"]
}
"#;

/// The rubric prompt for a pipeline run
#[derive(Debug, Clone)]
pub struct RubricPrompt {
    text: String,
}

impl RubricPrompt {
    /// Use a replacement rubric (e.g. loaded from a file)
    pub fn custom(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render the prompt text sent with every document
    pub fn render(&self) -> &str {
        &self.text
    }
}

impl Default for RubricPrompt {
    fn default() -> Self {
        Self::custom(DEFAULT_RUBRIC)
    }
}
