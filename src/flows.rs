//! Trait seams for the model-backed collaborators. The core never talks
//! to a provider itself; the application shell injects implementations.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A draft prompt plus the optional context the user supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub original_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

impl OptimizeRequest {
    pub fn new(original_prompt: impl Into<String>) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            ..Self::default()
        }
    }
}

/// A 0-10 score with the rationale behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricScore {
    pub score: u8,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub clarity: MetricScore,
    pub specificity: MetricScore,
    pub engagement: MetricScore,
}

/// What was good and what was missing in the user's draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationDetails {
    /// 0-100 confidence in the rewritten prompt.
    pub confidence_score: u8,
    pub original_prompt_analysis: PromptAnalysis,
    pub performance_metrics: PerformanceMetrics,
    pub suggestions: Vec<String>,
    pub general_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeOutcome {
    pub optimized_prompt: String,
    pub details: OptimizationDetails,
}

/// Rewrites a draft prompt and scores the result.
pub trait Rewriter {
    fn rewrite(&self, request: &OptimizeRequest) -> Result<OptimizeOutcome>;
}

/// Suggests an expert persona for the target AI to adopt.
pub trait PersonaSuggester {
    fn suggest(&self, prompt: &str) -> Result<String>;
}

/// Produces a prose summary of what changed between the two prompts.
pub trait Summarizer {
    fn summarize(&self, original: &str, optimized: &str) -> Result<String>;
}
