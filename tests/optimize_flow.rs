//! End-to-end run: optimize a draft prompt with stub collaborators,
//! persist the record, and reload it from disk.

use promptforge_core::diff::DiffKind;
use promptforge_core::error::Result;
use promptforge_core::flows::{
    MetricScore, OptimizationDetails, OptimizeOutcome, OptimizeRequest, PerformanceMetrics,
    PersonaSuggester, PromptAnalysis, Rewriter, Summarizer,
};
use promptforge_core::history::{HistoryStore, JsonHistory};
use promptforge_core::logger::Logger;
use promptforge_core::optimizer::Optimizer;

struct TemplateRewriter;

impl Rewriter for TemplateRewriter {
    fn rewrite(&self, request: &OptimizeRequest) -> Result<OptimizeOutcome> {
        let persona = request.persona.as_deref().unwrap_or("an expert assistant");
        let score = |n| MetricScore { score: n, explanation: "stub".into() };
        Ok(OptimizeOutcome {
            optimized_prompt: format!("Act as {persona}. {}", request.original_prompt),
            details: OptimizationDetails {
                confidence_score: 85,
                original_prompt_analysis: PromptAnalysis {
                    strengths: vec!["Concrete subject".into()],
                    areas_for_improvement: vec!["No persona".into()],
                },
                performance_metrics: PerformanceMetrics {
                    clarity: score(8),
                    specificity: score(7),
                    engagement: score(8),
                },
                suggestions: vec!["State the desired length".into()],
                general_tips: vec!["Lead with the task verb".into()],
            },
        })
    }
}

struct TemplateSummarizer;

impl Summarizer for TemplateSummarizer {
    fn summarize(&self, _original: &str, _optimized: &str) -> Result<String> {
        Ok("Prepended a persona to frame the task.".into())
    }
}

struct TemplatePersonas;

impl PersonaSuggester for TemplatePersonas {
    fn suggest(&self, _prompt: &str) -> Result<String> {
        Ok("a patient physics teacher".into())
    }
}

#[test]
fn optimize_persist_and_reload() {
    let optimizer = Optimizer::new(
        TemplateRewriter,
        TemplateSummarizer,
        TemplatePersonas,
        Logger::new(42),
    );

    let mut request = OptimizeRequest::new("Explain black holes to a child.");
    request.persona = Some(optimizer.suggest_persona(&request.original_prompt).unwrap());

    let record = optimizer.optimize(&request).unwrap();

    // The diff must cover both texts completely and mark the persona as new.
    assert_eq!(record.diff.reconstruct_original(), "Explain black holes to a child.");
    assert_eq!(
        record.diff.reconstruct_optimized(),
        "Act as a patient physics teacher. Explain black holes to a child."
    );
    let added: String = record
        .diff
        .iter()
        .filter(|s| s.kind == DiffKind::Added)
        .map(|s| s.text.as_str())
        .collect();
    assert!(added.contains("patient physics teacher"), "added text: {added:?}");

    // Persist, then reload from a fresh handle.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    {
        let mut store = JsonHistory::load(&path).unwrap();
        store.add(record.clone()).unwrap();
    }

    let reloaded = JsonHistory::load(&path).unwrap();
    let records = reloaded.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, record.id);
    assert_eq!(records[0].summary, "Prepended a persona to frame the task.");
    assert_eq!(records[0].diff, record.diff);
}

#[test]
fn self_test_gauntlet_passes() {
    let log = promptforge_core::selftest::run();
    assert!(log.contains("Self-Test PASSED"), "self-test log:\n{log}");
}
