use crate::diff::compute_diff;
use crate::error::{ErrorCode, ForgeError, Result};
use crate::flows::{OptimizeRequest, PersonaSuggester, Rewriter, Summarizer};
use crate::history::OptimizationRecord;
use crate::logger::Logger;

/// Upper bound on accepted prompt input.
pub const MAX_PROMPT_SIZE: usize = 1_000_000;

/// Orchestrates one optimization run: rewrite, diff, summarize. The
/// collaborators are injected; the diff is always computed locally, so a
/// run never fails on the diff step.
pub struct Optimizer<R, S, P> {
    rewriter: R,
    summarizer: S,
    personas: P,
    logger: Logger,
}

impl<R: Rewriter, S: Summarizer, P: PersonaSuggester> Optimizer<R, S, P> {
    pub fn new(rewriter: R, summarizer: S, personas: P, logger: Logger) -> Self {
        Self { rewriter, summarizer, personas, logger }
    }

    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizationRecord> {
        validate_prompt(&request.original_prompt, "original_prompt")?;
        self.logger.info(
            "optimizer",
            "rewrite_start",
            &format!("prompt_len={}", request.original_prompt.len()),
        );

        let outcome = match self.rewriter.rewrite(request) {
            Ok(o) => o,
            Err(e) => {
                self.logger.error("optimizer", "rewrite_failed", &e.to_string());
                return Err(e);
            }
        };
        if outcome.optimized_prompt.trim().is_empty() {
            return Err(ForgeError::Flow {
                code: ErrorCode::RewriteFailed,
                message: "Rewriter returned an empty prompt".to_string(),
                context: "rewrite".to_string(),
            });
        }

        let diff = compute_diff(&request.original_prompt, &outcome.optimized_prompt);
        self.logger.info("optimizer", "diff_done", &format!("spans={}", diff.len()));

        let summary = self
            .summarizer
            .summarize(&request.original_prompt, &outcome.optimized_prompt)?;
        if summary.trim().is_empty() {
            return Err(ForgeError::Flow {
                code: ErrorCode::SummaryFailed,
                message: "Summarizer returned an empty summary".to_string(),
                context: "summarize".to_string(),
            });
        }

        Ok(OptimizationRecord::new(request.clone(), outcome, summary, diff))
    }

    pub fn suggest_persona(&self, prompt: &str) -> Result<String> {
        validate_prompt(prompt, "persona_prompt")?;
        let persona = self.personas.suggest(prompt)?;
        if persona.trim().is_empty() {
            return Err(ForgeError::Flow {
                code: ErrorCode::PersonaFailed,
                message: "Persona suggester returned an empty persona".to_string(),
                context: "suggest_persona".to_string(),
            });
        }
        Ok(persona)
    }
}

fn validate_prompt(prompt: &str, context: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(ForgeError::Validation {
            code: ErrorCode::ValidationFailed,
            message: "Prompt must not be empty".to_string(),
            context: context.to_string(),
        });
    }
    if prompt.len() > MAX_PROMPT_SIZE {
        return Err(ForgeError::Validation {
            code: ErrorCode::BoundsExceeded,
            message: format!("Prompt exceeds max size {MAX_PROMPT_SIZE}"),
            context: context.to_string(),
        });
    }
    Ok(())
}
