//! Completeness judgment: classifies an answer as complete, partial, or
//! missing relative to the topic's expected bullets, and suggests the one
//! follow-up question when something is lacking.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluators::prompts::{COMPLETENESS_PROMPT_TEMPLATE, COMPLETENESS_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletenessLevel {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessJudgment {
    pub completeness: CompletenessLevel,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
}

/// Judges one answer against the expected bullets.
pub async fn judge(
    topic: &str,
    question: &str,
    answer: &str,
    expected_bullets: &[String],
    llm: &LlmClient,
) -> Result<CompletenessJudgment, AppError> {
    let prompt = COMPLETENESS_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{question}", question)
        .replace("{answer}", answer)
        .replace("{expected_bullets}", &bullet_list(expected_bullets));
    llm.call_json::<CompletenessJudgment>(&prompt, COMPLETENESS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("completeness judgment failed: {e}")))
}

pub(crate) fn bullet_list(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|b| format!("- {b}"))
        .collect::<Vec<_>>()
        .join("\n")
}
