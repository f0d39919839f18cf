//! Answer rating: scores a final answer across eight criteria, 1-5 each,
//! with evidence-based justifications.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluators::completeness::bullet_list;
use crate::evaluators::prompts::{RATING_PROMPT_TEMPLATE, RATING_SYSTEM};
use crate::llm_client::LlmClient;

/// Hiring context threaded into every rating call.
#[derive(Debug, Clone, Copy)]
pub struct RatingContext<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub job_description: &'a str,
    pub resume: &'a str,
    pub topic: &'a str,
    pub question: &'a str,
    pub expected_bullets: &'a [String],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: u8,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingScores {
    pub content_relevance: CriterionScore,
    pub clarity_structure: CriterionScore,
    pub depth_insight: CriterionScore,
    pub impact_results: CriterionScore,
    pub behavioral_signals: CriterionScore,
    pub communication_style: CriterionScore,
    pub personality_coherence: CriterionScore,
    pub cultural_fit: CriterionScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRating {
    pub question: String,
    pub answer: String,
    pub scores: RatingScores,
}

/// Rates the candidate's final answer for one topic.
pub async fn rate(
    ctx: RatingContext<'_>,
    answer: &str,
    llm: &LlmClient,
) -> Result<AnswerRating, AppError> {
    let prompt = RATING_PROMPT_TEMPLATE
        .replace("{company}", ctx.company)
        .replace("{role}", ctx.role)
        .replace("{job_description}", ctx.job_description)
        .replace("{resume}", ctx.resume)
        .replace("{topic}", ctx.topic)
        .replace("{question}", ctx.question)
        .replace("{answer}", answer)
        .replace("{expected_bullets}", &bullet_list(ctx.expected_bullets));
    llm.call_json::<AnswerRating>(&prompt, RATING_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("answer rating failed: {e}")))
}
