//! Resume fit evaluation: weighted 0-100 fit verdict for a resume against a
//! job description and company context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::evaluators::prompts::{RESUME_FIT_PROMPT_TEMPLATE, RESUME_FIT_SYSTEM};
use crate::llm_client::LlmClient;

/// Structured resume verdict. The deep evidence objects stay loosely typed;
/// they are advisory input for planning and the final verdict, not data this
/// service computes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEvaluation {
    pub role_title: String,
    #[serde(default)]
    pub candidate_name: String,
    pub overall_score_0to100: u8,
    pub verdict: String,
    pub confidence_0to1: f32,
    #[serde(default)]
    pub dimension_scores: Value,
    #[serde(default)]
    pub must_haves_check: Value,
    #[serde(default)]
    pub red_flags: Value,
    #[serde(default)]
    pub notable_strengths: Vec<String>,
    #[serde(default)]
    pub risks_and_gaps: Vec<String>,
    #[serde(default)]
    pub summary_for_recruiter: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

/// Evaluates resume fit for a role.
pub async fn evaluate(
    job_description: &str,
    resume: &str,
    company_info: &str,
    llm: &LlmClient,
) -> Result<ResumeEvaluation, AppError> {
    let prompt = RESUME_FIT_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume}", resume)
        .replace("{company}", company_info);
    llm.call_json::<ResumeEvaluation>(&prompt, RESUME_FIT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("resume evaluation failed: {e}")))
}
