//! Final verdict synthesis: aggregates the resume anchor, completeness
//! coverage, and answer ratings into one hire/no-hire recommendation.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::evaluators::prompts::{VERDICT_PROMPT_TEMPLATE, VERDICT_SYSTEM};
use crate::evaluators::resume_fit::ResumeEvaluation;
use crate::llm_client::LlmClient;
use crate::models::plan::InterviewPlan;
use crate::models::session::InterviewSession;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateVerdict {
    pub company: String,
    pub role_title: String,
    pub overall_score_0to100: u8,
    pub verdict: String,
    pub confidence_0to1: f32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub follow_up_recommendations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

/// Synthesises the final verdict from the plan, the completed session, and
/// an optional resume evaluation anchor.
pub async fn synthesize(
    plan: &InterviewPlan,
    session: &InterviewSession,
    resume_eval: Option<&ResumeEvaluation>,
    llm: &LlmClient,
) -> Result<CandidateVerdict, AppError> {
    let topics = plan
        .questions
        .iter()
        .map(|t| json!({"topic": t.topic, "title": t.title, "question": t.question}))
        .collect::<Vec<_>>();
    let answers = session
        .answers
        .iter()
        .map(|r| {
            json!({
                "topic_id": r.topic_id,
                "question_id": r.question_id,
                "final_answer": r.final_answer,
                "completeness": r.completeness,
                "rating": r.rating,
            })
        })
        .collect::<Vec<_>>();
    let resume_evaluation = match resume_eval {
        Some(eval) => serde_json::to_value(eval).map_err(|e| AppError::Internal(e.into()))?,
        None => serde_json::Value::Null,
    };

    let prompt = VERDICT_PROMPT_TEMPLATE
        .replace("{company}", &plan.information_about_company)
        .replace("{role}", &plan.role)
        .replace("{job_description}", &plan.job_description)
        .replace("{interview_plan}", &json!(topics).to_string())
        .replace("{answers}", &json!(answers).to_string())
        .replace("{resume_evaluation}", &resume_evaluation.to_string());
    llm.call_json::<CandidateVerdict>(&prompt, VERDICT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("verdict synthesis failed: {e}")))
}
