//! Typed scoring functions over the LLM.
//!
//! Each evaluator builds a prompt from structured inputs, makes one
//! `call_json` round trip, and returns a typed result. The service does not
//! re-validate the model's judgment beyond serde decoding here; downstream
//! the results travel as opaque JSON inside the session document.

pub mod completeness;
pub mod prompts;
pub mod rating;
pub mod resume_fit;
pub mod verdict;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::plan::InterviewPlan;
use crate::models::session::InterviewSession;
use completeness::CompletenessJudgment;
use rating::{AnswerRating, RatingContext};
use resume_fit::ResumeEvaluation;
use verdict::CandidateVerdict;

/// The scoring seam the interview engine calls through: one method per
/// scoring concern, injected like the session store so turn progression can
/// be exercised without a live model behind it.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn judge_completeness(
        &self,
        topic: &str,
        question: &str,
        answer: &str,
        expected_bullets: &[String],
    ) -> Result<CompletenessJudgment, AppError>;

    async fn rate_answer(
        &self,
        ctx: RatingContext<'_>,
        answer: &str,
    ) -> Result<AnswerRating, AppError>;

    async fn evaluate_resume(
        &self,
        job_description: &str,
        resume: &str,
        company_info: &str,
    ) -> Result<ResumeEvaluation, AppError>;

    async fn synthesize_verdict(
        &self,
        plan: &InterviewPlan,
        session: &InterviewSession,
        resume_eval: Option<&ResumeEvaluation>,
    ) -> Result<CandidateVerdict, AppError>;
}

/// Production scorer: delegates every concern to its typed scoring function
/// over the shared [`LlmClient`].
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Scorer for LlmScorer {
    async fn judge_completeness(
        &self,
        topic: &str,
        question: &str,
        answer: &str,
        expected_bullets: &[String],
    ) -> Result<CompletenessJudgment, AppError> {
        completeness::judge(topic, question, answer, expected_bullets, &self.llm).await
    }

    async fn rate_answer(
        &self,
        ctx: RatingContext<'_>,
        answer: &str,
    ) -> Result<AnswerRating, AppError> {
        rating::rate(ctx, answer, &self.llm).await
    }

    async fn evaluate_resume(
        &self,
        job_description: &str,
        resume: &str,
        company_info: &str,
    ) -> Result<ResumeEvaluation, AppError> {
        resume_fit::evaluate(job_description, resume, company_info, &self.llm).await
    }

    async fn synthesize_verdict(
        &self,
        plan: &InterviewPlan,
        session: &InterviewSession,
        resume_eval: Option<&ResumeEvaluation>,
    ) -> Result<CandidateVerdict, AppError> {
        verdict::synthesize(plan, session, resume_eval, &self.llm).await
    }
}
