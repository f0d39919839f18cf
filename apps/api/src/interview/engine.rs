//! Interview engine: executes one turn of the interview state machine.
//!
//! Durable state is the session JSON on disk; the engine loads it, applies
//! the transition rules, calls the scoring seam where a transition demands
//! one, and folds every mutation of the turn (answer record, follow-up flag,
//! phase, cursor) into a single persisted write before replying.

use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::evaluators::{rating::RatingContext, Scorer};
use crate::interview::transition;
use crate::models::plan::InterviewPlan;
use crate::models::session::{compose_final_answer, InterviewSession, Phase};
use crate::runner::events::{emit, Event, EventSink};
use crate::state::AppState;
use crate::store::merge::{fold_answer, AnswerUpdate};
use crate::store::{self, StoreError};

const INTERVIEWER: &str = "main_interviewer_agent";
const COMPLETENESS_AGENT: &str = "answers_completness_evaluator_agent";
const RATING_AGENT: &str = "answer_rating_evaluator_agent";
const RESUME_AGENT: &str = "resume_evaluator_agent";
const CANDIDATE_AGENT: &str = "candidate_evaluator_agent";

// One question per topic in the plan schema.
const QUESTION_ID: &str = "q1";

/// Runs one candidate turn. Emits events along the way and returns the
/// interviewer's reply text.
pub async fn advance_turn(
    state: &AppState,
    user_text: &str,
    sink: &EventSink,
) -> Result<String, AppError> {
    let plan: InterviewPlan = match store::load(&state.config.plan_path) {
        Ok(plan) => plan,
        Err(StoreError::NotFound(path)) => {
            return Err(AppError::NotFound(format!(
                "No interview plan at {}; generate one with interview_planner_agent first",
                path.display()
            )))
        }
        Err(e) => return Err(e.into()),
    };
    if plan.questions.is_empty() {
        return Err(AppError::Validation(
            "interview plan has no questions".to_string(),
        ));
    }

    let session: InterviewSession = match store::load(&state.config.session_path) {
        Ok(session) => session,
        Err(StoreError::NotFound(_)) => InterviewSession::default(),
        Err(e) => return Err(e.into()),
    };

    if session.phase != Phase::Finished && session.current_topic_index >= plan.questions.len() {
        // Resumed session whose cursor already ran off the end.
        return finalize(state, &plan, session, sink).await;
    }

    match session.phase {
        Phase::Finished => {
            let text =
                "This interview is already complete; the final verdict has been delivered."
                    .to_string();
            emit(sink, Event::text(INTERVIEWER, text.clone())).await;
            Ok(text)
        }
        Phase::AwaitingQuestionAck | Phase::Rated | Phase::Advanced => {
            ask_current_question(state, &plan, session, sink).await
        }
        Phase::AwaitingAnswer => handle_answer(state, &plan, session, user_text, sink).await,
        Phase::AwaitingFollowUp => handle_followup(state, &plan, session, user_text, sink).await,
    }
}

async fn ask_current_question(
    state: &AppState,
    plan: &InterviewPlan,
    mut session: InterviewSession,
    sink: &EventSink,
) -> Result<String, AppError> {
    let text = format_question(plan, session.current_topic_index);
    session.phase = Phase::AwaitingAnswer;
    store::save_value(&session, &state.config.session_path)?;
    emit(sink, Event::text(INTERVIEWER, text.clone())).await;
    Ok(text)
}

async fn handle_answer(
    state: &AppState,
    plan: &InterviewPlan,
    mut session: InterviewSession,
    user_text: &str,
    sink: &EventSink,
) -> Result<String, AppError> {
    let idx = session.current_topic_index;
    let topic = &plan.questions[idx];
    let topic_id = plan.topic_id(idx);

    let judgment = state
        .scoring
        .judge_completeness(
            &topic.title,
            &topic.question,
            user_text,
            &topic.excellent_answer,
        )
        .await?;
    let judgment_value = to_value(&judgment)?;
    emit(
        sink,
        Event::structured(COMPLETENESS_AGENT, "completeness", judgment_value.clone()),
    )
    .await;

    let next = transition::after_answer(
        judgment.completeness,
        session.followup_asked(&topic_id),
        judgment.follow_up.is_some(),
    );

    if next == Phase::AwaitingFollowUp {
        let follow_up = judgment.follow_up.clone().unwrap_or_default();
        // Record, flag, and phase go to disk together; a torn state could
        // otherwise grant the topic a second follow-up after a crash.
        fold_answer(
            &mut session,
            AnswerUpdate {
                topic_id: topic_id.clone(),
                question_id: QUESTION_ID.to_string(),
                original_answer: user_text.to_string(),
                followup_answer: None,
                completeness: judgment_value,
                rating: None,
            },
        );
        session.asked_followup_for_topic.insert(topic_id, true);
        session.phase = Phase::AwaitingFollowUp;
        store::save_value(&session, &state.config.session_path)?;

        let text = format!("Thanks. One follow-up before we move on:\n\n{follow_up}");
        emit(sink, Event::text(INTERVIEWER, text.clone())).await;
        return Ok(text);
    }

    rate_and_advance(
        state,
        plan,
        session,
        topic_id,
        user_text.to_string(),
        None,
        judgment_value,
        sink,
    )
    .await
}

async fn handle_followup(
    state: &AppState,
    plan: &InterviewPlan,
    session: InterviewSession,
    user_text: &str,
    sink: &EventSink,
) -> Result<String, AppError> {
    debug_assert_eq!(transition::after_followup(), Phase::Rated);

    let topic_id = plan.topic_id(session.current_topic_index);

    // The original answer and its judgment were recorded when the follow-up
    // was asked; fold the new text in on top of them.
    let (original, completeness_value, followup) =
        match session.answer_for(&topic_id, QUESTION_ID) {
            Some(record) => (
                record.original_answer.clone(),
                record.completeness.clone(),
                Some(user_text.to_string()),
            ),
            None => (user_text.to_string(), Value::Null, None),
        };

    rate_and_advance(
        state,
        plan,
        session,
        topic_id,
        original,
        followup,
        completeness_value,
        sink,
    )
    .await
}

#[allow(clippy::too_many_arguments)]
async fn rate_and_advance(
    state: &AppState,
    plan: &InterviewPlan,
    mut session: InterviewSession,
    topic_id: String,
    original: String,
    followup: Option<String>,
    completeness_value: Value,
    sink: &EventSink,
) -> Result<String, AppError> {
    let idx = session.current_topic_index;
    let topic = &plan.questions[idx];
    let final_answer = compose_final_answer(&original, followup.as_deref());

    let ctx = RatingContext {
        company: &plan.information_about_company,
        role: &plan.role,
        job_description: &plan.job_description,
        resume: plan.resume_text(),
        topic: &topic.title,
        question: &topic.question,
        expected_bullets: &topic.excellent_answer,
    };
    let answer_rating = state.scoring.rate_answer(ctx, &final_answer).await?;
    let rating_value = to_value(&answer_rating)?;
    emit(
        sink,
        Event::structured(RATING_AGENT, "rating", rating_value.clone()),
    )
    .await;

    fold_answer(
        &mut session,
        AnswerUpdate {
            topic_id,
            question_id: QUESTION_ID.to_string(),
            original_answer: original,
            followup_answer: followup,
            completeness: completeness_value,
            rating: Some(rating_value),
        },
    );
    session.phase = transition::after_rating();
    session.current_topic_index = idx + 1;
    session.phase = transition::after_advance(session.current_topic_index, plan.questions.len());

    if session.phase == Phase::Finished {
        return finalize(state, plan, session, sink).await;
    }

    // Rated record, cursor, and phase land in one write.
    store::save_value(&session, &state.config.session_path)?;
    let text = format!(
        "Thank you, that's recorded.\n\n{}",
        format_question(plan, session.current_topic_index)
    );
    emit(sink, Event::text(INTERVIEWER, text.clone())).await;
    Ok(text)
}

async fn finalize(
    state: &AppState,
    plan: &InterviewPlan,
    mut session: InterviewSession,
    sink: &EventSink,
) -> Result<String, AppError> {
    let resume_eval = if plan.resume_text().is_empty() {
        None
    } else {
        let eval = state
            .scoring
            .evaluate_resume(
                &plan.job_description,
                plan.resume_text(),
                &plan.information_about_company,
            )
            .await?;
        emit(
            sink,
            Event::structured(RESUME_AGENT, "resume_evaluation", to_value(&eval)?),
        )
        .await;
        Some(eval)
    };

    let final_verdict = state
        .scoring
        .synthesize_verdict(plan, &session, resume_eval.as_ref())
        .await?;
    emit(
        sink,
        Event::structured(CANDIDATE_AGENT, "verdict", to_value(&final_verdict)?),
    )
    .await;

    session.phase = Phase::Finished;
    store::save_value(&session, &state.config.session_path)?;
    info!(
        "Interview finished: {} answers, verdict {}",
        session.answers.len(),
        final_verdict.verdict
    );

    let text = format!(
        "That completes the interview. Thank you for your time. Final evaluation:\n\n{}",
        serde_json::to_string_pretty(&final_verdict).unwrap_or_else(|_| json!({}).to_string())
    );
    emit(sink, Event::text(INTERVIEWER, text.clone())).await;
    Ok(text)
}

fn format_question(plan: &InterviewPlan, idx: usize) -> String {
    let topic = &plan.questions[idx];
    format!(
        "Question {} of {}: {}\n\n{}",
        idx + 1,
        plan.questions.len(),
        topic.title,
        topic.question
    )
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.into()))
}
