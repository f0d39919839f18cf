//! Agent invocation façade: one uniform way to run a conversation turn
//! against any registered agent, producing a sequence of result events.

pub mod events;

use serde_json::json;
use tracing::info;

use crate::agents::{self, AgentKind, AgentSpec};
use crate::errors::AppError;
use crate::interview::engine;
use crate::llm_client::{strip_json_fences, ChatMessage};
use crate::models::plan::InterviewPlan;
use crate::models::run::RunRequest;
use crate::sessions::{SessionKey, SessionStore};
use crate::state::AppState;
use crate::store;
use events::{emit, Event, EventSink};

/// Runs one conversation turn. Events flow through `sink` in arrival order;
/// the sink is dropped when the turn ends, which closes the stream. Failures
/// propagate unchanged: no retry, no timeout, no cancellation.
pub async fn run_turn(
    state: &AppState,
    req: &RunRequest,
    sink: EventSink,
) -> Result<(), AppError> {
    let spec = agents::lookup(&req.app_name)
        .ok_or_else(|| AppError::UnknownAgent(req.app_name.clone()))?;

    let key = SessionKey::new(&req.app_name, &req.user_id, &req.session_id);
    // Idempotent: an existing session is left untouched.
    state.sessions.create(&key).await;

    let user_text = req.new_message.joined_text();

    let reply = match spec.kind {
        AgentKind::Chat { instruction } => {
            run_chat(state, spec, &key, &user_text, instruction, &sink).await?
        }
        AgentKind::Planner { instruction } => {
            let reply = run_chat(state, spec, &key, &user_text, instruction, &sink).await?;
            maybe_save_plan(state, spec, &reply, &sink).await?;
            reply
        }
        AgentKind::Interviewer => engine::advance_turn(state, &user_text, &sink).await?,
    };

    state
        .sessions
        .append(
            &key,
            vec![ChatMessage::user(user_text), ChatMessage::assistant(reply)],
        )
        .await;
    Ok(())
}

async fn run_chat(
    state: &AppState,
    spec: &AgentSpec,
    key: &SessionKey,
    user_text: &str,
    instruction: &str,
    sink: &EventSink,
) -> Result<String, AppError> {
    let mut history = state.sessions.read(key).await.unwrap_or_default();
    history.push(ChatMessage::user(user_text));

    let response = state
        .llm
        .call(&history, instruction)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    let text = response.text().unwrap_or_default().to_string();

    emit(
        sink,
        Event::text(spec.name, text.clone()).with_usage(response.usage),
    )
    .await;
    Ok(text)
}

/// When the planner's reply is a valid plan document, persist it. Anything
/// that does not parse as a plan passes through unchanged. The document is
/// saved as the model produced it, not re-normalized through our own types.
async fn maybe_save_plan(
    state: &AppState,
    spec: &AgentSpec,
    reply: &str,
    sink: &EventSink,
) -> Result<(), AppError> {
    let raw = strip_json_fences(reply);
    let Some(plan) = parse_plan(raw) else {
        return Ok(());
    };
    store::save_json(raw, &state.config.plan_path)?;
    info!(
        "Interview plan saved to {} ({} topics)",
        state.config.plan_path.display(),
        plan.questions.len()
    );
    emit(
        sink,
        Event::structured(
            spec.name,
            "plan_saved",
            json!({
                "path": state.config.plan_path.display().to_string(),
                "topics": plan.questions.len(),
            }),
        ),
    )
    .await;
    Ok(())
}

fn parse_plan(text: &str) -> Option<InterviewPlan> {
    serde_json::from_str(strip_json_fences(text)).ok()
}
