//! The generic agent `run` contract: batch and SSE variants share the same
//! request envelope and event vocabulary.

use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    Json,
};
use tokio::sync::mpsc;
use tokio_stream::{wrappers::ReceiverStream, Stream, StreamExt};

use crate::agents;
use crate::errors::AppError;
use crate::models::run::{RunRequest, RunResponse};
use crate::runner::{
    self,
    events::{emit, Event},
};
use crate::state::AppState;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// POST /run: runs one turn and returns the complete event list.
pub async fn handle_run(
    State(state): State<AppState>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, AppError> {
    let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let collector = tokio::spawn(async move {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    });

    let result = runner::run_turn(&state, &req, tx).await;
    let events = collector
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    result?;

    Ok(Json(RunResponse { events }))
}

/// POST /run_sse: same turn, streamed as server-sent events in arrival
/// order. The stream ends when the underlying turn completes.
pub async fn handle_run_sse(
    State(state): State<AppState>,
    Json(req): Json<RunRequest>,
) -> Result<Sse<impl Stream<Item = Result<SseEvent, axum::Error>>>, AppError> {
    // Reject unknown agents before committing to a stream response.
    agents::lookup(&req.app_name).ok_or_else(|| AppError::UnknownAgent(req.app_name.clone()))?;

    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    tokio::spawn(async move {
        let author = req.app_name.clone();
        if let Err(e) = runner::run_turn(&state, &req, tx.clone()).await {
            emit(&tx, Event::error(author, e.to_string())).await;
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| SseEvent::default().json_data(&event));
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}
