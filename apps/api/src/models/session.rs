//! Interview session: the mutable per-interview progress record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::merge::AnswerUpdate;

/// Explicit turn-progression state, persisted with the session.
/// `Rated` and `Advanced` are transient markers between scoring and cursor
/// movement; a session at rest holds one of the `Awaiting*` states or
/// `Finished`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    AwaitingQuestionAck,
    AwaitingAnswer,
    AwaitingFollowUp,
    Rated,
    Advanced,
    Finished,
}

/// Per-interview progress: cursor, one-follow-up-per-topic flags, and the
/// ordered answer records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    #[serde(default)]
    pub current_topic_index: usize,
    #[serde(default)]
    pub asked_followup_for_topic: HashMap<String, bool>,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
    /// Session files written before the phase field existed default to the
    /// initial state.
    #[serde(default)]
    pub phase: Phase,
}

impl InterviewSession {
    /// Replaces the record matching (topic_id, question_id) in place, or
    /// appends when no match exists. The answer list never holds two records
    /// for the same pair.
    pub fn upsert_answer(&mut self, record: AnswerRecord) {
        let existing = self
            .answers
            .iter()
            .position(|r| r.topic_id == record.topic_id && r.question_id == record.question_id);
        match existing {
            Some(i) => self.answers[i] = record,
            None => self.answers.push(record),
        }
    }

    /// Finds the answer record for a (topic, question) pair.
    pub fn answer_for(&self, topic_id: &str, question_id: &str) -> Option<&AnswerRecord> {
        self.answers
            .iter()
            .find(|r| r.topic_id == topic_id && r.question_id == question_id)
    }

    pub fn followup_asked(&self, topic_id: &str) -> bool {
        self.asked_followup_for_topic
            .get(topic_id)
            .copied()
            .unwrap_or(false)
    }
}

/// One answered question. Identity is the (topic_id, question_id) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub topic_id: String,
    pub question_id: String,
    pub original_answer: String,
    pub followup_answer: Option<String>,
    /// Derived: the original answer, or original + follow-up when present.
    pub final_answer: String,
    /// Completeness evaluator output, passed through unvalidated.
    pub completeness: Value,
    /// Rating evaluator output; None until the answer has been rated.
    #[serde(default)]
    pub rating: Option<Value>,
}

impl AnswerRecord {
    pub fn from_update(update: AnswerUpdate) -> Self {
        let final_answer =
            compose_final_answer(&update.original_answer, update.followup_answer.as_deref());
        AnswerRecord {
            topic_id: update.topic_id,
            question_id: update.question_id,
            original_answer: update.original_answer,
            followup_answer: update.followup_answer,
            final_answer,
            completeness: update.completeness,
            rating: update.rating,
        }
    }
}

/// `final_answer` rule: the original alone when there is no follow-up, else
/// the original and follow-up joined by a blank line, trimmed.
pub(crate) fn compose_final_answer(original: &str, followup: Option<&str>) -> String {
    match followup {
        Some(f) if !f.is_empty() => format!("{original}\n\n{f}").trim().to_string(),
        _ => original.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(topic: &str, question: &str, answer: &str) -> AnswerRecord {
        AnswerRecord {
            topic_id: topic.to_string(),
            question_id: question.to_string(),
            original_answer: answer.to_string(),
            followup_answer: None,
            final_answer: answer.to_string(),
            completeness: json!({"completeness": "complete"}),
            rating: None,
        }
    }

    #[test]
    fn test_final_answer_without_followup_is_trimmed_original() {
        assert_eq!(compose_final_answer("  answer \n", None), "answer");
    }

    #[test]
    fn test_final_answer_with_followup_concatenates() {
        assert_eq!(
            compose_final_answer("first", Some("second")),
            "first\n\nsecond"
        );
    }

    #[test]
    fn test_empty_followup_counts_as_absent() {
        assert_eq!(compose_final_answer("only ", Some("")), "only");
    }

    #[test]
    fn test_upsert_appends_then_replaces_in_place() {
        let mut session = InterviewSession::default();
        session.upsert_answer(record("T1", "Q1", "A"));
        session.upsert_answer(record("T2", "Q1", "B"));
        session.upsert_answer(record("T1", "Q1", "C"));

        assert_eq!(session.answers.len(), 2);
        assert_eq!(session.answers[0].final_answer, "C");
        assert_eq!(session.answers[1].topic_id, "T2");
    }

    #[test]
    fn test_phase_defaults_for_legacy_session_json() {
        let raw = r#"{
            "current_topic_index": 2,
            "asked_followup_for_topic": {"t1": true},
            "answers": []
        }"#;
        let session: InterviewSession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.phase, Phase::AwaitingQuestionAck);
        assert_eq!(session.current_topic_index, 2);
        assert!(session.followup_asked("t1"));
        assert!(!session.followup_asked("t2"));
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let mut session = InterviewSession::default();
        session.upsert_answer(record("T1", "Q1", "A"));
        session.phase = Phase::AwaitingFollowUp;
        session.asked_followup_for_topic.insert("T1".into(), true);

        let raw = serde_json::to_string(&session).unwrap();
        let back: InterviewSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }
}
