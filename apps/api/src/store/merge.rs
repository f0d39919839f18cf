//! Session merge operation: appends or replaces one answer record and
//! persists the whole session document.

use std::path::Path;

use serde_json::Value;

use crate::models::session::{AnswerRecord, InterviewSession};
use crate::store::{self, StoreError};

/// One answer (or follow-up) to fold into the session.
#[derive(Debug, Clone)]
pub struct AnswerUpdate {
    pub topic_id: String,
    pub question_id: String,
    pub original_answer: String,
    pub followup_answer: Option<String>,
    /// Completeness evaluator output, stored as-is.
    pub completeness: Value,
    /// Rating evaluator output; absent until the answer is rated.
    pub rating: Option<Value>,
}

/// Folds `update` into a loaded session in memory. A record matching the
/// (topic_id, question_id) pair is replaced in place, keeping its list
/// position; otherwise the record is appended. The caller persists, so any
/// turn-state changes (flags, phase, cursor) can land in the same write.
pub fn fold_answer(session: &mut InterviewSession, update: AnswerUpdate) {
    session.upsert_answer(AnswerRecord::from_update(update));
}

/// Document-level merge for callers holding only a path: load the session
/// (an empty one with cursor 0, no follow-up flags, and no answers is
/// initialized in memory when the file does not exist yet), fold the update,
/// persist the whole session, and return it.
pub fn merge_answer(
    session_path: &Path,
    update: AnswerUpdate,
) -> Result<InterviewSession, StoreError> {
    let mut session: InterviewSession = match store::load(session_path) {
        Ok(session) => session,
        Err(StoreError::NotFound(_)) => InterviewSession::default(),
        Err(e) => return Err(e),
    };

    fold_answer(&mut session, update);
    store::save_value(&session, session_path)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn update(topic: &str, question: &str, answer: &str) -> AnswerUpdate {
        AnswerUpdate {
            topic_id: topic.to_string(),
            question_id: question.to_string(),
            original_answer: answer.to_string(),
            followup_answer: None,
            completeness: json!({"completeness": "complete"}),
            rating: None,
        }
    }

    #[test]
    fn test_merge_initializes_missing_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let session = merge_answer(&path, update("T1", "Q1", "A")).unwrap();

        assert_eq!(session.current_topic_index, 0);
        assert!(session.asked_followup_for_topic.is_empty());
        assert_eq!(session.answers.len(), 1);
        assert_eq!(session.answers[0].final_answer, "A");
        assert!(path.exists());
    }

    #[test]
    fn test_merge_replaces_record_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        merge_answer(&path, update("T1", "Q1", "A")).unwrap();
        merge_answer(&path, update("T2", "Q1", "other topic")).unwrap();
        let session = merge_answer(&path, update("T1", "Q1", "B")).unwrap();

        assert_eq!(session.answers.len(), 2);
        // First-match-wins position, last-write-wins content.
        assert_eq!(session.answers[0].topic_id, "T1");
        assert_eq!(session.answers[0].final_answer, "B");
        assert_eq!(session.answers[1].topic_id, "T2");
    }

    #[test]
    fn test_merge_never_duplicates_topic_question_pair() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        for answer in ["A", "B", "C", "D"] {
            merge_answer(&path, update("T1", "Q1", answer)).unwrap();
        }
        let session = merge_answer(&path, update("T1", "Q1", "final")).unwrap();

        assert_eq!(session.answers.len(), 1);
        assert_eq!(session.answers[0].final_answer, "final");
    }

    #[test]
    fn test_merge_with_followup_concatenates_final_answer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut u = update("T1", "Q1", "original  ");
        u.followup_answer = Some("followup".to_string());
        u.completeness = json!({"completeness": "partial"});
        u.rating = Some(json!({"scores": {}}));
        let session = merge_answer(&path, u).unwrap();

        assert_eq!(session.answers[0].final_answer, "original  \n\nfollowup");
        assert_eq!(
            session.answers[0].followup_answer.as_deref(),
            Some("followup")
        );
        assert!(session.answers[0].rating.is_some());
    }

    #[test]
    fn test_merge_persists_after_every_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        merge_answer(&path, update("T1", "Q1", "A")).unwrap();
        let on_disk: InterviewSession = crate::store::load(&path).unwrap();
        assert_eq!(on_disk.answers.len(), 1);

        merge_answer(&path, update("T2", "Q1", "B")).unwrap();
        let on_disk: InterviewSession = crate::store::load(&path).unwrap();
        assert_eq!(on_disk.answers.len(), 2);
    }

    #[test]
    fn test_fold_replaces_without_touching_other_state() {
        let mut session = InterviewSession::default();
        session.current_topic_index = 3;
        session
            .asked_followup_for_topic
            .insert("T1".to_string(), true);

        fold_answer(&mut session, update("T1", "Q1", "A"));
        fold_answer(&mut session, update("T1", "Q1", "B"));

        assert_eq!(session.answers.len(), 1);
        assert_eq!(session.answers[0].final_answer, "B");
        assert_eq!(session.current_topic_index, 3);
        assert!(session.asked_followup_for_topic["T1"]);
    }

    #[test]
    fn test_merge_malformed_session_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = merge_answer(&path, update("T1", "Q1", "A")).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
