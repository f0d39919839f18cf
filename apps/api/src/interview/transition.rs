//! Pure turn-progression rules. The engine drives these from candidate
//! turns; nothing here touches the LLM or the file system.

use crate::evaluators::completeness::CompletenessLevel;
use crate::models::session::Phase;

/// Phase after a judged answer. An incomplete answer earns the topic's one
/// follow-up only when none has been asked yet and the evaluator actually
/// suggested one; otherwise the answer is treated as final and rated.
pub fn after_answer(
    level: CompletenessLevel,
    followup_asked: bool,
    followup_suggested: bool,
) -> Phase {
    match level {
        CompletenessLevel::Complete => Phase::Rated,
        _ if !followup_asked && followup_suggested => Phase::AwaitingFollowUp,
        _ => Phase::Rated,
    }
}

/// A follow-up answer is always final for its topic.
pub fn after_followup() -> Phase {
    Phase::Rated
}

/// Once the rating is recorded the cursor moves.
pub fn after_rating() -> Phase {
    Phase::Advanced
}

/// Phase after the cursor has advanced to `next_cursor`.
pub fn after_advance(next_cursor: usize, topic_count: usize) -> Phase {
    if next_cursor >= topic_count {
        Phase::Finished
    } else {
        Phase::AwaitingAnswer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CompletenessLevel::*;

    #[test]
    fn test_complete_answer_goes_straight_to_rating() {
        assert_eq!(after_answer(Complete, false, true), Phase::Rated);
        assert_eq!(after_answer(Complete, true, false), Phase::Rated);
    }

    #[test]
    fn test_incomplete_answer_earns_one_followup() {
        assert_eq!(after_answer(Partial, false, true), Phase::AwaitingFollowUp);
        assert_eq!(after_answer(Missing, false, true), Phase::AwaitingFollowUp);
    }

    #[test]
    fn test_followup_budget_is_one_per_topic() {
        assert_eq!(after_answer(Partial, true, true), Phase::Rated);
        assert_eq!(after_answer(Missing, true, true), Phase::Rated);
    }

    #[test]
    fn test_no_suggested_followup_means_rate_now() {
        assert_eq!(after_answer(Partial, false, false), Phase::Rated);
    }

    #[test]
    fn test_followup_answer_is_final() {
        assert_eq!(after_followup(), Phase::Rated);
    }

    #[test]
    fn test_rating_then_advance() {
        assert_eq!(after_rating(), Phase::Advanced);
        assert_eq!(after_advance(1, 5), Phase::AwaitingAnswer);
        assert_eq!(after_advance(5, 5), Phase::Finished);
        assert_eq!(after_advance(7, 5), Phase::Finished);
    }

    #[test]
    fn test_empty_plan_is_immediately_finished() {
        assert_eq!(after_advance(0, 0), Phase::Finished);
    }
}
