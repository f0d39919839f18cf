//! Interview plan: the fixed set of topics, questions, and expected-answer
//! bullets for a role. Created once by the planner, immutable afterward.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPlan {
    pub role: String,
    pub job_description: String,
    pub information_about_company: String,
    #[serde(default)]
    pub resume: ResumeDoc,
    pub questions: Vec<TopicSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Value>,
}

/// One interview topic: a category, a single tailored question, and the
/// bullets an excellent answer would cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSpec {
    /// Stable identifier ("t1".."t5"). Plans generated before ids were part
    /// of the schema carry none; callers fall back to the positional id.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub topic: String,
    pub title: String,
    pub question: String,
    #[serde(default)]
    pub excellent_answer: Vec<String>,
}

impl InterviewPlan {
    /// Topic id for position `index`, positional when the plan has none.
    pub fn topic_id(&self, index: usize) -> String {
        match self.questions.get(index) {
            Some(t) if !t.id.is_empty() => t.id.clone(),
            _ => format!("t{}", index + 1),
        }
    }

    pub fn resume_text(&self) -> &str {
        self.resume.raw_text.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_JSON: &str = r#"{
        "role": "Senior Backend Engineer",
        "jobDescription": "Own backend services in Rust.",
        "informationAboutCompany": "Fintech scale-up, 120 people.",
        "resume": {"raw_text": "10 years of systems work."},
        "questions": [
            {
                "id": "t1",
                "topic": "Technical / domain expertise",
                "title": "Designing for failure",
                "question": "Walk me through a distributed failure you debugged.",
                "excellent_answer": ["names the failure mode", "shows methodology", "quantifies impact"]
            },
            {
                "topic": "Leadership & collaboration",
                "title": "Leading without authority",
                "question": "Tell me about a time you aligned a reluctant team.",
                "excellent_answer": ["concrete situation", "their own role", "outcome"]
            }
        ]
    }"#;

    #[test]
    fn test_plan_deserializes_camel_case_keys() {
        let plan: InterviewPlan = serde_json::from_str(PLAN_JSON).unwrap();
        assert_eq!(plan.role, "Senior Backend Engineer");
        assert_eq!(plan.information_about_company, "Fintech scale-up, 120 people.");
        assert_eq!(plan.questions.len(), 2);
        assert_eq!(plan.resume_text(), "10 years of systems work.");
        assert_eq!(plan.questions[0].excellent_answer.len(), 3);
    }

    #[test]
    fn test_topic_id_prefers_declared_id() {
        let plan: InterviewPlan = serde_json::from_str(PLAN_JSON).unwrap();
        assert_eq!(plan.topic_id(0), "t1");
        // Second topic declares no id; positional fallback.
        assert_eq!(plan.topic_id(1), "t2");
        // Out of range also resolves positionally.
        assert_eq!(plan.topic_id(7), "t8");
    }

    #[test]
    fn test_plan_round_trips_with_camel_case_keys() {
        let plan: InterviewPlan = serde_json::from_str(PLAN_JSON).unwrap();
        let raw = serde_json::to_string(&plan).unwrap();
        assert!(raw.contains("jobDescription"));
        assert!(raw.contains("informationAboutCompany"));
        let back: InterviewPlan = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, plan);
    }
}
