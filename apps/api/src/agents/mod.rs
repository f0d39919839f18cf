//! Agent registry: the stable set of names exposed on the `run` contract,
//! each bound to its invocation behavior.

pub mod instructions;

use instructions::*;

/// How the runner handles a turn for this agent.
#[derive(Debug, Clone, Copy)]
pub enum AgentKind {
    /// Instruction-driven conversation: one LLM call over the accumulated
    /// history.
    Chat { instruction: &'static str },
    /// Chat, plus: when the reply parses as a valid interview plan it is
    /// persisted to the configured plan path.
    Planner { instruction: &'static str },
    /// The code-driven interview engine.
    Interviewer,
}

#[derive(Debug, Clone, Copy)]
pub struct AgentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AgentKind,
}

/// Agent names keep the spelling of the original service they replace, wire
/// compatibility included (yes, "completness").
pub const AGENTS: &[AgentSpec] = &[
    AgentSpec {
        name: "main_interviewer_agent",
        description: "Coordinates the interview: asks questions, evaluates completeness \
            and ratings, and finalizes with a candidate verdict.",
        kind: AgentKind::Interviewer,
    },
    AgentSpec {
        name: "interview_planner_agent",
        description: "Collects JD, resume, company info, and a resume evaluation; \
            generates five tailored interview topics and saves the plan.",
        kind: AgentKind::Planner {
            instruction: INTERVIEW_PLANNER_INSTRUCTION,
        },
    },
    AgentSpec {
        name: "resume_evaluator_agent",
        description: "Evaluates candidate resume fit against a job description and \
            company context.",
        kind: AgentKind::Chat {
            instruction: RESUME_EVALUATOR_INSTRUCTION,
        },
    },
    AgentSpec {
        name: "answers_completness_evaluator_agent",
        description: "Classifies a candidate answer as complete, partial, or missing \
            against expected bullet points.",
        kind: AgentKind::Chat {
            instruction: COMPLETENESS_EVALUATOR_INSTRUCTION,
        },
    },
    AgentSpec {
        name: "answer_rating_evaluator_agent",
        description: "Scores candidate answers across eight criteria with \
            evidence-based justifications.",
        kind: AgentKind::Chat {
            instruction: RATING_EVALUATOR_INSTRUCTION,
        },
    },
    AgentSpec {
        name: "candidate_evaluator_agent",
        description: "Synthesises the final hiring verdict from resume fit and \
            interview results.",
        kind: AgentKind::Chat {
            instruction: CANDIDATE_EVALUATOR_INSTRUCTION,
        },
    },
];

pub fn lookup(name: &str) -> Option<&'static AgentSpec> {
    AGENTS.iter().find(|a| a.name == name)
}
