//! Code-driven interview turn progression.
//!
//! The turn-taking rules (ask question, judge completeness, at most one
//! follow-up per topic, rate, advance, final verdict) live here as an
//! explicit state machine. LLM calls are confined to the typed scoring
//! functions in `evaluators`, invoked at specific transitions.

pub mod engine;
pub mod transition;
