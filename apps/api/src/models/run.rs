//! Request/response envelope for the generic agent `run` contract.

use serde::{Deserialize, Serialize};

use crate::runner::events::Event;

#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    pub app_name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "newMessage")]
    pub new_message: NewMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default = "default_role")]
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl NewMessage {
    /// All text parts joined into the single turn text handed to the agent.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub events: Vec<Event>,
}
