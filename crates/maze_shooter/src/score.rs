//! Score submission payload

use serde::{Deserialize, Serialize};

/// Body of `POST /api/scores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Player name, trimmed
    pub name: String,
    /// Enemies killed
    pub score: u32,
}

impl ScoreSubmission {
    /// Build a submission. A blank name yields `None`.
    pub fn new(name: &str, score: u32) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            score,
        })
    }

    /// JSON request body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
