//! Transcript types for an interview session.
//!
//! A session's transcript is an append-only, ordered sequence of [`Turn`]s.
//! Turns are immutable once created and are never deleted individually --
//! only a case change or an explicit reset empties the transcript as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::llm::MessageRole;

/// Who produced a transcript turn.
///
/// The student asking questions is `User`; the simulated patient's reply
/// is `Patient` (the assistant role on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Patient,
}

impl TurnRole {
    /// The generic LLM message role this transcript role maps to.
    pub fn as_message_role(&self) -> MessageRole {
        match self {
            TurnRole::User => MessageRole::User,
            TurnRole::Patient => MessageRole::Assistant,
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Patient => write!(f, "patient"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "patient" => Ok(TurnRole::Patient),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single turn within an interview transcript.
///
/// Immutable once created. Ordered by position in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a turn timestamped now.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Patient] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let role = TurnRole::Patient;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"patient\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Patient);
    }

    #[test]
    fn test_turn_role_maps_to_message_role() {
        assert_eq!(TurnRole::User.as_message_role(), MessageRole::User);
        assert_eq!(TurnRole::Patient.as_message_role(), MessageRole::Assistant);
    }

    #[test]
    fn test_turn_serialize() {
        let turn = Turn::new(TurnRole::User, "Where does it hurt?");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Where does it hurt?"));
    }
}
