pub mod ticket;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use ticket::{StatusSummary, Ticket, TicketPayload, TicketStatus};
pub use team::{members_text, parse_members, Team, TeamPayload, TeamStats};
pub use user::{Ack, LoginRequest, SignupRequest};

use serde::{Deserialize, Deserializer};

/// Server-assigned identifiers are opaque: some backends send them as JSON
/// strings, others as numbers. Normalize both to a `String`.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
