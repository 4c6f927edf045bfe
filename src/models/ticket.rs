use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TicketError, TicketResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Ticket {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Loose reference to a team by name; not an enforced foreign key.
    pub team: String,
    pub status: TicketStatus,
    pub assignee: String,
    pub reporter: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Wire form, as exchanged with the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Human form, for headers and summary cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn next(&self) -> TicketStatus {
        match self {
            TicketStatus::Open => TicketStatus::InProgress,
            TicketStatus::InProgress => TicketStatus::Resolved,
            TicketStatus::Resolved => TicketStatus::Closed,
            TicketStatus::Closed => TicketStatus::Open,
        }
    }

    pub fn prev(&self) -> TicketStatus {
        match self {
            TicketStatus::Open => TicketStatus::Closed,
            TicketStatus::InProgress => TicketStatus::Open,
            TicketStatus::Resolved => TicketStatus::InProgress,
            TicketStatus::Closed => TicketStatus::Resolved,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in-progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(TicketError::invalid("Invalid status value")),
        }
    }
}

/// Wire payload for ticket create/update requests.
#[derive(Debug, Serialize, Clone)]
pub struct TicketPayload {
    pub title: String,
    pub description: String,
    pub team: String,
    pub status: TicketStatus,
    pub assignee: String,
    pub reporter: String,
}

impl TicketPayload {
    pub fn new(
        title: &str,
        description: &str,
        team: &str,
        status: &str,
        assignee: &str,
        reporter: &str,
    ) -> TicketResult<Self> {
        Ok(Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            team: team.trim().to_string(),
            status: status.parse()?,
            assignee: assignee.trim().to_string(),
            reporter: reporter.trim().to_string(),
        })
    }
}

/// Per-status ticket counts, shown above the ticket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusSummary {
    pub fn of(tickets: &[Ticket]) -> Self {
        let mut summary = StatusSummary::default();
        for ticket in tickets {
            match ticket.status {
                TicketStatus::Open => summary.open += 1,
                TicketStatus::InProgress => summary.in_progress += 1,
                TicketStatus::Resolved => summary.resolved += 1,
                TicketStatus::Closed => summary.closed += 1,
            }
        }
        summary
    }

    pub fn count(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Open => self.open,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Resolved => self.resolved,
            TicketStatus::Closed => self.closed,
        }
    }
}
