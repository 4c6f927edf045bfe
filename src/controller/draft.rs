use crate::error::{TicketError, TicketResult};
use crate::models::{members_text, parse_members, Team, TeamPayload, Ticket, TicketPayload};

/// Ephemeral staging copy of an entity's fields, bound to an open form.
/// Created empty on "new", pre-filled from the selected entity on "edit",
/// discarded on cancel or successful submit.
pub trait Draft: Clone + Default {
    type Entity;

    /// Copy an entity's fields into editable text form, denormalizing any
    /// list-typed field (team members become comma-separated text).
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Pure and synchronous; returns the human-readable reason on failure
    /// and never touches the network.
    fn validate(&self) -> TicketResult<()>;
}

/// Field access for the generic form popup: stable labels plus read/write
/// access to each field's text by position.
pub trait FormFields {
    fn field_labels(&self) -> &'static [&'static str];
    fn field(&self, index: usize) -> &str;
    fn field_mut(&mut self, index: usize) -> &mut String;

    fn field_count(&self) -> usize {
        self.field_labels().len()
    }
}

#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub team: String,
    pub status: String,
    pub assignee: String,
    pub reporter: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            team: String::new(),
            status: "open".to_string(),
            assignee: String::new(),
            reporter: String::new(),
        }
    }
}

impl TicketDraft {
    /// Field positions used by the form popup for status/team cycling.
    pub const TEAM_FIELD: usize = 2;
    pub const STATUS_FIELD: usize = 3;

    pub fn to_payload(&self) -> TicketResult<TicketPayload> {
        TicketPayload::new(
            &self.title,
            &self.description,
            &self.team,
            &self.status,
            &self.assignee,
            &self.reporter,
        )
    }
}

impl Draft for TicketDraft {
    type Entity = Ticket;

    fn from_entity(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            team: ticket.team.clone(),
            status: ticket.status.as_str().to_string(),
            assignee: ticket.assignee.clone(),
            reporter: ticket.reporter.clone(),
        }
    }

    fn validate(&self) -> TicketResult<()> {
        let required = [
            &self.title,
            &self.description,
            &self.team,
            &self.status,
            &self.assignee,
            &self.reporter,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(TicketError::invalid("All fields are required"));
        }

        // Reports "Invalid status value" for anything outside the enum.
        self.status.parse::<crate::models::TicketStatus>()?;

        Ok(())
    }
}

impl FormFields for TicketDraft {
    fn field_labels(&self) -> &'static [&'static str] {
        &[
            "Title",
            "Description",
            "Team",
            "Status",
            "Assignee",
            "Reporter",
        ]
    }

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.title,
            1 => &self.description,
            2 => &self.team,
            3 => &self.status,
            4 => &self.assignee,
            _ => &self.reporter,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.title,
            1 => &mut self.description,
            2 => &mut self.team,
            3 => &mut self.status,
            4 => &mut self.assignee,
            _ => &mut self.reporter,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamDraft {
    pub name: String,
    /// Comma-separated member names; split/trim/filter happens on submit.
    pub members_text: String,
}

impl TeamDraft {
    pub fn to_payload(&self) -> TicketResult<TeamPayload> {
        Ok(TeamPayload {
            teamname: self.name.trim().to_string(),
            members: parse_members(&self.members_text),
        })
    }
}

impl Draft for TeamDraft {
    type Entity = Team;

    fn from_entity(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            members_text: members_text(&team.members),
        }
    }

    fn validate(&self) -> TicketResult<()> {
        if self.name.trim().is_empty() {
            return Err(TicketError::invalid("Team name is required"));
        }
        if parse_members(&self.members_text).is_empty() {
            return Err(TicketError::invalid("Members list cannot be empty"));
        }
        Ok(())
    }
}

impl FormFields for TeamDraft {
    fn field_labels(&self) -> &'static [&'static str] {
        &["Team Name", "Members"]
    }

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            _ => &self.members_text,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            _ => &mut self.members_text,
        }
    }
}
