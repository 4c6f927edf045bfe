use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::controller::{Gateway, TeamDraft, TicketDraft};
use crate::error::{TicketError, TicketResult};
use crate::models::{Team, Ticket, TicketStatus};

/// One recorded gateway invocation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(String),
    Delete(String),
}

pub struct FakeStore<E> {
    pub items: Vec<E>,
    pub calls: Vec<Call>,
    pub fail_list: bool,
    pub fail_mutation: bool,
    pub fail_delete: bool,
    next_id: usize,
}

impl<E> Default for FakeStore<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            calls: Vec::new(),
            fail_list: false,
            fail_mutation: false,
            fail_delete: false,
            next_id: 0,
        }
    }
}

impl<E> FakeStore<E> {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

pub fn ticket(id: &str, title: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        description: "details".to_string(),
        team: "core".to_string(),
        status,
        assignee: "alice".to_string(),
        reporter: "bob".to_string(),
    }
}

pub fn team(id: &str, name: &str, members: &[&str]) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn valid_ticket_draft() -> TicketDraft {
    TicketDraft {
        title: "Fix login".to_string(),
        description: "Session expires too early".to_string(),
        team: "core".to_string(),
        status: "open".to_string(),
        assignee: "alice".to_string(),
        reporter: "bob".to_string(),
    }
}

/// In-memory ticket gateway that records every call and can be told to fail.
#[derive(Clone, Default)]
pub struct FakeTicketGateway {
    pub store: Arc<Mutex<FakeStore<Ticket>>>,
}

impl FakeTicketGateway {
    pub fn with_items(items: Vec<Ticket>) -> Self {
        let fake = Self::default();
        fake.store.lock().unwrap().items = items;
        fake
    }

    pub fn calls(&self) -> Vec<Call> {
        self.store.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl Gateway for FakeTicketGateway {
    type Entity = Ticket;
    type Draft = TicketDraft;

    const NOUN: &'static str = "ticket";

    async fn list(&self) -> TicketResult<Vec<Ticket>> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::List);
        if store.fail_list {
            return Err(TicketError::api("connection refused"));
        }
        Ok(store.items.clone())
    }

    async fn create(&self, draft: &TicketDraft) -> TicketResult<Ticket> {
        let payload = draft.to_payload()?;
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Create);
        if store.fail_mutation {
            return Err(TicketError::api("server says no"));
        }
        let id = store.next_id();
        let created = Ticket {
            id,
            title: payload.title,
            description: payload.description,
            team: payload.team,
            status: payload.status,
            assignee: payload.assignee,
            reporter: payload.reporter,
        };
        store.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &TicketDraft) -> TicketResult<Ticket> {
        let payload = draft.to_payload()?;
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Update(id.to_string()));
        if store.fail_mutation {
            return Err(TicketError::api("server says no"));
        }
        let updated = Ticket {
            id: id.to_string(),
            title: payload.title,
            description: payload.description,
            team: payload.team,
            status: payload.status,
            assignee: payload.assignee,
            reporter: payload.reporter,
        };
        if let Some(existing) = store.items.iter_mut().find(|t| t.id == id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> TicketResult<()> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Delete(id.to_string()));
        if store.fail_delete {
            return Err(TicketError::api("server says no"));
        }
        store.items.retain(|t| t.id != id);
        Ok(())
    }
}

/// In-memory team gateway, same shape as [`FakeTicketGateway`].
#[derive(Clone, Default)]
pub struct FakeTeamGateway {
    pub store: Arc<Mutex<FakeStore<Team>>>,
}

impl FakeTeamGateway {
    pub fn with_items(items: Vec<Team>) -> Self {
        let fake = Self::default();
        fake.store.lock().unwrap().items = items;
        fake
    }

    pub fn calls(&self) -> Vec<Call> {
        self.store.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl Gateway for FakeTeamGateway {
    type Entity = Team;
    type Draft = TeamDraft;

    const NOUN: &'static str = "team";

    async fn list(&self) -> TicketResult<Vec<Team>> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::List);
        if store.fail_list {
            return Err(TicketError::api("connection refused"));
        }
        Ok(store.items.clone())
    }

    async fn create(&self, draft: &TeamDraft) -> TicketResult<Team> {
        let payload = draft.to_payload()?;
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Create);
        if store.fail_mutation {
            return Err(TicketError::api("server says no"));
        }
        let id = store.next_id();
        let created = Team {
            id,
            name: payload.teamname,
            members: payload.members,
        };
        store.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &TeamDraft) -> TicketResult<Team> {
        let payload = draft.to_payload()?;
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Update(id.to_string()));
        if store.fail_mutation {
            return Err(TicketError::api("server says no"));
        }
        let updated = Team {
            id: id.to_string(),
            name: payload.teamname,
            members: payload.members,
        };
        if let Some(existing) = store.items.iter_mut().find(|t| t.id == id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> TicketResult<()> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(Call::Delete(id.to_string()));
        if store.fail_delete {
            return Err(TicketError::api("server says no"));
        }
        store.items.retain(|t| t.id != id);
        Ok(())
    }
}
