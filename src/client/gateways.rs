use async_trait::async_trait;
use std::sync::Arc;

use super::ApiClient;
use crate::controller::{Entity, Gateway, TeamDraft, TicketDraft};
use crate::error::TicketResult;
use crate::models::{Team, Ticket};

impl Entity for Ticket {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Team {
    fn id(&self) -> &str {
        &self.id
    }
}

/// REST-backed gateway for tickets.
pub struct TicketGateway {
    client: Arc<ApiClient>,
}

impl TicketGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Gateway for TicketGateway {
    type Entity = Ticket;
    type Draft = TicketDraft;

    const NOUN: &'static str = "ticket";

    async fn list(&self) -> TicketResult<Vec<Ticket>> {
        self.client.list_tickets().await
    }

    async fn create(&self, draft: &TicketDraft) -> TicketResult<Ticket> {
        let payload = draft.to_payload()?;
        self.client.create_ticket(&payload).await
    }

    async fn update(&self, id: &str, draft: &TicketDraft) -> TicketResult<Ticket> {
        let payload = draft.to_payload()?;
        self.client.update_ticket(id, &payload).await
    }

    async fn delete(&self, id: &str) -> TicketResult<()> {
        self.client.delete_ticket(id).await
    }
}

/// REST-backed gateway for teams.
pub struct TeamGateway {
    client: Arc<ApiClient>,
}

impl TeamGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Gateway for TeamGateway {
    type Entity = Team;
    type Draft = TeamDraft;

    const NOUN: &'static str = "team";

    async fn list(&self) -> TicketResult<Vec<Team>> {
        self.client.list_teams().await
    }

    async fn create(&self, draft: &TeamDraft) -> TicketResult<Team> {
        let payload = draft.to_payload()?;
        self.client.create_team(&payload).await
    }

    async fn update(&self, id: &str, draft: &TeamDraft) -> TicketResult<Team> {
        let payload = draft.to_payload()?;
        self.client.update_team(id, &payload).await
    }

    async fn delete(&self, id: &str) -> TicketResult<()> {
        self.client.delete_team(id).await
    }
}
