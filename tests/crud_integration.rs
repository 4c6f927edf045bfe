use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use ticketing_tool::controller::{CrudController, Gateway, TicketDraft};
use ticketing_tool::error::{TicketError, TicketResult};
use ticketing_tool::models::{Ticket, TicketStatus};

/// Shared in-memory backend standing in for the remote service.
#[derive(Clone, Default)]
struct MemoryBackend {
    tickets: Arc<Mutex<Vec<Ticket>>>,
    next_id: Arc<Mutex<usize>>,
    broken: Arc<Mutex<bool>>,
}

impl MemoryBackend {
    fn fail_next_requests(&self, broken: bool) {
        *self.broken.lock().unwrap() = broken;
    }

    fn check(&self) -> TicketResult<()> {
        if *self.broken.lock().unwrap() {
            Err(TicketError::api("service unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Gateway for MemoryBackend {
    type Entity = Ticket;
    type Draft = TicketDraft;

    const NOUN: &'static str = "ticket";

    async fn list(&self) -> TicketResult<Vec<Ticket>> {
        self.check()?;
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn create(&self, draft: &TicketDraft) -> TicketResult<Ticket> {
        self.check()?;
        let payload = draft.to_payload()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Ticket {
            id: next_id.to_string(),
            title: payload.title,
            description: payload.description,
            team: payload.team,
            status: payload.status,
            assignee: payload.assignee,
            reporter: payload.reporter,
        };
        self.tickets.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &TicketDraft) -> TicketResult<Ticket> {
        self.check()?;
        let payload = draft.to_payload()?;
        let mut tickets = self.tickets.lock().unwrap();
        let existing = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::api("Ticket not found"))?;
        existing.title = payload.title;
        existing.description = payload.description;
        existing.team = payload.team;
        existing.status = payload.status;
        existing.assignee = payload.assignee;
        existing.reporter = payload.reporter;
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> TicketResult<()> {
        self.check()?;
        self.tickets.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

fn fill_draft(draft: &mut TicketDraft, title: &str, status: &str) {
    draft.title = title.to_string();
    draft.description = "integration".to_string();
    draft.team = "core".to_string();
    draft.status = status.to_string();
    draft.assignee = "alice".to_string();
    draft.reporter = "bob".to_string();
}

#[tokio::test]
async fn test_full_ticket_lifecycle() {
    let backend = MemoryBackend::default();
    let mut ctl = CrudController::new(backend.clone());

    ctl.load().await;
    assert!(ctl.items.is_empty());

    // Create two tickets through the form flow.
    ctl.open_create();
    fill_draft(&mut ctl.draft, "First", "open");
    ctl.submit().await;

    ctl.open_create();
    fill_draft(&mut ctl.draft, "Second", "in-progress");
    ctl.submit().await;

    assert_eq!(ctl.items.len(), 2);
    assert!(ctl.error.is_none());

    // Edit the second one.
    let second = ctl.find("2").cloned().unwrap();
    ctl.open_edit(second);
    ctl.draft.status = "resolved".to_string();
    ctl.submit().await;
    assert_eq!(ctl.find("2").unwrap().status, TicketStatus::Resolved);

    // Delete the first one behind the confirmation gate.
    ctl.request_delete("1");
    assert!(ctl.is_confirming());
    ctl.confirm_delete().await;

    assert_eq!(ctl.items.len(), 1);
    assert!(ctl.find("1").is_none());
    assert!(!ctl.is_confirming());
}

#[tokio::test]
async fn test_outage_then_recovery() {
    let backend = MemoryBackend::default();
    let mut ctl = CrudController::new(backend.clone());

    ctl.open_create();
    fill_draft(&mut ctl.draft, "First", "open");

    backend.fail_next_requests(true);
    ctl.submit().await;
    assert_eq!(
        ctl.error.as_deref(),
        Some("Error submitting ticket: service unavailable")
    );
    assert!(ctl.form_visible);

    // The form kept its contents; a retry after recovery succeeds.
    backend.fail_next_requests(false);
    ctl.submit().await;
    assert!(ctl.error.is_none());
    assert!(!ctl.form_visible);
    assert_eq!(ctl.items.len(), 1);
    assert_eq!(ctl.items[0].title, "First");
}

#[tokio::test]
async fn test_validation_blocks_submission() {
    let backend = MemoryBackend::default();
    let mut ctl = CrudController::new(backend.clone());

    ctl.open_create();
    ctl.draft.title = "No other fields".to_string();
    ctl.submit().await;

    assert_eq!(ctl.error.as_deref(), Some("All fields are required"));
    assert!(backend.tickets.lock().unwrap().is_empty());
}
