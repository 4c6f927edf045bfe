use async_trait::async_trait;

use super::confirm::ConfirmGate;
use super::draft::Draft;
use crate::error::TicketResult;
use crate::logging::{log_debug, log_error};

/// An entity as exchanged with the remote API: a ticket or a team.
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// Remote mutation seam for one entity kind. The production implementations
/// wrap the REST client; tests substitute a recording fake.
#[async_trait]
pub trait Gateway: Send + Sync {
    type Entity: Entity + Send + Sync;
    type Draft: Draft<Entity = Self::Entity> + Send + Sync;

    /// Singular noun used in user-facing error messages ("ticket", "team").
    const NOUN: &'static str;

    async fn list(&self) -> TicketResult<Vec<Self::Entity>>;
    async fn create(&self, draft: &Self::Draft) -> TicketResult<Self::Entity>;
    async fn update(&self, id: &str, draft: &Self::Draft) -> TicketResult<Self::Entity>;
    async fn delete(&self, id: &str) -> TicketResult<()>;
}

/// Per-view owner of list state, form state, and mutation orchestration.
///
/// One instance per entity kind; instances share nothing. The list is always
/// server truth: every successful mutation ends in a full re-fetch rather
/// than a local merge. Errors land in `error` and are recoverable by
/// re-triggering the action; nothing here is fatal.
pub struct CrudController<G: Gateway> {
    gateway: G,
    pub items: Vec<G::Entity>,
    pub loading: bool,
    pub error: Option<String>,
    pub form_visible: bool,
    pub editing: Option<G::Entity>,
    pub draft: G::Draft,
    pub confirm: ConfirmGate,
}

impl<G: Gateway> CrudController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            loading: false,
            error: None,
            form_visible: false,
            editing: None,
            draft: G::Draft::default(),
            confirm: ConfirmGate::new(),
        }
    }

    /// Fetch the full list and replace `items` wholesale. Called once on
    /// startup and again after every successful mutation.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.gateway.list().await {
            Ok(items) => {
                log_debug(&format!("Fetched {} {}s", items.len(), G::NOUN));
                self.items = items;
            }
            Err(e) => {
                log_error(&format!("Error fetching {}s: {}", G::NOUN, e));
                self.error = Some(format!("Error fetching {}s", G::NOUN));
            }
        }

        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.draft = G::Draft::default();
        self.editing = None;
        self.form_visible = true;
    }

    pub fn open_edit(&mut self, entity: G::Entity) {
        self.draft = G::Draft::from_entity(&entity);
        self.editing = Some(entity);
        self.form_visible = true;
    }

    pub fn cancel_form(&mut self) {
        self.form_visible = false;
        self.editing = None;
        self.draft = G::Draft::default();
        self.error = None;
    }

    /// Validate, then create or update depending on whether an edit target is
    /// set. A validation failure surfaces inline and issues no request; a
    /// remote failure leaves the form open so the user can retry.
    pub async fn submit(&mut self) {
        if let Err(reason) = self.draft.validate() {
            self.error = Some(reason.to_string());
            return;
        }

        self.loading = true;
        self.error = None;

        let editing_id = self.editing.as_ref().map(|e| e.id().to_string());
        let result = match editing_id {
            Some(id) => self.gateway.update(&id, &self.draft).await.map(drop),
            None => self.gateway.create(&self.draft).await.map(drop),
        };

        match result {
            Ok(()) => {
                self.editing = None;
                self.form_visible = false;
                self.draft = G::Draft::default();
                self.load().await;
            }
            Err(e) => {
                log_error(&format!("Error submitting {}: {}", G::NOUN, e));
                self.loading = false;
                self.error = Some(format!("Error submitting {}: {}", G::NOUN, e));
            }
        }
    }

    /// Record the delete intent and open the confirmation gate; nothing is
    /// deleted until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.confirm.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Delete the pending target, then re-fetch regardless of the outcome;
    /// a failed delete only leaves a generic error behind.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.confirm.take_pending() else {
            return;
        };

        let result = self.gateway.delete(&id).await;
        self.load().await;

        if let Err(e) = result {
            log_error(&format!("Error deleting {} {}: {}", G::NOUN, id, e));
            self.error = Some(format!("Error deleting {}", G::NOUN));
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm.is_open()
    }

    pub fn find(&self, id: &str) -> Option<&G::Entity> {
        self.items.iter().find(|e| e.id() == id)
    }
}
