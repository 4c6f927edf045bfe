pub mod confirm;
pub mod crud;
pub mod draft;

pub use confirm::ConfirmGate;
pub use crud::{CrudController, Entity, Gateway};
pub use draft::{Draft, FormFields, TeamDraft, TicketDraft};
