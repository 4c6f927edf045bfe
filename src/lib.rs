// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{ApiClient, TeamGateway, TicketGateway};
pub use config::{get_api_url, load_config, resolve_api_url, save_config, Config};
pub use controller::{ConfirmGate, CrudController, Draft, Entity, FormFields, Gateway};
pub use error::{TicketError, TicketResult};
pub use models::*;
pub use session::Session;
