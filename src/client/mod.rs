pub mod api_client;
pub mod gateways;

pub use api_client::ApiClient;
pub use gateways::{TeamGateway, TicketGateway};
