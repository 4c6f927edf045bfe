pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod panels;
pub mod popups;
pub mod ui;

pub use handlers::run_interactive_mode;
