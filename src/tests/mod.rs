mod support;

mod client_tests;
mod confirm_tests;
mod draft_tests;
mod models_tests;
mod theme_tests;
mod ui_tests;
