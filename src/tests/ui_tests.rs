use ratatui::{backend::TestBackend, Terminal};

use crate::interactive::app::InteractiveApp;
use crate::interactive::ui;

fn render(app: &InteractiveApp) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    format!("{:?}", terminal.backend().buffer())
}

#[test]
fn test_login_view_renders_plain_ascii_title() {
    let app = InteractiveApp::new().unwrap();
    let rendered = render(&app);

    assert!(rendered.contains("Ticketing Tool - Log In"));
    assert!(rendered.contains("Username"));
    assert!(rendered.contains("Password"));
}

#[test]
fn test_login_view_masks_password() {
    let mut app = InteractiveApp::new().unwrap();
    app.login.password = "hunter2".to_string();
    let rendered = render(&app);

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("•••••••"));
}
