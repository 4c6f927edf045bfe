use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use super::app::{InputMode, InteractiveApp};
use super::event::{Event, EventHandler};
use crate::error::TicketResult;
use crate::logging::{log_debug, log_error, log_info};

pub async fn run_interactive_mode() -> TicketResult<()> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = match InteractiveApp::new() {
        Ok(app) => app,
        Err(e) => {
            log_error(&format!("Failed to create app: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(e);
        }
    };
    let events = EventHandler::new(100);

    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(e.into());
        }

        match events.recv() {
            Ok(Event::Key(key_event)) => {
                let code = key_event.code;
                match app.mode() {
                    InputMode::Login => match code {
                        KeyCode::Enter => app.submit_login().await,
                        _ => app.handle_login_key(code),
                    },
                    InputMode::Confirm => match code {
                        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                            app.confirm_selected_delete().await
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            app.cancel_delete()
                        }
                        _ => {}
                    },
                    InputMode::Form => match code {
                        KeyCode::Enter => app.submit_form().await,
                        _ => app.handle_form_key(code),
                    },
                    InputMode::Normal => match code {
                        KeyCode::Char('r') => app.refresh_all().await,
                        _ => app.handle_key(code),
                    },
                }
            }
            Ok(Event::Tick) => {}
            Err(_) => break,
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting interactive mode");
    restore_terminal(&mut terminal)?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> TicketResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
