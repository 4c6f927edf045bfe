use crossterm::event::KeyCode;
use std::sync::Arc;

use crate::client::{ApiClient, TeamGateway, TicketGateway};
use crate::controller::{CrudController, FormFields, TicketDraft};
use crate::error::TicketResult;
use crate::logging::log_info;
use crate::models::{LoginRequest, TicketStatus};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tickets,
    Teams,
}

/// What the next key press means, derived from view and controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Login,
    Form,
    Confirm,
    Normal,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub active_field: usize,
    pub error: Option<String>,
}

pub struct InteractiveApp {
    pub view: View,
    pub focus: Focus,
    pub session: Session,
    pub login: LoginForm,
    pub tickets: CrudController<TicketGateway>,
    pub teams: CrudController<TeamGateway>,
    pub ticket_index: usize,
    pub team_index: usize,
    pub form_field: usize,
    pub should_quit: bool,
    client: Arc<ApiClient>,
}

impl InteractiveApp {
    pub fn new() -> TicketResult<Self> {
        let client = Arc::new(ApiClient::from_config()?);

        Ok(Self {
            view: View::Login,
            focus: Focus::Tickets,
            session: Session::new(),
            login: LoginForm::default(),
            tickets: CrudController::new(TicketGateway::new(client.clone())),
            teams: CrudController::new(TeamGateway::new(client.clone())),
            ticket_index: 0,
            team_index: 0,
            form_field: 0,
            should_quit: false,
            client,
        })
    }

    pub fn mode(&self) -> InputMode {
        if self.view == View::Login {
            return InputMode::Login;
        }
        let (form_open, confirming) = match self.focus {
            Focus::Tickets => (self.tickets.form_visible, self.tickets.is_confirming()),
            Focus::Teams => (self.teams.form_visible, self.teams.is_confirming()),
        };
        if confirming {
            InputMode::Confirm
        } else if form_open {
            InputMode::Form
        } else {
            InputMode::Normal
        }
    }

    // ---- Login view ----

    pub async fn submit_login(&mut self) {
        let username = self.login.username.trim().to_string();
        let password = self.login.password.clone();

        if username.is_empty() || password.is_empty() {
            self.login.error = Some("Username and password are required".to_string());
            return;
        }

        let request = LoginRequest {
            username: username.clone(),
            password,
        };
        match self.client.log_in(&request).await {
            Ok(_) => {
                log_info(&format!("Logged in as {}", username));
                self.session.login(username);
                self.login = LoginForm::default();
                self.view = View::Dashboard;
                self.refresh_all().await;
            }
            Err(e) => {
                self.login.error = Some(e.to_string());
            }
        }
    }

    pub fn handle_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.login.active_field = 1 - self.login.active_field;
            }
            KeyCode::Backspace => {
                self.active_login_field_mut().pop();
            }
            KeyCode::Char(c) => {
                self.active_login_field_mut().push(c);
            }
            _ => {}
        }
    }

    fn active_login_field_mut(&mut self) -> &mut String {
        if self.login.active_field == 0 {
            &mut self.login.username
        } else {
            &mut self.login.password
        }
    }

    pub fn logout(&mut self) {
        log_info("Logged out");
        self.session.logout();
        self.view = View::Login;
        self.login = LoginForm::default();
        self.tickets.cancel_form();
        self.tickets.cancel_delete();
        self.teams.cancel_form();
        self.teams.cancel_delete();
    }

    // ---- Dashboard ----

    pub async fn refresh_all(&mut self) {
        if self.session.guard().is_err() {
            return;
        }
        self.tickets.load().await;
        self.teams.load().await;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.ticket_index >= self.tickets.items.len() {
            self.ticket_index = self.tickets.items.len().saturating_sub(1);
        }
        if self.team_index >= self.teams.items.len() {
            self.team_index = self.teams.items.len().saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.logout(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Tickets => Focus::Teams,
                    Focus::Teams => Focus::Tickets,
                };
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('n') => {
                self.form_field = 0;
                match self.focus {
                    Focus::Tickets => self.tickets.open_create(),
                    Focus::Teams => self.teams.open_create(),
                }
            }
            KeyCode::Char('e') => {
                self.form_field = 0;
                match self.focus {
                    Focus::Tickets => {
                        if let Some(ticket) = self.tickets.items.get(self.ticket_index).cloned() {
                            self.tickets.open_edit(ticket);
                        }
                    }
                    Focus::Teams => {
                        if let Some(team) = self.teams.items.get(self.team_index).cloned() {
                            self.teams.open_edit(team);
                        }
                    }
                }
            }
            KeyCode::Char('d') => match self.focus {
                Focus::Tickets => {
                    if let Some(ticket) = self.tickets.items.get(self.ticket_index) {
                        let id = ticket.id.clone();
                        self.tickets.request_delete(id);
                    }
                }
                Focus::Teams => {
                    if let Some(team) = self.teams.items.get(self.team_index) {
                        let id = team.id.clone();
                        self.teams.request_delete(id);
                    }
                }
            },
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (index, len) = match self.focus {
            Focus::Tickets => (&mut self.ticket_index, self.tickets.items.len()),
            Focus::Teams => (&mut self.team_index, self.teams.items.len()),
        };
        if len == 0 {
            return;
        }
        if delta > 0 {
            *index = (*index + 1) % len;
        } else if *index == 0 {
            *index = len - 1;
        } else {
            *index -= 1;
        }
    }

    // ---- Form popup ----

    pub async fn submit_form(&mut self) {
        match self.focus {
            Focus::Tickets => self.tickets.submit().await,
            Focus::Teams => self.teams.submit().await,
        }
        let still_open = match self.focus {
            Focus::Tickets => self.tickets.form_visible,
            Focus::Teams => self.teams.form_visible,
        };
        if !still_open {
            self.form_field = 0;
            self.clamp_selection();
        }
    }

    pub fn handle_form_key(&mut self, key: KeyCode) {
        // Ticket-specific: cycle status and team with left/right instead of
        // free-typing them.
        if self.focus == Focus::Tickets {
            match (self.form_field, key) {
                (TicketDraft::STATUS_FIELD, KeyCode::Right) => {
                    self.cycle_status(true);
                    return;
                }
                (TicketDraft::STATUS_FIELD, KeyCode::Left) => {
                    self.cycle_status(false);
                    return;
                }
                (TicketDraft::TEAM_FIELD, KeyCode::Right) => {
                    self.cycle_team(true);
                    return;
                }
                (TicketDraft::TEAM_FIELD, KeyCode::Left) => {
                    self.cycle_team(false);
                    return;
                }
                _ => {}
            }
        }

        let field_count = match self.focus {
            Focus::Tickets => self.tickets.draft.field_count(),
            Focus::Teams => self.teams.draft.field_count(),
        };

        match key {
            KeyCode::Esc => {
                match self.focus {
                    Focus::Tickets => self.tickets.cancel_form(),
                    Focus::Teams => self.teams.cancel_form(),
                }
                self.form_field = 0;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_field = (self.form_field + 1) % field_count;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_field = (self.form_field + field_count - 1) % field_count;
            }
            KeyCode::Backspace => {
                self.active_form_field_mut().pop();
            }
            KeyCode::Char(c) => {
                self.active_form_field_mut().push(c);
            }
            _ => {}
        }
    }

    fn active_form_field_mut(&mut self) -> &mut String {
        let field = self.form_field;
        match self.focus {
            Focus::Tickets => self.tickets.draft.field_mut(field),
            Focus::Teams => self.teams.draft.field_mut(field),
        }
    }

    fn cycle_status(&mut self, forward: bool) {
        let current: TicketStatus = self
            .tickets
            .draft
            .status
            .parse()
            .unwrap_or(TicketStatus::Open);
        let next = if forward { current.next() } else { current.prev() };
        self.tickets.draft.status = next.as_str().to_string();
    }

    /// Cycle the ticket form's team field through the fetched team names.
    fn cycle_team(&mut self, forward: bool) {
        let names: Vec<&str> = self.teams.items.iter().map(|t| t.name.as_str()).collect();
        if names.is_empty() {
            return;
        }
        let current = names
            .iter()
            .position(|name| *name == self.tickets.draft.team);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % names.len(),
            (Some(i), false) => (i + names.len() - 1) % names.len(),
            (None, _) => 0,
        };
        self.tickets.draft.team = names[next].to_string();
    }

    // ---- Confirmation popup ----

    pub async fn confirm_selected_delete(&mut self) {
        match self.focus {
            Focus::Tickets => self.tickets.confirm_delete().await,
            Focus::Teams => self.teams.confirm_delete().await,
        }
        self.clamp_selection();
    }

    pub fn cancel_delete(&mut self) {
        match self.focus {
            Focus::Tickets => self.tickets.cancel_delete(),
            Focus::Teams => self.teams.cancel_delete(),
        }
    }
}
