use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{Focus, InteractiveApp, View};
use super::layout::{app_layout, centered_popup, panel_layout};
use super::{panels, popups};
use crate::formatting::truncate;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();

    if app.view == View::Login {
        draw_login(frame, area, app);
        return;
    }

    let layout = app_layout(area);
    panels::header::draw(frame, layout.header, app);

    let panes = panel_layout(layout.main);
    panels::tickets::draw(frame, panes.tickets, app);
    panels::teams::draw(frame, panes.teams, app);

    draw_footer(frame, layout.footer, app);

    // Popups are drawn last, on top of the dashboard.
    match app.focus {
        Focus::Tickets => {
            if app.tickets.form_visible {
                let title = if app.tickets.editing.is_some() {
                    "Edit Ticket"
                } else {
                    "New Ticket"
                };
                popups::form::draw(
                    frame,
                    area,
                    title,
                    &app.tickets.draft,
                    app.form_field,
                    app.tickets.error.as_deref(),
                    "Tab: Next field  ←/→: Cycle team/status  Enter: Submit  Esc: Cancel",
                );
            } else if app.tickets.is_confirming() {
                popups::confirm::draw(frame, area, "ticket");
            }
        }
        Focus::Teams => {
            if app.teams.form_visible {
                let title = if app.teams.editing.is_some() {
                    "Edit Team"
                } else {
                    "New Team"
                };
                popups::form::draw(
                    frame,
                    area,
                    title,
                    &app.teams.draft,
                    app.form_field,
                    app.teams.error.as_deref(),
                    "Tab: Next field  Enter: Submit  Esc: Cancel",
                );
            } else if app.teams.is_confirming() {
                popups::confirm::draw(frame, area, "team");
            }
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error = match app.focus {
        Focus::Tickets => app.tickets.error.as_deref(),
        Focus::Teams => app.teams.error.as_deref(),
    };

    let line = match error {
        // Errors are local to the view and recoverable; show them until the
        // next action replaces them.
        Some(message) => Line::from(Span::styled(
            format!(" ✗ {}", truncate(message, inner.width as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            " q: Quit  Tab: Switch panel  j/k: Move  n: New  e: Edit  d: Delete  r: Refresh  Esc: Log out",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_login(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 50;
    let height: u16 = 8;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ticketing Tool - Log In ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let masked = "•".repeat(app.login.password.chars().count());
    let fields = [
        ("Username", app.login.username.as_str()),
        ("Password", masked.as_str()),
    ];

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_active = i == app.login.active_field;
        let label_style = if is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let indicator = if is_active { "\u{25b6} " } else { "  " };

        let line = Line::from(vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<10}", label), label_style),
            Span::styled(*value, Style::default().fg(Color::White)),
        ]);
        let row_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    if let Some(message) = &app.login.error {
        let error_area = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(2),
            inner.width,
            1,
        );
        let error_widget = Paragraph::new(Line::from(Span::styled(
            truncate(message, inner.width as usize),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_widget, error_area);
    }

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab: Next field  Enter: Log in  Esc: Quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, hints_area);
}
