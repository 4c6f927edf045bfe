use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::{status_tui_color, status_tui_style};
use crate::interactive::app::InteractiveApp;
use crate::models::{StatusSummary, TicketStatus};

/// Title bar plus the per-status summary cards, condensed to one line.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let user = app.session.username().unwrap_or("-");
    let title_line = Line::from(vec![
        Span::styled(
            " Ticketing Tool ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("logged in as {}", user),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let summary = StatusSummary::of(&app.tickets.items);
    let mut summary_spans: Vec<Span> = vec![Span::raw(" ")];
    for status in TicketStatus::ALL {
        summary_spans.push(Span::styled(
            format!("{} {}", status.display_name(), summary.count(status)),
            status_tui_style(status),
        ));
        summary_spans.push(Span::styled("   ", Style::default()));
    }
    if app.tickets.loading || app.teams.loading {
        summary_spans.push(Span::styled(
            "⟳ loading...",
            Style::default().fg(status_tui_color(TicketStatus::InProgress)),
        ));
    }

    let paragraph = Paragraph::new(vec![title_line, Line::from(summary_spans)]);
    frame.render_widget(paragraph, inner);
}
