use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::theme::status_tui_style;
use crate::formatting::truncate;
use crate::interactive::app::{Focus, InteractiveApp};

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Tickets;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if app.tickets.loading {
        " Tickets (loading...) ".to_string()
    } else {
        format!(" Tickets ({}) ", app.tickets.items.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if app.tickets.items.is_empty() {
        let empty = Paragraph::new("No tickets")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = if app.ticket_index >= inner_height {
        app.ticket_index - inner_height + 1
    } else {
        0
    };

    let title_width = (area.width as usize).saturating_sub(40).max(12);

    let items: Vec<ListItem> = app
        .tickets
        .items
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, ticket)| {
            let selected = i == app.ticket_index && focused;
            let row_style = if selected {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<8} ", truncate(&ticket.id, 8)),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    format!("{:<width$} ", truncate(&ticket.title, title_width), width = title_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<12} ", truncate(ticket.status.as_str(), 12)),
                    status_tui_style(ticket.status),
                ),
                Span::styled(
                    format!("{:<10} ", truncate(&ticket.team, 10)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    truncate(&ticket.assignee, 12),
                    Style::default().fg(Color::Green),
                ),
            ]);

            ListItem::new(line).style(row_style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
