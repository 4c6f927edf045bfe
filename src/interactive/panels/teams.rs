use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::{Focus, InteractiveApp};
use crate::models::{members_text, TeamStats};

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Teams;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let stats = TeamStats::of(&app.teams.items);
    let title = format!(
        " Teams ({}) │ {} single / {} multi ",
        stats.total, stats.single_member, stats.multi_member
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if app.teams.items.is_empty() {
        let empty = Paragraph::new("No teams")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = if app.team_index >= inner_height {
        app.team_index - inner_height + 1
    } else {
        0
    };

    let members_width = (area.width as usize).saturating_sub(22).max(10);

    let items: Vec<ListItem> = app
        .teams
        .items
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, team)| {
            let selected = i == app.team_index && focused;
            let row_style = if selected {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<14} ", truncate(&team.name, 14)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("({}) ", team.members.len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate(&members_text(&team.members), members_width),
                    Style::default().fg(Color::White),
                ),
            ]);

            ListItem::new(line).style(row_style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
