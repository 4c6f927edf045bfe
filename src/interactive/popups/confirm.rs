use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

/// Draw the delete confirmation dialog. Nothing is deleted until the user
/// answers yes; cancel discards the pending target.
pub fn draw(frame: &mut Frame, area: Rect, noun: &str) {
    let width: u16 = 44;
    let height: u16 = 6;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Delete Confirmation ")
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let message = Paragraph::new(Line::from(Span::styled(
        format!("Delete this {}?", noun),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(message, message_area);

    let detail_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    let detail = Paragraph::new(Line::from(Span::styled(
        "Are you sure you want to delete this item?",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(detail, detail_area);

    let options_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let options_line = Line::from(vec![
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]es  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "N",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]o", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(options_line), options_area);
}
