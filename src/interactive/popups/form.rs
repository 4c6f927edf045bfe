use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::controller::FormFields;
use crate::formatting::truncate;
use crate::interactive::layout::centered_popup;

/// Draw the create/edit form popup for any draft with labeled text fields.
pub fn draw<D: FormFields>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    draft: &D,
    active_field: usize,
    error: Option<&str>,
    hints: &str,
) {
    let width: u16 = 64;
    let height: u16 = draft.field_count() as u16 + 5;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let max_value_width = (inner.width as usize).saturating_sub(16);

    for (i, label) in draft.field_labels().iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(2) {
            break;
        }

        let is_active = i == active_field;

        let label_style = if is_active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = draft.field(i);
        let shown = if value.is_empty() && is_active {
            "<type here>".to_string()
        } else {
            truncate(value, max_value_width)
        };

        let value_style = if is_active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let indicator = if is_active { "\u{25b6} " } else { "  " };

        let line = Line::from(vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<12}", label), label_style),
            Span::styled(shown, value_style),
        ]);

        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // Inline validation/submit error, kept visible while the form is open.
    if let Some(message) = error {
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
    let hints_widget = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints_widget, hints_area);
}
