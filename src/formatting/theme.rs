use colored::{Color, ColoredString, Colorize};
use ratatui::style::{Color as TuiColor, Modifier, Style};

use crate::models::TicketStatus;

/// Status color buckets, shared by the one-shot command output and the TUI:
/// open is blue, in-progress yellow, resolved green, closed red, all bold.
pub fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Open => Color::Blue,
        TicketStatus::InProgress => Color::Yellow,
        TicketStatus::Resolved => Color::Green,
        TicketStatus::Closed => Color::Red,
    }
}

pub fn status_badge(status: TicketStatus) -> ColoredString {
    status.as_str().color(status_color(status)).bold()
}

pub fn status_icon(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "○",
        TicketStatus::InProgress => "◐",
        TicketStatus::Resolved => "✓",
        TicketStatus::Closed => "✗",
    }
}

pub fn status_tui_color(status: TicketStatus) -> TuiColor {
    match status {
        TicketStatus::Open => TuiColor::Blue,
        TicketStatus::InProgress => TuiColor::Yellow,
        TicketStatus::Resolved => TuiColor::Green,
        TicketStatus::Closed => TuiColor::Red,
    }
}

pub fn status_tui_style(status: TicketStatus) -> Style {
    Style::default()
        .fg(status_tui_color(status))
        .add_modifier(Modifier::BOLD)
}
