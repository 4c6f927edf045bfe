use colored::Color;
use ratatui::style::{Color as TuiColor, Modifier};

use crate::formatting::{status_badge, status_color, status_icon, status_tui_style};
use crate::models::TicketStatus;

#[test]
fn test_status_color_buckets() {
    assert_eq!(status_color(TicketStatus::Open), Color::Blue);
    assert_eq!(status_color(TicketStatus::InProgress), Color::Yellow);
    assert_eq!(status_color(TicketStatus::Resolved), Color::Green);
    assert_eq!(status_color(TicketStatus::Closed), Color::Red);
}

#[test]
fn test_status_badge_contains_wire_name() {
    let badge = status_badge(TicketStatus::InProgress);
    assert!(format!("{}", badge).contains("in-progress"));
}

#[test]
fn test_status_icons_are_distinct() {
    let icons: Vec<&str> = TicketStatus::ALL.iter().map(|s| status_icon(*s)).collect();
    let mut unique = icons.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), icons.len());
}

#[test]
fn test_tui_style_matches_color_buckets() {
    let style = status_tui_style(TicketStatus::Open);
    assert_eq!(style.fg, Some(TuiColor::Blue));
    assert!(style.add_modifier.contains(Modifier::BOLD));

    assert_eq!(
        status_tui_style(TicketStatus::Closed).fg,
        Some(TuiColor::Red)
    );
}
