pub mod tables;
pub mod theme;

pub use tables::{print_team_stats, print_teams, print_ticket_summary, print_tickets, truncate};
pub use theme::{status_badge, status_color, status_icon, status_tui_style};
