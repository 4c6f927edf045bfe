use colored::Colorize;

use super::theme::{status_badge, status_icon};
use crate::error::TicketResult;
use crate::models::{members_text, StatusSummary, Team, TeamStats, Ticket, TicketStatus};

/// Counts and cuts in characters, never bytes, so multibyte text cannot
/// split a character at the cut point.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }
    let cut: String = s.chars().take(max_len - 3).collect();
    format!("{}...", cut)
}

pub fn print_tickets(tickets: &[Ticket], format: &str) -> TicketResult<()> {
    if tickets.is_empty() {
        println!("{}", "No tickets found.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&tickets)?;
            println!("{}", json);
        }
        "table" => {
            println!("{}", "─".repeat(110).dimmed());
            println!(
                "{:<10} {:<30} {:<12} {:<13} {:<15} {:<15}",
                "ID".bold(),
                "Title".bold(),
                "Team".bold(),
                "Status".bold(),
                "Assignee".bold(),
                "Reporter".bold()
            );
            println!("{}", "─".repeat(110).dimmed());

            for ticket in tickets {
                println!(
                    "{:<10} {:<30} {:<12} {:<13} {:<15} {:<15}",
                    truncate(&ticket.id, 10).blue(),
                    truncate(&ticket.title, 30),
                    truncate(&ticket.team, 12).cyan(),
                    status_badge(ticket.status),
                    truncate(&ticket.assignee, 15).green(),
                    truncate(&ticket.reporter, 15)
                );
            }
            println!("{}", "─".repeat(110).dimmed());
        }
        _ => {
            // Grouped by status, in the fixed status order.
            for status in TicketStatus::ALL {
                let group: Vec<&Ticket> =
                    tickets.iter().filter(|t| t.status == status).collect();
                if group.is_empty() {
                    continue;
                }

                println!(
                    "\n{} {} ({})",
                    status_icon(status),
                    status.display_name().bold(),
                    group.len()
                );
                println!("{}", "─".repeat(50).dimmed());

                for ticket in group {
                    println!(
                        "  {}  {} {} {}",
                        truncate(&ticket.id, 10).blue(),
                        truncate(&ticket.title, 40),
                        "→".dimmed(),
                        ticket.assignee.green()
                    );
                    let desc = truncate(&ticket.description, 70);
                    if !desc.is_empty() {
                        println!("    {}", desc.dimmed());
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn print_ticket_summary(summary: &StatusSummary) {
    println!();
    for status in TicketStatus::ALL {
        print!(
            "{} {} {}   ",
            status_icon(status),
            status.display_name().bold(),
            summary.count(status)
        );
    }
    println!();
}

pub fn print_teams(teams: &[Team], format: &str) -> TicketResult<()> {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&teams)?;
            println!("{}", json);
        }
        "table" => {
            println!("{}", "─".repeat(80).dimmed());
            println!(
                "{:<10} {:<20} {:<48}",
                "ID".bold(),
                "Name".bold(),
                "Members".bold()
            );
            println!("{}", "─".repeat(80).dimmed());

            for team in teams {
                println!(
                    "{:<10} {:<20} {:<48}",
                    truncate(&team.id, 10).blue(),
                    truncate(&team.name, 20).cyan(),
                    truncate(&members_text(&team.members), 48)
                );
            }
            println!("{}", "─".repeat(80).dimmed());
        }
        _ => {
            for team in teams {
                println!(
                    "{} ({} {})",
                    team.name.cyan().bold(),
                    team.members.len(),
                    if team.members.len() == 1 {
                        "member"
                    } else {
                        "members"
                    }
                );
                println!("  {}", members_text(&team.members).dimmed());
            }
        }
    }
    Ok(())
}

pub fn print_team_stats(stats: &TeamStats) {
    println!(
        "\n{} teams  {} single-member  {} multi-member",
        stats.total.to_string().bold(),
        stats.single_member,
        stats.multi_member
    );
}
