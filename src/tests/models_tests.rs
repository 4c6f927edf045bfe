use super::support::{team, ticket};
use crate::models::{
    members_text, parse_members, StatusSummary, Team, TeamStats, Ticket, TicketStatus,
};

#[test]
fn test_status_wire_names() {
    assert_eq!(TicketStatus::Open.as_str(), "open");
    assert_eq!(TicketStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TicketStatus::Resolved.as_str(), "resolved");
    assert_eq!(TicketStatus::Closed.as_str(), "closed");
}

#[test]
fn test_status_parse_is_forgiving_about_case() {
    assert_eq!("Open".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
    assert_eq!(
        " IN-PROGRESS ".parse::<TicketStatus>().unwrap(),
        TicketStatus::InProgress
    );
    assert!("in progress".parse::<TicketStatus>().is_err());
}

#[test]
fn test_status_cycle_covers_all_variants() {
    let mut status = TicketStatus::Open;
    for _ in 0..TicketStatus::ALL.len() {
        status = status.next();
    }
    assert_eq!(status, TicketStatus::Open);

    assert_eq!(TicketStatus::Open.prev(), TicketStatus::Closed);
    assert_eq!(TicketStatus::InProgress.next(), TicketStatus::Resolved);
}

#[test]
fn test_ticket_deserializes_kebab_case_status() {
    let json = r#"{
        "id": "12",
        "title": "Fix login",
        "description": "Session expires",
        "team": "core",
        "status": "in-progress",
        "assignee": "alice",
        "reporter": "bob"
    }"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.id, "12");
}

#[test]
fn test_ticket_accepts_numeric_id() {
    let json = r#"{
        "id": 12,
        "title": "Fix login",
        "description": "Session expires",
        "team": "core",
        "status": "open",
        "assignee": "alice",
        "reporter": "bob"
    }"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.id, "12");
}

#[test]
fn test_team_uses_teamname_on_the_wire() {
    let json = r#"{"id": "3", "teamname": "platform", "members": ["alice", "bob"]}"#;
    let team: Team = serde_json::from_str(json).unwrap();
    assert_eq!(team.name, "platform");
    assert_eq!(team.members.len(), 2);

    let serialized = serde_json::to_value(&team).unwrap();
    assert_eq!(serialized["teamname"], "platform");
    assert!(serialized.get("name").is_none());
}

#[test]
fn test_parse_members_drops_blanks() {
    assert_eq!(
        parse_members("alice, bob ,  , carol"),
        vec!["alice", "bob", "carol"]
    );
    assert!(parse_members("  ,  ").is_empty());
    assert!(parse_members("").is_empty());
}

#[test]
fn test_members_text_round_trip() {
    let members = parse_members("alice, bob ,  , carol");
    assert_eq!(members_text(&members), "alice, bob, carol");
    assert_eq!(parse_members(&members_text(&members)), members);
}

#[test]
fn test_status_summary_counts() {
    let tickets = vec![
        ticket("1", "a", TicketStatus::Open),
        ticket("2", "b", TicketStatus::Open),
        ticket("3", "c", TicketStatus::Resolved),
        ticket("4", "d", TicketStatus::Closed),
    ];
    let summary = StatusSummary::of(&tickets);
    assert_eq!(summary.open, 2);
    assert_eq!(summary.in_progress, 0);
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.count(TicketStatus::Closed), 1);
}

#[test]
fn test_team_stats_buckets() {
    let teams = vec![
        team("1", "solo", &["alice"]),
        team("2", "pair", &["alice", "bob"]),
        team("3", "empty", &[]),
    ];
    let stats = TeamStats::of(&teams);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.single_member, 1);
    assert_eq!(stats.multi_member, 1);
}
