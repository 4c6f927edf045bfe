use super::support::{team, ticket, valid_ticket_draft};
use crate::controller::{Draft, FormFields, TeamDraft, TicketDraft};
use crate::models::TicketStatus;

#[test]
fn test_ticket_draft_defaults_to_open() {
    let draft = TicketDraft::default();
    assert_eq!(draft.status, "open");
    assert!(draft.title.is_empty());
}

#[test]
fn test_ticket_draft_requires_every_field() {
    let mut draft = valid_ticket_draft();
    draft.assignee = "   ".to_string();

    let reason = draft.validate().unwrap_err();
    assert_eq!(reason.to_string(), "All fields are required");
}

#[test]
fn test_ticket_draft_rejects_unknown_status() {
    let mut draft = valid_ticket_draft();
    draft.status = "done".to_string();

    let reason = draft.validate().unwrap_err();
    assert_eq!(reason.to_string(), "Invalid status value");
}

#[test]
fn test_ticket_draft_accepts_padded_status() {
    let mut draft = valid_ticket_draft();
    draft.status = "  In-Progress ".to_string();
    assert!(draft.validate().is_ok());
}

#[test]
fn test_ticket_payload_trims_fields() {
    let mut draft = valid_ticket_draft();
    draft.title = "  Fix login  ".to_string();
    draft.team = " core ".to_string();

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.title, "Fix login");
    assert_eq!(payload.team, "core");
    assert_eq!(payload.status, TicketStatus::Open);
}

#[test]
fn test_ticket_draft_from_entity() {
    let draft = TicketDraft::from_entity(&ticket("3", "A bug", TicketStatus::InProgress));
    assert_eq!(draft.title, "A bug");
    assert_eq!(draft.status, "in-progress");
}

#[test]
fn test_ticket_form_field_positions() {
    let mut draft = valid_ticket_draft();
    assert_eq!(draft.field_count(), 6);
    assert_eq!(draft.field_labels()[TicketDraft::TEAM_FIELD], "Team");
    assert_eq!(draft.field_labels()[TicketDraft::STATUS_FIELD], "Status");
    assert_eq!(draft.field(TicketDraft::STATUS_FIELD), "open");

    draft.field_mut(0).push('!');
    assert_eq!(draft.title, "Fix login!");
}

#[test]
fn test_team_draft_requires_name() {
    let draft = TeamDraft {
        name: " ".to_string(),
        members_text: "alice".to_string(),
    };
    let reason = draft.validate().unwrap_err();
    assert_eq!(reason.to_string(), "Team name is required");
}

#[test]
fn test_team_draft_requires_members() {
    let draft = TeamDraft {
        name: "core".to_string(),
        members_text: " , ,, ".to_string(),
    };
    let reason = draft.validate().unwrap_err();
    assert_eq!(reason.to_string(), "Members list cannot be empty");
}

#[test]
fn test_team_payload_splits_members() {
    let draft = TeamDraft {
        name: " core ".to_string(),
        members_text: "alice,bob , carol".to_string(),
    };
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.teamname, "core");
    assert_eq!(payload.members, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_team_draft_from_entity_joins_members() {
    let draft = TeamDraft::from_entity(&team("1", "core", &["alice", "bob"]));
    assert_eq!(draft.name, "core");
    assert_eq!(draft.members_text, "alice, bob");
}
