use clap::ArgMatches;
use colored::Colorize;
use std::sync::Arc;

use super::confirm_prompt;
use crate::client::{ApiClient, TicketGateway};
use crate::controller::{CrudController, TicketDraft};
use crate::error::{TicketError, TicketResult};
use crate::formatting::{print_ticket_summary, print_tickets};
use crate::models::StatusSummary;

fn controller() -> TicketResult<CrudController<TicketGateway>> {
    let client = Arc::new(ApiClient::from_config()?);
    Ok(CrudController::new(TicketGateway::new(client)))
}

/// Drain the controller's error state into a hard failure for the one-shot
/// CLI path, where there is no view left to retry from.
fn bail_on_error(ctl: &mut CrudController<TicketGateway>) -> TicketResult<()> {
    match ctl.error.take() {
        Some(message) => Err(TicketError::api(message)),
        None => Ok(()),
    }
}

pub async fn handle(matches: &ArgMatches) -> TicketResult<()> {
    match matches.subcommand() {
        Some(("list", m)) => handle_list(m).await,
        Some(("create", m)) => handle_create(m).await,
        Some(("update", m)) => handle_update(m).await,
        Some(("delete", m)) => handle_delete(m).await,
        _ => unreachable!("subcommand required"),
    }
}

async fn handle_list(matches: &ArgMatches) -> TicketResult<()> {
    let mut ctl = controller()?;
    ctl.load().await;
    bail_on_error(&mut ctl)?;

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    print_tickets(&ctl.items, format)?;
    if format != "json" {
        print_ticket_summary(&StatusSummary::of(&ctl.items));
    }
    Ok(())
}

async fn handle_create(matches: &ArgMatches) -> TicketResult<()> {
    let mut ctl = controller()?;
    ctl.open_create();
    apply_args(&mut ctl.draft, matches);
    ctl.submit().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Ticket created");
    Ok(())
}

async fn handle_update(matches: &ArgMatches) -> TicketResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TicketError::invalid("Ticket ID is required"))?
        .clone();

    let mut ctl = controller()?;
    ctl.load().await;
    bail_on_error(&mut ctl)?;

    let ticket = ctl
        .find(&id)
        .cloned()
        .ok_or_else(|| TicketError::invalid(format!("No ticket with id {}", id)))?;

    ctl.open_edit(ticket);
    apply_args(&mut ctl.draft, matches);
    ctl.submit().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Ticket {} updated", id);
    Ok(())
}

async fn handle_delete(matches: &ArgMatches) -> TicketResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TicketError::invalid("Ticket ID is required"))?
        .clone();

    let mut ctl = controller()?;
    ctl.request_delete(id.clone());

    let confirmed =
        matches.get_flag("yes") || confirm_prompt(&format!("Delete ticket {}?", id.cyan()));

    if !confirmed {
        ctl.cancel_delete();
        println!("Canceled.");
        return Ok(());
    }

    ctl.confirm_delete().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Ticket {} deleted", id);
    Ok(())
}

/// Overlay any provided flags onto the draft; for `update`, unset flags keep
/// the values copied from the existing ticket.
fn apply_args(draft: &mut TicketDraft, matches: &ArgMatches) {
    if let Some(title) = matches.get_one::<String>("title") {
        draft.title = title.clone();
    }
    if let Some(description) = matches.get_one::<String>("description") {
        draft.description = description.clone();
    }
    if let Some(team) = matches.get_one::<String>("team") {
        draft.team = team.clone();
    }
    if let Some(status) = matches.get_one::<String>("status") {
        draft.status = status.clone();
    }
    if let Some(assignee) = matches.get_one::<String>("assignee") {
        draft.assignee = assignee.clone();
    }
    if let Some(reporter) = matches.get_one::<String>("reporter") {
        draft.reporter = reporter.clone();
    }
}
