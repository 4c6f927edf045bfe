use clap::ArgMatches;
use colored::Colorize;
use std::sync::Arc;

use super::confirm_prompt;
use crate::client::{ApiClient, TeamGateway};
use crate::controller::{CrudController, TeamDraft};
use crate::error::{TicketError, TicketResult};
use crate::formatting::{print_team_stats, print_teams};
use crate::models::TeamStats;

fn controller() -> TicketResult<CrudController<TeamGateway>> {
    let client = Arc::new(ApiClient::from_config()?);
    Ok(CrudController::new(TeamGateway::new(client)))
}

fn bail_on_error(ctl: &mut CrudController<TeamGateway>) -> TicketResult<()> {
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

    print_teams(&ctl.items, format)?;
    if format != "json" {
        print_team_stats(&TeamStats::of(&ctl.items));
    }
    Ok(())
}

async fn handle_create(matches: &ArgMatches) -> TicketResult<()> {
    let mut ctl = controller()?;
    ctl.open_create();
    apply_args(&mut ctl.draft, matches);
    ctl.submit().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Team created");
    Ok(())
}

async fn handle_update(matches: &ArgMatches) -> TicketResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TicketError::invalid("Team ID is required"))?
        .clone();

    let mut ctl = controller()?;
    ctl.load().await;
    bail_on_error(&mut ctl)?;

    let team = ctl
        .find(&id)
        .cloned()
        .ok_or_else(|| TicketError::invalid(format!("No team with id {}", id)))?;

    ctl.open_edit(team);
    apply_args(&mut ctl.draft, matches);
    ctl.submit().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Team {} updated", id);
    Ok(())
}

async fn handle_delete(matches: &ArgMatches) -> TicketResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TicketError::invalid("Team ID is required"))?
        .clone();

    let mut ctl = controller()?;
    ctl.request_delete(id.clone());

    let confirmed =
        matches.get_flag("yes") || confirm_prompt(&format!("Delete team {}?", id.cyan()));

    if !confirmed {
        ctl.cancel_delete();
        println!("Canceled.");
        return Ok(());
    }

    ctl.confirm_delete().await;
    bail_on_error(&mut ctl)?;

    println!("✅ Team {} deleted", id);
    Ok(())
}

fn apply_args(draft: &mut TeamDraft, matches: &ArgMatches) {
    if let Some(name) = matches.get_one::<String>("name") {
        draft.name = name.clone();
    }
    if let Some(members) = matches.get_one::<String>("members") {
        draft.members_text = members.clone();
    }
}
