use std::process;

use clap::{Arg, ArgAction, Command};
use colored::Colorize;

use ticketing_tool::commands;
use ticketing_tool::interactive::run_interactive_mode;
use ticketing_tool::logging::{init_logging, install_panic_hook, log_error};

fn ticket_field_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Ticket title"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .value_name("TEXT")
                .help("Ticket description"),
        )
        .arg(
            Arg::new("team")
                .long("team")
                .value_name("NAME")
                .help("Owning team"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .value_name("STATUS")
                .help("One of: open, in-progress, resolved, closed"),
        )
        .arg(
            Arg::new("assignee")
                .long("assignee")
                .value_name("NAME")
                .help("Person the ticket is assigned to"),
        )
        .arg(
            Arg::new("reporter")
                .long("reporter")
                .value_name("NAME")
                .help("Person who reported the ticket"),
        )
}

fn team_field_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Team name"),
        )
        .arg(
            Arg::new("members")
                .long("members")
                .value_name("LIST")
                .help("Comma-separated member names"),
        )
}

fn list_args(command: Command) -> Command {
    command.arg(
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .help("Output format: simple, table, or json"),
    )
}

fn delete_args(command: Command) -> Command {
    command
        .arg(Arg::new("id").value_name("ID").required(true))
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Skip the confirmation prompt")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() {
    // Logging is best-effort; a failure to open the log file is not fatal.
    let _ = init_logging();
    install_panic_hook();

    let app = Command::new("ticketing")
        .about("Ticketing tool - manage tickets and teams from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("signup")
                .about("Create an account")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("username")
                        .long("username")
                        .value_name("NAME")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("tickets")
                .about("List and manage tickets")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(list_args(Command::new("list").about("List all tickets")))
                .subcommand(ticket_field_args(
                    Command::new("create").about("Create a ticket"),
                ))
                .subcommand(ticket_field_args(
                    Command::new("update")
                        .about("Update a ticket")
                        .arg(Arg::new("id").value_name("ID").required(true)),
                ))
                .subcommand(delete_args(
                    Command::new("delete").about("Delete a ticket"),
                )),
        )
        .subcommand(
            Command::new("teams")
                .about("List and manage teams")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(list_args(Command::new("list").about("List all teams")))
                .subcommand(team_field_args(
                    Command::new("create").about("Create a team"),
                ))
                .subcommand(team_field_args(
                    Command::new("update")
                        .about("Update a team")
                        .arg(Arg::new("id").value_name("ID").required(true)),
                ))
                .subcommand(delete_args(Command::new("delete").about("Delete a team"))),
        )
        .subcommand(
            Command::new("config")
                .about("Configure the API endpoint")
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Set the backend API URL"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .alias("ui")
                .about("Launch the interactive dashboard"),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("signup", sub_matches)) => commands::auth::handle_signup(sub_matches).await,
        Some(("tickets", sub_matches)) => commands::tickets::handle(sub_matches).await,
        Some(("teams", sub_matches)) => commands::teams::handle(sub_matches).await,
        Some(("config", sub_matches)) => commands::config::handle_config(sub_matches),
        Some(("interactive", _)) => run_interactive_mode().await,
        _ => {
            eprintln!("Unknown command. Use 'ticketing --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
