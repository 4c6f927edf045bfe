use clap::ArgMatches;
use colored::Colorize;

use crate::client::ApiClient;
use crate::error::{TicketError, TicketResult};
use crate::models::SignupRequest;

pub async fn handle_signup(matches: &ArgMatches) -> TicketResult<()> {
    let email = required(matches, "email")?;
    let username = required(matches, "username")?;
    let password = required(matches, "password")?;

    let client = ApiClient::from_config()?;
    let request = SignupRequest {
        email,
        username,
        password,
    };

    let message = client.sign_up(&request).await?;
    println!("✅ {}", message.green());
    Ok(())
}

fn required(matches: &ArgMatches, name: &str) -> TicketResult<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| TicketError::invalid(format!("{} is required", name)))
}
