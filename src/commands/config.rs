use clap::ArgMatches;
use colored::Colorize;

use crate::config::{config_path, get_api_url, load_config, save_config};
use crate::error::TicketResult;
use crate::logging::get_log_file_path;

pub fn handle_config(matches: &ArgMatches) -> TicketResult<()> {
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        let mut config = load_config();
        config.api_url = Some(api_url.trim_end_matches('/').to_string());
        save_config(&config)?;
        println!("✅ API URL saved: {}", api_url.cyan());
    } else if matches.get_flag("show") {
        println!("API URL: {}", get_api_url().cyan());
        if let Ok(path) = config_path() {
            println!("Config file: {}", path.display().to_string().dimmed());
        }
        if let Some(path) = get_log_file_path() {
            println!("Log file: {}", path.display().to_string().dimmed());
        }
    } else {
        println!("Usage: ticketing config --api-url <URL> or ticketing config --show");
    }
    Ok(())
}
