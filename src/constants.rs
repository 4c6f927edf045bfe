pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "TICKET_API_URL";
pub const CONFIG_FILE: &str = ".ticketing-tool-config.json";

// REST paths on the remote service
pub const TICKETS_PATH: &str = "/api/tickets";
pub const TEAMS_PATH: &str = "/api/teams";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";
