use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Generic acknowledgement body returned by the auth endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct Ack {
    pub message: Option<String>,
}
