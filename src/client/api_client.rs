use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::constants::{LOGIN_PATH, SIGNUP_PATH, TEAMS_PATH, TICKETS_PATH};
use crate::error::{TicketError, TicketResult};
use crate::models::{
    Ack, LoginRequest, SignupRequest, Team, TeamPayload, Ticket, TicketPayload,
};

/// Thin REST wrapper over the remote ticketing service. No authentication
/// token is attached to requests; access gating is purely client-local.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> TicketResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config() -> TicketResult<Self> {
        Self::new(config::get_api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Non-2xx responses fail uniformly: surface the JSON `message` field
    /// from the error body when present, else a generic HTTP message.
    async fn check(response: Response) -> TicketResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(TicketError::api(error_message(status, &body)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TicketResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> TicketResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> TicketResult<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// DELETE responses carry status only; the body is ignored.
    async fn delete_path(&self, path: &str) -> TicketResult<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn list_tickets(&self) -> TicketResult<Vec<Ticket>> {
        self.get_json(TICKETS_PATH).await
    }

    pub async fn create_ticket(&self, payload: &TicketPayload) -> TicketResult<Ticket> {
        self.post_json(TICKETS_PATH, payload).await
    }

    pub async fn update_ticket(&self, id: &str, payload: &TicketPayload) -> TicketResult<Ticket> {
        self.put_json(&format!("{}/{}", TICKETS_PATH, id), payload).await
    }

    pub async fn delete_ticket(&self, id: &str) -> TicketResult<()> {
        self.delete_path(&format!("{}/{}", TICKETS_PATH, id)).await
    }

    pub async fn list_teams(&self) -> TicketResult<Vec<Team>> {
        self.get_json(TEAMS_PATH).await
    }

    pub async fn create_team(&self, payload: &TeamPayload) -> TicketResult<Team> {
        self.post_json(TEAMS_PATH, payload).await
    }

    pub async fn update_team(&self, id: &str, payload: &TeamPayload) -> TicketResult<Team> {
        self.put_json(&format!("{}/{}", TEAMS_PATH, id), payload).await
    }

    pub async fn delete_team(&self, id: &str) -> TicketResult<()> {
        self.delete_path(&format!("{}/{}", TEAMS_PATH, id)).await
    }

    /// Returns the server acknowledgement message, or a default on an empty
    /// body.
    pub async fn sign_up(&self, request: &SignupRequest) -> TicketResult<String> {
        let ack: Ack = self.post_json(SIGNUP_PATH, request).await?;
        Ok(ack
            .message
            .unwrap_or_else(|| "Sign-up successful".to_string()))
    }

    pub async fn log_in(&self, request: &LoginRequest) -> TicketResult<String> {
        let ack: Ack = self.post_json(LOGIN_PATH, request).await?;
        Ok(ack.message.unwrap_or_else(|| "Logged in".to_string()))
    }
}

pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP error: {}", status))
}
