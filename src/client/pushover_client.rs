use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::client::response::Response;
use crate::config::ApiSettings;
use crate::message::Message;
use crate::request::Request;
use crate::utils::error::Error;

/// Base URL of the public Pushover API.
pub const DEFAULT_ENDPOINT: &str = "https://api.pushover.net/1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages on behalf of one application.
///
/// Holds the application API token and an HTTP client; it keeps no state
/// between messages, so one instance can be shared by many tasks.
#[derive(Debug, Clone)]
pub struct Pushover {
    token: String,
    endpoint: String,
    http: reqwest::Client,
}

impl Pushover {
    /// Creates a sender for the public API with the default timeout.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_endpoint(token, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, Error> {
        Self::with_endpoint(
            &settings.token,
            &settings.endpoint,
            Duration::from_secs(settings.timeout),
        )
    }

    pub fn with_endpoint(token: &str, endpoint: &str, timeout: Duration) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pushover-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            token: token.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn messages_url(&self) -> String {
        format!("{}/messages.json", self.endpoint)
    }

    /// Validates `message` and sends it to `recipient`, a user or group key.
    ///
    /// Messages with an attachment go out as multipart forms, the others as
    /// URL-encoded forms. The attachment is consumed either way.
    pub async fn send_message(
        &self,
        message: &mut Message,
        recipient: &str,
    ) -> Result<Response, Error> {
        if recipient.is_empty() {
            return Err(Error::EmptyRecipientToken);
        }
        message.validate()?;

        let url = self.messages_url();
        let request = if message.has_attachment() {
            message.multipart_request(&self.token, recipient, &url)?
        } else {
            message.url_encoded_request(&self.token, recipient, &url)
        };

        let response = self.execute(request).await?;
        info!(request_id = %response.request_id, "message sent");
        Ok(response)
    }

    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let reply = self
            .http
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;

        let status = reply.status();
        let body = reply.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received API reply");

        Response::from_reply(status.as_u16(), &body)
    }
}
