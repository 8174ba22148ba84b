use serde::Deserialize;
use tracing::warn;

use crate::utils::error::{Error, Errors};

/// Decoded reply of the messages endpoint.
///
/// `status` is `1` when the message was accepted. Emergency messages also
/// get a `receipt` that can be used to poll for acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Response {
    pub status: i32,
    #[serde(rename = "request", default)]
    pub request_id: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Response {
    /// Decodes a reply received with HTTP status `status`.
    ///
    /// The API answers rejected messages with a 4xx status and a JSON body, so
    /// the body is decoded first. Only a non-JSON body on a non-2xx status is
    /// reported as [`Error::Status`].
    pub fn from_reply(status: u16, body: &[u8]) -> Result<Self, Error> {
        match Self::from_slice(body) {
            Err(Error::Json(_)) if !(200..300).contains(&status) => Err(Error::Status(status)),
            other => other,
        }
    }

    /// Decodes a JSON reply, turning a rejected message into [`Error::Api`].
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        let response: Response = serde_json::from_slice(body)?;
        if response.status != 1 {
            warn!(
                request_id = %response.request_id,
                errors = response.errors.len(),
                "message rejected by the API"
            );
            return Err(Errors(response.errors).into());
        }
        Ok(response)
    }
}
