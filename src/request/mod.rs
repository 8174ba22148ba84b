//! The `request` module turns a [`Message`] into an HTTP request body.
//!
//! Messages carrying an attachment are encoded as `multipart/form-data`, the
//! others as `application/x-www-form-urlencoded`. Both encodings carry the same
//! text fields. Sending the body is left to the caller (or to [`crate::client`]).

pub mod multipart;

use std::io::Read;

use tracing::debug;
use url::form_urlencoded;

use crate::message::{MESSAGE_MAX_ATTACHMENT_BYTES, Message};
use crate::utils::error::{Error, MessageError};
use multipart::MultipartForm;

/// Name of the form part, and of the file, holding the attachment.
pub const ATTACHMENT_PART_NAME: &str = "attachment";

const URL_ENCODED_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A ready-to-send POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Message {
    /// Builds a multipart request carrying the message fields and its attachment.
    ///
    /// `token` is the application API token and `user` the recipient key.
    /// The attachment reader is consumed. Fields are not validated here,
    /// call [`Message::validate`] first.
    pub fn multipart_request(
        &mut self,
        token: &str,
        user: &str,
        url: &str,
    ) -> Result<Request, Error> {
        let attachment = self
            .take_attachment()
            .ok_or(MessageError::MissingAttachment)?;

        // one byte past the ceiling is enough to tell the attachment is too large
        let mut data = Vec::new();
        attachment
            .take(MESSAGE_MAX_ATTACHMENT_BYTES + 1)
            .read_to_end(&mut data)?;

        if data.is_empty() {
            return Err(MessageError::MissingAttachment.into());
        }
        if data.len() as u64 > MESSAGE_MAX_ATTACHMENT_BYTES {
            return Err(MessageError::AttachmentTooLarge.into());
        }

        let mut form = MultipartForm::new();
        for (name, value) in self.form_fields(token, user) {
            form.text(name, &value);
        }
        form.file(ATTACHMENT_PART_NAME, ATTACHMENT_PART_NAME, &data);

        let content_type = form.content_type();
        let body = form.finish();
        debug!(
            attachment_bytes = data.len(),
            body_bytes = body.len(),
            "built multipart request"
        );

        Ok(Request {
            url: url.to_string(),
            content_type,
            body,
        })
    }

    /// Builds a URL-encoded request carrying the message fields.
    ///
    /// Any attachment is ignored and left in place.
    pub fn url_encoded_request(&self, token: &str, user: &str, url: &str) -> Request {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.form_fields(token, user) {
            serializer.append_pair(name, &value);
        }
        let body = serializer.finish().into_bytes();
        debug!(body_bytes = body.len(), "built url-encoded request");

        Request {
            url: url.to_string(),
            content_type: URL_ENCODED_CONTENT_TYPE.to_string(),
            body,
        }
    }

    /// Form fields in wire order. Unset optional fields are left out.
    pub fn form_fields(&self, token: &str, user: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("token", token.to_string()),
            ("user", user.to_string()),
            ("message", self.message.clone()),
            ("priority", self.priority.to_string()),
        ];

        let optional_text = [
            ("title", &self.title),
            ("device", &self.device_name),
            ("url", &self.url),
            ("url_title", &self.url_title),
        ];
        for (name, value) in optional_text {
            if !value.is_empty() {
                fields.push((name, value.clone()));
            }
        }

        if self.expire.as_secs() > 0 {
            fields.push(("expire", self.expire.as_secs().to_string()));
        }
        if self.retry.as_secs() > 0 {
            fields.push(("retry", self.retry.as_secs().to_string()));
        }
        if let Some(timestamp) = self.timestamp {
            fields.push(("timestamp", timestamp.to_string()));
        }
        if !self.sound.is_empty() {
            fields.push(("sound", self.sound.clone()));
        }
        if self.html {
            fields.push(("html", "1".to_string()));
        }
        if !self.callback_url.is_empty() {
            fields.push(("callback", self.callback_url.clone()));
        }

        fields
    }
}
