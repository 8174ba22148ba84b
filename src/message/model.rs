use std::fmt;
use std::io::Read;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::message::priority::Priority;
use crate::utils::error::MessageError;

/// Maximum number of characters in a message body.
pub const MESSAGE_MAX_LENGTH: usize = 1024;
/// Maximum number of characters in a message title.
pub const MESSAGE_TITLE_MAX_LENGTH: usize = 250;
/// Maximum number of characters in a supplementary URL.
pub const MESSAGE_URL_MAX_LENGTH: usize = 512;
/// Maximum number of characters in a URL title.
pub const MESSAGE_URL_TITLE_MAX_LENGTH: usize = 100;
/// Maximum number of characters in a device name.
pub const DEVICE_NAME_MAX_LENGTH: usize = 25;
/// Maximum size of an attachment, in bytes.
pub const MESSAGE_MAX_ATTACHMENT_BYTES: u64 = 2_621_440;

static DEVICE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z0-9_-]{{1,{DEVICE_NAME_MAX_LENGTH}}}$"))
        .expect("hardcoded regex pattern is valid")
});

/// A notification to be delivered through the Pushover API.
///
/// Text fields left empty, durations under one second, a `None` timestamp and `html == false`
/// are treated as unset and are not sent.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pushover::{Message, Priority};
///
/// let mut msg = Message::new("Reactor temperature critical");
/// msg.priority = Priority::EMERGENCY;
/// msg.expire = Duration::from_secs(3600);
/// msg.retry = Duration::from_secs(60);
/// assert!(msg.validate().is_ok());
/// ```
#[derive(Default)]
pub struct Message {
    pub message: String,
    pub title: String,
    pub device_name: String,
    pub url: String,
    pub url_title: String,
    pub priority: Priority,
    /// How long an emergency message keeps being repeated.
    pub expire: Duration,
    /// Interval between two repetitions of an emergency message.
    pub retry: Duration,
    /// Unix timestamp displayed instead of the reception time.
    pub timestamp: Option<i64>,
    pub sound: String,
    pub html: bool,
    /// URL called back when an emergency message is acknowledged.
    pub callback_url: String,
    pub(crate) attachment: Option<Box<dyn Read + Send>>,
}

impl Message {
    /// Creates a message with only a body.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::default()
        }
    }

    /// Creates a message with a body and a title.
    pub fn with_title(message: &str, title: &str) -> Self {
        Self {
            message: message.to_string(),
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Attaches a binary payload, usually an image.
    ///
    /// The reader is only consumed when the message is serialized, which is
    /// also where its size is checked. Adding a second attachment replaces the first.
    pub fn add_attachment<R>(&mut self, attachment: R)
    where
        R: Read + Send + 'static,
    {
        self.attachment = Some(Box::new(attachment));
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    pub(crate) fn take_attachment(&mut self) -> Option<Box<dyn Read + Send>> {
        self.attachment.take()
    }

    /// Checks the message against the limits of the API.
    ///
    /// Rules are checked in a fixed order and the first one broken is returned.
    /// Attachments are not checked here, see
    /// [`multipart_request`](Message::multipart_request).
    pub fn validate(&self) -> Result<(), MessageError> {
        let result = self.check_fields();
        if let Err(err) = &result {
            debug!(error = %err, "message validation failed");
        }
        result
    }

    fn check_fields(&self) -> Result<(), MessageError> {
        if self.message.is_empty() {
            return Err(MessageError::Empty);
        }
        if exceeds(&self.message, MESSAGE_MAX_LENGTH) {
            return Err(MessageError::TooLong);
        }
        if exceeds(&self.title, MESSAGE_TITLE_MAX_LENGTH) {
            return Err(MessageError::TitleTooLong);
        }
        if exceeds(&self.url, MESSAGE_URL_MAX_LENGTH) {
            return Err(MessageError::UrlTooLong);
        }
        if exceeds(&self.url_title, MESSAGE_URL_TITLE_MAX_LENGTH) {
            return Err(MessageError::UrlTitleTooLong);
        }
        if self.url.is_empty() && !self.url_title.is_empty() {
            return Err(MessageError::EmptyUrl);
        }
        if !self.device_name.is_empty() && !DEVICE_NAME_REGEX.is_match(&self.device_name) {
            return Err(MessageError::InvalidDeviceName);
        }
        if !self.priority.is_valid() {
            return Err(MessageError::InvalidPriority);
        }
        // durations go out as whole seconds, anything below one second is unset
        if self.priority.is_emergency()
            && (self.expire.as_secs() == 0 || self.retry.as_secs() == 0)
        {
            return Err(MessageError::MissingEmergencyParameter);
        }
        Ok(())
    }
}

// Limits are expressed in characters, not bytes.
fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("device_name", &self.device_name)
            .field("url", &self.url)
            .field("url_title", &self.url_title)
            .field("priority", &self.priority)
            .field("expire", &self.expire)
            .field("retry", &self.retry)
            .field("timestamp", &self.timestamp)
            .field("sound", &self.sound)
            .field("html", &self.html)
            .field("callback_url", &self.callback_url)
            .field("attachment", &self.attachment.is_some())
            .finish()
    }
}
