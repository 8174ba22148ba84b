//! The `message` module defines the notification a caller composes and the
//! rules it must satisfy before it is sent.

pub mod model;
pub mod priority;

pub use model::{
    DEVICE_NAME_MAX_LENGTH, MESSAGE_MAX_ATTACHMENT_BYTES, MESSAGE_MAX_LENGTH,
    MESSAGE_TITLE_MAX_LENGTH, MESSAGE_URL_MAX_LENGTH, MESSAGE_URL_TITLE_MAX_LENGTH, Message,
};
pub use priority::Priority;

#[cfg(test)]
mod tests;
