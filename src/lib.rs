//! # Pushover
//!
//! `pushover` is a small client library for the Pushover notification API.
//! It composes messages, checks them against the limits the service documents,
//! and turns them into ready-to-send request bodies.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `message`: The `Message` value object, priorities, field limits and validation.
//! - `request`: Multipart and URL-encoded request body construction.
//! - `client`: A thin async sender and the decoding of API replies.
//! - `config`: Handles loading and managing client configuration.
//! - `utils`: Contains shared utilities, such as error handling and logging.
//!
//! ## Example
//!
//! ```rust
//! use pushover::{Message, Priority};
//!
//! let mut message = Message::with_title("Disk almost full", "host-01");
//! message.priority = Priority::HIGH;
//! assert!(message.validate().is_ok());
//!
//! message.add_attachment(std::io::Cursor::new(vec![0u8; 16]));
//! let request = message
//!     .multipart_request("app-token", "user-key", "https://api.pushover.net/1/messages.json")
//!     .unwrap();
//! assert!(request.content_type.starts_with("multipart/form-data"));
//! ```

pub mod client;
pub mod config;
pub mod message;
pub mod request;
pub mod utils;

pub use client::{Pushover, Response};
pub use message::{Message, Priority};
pub use request::Request;
pub use utils::error::{Error, Errors, MessageError};
