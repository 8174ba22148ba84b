//! The `client` module sends messages to the API and decodes its replies.
//!
//! It is a thin layer over `reqwest`: validation and body construction live in
//! [`crate::message`] and [`crate::request`], this module only POSTs the result.

pub mod pushover_client;
pub mod response;

pub use pushover_client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, Pushover};
pub use response::Response;
