use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency level of a message, sent to the API as a small integer.
///
/// This is a newtype rather than an enum so values received from outside the
/// crate (configuration, user input) can be held as-is and rejected by
/// [`Message::validate`](super::Message::validate) when out of range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(pub i8);

impl Priority {
    /// No notification at all, the message only shows up in the app.
    pub const LOWEST: Priority = Priority(-2);
    /// Quiet notification.
    pub const LOW: Priority = Priority(-1);
    pub const NORMAL: Priority = Priority(0);
    /// Bypasses the recipient's quiet hours.
    pub const HIGH: Priority = Priority(1);
    /// Repeats until acknowledged; needs `expire` and `retry`.
    pub const EMERGENCY: Priority = Priority(2);

    pub fn is_valid(self) -> bool {
        (Self::LOWEST..=Self::EMERGENCY).contains(&self)
    }

    pub fn is_emergency(self) -> bool {
        self == Self::EMERGENCY
    }
}

impl From<i8> for Priority {
    fn from(value: i8) -> Self {
        Priority(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
