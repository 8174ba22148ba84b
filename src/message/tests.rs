use std::io::{Cursor, Read};
use std::time::Duration;

use super::{
    MESSAGE_MAX_LENGTH, MESSAGE_TITLE_MAX_LENGTH, MESSAGE_URL_MAX_LENGTH,
    MESSAGE_URL_TITLE_MAX_LENGTH, Message, Priority,
};
use crate::utils::error::MessageError;

fn text_of_len(len: usize) -> String {
    "x".repeat(len)
}

fn body(text: &str) -> Message {
    Message::new(text)
}

#[test]
fn test_valid_message() {
    let msg = Message {
        message: "Hello world !".to_string(),
        title: "Example".to_string(),
        device_name: "My_Device".to_string(),
        url: "http://example.com".to_string(),
        url_title: "Go check this URL".to_string(),
        priority: Priority::NORMAL,
        ..Message::default()
    };
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_empty_message() {
    assert_eq!(Message::default().validate(), Err(MessageError::Empty));
}

#[test]
fn test_message_at_max_length() {
    let msg = body(&text_of_len(MESSAGE_MAX_LENGTH));
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_message_too_long() {
    let msg = body(&text_of_len(MESSAGE_MAX_LENGTH + 1));
    assert_eq!(msg.validate(), Err(MessageError::TooLong));
}

#[test]
fn test_message_length_counts_characters() {
    // 1024 two-byte characters is 2048 bytes but still within the limit
    let msg = body(&"é".repeat(MESSAGE_MAX_LENGTH));
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_title_length() {
    let mut msg = body("fake message");
    msg.title = text_of_len(MESSAGE_TITLE_MAX_LENGTH);
    assert_eq!(msg.validate(), Ok(()));

    msg.title = text_of_len(MESSAGE_TITLE_MAX_LENGTH + 1);
    assert_eq!(msg.validate(), Err(MessageError::TitleTooLong));
}

#[test]
fn test_url_length() {
    let mut msg = body("fake message");
    msg.url = text_of_len(MESSAGE_URL_MAX_LENGTH);
    assert_eq!(msg.validate(), Ok(()));

    msg.url = text_of_len(MESSAGE_URL_MAX_LENGTH + 1);
    assert_eq!(msg.validate(), Err(MessageError::UrlTooLong));
}

#[test]
fn test_url_title_length() {
    let mut msg = body("Test message");
    msg.url = "http://example.com".to_string();
    msg.url_title = text_of_len(MESSAGE_URL_TITLE_MAX_LENGTH);
    assert_eq!(msg.validate(), Ok(()));

    msg.url_title = text_of_len(MESSAGE_URL_TITLE_MAX_LENGTH + 1);
    assert_eq!(msg.validate(), Err(MessageError::UrlTitleTooLong));
}

#[test]
fn test_url_title_without_url() {
    let mut msg = body("Test message");
    msg.url_title = "URL Title".to_string();
    assert_eq!(msg.validate(), Err(MessageError::EmptyUrl));

    msg.url = "http://example.com".to_string();
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_emergency_priority_without_parameters() {
    let mut msg = body("Test message");
    msg.priority = Priority::EMERGENCY;
    assert_eq!(msg.validate(), Err(MessageError::MissingEmergencyParameter));

    msg.expire = Duration::from_secs(3600);
    assert_eq!(msg.validate(), Err(MessageError::MissingEmergencyParameter));

    msg.expire = Duration::ZERO;
    msg.retry = Duration::from_secs(60);
    assert_eq!(msg.validate(), Err(MessageError::MissingEmergencyParameter));
}

#[test]
fn test_emergency_priority_with_parameters() {
    let mut msg = body("Test message");
    msg.priority = Priority::EMERGENCY;
    msg.expire = Duration::from_secs(3600);
    msg.retry = Duration::from_secs(60);
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_invalid_priority() {
    let mut msg = body("Test message");
    msg.priority = Priority(6);
    assert_eq!(msg.validate(), Err(MessageError::InvalidPriority));

    msg.priority = Priority(-3);
    assert_eq!(msg.validate(), Err(MessageError::InvalidPriority));
}

#[test]
fn test_all_named_priorities_are_valid() {
    for priority in [
        Priority::LOWEST,
        Priority::LOW,
        Priority::NORMAL,
        Priority::HIGH,
    ] {
        let mut msg = body("Test message");
        msg.priority = priority;
        assert_eq!(msg.validate(), Ok(()), "priority {priority}");
    }
}

#[test]
fn test_device_names() {
    let cases = [
        ("yo_mama", Ok(())),
        ("droid-2", Ok(())),
        ("fasdfafdadfasdfa", Ok(())),
        ("abcdefghijklmnopqrstuvwxy", Ok(())),
        ("yo&mama", Err(MessageError::InvalidDeviceName)),
        ("my^device", Err(MessageError::InvalidDeviceName)),
        ("my device", Err(MessageError::InvalidDeviceName)),
        (
            "d34342fasdfasdfasdfasdfasdfasd",
            Err(MessageError::InvalidDeviceName),
        ),
    ];

    for (device, expected) in cases {
        let mut msg = body("Test message");
        msg.device_name = device.to_string();
        assert_eq!(msg.validate(), expected, "device name {device:?}");
    }
}

#[test]
fn test_first_failure_wins() {
    let msg = Message {
        message: text_of_len(MESSAGE_MAX_LENGTH + 1),
        title: text_of_len(MESSAGE_TITLE_MAX_LENGTH + 1),
        url_title: "orphan".to_string(),
        priority: Priority(9),
        ..Message::default()
    };
    assert_eq!(msg.validate(), Err(MessageError::TooLong));

    // device name is checked before priority
    let msg = Message {
        message: "Test message".to_string(),
        device_name: "bad device".to_string(),
        priority: Priority(9),
        ..Message::default()
    };
    assert_eq!(msg.validate(), Err(MessageError::InvalidDeviceName));
}

#[test]
fn test_with_title() {
    let msg = Message::with_title("World", "Hello");
    assert_eq!(msg.message, "World");
    assert_eq!(msg.title, "Hello");
    assert_eq!(msg.priority, Priority::NORMAL);
    assert!(msg.device_name.is_empty());
    assert!(msg.url.is_empty());
    assert!(msg.expire.is_zero());
    assert!(!msg.has_attachment());
}

#[test]
fn test_add_attachment_replaces_previous() {
    let mut msg = Message::new("with picture");
    msg.add_attachment(Cursor::new(vec![1u8; 4]));
    msg.add_attachment(Cursor::new(vec![2u8; 8]));
    assert!(msg.has_attachment());

    let mut attachment = msg.take_attachment().unwrap();
    let mut data = Vec::new();
    attachment.read_to_end(&mut data).unwrap();
    assert_eq!(data, vec![2u8; 8]);
    assert!(!msg.has_attachment());
}

#[test]
fn test_priority_display() {
    assert_eq!(Priority::LOWEST.to_string(), "-2");
    assert_eq!(Priority::EMERGENCY.to_string(), "2");
    assert_eq!(Priority::from(1), Priority::HIGH);
}

#[test]
fn test_emergency_priority_with_sub_second_parameters() {
    // sent as whole seconds, so 500ms would reach the API as 0
    let mut msg = body("Test message");
    msg.priority = Priority::EMERGENCY;
    msg.expire = Duration::from_millis(500);
    msg.retry = Duration::from_millis(900);
    assert_eq!(msg.validate(), Err(MessageError::MissingEmergencyParameter));

    msg.expire = Duration::from_millis(1500);
    msg.retry = Duration::from_secs(30);
    assert_eq!(msg.validate(), Ok(()));
}

#[test]
fn test_message_with_all_fields_via_setters() {
    let mut msg = Message::new("Reactor temperature critical");
    msg.title = "Plant 3".to_string();
    msg.device_name = "pager-1".to_string();
    msg.url = "https://status.example.com".to_string();
    msg.url_title = "Status page".to_string();
    msg.priority = Priority::EMERGENCY;
    msg.expire = Duration::from_secs(3600);
    msg.retry = Duration::from_secs(60);
    msg.sound = "siren".to_string();
    assert_eq!(msg.validate(), Ok(()));
}
