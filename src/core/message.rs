//! Message values passed to handlers
//!
//! A log call carries an ordered list of loosely-typed values, much like the
//! variadic arguments of a console call.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Message {
    /// The string payload, if this is a string message
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Message::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::String(s) => write!(f, "{}", s),
            Message::Int(i) => write!(f, "{}", i),
            Message::Float(fl) => write!(f, "{}", fl),
            Message::Bool(b) => write!(f, "{}", b),
            Message::Null => write!(f, "null"),
        }
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::String(s)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::String(s.to_string())
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Message::String(s.clone())
    }
}

impl From<i64> for Message {
    fn from(i: i64) -> Self {
        Message::Int(i)
    }
}

impl From<i32> for Message {
    fn from(i: i32) -> Self {
        Message::Int(i as i64)
    }
}

impl From<u32> for Message {
    fn from(i: u32) -> Self {
        Message::Int(i as i64)
    }
}

impl From<usize> for Message {
    fn from(i: usize) -> Self {
        Message::Int(i as i64)
    }
}

impl From<f64> for Message {
    fn from(f: f64) -> Self {
        Message::Float(f)
    }
}

impl From<bool> for Message {
    fn from(b: bool) -> Self {
        Message::Bool(b)
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Message::Null)
    }
}

/// Join messages with single spaces, the way a console prints its arguments
pub fn join_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Message::from("hi").to_string(), "hi");
        assert_eq!(Message::from(42).to_string(), "42");
        assert_eq!(Message::from(1.5).to_string(), "1.5");
        assert_eq!(Message::from(true).to_string(), "true");
        assert_eq!(Message::Null.to_string(), "null");
        assert_eq!(Message::from(None::<i32>), Message::Null);
    }

    #[test]
    fn test_join_messages() {
        let messages = vec![Message::from("[app]"), Message::from("count"), Message::from(3)];
        assert_eq!(join_messages(&messages), "[app] count 3");
        assert_eq!(join_messages(&[]), "");
    }

    #[test]
    fn test_untagged_serde() {
        let messages: Vec<Message> =
            serde_json::from_str(r#"["a", 1, 2.5, false, null]"#).unwrap();
        assert_eq!(
            messages,
            vec![
                Message::from("a"),
                Message::Int(1),
                Message::Float(2.5),
                Message::Bool(false),
                Message::Null
            ]
        );
    }
}
