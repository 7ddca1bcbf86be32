//! Chat Message Data Structures
//!
//! A direct message as carried on the wire and held in the local log, and
//! the key identifying the one-to-one conversation it belongs to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single direct message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Client-assigned unique id, used for deduplication on delivery
    pub id: Uuid,
    /// Sender's user id (opaque, owned by the user service)
    pub sender_id: String,
    /// Recipient's user id
    pub receiver_id: String,
    /// Message body
    pub text: String,
    /// When the message was composed (RFC 3339 string, unified across targets)
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a new outbound text message stamped with the current time.
    pub fn new_text(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The unordered pair of user ids identifying a one-to-one conversation.
///
/// At most one key is active at a time; the ids are normalized so the key
/// compares equal regardless of which side is "sender".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    lo: String,
    hi: String,
}

impl ConversationKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Whether a message travels between exactly this pair of users.
    pub fn covers(&self, message: &ChatMessage) -> bool {
        let (s, r) = (message.sender_id.as_str(), message.receiver_id.as_str());
        (s == self.lo && r == self.hi) || (s == self.hi && r == self.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: &str, receiver: &str) -> ChatMessage {
        ChatMessage::new_text(sender, receiver, "hi")
    }

    #[test]
    fn test_key_is_order_insensitive() {
        assert_eq!(
            ConversationKey::new("u1", "u2"),
            ConversationKey::new("u2", "u1")
        );
    }

    #[test]
    fn test_key_covers_both_directions() {
        let key = ConversationKey::new("u1", "u2");
        assert!(key.covers(&message("u1", "u2")));
        assert!(key.covers(&message("u2", "u1")));
    }

    #[test]
    fn test_key_rejects_foreign_traffic() {
        let key = ConversationKey::new("u1", "u2");
        assert!(!key.covers(&message("u1", "u3")));
        assert!(!key.covers(&message("u3", "u2")));
    }

    #[test]
    fn test_new_text_sets_parties_and_id() {
        let a = message("u1", "u2");
        let b = message("u1", "u2");
        assert_eq!(a.sender_id, "u1");
        assert_eq!(a.receiver_id, "u2");
        assert_ne!(a.id, b.id);
        assert!(chrono::DateTime::parse_from_rfc3339(&a.timestamp).is_ok());
    }
}
