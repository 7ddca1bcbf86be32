//! Relay Wire Protocol
//!
//! JSON text frames exchanged with the message relay over the WebSocket.
//! Frames are externally tagged by `event`; payload fields ride alongside
//! the tag.

use super::message::ChatMessage;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Frames the client sends to the relay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientFrame {
    /// Request the full prior log for a conversation. The relay echoes
    /// `request_id` on the matching `history-batch`.
    GetHistory {
        sender_id: String,
        receiver_id: String,
        request_id: u64,
    },
    /// Push a composed message to the peer. Fire-and-forget; the relay
    /// may answer with `message-ack`.
    SendMessage { message: ChatMessage },
}

/// Frames the relay pushes to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ServerFrame {
    /// Unsolicited live message delivery.
    Message { message: ChatMessage },
    /// Response to `get-history`, echoing its request token.
    HistoryBatch {
        request_id: u64,
        messages: Vec<ChatMessage>,
    },
    /// Receipt for an accepted `send-message`.
    MessageAck { message_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_frame_tags() {
        let frame = ClientFrame::GetHistory {
            sender_id: "u1".to_string(),
            receiver_id: "u2".to_string(),
            request_id: 7,
        };
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["event"], "get-history");
        assert_eq!(value["sender_id"], "u1");
        assert_eq!(value["receiver_id"], "u2");
        assert_eq!(value["request_id"], 7);

        let frame = ClientFrame::SendMessage {
            message: ChatMessage::new_text("u1", "u2", "hello"),
        };
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["event"], "send-message");
        assert_eq!(value["message"]["text"], "hello");
    }

    #[test]
    fn test_server_frame_tags() {
        let push = serde_json::json!({
            "event": "message",
            "message": {
                "id": uuid::Uuid::new_v4(),
                "sender_id": "u2",
                "receiver_id": "u1",
                "text": "yo",
                "timestamp": "2026-01-01T00:00:00Z",
            },
        });
        let frame: ServerFrame = serde_json::from_value(push).unwrap();
        match frame {
            ServerFrame::Message { message } => assert_eq!(message.text, "yo"),
            other => panic!("expected Message, got {:?}", other),
        }

        let batch = serde_json::json!({
            "event": "history-batch",
            "request_id": 3,
            "messages": [],
        });
        let frame: ServerFrame = serde_json::from_value(batch).unwrap();
        match frame {
            ServerFrame::HistoryBatch {
                request_id,
                messages,
            } => {
                assert_eq!(request_id, 3);
                assert!(messages.is_empty());
            }
            other => panic!("expected HistoryBatch, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_roundtrip() {
        let frame = ServerFrame::MessageAck {
            message_id: Uuid::new_v4(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("message-ack"));
        let back: ServerFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }
}
