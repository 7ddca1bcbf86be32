//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use murmur::app::chat::ChatSession;
use murmur::app::cue::NotificationCue;
use murmur::app::relay::{RelayConnection, RelayPeer};
use murmur::shared::user::UserProfile;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cue that counts invocations instead of making noise.
#[derive(Clone, Default)]
pub struct RecordingCue {
    count: Arc<AtomicUsize>,
}

impl RecordingCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl NotificationCue for RecordingCue {
    fn message_received(&mut self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn profile(id: &str, name: &str) -> UserProfile {
    UserProfile::new(id, name)
}

/// A session for user `u1` talking to an in-process relay peer.
pub fn session_with_peer() -> (ChatSession, RelayPeer, RecordingCue) {
    let (relay, peer) = RelayConnection::detached();
    let cue = RecordingCue::new();
    let session = ChatSession::new(relay, profile("u1", "Alice"), Box::new(cue.clone()));
    (session, peer, cue)
}

/// Texts currently in the visible log, in order.
pub fn log_texts(session: &ChatSession) -> Vec<String> {
    session
        .state
        .log
        .iter()
        .map(|entry| entry.message.text.clone())
        .collect()
}
