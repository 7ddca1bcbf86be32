//! Conversation State
//!
//! Roster, selection, and the active conversation's message log. All
//! mutation happens on the UI thread; replace-vs-append ordering is what
//! keeps the log consistent across selection changes.

use crate::app::relay::LinkStatus;
use crate::shared::message::{ChatMessage, ConversationKey};
use crate::shared::user::UserProfile;
use std::collections::HashSet;
use uuid::Uuid;

/// Delivery state of a log entry, from this client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Came in over the wire (live push or history).
    Received,
    /// Queued optimistically, not yet acknowledged by the relay.
    Pending,
    /// Acknowledged by the relay.
    Sent,
    /// Could not be handed to the relay.
    Failed,
}

/// One row of the visible message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: ChatMessage,
    pub status: MessageStatus,
}

/// State backing the chat UI.
pub struct ChatState {
    /// The signed-in user
    pub current_user: UserProfile,
    /// Reachable partners, current user excluded
    pub roster: Vec<UserProfile>,
    /// Active conversation partner; `None` shows the roster view
    pub selected: Option<UserProfile>,
    /// Message log for the active conversation, in arrival order
    pub log: Vec<LogEntry>,
    /// Message input text
    pub draft: String,
    pub is_loading_roster: bool,
    pub is_loading_history: bool,
    /// Latest relay link status
    pub link_status: Option<LinkStatus>,
    /// Transient UI error to show to the user
    pub ui_error: Option<String>,
    /// Ids already in the log; duplicate deliveries are dropped
    seen: HashSet<Uuid>,
    /// Token of the outstanding history request. Bumped on every
    /// selection change, so a late batch for a previous selection never
    /// matches.
    history_token: u64,
}

impl ChatState {
    pub fn new(current_user: UserProfile) -> Self {
        Self {
            current_user,
            roster: Vec::new(),
            selected: None,
            log: Vec::new(),
            draft: String::new(),
            is_loading_roster: false,
            is_loading_history: false,
            link_status: None,
            ui_error: None,
            seen: HashSet::new(),
            history_token: 0,
        }
    }

    /// The active conversation key, if a partner is selected.
    pub fn active_key(&self) -> Option<ConversationKey> {
        self.selected
            .as_ref()
            .map(|partner| ConversationKey::new(&self.current_user.id, &partner.id))
    }

    /// Store the roster, dropping the current identity if the server
    /// included it.
    pub fn set_roster(&mut self, users: Vec<UserProfile>) {
        let me = self.current_user.id.clone();
        self.roster = users.into_iter().filter(|u| u.id != me).collect();
    }

    /// Begin a new selection window: wipe the previous conversation's log
    /// and invalidate its outstanding history request. Returns the token
    /// for the new window's history request, if a partner was picked.
    pub(crate) fn begin_selection(&mut self, partner: Option<UserProfile>) -> Option<u64> {
        self.log.clear();
        self.seen.clear();
        self.history_token += 1;
        self.is_loading_history = partner.is_some();
        self.selected = partner;
        self.selected.as_ref().map(|_| self.history_token)
    }

    /// Replace the log with a history batch, provided the token still
    /// matches the active window.
    pub(crate) fn apply_history(&mut self, request_id: u64, messages: Vec<ChatMessage>) -> bool {
        if self.selected.is_none() || request_id != self.history_token {
            return false;
        }
        self.is_loading_history = false;
        self.seen = messages.iter().map(|m| m.id).collect();
        let me = self.current_user.id.clone();
        self.log = messages
            .into_iter()
            .map(|message| {
                let status = if message.sender_id == me {
                    MessageStatus::Sent
                } else {
                    MessageStatus::Received
                };
                LogEntry { message, status }
            })
            .collect();
        true
    }

    /// Append a live push if it belongs to the active conversation and
    /// has not been delivered before.
    pub(crate) fn apply_push(&mut self, message: ChatMessage) -> bool {
        let Some(key) = self.active_key() else {
            tracing::debug!("dropping push with no active conversation");
            return false;
        };
        if !key.covers(&message) {
            tracing::debug!(
                sender = %message.sender_id,
                receiver = %message.receiver_id,
                "dropping push outside the active conversation"
            );
            return false;
        }
        if !self.seen.insert(message.id) {
            tracing::debug!(id = %message.id, "dropping duplicate delivery");
            return false;
        }
        self.log.push(LogEntry {
            message,
            status: MessageStatus::Received,
        });
        true
    }

    /// Optimistically append an outbound message.
    pub(crate) fn append_outbound(&mut self, message: ChatMessage) {
        self.seen.insert(message.id);
        self.log.push(LogEntry {
            message,
            status: MessageStatus::Pending,
        });
    }

    /// Flip a pending entry on relay acknowledgment.
    pub(crate) fn acknowledge(&mut self, message_id: Uuid) {
        if let Some(entry) = self.log.iter_mut().find(|e| e.message.id == message_id) {
            if entry.status == MessageStatus::Pending {
                entry.status = MessageStatus::Sent;
            }
        }
    }

    /// Mark an outbound entry as undeliverable.
    pub(crate) fn mark_failed(&mut self, message_id: Uuid) {
        if let Some(entry) = self.log.iter_mut().find(|e| e.message.id == message_id) {
            entry.status = MessageStatus::Failed;
        }
    }
}
