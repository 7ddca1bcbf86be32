//! Conversation Session
//!
//! Owns the relay connection and drives selection, history sync, live
//! message routing and the outbox over it. `pump` is called once per UI
//! frame and drains every channel non-blockingly.

use super::state::ChatState;
use crate::app::config::Config;
use crate::app::cue::NotificationCue;
use crate::app::relay::{RelayConnection, RelayHandle};
use crate::app::roster::{self, RosterResult};
use crate::shared::frame::{ClientFrame, ServerFrame};
use crate::shared::message::ChatMessage;
use crate::shared::user::UserProfile;
use std::sync::mpsc::{Receiver, TryRecvError};

pub struct ChatSession {
    relay: RelayConnection,
    handle: RelayHandle,
    cue: Box<dyn NotificationCue>,
    pub state: ChatState,
    pending_roster: Option<Receiver<RosterResult>>,
}

impl ChatSession {
    pub fn new(
        relay: RelayConnection,
        current_user: UserProfile,
        cue: Box<dyn NotificationCue>,
    ) -> Self {
        let handle = relay.handle();
        Self {
            relay,
            handle,
            cue,
            state: ChatState::new(current_user),
            pending_roster: None,
        }
    }

    /// Kick off the once-per-mount roster fetch.
    pub fn load_roster(&mut self, config: &Config) {
        self.state.is_loading_roster = true;
        self.pending_roster = Some(roster::spawn_fetch(config));
    }

    /// Select a conversation partner, or `None` to return to the roster.
    ///
    /// The handoff is one synchronous operation: the previous window's
    /// log and history token die before the new request goes out, so
    /// nothing from the old conversation can land in the new log.
    pub fn select_partner(&mut self, partner: Option<UserProfile>) {
        let Some(token) = self.state.begin_selection(partner) else {
            return;
        };
        let Some(partner) = self.state.selected.clone() else {
            return;
        };
        tracing::info!(partner = %partner.id, "conversation selected");

        let frame = ClientFrame::GetHistory {
            sender_id: self.state.current_user.id.clone(),
            receiver_id: partner.id,
            request_id: token,
        };
        if let Err(e) = self.handle.emit(frame) {
            tracing::error!("history request failed: {}", e);
            self.state.is_loading_history = false;
            self.state.ui_error = Some("Connection closed; history unavailable".to_string());
        }
    }

    /// Send the current draft to the active partner.
    ///
    /// A whitespace-only draft or a missing selection is a no-op. The
    /// message lands in the visible log before the relay hears about it.
    pub fn send_draft(&mut self) {
        let text = self.state.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(partner) = self.state.selected.clone() else {
            return;
        };

        let message = ChatMessage::new_text(&self.state.current_user.id, &partner.id, text);
        self.state.append_outbound(message.clone());
        self.state.draft.clear();

        let frame = ClientFrame::SendMessage {
            message: message.clone(),
        };
        if let Err(e) = self.handle.emit(frame) {
            tracing::warn!("send failed: {}", e);
            self.state.mark_failed(message.id);
            self.state.ui_error = Some("Message not sent: connection closed".to_string());
        }
    }

    /// Poll every channel once. Call each UI frame.
    pub fn pump(&mut self) {
        self.poll_roster();

        while let Some(status) = self.relay.poll_status() {
            if self.state.link_status.as_ref() != Some(&status) {
                tracing::info!(status = ?status, "relay link status");
            }
            self.state.link_status = Some(status);
        }

        for frame in self.relay.poll_frames() {
            self.dispatch(frame);
        }
    }

    fn poll_roster(&mut self) {
        let Some(rx) = &self.pending_roster else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(users)) => {
                self.state.is_loading_roster = false;
                self.state.set_roster(users);
                self.pending_roster = None;
            }
            Ok(Err(e)) => {
                self.state.is_loading_roster = false;
                self.state.ui_error = Some(format!("Failed to load users: {}", e));
                self.pending_roster = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.state.is_loading_roster = false;
                self.pending_roster = None;
            }
        }
    }

    fn dispatch(&mut self, frame: ServerFrame) {
        match frame {
            ServerFrame::Message { message } => {
                if self.state.apply_push(message) {
                    self.cue.message_received();
                }
            }
            ServerFrame::HistoryBatch {
                request_id,
                messages,
            } => {
                if !self.state.apply_history(request_id, messages) {
                    tracing::debug!(request_id, "discarding stale history batch");
                }
            }
            ServerFrame::MessageAck { message_id } => {
                self.state.acknowledge(message_id);
            }
        }
    }
}
