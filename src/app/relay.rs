//! Relay Connection Management
//!
//! One long-lived WebSocket to the message relay for the life of the
//! process. The I/O loop runs on its own thread with its own Tokio
//! runtime and bridges to the single-threaded UI over channels: inbound
//! frames and link status are polled non-blockingly each frame, outbound
//! frames are queued through a cloneable [`RelayHandle`].
//!
//! The loop reconnects on its own with exponential backoff; the polling
//! side stays untouched across reconnects. Frames queued while the link
//! is down are flushed after it comes back.

use crate::shared::error::ClientError;
use crate::shared::frame::{ClientFrame, ServerFrame};
use futures_util::{SinkExt, StreamExt};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

const INITIAL_RECONNECT_DELAY: Duration = Duration::from_millis(1000);
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(30);

/// Link state reported by the I/O loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

impl LinkStatus {
    /// Short label for the status line.
    pub fn label(&self) -> &str {
        match self {
            LinkStatus::Connecting => "Connecting…",
            LinkStatus::Connected => "Connected",
            LinkStatus::Retrying => "Reconnecting…",
            LinkStatus::Error(_) => "Connection error",
            LinkStatus::Disconnected => "Disconnected",
        }
    }
}

/// Cloneable sender half for outbound frames.
#[derive(Debug, Clone)]
pub struct RelayHandle {
    out_tx: UnboundedSender<ClientFrame>,
}

impl RelayHandle {
    /// Queue a frame for the relay.
    ///
    /// Fails only once the connection has been torn down; while the link
    /// is merely down the frame waits for the reconnect.
    pub fn emit(&self, frame: ClientFrame) -> Result<(), ClientError> {
        self.out_tx.send(frame).map_err(|_| ClientError::RelayClosed)
    }
}

/// The single process-wide channel to the relay.
///
/// Constructed once at startup and passed by handle to whatever needs
/// it; dropped only on session teardown.
pub struct RelayConnection {
    handle: RelayHandle,
    frame_rx: Receiver<ServerFrame>,
    status_rx: Receiver<LinkStatus>,
    #[allow(dead_code)]
    io_thread: Option<thread::JoinHandle<()>>,
}

impl RelayConnection {
    /// Open the connection and start the I/O loop.
    pub fn open(relay_url: impl Into<String>) -> Self {
        let relay_url = relay_url.into();
        let (out_tx, out_rx) = unbounded_channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();

        let io_thread = thread::spawn(move || run_io(relay_url, out_rx, frame_tx, status_tx));

        Self {
            handle: RelayHandle { out_tx },
            frame_rx,
            status_rx,
            io_thread: Some(io_thread),
        }
    }

    /// Build a connection wired to in-process channels instead of a
    /// socket. The returned [`RelayPeer`] plays the relay side; used by
    /// tests and harnesses.
    pub fn detached() -> (Self, RelayPeer) {
        let (out_tx, out_rx) = unbounded_channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();

        let connection = Self {
            handle: RelayHandle { out_tx },
            frame_rx,
            status_rx,
            io_thread: None,
        };
        let peer = RelayPeer {
            out_rx,
            frame_tx,
            status_tx,
        };
        (connection, peer)
    }

    pub fn handle(&self) -> RelayHandle {
        self.handle.clone()
    }

    /// Drain inbound frames (non-blocking).
    pub fn poll_frames(&self) -> Vec<ServerFrame> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.frame_rx.try_recv() {
            frames.push(frame);
        }
        frames
    }

    /// Next link status update, if any (non-blocking).
    pub fn poll_status(&self) -> Option<LinkStatus> {
        self.status_rx.try_recv().ok()
    }
}

/// The relay side of a detached connection.
pub struct RelayPeer {
    out_rx: UnboundedReceiver<ClientFrame>,
    frame_tx: Sender<ServerFrame>,
    status_tx: Sender<LinkStatus>,
}

impl RelayPeer {
    /// Frames the client has emitted so far.
    pub fn drain_outbound(&mut self) -> Vec<ClientFrame> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.out_rx.try_recv() {
            frames.push(frame);
        }
        frames
    }

    /// Push a frame to the client.
    pub fn push(&self, frame: ServerFrame) {
        let _ = self.frame_tx.send(frame);
    }

    /// Report a link status change to the client.
    pub fn set_status(&self, status: LinkStatus) {
        let _ = self.status_tx.send(status);
    }
}

/// The connect-and-pump loop. Exits when the UI side is gone.
fn run_io(
    url: String,
    mut out_rx: UnboundedReceiver<ClientFrame>,
    frame_tx: Sender<ServerFrame>,
    status_tx: Sender<LinkStatus>,
) {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to create relay runtime: {}", e);
            return;
        }
    };

    rt.block_on(async move {
        let mut reconnect_delay = INITIAL_RECONNECT_DELAY;

        loop {
            let _ = status_tx.send(LinkStatus::Connecting);
            let ws = match connect_async(url.as_str()).await {
                Ok((ws, _)) => ws,
                Err(e) => {
                    tracing::warn!("relay connect failed (will retry): {}", e);
                    let _ = status_tx.send(LinkStatus::Error(format!("connect: {}", e)));
                    let _ = status_tx.send(LinkStatus::Retrying);
                    tokio::time::sleep(reconnect_delay).await;
                    reconnect_delay = (reconnect_delay * 2).min(MAX_RECONNECT_DELAY);
                    continue;
                }
            };

            tracing::info!("relay connected: {}", url);
            let _ = status_tx.send(LinkStatus::Connected);
            reconnect_delay = INITIAL_RECONNECT_DELAY;

            let (mut write, mut read) = ws.split();
            let mut ui_gone = false;

            loop {
                tokio::select! {
                    outbound = out_rx.recv() => match outbound {
                        Some(frame) => {
                            let json = match serde_json::to_string(&frame) {
                                Ok(json) => json,
                                Err(e) => {
                                    tracing::error!("dropping unserializable frame: {}", e);
                                    continue;
                                }
                            };
                            if let Err(e) = write.send(Message::Text(json.into())).await {
                                tracing::warn!("relay send failed: {}", e);
                                break;
                            }
                        }
                        // Every handle dropped: session teardown.
                        None => {
                            ui_gone = true;
                            break;
                        }
                    },
                    inbound = read.next() => match inbound {
                        Some(Ok(Message::Text(txt))) => {
                            match serde_json::from_str::<ServerFrame>(txt.as_str()) {
                                Ok(frame) => {
                                    if frame_tx.send(frame).is_err() {
                                        ui_gone = true;
                                        break;
                                    }
                                }
                                Err(e) => {
                                    tracing::warn!("unparseable relay frame: {}", e);
                                }
                            }
                        }
                        Some(Ok(Message::Ping(payload))) => {
                            if write.send(Message::Pong(payload)).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            tracing::warn!("relay stream closed");
                            break;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!("relay read error: {}", e);
                            break;
                        }
                    },
                }
            }

            if ui_gone {
                let _ = status_tx.send(LinkStatus::Disconnected);
                return;
            }

            let _ = status_tx.send(LinkStatus::Retrying);
            tokio::time::sleep(reconnect_delay).await;
            reconnect_delay = (reconnect_delay * 2).min(MAX_RECONNECT_DELAY);
        }
    });
}
