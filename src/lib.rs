//! Murmur - Direct Messaging Client
//!
//! Murmur is the real-time direct-messaging side of a social-feed client:
//! a native desktop app that keeps one persistent connection to a message
//! relay, synchronizes per-conversation history on selection, routes live
//! pushes into the visible log, and sends composed messages
//! optimistically.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI or transport attachments
//!   - Wire frames, message and user structures, errors
//!   - Base configuration and its builder
//!
//! - **`app`** - The desktop client
//!   - `relay` - the long-lived WebSocket to the relay, with reconnect
//!   - `chat` - conversation state and the session driving it
//!   - `roster` - one-shot user list fetch from the REST services
//!   - `views` - egui presentation
//!   - `config` / `identity` / `cue` - runtime wiring
//!
//! # Architecture
//!
//! Everything user-visible runs on the UI thread. Network work lives on
//! worker threads (one for the relay I/O loop, short-lived ones for REST
//! fetches) and reports back over channels that the session drains once
//! per frame. There is no shared mutable state between threads, only
//! message passing.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, ClientError>`. No failure is
//! fatal: a lost fetch or dropped connection degrades to an empty or
//! stale view and is surfaced in the UI.

/// Shared types and data structures
pub mod shared;

/// Desktop client application
pub mod app;
