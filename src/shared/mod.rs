//! Types shared across the client: wire frames, domain data, errors,
//! and base configuration.

pub mod config;
pub mod error;
pub mod frame;
pub mod message;
pub mod user;

pub use error::ClientError;
pub use frame::{ClientFrame, ServerFrame};
pub use message::{ChatMessage, ConversationKey};
pub use user::{RosterResponse, UserProfile};
