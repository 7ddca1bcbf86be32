//! Desktop client application modules.

pub mod chat;
pub mod config;
pub mod cue;
pub mod identity;
pub mod relay;
pub mod roster;
pub mod views;
