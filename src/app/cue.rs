//! Notification cue fired when a live message arrives.

use crate::app::config::Config;
use std::io::Write;

/// Something that can signal "a new message came in".
pub trait NotificationCue: Send {
    fn message_received(&mut self);
}

/// Rings the terminal bell.
pub struct TerminalBell;

impl NotificationCue for TerminalBell {
    fn message_received(&mut self) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Swallows cues when silent mode is on.
pub struct Silent;

impl NotificationCue for Silent {
    fn message_received(&mut self) {}
}

/// Pick the cue the configuration asks for.
pub fn from_config(config: &Config) -> Box<dyn NotificationCue> {
    if config.silent() {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell)
    }
}
