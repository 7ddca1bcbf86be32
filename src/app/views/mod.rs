//! Presentation layer: roster sidebar and chat area.
//!
//! Renders core state only; every mutation goes back through
//! [`ChatSession`](crate::app::chat::ChatSession) methods.

pub mod chat_area;
pub mod sidebar;

use crate::app::chat::ChatSession;
use eframe::egui;

/// Sidebar width in pixels
const SIDEBAR_WIDTH: f32 = 240.0;

/// Render the whole chat surface.
pub fn render(ctx: &egui::Context, session: &mut ChatSession) {
    egui::SidePanel::left("roster")
        .resizable(false)
        .default_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            sidebar::render(ui, session);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        chat_area::render(ui, session);
    });
}
