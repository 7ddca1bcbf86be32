//! Roster Sidebar
//!
//! Lists the reachable users; clicking one makes it the active
//! conversation.

use crate::app::chat::ChatSession;
use crate::shared::user::UserProfile;
use eframe::egui;

pub fn render(ui: &mut egui::Ui, session: &mut ChatSession) {
    ui.heading("Messages");
    if let Some(status) = &session.state.link_status {
        ui.label(egui::RichText::new(status.label()).small().weak());
    }
    ui.separator();

    if session.state.is_loading_roster {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading users...");
        });
        return;
    }

    if session.state.roster.is_empty() {
        ui.label(egui::RichText::new("No one to talk to yet").weak());
        return;
    }

    let mut clicked: Option<UserProfile> = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for user in &session.state.roster {
            let selected = session
                .state
                .selected
                .as_ref()
                .map(|p| p.id == user.id)
                .unwrap_or(false);
            let label = format!("{}  {}", user.avatar_initial(), user.display_name);
            if ui.selectable_label(selected, label).clicked() && !selected {
                clicked = Some(user.clone());
            }
        }
    });

    if let Some(user) = clicked {
        session.select_partner(Some(user));
    }
}
