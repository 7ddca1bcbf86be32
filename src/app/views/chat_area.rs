//! Chat Area
//!
//! Header with back navigation, the bubble list, and the composer.

use crate::app::chat::{ChatSession, LogEntry, MessageStatus};
use chrono::{DateTime, Local};
use eframe::egui;

const BUBBLE_OUTGOING: egui::Color32 = egui::Color32::from_rgb(208, 230, 255);
const BUBBLE_INCOMING: egui::Color32 = egui::Color32::from_rgb(236, 236, 236);

pub fn render(ui: &mut egui::Ui, session: &mut ChatSession) {
    if let Some(err) = session.state.ui_error.take() {
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(255, 238, 238))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(200, 80, 80)))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.colored_label(egui::Color32::from_rgb(160, 20, 20), err);
            });
        ui.add_space(6.0);
    }

    let Some(partner) = session.state.selected.clone() else {
        render_empty_state(ui);
        return;
    };

    let mut go_back = false;
    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            go_back = true;
        }
        ui.heading(&partner.display_name);
    });
    if go_back {
        session.select_partner(None);
        return;
    }
    ui.separator();

    let composer_height = 48.0;
    let list_height = (ui.available_height() - composer_height).max(0.0);
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), list_height),
        egui::Layout::top_down(egui::Align::LEFT),
        |ui| {
            if session.state.is_loading_history {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading history...");
                });
            }
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &session.state.log {
                        render_bubble(ui, entry, &session.state.current_user.id);
                    }
                });
        },
    );

    render_composer(ui, session);
}

fn render_empty_state(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new("Pick someone to start a conversation").weak());
    });
}

fn render_bubble(ui: &mut egui::Ui, entry: &LogEntry, current_user_id: &str) {
    let own = entry.message.sender_id == current_user_id;
    let align = if own {
        egui::Align::RIGHT
    } else {
        egui::Align::LEFT
    };
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::new()
            .fill(if own { BUBBLE_OUTGOING } else { BUBBLE_INCOMING })
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.label(&entry.message.text);
                let meta = format!(
                    "{} {}",
                    local_time(&entry.message.timestamp),
                    status_glyph(entry.status)
                );
                ui.label(egui::RichText::new(meta.trim_end()).small().weak());
            });
    });
    ui.add_space(4.0);
}

fn render_composer(ui: &mut egui::Ui, session: &mut ChatSession) {
    ui.separator();
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut session.state.draft)
                .hint_text("Type a message")
                .desired_width(ui.available_width() - 64.0),
        );

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let mut send = response.lost_focus() && enter_pressed;

        let send_enabled = !session.state.draft.trim().is_empty();
        ui.add_enabled_ui(send_enabled, |ui| {
            if ui.button("Send").clicked() {
                send = true;
            }
        });

        if send {
            session.send_draft();
            response.request_focus();
        }
    });
}

fn status_glyph(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Received => "",
        MessageStatus::Pending => "…",
        MessageStatus::Sent => "✓",
        MessageStatus::Failed => "✗",
    }
}

fn local_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
