//! Native desktop entry point.

use eframe::egui;
use murmur::app::chat::ChatSession;
use murmur::app::config::Config;
use murmur::app::relay::RelayConnection;
use murmur::app::{cue, identity, views};

fn main() -> Result<(), eframe::Error> {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,murmur=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load();
    let current_user = match identity::current_user(&config) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("no identity configured: {}", e);
            eprintln!(
                "murmur: set MURMUR_USER_ID (and optionally MURMUR_DISPLAY_NAME), \
                 or add user_id to the config file"
            );
            std::process::exit(2);
        }
    };
    tracing::info!(user = %current_user.id, relay = %config.relay_url(), "starting");

    let relay = RelayConnection::open(config.relay_url());
    let mut session = ChatSession::new(relay, current_user, cue::from_config(&config));
    session.load_roster(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Murmur",
        options,
        Box::new(move |_cc| Ok(Box::new(MurmurApp { session }))),
    )
}

/// Main application state
struct MurmurApp {
    session: ChatSession,
}

impl eframe::App for MurmurApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.pump();
        views::render(ctx, &mut self.session);
        ctx.request_repaint();
    }
}
