//! Othello GUI
//!
//! A graphical interface for playing Othello against the computer or another player.

use othello::ui::OthelloApp;
use othello::Settings;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, settings)))),
    )
}
