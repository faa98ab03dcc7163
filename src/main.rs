#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use audio_player_app::{PlayerApp, PlayerConfig};

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlayerConfig::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Audio Player App")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height]),
        ..Default::default()
    };
    eframe::run_native(
        "Audio Player App",
        native_options,
        Box::new(|cc| Ok(Box::new(PlayerApp::new(cc, config)))),
    )
}
