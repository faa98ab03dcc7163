#![warn(clippy::all, rust_2018_idioms)]

//! Desktop audio player: pick a local file, then play, pause or stop it.

mod app;
pub mod config;
pub mod error;
pub mod player;
mod ui;

pub use app::PlayerApp;
pub use config::PlayerConfig;
