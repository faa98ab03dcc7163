// UI component modules
mod player_panel;
mod toast_message;
mod top_panel;
mod window_size_dialog;

pub use player_panel::{PanelAction, PanelView, PlayerPanel};
pub use toast_message::{Notice, Toasts};
pub use top_panel::{MenuAction, TopPanel};
pub use window_size_dialog::WindowSizeDialog;
