use egui::Context;

/// Menu entry clicked this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Exit,
    WindowSize,
    About,
}

/// Top menu panel component
pub struct TopPanel;

impl TopPanel {
    /// Display the top menu panel
    pub fn show(ctx: &Context) -> Option<MenuAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open…").clicked() {
                        action = Some(MenuAction::Open);
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        action = Some(MenuAction::Exit);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Window size…").clicked() {
                        action = Some(MenuAction::WindowSize);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        action = Some(MenuAction::About);
                    }
                });
            });
        });

        action
    }

    /// About dialog; `open` is cleared when the user dismisses it
    pub fn show_about(ctx: &Context, open: &mut bool) {
        if !*open {
            return;
        }

        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Audio Player {}\n\nOpen a local audio file and play, pause or stop it.",
                    env!("CARGO_PKG_VERSION")
                ));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    *open = false;
                }
            });
    }
}
