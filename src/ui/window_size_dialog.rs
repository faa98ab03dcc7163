use egui::{Button, Color32, Context, DragValue, RichText, Window};

use crate::config::WindowConfig;

/// Largest size the dialog will request
const MAX_SIDE: f32 = 3840.0;

/// Settings dialog for resizing the main window
pub struct WindowSizeDialog {
    pub open: bool,
    width: f32,
    height: f32,
    min_width: f32,
    min_height: f32,
}

impl WindowSizeDialog {
    pub fn new(window: &WindowConfig) -> Self {
        Self {
            open: false,
            width: window.width,
            height: window.height,
            min_width: window.min_width,
            min_height: window.min_height,
        }
    }

    /// Open the dialog, prefilled with the current inner size
    pub fn open(&mut self, current: egui::Vec2) {
        self.width = current.x.max(self.min_width);
        self.height = current.y.max(self.min_height);
        self.open = true;
    }

    /// Requested size, kept inside the allowed range
    pub fn requested_size(&self) -> egui::Vec2 {
        egui::vec2(
            self.width.clamp(self.min_width, MAX_SIDE),
            self.height.clamp(self.min_height, MAX_SIDE),
        )
    }

    /// Show the dialog; returns the new size when the user applies it
    pub fn show(&mut self, ctx: &Context) -> Option<egui::Vec2> {
        if !self.open {
            return None;
        }

        let mut applied = None;
        let mut close = false;

        Window::new("Window size")
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("window_size_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Width");
                        ui.add(
                            DragValue::new(&mut self.width)
                                .range(self.min_width..=MAX_SIDE)
                                .suffix(" px"),
                        );
                        ui.end_row();

                        ui.label("Height");
                        ui.add(
                            DragValue::new(&mut self.height)
                                .range(self.min_height..=MAX_SIDE)
                                .suffix(" px"),
                        );
                        ui.end_row();
                    });

                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(
                                Button::new(RichText::new("Apply").color(Color32::WHITE))
                                    .fill(Color32::from_rgb(60, 120, 220)),
                            )
                            .clicked()
                        {
                            applied = Some(self.requested_size());
                            close = true;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            });

        if close {
            self.open = false;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_size_respects_limits() {
        let mut dialog = WindowSizeDialog::new(&WindowConfig::default());
        dialog.open(egui::vec2(10.0, 10_000.0));
        assert!(dialog.open);

        let size = dialog.requested_size();
        assert_eq!(size.x, WindowConfig::default().min_width);
        assert_eq!(size.y, MAX_SIDE);
    }
}
