use egui::{Button, Color32, CornerRadius, Frame, ProgressBar, RichText, Ui};
use egui_phosphor::regular;
use std::path::Path;

use crate::player::{PlaybackState, ProgressSample};

/// Button pressed in the player panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Play,
    Pause,
    Stop,
}

/// What the panel needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    pub file: Option<&'a Path>,
    pub state: PlaybackState,
    pub progress: ProgressSample,
}

impl PanelView<'_> {
    /// Transport buttons unlock once a file is selected
    pub fn controls_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn status_text(&self) -> &'static str {
        match self.state {
            PlaybackState::Empty => "No audio file loaded",
            PlaybackState::Loaded => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Stopped => "Finished",
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
    }
}

/// Player panel with file name, progress bar and transport buttons
pub struct PlayerPanel;

impl PlayerPanel {
    /// Render the panel and report which button was clicked, if any
    pub fn show(ui: &mut Ui, view: &PanelView<'_>) -> Option<PanelAction> {
        let mut action = None;
        let enabled = view.controls_enabled();

        Frame::new()
            .inner_margin(8.0)
            .fill(ui.visuals().window_fill)
            .corner_radius(CornerRadius::same(6))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    match view.file_name() {
                        Some(name) => {
                            ui.label(
                                RichText::new(name)
                                    .color(ui.visuals().strong_text_color())
                                    .size(16.0),
                            );
                        }
                        None => {
                            ui.label(
                                RichText::new(view.status_text())
                                    .color(ui.visuals().weak_text_color()),
                            );
                        }
                    }

                    if enabled {
                        ui.label(RichText::new(view.status_text()).size(13.0));
                    }

                    ui.add_space(12.0);

                    ui.add(
                        ProgressBar::new(view.progress.fraction())
                            .text(RichText::new(view.progress.label()).monospace()),
                    );

                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        // Center the three buttons in the available width
                        let spare = (ui.available_width() - 3.0 * 110.0).max(0.0);
                        ui.add_space(spare / 2.0);

                        let play = transport_button(
                            regular::PLAY_CIRCLE,
                            "Play",
                            Color32::from_rgb(100, 255, 150),
                        );
                        if ui.add_enabled(enabled, play).clicked() {
                            action = Some(PanelAction::Play);
                        }

                        let pause = transport_button(
                            regular::PAUSE_CIRCLE,
                            "Pause",
                            Color32::from_rgb(255, 200, 100),
                        );
                        if ui.add_enabled(enabled, pause).clicked() {
                            action = Some(PanelAction::Pause);
                        }

                        let stop = transport_button(
                            regular::STOP_CIRCLE,
                            "Stop",
                            Color32::from_rgb(255, 100, 100),
                        );
                        if ui.add_enabled(enabled, stop).clicked() {
                            action = Some(PanelAction::Stop);
                        }
                    });
                });
            });

        action
    }
}

fn transport_button(icon: &str, label: &str, color: Color32) -> Button<'static> {
    Button::new(RichText::new(format!("{icon} {label}")).size(18.0).color(color))
        .min_size(egui::vec2(100.0, 36.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_unlock_after_load() {
        let empty = PanelView {
            file: None,
            state: PlaybackState::Empty,
            progress: ProgressSample::default(),
        };
        assert!(!empty.controls_enabled());
        assert_eq!(empty.file_name(), None);
        assert_eq!(empty.status_text(), "No audio file loaded");

        let loaded = PanelView {
            file: Some(Path::new("/music/track.mp3")),
            state: PlaybackState::Paused,
            progress: ProgressSample::default(),
        };
        assert!(loaded.controls_enabled());
        assert_eq!(loaded.file_name().as_deref(), Some("track.mp3"));
        assert_eq!(loaded.status_text(), "Paused");
    }
}
