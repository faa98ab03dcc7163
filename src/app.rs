use std::time::{Duration, Instant};

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::player::{AudioEngine, PlatformAudioEngine, PlayOutcome, PlaybackController};
use crate::ui::{
    MenuAction, Notice, PanelAction, PanelView, PlayerPanel, Toasts, TopPanel, WindowSizeDialog,
};

/// The application window: menu, player panel, dialogs and toasts around
/// a single playback controller.
pub struct PlayerApp {
    config: PlayerConfig,
    controller: PlaybackController<PlatformAudioEngine>,
    toasts: Toasts,
    window_dialog: WindowSizeDialog,
    about_open: bool,
}

impl PlayerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PlayerConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut toasts = Toasts::new(Duration::from_secs(config.toast_secs));

        let mut engine = PlatformAudioEngine::new(config.volume);
        match engine.init() {
            Ok(()) => log::info!("Audio engine initialized successfully"),
            Err(e) => {
                log::error!("Failed to initialize audio engine: {e}");
                toasts.push(Notice::from_error(&PlayerError::from(e)), Instant::now());
            }
        }

        Self {
            controller: PlaybackController::new(engine, config.progress_interval()),
            toasts,
            window_dialog: WindowSizeDialog::new(&config.window),
            about_open: false,
            config,
        }
    }

    fn pick_file(&self) -> Option<std::path::PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Audio Files", self.config.audio_extensions.as_slice())
            .add_filter("All Files", &["*"])
            .pick_file()
    }

    fn load_file(&mut self, now: Instant) {
        let picked = self.pick_file();
        match self.controller.load(picked) {
            Ok(()) => {
                if let Some(path) = self.controller.session().current_file() {
                    let notice =
                        Notice::info("File loaded", format!("Loaded:\n{}", path.display()));
                    self.toasts.push(notice, now);
                }
            }
            Err(e) => self.toasts.push(Notice::from_error(&e), now),
        }
    }

    fn handle_panel_action(&mut self, action: PanelAction, now: Instant) {
        let result = match action {
            PanelAction::Play => self.controller.play(now).map(|outcome| {
                if outcome == PlayOutcome::AlreadyPlaying {
                    log::debug!("Play pressed while already playing");
                }
            }),
            PanelAction::Pause => self.controller.pause(),
            PanelAction::Stop => self.controller.stop(),
        };

        if let Err(e) = result {
            self.toasts.push(Notice::from_error(&e), now);
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction, now: Instant) {
        match action {
            MenuAction::Open => self.load_file(now),
            MenuAction::Exit => {
                self.controller.shutdown();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            MenuAction::WindowSize => {
                let current = ctx
                    .input(|i| i.viewport().inner_rect)
                    .map(|rect| rect.size())
                    .unwrap_or(egui::vec2(self.config.window.width, self.config.window.height));
                self.window_dialog.open(current);
            }
            MenuAction::About => self.about_open = true,
        }
    }

    /// Sleep until the next progress tick or toast expiry instead of
    /// repainting continuously
    fn schedule_repaint(&mut self, ctx: &egui::Context, now: Instant) {
        let next_tick = self.controller.next_tick_in(now);
        let next_expiry = self.toasts.prune(now);
        let wake = match (next_tick, next_expiry) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let Some(delay) = wake {
            ctx.request_repaint_after(delay);
        }
    }
}

impl eframe::App for PlayerApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.shutdown();
        }

        if let Some(action) = TopPanel::show(ctx) {
            self.handle_menu_action(ctx, action, now);
        }

        self.controller.tick(now);

        let controller = &self.controller;
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let view = PanelView {
                    file: controller.session().current_file(),
                    state: controller.state(),
                    progress: controller.progress(),
                };
                PlayerPanel::show(ui, &view)
            })
            .inner;

        if let Some(action) = action {
            self.handle_panel_action(action, now);
        }

        if let Some(size) = self.window_dialog.show(ctx) {
            log::info!("Resizing window to {}x{}", size.x, size.y);
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }
        TopPanel::show_about(ctx, &mut self.about_open);

        self.toasts.show(ctx);
        self.schedule_repaint(ctx, now);
    }
}

impl Drop for PlayerApp {
    fn drop(&mut self) {
        self.controller.shutdown();
    }
}
