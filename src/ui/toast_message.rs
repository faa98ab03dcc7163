use egui::{Align2, Color32, Context};
use std::time::{Duration, Instant};

use crate::error::PlayerError;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn color(self) -> Color32 {
        match self {
            Self::Info => Color32::from_rgb(100, 200, 100),
            Self::Warning => Color32::from_rgb(255, 200, 100),
            Self::Error => Color32::from_rgb(255, 100, 100),
        }
    }
}

/// Something to tell the user. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: String) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_owned(),
            message,
        }
    }

    /// Domain failures become warnings, engine failures errors
    pub fn from_error(err: &PlayerError) -> Self {
        let (title, level) = match err {
            PlayerError::FileLoad(_) => ("File load error", NoticeLevel::Warning),
            PlayerError::Playback(_) => ("Playback error", NoticeLevel::Warning),
            PlayerError::StopPlayback(_) => ("Stop error", NoticeLevel::Warning),
            PlayerError::Engine(_) => ("Error", NoticeLevel::Error),
        };
        Self {
            level,
            title: title.to_owned(),
            message: err.to_string(),
        }
    }
}

/// Toast notification message
#[derive(Clone, Debug)]
pub struct ToastMessage {
    pub notice: Notice,
    pub expires_at: Instant,
}

impl ToastMessage {
    /// Create a new toast message
    pub fn new(notice: Notice, now: Instant, lifetime: Duration) -> Self {
        Self {
            notice,
            expires_at: now + lifetime,
        }
    }

    /// Check if the toast message has expired
    pub fn has_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Stack of live toasts, newest at the bottom
#[derive(Debug)]
pub struct Toasts {
    messages: Vec<ToastMessage>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            messages: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => log::warn!("{}: {}", notice.title, notice.message),
            NoticeLevel::Error => log::error!("{}: {}", notice.title, notice.message),
        }
        self.messages.push(ToastMessage::new(notice, now, self.lifetime));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop expired toasts; returns how long until the next one expires
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.messages.retain(|toast| !toast.has_expired(now));
        self.messages
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }

    /// Render toast notifications at the top center of the window
    pub fn show(&self, ctx: &Context) {
        let available_rect = ctx.available_rect();
        let spacing = available_rect.height() * 0.08;
        let toast_offset = 56.0;

        for (i, toast) in self.messages.iter().enumerate() {
            let window_id = egui::Id::new("toast_message").with(i);
            let pos = [0.0, spacing + (i as f32 * toast_offset)];

            egui::Window::new("Toast")
                .id(window_id)
                .title_bar(false)
                .resizable(false)
                .movable(false)
                .anchor(Align2::CENTER_TOP, pos)
                .default_width(available_rect.width() * 0.8)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.strong(&toast.notice.title);
                        ui.colored_label(toast.notice.level.color(), &toast.notice.message);
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, FileLoadError, PlayerError, StopPlaybackError};

    #[test]
    fn errors_map_to_severity() {
        let warning = Notice::from_error(&PlayerError::from(FileLoadError::NoFileSelected));
        assert_eq!(warning.level, NoticeLevel::Warning);
        assert_eq!(warning.title, "File load error");
        assert_eq!(warning.message, "No file was selected.");

        let warning = Notice::from_error(&PlayerError::from(StopPlaybackError::NothingToPause));
        assert_eq!(warning.level, NoticeLevel::Warning);

        let error = Notice::from_error(&PlayerError::from(EngineError::NotInitialized));
        assert_eq!(error.level, NoticeLevel::Error);
    }

    #[test]
    fn toasts_expire_after_lifetime() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(3));
        toasts.push(Notice::info("Loaded", "a.mp3".to_owned()), start);
        toasts.push(
            Notice::info("Loaded", "b.mp3".to_owned()),
            start + Duration::from_secs(2),
        );

        assert_eq!(
            toasts.prune(start + Duration::from_secs(1)),
            Some(Duration::from_secs(2))
        );
        assert_eq!(toasts.len(), 2);

        assert_eq!(
            toasts.prune(start + Duration::from_secs(3)),
            Some(Duration::from_secs(2))
        );
        assert_eq!(toasts.len(), 1);

        assert_eq!(toasts.prune(start + Duration::from_secs(5)), None);
        assert!(toasts.is_empty());
    }
}
