use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "AUDIO_PLAYER_CONFIG";

/// Startup settings. Read once at launch and never written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // every field falls back to its default when missing
pub struct PlayerConfig {
    /// Progress refresh period while playing
    pub progress_interval_ms: u64,
    /// Extensions offered by the open dialog's audio filter
    pub audio_extensions: Vec<String>,
    pub window: WindowConfig,
    /// How long a notification toast stays on screen
    pub toast_secs: u64,
    /// Initial output volume (0.0 - 1.0)
    pub volume: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: 500,
            audio_extensions: ["mp3", "wav", "ogg", "flac"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            window: WindowConfig::default(),
            toast_secs: 3,
            volume: 0.8,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            min_width: 320.0,
            min_height: 220.0,
        }
    }
}

impl PlayerConfig {
    /// Load from the file named by `AUDIO_PLAYER_CONFIG`, or use defaults.
    /// A broken config file is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", Path::new(&path).display(), e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read file: {e}"))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, String> {
        let mut config: Self =
            serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}"))?;
        config.normalize();
        Ok(config)
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    fn normalize(&mut self) {
        // A zero interval would sample on every frame
        self.progress_interval_ms = self.progress_interval_ms.max(50);
        self.volume = self.volume.clamp(0.0, 1.0);
        for ext in &mut self.audio_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        self.audio_extensions.retain(|ext| !ext.is_empty());
        self.window.width = self.window.width.max(self.window.min_width);
        self.window.height = self.window.height.max(self.window.min_height);
    }
}
