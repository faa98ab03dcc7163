use std::path::{Path, PathBuf};
use std::time::Duration;

use kira::{
    AudioManager, AudioManagerSettings, DefaultBackend, Tween,
    sound::FromFileError,
    sound::PlaybackState,
    sound::streaming::{StreamingSoundData, StreamingSoundHandle},
};

use crate::error::EngineError;
use crate::player::backend::trait_def::AudioEngine;
use crate::player::duration::probe_duration;

/// Native audio engine implementation using kira
pub struct KiraEngine {
    /// Audio manager for playback, `None` before `init` and after `quit`
    manager: Option<AudioManager<DefaultBackend>>,
    /// Handle to the sound currently playing or paused
    sound_handle: Option<StreamingSoundHandle<FromFileError>>,
    /// Decoded-on-demand stream waiting for `play`
    pending: Option<StreamingSoundData<FromFileError>>,
    /// File last passed to `load`
    loaded_path: Option<PathBuf>,
    /// Current volume level (0.0 - 1.0)
    volume: f32,
}

impl KiraEngine {
    /// Create a new engine; nothing touches the device until `init`
    pub fn new(volume: f32) -> Self {
        Self {
            manager: None,
            sound_handle: None,
            pending: None,
            loaded_path: None,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    fn open_stream(path: &Path) -> Result<StreamingSoundData<FromFileError>, EngineError> {
        StreamingSoundData::from_file(path).map_err(|e| EngineError::Decode(e.to_string()))
    }

    fn volume_to_decibels(volume: f32) -> f32 {
        let clamped = volume.clamp(0.0, 1.0);
        if clamped <= 0.0 {
            -80.0
        } else {
            20.0 * clamped.log10()
        }
    }
}

impl AudioEngine for KiraEngine {
    fn init(&mut self) -> Result<(), EngineError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| EngineError::Output(format!("failed to initialize audio manager: {e}")))?;
        self.manager = Some(manager);
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.manager.is_none() {
            return Err(EngineError::NotInitialized);
        }

        let data = Self::open_stream(path)?;
        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }

        self.pending = Some(data);
        self.loaded_path = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self, start_offset_ms: u64) -> Result<(), EngineError> {
        let manager = self.manager.as_mut().ok_or(EngineError::NotInitialized)?;

        let data = match self.pending.take() {
            Some(data) => data,
            None => {
                let path = self.loaded_path.as_deref().ok_or(EngineError::NothingLoaded)?;
                Self::open_stream(path)?
            }
        };

        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }

        let mut handle = manager
            .play(data)
            .map_err(|e| EngineError::Output(format!("failed to start audio playback: {e}")))?;

        handle.set_volume(Self::volume_to_decibels(self.volume), Tween::default());
        if start_offset_ms > 0 {
            handle.seek_to(start_offset_ms as f64 / 1000.0);
        }

        self.sound_handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        let handle = self.sound_handle.as_mut().ok_or(EngineError::NothingLoaded)?;
        handle.pause(Tween::default());
        Ok(())
    }

    fn unpause(&mut self) -> Result<(), EngineError> {
        let handle = self.sound_handle.as_mut().ok_or(EngineError::NothingLoaded)?;
        handle.resume(Tween::default());
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        let mut handle = self.sound_handle.take().ok_or(EngineError::NothingLoaded)?;
        handle.stop(Tween::default());
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.sound_handle.as_ref().is_some_and(|handle| {
            matches!(
                handle.state(),
                PlaybackState::Playing | PlaybackState::Resuming
            )
        })
    }

    fn current_offset_ms(&self) -> u64 {
        self.sound_handle
            .as_ref()
            .map(|handle| (handle.position().max(0.0) * 1000.0) as u64)
            .unwrap_or(0)
    }

    fn quit(&mut self) {
        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }
        self.pending = None;
        if self.manager.take().is_some() {
            log::info!("Audio engine released");
        }
    }

    fn track_duration(&mut self, path: &Path) -> Result<Option<Duration>, EngineError> {
        if let Some(duration) = probe_duration(path)? {
            return Ok(Some(duration));
        }
        // Formats without a cheap header probe: ask the stream decoder
        Self::open_stream(path).map(|data| Some(data.duration()))
    }
}

impl Drop for KiraEngine {
    fn drop(&mut self) {
        self.quit();
    }
}

impl std::fmt::Debug for KiraEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiraEngine")
            .field("loaded_path", &self.loaded_path)
            .field("volume", &self.volume)
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .field("sound_handle", &self.sound_handle.as_ref().map(|_| "<sound handle>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_maps_to_decibels() {
        assert_eq!(KiraEngine::volume_to_decibels(1.0), 0.0);
        assert_eq!(KiraEngine::volume_to_decibels(0.0), -80.0);
        assert!((KiraEngine::volume_to_decibels(0.5) + 6.0206).abs() < 1e-3);
    }

    #[test]
    fn commands_before_init_fail_cleanly() {
        let mut engine = KiraEngine::new(0.5);
        assert!(matches!(
            engine.load(Path::new("track.mp3")),
            Err(EngineError::NotInitialized)
        ));
        assert!(matches!(engine.play(0), Err(EngineError::NotInitialized)));
        assert!(matches!(engine.pause(), Err(EngineError::NothingLoaded)));
        assert!(!engine.is_busy());
        assert_eq!(engine.current_offset_ms(), 0);
        engine.quit();
        engine.quit();
    }
}
