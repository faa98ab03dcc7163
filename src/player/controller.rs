use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::backend::AudioEngine;
use super::progress::{ProgressSample, ProgressTimer};
use super::session::{PlayAction, PlaybackSession, PlaybackState};
use crate::error::{FileLoadError, PlayerError};

/// Result of a successful Play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Output started from the given offset after (re)loading the file
    Started { offset_ms: u64 },
    /// Paused output continued in place
    Resumed { offset_ms: u64 },
    /// Play while already playing, nothing was sent to the engine
    AlreadyPlaying,
}

/// Owns the session and the engine, and applies the four user actions.
///
/// Every action checks its precondition first, then talks to the engine,
/// and only commits the new state once the engine calls succeeded. A failed
/// call therefore leaves the session as it was.
#[derive(Debug)]
pub struct PlaybackController<E: AudioEngine> {
    session: PlaybackSession,
    engine: E,
    timer: ProgressTimer,
    progress: ProgressSample,
    shut_down: bool,
}

impl<E: AudioEngine> PlaybackController<E> {
    /// Wrap an already initialized engine
    pub fn new(engine: E, progress_interval: Duration) -> Self {
        Self {
            session: PlaybackSession::new(),
            engine,
            timer: ProgressTimer::new(progress_interval),
            progress: ProgressSample::default(),
            shut_down: false,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    /// Last value pushed to the progress display
    pub fn progress(&self) -> ProgressSample {
        self.progress
    }

    pub fn is_progress_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Select a new file. `None` means the picker was cancelled.
    pub fn load(&mut self, path: Option<PathBuf>) -> Result<(), PlayerError> {
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(FileLoadError::NoFileSelected)?;

        let metadata = std::fs::metadata(&path).map_err(|source| FileLoadError::Unreadable {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(FileLoadError::Unreadable {
                path,
                source: std::io::Error::other("not a regular file"),
            }
            .into());
        }

        if self.session.state().is_active() {
            self.engine.stop()?;
        }
        self.timer.cancel();

        let duration_ms = match self.engine.track_duration(&path) {
            Ok(Some(duration)) => Some(duration.as_millis() as u64),
            Ok(None) => {
                log::info!("Length of {} is unknown", path.display());
                None
            }
            Err(e) => {
                log::warn!("Could not read length of {}: {}", path.display(), e);
                None
            }
        };

        log::info!("Loaded {}", path.display());
        self.session.commit_load(path, duration_ms);
        self.progress = ProgressSample {
            position_ms: 0,
            duration_ms,
        };
        Ok(())
    }

    /// Start, restart or resume playback depending on the current state
    pub fn play(&mut self, now: Instant) -> Result<PlayOutcome, PlayerError> {
        let outcome = match self.session.plan_play()? {
            PlayAction::Nothing => {
                log::debug!("Play ignored, already playing");
                return Ok(PlayOutcome::AlreadyPlaying);
            }
            PlayAction::Resume => {
                self.engine.unpause()?;
                let offset_ms = self.session.paused_position_ms();
                log::info!("Resumed at {offset_ms} ms");
                PlayOutcome::Resumed { offset_ms }
            }
            PlayAction::Start { offset_ms } => {
                let path = self
                    .session
                    .current_file()
                    .map(|p| p.to_path_buf())
                    .ok_or(crate::error::PlaybackError::NothingLoaded)?;
                self.engine.load(&path)?;
                self.engine.play(offset_ms)?;
                log::info!("Playing {} from {} ms", path.display(), offset_ms);
                PlayOutcome::Started { offset_ms }
            }
        };

        self.session.commit_play();
        self.timer.start(now);
        Ok(outcome)
    }

    /// Halt output and remember where it stopped
    pub fn pause(&mut self) -> Result<(), PlayerError> {
        self.session.plan_pause()?;

        let offset_ms = self.engine.current_offset_ms();
        self.engine.pause()?;

        self.session.commit_pause(offset_ms);
        self.timer.cancel();
        self.progress.position_ms = self.session.paused_position_ms();
        log::info!("Paused at {} ms", self.session.paused_position_ms());
        Ok(())
    }

    /// Halt output and rewind to the start of the file
    pub fn stop(&mut self) -> Result<(), PlayerError> {
        self.session.plan_stop()?;

        self.engine.stop()?;

        self.session.commit_stop();
        self.timer.cancel();
        self.progress.position_ms = 0;
        log::info!("Playback stopped");
        Ok(())
    }

    /// Drive the progress timer; returns a fresh sample when one was taken
    pub fn tick(&mut self, now: Instant) -> Option<ProgressSample> {
        if !self.timer.poll(now) {
            return None;
        }
        if self.session.state() != PlaybackState::Playing {
            self.timer.cancel();
            return None;
        }

        if !self.engine.is_busy() {
            log::info!("Track finished");
            self.session.commit_track_ended();
            self.timer.cancel();
            self.progress.position_ms = 0;
            return Some(self.progress);
        }

        let position_ms = self
            .session
            .clamp_to_duration(self.engine.current_offset_ms());
        self.progress = ProgressSample {
            position_ms,
            duration_ms: self.session.duration_ms(),
        };
        log::trace!("Progress {position_ms} ms");
        Some(self.progress)
    }

    /// How long the UI may sleep before the next `tick` matters
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Stop any output and release the engine. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.timer.cancel();

        if self.session.state().is_active() {
            if let Err(e) = self.engine.stop() {
                log::error!("Failed to stop playback during shutdown: {e}");
            }
        }
        self.engine.quit();
        log::info!("Player shut down");
    }
}
