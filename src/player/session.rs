use std::path::{Path, PathBuf};

use crate::error::{PlaybackError, StopPlaybackError};

/// Where the session is in its playback lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing loaded yet
    #[default]
    Empty,
    /// A file is selected and ready to start from the beginning
    Loaded,
    /// The engine is producing output
    Playing,
    /// Output halted, resource kept, resumable in place
    Paused,
    /// The track ran to its end on its own
    Stopped,
}

impl PlaybackState {
    /// Whether Pause or Stop have anything to act on
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// What the controller has to ask the engine for on Play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    /// Unpause without reloading
    Resume,
    /// Load the file and start output at the given offset
    Start { offset_ms: u64 },
    /// Already playing, leave the engine alone
    Nothing,
}

/// The single mutable record of what is loaded and how far it has played
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    current_file: Option<PathBuf>,
    state: PlaybackState,
    paused_position_ms: u64,
    duration_ms: Option<u64>,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn paused_position_ms(&self) -> u64 {
        self.paused_position_ms
    }

    /// Cached track length, `None` when it could not be read
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    /// Decide how Play should proceed from the current state
    pub fn plan_play(&self) -> Result<PlayAction, PlaybackError> {
        if self.current_file.is_none() {
            return Err(PlaybackError::NothingLoaded);
        }

        Ok(match self.state {
            PlaybackState::Playing => PlayAction::Nothing,
            PlaybackState::Paused => PlayAction::Resume,
            PlaybackState::Empty | PlaybackState::Loaded | PlaybackState::Stopped => {
                PlayAction::Start {
                    offset_ms: self.paused_position_ms,
                }
            }
        })
    }

    /// Pause is only valid while playing; a second Pause is an error too
    pub fn plan_pause(&self) -> Result<(), StopPlaybackError> {
        if self.state == PlaybackState::Playing {
            Ok(())
        } else {
            Err(StopPlaybackError::NothingToPause)
        }
    }

    pub fn plan_stop(&self) -> Result<(), StopPlaybackError> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(StopPlaybackError::NothingToStop)
        }
    }

    pub(crate) fn commit_load(&mut self, path: PathBuf, duration_ms: Option<u64>) {
        self.current_file = Some(path);
        self.duration_ms = duration_ms;
        self.paused_position_ms = 0;
        self.state = PlaybackState::Loaded;
    }

    pub(crate) fn commit_play(&mut self) {
        self.paused_position_ms = 0;
        self.state = PlaybackState::Playing;
    }

    pub(crate) fn commit_pause(&mut self, offset_ms: u64) {
        self.paused_position_ms = self.clamp_to_duration(offset_ms);
        self.state = PlaybackState::Paused;
    }

    pub(crate) fn commit_stop(&mut self) {
        self.paused_position_ms = 0;
        self.state = PlaybackState::Loaded;
    }

    pub(crate) fn commit_track_ended(&mut self) {
        self.paused_position_ms = 0;
        self.state = PlaybackState::Stopped;
    }

    pub(crate) fn clamp_to_duration(&self, offset_ms: u64) -> u64 {
        match self.duration_ms {
            Some(duration) => offset_ms.min(duration),
            None => offset_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> PlaybackSession {
        let mut session = PlaybackSession::new();
        session.commit_load(PathBuf::from("track.mp3"), Some(180_000));
        session
    }

    #[test]
    fn fresh_session_is_empty() {
        let session = PlaybackSession::new();
        assert_eq!(session.state(), PlaybackState::Empty);
        assert_eq!(session.current_file(), None);
        assert_eq!(session.plan_play(), Err(PlaybackError::NothingLoaded));
        assert_eq!(session.plan_pause(), Err(StopPlaybackError::NothingToPause));
        assert_eq!(session.plan_stop(), Err(StopPlaybackError::NothingToStop));
    }

    #[test]
    fn play_plan_follows_state() {
        let mut session = loaded();
        assert_eq!(session.plan_play(), Ok(PlayAction::Start { offset_ms: 0 }));

        session.commit_play();
        assert_eq!(session.plan_play(), Ok(PlayAction::Nothing));

        session.commit_pause(2_000);
        assert_eq!(session.plan_play(), Ok(PlayAction::Resume));

        session.commit_play();
        session.commit_track_ended();
        assert_eq!(session.state(), PlaybackState::Stopped);
        assert_eq!(session.plan_play(), Ok(PlayAction::Start { offset_ms: 0 }));
    }

    #[test]
    fn repeated_pause_is_rejected() {
        let mut session = loaded();
        session.commit_play();
        assert_eq!(session.plan_pause(), Ok(()));
        session.commit_pause(500);
        assert_eq!(session.plan_pause(), Err(StopPlaybackError::NothingToPause));
        assert_eq!(session.plan_stop(), Ok(()));
    }

    #[test]
    fn paused_position_never_exceeds_duration() {
        let mut session = loaded();
        session.commit_play();
        session.commit_pause(999_999);
        assert_eq!(session.paused_position_ms(), 180_000);
    }

    #[test]
    fn unknown_duration_keeps_raw_offset() {
        let mut session = PlaybackSession::new();
        session.commit_load(PathBuf::from("stream.ogg"), None);
        session.commit_play();
        session.commit_pause(42_000);
        assert_eq!(session.paused_position_ms(), 42_000);
    }
}
