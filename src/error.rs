use std::path::PathBuf;

use thiserror::Error;

/// No usable file was chosen in the open dialog
#[derive(Debug, Error)]
pub enum FileLoadError {
    /// The dialog was cancelled or returned an empty path
    #[error("No file was selected.")]
    NoFileSelected,
    /// The chosen path cannot be read as a file
    #[error("Cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Play was requested before anything was loaded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No file has been loaded for playback.")]
    NothingLoaded,
}

/// Pause or stop was requested with no active playback
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StopPlaybackError {
    #[error("Nothing is playing, so there is nothing to pause.")]
    NothingToPause,
    #[error("There is no active playback to stop.")]
    NothingToStop,
}

/// Failures reported by the audio engine itself
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Audio engine is not initialized")]
    NotInitialized,
    #[error("No audio loaded in the engine")]
    NothingLoaded,
    #[error("Failed to load audio file: {0}")]
    Decode(String),
    #[error("Audio output failed: {0}")]
    Output(String),
}

/// Every failure a controller action can report
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    FileLoad(#[from] FileLoadError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error(transparent)]
    StopPlayback(#[from] StopPlaybackError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl PlayerError {
    /// Precondition violations the user can recover from.
    /// Everything else came out of the engine and is unexpected.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Engine(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_failures_are_not_domain_errors() {
        assert!(PlayerError::from(FileLoadError::NoFileSelected).is_domain());
        assert!(PlayerError::from(PlaybackError::NothingLoaded).is_domain());
        assert!(PlayerError::from(StopPlaybackError::NothingToPause).is_domain());
        assert!(!PlayerError::from(EngineError::Output("device lost".to_owned())).is_domain());
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = PlayerError::from(StopPlaybackError::NothingToStop);
        assert_eq!(err.to_string(), "There is no active playback to stop.");

        let err = PlayerError::from(EngineError::Decode("bad header".to_owned()));
        assert_eq!(err.to_string(), "Failed to load audio file: bad header");
    }
}
