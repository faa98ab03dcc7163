//! Playback state machine and the audio engine it drives.

mod backend;
mod controller;
pub mod duration;
mod progress;
mod session;

pub use backend::{AudioEngine, PlatformAudioEngine};
pub use controller::{PlayOutcome, PlaybackController};
pub use progress::{DEFAULT_PROGRESS_INTERVAL, ProgressSample, ProgressTimer, format_clock};
pub use session::{PlayAction, PlaybackSession, PlaybackState};
