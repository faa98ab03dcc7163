use std::path::Path;
use std::time::Duration;

use crate::error::EngineError;
use crate::player::duration::probe_duration;

/// Audio playback engine.
/// Decoding, mixing and device output all live behind this trait; the
/// controller only issues commands and reads back the play head.
pub trait AudioEngine: std::fmt::Debug {
    /// Open the output device
    fn init(&mut self) -> Result<(), EngineError>;

    /// Prepare a file for playback, replacing whatever was loaded before
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Start output of the loaded file at the given offset
    fn play(&mut self, start_offset_ms: u64) -> Result<(), EngineError>;

    /// Halt output, keeping the loaded sound
    fn pause(&mut self) -> Result<(), EngineError>;

    /// Continue output where `pause` left it
    fn unpause(&mut self) -> Result<(), EngineError>;

    /// Halt output and drop the playing sound
    fn stop(&mut self) -> Result<(), EngineError>;

    /// Check if output is currently running
    fn is_busy(&self) -> bool;

    /// Current play head in milliseconds
    fn current_offset_ms(&self) -> u64;

    /// Release the output device. Calling it twice is fine.
    fn quit(&mut self);

    /// Length of the track at `path`, `None` if the format gives no hint
    fn track_duration(&mut self, path: &Path) -> Result<Option<Duration>, EngineError> {
        probe_duration(path)
    }
}
