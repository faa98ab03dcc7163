// Re-export the AudioEngine trait
mod trait_def;
pub use trait_def::AudioEngine;

mod native;

// Export the native audio engine
pub use native::KiraEngine as PlatformAudioEngine;
