//! Track length lookup from file headers, without decoding the audio.

use std::path::Path;
use std::time::Duration;

use crate::error::EngineError;

/// Read the track length of a WAV or MP3 file.
///
/// Returns `Ok(None)` for formats this probe does not understand, so the
/// caller can try something slower or show an unknown length.
pub fn probe_duration(path: &Path) -> Result<Option<Duration>, EngineError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("wav" | "wave") => wav_duration(path).map(Some),
        Some("mp3") => mp3_duration::from_path(path)
            .map(Some)
            .map_err(|e| EngineError::Decode(format!("cannot read MP3 length: {e:?}"))),
        _ => Ok(None),
    }
}

fn wav_duration(path: &Path) -> Result<Duration, EngineError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| EngineError::Decode(format!("cannot read WAV header: {e}")))?;

    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return Err(EngineError::Decode("WAV header has a zero sample rate".to_owned()));
    }

    // `duration` counts frames, i.e. samples per channel
    let frames = u64::from(reader.duration());
    Ok(Duration::from_millis(frames * 1000 / u64::from(sample_rate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unique_temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("audio_player_duration_{nonce}_{name}"));
        p
    }

    fn write_silence(path: &Path, sample_rate: u32, channels: u16, frames: u32) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames * u32::from(channels) {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn reads_wav_length_from_header() {
        let path = unique_temp_path("stereo.wav");
        write_silence(&path, 8_000, 2, 12_000);

        let duration = probe_duration(&path).unwrap();
        assert_eq!(duration, Some(Duration::from_millis(1_500)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn extension_match_ignores_case() {
        let path = unique_temp_path("LOUD.WAV");
        write_silence(&path, 4_000, 1, 1_000);

        assert_eq!(
            probe_duration(&path).unwrap(),
            Some(Duration::from_millis(250))
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unknown_formats_are_not_an_error() {
        let path = Path::new("song.ogg");
        assert_eq!(probe_duration(path).unwrap(), None);
        assert_eq!(probe_duration(Path::new("no_extension")).unwrap(), None);
    }

    #[test]
    fn garbage_wav_is_a_decode_error() {
        let path = unique_temp_path("broken.wav");
        std::fs::write(&path, b"definitely not RIFF").unwrap();

        assert!(matches!(probe_duration(&path), Err(EngineError::Decode(_))));

        let _ = std::fs::remove_file(&path);
    }
}
