//! WAV helpers
//!
//! Synthesized speech is checked here before it is returned to a caller: a
//! payload that does not parse as RIFF/WAVE is a synthesis failure.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::PipelineError;

/// Header facts about a WAV payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Samples per channel
    pub frames: u32,
}

impl WavInfo {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames as u64 * 1000 / self.sample_rate as u64
    }
}

/// Parse the header of an in-memory WAV file
pub fn inspect_wav(bytes: &[u8]) -> Result<WavInfo, PipelineError> {
    let reader = WavReader::new(Cursor::new(bytes))
        .map_err(|e| PipelineError::Audio(format!("Not a WAV payload: {}", e)))?;
    let spec = reader.spec();

    Ok(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        frames: reader.duration(),
    })
}

/// Encode mono 16-bit PCM samples as a WAV file
pub fn encode_pcm16(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, PipelineError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_encoded() {
        let bytes = encode_pcm16(&vec![0i16; 22050], 22050).unwrap();
        let info = inspect_wav(&bytes).unwrap();

        assert_eq!(info.sample_rate, 22050);
        assert_eq!(info.channels, 1);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.frames, 22050);
        assert_eq!(info.duration_ms(), 1000);
    }

    #[test]
    fn test_header_only_placeholder() {
        // A bare RIFF header with no fmt chunk is not usable audio
        let placeholder = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
        assert!(inspect_wav(&placeholder).is_err());
    }

    #[test]
    fn test_rejects_non_wav() {
        let err = inspect_wav(b"{\"error\":\"model not loaded\"}").unwrap_err();
        assert!(matches!(err, PipelineError::Audio(_)));
    }

    #[test]
    fn test_empty_audio_is_valid_wav() {
        let bytes = encode_pcm16(&[], 16000).unwrap();
        let info = inspect_wav(&bytes).unwrap();
        assert_eq!(info.frames, 0);
        assert_eq!(info.duration_ms(), 0);
    }
}
