//! Audio payloads moving through the speech pipeline

use serde::{Deserialize, Serialize};

/// Content type assumed when the caller gives none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type of synthesized speech
pub const WAV_CONTENT_TYPE: &str = "audio/wav";

/// An encoded audio payload (WAV, WebM, MP3, ...) with its MIME type
///
/// The concierge never decodes uploads itself; the bytes are handed to the
/// STT backend as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn wav(bytes: Vec<u8>) -> Self {
        Self::new(bytes, WAV_CONTENT_TYPE)
    }

    /// Whether the MIME type names an audio format
    pub fn is_audio(&self) -> bool {
        self.content_type.starts_with("audio/")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioClip")
            .field("bytes_len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_audio() {
        assert!(AudioClip::new(vec![1, 2], "audio/webm").is_audio());
        assert!(AudioClip::wav(vec![]).is_audio());
        assert!(!AudioClip::new(vec![1], "image/png").is_audio());
        assert!(!AudioClip::new(vec![1], DEFAULT_CONTENT_TYPE).is_audio());
    }

    #[test]
    fn test_debug_hides_bytes() {
        let clip = AudioClip::wav(vec![0; 1024]);
        let debug = format!("{:?}", clip);
        assert!(debug.contains("bytes_len: 1024"));
        assert!(!debug.contains("[0, 0"));
    }
}
