//! Error types for cue playback.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or playing a cue.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("No audio output device available: {0}")]
    DeviceUnavailable(#[from] rodio::StreamError),

    #[error("Failed to read sound asset {path}: {source}")]
    AssetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode sound asset: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("Failed to open playback sink: {0}")]
    Sink(#[from] rodio::PlayError),
}
