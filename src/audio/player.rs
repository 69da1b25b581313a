//! Audio-device cue sink.

use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::{AudioError, Cue, CueSink, SoundBank};

/// Plays cues on the default audio output.
///
/// Each cue runs as its own detached blocking task on the tokio runtime:
/// it opens a sink, decodes the pen's sound and plays it to the end. Task
/// handles are dropped on spawn, so cues cannot be awaited or cancelled and
/// overlap freely.
pub struct CuePlayer {
    /// Keeps the output device open; dropping it silences every sink.
    _stream: OutputStream,
    output: OutputStreamHandle,
    bank: SoundBank,
    runtime: tokio::runtime::Handle,
}

impl CuePlayer {
    /// Opens the default output device.
    ///
    /// # Arguments
    /// * `runtime` - Tokio runtime handle for spawning cue tasks
    /// * `bank` - Sound assets to play
    pub fn new(runtime: &tokio::runtime::Handle, bank: SoundBank) -> Result<Self, AudioError> {
        let (stream, output) = OutputStream::try_default()?;
        log::debug!("Opened default audio output");
        Ok(Self {
            _stream: stream,
            output,
            bank,
            runtime: runtime.clone(),
        })
    }
}

impl CueSink for CuePlayer {
    fn start(&self, cue: Cue) {
        let output = self.output.clone();
        let bytes = self.bank.get(cue.sound);

        self.runtime.spawn_blocking(move || {
            if let Err(err) = play_to_end(&output, bytes, cue.volume) {
                log::warn!("Cue playback failed for {}: {err}", cue.sound.file_name());
            }
        });
    }
}

fn play_to_end(output: &OutputStreamHandle, bytes: Arc<[u8]>, volume: f32) -> Result<(), AudioError> {
    let sink = Sink::try_new(output)?;
    sink.set_volume(volume);
    sink.append(Decoder::new(Cursor::new(bytes))?);
    sink.sleep_until_end();
    Ok(())
}
