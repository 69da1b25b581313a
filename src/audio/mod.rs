//! Keystroke sound cues.
//!
//! Every accepted keystroke produces one [`Cue`]: a fresh, independent
//! playback of the current pen's sound at a fixed volume. Cues are handed to
//! a [`CueSink`], which must start them without blocking the caller and never
//! reports back. Rapid typing simply overlaps sounds.

pub mod bank;
pub mod player;
pub mod types;

pub use bank::SoundBank;
pub use player::CuePlayer;
pub use types::AudioError;

use std::sync::{Arc, Mutex};

/// Playback volume for every cue (50%).
pub const CUE_VOLUME: f32 = 0.5;

/// Opaque handle to one of the pen sound assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundRef {
    Ballpoint,
    Fountain,
    Pencil,
    Marker,
}

impl SoundRef {
    pub const ALL: [SoundRef; 4] = [
        SoundRef::Ballpoint,
        SoundRef::Fountain,
        SoundRef::Pencil,
        SoundRef::Marker,
    ];

    /// File name of the asset, both embedded and in an override directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundRef::Ballpoint => "pen.wav",
            SoundRef::Fountain => "fountainpen.wav",
            SoundRef::Pencil => "pencil.wav",
            SoundRef::Marker => "marker.wav",
        }
    }
}

/// One playable sound instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub sound: SoundRef,
    pub volume: f32,
}

impl Cue {
    /// Creates a cue for `sound` at the fixed cue volume.
    pub fn new(sound: SoundRef) -> Self {
        Self {
            sound,
            volume: CUE_VOLUME,
        }
    }
}

/// Destination for cues.
///
/// `start` is fire-and-forget: implementations detach whatever work playback
/// needs and return immediately. Failures stay inside the sink.
pub trait CueSink {
    fn start(&self, cue: Cue);
}

/// Sink that discards every cue. Used when no audio device is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl CueSink for SilentSink {
    fn start(&self, cue: Cue) {
        log::trace!("Dropping cue {:?} (no audio output)", cue.sound);
    }
}

/// Sink that records started cues instead of playing them.
///
/// Clones share the same log, so a host can keep one clone and hand the
/// other to the controller.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    started: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues started so far, oldest first.
    pub fn started(&self) -> Vec<Cue> {
        self.started
            .lock()
            .map(|cues| cues.clone())
            .unwrap_or_default()
    }

    /// Number of cues started so far.
    pub fn count(&self) -> usize {
        self.started.lock().map(|cues| cues.len()).unwrap_or(0)
    }
}

impl CueSink for RecordingSink {
    fn start(&self, cue: Cue) {
        if let Ok(mut cues) = self.started.lock() {
            cues.push(cue);
        }
    }
}
