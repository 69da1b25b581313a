//! Pen sound assets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::{AudioError, SoundRef};

const EMBEDDED_BALLPOINT: &[u8] = include_bytes!("../../assets/sounds/pen.wav");
const EMBEDDED_FOUNTAIN: &[u8] = include_bytes!("../../assets/sounds/fountainpen.wav");
const EMBEDDED_PENCIL: &[u8] = include_bytes!("../../assets/sounds/pencil.wav");
const EMBEDDED_MARKER: &[u8] = include_bytes!("../../assets/sounds/marker.wav");

/// Encoded audio for every [`SoundRef`].
///
/// Bytes are shared, so every cue can decode its own copy of the stream
/// without re-reading anything from disk.
#[derive(Debug, Clone)]
pub struct SoundBank {
    assets: HashMap<SoundRef, Arc<[u8]>>,
}

impl SoundBank {
    /// Bank holding the sounds compiled into the binary.
    pub fn embedded() -> Self {
        let assets = SoundRef::ALL
            .iter()
            .map(|sound| (*sound, Arc::<[u8]>::from(embedded_bytes(*sound))))
            .collect();
        Self { assets }
    }

    /// Bank reading overrides from `dir`.
    ///
    /// Each asset is looked up by its file name; assets missing from the
    /// directory keep the embedded sound.
    ///
    /// # Errors
    /// Returns an error if an override file exists but cannot be read.
    pub fn with_overrides(dir: &Path) -> Result<Self, AudioError> {
        let mut bank = Self::embedded();

        for sound in SoundRef::ALL {
            let path = dir.join(sound.file_name());
            if !path.is_file() {
                log::debug!(
                    "No override for {} in {}, using embedded sound",
                    sound.file_name(),
                    dir.display()
                );
                continue;
            }

            let bytes = fs::read(&path).map_err(|source| AudioError::AssetIo {
                path: path.clone(),
                source,
            })?;
            log::info!("Loaded {} from {}", sound.file_name(), path.display());
            bank.assets.insert(sound, Arc::from(bytes));
        }

        Ok(bank)
    }

    /// Encoded bytes of `sound`.
    pub fn get(&self, sound: SoundRef) -> Arc<[u8]> {
        self.assets
            .get(&sound)
            .cloned()
            .unwrap_or_else(|| Arc::from(embedded_bytes(sound)))
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::embedded()
    }
}

fn embedded_bytes(sound: SoundRef) -> &'static [u8] {
    match sound {
        SoundRef::Ballpoint => EMBEDDED_BALLPOINT,
        SoundRef::Fountain => EMBEDDED_FOUNTAIN,
        SoundRef::Pencil => EMBEDDED_PENCIL,
        SoundRef::Marker => EMBEDDED_MARKER,
    }
}
