//! Settings persistence for the display.
//!
//! A flat key-value store (string keys, string values) backed by one JSON
//! object file, written atomically. Every entry is optional: absent or
//! malformed entries fall back to built-in defaults with a warning, never
//! an error. Last write wins; there is a single writer.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::color::Rgb;

/// Persisted key for the display text.
pub const KEY_TEXT: &str = "milton.text";
/// Persisted key for the thickness scalar.
pub const KEY_THICKNESS: &str = "milton.thickness";
pub const KEY_TEXT_COLOR: &str = "milton.textColor";
pub const KEY_BACKGROUND_COLOR: &str = "milton.backgroundColor";
pub const KEY_THEME_INDEX: &str = "milton.themeIndex";
pub const KEY_THEME_KIND: &str = "milton.themeKind";
/// Manual font size from the early slider variant. Read if present; only
/// written when that variant is configured.
pub const KEY_FONT_SIZE: &str = "milton.fontSize";

const SETTINGS_FILE: &str = "settings.json";

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value settings store backed by a JSON file under a base directory.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Open the store under `base_dir`, creating the directory if needed.
    /// A missing file is an empty store; an unreadable file is treated as
    /// empty with a warning so the display always comes up.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        let path = base_dir.join(SETTINGS_FILE);

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!(error = %e, "settings file unreadable, starting from defaults");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Raw string value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parsed value for a key. Absent yields `None`; malformed yields
    /// `None` with a warning.
    pub fn get_parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(key, value = %raw, "malformed stored value, using default");
                None
            }
        }
    }

    /// Parsed f32, falling back to `default` when absent or malformed.
    pub fn get_f32_or(&self, key: &str, default: f32) -> f32 {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Parsed color, falling back to `default` when absent or malformed.
    pub fn get_color_or(&self, key: &str, default: Rgb) -> Rgb {
        match self.entries.get(key) {
            None => default,
            Some(raw) => Rgb::parse_hex(raw).unwrap_or_else(|_| {
                warn!(key, value = %raw, "malformed stored color, using default");
                default
            }),
        }
    }

    /// Set a key and write the store through to disk.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), SettingsError> {
        self.entries.insert(key.to_string(), value.into());
        self.flush()
    }

    /// Remove a key and write through. Removing an absent key still writes.
    pub fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        self.entries.remove(key);
        self.flush()
    }

    /// Remove every persisted key (the reset button).
    pub fn clear(&mut self) -> Result<(), SettingsError> {
        self.entries.clear();
        self.flush()
    }

    /// Whether no keys are persisted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), "settings written");
        Ok(())
    }
}

/// Write content atomically using temp file + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("file");
    let tmp_name = format!("{file_name}.{}.tmp", std::process::id());
    let tmp_path = path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        // Best-effort cleanup
        let _ = fs::remove_file(&tmp_path);
    }

    result
}
