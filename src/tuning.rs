//! Data-driven movement tuning.
//!
//! Stored as RON next to the executable. A missing file is seeded with the
//! defaults and written back, so the numbers are always there to tweak.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const TUNING_FILE: &str = "tuning.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration, pixels per second squared
    pub gravity: f32,
    /// Upward speed at the start of a jump, pixels per second
    pub jump_speed: f32,
    /// Horizontal walk speed, pixels per second
    pub walk_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 600.0,
            jump_speed: 400.0,
            walk_speed: 400.0,
        }
    }
}

#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<ron::error::SpannedError> for TuningError {
    fn from(e: ron::error::SpannedError) -> Self {
        TuningError::Parse(e)
    }
}

impl From<ron::Error> for TuningError {
    fn from(e: ron::Error) -> Self {
        TuningError::Serialize(e)
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "IO error: {}", e),
            TuningError::Parse(e) => write!(f, "parse error: {}", e),
            TuningError::Serialize(e) => write!(f, "serialize error: {}", e),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Read the tuning file. A missing file writes the defaults back and
    /// returns them; any other failure is surfaced to the caller.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self, TuningError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(ron::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let tuning = Self::default();
                tuning.save(path)?;
                Ok(tuning)
            }
            Err(e) => Err(TuningError::Io(e)),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TuningError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 600.0);
        assert_eq!(tuning.jump_speed, 400.0);
        assert_eq!(tuning.walk_speed, 400.0);
    }

    #[test]
    fn test_load_or_init_seeds_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TUNING_FILE);

        let tuning = Tuning::load_or_init(&path).unwrap();
        assert_eq!(tuning, Tuning::default());
        assert!(path.exists());

        // Second load reads the file it just wrote
        let again = Tuning::load_or_init(&path).unwrap();
        assert_eq!(again, tuning);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TUNING_FILE);

        let tuning = Tuning {
            gravity: 900.0,
            jump_speed: 450.0,
            walk_speed: 250.0,
        };
        tuning.save(&path).unwrap();
        assert_eq!(Tuning::load_or_init(&path).unwrap(), tuning);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TUNING_FILE);
        std::fs::write(&path, "not ron at all").unwrap();

        assert!(matches!(
            Tuning::load_or_init(&path),
            Err(TuningError::Parse(_))
        ));
    }
}
