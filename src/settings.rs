//! Startup configuration
//!
//! Only the playfield size and the RNG seed come from the host; every
//! tuning value is a constant in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GAP_MARGIN, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::error::{Error, Result};

/// Smallest playfield height that leaves a non-empty gap range
pub const MIN_PLAYFIELD_HEIGHT: u32 = GAP_MARGIN + 1;

/// Playfield dimensions in game units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: u32,
    pub height: u32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Check the playfield can host a session
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::PlayfieldTooNarrow);
        }
        if self.height < MIN_PLAYFIELD_HEIGHT {
            return Err(Error::PlayfieldTooShort {
                height: self.height,
                min: MIN_PLAYFIELD_HEIGHT,
            });
        }
        Ok(())
    }
}

/// Session settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub playfield: Playfield,
    /// RNG seed for gap placement
    #[serde(default)]
    pub seed: u64,
}

impl Settings {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({}x{}, seed {})",
            path.display(),
            settings.playfield.width,
            settings.playfield.height,
            settings.seed
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.playfield.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_playfield_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_short_playfield_rejected() {
        let err = Playfield::new(400, 300).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::PlayfieldTooShort { height: 300, min: 301 }
        ));
        assert!(Playfield::new(400, 301).validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            Playfield::new(0, 700).validate(),
            Err(Error::PlayfieldTooNarrow)
        ));
    }

    #[test]
    fn test_from_json() {
        let settings =
            Settings::from_json(r#"{"playfield":{"width":500,"height":800},"seed":7}"#).unwrap();
        assert_eq!(settings.playfield, Playfield::new(500, 800));
        assert_eq!(settings.seed, 7);

        // Missing fields fall back to defaults
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.playfield, Playfield::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(Settings::from_json("not json"), Err(Error::Settings(_))));
        assert!(matches!(
            Settings::from_json(r#"{"playfield":{"width":400,"height":200}}"#),
            Err(Error::PlayfieldTooShort { .. })
        ));
    }
}
