//! Error types
//!
//! The simulation itself never fails; errors only come from setting it up.

use thiserror::Error;

/// Errors raised while configuring a session
#[derive(Debug, Error)]
pub enum Error {
    /// Playfield too short to fit a randomized gap
    #[error("playfield height {height} is too small, need at least {min}")]
    PlayfieldTooShort { height: u32, min: u32 },

    /// Playfield has no horizontal room to spawn obstacles
    #[error("playfield width must be non-zero")]
    PlayfieldTooNarrow,

    /// Settings file could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// A frame could not be serialized for an external renderer
    #[error("failed to export frame: {0}")]
    Export(#[source] serde_json::Error),

    /// Settings file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("nope").unwrap_err()
    }

    #[test]
    fn test_json_errors_keep_their_origin() {
        let settings: Error = json_error().into();
        assert!(matches!(settings, Error::Settings(_)));
        assert!(settings.to_string().starts_with("invalid settings: "));

        let export = Error::Export(json_error());
        assert!(export.to_string().starts_with("failed to export frame: "));
    }
}
