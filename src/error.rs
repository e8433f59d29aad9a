//! Crate-level error types.

use std::fmt;

/// Errors produced by the showroom crate.
///
/// Interaction-time operations (clicks, door toggles, camera requests,
/// panel edits) never fail; only setup paths return these.
#[derive(Debug)]
pub enum ShowroomError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Invalid scene graph construction (unknown parent, bad bounds).
    SceneBuild(String),
    /// The asset loader failed to produce a scene.
    SceneLoad(String),
}

impl fmt::Display for ShowroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneBuild(msg) => write!(f, "scene build error: {msg}"),
            Self::SceneLoad(msg) => write!(f, "scene load error: {msg}"),
        }
    }
}

impl std::error::Error for ShowroomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShowroomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
