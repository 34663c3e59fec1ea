//! crates/level-logger/src/error.rs
//! Error raised when a value or name does not denote a valid level.

use thiserror::Error;

use crate::level::Level;

/// A level failed validation or a level name failed to parse.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidLevel {
    /// A raw value outside the five named levels was validated.
    #[error("invalid Level: {level}")]
    Unknown {
        /// The rejected level.
        level: Level,
    },
    /// Text did not match any level name.
    #[error("invalid log level: \"{name}\"")]
    Unrecognized {
        /// The rejected text.
        name: String,
    },
}

impl InvalidLevel {
    pub(crate) fn unrecognized(name: &str) -> Self {
        Self::Unrecognized {
            name: name.to_owned(),
        }
    }

    /// Returns the offending level.
    ///
    /// Parse failures report [`Level::INVALID`].
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Unknown { level } => *level,
            Self::Unrecognized { .. } => Level::INVALID,
        }
    }

    /// Returns the text that failed to parse, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unknown { .. } => None,
            Self::Unrecognized { name } => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_message_includes_sentinel_text() {
        let error = InvalidLevel::Unknown {
            level: Level::from_raw(-1),
        };
        assert_eq!(error.to_string(), "invalid Level: %!(Level=-1)");
        assert_eq!(error.name(), None);
    }

    #[test]
    fn unrecognized_message_quotes_input() {
        let error = InvalidLevel::unrecognized("verbose");
        assert_eq!(error.to_string(), "invalid log level: \"verbose\"");
        assert_eq!(error.level(), Level::INVALID);
    }
}
