//! crates/level-logger/src/level.rs
//! Ordered severity levels with text conversion, parsing, and validation.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidLevel;

/// Severity threshold for log messages.
///
/// A logger configured with a level emits every message whose level is at
/// least as severe. Levels compare by their raw value, so
/// `Level::DEBUG < Level::INFO < Level::WARN < Level::ERROR < Level::FATAL`.
///
/// Arbitrary raw values can be wrapped with [`Level::from_raw`] but only the
/// five named constants pass [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use level_logger::Level;
///
/// assert!(Level::WARN > Level::INFO);
/// assert_eq!(Level::ERROR.to_string(), "ERROR");
/// assert_eq!(Level::from_raw(7).to_string(), "%!(Level=7)");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Level(i32);

impl Level {
    /// Verbose diagnostics intended for development.
    pub const DEBUG: Self = Self(0);
    /// Routine informational messages.
    pub const INFO: Self = Self(1);
    /// Conditions that deserve attention but do not stop work.
    pub const WARN: Self = Self(2);
    /// Failures of the current operation.
    pub const ERROR: Self = Self(3);
    /// Unrecoverable failures; logging at this level terminates the process.
    pub const FATAL: Self = Self(4);

    /// Value reported when text fails to parse.
    pub const INVALID: Self = Self(-1);

    /// Prefix carried by the text form of every invalid level.
    ///
    /// No valid level name begins with these characters.
    pub const SENTINEL_PREFIX: &'static str = "%!";

    /// The valid levels in ascending order of severity.
    pub const ALL: [Self; 5] = [
        Self::DEBUG,
        Self::INFO,
        Self::WARN,
        Self::ERROR,
        Self::FATAL,
    ];

    /// Wraps a raw value without validating it.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw ordinal.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    const fn canonical_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("DEBUG"),
            1 => Some("INFO"),
            2 => Some("WARN"),
            3 => Some("ERROR"),
            4 => Some("FATAL"),
            _ => None,
        }
    }

    /// Returns the text form of the level.
    ///
    /// Valid levels yield their uppercase name. Any other value yields a
    /// placeholder such as `%!(Level=-1)` that starts with
    /// [`SENTINEL_PREFIX`](Self::SENTINEL_PREFIX).
    #[must_use]
    pub fn text(self) -> Cow<'static, str> {
        match self.canonical_name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("{}(Level={})", Self::SENTINEL_PREFIX, self.0)),
        }
    }

    /// Parses a level name, ignoring ASCII case.
    ///
    /// Accepts `debug`, `info`, `warn`, `error` and `fatal` in any casing.
    /// Unknown names fail with [`InvalidLevel::Unrecognized`], whose
    /// [`level`](InvalidLevel::level) is [`Level::INVALID`].
    ///
    /// # Examples
    ///
    /// ```
    /// use level_logger::Level;
    ///
    /// assert_eq!(Level::parse("Warn"), Ok(Level::WARN));
    ///
    /// let error = Level::parse("Foo").unwrap_err();
    /// assert_eq!(error.level(), Level::INVALID);
    /// ```
    pub fn parse(text: &str) -> Result<Self, InvalidLevel> {
        Self::ALL
            .into_iter()
            .find(|level| {
                level
                    .canonical_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(text))
            })
            .ok_or_else(|| InvalidLevel::unrecognized(text))
    }

    /// Checks that the level is one of the five named values.
    ///
    /// A level is valid exactly when its [`text`](Self::text) does not start
    /// with [`SENTINEL_PREFIX`](Self::SENTINEL_PREFIX).
    pub fn validate(self) -> Result<(), InvalidLevel> {
        if self.text().starts_with(Self::SENTINEL_PREFIX) {
            return Err(InvalidLevel::Unknown { level: self });
        }
        Ok(())
    }

    /// Reports whether [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl TryFrom<i32> for Level {
    type Error = InvalidLevel;

    fn try_from(raw: i32) -> Result<Self, InvalidLevel> {
        let level = Self::from_raw(raw);
        level.validate()?;
        Ok(level)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.as_raw()
    }
}

#[cfg(feature = "serde")]
mod serde_impl;
