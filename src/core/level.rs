//! Log level definitions
//!
//! Levels double as dispatch tags: `Time` and `Clear` are pseudo-levels that
//! handlers interpret as "timer event" and "wipe output" respectively.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Clear,
    #[default]
    Debug,
    Info,
    Time,
    Warn,
    Error,
    Off,
}

impl Level {
    /// Every level, in rank order.
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Time,
        Level::Warn,
        Level::Error,
        Level::Off,
        Level::Clear,
    ];

    /// Numeric rank used for filtering.
    ///
    /// `Clear` ranks at infinity so it passes every filter short of another
    /// infinite rank.
    pub fn value(&self) -> f64 {
        match self {
            Level::Clear => f64::INFINITY,
            Level::Debug => 1.0,
            Level::Info => 2.0,
            Level::Time => 3.0,
            Level::Warn => 4.0,
            Level::Error => 8.0,
            Level::Off => 99.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Clear => "CLEAR",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Time => "TIME",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLEAR" => Ok(Level::Clear),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "TIME" => Ok(Level::Time),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "OFF" => Ok(Level::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Anything that may describe a level.
///
/// Conversions that cannot produce a well-formed level yield `None`, which
/// `Logger::set_level` treats as "keep the current level".
pub trait IntoLevel {
    fn into_level(self) -> Option<Level>;
}

impl IntoLevel for Level {
    fn into_level(self) -> Option<Level> {
        Some(self)
    }
}

impl IntoLevel for Option<Level> {
    fn into_level(self) -> Option<Level> {
        self
    }
}

impl IntoLevel for &str {
    fn into_level(self) -> Option<Level> {
        self.parse().ok()
    }
}

impl IntoLevel for String {
    fn into_level(self) -> Option<Level> {
        self.as_str().into_level()
    }
}

impl IntoLevel for &String {
    fn into_level(self) -> Option<Level> {
        self.as_str().into_level()
    }
}
