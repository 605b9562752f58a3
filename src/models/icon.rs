//! Display icon keys
//!
//! The dashboard used to look icons up in a string-keyed dictionary and
//! silently fall through on a missing key. Here the key set is a closed
//! enum with a total mapping: unknown keys parse to `Other`, and every
//! variant has a label and glyph. The engine itself never interprets the
//! icon; it passes the key through to the display layer untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon key attached to an objective's display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    Savings,
    Travel,
    Home,
    Car,
    Education,
    Emergency,
    Retirement,
    Health,
    Gift,
    Other,
}

impl IconKey {
    /// Parse an icon key; unknown keys map to `Other`, never an absence
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "savings" => Self::Savings,
            "travel" => Self::Travel,
            "home" => Self::Home,
            "car" => Self::Car,
            "education" => Self::Education,
            "emergency" => Self::Emergency,
            "retirement" => Self::Retirement,
            "health" => Self::Health,
            "gift" => Self::Gift,
            _ => Self::Other,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Travel => "Travel",
            Self::Home => "Home",
            Self::Car => "Car",
            Self::Education => "Education",
            Self::Emergency => "Emergency Fund",
            Self::Retirement => "Retirement",
            Self::Health => "Health",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }

    /// Single-character glyph for terminal display
    pub fn symbol(&self) -> char {
        match self {
            Self::Savings => '$',
            Self::Travel => '~',
            Self::Home => '^',
            Self::Car => '>',
            Self::Education => '#',
            Self::Emergency => '!',
            Self::Retirement => '*',
            Self::Health => '+',
            Self::Gift => '%',
            Self::Other => '.',
        }
    }
}

impl Default for IconKey {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
