use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a meeting's total amount is divided between participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayType {
    /// Split in equal parts.
    #[default]
    #[serde(rename = "EQUAL")]
    Equal,
    /// Each participant gets an explicitly assigned amount.
    #[serde(rename = "ASSIGN")]
    Assign,
}

impl PayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::Assign => "ASSIGN",
        }
    }
}

impl fmt::Display for PayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split strategy as reported on an individual expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseSplit {
    #[serde(rename = "EQUAL_PARTS")]
    EqualParts,
    #[serde(rename = "ASSIGN")]
    Assign,
}

/// Theme chosen by the user. `Auto` follows the system appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Appearance reported by the operating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError(pub String);

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised value: {}", self.0)
    }
}

impl std::error::Error for ParseEnumError {}

impl FromStr for ThemePreference {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" | "system" => Ok(Self::Auto),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

impl FromStr for Appearance {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}
