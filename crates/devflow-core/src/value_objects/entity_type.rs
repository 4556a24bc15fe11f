//! Entity kind value objects
//!
//! `EntityType` covers every record kind the change log can track.
//! `StatusEntityType` is the subset that carries a configurable workflow
//! status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an enum value object from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Record kinds tracked by the change log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Epic,
    Task,
    ProductIdea,
}

impl EntityType {
    /// Wire representation (snake_case, matching the REST paths)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Epic => "epic",
            Self::Task => "task",
            Self::ProductIdea => "product_idea",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "epic" => Ok(Self::Epic),
            "task" => Ok(Self::Task),
            "product_idea" => Ok(Self::ProductIdea),
            other => Err(ParseEnumError::new("entity type", other)),
        }
    }
}

/// Entity kinds that carry a configurable workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEntityType {
    ProductIdea,
    Epic,
    Task,
}

impl StatusEntityType {
    /// All status-bearing entity kinds, in bootstrap order
    pub const ALL: [Self; 3] = [Self::ProductIdea, Self::Epic, Self::Task];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductIdea => "product_idea",
            Self::Epic => "epic",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for StatusEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusEntityType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product_idea" => Ok(Self::ProductIdea),
            "epic" => Ok(Self::Epic),
            "task" => Ok(Self::Task),
            other => Err(ParseEnumError::new("status entity type", other)),
        }
    }
}

impl From<StatusEntityType> for EntityType {
    fn from(value: StatusEntityType) -> Self {
        match value {
            StatusEntityType::ProductIdea => Self::ProductIdea,
            StatusEntityType::Epic => Self::Epic,
            StatusEntityType::Task => Self::Task,
        }
    }
}
