//! Favorite targets
//!
//! A favorite points at exactly one person or exactly one planet.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which table a favorite points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    People,
    Planet,
}

impl FavoriteKind {
    /// Path segment used in `/users/{id}/favorite/{kind}/{target_id}`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planet => "planet",
        }
    }

    /// Resource name used in error messages
    pub fn resource(&self) -> &'static str {
        match self {
            Self::People => "person",
            Self::Planet => "planet",
        }
    }

    /// Foreign key column on the favorites table
    pub(crate) fn column(&self) -> &'static str {
        match self {
            Self::People => "people_id",
            Self::Planet => "planet_id",
        }
    }
}

impl FromStr for FavoriteKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Self::People),
            "planet" => Ok(Self::Planet),
            other => Err(ValidationError::InvalidVariant {
                field: "favorite kind",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The person or planet a favorite refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    People(i64),
    Planet(i64),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i64) -> Self {
        match kind {
            FavoriteKind::People => Self::People(id),
            FavoriteKind::Planet => Self::Planet(id),
        }
    }

    /// Build a target from the two nullable columns.
    ///
    /// Exactly one of them must be set.
    pub fn from_columns(
        people_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        match (people_id, planet_id) {
            (Some(id), None) => Ok(Self::People(id)),
            (None, Some(id)) => Ok(Self::Planet(id)),
            (None, None) => Err(ValidationError::InvalidFormat {
                field: "favorite",
                reason: "one of people_id or planet_id is required",
            }),
            (Some(_), Some(_)) => Err(ValidationError::InvalidFormat {
                field: "favorite",
                reason: "people_id and planet_id are mutually exclusive",
            }),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::People(_) => FavoriteKind::People,
            Self::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::People(id) | Self::Planet(id) => *id,
        }
    }

    pub fn people_id(&self) -> Option<i64> {
        match self {
            Self::People(id) => Some(*id),
            Self::Planet(_) => None,
        }
    }

    pub fn planet_id(&self) -> Option<i64> {
        match self {
            Self::Planet(id) => Some(*id),
            Self::People(_) => None,
        }
    }
}
