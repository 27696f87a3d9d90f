//! Elective categories and their catalog relations.
//!
//! Every category owns exactly one catalog table. The table name is looked up
//! from the enum, never built from request input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const ELECTIVE_1: &str = "elective_1";
pub const ELECTIVE_2: &str = "elective_2";

/// All valid elective type strings, in display order.
pub const VALID_ELECTIVE_TYPES: &[&str] = &[ELECTIVE_1, ELECTIVE_2];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectiveCategory {
    #[serde(rename = "elective_1")]
    Elective1,
    #[serde(rename = "elective_2")]
    Elective2,
}

impl ElectiveCategory {
    /// Category used when a request names no category or an unknown one.
    pub const DEFAULT: Self = Self::Elective2;

    pub const ALL: [Self; 2] = [Self::Elective1, Self::Elective2];

    /// Parse an exact elective type string.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            ELECTIVE_1 => Ok(Self::Elective1),
            ELECTIVE_2 => Ok(Self::Elective2),
            _ => Err(CoreError::Validation(format!(
                "Invalid elective type '{s}'. Must be one of: {}",
                VALID_ELECTIVE_TYPES.join(", ")
            ))),
        }
    }

    /// Resolve the category a request refers to.
    ///
    /// In lenient mode anything other than `elective_1` lands on
    /// [`ElectiveCategory::DEFAULT`]. In strict mode a missing or unknown
    /// value is a validation error.
    pub fn resolve(raw: Option<&str>, strict: bool) -> Result<Self, CoreError> {
        match (raw, strict) {
            (Some(s), true) => Self::from_str_value(s),
            (None, true) => Err(CoreError::Validation(format!(
                "electiveType is required. Must be one of: {}",
                VALID_ELECTIVE_TYPES.join(", ")
            ))),
            (raw, false) => Ok(raw
                .and_then(|s| Self::from_str_value(s).ok())
                .unwrap_or(Self::DEFAULT)),
        }
    }

    /// The elective type string stored in the selection ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elective1 => ELECTIVE_1,
            Self::Elective2 => ELECTIVE_2,
        }
    }

    /// Name of the catalog table holding this category's courses.
    pub fn catalog_table(&self) -> &'static str {
        match self {
            Self::Elective1 => "elective_1",
            Self::Elective2 => "elective_2",
        }
    }
}

impl fmt::Display for ElectiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
