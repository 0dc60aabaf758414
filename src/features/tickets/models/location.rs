use std::fmt;

use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::shared::validation::LOCATION_ID_REGEX;

/// Identifier of a business location (a bovine or porcine facility).
///
/// Always positive. Every location owns an independent ticket sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationId(i32);

impl LocationId {
    pub fn new(id: i32) -> Result<Self> {
        if id <= 0 {
            return Err(AppError::Validation(format!(
                "Location id must be a positive integer, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Parse a location id from request text
    pub fn parse(raw: &str) -> Result<Self> {
        if !LOCATION_ID_REGEX.is_match(raw) {
            return Err(AppError::Validation(format!(
                "Invalid location id '{}': expected a positive integer",
                raw
            )));
        }

        let id = raw
            .parse::<i32>()
            .map_err(|e| AppError::Validation(format!("Invalid location id '{}': {}", raw, e)))?;

        Self::new(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
