use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationErrors;

/// Oldest model year accepted for a vehicle record.
pub const MIN_VEHICLE_YEAR: i32 = 1950;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Validated vehicle payload; the store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDraft {
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleDraft {
    /// Validates raw request fields, collecting every violation.
    ///
    /// Accepted years run up to next year's models, mirroring how dealers
    /// list them.
    pub fn parse(name: &str, make: &str, model: &str, year: i32) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let max_year = Utc::now().year() + 1;

        if name.len() < 3 {
            errors.push("The vehicle name is required and must be at least 3 characters");
        }
        if make.len() < 2 {
            errors.push("The vehicle make is required and must be at least 2 characters");
        }
        if model.len() < 2 {
            errors.push("The vehicle model is required and must be at least 2 characters");
        }
        if !(MIN_VEHICLE_YEAR..=max_year).contains(&year) {
            errors.push(format!(
                "The vehicle year must be between {MIN_VEHICLE_YEAR} and {max_year}"
            ));
        }

        errors.into_result(Self {
            name: name.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
        })
    }
}
