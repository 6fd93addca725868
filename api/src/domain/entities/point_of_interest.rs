//! Point of interest domain entity
//!
//! Point ids are unique across the whole dataset, not per city.

use serde::{Deserialize, Serialize};

use super::CityId;
use crate::error::DomainError;

pub const NAME_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Unique identifier for a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointOfInterestId(pub i32);

impl PointOfInterestId {
    /// Next id after the current global maximum (or the first id when empty)
    pub fn next_after(max: Option<PointOfInterestId>) -> Result<Self, DomainError> {
        match max {
            None => Ok(Self(1)),
            Some(id) => id.0.checked_add(1).map(Self).ok_or_else(|| {
                DomainError::Internal(format!("Point of interest ids exhausted after {}", id))
            }),
        }
    }
}

impl From<i32> for PointOfInterestId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PointOfInterestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named place belonging to exactly one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub id: PointOfInterestId,
    pub city_id: CityId,
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterest {
    /// Stage the mutable fields for a partial update
    pub fn to_update(&self) -> PointOfInterestForUpdate {
        PointOfInterestForUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Full replace of the mutable fields
    pub fn apply_update(&mut self, update: &PointOfInterestForUpdate) {
        self.name = update.name.clone();
        self.description = update.description.clone();
    }
}

/// Data needed to create a new point of interest
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterestForCreation {
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterestForCreation {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.name, self.description.as_deref())
    }
}

/// Replacement values for an existing point of interest
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterestForUpdate {
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterestForUpdate {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.name, self.description.as_deref())
    }
}

/// Check name/description constraints, reporting every violation at once
fn validate_fields(name: &str, description: Option<&str>) -> Result<(), DomainError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("You should provide a name value.".to_string());
    } else if name.chars().count() > NAME_MAX_LENGTH {
        errors.push(format!(
            "The field Name must be a string with a maximum length of '{}'.",
            NAME_MAX_LENGTH
        ));
    }

    if description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LENGTH) {
        errors.push(format!(
            "The field Description must be a string with a maximum length of '{}'.",
            DESCRIPTION_MAX_LENGTH
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation(name: &str, description: Option<&str>) -> PointOfInterestForCreation {
        PointOfInterestForCreation {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn next_id_after_max() {
        assert_eq!(
            PointOfInterestId::next_after(Some(PointOfInterestId(6))).unwrap(),
            PointOfInterestId(7)
        );
        assert_eq!(
            PointOfInterestId::next_after(None).unwrap(),
            PointOfInterestId(1)
        );
    }

    #[test]
    fn next_id_at_i32_max_is_an_error() {
        let result = PointOfInterestId::next_after(Some(PointOfInterestId(i32::MAX)));
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }

    #[test]
    fn valid_creation_passes() {
        assert!(creation("Central Park", Some("A park.")).validate().is_ok());
        assert!(creation("Central Park", None).validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = creation("   ", None).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("provide a name")));

        assert!(creation("", None).validate().is_err());
    }

    #[test]
    fn name_length_boundary() {
        let at_limit = "a".repeat(NAME_MAX_LENGTH);
        let over_limit = "a".repeat(NAME_MAX_LENGTH + 1);

        assert!(creation(&at_limit, None).validate().is_ok());
        assert!(creation(&over_limit, None).validate().is_err());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 50 two-byte characters is still within the limit
        let name = "é".repeat(NAME_MAX_LENGTH);
        assert!(creation(&name, None).validate().is_ok());
    }

    #[test]
    fn description_length_boundary() {
        let at_limit = "d".repeat(DESCRIPTION_MAX_LENGTH);
        let over_limit = "d".repeat(DESCRIPTION_MAX_LENGTH + 1);

        assert!(creation("x", Some(&at_limit)).validate().is_ok());

        let err = creation("x", Some(&over_limit)).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("Description")));
    }

    #[test]
    fn all_violations_are_reported() {
        let err = creation("", Some(&"d".repeat(DESCRIPTION_MAX_LENGTH + 1)))
            .validate()
            .unwrap_err();

        let DomainError::Validation(message) = err else {
            panic!("expected validation error");
        };
        assert!(message.contains("name value"));
        assert!(message.contains("Description"));
    }

    #[test]
    fn stage_and_apply_update() {
        let mut point = PointOfInterest {
            id: PointOfInterestId(1),
            city_id: CityId(1),
            name: "Central Park".to_string(),
            description: Some("Big.".to_string()),
        };

        let mut staged = point.to_update();
        assert_eq!(staged.name, "Central Park");

        staged.name = "Bryant Park".to_string();
        staged.description = None;
        point.apply_update(&staged);

        assert_eq!(point.id, PointOfInterestId(1));
        assert_eq!(point.name, "Bryant Park");
        assert!(point.description.is_none());
    }
}
