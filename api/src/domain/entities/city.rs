//! City domain entity
//!
//! A city owns an ordered list of points of interest. Cities are read-only
//! through the API; only their points change.

use serde::{Deserialize, Serialize};

use super::PointOfInterest;

/// Unique identifier for a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub i32);

impl From<i32> for CityId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city and, when requested, its points of interest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub description: Option<String>,
    /// Empty unless the city was loaded with its points of interest
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.map(str::to_string),
            points_of_interest: Vec::new(),
        }
    }

    pub fn number_of_points_of_interest(&self) -> usize {
        self.points_of_interest.len()
    }

    /// Copy of this city with the points collection left unloaded
    pub fn without_points_of_interest(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            points_of_interest: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PointOfInterestId;

    #[test]
    fn number_of_points_follows_collection() {
        let mut city = City::new(CityId(1), "New York City", None);
        assert_eq!(city.number_of_points_of_interest(), 0);

        city.points_of_interest.push(PointOfInterest {
            id: PointOfInterestId(1),
            city_id: CityId(1),
            name: "Central Park".to_string(),
            description: None,
        });

        assert_eq!(city.number_of_points_of_interest(), 1);
    }

    #[test]
    fn without_points_keeps_identity() {
        let mut city = City::new(CityId(3), "Paris", Some("The one with that big tower."));
        city.points_of_interest.push(PointOfInterest {
            id: PointOfInterestId(5),
            city_id: CityId(3),
            name: "Eiffel Tower".to_string(),
            description: None,
        });

        let bare = city.without_points_of_interest();

        assert_eq!(bare.id, CityId(3));
        assert_eq!(bare.name, "Paris");
        assert_eq!(bare.description.as_deref(), Some("The one with that big tower."));
        assert!(bare.points_of_interest.is_empty());
    }

    #[test]
    fn city_id_display() {
        assert_eq!(CityId(42).to_string(), "42");
    }
}
