//! Sample dataset
//!
//! Both stores start from these three cities and six points of interest.

use crate::domain::entities::{City, CityId, PointOfInterest, PointOfInterestId};

const CITIES: &[(i32, &str, &str)] = &[
    (1, "New York City", "The one with that big park."),
    (
        2,
        "Antwerp",
        "The one with the cathedral that was never really finished.",
    ),
    (3, "Paris", "The one with that big tower."),
];

const POINTS_OF_INTEREST: &[(i32, i32, &str, &str)] = &[
    (
        1,
        1,
        "Central Park",
        "The most visited urban park in the United States.",
    ),
    (
        2,
        1,
        "Empire State Building",
        "A 102-story skyscraper located in Midtown Manhattan.",
    ),
    (
        3,
        2,
        "Cathedral of Our Lady",
        "A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.",
    ),
    (
        4,
        2,
        "Antwerp Central Station",
        "The the finest example of railway architecture in Belgium.",
    ),
    (
        5,
        3,
        "Eiffel Tower",
        "A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.",
    ),
    (6, 3, "The Louvre", "The world's largest museum."),
];

/// Seed cities in id order, each with its points of interest loaded
pub fn sample_cities() -> Vec<City> {
    CITIES
        .iter()
        .map(|&(id, name, description)| {
            let mut city = City::new(CityId(id), name, Some(description));
            city.points_of_interest = POINTS_OF_INTEREST
                .iter()
                .filter(|&&(_, city_id, _, _)| city_id == id)
                .map(|&(poi_id, city_id, name, description)| PointOfInterest {
                    id: PointOfInterestId(poi_id),
                    city_id: CityId(city_id),
                    name: name.to_string(),
                    description: Some(description.to_string()),
                })
                .collect();
            city
        })
        .collect()
}
