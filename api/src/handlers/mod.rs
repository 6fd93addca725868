//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod cities;
pub mod files;
pub mod points_of_interest;

pub use cities::{get_city, list_cities};
pub use files::{get_file, upload_file};
pub use points_of_interest::{
    create_point_of_interest, delete_point_of_interest, get_point_of_interest,
    list_points_of_interest, partially_update_point_of_interest, update_point_of_interest,
};
