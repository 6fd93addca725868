//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `seed`: The sample dataset every store starts from

pub mod entities;
pub mod ports;
pub mod seed;
