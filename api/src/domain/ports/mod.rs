//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod mail;
pub mod repositories;

pub use mail::MailService;
pub use repositories::CityInfoRepository;
