mod accept;
mod representation;

pub use accept::negotiate_representation;
pub use representation::{Negotiated, Representation};
