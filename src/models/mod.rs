//! API-Football model types.

mod country;
mod fixture;
mod league;
mod team;

pub use country::*;
pub use fixture::*;
pub use league::*;
pub use team::*;
