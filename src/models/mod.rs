//! Domain model types for fleet sizing.
//!
//! Provides the core values: cities with a demand and a deadline, an
//! immutable problem instance tying them to a truck capacity, and the
//! tagged result the engine returns.

mod city;
mod problem;
mod result;

pub use city::City;
pub use problem::ProblemInstance;
pub use result::FleetResult;
