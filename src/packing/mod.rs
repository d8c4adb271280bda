//! Fleet sizing engine.
//!
//! - [`compute_minimum_fleet`] — Greedy-by-deadline best-fit packing, O(n log n + n·t)
//! - [`FleetSizer`] — The same engine with a configurable [`Placement`] rule
//! - [`lower_bound`] — Capacity lower bound on the trip count
//! - [`solve_raw`] — Validation followed by sizing

mod bounds;
mod fleet;
mod trip;

pub use bounds::lower_bound;
pub use fleet::{compute_minimum_fleet, solve_raw, FleetSizer, Placement};
