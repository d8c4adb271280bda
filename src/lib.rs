//! # u-fleet
//!
//! Deadline-aware fleet sizing: given a truck capacity and cities with a
//! cargo demand and a delivery deadline, computes how many capacity-limited
//! trips are needed, or reports that no assignment exists.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, ProblemInstance, FleetResult)
//! - [`validation`] — Raw input validation into a problem instance
//! - [`packing`] — Greedy-by-deadline best-fit packing engine and bounds
//!
//! ## Features
//!
//! - `wasm` — wasm-bindgen entry points for browser hosts
//! - `ffi` — C ABI exchanging JSON strings
//!
//! ## Example
//!
//! ```
//! use u_fleet::packing::compute_minimum_fleet;
//! use u_fleet::validation::{validate, RawCity};
//!
//! let cities = [RawCity::new(5.0, 3.0), RawCity::new(4.0, 2.0), RawCity::new(8.0, 4.0)];
//! let problem = validate(3.0, 10.0, &cities).unwrap();
//! assert_eq!(compute_minimum_fleet(&problem).to_string(), "3 trucks needed");
//! ```

pub mod models;
pub mod packing;
pub mod validation;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;
