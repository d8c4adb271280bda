//! Raw host input and its conversion to a problem instance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ValidationError;
use crate::models::{City, ProblemInstance};

/// A city as typed into the host form, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCity {
    /// Demand as entered.
    pub demand: f64,
    /// Deadline as entered.
    pub deadline: f64,
}

impl RawCity {
    /// Creates a raw city.
    pub fn new(demand: f64, deadline: f64) -> Self {
        Self { demand, deadline }
    }
}

/// A whole form submission, before validation.
///
/// # Examples
///
/// ```
/// use u_fleet::validation::RawProblem;
///
/// let raw: RawProblem = serde_json::from_str(
///     r#"{"count":1,"capacity":10,"cities":[{"demand":5,"deadline":3}]}"#,
/// )
/// .unwrap();
/// let problem = raw.validate().unwrap();
/// assert_eq!(problem.num_cities(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProblem {
    /// Declared number of cities.
    pub count: f64,
    /// Truck capacity.
    pub capacity: f64,
    /// Cities in form order.
    pub cities: Vec<RawCity>,
}

impl RawProblem {
    /// Validates this submission. See [`validate`].
    pub fn validate(&self) -> Result<ProblemInstance, ValidationError> {
        validate(self.count, self.capacity, &self.cities)
    }
}

/// Turns raw numeric input into a [`ProblemInstance`].
///
/// Checks run in order: count, capacity, then each city. The first failure
/// is returned and no partial instance is produced. Values are never clamped
/// or rounded; a fractional or non-positive value is rejected.
///
/// A count of zero with no cities is valid.
///
/// # Examples
///
/// ```
/// use u_fleet::validation::{validate, RawCity, ValidationError};
///
/// let cities = [RawCity::new(5.0, 3.0), RawCity::new(4.0, 2.0)];
/// let problem = validate(2.0, 10.0, &cities).unwrap();
/// assert_eq!(problem.capacity(), 10);
///
/// assert_eq!(
///     validate(2.0, -1.0, &cities),
///     Err(ValidationError::InvalidCapacity { value: -1.0 })
/// );
/// ```
pub fn validate(
    count: f64,
    capacity: f64,
    cities: &[RawCity],
) -> Result<ProblemInstance, ValidationError> {
    let result = check(count, capacity, cities);
    if let Err(err) = &result {
        debug!(error = %err, "rejected problem input");
    }
    result
}

fn check(count: f64, capacity: f64, cities: &[RawCity]) -> Result<ProblemInstance, ValidationError> {
    let declared = whole(count)
        .and_then(|c| usize::try_from(c).ok())
        .ok_or(ValidationError::InvalidCount { value: count })?;
    if declared != cities.len() {
        return Err(ValidationError::CountMismatch {
            declared,
            supplied: cities.len(),
        });
    }

    let capacity_value = positive(capacity).ok_or(ValidationError::InvalidCapacity { value: capacity })?;

    let cities = cities
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            positive(raw.demand)
                .zip(positive(raw.deadline))
                .and_then(|(demand, deadline)| City::new(demand, deadline))
                .ok_or(ValidationError::InvalidCity {
                    index,
                    demand: raw.demand,
                    deadline: raw.deadline,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ProblemInstance::with_cities(capacity_value, cities)
        .ok_or(ValidationError::InvalidCapacity { value: capacity })
}

/// A finite, non-negative, integral value within `u32` range.
fn whole(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Like [`whole`], but also rejects zero.
fn positive(value: f64) -> Option<u32> {
    whole(value).filter(|&v| v > 0)
}
