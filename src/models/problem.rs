//! Fleet sizing problem instance.

use serde::{Deserialize, Serialize};

use super::City;

/// A validated fleet sizing problem: a truck capacity and the cities to serve.
///
/// Instances are immutable values. Builder methods consume `self` and return a
/// new instance, so a host can rebuild the instance on every edit without
/// sharing mutable state between calls.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{City, ProblemInstance};
///
/// let problem = ProblemInstance::new(10)
///     .unwrap()
///     .with_city(City::new(5, 3).unwrap())
///     .with_city(City::new(4, 2).unwrap());
/// assert_eq!(problem.num_cities(), 2);
/// assert_eq!(problem.total_demand(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProblemRepr")]
pub struct ProblemInstance {
    capacity: u32,
    cities: Vec<City>,
}

impl ProblemInstance {
    /// Creates an instance with no cities.
    ///
    /// Returns `None` if `capacity` is zero.
    pub fn new(capacity: u32) -> Option<Self> {
        Self::with_cities(capacity, Vec::new())
    }

    /// Creates an instance from a capacity and a list of cities.
    ///
    /// Returns `None` if `capacity` is zero.
    pub fn with_cities(capacity: u32, cities: Vec<City>) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self { capacity, cities })
    }

    /// Returns a copy of this instance with `city` appended.
    pub fn with_city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    /// Returns a copy of this instance with a different capacity.
    ///
    /// Returns `None` if `capacity` is zero.
    pub fn with_capacity(self, capacity: u32) -> Option<Self> {
        Self::with_cities(capacity, self.cities)
    }

    /// Maximum cargo a single trip can carry.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cities in input order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if there are no cities to serve.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Sum of all city demands.
    pub fn total_demand(&self) -> u64 {
        self.cities.iter().map(|c| u64::from(c.demand())).sum()
    }

    /// Largest single city demand, if any.
    pub fn max_demand(&self) -> Option<u32> {
        self.cities.iter().map(City::demand).max()
    }
}

#[derive(Deserialize)]
struct ProblemRepr {
    capacity: u32,
    cities: Vec<City>,
}

impl TryFrom<ProblemRepr> for ProblemInstance {
    type Error = &'static str;

    fn try_from(repr: ProblemRepr) -> Result<Self, Self::Error> {
        ProblemInstance::with_cities(repr.capacity, repr.cities).ok_or("capacity must be positive")
    }
}
