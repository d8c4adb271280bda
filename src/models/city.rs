//! City type with demand and deadline.

use serde::{Deserialize, Serialize};

/// A delivery destination with a cargo demand and a delivery deadline.
///
/// Both fields are strictly positive. The deadline is a discrete time slot:
/// the trip carrying this city's cargo must complete at or before it.
///
/// # Examples
///
/// ```
/// use u_fleet::models::City;
///
/// let c = City::new(5, 3).unwrap();
/// assert_eq!(c.demand(), 5);
/// assert_eq!(c.deadline(), 3);
///
/// assert!(City::new(0, 3).is_none());
/// assert!(City::new(5, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CityRepr")]
pub struct City {
    demand: u32,
    deadline: u32,
}

impl City {
    /// Creates a city.
    ///
    /// Returns `None` if either `demand` or `deadline` is zero.
    pub fn new(demand: u32, deadline: u32) -> Option<Self> {
        if demand == 0 || deadline == 0 {
            return None;
        }
        Some(Self { demand, deadline })
    }

    /// Units of cargo to deliver.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Latest time slot by which the cargo must arrive.
    pub fn deadline(&self) -> u32 {
        self.deadline
    }

    /// Returns `true` if this city's whole demand fits in one trip.
    pub fn fits(&self, capacity: u32) -> bool {
        self.demand <= capacity
    }
}

#[derive(Deserialize)]
struct CityRepr {
    demand: u32,
    deadline: u32,
}

impl TryFrom<CityRepr> for City {
    type Error = String;

    fn try_from(repr: CityRepr) -> Result<Self, Self::Error> {
        City::new(repr.demand, repr.deadline).ok_or_else(|| {
            format!(
                "city demand and deadline must be positive, got demand={} deadline={}",
                repr.demand, repr.deadline
            )
        })
    }
}
