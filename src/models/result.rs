//! Fleet sizing outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of sizing a fleet for a problem instance.
///
/// `Infeasible` is a legitimate computed answer, distinct from
/// `MinimumTrucks(0)` (which is the answer for an instance with no cities).
///
/// # Examples
///
/// ```
/// use u_fleet::models::FleetResult;
///
/// assert_eq!(FleetResult::MinimumTrucks(3).to_string(), "3 trucks needed");
/// assert_eq!(FleetResult::Infeasible.to_string(), "Impossible");
/// assert_eq!(FleetResult::MinimumTrucks(0).trucks(), Some(0));
/// assert_eq!(FleetResult::Infeasible.trucks(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ResultRepr", into = "ResultRepr")]
pub enum FleetResult {
    /// All cities can be served with this many trips.
    MinimumTrucks(usize),
    /// No assignment satisfies capacity and deadlines.
    Infeasible,
}

impl FleetResult {
    /// Truck count, or `None` if infeasible.
    pub fn trucks(&self) -> Option<usize> {
        match self {
            Self::MinimumTrucks(n) => Some(*n),
            Self::Infeasible => None,
        }
    }

    /// Returns `true` unless the instance was infeasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::MinimumTrucks(_))
    }
}

impl fmt::Display for FleetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinimumTrucks(n) => write!(f, "{n} trucks needed"),
            Self::Infeasible => f.write_str("Impossible"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ResultRepr {
    MinimumTrucks { trucks: usize },
    Infeasible,
}

impl From<ResultRepr> for FleetResult {
    fn from(repr: ResultRepr) -> Self {
        match repr {
            ResultRepr::MinimumTrucks { trucks } => Self::MinimumTrucks(trucks),
            ResultRepr::Infeasible => Self::Infeasible,
        }
    }
}

impl From<FleetResult> for ResultRepr {
    fn from(result: FleetResult) -> Self {
        match result {
            FleetResult::MinimumTrucks(trucks) => Self::MinimumTrucks { trucks },
            FleetResult::Infeasible => Self::Infeasible,
        }
    }
}
