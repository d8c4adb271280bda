//! Lower bounds on the number of trips.

use crate::models::ProblemInstance;

/// Capacity lower bound: `ceil(total_demand / capacity)`.
///
/// No assignment can use fewer trips, whatever the deadlines. Returns 0 for
/// an instance with no cities.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{City, ProblemInstance};
/// use u_fleet::packing::lower_bound;
///
/// let p = ProblemInstance::with_cities(
///     10,
///     vec![City::new(5, 3).unwrap(), City::new(4, 2).unwrap(), City::new(8, 4).unwrap()],
/// )
/// .unwrap();
/// assert_eq!(lower_bound(&p), 2);
/// ```
pub fn lower_bound(problem: &ProblemInstance) -> usize {
    let capacity = u64::from(problem.capacity());
    let bound = problem.total_demand().div_ceil(capacity);
    usize::try_from(bound).unwrap_or(usize::MAX)
}
