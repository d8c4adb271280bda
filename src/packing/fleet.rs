//! Greedy-by-deadline fleet sizing.
//!
//! Cities are visited in ascending deadline order (ties: larger demand first,
//! then input order). Each city is loaded whole onto an open trip that still
//! has room for it and whose deadline bound is not earlier than the city's
//! deadline; when no open trip admits it, a new trip is opened.
//!
//! # Complexity
//!
//! O(n log n + n·t) where n = number of cities and t = trips opened.
//!
//! # Note
//!
//! This is a constructive heuristic in the spirit of best-fit decreasing bin
//! packing. Bin packing is NP-hard, so the count is not guaranteed optimal;
//! it is always at least [`lower_bound`](super::lower_bound).

use tracing::{debug, trace};

use super::trip::{Assignment, Trip};
use crate::models::{City, FleetResult, ProblemInstance};
use crate::validation::{validate, RawCity, ValidationError};

/// Rule for choosing among open trips that can take a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// The eligible trip with the least remaining capacity.
    #[default]
    BestFit,
    /// The earliest opened eligible trip.
    FirstFit,
}

impl Placement {
    /// Index of the trip to load, or `None` if no trip admits the city.
    ///
    /// Best-fit ties go to the earliest opened trip.
    pub(crate) fn select(&self, trips: &[Trip], demand: u32, deadline: u32) -> Option<usize> {
        let mut eligible = trips
            .iter()
            .enumerate()
            .filter(|(_, t)| t.admits(demand, deadline));
        match self {
            Self::BestFit => eligible
                .min_by_key(|(i, t)| (t.remaining(), *i))
                .map(|(i, _)| i),
            Self::FirstFit => eligible.next().map(|(i, _)| i),
        }
    }
}

/// Configurable fleet sizing engine.
///
/// Holds no state between calls; one sizer may be shared across threads.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{City, FleetResult, ProblemInstance};
/// use u_fleet::packing::{FleetSizer, Placement};
///
/// let problem = ProblemInstance::with_cities(
///     10,
///     vec![City::new(6, 1).unwrap(), City::new(4, 1).unwrap()],
/// )
/// .unwrap();
///
/// let sizer = FleetSizer::new().with_placement(Placement::FirstFit);
/// assert_eq!(sizer.solve(&problem), FleetResult::MinimumTrucks(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetSizer {
    placement: Placement,
}

impl FleetSizer {
    /// Creates a sizer with best-fit placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement rule.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Placement rule in use.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Computes the number of trucks needed, or `Infeasible` if some city's
    /// demand exceeds the truck capacity.
    pub fn solve(&self, problem: &ProblemInstance) -> FleetResult {
        let capacity = problem.capacity();
        if let Some((index, city)) = problem
            .cities()
            .iter()
            .enumerate()
            .find(|(_, c)| !c.fits(capacity))
        {
            debug!(
                city = index,
                demand = city.demand(),
                capacity,
                "city demand exceeds truck capacity; instance infeasible"
            );
            return FleetResult::Infeasible;
        }

        let assignment = self.assign(problem);
        debug_assert_eq!(assignment.num_served(), problem.num_cities());
        debug!(
            cities = problem.num_cities(),
            capacity,
            placement = ?self.placement,
            trips = assignment.num_trips(),
            "fleet sized"
        );
        FleetResult::MinimumTrucks(assignment.num_trips())
    }

    /// Builds the trip assignment. Every city must fit the capacity.
    pub(crate) fn assign(&self, problem: &ProblemInstance) -> Assignment {
        let cities = problem.cities();
        let mut assignment = Assignment::new();

        for index in delivery_order(cities) {
            let city = cities[index];
            let (demand, deadline) = (city.demand(), city.deadline());
            match self.placement.select(assignment.trips(), demand, deadline) {
                Some(t) => {
                    let trip = &mut assignment.trips_mut()[t];
                    trip.load(index, demand, deadline);
                    trace!(
                        city = index,
                        trip = t,
                        load = trip.total_load(),
                        bound = trip.deadline_bound(),
                        "loaded city onto open trip"
                    );
                }
                None => {
                    trace!(
                        city = index,
                        trip = assignment.num_trips(),
                        demand,
                        deadline,
                        "opened trip"
                    );
                    assignment.open_trip(Trip::open(index, demand, deadline, problem.capacity()));
                }
            }
        }

        assignment
    }
}

/// City indices sorted by ascending deadline, then descending demand.
///
/// The sort is stable, so remaining ties keep input order.
fn delivery_order(cities: &[City]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cities.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&cities[a], &cities[b]);
        a.deadline()
            .cmp(&b.deadline())
            .then_with(|| b.demand().cmp(&a.demand()))
    });
    order
}

/// Sizes the fleet with the default (best-fit) engine.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{City, FleetResult, ProblemInstance};
/// use u_fleet::packing::compute_minimum_fleet;
///
/// let empty = ProblemInstance::new(10).unwrap();
/// assert_eq!(compute_minimum_fleet(&empty), FleetResult::MinimumTrucks(0));
///
/// let too_big = ProblemInstance::new(10).unwrap().with_city(City::new(11, 1).unwrap());
/// assert_eq!(compute_minimum_fleet(&too_big), FleetResult::Infeasible);
/// ```
pub fn compute_minimum_fleet(problem: &ProblemInstance) -> FleetResult {
    FleetSizer::new().solve(problem)
}

/// Validates raw host input and sizes the fleet in one step.
///
/// # Examples
///
/// ```
/// use u_fleet::models::FleetResult;
/// use u_fleet::packing::solve_raw;
/// use u_fleet::validation::RawCity;
///
/// let cities = [RawCity::new(5.0, 3.0), RawCity::new(4.0, 2.0), RawCity::new(8.0, 4.0)];
/// assert_eq!(solve_raw(3.0, 10.0, &cities), Ok(FleetResult::MinimumTrucks(3)));
/// assert!(solve_raw(3.0, 0.0, &cities).is_err());
/// ```
pub fn solve_raw(
    count: f64,
    capacity: f64,
    cities: &[RawCity],
) -> Result<FleetResult, ValidationError> {
    let problem = validate(count, capacity, cities)?;
    Ok(compute_minimum_fleet(&problem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(capacity: u32, cities: &[(u32, u32)]) -> ProblemInstance {
        let cities = cities
            .iter()
            .map(|&(d, t)| City::new(d, t).expect("valid city"))
            .collect();
        ProblemInstance::with_cities(capacity, cities).expect("valid problem")
    }

    /// Checks capacity, deadlines and coverage of an assignment.
    fn assert_valid_assignment(p: &ProblemInstance, a: &Assignment) {
        let mut seen = vec![false; p.num_cities()];
        for trip in a.trips() {
            let load: u32 = trip.cities().iter().map(|&i| p.cities()[i].demand()).sum();
            assert_eq!(load, trip.total_load());
            assert!(load <= p.capacity());
            for &i in trip.cities() {
                assert!(!seen[i], "city {i} placed twice");
                seen[i] = true;
                assert!(trip.deadline_bound() <= p.cities()[i].deadline());
            }
        }
        assert!(seen.iter().all(|&s| s), "every city placed");
    }

    #[test]
    fn test_empty_needs_no_trucks() {
        let p = problem(10, &[]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::MinimumTrucks(0));
    }

    #[test]
    fn test_single_city() {
        let p = problem(10, &[(10, 1)]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::MinimumTrucks(1));
    }

    #[test]
    fn test_oversized_city_is_infeasible() {
        let p = problem(10, &[(3, 1), (11, 5), (2, 2)]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::Infeasible);
        let ff = FleetSizer::new().with_placement(Placement::FirstFit);
        assert_eq!(ff.solve(&p), FleetResult::Infeasible);
    }

    #[test]
    fn test_sample_scenario() {
        // Sorted: (4,d2) (5,d3) (8,d4). Each deadline is distinct, so no
        // trip's bound covers a later city: three trips.
        let p = problem(10, &[(5, 3), (4, 2), (8, 4)]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::MinimumTrucks(3));
    }

    #[test]
    fn test_same_deadline_packs_tightly() {
        // 6 | 5+5 | then 4 joins the 6: two trips, matching the lower bound.
        let p = problem(10, &[(4, 1), (5, 1), (6, 1), (5, 1)]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::MinimumTrucks(2));
        let a = FleetSizer::new().assign(&p);
        assert_valid_assignment(&p, &a);
        assert_eq!(a.trips()[0].cities(), &[2, 0]);
        assert_eq!(a.trips()[1].cities(), &[1, 3]);
    }

    #[test]
    fn test_earlier_city_cannot_join_later_trip() {
        // (3,d1) opens a trip bounded at 1; the d2 cities share a second trip.
        let p = problem(10, &[(3, 2), (3, 1), (3, 2)]);
        assert_eq!(compute_minimum_fleet(&p), FleetResult::MinimumTrucks(2));
        let a = FleetSizer::new().assign(&p);
        assert_valid_assignment(&p, &a);
        assert_eq!(a.trips()[0].cities(), &[1]);
        assert_eq!(a.trips()[1].cities(), &[0, 2]);
    }

    #[test]
    fn test_tie_break_larger_demand_first() {
        let order = delivery_order(&[
            City::new(2, 3).expect("valid"),
            City::new(9, 3).expect("valid"),
            City::new(1, 1).expect("valid"),
            City::new(9, 3).expect("valid"),
        ]);
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_placement_select() {
        let trips = vec![Trip::open(0, 5, 4, 10), Trip::open(1, 7, 4, 10)];
        // Both admit 3 units due at 4: first-fit takes trip 0, best-fit the
        // tighter trip 1.
        assert_eq!(Placement::FirstFit.select(&trips, 3, 4), Some(0));
        assert_eq!(Placement::BestFit.select(&trips, 3, 4), Some(1));
        assert_eq!(Placement::BestFit.select(&trips, 6, 4), None);
        assert_eq!(Placement::FirstFit.select(&trips, 3, 5), None);
    }

    #[test]
    fn test_best_fit_tie_goes_to_earliest() {
        let trips = vec![Trip::open(0, 5, 2, 10), Trip::open(1, 5, 2, 10)];
        assert_eq!(Placement::BestFit.select(&trips, 5, 2), Some(0));
    }

    #[test]
    fn test_deterministic() {
        let p = problem(12, &[(5, 2), (7, 2), (3, 1), (9, 3), (3, 3), (4, 2), (1, 1)]);
        let first = compute_minimum_fleet(&p);
        for _ in 0..10 {
            assert_eq!(compute_minimum_fleet(&p), first);
        }
    }

    #[test]
    fn test_input_order_does_not_change_count() {
        let a = problem(10, &[(6, 1), (4, 1), (5, 2), (5, 2), (7, 3)]);
        let b = problem(10, &[(7, 3), (5, 2), (4, 1), (5, 2), (6, 1)]);
        assert_eq!(compute_minimum_fleet(&a), compute_minimum_fleet(&b));
        assert_eq!(compute_minimum_fleet(&a), FleetResult::MinimumTrucks(3));
    }

    #[test]
    fn test_solve_raw_rejects_before_solving() {
        let cities = [RawCity::new(5.0, 0.0)];
        assert_eq!(
            solve_raw(1.0, 10.0, &cities),
            Err(ValidationError::InvalidCity {
                index: 0,
                demand: 5.0,
                deadline: 0.0
            })
        );
    }
}
