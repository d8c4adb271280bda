//! Trip and assignment scratch state for the packing engine.

/// One truck's delivery run.
///
/// Tracks the cities loaded onto it, the cargo already committed, and the
/// deadline bound: the earliest deadline among its cities, which is when
/// the trip must complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Trip {
    cities: Vec<usize>,
    load: u32,
    capacity: u32,
    deadline_bound: u32,
}

impl Trip {
    /// Opens a trip carrying a single city.
    ///
    /// The caller guarantees `demand <= capacity`.
    pub(crate) fn open(city: usize, demand: u32, deadline: u32, capacity: u32) -> Self {
        Self {
            cities: vec![city],
            load: demand,
            capacity,
            deadline_bound: deadline,
        }
    }

    /// Returns `true` if `demand` fits and loading a city with `deadline`
    /// does not break the trip's committed deadline.
    pub(crate) fn admits(&self, demand: u32, deadline: u32) -> bool {
        self.remaining() >= demand && self.deadline_bound >= deadline
    }

    /// Loads a city. The caller checks [`Trip::admits`] first.
    pub(crate) fn load(&mut self, city: usize, demand: u32, deadline: u32) {
        debug_assert!(self.remaining() >= demand);
        self.cities.push(city);
        self.load += demand;
        self.deadline_bound = self.deadline_bound.min(deadline);
    }

    /// Unused capacity.
    pub(crate) fn remaining(&self) -> u32 {
        self.capacity - self.load
    }

    /// Committed cargo.
    pub(crate) fn total_load(&self) -> u32 {
        self.load
    }

    /// Earliest deadline among loaded cities.
    pub(crate) fn deadline_bound(&self) -> u32 {
        self.deadline_bound
    }

    /// Indices (into the problem's city list) of loaded cities.
    pub(crate) fn cities(&self) -> &[usize] {
        &self.cities
    }
}

/// A grouping of cities into trips, built during one engine run.
#[derive(Debug, Clone, Default)]
pub(crate) struct Assignment {
    trips: Vec<Trip>,
}

impl Assignment {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub(crate) fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub(crate) fn trips_mut(&mut self) -> &mut [Trip] {
        &mut self.trips
    }

    /// Number of trips opened (trucks used).
    pub(crate) fn num_trips(&self) -> usize {
        self.trips.len()
    }

    /// Number of cities placed across all trips.
    pub(crate) fn num_served(&self) -> usize {
        self.trips.iter().map(|t| t.cities().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_open() {
        let t = Trip::open(2, 4, 2, 10);
        assert_eq!(t.cities(), &[2]);
        assert_eq!(t.total_load(), 4);
        assert_eq!(t.remaining(), 6);
        assert_eq!(t.deadline_bound(), 2);
    }

    #[test]
    fn test_trip_admits_capacity() {
        let t = Trip::open(0, 7, 5, 10);
        assert!(t.admits(3, 5));
        assert!(!t.admits(4, 5));
    }

    #[test]
    fn test_trip_admits_deadline_bound() {
        let t = Trip::open(0, 2, 3, 10);
        // Bound 3 covers cities due at 3 or earlier.
        assert!(t.admits(2, 3));
        assert!(t.admits(2, 1));
        assert!(!t.admits(2, 4));
    }

    #[test]
    fn test_trip_load_tightens_bound() {
        let mut t = Trip::open(0, 2, 5, 10);
        t.load(1, 3, 2);
        assert_eq!(t.cities(), &[0, 1]);
        assert_eq!(t.total_load(), 5);
        assert_eq!(t.deadline_bound(), 2);
    }

    #[test]
    fn test_assignment_counts() {
        let mut a = Assignment::new();
        assert_eq!(a.num_trips(), 0);
        a.open_trip(Trip::open(0, 5, 1, 10));
        a.open_trip(Trip::open(1, 5, 2, 10));
        a.trips_mut()[0].load(2, 5, 1);
        assert_eq!(a.num_trips(), 2);
        assert_eq!(a.num_served(), 3);
        assert_eq!(a.trips()[0].remaining(), 0);
    }
}
