//! Validation error taxonomy.

use thiserror::Error;

/// Reasons raw input cannot become a [`ProblemInstance`](crate::models::ProblemInstance).
///
/// Raw values are carried as received so the host can echo them back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// City count is negative, fractional, non-finite or too large.
    #[error("number of cities must be a non-negative integer, got {value}")]
    InvalidCount {
        /// Count as supplied.
        value: f64,
    },

    /// City count does not match the number of cities supplied.
    #[error("expected {declared} cities but {supplied} were supplied")]
    CountMismatch {
        /// Count as declared.
        declared: usize,
        /// Length of the city list.
        supplied: usize,
    },

    /// Truck capacity is not a positive integer.
    #[error("truck capacity must be a positive integer, got {value}")]
    InvalidCapacity {
        /// Capacity as supplied.
        value: f64,
    },

    /// A city's demand or deadline is not a positive integer.
    #[error(
        "city {} demand and deadline must be positive integers, got demand={demand} deadline={deadline}",
        .index + 1
    )]
    InvalidCity {
        /// Zero-based index of the first offending city.
        index: usize,
        /// Demand as supplied.
        demand: f64,
        /// Deadline as supplied.
        deadline: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidCapacity { value: 0.0 }.to_string(),
            "truck capacity must be a positive integer, got 0"
        );
        assert_eq!(
            ValidationError::InvalidCity {
                index: 1,
                demand: 4.0,
                deadline: -1.0
            }
            .to_string(),
            "city 2 demand and deadline must be positive integers, got demand=4 deadline=-1"
        );
        assert_eq!(
            ValidationError::CountMismatch {
                declared: 3,
                supplied: 2
            }
            .to_string(),
            "expected 3 cities but 2 were supplied"
        );
    }
}
