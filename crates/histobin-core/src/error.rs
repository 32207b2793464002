//! Error types for histogram binning
//!
//! Provides a unified error type for all histobin crates.

use thiserror::Error;

/// Core error type for binning and histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a constructor or mutation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An element could not be assigned to any bin during strict aggregation
    #[error("Unbinned element: the element at position {index} was not part of the binning")]
    UnbinnedElement { index: usize },

    /// A bin index outside of the binning was requested
    #[error("Bin {bin} is out of range for a binning with {bin_count} bins")]
    BinOutOfRange { bin: usize, bin_count: usize },

    /// The bin count of a categorical binning cannot be changed
    #[error("The bin count of a categorical histogram is fixed")]
    FixedBinning,

    /// A histogram listener failed while handling an event
    #[error("Listener error: {0}")]
    Listener(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a bin count that is not positive
    pub fn invalid_bin_count(bin_count: usize) -> Self {
        Self::InvalidArgument(format!(
            "The bin count must be positive, but is {bin_count}"
        ))
    }

    /// Check that a bin count is positive
    pub fn check_bin_count(bin_count: usize) -> Result<()> {
        if bin_count == 0 {
            return Err(Self::invalid_bin_count(bin_count));
        }
        Ok(())
    }

    /// Check that a numeric range is finite and ordered
    pub fn check_range(min: f64, max: f64) -> Result<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Self::InvalidArgument(format!(
                "The range [{min}, {max}] must be finite"
            )));
        }
        if min > max {
            return Err(Self::InvalidArgument(format!(
                "The range minimum {min} is larger than the maximum {max}"
            )));
        }
        Ok(())
    }
}
