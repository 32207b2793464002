//! Equal-width binning over a numeric key

use crate::traits::Binning;
use histobin_core::{Error, Result};
use std::fmt;
use std::rc::Rc;

/// Tolerance above the maximum that is still folded into the last bin
pub const EPSILON: f64 = 1e-6;

/// Shared function extracting the numeric key of an element
pub type KeyFn<T> = Rc<dyn Fn(&T) -> f64>;

/// Binning that splits `[min, max]` into equal-width bins
///
/// All bins are half-open `[left, right)` except the last one, which also
/// contains `max`. Values in `[max, max + EPSILON)` are counted in the last
/// bin as well, absorbing floating-point overshoot at the upper boundary.
pub struct NumberBinning<T: ?Sized> {
    key: KeyFn<T>,
    min: f64,
    max: f64,
    bin_count: usize,
}

impl<T: ?Sized> NumberBinning<T> {
    /// Create a new numeric binning
    ///
    /// Fails if `bin_count` is zero, if a bound is not finite, or if
    /// `min > max`. `min == max` is allowed and yields a degenerate binning
    /// where only the value itself is classified (into bin 0).
    pub fn new<F>(key: F, min: f64, max: f64, bin_count: usize) -> Result<Self>
    where
        F: Fn(&T) -> f64 + 'static,
    {
        Self::from_shared(Rc::new(key), min, max, bin_count)
    }

    /// Create a new numeric binning from an already shared key extractor
    pub fn from_shared(key: KeyFn<T>, min: f64, max: f64, bin_count: usize) -> Result<Self> {
        Error::check_bin_count(bin_count)?;
        Error::check_range(min, max)?;
        Ok(Self {
            key,
            min,
            max,
            bin_count,
        })
    }

    /// Create a binning with the same range and key but a different bin count
    pub fn with_bin_count(&self, bin_count: usize) -> Result<Self> {
        Self::from_shared(Rc::clone(&self.key), self.min, self.max, bin_count)
    }

    /// Get the lower bound of the range
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the upper bound of the range
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the width of a single bin
    pub fn step(&self) -> f64 {
        (self.max - self.min) / self.bin_count as f64
    }

    /// Get the lower boundary of the given bin
    pub fn bin_min(&self, bin: usize) -> f64 {
        self.min + self.step() * bin as f64
    }

    /// Get the upper boundary of the given bin
    pub fn bin_max(&self, bin: usize) -> f64 {
        let step = self.step();
        self.min + step * bin as f64 + step
    }

    /// Extract the numeric key of an element
    pub fn key(&self, element: &T) -> f64 {
        (self.key)(element)
    }

    /// Get the shared key extractor
    pub fn key_fn(&self) -> &KeyFn<T> {
        &self.key
    }

    /// Whether the range is narrower than [`EPSILON`]
    pub fn is_empty_range(&self) -> bool {
        self.max - self.min < EPSILON
    }

    /// Compute the bin of a raw key value
    pub fn bin_of_value(&self, value: f64) -> Option<usize> {
        let folds_into_last = value >= self.max && value < self.max + EPSILON;
        if self.max == self.min {
            return folds_into_last.then_some(0);
        }
        if folds_into_last {
            return Some(self.bin_count - 1);
        }
        let alpha = (value - self.min) / (self.max - self.min);
        let scaled = (alpha * self.bin_count as f64).floor();
        if !scaled.is_finite() || scaled < 0.0 {
            return None;
        }
        let bin = scaled as usize;
        if bin < self.bin_count {
            Some(bin)
        } else if value >= self.min && value < self.max {
            // rounding pushed an in-range value onto the upper edge
            Some(self.bin_count - 1)
        } else {
            None
        }
    }
}

impl<T: ?Sized> Binning<T> for NumberBinning<T> {
    fn bin_count(&self) -> usize {
        self.bin_count
    }

    fn compute_bin(&self, element: &T) -> Option<usize> {
        self.bin_of_value(self.key(element))
    }
}

impl<T: ?Sized> Clone for NumberBinning<T> {
    fn clone(&self) -> Self {
        Self {
            key: Rc::clone(&self.key),
            min: self.min,
            max: self.max,
            bin_count: self.bin_count,
        }
    }
}

impl<T: ?Sized> fmt::Debug for NumberBinning<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberBinning")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("bin_count", &self.bin_count)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> fmt::Display for NumberBinning<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumberBinning({} bins, range=[{:.3}, {:.3}])",
            self.bin_count, self.min, self.max
        )
    }
}
