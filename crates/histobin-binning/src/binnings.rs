//! Construction of binnings from element collections
//!
//! These are stateless helpers: range inference for numeric binnings and
//! first-seen key ordering for categorical ones.

use crate::general::GeneralBinning;
use crate::number::{NumberBinning, EPSILON};
use histobin_core::{Error, NumericKey, Result};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

pub use crate::rules::compute_default_bin_count;

/// Create an equal-width binning over the numeric keys of the elements
///
/// The range is resolved with [`compute_range`]: explicit bounds are used
/// as given, a single bound is widened by one unit, and without bounds the
/// extent of the keys is used.
pub fn create_number_binning<'a, T, K, F, I>(
    elements: I,
    key: F,
    bin_count: usize,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<NumberBinning<T>>
where
    T: ?Sized + 'a,
    K: NumericKey,
    F: Fn(&T) -> K + 'static,
    I: IntoIterator<Item = &'a T>,
{
    Error::check_bin_count(bin_count)?;
    let value_fn = move |element: &T| key(element).to_key();
    let (min, max) = compute_range(elements.into_iter().map(&value_fn), min, max);
    NumberBinning::from_shared(Rc::new(value_fn), min, max, bin_count)
}

/// Create a categorical binning with one bin per distinct key
pub fn create_general_binning<'a, T, K, F, I>(elements: I, key: F) -> GeneralBinning<T>
where
    T: ?Sized + 'a,
    K: Hash + Eq + fmt::Display + 'static,
    F: Fn(&T) -> K + 'static,
    I: IntoIterator<Item = &'a T>,
{
    GeneralBinning::new(elements, key)
}

/// Resolve the range of a numeric binning
///
/// - Both bounds given: they are used directly.
/// - One bound given: the other one is derived as `bound ± 1.0`.
/// - No bound given: the minimum and maximum of the finite values. `NaN`
///   and infinite values are ignored and stay unbinned. Without any usable
///   value the range is `[0, 1]`.
pub fn compute_range<I>(values: I, min: Option<f64>, max: Option<f64>) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, min + 1.0),
        (None, Some(max)) => (max - 1.0, max),
        (None, None) => values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .unwrap_or((0.0, 1.0)),
    }
}

/// Whether a range is narrower than the folding tolerance of numeric bins
pub fn is_empty_range(min: f64, max: f64) -> bool {
    max - min < EPSILON
}
