//! Core trait for mapping elements to bins

use histobin_core::{Error, Result};

/// Trait for assigning elements to a fixed number of bins
///
/// A binning classifies single elements with [`Binning::compute_bin`] and
/// aggregates whole collections with [`Binning::compute`]. The number of
/// bins never changes after construction.
pub trait Binning<T: ?Sized> {
    /// Get the number of bins
    fn bin_count(&self) -> usize;

    /// Compute the bin of the given element
    ///
    /// Returns `None` if the element cannot be classified. A returned index
    /// is always smaller than [`Binning::bin_count`].
    fn compute_bin(&self, element: &T) -> Option<usize>;

    /// Check whether the given element falls into any bin
    fn contains(&self, element: &T) -> bool {
        self.compute_bin(element).is_some()
    }

    /// Count the elements of each bin
    ///
    /// The result always has [`Binning::bin_count`] entries. Elements that
    /// cannot be classified are skipped when `ignore_invalid` is `true`.
    /// Otherwise the first such element fails the whole aggregation with
    /// [`Error::UnbinnedElement`].
    fn compute<'a, I>(&self, elements: I, ignore_invalid: bool) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        Self: Sized,
    {
        let mut counts = vec![0; self.bin_count()];
        for (index, element) in elements.into_iter().enumerate() {
            match self.compute_bin(element) {
                Some(bin) => counts[bin] += 1,
                None if ignore_invalid => {}
                None => return Err(Error::UnbinnedElement { index }),
            }
        }
        Ok(counts)
    }
}
