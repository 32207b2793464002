//! Categorical binning over arbitrary keys

use crate::traits::Binning;
use indexmap::IndexSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

type LookupFn<T> = Rc<dyn Fn(&T) -> Option<usize>>;

/// Binning that assigns each distinct key its own bin
///
/// The bins are assigned once, in the order in which the keys are first
/// encountered in the collection given at construction. Keys that were not
/// part of that collection are not classified.
pub struct GeneralBinning<T: ?Sized> {
    lookup: LookupFn<T>,
    key_labels: Vec<String>,
}

impl<T: ?Sized> GeneralBinning<T> {
    /// Create a binning from the distinct keys of the given elements
    pub fn new<'a, I, K, F>(elements: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        K: Hash + Eq + fmt::Display + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let keys: IndexSet<K> = elements.into_iter().map(&key).collect();
        let key_labels = keys.iter().map(ToString::to_string).collect();
        let lookup = move |element: &T| keys.get_index_of(&key(element));
        Self {
            lookup: Rc::new(lookup),
            key_labels,
        }
    }

    /// Get the display string of the key of the given bin
    pub fn key_label(&self, bin: usize) -> Option<&str> {
        self.key_labels.get(bin).map(String::as_str)
    }

    /// Get the display strings of all keys, in bin order
    pub fn key_labels(&self) -> &[String] {
        &self.key_labels
    }
}

impl<T: ?Sized> Binning<T> for GeneralBinning<T> {
    fn bin_count(&self) -> usize {
        self.key_labels.len()
    }

    fn compute_bin(&self, element: &T) -> Option<usize> {
        (self.lookup)(element)
    }
}

impl<T: ?Sized> Clone for GeneralBinning<T> {
    fn clone(&self) -> Self {
        Self {
            lookup: Rc::clone(&self.lookup),
            key_labels: self.key_labels.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for GeneralBinning<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralBinning")
            .field("keys", &self.key_labels)
            .finish_non_exhaustive()
    }
}
