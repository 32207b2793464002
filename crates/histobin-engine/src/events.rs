//! Click events and the listeners receiving them

use histobin_core::Result;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use tracing::warn;

/// Which list of elements a lookup refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSet {
    /// All elements of the histogram
    All,
    /// Only the highlighted elements
    Highlighted,
}

/// A click on one bar of a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramClickEvent<T> {
    /// The clicked bin
    pub bin: usize,
    /// Whether the highlighted part of the bar was clicked
    pub highlighted_part: bool,
    /// All elements in the clicked bin, in their original order
    pub bin_elements: Vec<T>,
    /// The highlighted elements in the clicked bin, in their original order
    pub highlighted_bin_elements: Vec<T>,
}

/// Receiver of histogram click events
///
/// Closures taking a `&HistogramClickEvent<T>` and returning a `Result`
/// implement this trait.
pub trait HistogramListener<T> {
    /// Handle a click on a bin
    fn clicked(&self, event: &HistogramClickEvent<T>) -> Result<()>;
}

impl<T, F> HistogramListener<T> for F
where
    F: Fn(&HistogramClickEvent<T>) -> Result<()>,
{
    fn clicked(&self, event: &HistogramClickEvent<T>) -> Result<()> {
        self(event)
    }
}

/// Handle identifying a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Listeners in registration order
pub(crate) struct Listeners<T> {
    entries: Vec<(ListenerId, Rc<dyn HistogramListener<T>>)>,
    next_id: u64,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Listeners<T> {
    pub(crate) fn add(&mut self, listener: Rc<dyn HistogramListener<T>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Remove every registration of the given listener instance
    pub(crate) fn remove_instance(&mut self, listener: &Rc<dyn HistogramListener<T>>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(_, entry)| !Rc::ptr_eq(entry, listener));
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to all listeners
    ///
    /// A listener that fails or panics is logged and skipped; the remaining
    /// listeners still receive the event. Returns the number of listeners
    /// that handled the event successfully.
    pub(crate) fn notify(&self, event: &HistogramClickEvent<T>) -> usize {
        let mut delivered = 0;
        for (id, listener) in &self.entries {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.clicked(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => warn!(?id, bin = event.bin, %err, "histogram listener failed"),
                Err(_) => warn!(?id, bin = event.bin, "histogram listener panicked"),
            }
        }
        delivered
    }
}
