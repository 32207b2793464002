//! Histogram state and its mutations

use crate::config::HistogramConfig;
use crate::events::{ElementSet, HistogramClickEvent, HistogramListener, ListenerId, Listeners};
use crate::snapshot::BinSnapshot;
use histobin_binning::{Binning, HistogramBinning, LabelFormatter};
use histobin_core::{Error, Result};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// The state behind an interactive histogram
///
/// The engine owns the elements, the highlighted elements, the binning and
/// the bin labels. Every mutation recomputes the [`BinSnapshot`] right away,
/// so the snapshot always matches the current state. Clicks are resolved
/// against the current binning on demand.
///
/// The engine is meant to be driven from a single thread; mutations take
/// `&mut self` and listeners are called synchronously.
pub struct HistogramEngine<T> {
    elements: Vec<T>,
    highlighted: Vec<T>,
    binning: HistogramBinning<T>,
    labels: LabelFormatter,
    snapshot: BinSnapshot,
    listeners: Listeners<T>,
    config: HistogramConfig,
}

impl<T> HistogramEngine<T> {
    /// Create an engine without elements
    ///
    /// Fails if the label formatter was created for a different number of
    /// bins than the binning has.
    pub fn new(binning: impl Into<HistogramBinning<T>>, labels: LabelFormatter) -> Result<Self> {
        Self::with_config(binning, labels, HistogramConfig::default())
    }

    /// Create an engine without elements, using the given configuration
    pub fn with_config(
        binning: impl Into<HistogramBinning<T>>,
        labels: LabelFormatter,
        config: HistogramConfig,
    ) -> Result<Self> {
        config.validate()?;
        let binning = binning.into();
        check_labels(&binning, &labels)?;
        let mut engine = Self {
            elements: Vec::new(),
            highlighted: Vec::new(),
            binning,
            labels,
            snapshot: BinSnapshot::default(),
            listeners: Listeners::default(),
            config,
        };
        engine.recompute();
        Ok(engine)
    }

    /// Replace the elements and the highlighted elements
    ///
    /// The highlighted elements are counted separately and are not checked
    /// to be a subset of the elements.
    pub fn set_elements<I, H>(&mut self, elements: I, highlighted: H)
    where
        I: IntoIterator<Item = T>,
        H: IntoIterator<Item = T>,
    {
        self.elements = elements.into_iter().collect();
        self.highlighted = highlighted.into_iter().collect();
        debug!(
            elements = self.elements.len(),
            highlighted = self.highlighted.len(),
            "histogram elements replaced"
        );
        self.recompute();
    }

    /// Replace only the highlighted elements
    pub fn set_highlighted<H>(&mut self, highlighted: H)
    where
        H: IntoIterator<Item = T>,
    {
        self.highlighted = highlighted.into_iter().collect();
        self.recompute();
    }

    /// Change the number of bins of a numeric histogram
    ///
    /// The new binning keeps the range and key of the current one. Fails if
    /// `bin_count` is zero or above the configured maximum, or if the
    /// histogram is categorical. The state is unchanged on failure.
    #[instrument(skip(self), fields(old = self.binning.bin_count()))]
    pub fn set_bin_count(&mut self, bin_count: usize) -> Result<()> {
        self.config.check_bin_count(bin_count)?;
        let HistogramBinning::Number(current) = &self.binning else {
            return Err(Error::FixedBinning);
        };
        let binning = current.with_bin_count(bin_count)?;
        let labels = self.labels.rebuild(&binning);
        debug!(new = bin_count, "rebinning histogram");
        self.binning = HistogramBinning::Number(binning);
        self.labels = labels;
        self.recompute();
        Ok(())
    }

    /// Replace the binning and its labels
    pub fn set_binning(
        &mut self,
        binning: impl Into<HistogramBinning<T>>,
        labels: LabelFormatter,
    ) -> Result<()> {
        let binning = binning.into();
        check_labels(&binning, &labels)?;
        self.binning = binning;
        self.labels = labels;
        self.recompute();
        Ok(())
    }

    /// Get the number of bins
    pub fn bin_count(&self) -> usize {
        self.binning.bin_count()
    }

    /// Get the label of a bin
    pub fn bin_label(&self, bin: usize) -> Option<String> {
        self.labels.label(bin)
    }

    /// Get the labels of all bins
    pub fn bin_labels(&self) -> Vec<String> {
        self.labels.labels()
    }

    /// Get tooltip text for a bin, showing its label and counts
    pub fn bin_tooltip(&self, bin: usize) -> Option<String> {
        let label = self.labels.label(bin)?;
        let bar = self.snapshot.bar(bin)?;
        Some(LabelFormatter::tooltip(&label, bar.highlighted, bar.total()))
    }

    /// Get the current bin counts
    pub fn snapshot(&self) -> &BinSnapshot {
        &self.snapshot
    }

    /// Get the elements
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Get the highlighted elements
    pub fn highlighted(&self) -> &[T] {
        &self.highlighted
    }

    /// Get the current binning
    pub fn binning(&self) -> &HistogramBinning<T> {
        &self.binning
    }

    /// Get the current label formatter
    pub fn labels(&self) -> &LabelFormatter {
        &self.labels
    }

    /// Get the configuration
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Find the elements of one list that fall into the given bin
    ///
    /// The elements keep their original order. The lookup always uses the
    /// current binning.
    pub fn resolve_click(&self, bin: usize, set: ElementSet) -> Vec<&T> {
        let elements = match set {
            ElementSet::All => &self.elements,
            ElementSet::Highlighted => &self.highlighted,
        };
        elements
            .iter()
            .filter(|element| self.binning.compute_bin(element) == Some(bin))
            .collect()
    }

    /// Register a listener for click events
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: HistogramListener<T> + 'static,
    {
        self.listeners.add(Rc::new(listener))
    }

    /// Register a shared listener, which can later be removed by reference
    pub fn add_shared_listener(&mut self, listener: Rc<dyn HistogramListener<T>>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a listener by its handle
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Remove all registrations of a shared listener
    pub fn remove_shared_listener(&mut self, listener: &Rc<dyn HistogramListener<T>>) -> bool {
        self.listeners.remove_instance(listener)
    }

    /// Get the number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn recompute(&mut self) {
        let total = count_bins(&self.binning, &self.elements);
        let highlighted = count_bins(&self.binning, &self.highlighted);
        self.snapshot = BinSnapshot::new(total, highlighted);
        trace!(snapshot = %self.snapshot, "histogram recomputed");
    }
}

impl<T: Clone> HistogramEngine<T> {
    /// Handle a click on a bin and notify the listeners
    ///
    /// `highlighted_part` tells whether the highlighted part of the bar was
    /// clicked. Fails if the bin does not exist. Listener failures are
    /// logged and do not affect the result.
    pub fn click(&self, bin: usize, highlighted_part: bool) -> Result<HistogramClickEvent<T>> {
        let bin_count = self.bin_count();
        if bin >= bin_count {
            return Err(Error::BinOutOfRange { bin, bin_count });
        }
        let event = HistogramClickEvent {
            bin,
            highlighted_part,
            bin_elements: self.resolve_click(bin, ElementSet::All).into_iter().cloned().collect(),
            highlighted_bin_elements: self
                .resolve_click(bin, ElementSet::Highlighted)
                .into_iter()
                .cloned()
                .collect(),
        };
        if !self.listeners.is_empty() {
            let delivered = self.listeners.notify(&event);
            debug!(bin, delivered, "histogram click delivered");
        }
        Ok(event)
    }
}

impl<T> fmt::Debug for HistogramEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistogramEngine")
            .field("elements", &self.elements.len())
            .field("highlighted", &self.highlighted.len())
            .field("binning", &self.binning)
            .field("snapshot", &self.snapshot)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Best-effort bin counts; elements outside the binning are skipped
fn count_bins<T>(binning: &HistogramBinning<T>, elements: &[T]) -> Vec<usize> {
    let mut counts = vec![0; binning.bin_count()];
    for bin in elements.iter().filter_map(|element| binning.compute_bin(element)) {
        counts[bin] += 1;
    }
    counts
}

fn check_labels<T>(binning: &HistogramBinning<T>, labels: &LabelFormatter) -> Result<()> {
    if binning.bin_count() != labels.bin_count() {
        return Err(Error::InvalidArgument(format!(
            "The labels are for {} bins, but the binning has {}",
            labels.bin_count(),
            binning.bin_count()
        )));
    }
    Ok(())
}
