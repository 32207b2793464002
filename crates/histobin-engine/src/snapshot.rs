//! Aggregated bin counts of a histogram

use std::fmt;

/// Per-bin counts of all elements and of the highlighted elements
///
/// Stacked-bar rendering draws the highlighted count at the bottom and the
/// remainder on top. The highlighted elements are not validated as a subset
/// of all elements, so the remainder saturates at zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinSnapshot {
    total: Vec<usize>,
    highlighted: Vec<usize>,
}

/// One stacked bar of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinBar {
    /// Index of the bin
    pub bin: usize,
    /// Number of highlighted elements in the bin
    pub highlighted: usize,
    /// Number of all elements in the bin minus the highlighted ones
    pub remainder: usize,
}

impl BinBar {
    /// Total height of the bar
    pub fn total(&self) -> usize {
        self.highlighted + self.remainder
    }
}

impl BinSnapshot {
    /// Create a snapshot from the counts of all and of the highlighted elements
    ///
    /// Both vectors have one entry per bin.
    pub(crate) fn new(total: Vec<usize>, highlighted: Vec<usize>) -> Self {
        debug_assert_eq!(total.len(), highlighted.len());
        Self { total, highlighted }
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.total.len()
    }

    /// Check if the snapshot has no bins
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Get the counts of all elements
    pub fn total(&self) -> &[usize] {
        &self.total
    }

    /// Get the counts of the highlighted elements
    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    /// Get the counts of all elements minus the highlighted ones
    pub fn remainder(&self) -> Vec<usize> {
        self.bars().map(|bar| bar.remainder).collect()
    }

    /// Get the stacked bar of a single bin
    pub fn bar(&self, bin: usize) -> Option<BinBar> {
        let total = *self.total.get(bin)?;
        let highlighted = self.highlighted[bin];
        Some(BinBar {
            bin,
            highlighted,
            remainder: total.saturating_sub(highlighted),
        })
    }

    /// Iterate over the stacked bars of all bins
    pub fn bars(&self) -> impl Iterator<Item = BinBar> + '_ {
        (0..self.len()).filter_map(move |bin| self.bar(bin))
    }

    /// Get the largest count of any bin
    pub fn max_count(&self) -> usize {
        self.total.iter().copied().max().unwrap_or(0)
    }

    /// Get the number of binned elements
    pub fn total_count(&self) -> usize {
        self.total.iter().sum()
    }
}

impl fmt::Display for BinSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinSnapshot({} bins, n={}, highlighted={})",
            self.len(),
            self.total_count(),
            self.highlighted.iter().sum::<usize>()
        )
    }
}
