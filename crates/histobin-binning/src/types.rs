//! Closed set of binnings a histogram can be built on

use crate::general::GeneralBinning;
use crate::number::NumberBinning;
use crate::traits::Binning;
use std::fmt;

/// Either a numeric or a categorical binning
///
/// Histograms only ever need these two shapes. The numeric variant can be
/// rebuilt with a different bin count; the categorical one is fixed.
pub enum HistogramBinning<T: ?Sized> {
    /// Equal-width bins over a numeric key
    Number(NumberBinning<T>),
    /// One bin per distinct key
    General(GeneralBinning<T>),
}

impl<T: ?Sized> HistogramBinning<T> {
    /// Get the numeric binning, if this is one
    pub fn as_number(&self) -> Option<&NumberBinning<T>> {
        match self {
            Self::Number(binning) => Some(binning),
            Self::General(_) => None,
        }
    }

    /// Get the categorical binning, if this is one
    pub fn as_general(&self) -> Option<&GeneralBinning<T>> {
        match self {
            Self::General(binning) => Some(binning),
            Self::Number(_) => None,
        }
    }

    /// Whether the bin count of this binning can be changed
    pub fn is_resizable(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl<T: ?Sized> Binning<T> for HistogramBinning<T> {
    fn bin_count(&self) -> usize {
        match self {
            Self::Number(binning) => binning.bin_count(),
            Self::General(binning) => binning.bin_count(),
        }
    }

    fn compute_bin(&self, element: &T) -> Option<usize> {
        match self {
            Self::Number(binning) => binning.compute_bin(element),
            Self::General(binning) => binning.compute_bin(element),
        }
    }
}

impl<T: ?Sized> From<NumberBinning<T>> for HistogramBinning<T> {
    fn from(binning: NumberBinning<T>) -> Self {
        Self::Number(binning)
    }
}

impl<T: ?Sized> From<GeneralBinning<T>> for HistogramBinning<T> {
    fn from(binning: GeneralBinning<T>) -> Self {
        Self::General(binning)
    }
}

impl<T: ?Sized> Clone for HistogramBinning<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Number(binning) => Self::Number(binning.clone()),
            Self::General(binning) => Self::General(binning.clone()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for HistogramBinning<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(binning) => fmt::Debug::fmt(binning, f),
            Self::General(binning) => fmt::Debug::fmt(binning, f),
        }
    }
}
