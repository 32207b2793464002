//! Human-readable labels for bins
//!
//! Numeric labels use one precision for the whole binning, derived from the
//! order of magnitude of the total range, so that labels of neighbouring
//! bins line up. Date labels interpret the bin boundaries as milliseconds
//! since the epoch (UTC). Categorical labels are the keys themselves.

use crate::general::GeneralBinning;
use crate::number::NumberBinning;
use crate::traits::Binning;
use chrono::format::{Item, StrftimeItems};
use chrono::DateTime;
use histobin_core::{Error, Result};
use std::fmt::Write;

/// Default pattern for date labels (`yyyy-MM-dd HH:mm:ss.SSS`)
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default separator between the lower and upper boundary of a label
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Decimal precision used for the boundaries of numeric labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// A fixed number of decimal digits
    Digits(usize),
    /// Generic formatting for ranges without a usable order of magnitude
    Generic,
}

impl Precision {
    /// Number of generic decimal digits
    const GENERIC_DIGITS: usize = 6;

    /// Derive the precision for a total range
    ///
    /// Ranges of at least one use no decimal digits. Smaller ranges use as
    /// many digits as their (negative) order of magnitude. Non-finite ranges
    /// and ranges below `1e-100` use generic formatting.
    pub fn for_range(range: f64) -> Self {
        if !range.is_finite() || range < 1e-100 {
            return Self::Generic;
        }
        if range >= 1.0 {
            return Self::Digits(0);
        }
        Self::Digits(range.log10().floor().abs() as usize)
    }

    /// Format a value with this precision
    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Digits(digits) => format!("{value:.digits$}"),
            Self::Generic => format!("{value:.prec$}", prec = Self::GENERIC_DIGITS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LabelKind {
    Numeric { precision: Precision },
    Date { pattern: String },
    Categorical { keys: Vec<String> },
}

/// Produces the label of each bin of a binning
///
/// Numeric and date formatters copy the boundaries they need from the
/// binning, so a formatter stays valid on its own. Rebinning requires a new
/// formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFormatter {
    kind: LabelKind,
    min: f64,
    step: f64,
    bin_count: usize,
    separator: String,
}

impl LabelFormatter {
    /// Create numeric range labels for a numeric binning
    pub fn numeric<T: ?Sized>(binning: &NumberBinning<T>) -> Self {
        let last = binning.bin_count() - 1;
        let total_range = binning.bin_max(last) - binning.bin_min(0);
        Self::from_bounds(
            binning,
            LabelKind::Numeric {
                precision: Precision::for_range(total_range),
            },
        )
    }

    /// Create date range labels for a numeric binning over epoch milliseconds
    ///
    /// The pattern uses `strftime` syntax and is validated here, so that
    /// formatting a label can not fail later on.
    pub fn date<T: ?Sized>(binning: &NumberBinning<T>, pattern: &str) -> Result<Self> {
        check_date_pattern(pattern)?;
        Ok(Self::from_bounds(
            binning,
            LabelKind::Date {
                pattern: pattern.to_string(),
            },
        ))
    }

    /// Create labels from the keys of a categorical binning
    pub fn categorical<T: ?Sized>(binning: &GeneralBinning<T>) -> Self {
        Self {
            kind: LabelKind::Categorical {
                keys: binning.key_labels().to_vec(),
            },
            min: 0.0,
            step: 0.0,
            bin_count: binning.bin_count(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    fn from_bounds<T: ?Sized>(binning: &NumberBinning<T>, kind: LabelKind) -> Self {
        Self {
            kind,
            min: binning.min(),
            step: binning.step(),
            bin_count: binning.bin_count(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a different separator between the lower and upper boundary
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Rebuild this formatter, keeping its kind and separator, for another binning
    ///
    /// Categorical formatters do not depend on the bin boundaries and are
    /// returned unchanged.
    pub fn rebuild<T: ?Sized>(&self, binning: &NumberBinning<T>) -> Self {
        let formatter = match &self.kind {
            LabelKind::Numeric { .. } => Self::numeric(binning),
            LabelKind::Date { pattern } => Self::from_bounds(
                binning,
                LabelKind::Date {
                    pattern: pattern.clone(),
                },
            ),
            LabelKind::Categorical { .. } => return self.clone(),
        };
        formatter.with_separator(self.separator.clone())
    }

    /// Get the number of bins this formatter labels
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Get the precision of numeric labels
    pub fn precision(&self) -> Option<Precision> {
        match self.kind {
            LabelKind::Numeric { precision } => Some(precision),
            _ => None,
        }
    }

    /// Get the label of a bin, or `None` if the bin does not exist
    pub fn label(&self, bin: usize) -> Option<String> {
        if bin >= self.bin_count {
            return None;
        }
        let lower = self.min + self.step * bin as f64;
        let upper = lower + self.step;
        let label = match &self.kind {
            LabelKind::Categorical { keys } => return keys.get(bin).cloned(),
            LabelKind::Numeric { precision } => {
                format!("{}{}{}", precision.format(lower), self.separator, precision.format(upper))
            }
            LabelKind::Date { pattern } => format!(
                "{}{}{}",
                format_date(lower, pattern),
                self.separator,
                format_date(upper, pattern)
            ),
        };
        Some(label)
    }

    /// Get the labels of all bins, in bin order
    pub fn labels(&self) -> Vec<String> {
        (0..self.bin_count).filter_map(|bin| self.label(bin)).collect()
    }

    /// Build tooltip text showing the highlighted and total count of a bin
    pub fn tooltip(label: &str, highlighted: usize, total: usize) -> String {
        format!("{label}\n{highlighted}/{total}")
    }
}

fn check_date_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidArgument(format!(
            "The date pattern '{pattern}' is not valid"
        )));
    }
    Ok(())
}

fn format_date(value: f64, pattern: &str) -> String {
    // `as` truncates toward zero, like a cast to a long
    let millis = value as i64;
    let Some(date) = DateTime::from_timestamp_millis(millis) else {
        return Precision::Digits(0).format(value);
    };
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return Precision::Digits(0).format(value);
    }
    out
}
