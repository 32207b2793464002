//! Configuration for histogram construction

use histobin_binning::{BinCountRule, DEFAULT_DATE_PATTERN, DEFAULT_SEPARATOR};
use histobin_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest bin count a histogram accepts by default
pub const DEFAULT_MAX_BIN_COUNT: usize = 100_000;

/// Settings used when building and rebinning a histogram
///
/// All fields have defaults, so partial configurations can be deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Explicit initial bin count; overrides `bin_count_rule` when set
    pub bin_count: Option<usize>,
    /// Rule for the initial bin count of numeric histograms
    pub bin_count_rule: BinCountRule,
    /// Explicit lower bound of the numeric range
    pub min: Option<f64>,
    /// Explicit upper bound of the numeric range
    pub max: Option<f64>,
    /// Upper limit for [`crate::HistogramEngine::set_bin_count`]
    pub max_bin_count: usize,
    /// `strftime` pattern for date labels
    pub date_pattern: String,
    /// Separator between the lower and upper boundary in range labels
    pub label_separator: String,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_count: None,
            bin_count_rule: BinCountRule::default(),
            min: None,
            max: None,
            max_bin_count: DEFAULT_MAX_BIN_COUNT,
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            label_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl HistogramConfig {
    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<()> {
        if self.max_bin_count == 0 {
            return Err(Error::InvalidArgument(
                "The maximum bin count must be positive".to_string(),
            ));
        }
        if let Some(bin_count) = self.bin_count {
            self.check_bin_count(bin_count)?;
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            Error::check_range(min, max)?;
        }
        Ok(())
    }

    /// Check that a bin count lies within `1..=max_bin_count`
    pub fn check_bin_count(&self, bin_count: usize) -> Result<()> {
        Error::check_bin_count(bin_count)?;
        if bin_count > self.max_bin_count {
            return Err(Error::InvalidArgument(format!(
                "The bin count must be at most {}, but is {bin_count}",
                self.max_bin_count
            )));
        }
        Ok(())
    }

    /// Resolve the initial bin count for the given key values
    pub fn initial_bin_count(&self, values: &[f64]) -> usize {
        self.bin_count
            .unwrap_or_else(|| self.bin_count_rule.bin_count(values))
            .min(self.max_bin_count)
    }
}
