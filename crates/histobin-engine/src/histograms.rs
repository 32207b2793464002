//! Convenience constructors for histogram engines
//!
//! [`HistogramBuilder`] configures and builds engines for numeric, date and
//! categorical data. The free functions use the default configuration.

use crate::config::HistogramConfig;
use crate::engine::HistogramEngine;
use histobin_binning::{binnings, BinCountRule, LabelFormatter};
use histobin_core::{NumericKey, Result};
use std::fmt;
use std::hash::Hash;

/// Builder for configuring and creating histogram engines
///
/// ```rust
/// use histobin_engine::HistogramBuilder;
///
/// let ages = vec![23_u32, 35, 35, 41, 67, 12, 90];
/// let engine = HistogramBuilder::new()
///     .bin_count(3)
///     .range(0.0, 90.0)
///     .label_separator("...")
///     .numeric(ages, |age: &u32| *age)?;
///
/// assert_eq!(engine.snapshot().total(), [2, 3, 2]);
/// assert_eq!(engine.bin_label(0).as_deref(), Some("0...30"));
/// # Ok::<(), histobin_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistogramBuilder {
    config: HistogramConfig,
}

impl HistogramBuilder {
    /// Creates a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from an existing configuration
    pub fn from_config(config: HistogramConfig) -> Self {
        Self { config }
    }

    /// Sets a fixed initial bin count, overriding the bin-count rule
    pub fn bin_count(mut self, bin_count: usize) -> Self {
        self.config.bin_count = Some(bin_count);
        self
    }

    /// Sets the rule used to derive the initial bin count
    pub fn bin_count_rule(mut self, rule: BinCountRule) -> Self {
        self.config.bin_count_rule = rule;
        self
    }

    /// Sets both bounds of the numeric range
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Sets the lower bound of the numeric range
    pub fn min(mut self, min: f64) -> Self {
        self.config.min = Some(min);
        self
    }

    /// Sets the upper bound of the numeric range
    pub fn max(mut self, max: f64) -> Self {
        self.config.max = Some(max);
        self
    }

    /// Sets the largest bin count accepted when rebinning
    pub fn max_bin_count(mut self, max_bin_count: usize) -> Self {
        self.config.max_bin_count = max_bin_count;
        self
    }

    /// Sets the `strftime` pattern of date labels
    pub fn date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.date_pattern = pattern.into();
        self
    }

    /// Sets the separator between the boundaries of range labels
    pub fn label_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.label_separator = separator.into();
        self
    }

    /// Get the configuration built so far
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Builds a histogram over a numeric key with range labels
    pub fn numeric<T, K, F>(
        self,
        elements: impl IntoIterator<Item = T>,
        key: F,
    ) -> Result<HistogramEngine<T>>
    where
        K: NumericKey,
        F: Fn(&T) -> K + 'static,
    {
        self.build_numeric(elements.into_iter().collect(), key, false)
    }

    /// Builds a histogram over a key in milliseconds since the epoch, with date labels
    pub fn date<T, K, F>(
        self,
        elements: impl IntoIterator<Item = T>,
        key: F,
    ) -> Result<HistogramEngine<T>>
    where
        K: NumericKey,
        F: Fn(&T) -> K + 'static,
    {
        self.build_numeric(elements.into_iter().collect(), key, true)
    }

    /// Builds a histogram with one bin per distinct key
    pub fn categorical<T, K, F>(
        self,
        elements: impl IntoIterator<Item = T>,
        key: F,
    ) -> Result<HistogramEngine<T>>
    where
        K: Hash + Eq + fmt::Display + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.config.validate()?;
        let elements: Vec<T> = elements.into_iter().collect();
        let binning = binnings::create_general_binning(&elements, key);
        let labels = LabelFormatter::categorical(&binning);
        let mut engine = HistogramEngine::with_config(binning, labels, self.config)?;
        engine.set_elements(elements, Vec::new());
        Ok(engine)
    }

    fn build_numeric<T, K, F>(
        self,
        elements: Vec<T>,
        key: F,
        date: bool,
    ) -> Result<HistogramEngine<T>>
    where
        K: NumericKey,
        F: Fn(&T) -> K + 'static,
    {
        let config = self.config;
        config.validate()?;
        let values: Vec<f64> = elements.iter().map(|element| key(element).to_key()).collect();
        let bin_count = config.initial_bin_count(&values);
        let binning =
            binnings::create_number_binning(&elements, key, bin_count, config.min, config.max)?;
        let labels = if date {
            LabelFormatter::date(&binning, &config.date_pattern)?
        } else {
            LabelFormatter::numeric(&binning)
        };
        let labels = labels.with_separator(config.label_separator.clone());
        let mut engine = HistogramEngine::with_config(binning, labels, config)?;
        engine.set_elements(elements, Vec::new());
        Ok(engine)
    }
}

/// Create a categorical histogram with the default configuration
pub fn categorical<T, K, F>(
    elements: impl IntoIterator<Item = T>,
    key: F,
) -> Result<HistogramEngine<T>>
where
    K: Hash + Eq + fmt::Display + 'static,
    F: Fn(&T) -> K + 'static,
{
    HistogramBuilder::new().categorical(elements, key)
}

/// Create a categorical histogram where each element is its own key
pub fn categorical_identity<T>(elements: impl IntoIterator<Item = T>) -> Result<HistogramEngine<T>>
where
    T: Hash + Eq + fmt::Display + Clone + 'static,
{
    categorical(elements, T::clone)
}

/// Create a numeric histogram with the default configuration
pub fn numeric<T, K, F>(elements: impl IntoIterator<Item = T>, key: F) -> Result<HistogramEngine<T>>
where
    K: NumericKey,
    F: Fn(&T) -> K + 'static,
{
    HistogramBuilder::new().numeric(elements, key)
}

/// Create a numeric histogram where each element is its own key
pub fn numeric_identity<T>(elements: impl IntoIterator<Item = T>) -> Result<HistogramEngine<T>>
where
    T: NumericKey,
{
    numeric(elements, |element: &T| element.to_key())
}

/// Create a date histogram with the default configuration
pub fn date<T, K, F>(elements: impl IntoIterator<Item = T>, key: F) -> Result<HistogramEngine<T>>
where
    K: NumericKey,
    F: Fn(&T) -> K + 'static,
{
    HistogramBuilder::new().date(elements, key)
}
