//! Binning engine for interactive histograms
//!
//! This crate re-exports the workspace crates:
//!
//! - [`histobin_core`]: error type and numeric key conversion
//! - [`histobin_binning`]: numeric and categorical binnings with their labels
//! - [`histobin_engine`]: histogram state, rebinning and click handling
//!
//! # Example
//!
//! ```rust
//! use histobin::prelude::*;
//!
//! let words = vec!["to", "be", "or", "not", "to", "be"];
//! let mut engine = histograms::categorical(words.clone(), |w: &&str| w.len())?;
//! engine.set_elements(words, vec!["not"]);
//!
//! assert_eq!(engine.bin_labels(), vec!["2", "3"]);
//! assert_eq!(engine.snapshot().total(), [5, 1]);
//! assert_eq!(engine.bin_tooltip(1).as_deref(), Some("3\n1/1"));
//! # Ok::<(), histobin::Error>(())
//! ```

pub use histobin_binning;
pub use histobin_core;
pub use histobin_engine;

pub use histobin_core::{Error, Result};

/// Common imports for building histograms
pub mod prelude {
    pub use histobin_binning::{
        binnings, BinCountRule, Binning, GeneralBinning, HistogramBinning, LabelFormatter,
        NumberBinning,
    };
    pub use histobin_core::{Error, NumericKey, Result};
    pub use histobin_engine::{
        histograms, ElementSet, HistogramBuilder, HistogramClickEvent, HistogramConfig,
        HistogramEngine, HistogramListener,
    };
}
