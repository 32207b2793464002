//! Interactive histogram state on top of histobin binnings
//!
//! A [`HistogramEngine`] holds the elements of a histogram, a highlighted
//! subset, the current binning and its labels. It keeps per-bin counts up
//! to date for a presentation layer and turns clicks on a bin back into the
//! elements of that bin.
//!
//! # Examples
//!
//! ```rust
//! use histobin_engine::{histograms, ElementSet, HistogramClickEvent};
//!
//! let mut engine = histograms::numeric(vec![1.0, 2.0, 2.5, 7.0, 9.0], |v: &f64| *v)?;
//! engine.set_elements(vec![1.0, 2.0, 2.5, 7.0, 9.0], vec![2.5, 9.0]);
//!
//! engine.add_listener(|event: &HistogramClickEvent<f64>| -> histobin_core::Result<()> {
//!     println!("bin {} holds {:?}", event.bin, event.bin_elements);
//!     Ok(())
//! });
//!
//! engine.set_bin_count(2)?;
//! assert_eq!(engine.snapshot().total(), [3, 2]);
//! assert_eq!(engine.resolve_click(1, ElementSet::Highlighted), vec![&9.0]);
//! engine.click(0, false)?;
//! # Ok::<(), histobin_core::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod events;
pub mod histograms;
pub mod snapshot;

pub use config::{HistogramConfig, DEFAULT_MAX_BIN_COUNT};
pub use engine::HistogramEngine;
pub use events::{ElementSet, HistogramClickEvent, HistogramListener, ListenerId};
pub use histograms::HistogramBuilder;
pub use snapshot::{BinBar, BinSnapshot};

pub use histobin_core::{Error, Result};
