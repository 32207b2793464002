//! Binning strategies for interactive histograms
//!
//! This crate maps arbitrary elements to histogram bins. It offers two
//! binnings and the helpers to build and label them:
//!
//! - [`NumberBinning`]: equal-width bins over a numeric key
//! - [`GeneralBinning`]: one bin per distinct key, in first-seen order
//! - [`binnings`]: range inference and factory functions
//! - [`rules`]: bin-count heuristics (Sturges, square root, Scott, ...)
//! - [`LabelFormatter`]: numeric, date and categorical bin labels
//!
//! # Examples
//!
//! ## Numeric Binning
//!
//! ```rust
//! use histobin_binning::{binnings, Binning, LabelFormatter};
//!
//! let ages = vec![3_u32, 17, 25, 42, 42, 68, 91];
//! let bin_count = binnings::compute_default_bin_count(ages.len());
//! let binning = binnings::create_number_binning(&ages, |a: &u32| *a, bin_count, None, None)?;
//!
//! let counts = binning.compute(&ages, false)?;
//! let labels = LabelFormatter::numeric(&binning).with_separator("...");
//! for (bin, count) in counts.iter().enumerate() {
//!     println!("{}: {}", labels.label(bin).unwrap_or_default(), count);
//! }
//! # Ok::<(), histobin_core::Error>(())
//! ```
//!
//! ## Categorical Binning
//!
//! ```rust
//! use histobin_binning::{binnings, Binning};
//!
//! let fruit = ["pear", "apple", "pear", "fig"];
//! let binning = binnings::create_general_binning(&fruit, |f: &&str| f.to_string());
//! assert_eq!(binning.key_labels(), ["pear", "apple", "fig"]);
//! assert_eq!(binning.compute(&fruit, false)?, vec![2, 1, 1]);
//! # Ok::<(), histobin_core::Error>(())
//! ```

pub mod binnings;
pub mod general;
pub mod labels;
pub mod number;
pub mod rules;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use general::GeneralBinning;
pub use labels::{LabelFormatter, Precision, DEFAULT_DATE_PATTERN, DEFAULT_SEPARATOR};
pub use number::{KeyFn, NumberBinning, EPSILON};
pub use rules::{compute_default_bin_count, BinCountRule};
pub use traits::Binning;
pub use types::HistogramBinning;

pub use histobin_core::{Error, Result};
