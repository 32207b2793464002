//! Rules for choosing the number of bins from the data
//!
//! Every rule yields at least one bin, so the result can always be passed
//! to a binning constructor.

use serde::{Deserialize, Serialize};

/// Compute the default bin count for `n` samples with Sturges' rule
///
/// Uses `ceil(log2(n)) + 1`, with a minimum of one bin for `n <= 1`.
pub fn compute_default_bin_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let bins = (n as f64).log2().ceil() as usize + 1;
    bins.max(1)
}

/// Strategy for deriving a bin count from sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinCountRule {
    /// Sturges' rule: `ceil(log2(n)) + 1`
    #[default]
    Sturges,
    /// Square-root choice: `floor(sqrt(n))`
    SquareRoot,
    /// Scott's rule for the bin width: `h = 3.5 * σ * n^(-1/3)`
    Scott,
    /// Freedman-Diaconis rule for the bin width: `h = 2 * IQR * n^(-1/3)`
    FreedmanDiaconis,
    /// A fixed number of bins, independent of the data
    Fixed(usize),
}

impl BinCountRule {
    /// Compute the number of bins for the given sample
    pub fn bin_count(&self, sample: &[f64]) -> usize {
        match *self {
            Self::Sturges => compute_default_bin_count(sample.len()),
            Self::SquareRoot => ((sample.len() as f64).sqrt() as usize).max(1),
            Self::Scott => scott_bin_count(sample),
            Self::FreedmanDiaconis => freedman_diaconis_bin_count(sample),
            Self::Fixed(bins) => bins.max(1),
        }
    }
}

fn finite_sorted(sample: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn bins_for_width(range: f64, bin_width: f64) -> usize {
    let epsilon = 1e-10;
    if bin_width > epsilon {
        ((range / bin_width).ceil() as usize).max(1)
    } else {
        1
    }
}

fn scott_bin_count(sample: &[f64]) -> usize {
    let sorted = finite_sorted(sample);
    if sorted.is_empty() {
        return 1;
    }

    // Calculate mean and standard deviation
    let n_f = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n_f;
    let variance = sorted
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / n_f;
    let std_dev = variance.sqrt();

    let bin_width = 3.5 * std_dev * n_f.powf(-1.0 / 3.0);
    let range = sorted[sorted.len() - 1] - sorted[0];
    bins_for_width(range, bin_width)
}

fn freedman_diaconis_bin_count(sample: &[f64]) -> usize {
    let sorted = finite_sorted(sample);
    if sorted.is_empty() {
        return 1;
    }

    let n = sorted.len();
    let iqr = sorted[(3 * n) / 4] - sorted[n / 4];

    let bin_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    let range = sorted[n - 1] - sorted[0];
    bins_for_width(range, bin_width)
}
