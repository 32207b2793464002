//! Property-based tests for numeric and categorical binnings

use approx::assert_relative_eq;
use histobin_binning::{
    binnings, compute_default_bin_count, BinCountRule, Binning, NumberBinning,
};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

fn identity(min: f64, max: f64, bin_count: usize) -> NumberBinning<f64> {
    NumberBinning::new(|v: &f64| *v, min, max, bin_count).unwrap()
}

proptest! {
    // Property: every value inside the range is assigned a valid bin
    #[test]
    fn prop_values_in_range_are_binned(
        min in -1.0e6..1.0e6f64,
        width in 1.0e-3..1.0e6f64,
        bin_count in 1usize..500,
        alpha in 0.0..=1.0f64,
    ) {
        let max = min + width;
        let binning = identity(min, max, bin_count);
        let value = (min + alpha * width).min(max);
        let bin = binning.compute_bin(&value);
        prop_assert!(bin.is_some(), "value {} in [{}, {}] was not binned", value, min, max);
        prop_assert!(bin.unwrap() < bin_count);
    }

    // Property: bins partition the range without gaps
    #[test]
    fn prop_bins_partition_range(
        min in -1.0e3..1.0e3f64,
        width in 1.0e-2..1.0e3f64,
        bin_count in 1usize..200,
    ) {
        let max = min + width;
        let binning = identity(min, max, bin_count);
        prop_assert_eq!(binning.bin_min(0), min);
        prop_assert!((binning.bin_max(bin_count - 1) - max).abs() < 1e-6);
        for bin in 0..bin_count - 1 {
            prop_assert!((binning.bin_max(bin) - binning.bin_min(bin + 1)).abs() < 1e-9);
        }
    }

    // Property: best-effort counts never exceed the number of elements
    #[test]
    fn prop_counts_sum_to_binned_elements(
        values in prop::collection::vec(-10.0..10.0f64, 0..200),
        bin_count in 1usize..50,
    ) {
        let binning = identity(-5.0, 5.0, bin_count);
        let counts = binning.compute(&values, true).unwrap();
        prop_assert_eq!(counts.len(), bin_count);
        let binned = values.iter().filter(|v| binning.contains(v)).count();
        prop_assert_eq!(counts.iter().sum::<usize>(), binned);
    }

    // Property: every rule yields at least one bin
    #[test]
    fn prop_rules_yield_positive_bin_counts(
        values in prop::collection::vec(-1.0e3..1.0e3f64, 0..300),
    ) {
        for rule in [
            BinCountRule::Sturges,
            BinCountRule::SquareRoot,
            BinCountRule::Scott,
            BinCountRule::FreedmanDiaconis,
        ] {
            prop_assert!(rule.bin_count(&values) >= 1);
        }
    }
}

#[test]
fn test_inferred_range_bins_every_element() {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<f64> = (0..1000).map(|_| rng.gen_range(-50.0..50.0)).collect();
    let bin_count = compute_default_bin_count(values.len());
    assert_eq!(bin_count, 11);

    let binning =
        binnings::create_number_binning(&values, |v: &f64| *v, bin_count, None, None).unwrap();
    let counts = binning.compute(&values, false).unwrap();
    assert_eq!(counts.iter().sum::<usize>(), values.len());
}

#[test]
fn test_strict_mode_rejects_out_of_range_values() {
    let binning = identity(0.0, 1.0, 4);
    let values = [0.1, 0.2, 1.5];
    assert!(binning.compute(&values, false).is_err());
    assert_eq!(binning.compute(&values, true).unwrap(), vec![2, 0, 0, 0]);
}

#[test]
fn test_maximum_boundary_after_accumulated_steps() {
    // Values produced by summing steps may overshoot the maximum slightly
    let binning = identity(0.0, 1.0, 10);
    let overshoot = (0..10).fold(0.0, |acc, _| acc + 0.1);
    assert!(overshoot >= 1.0 - 1e-12);
    assert_eq!(binning.compute_bin(&overshoot), Some(9));
    assert_relative_eq!(binning.bin_max(9), 1.0);
}

#[test]
fn test_general_binning_from_people() {
    #[derive(Debug)]
    struct Person {
        city: &'static str,
    }
    let people = [
        Person { city: "Oslo" },
        Person { city: "Lima" },
        Person { city: "Oslo" },
        Person { city: "Kyiv" },
        Person { city: "Lima" },
    ];
    let binning = binnings::create_general_binning(&people, |p: &Person| p.city);
    let bins: Vec<_> = people.iter().map(|p| binning.compute_bin(p)).collect();
    assert_eq!(bins, vec![Some(0), Some(1), Some(0), Some(2), Some(1)]);
}
