//! Integration tests for histogram engines built from application data

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use histobin_binning::{BinCountRule, Binning};
use histobin_core::{Error, Result};
use histobin_engine::{
    histograms, ElementSet, HistogramBuilder, HistogramClickEvent, HistogramListener,
};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn people(n: usize) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|i| Person {
            name: format!("Person{i}"),
            age: rng.gen_range(0..100),
        })
        .collect()
}

#[test]
fn test_resolve_click_follows_rebinning() {
    let elements = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let mut engine = HistogramBuilder::new()
        .bin_count(5)
        .numeric(elements.clone(), |v: &f64| *v)
        .unwrap();
    engine.set_elements(elements, vec![2.0, 4.0]);

    assert_eq!(engine.resolve_click(0, ElementSet::All), vec![&1.0]);

    engine.set_bin_count(2).unwrap();
    let binning = engine.binning().as_number().unwrap();
    assert_relative_eq!(binning.step(), 2.0);
    assert_eq!(engine.resolve_click(0, ElementSet::All), vec![&1.0, &2.0]);
    assert_eq!(engine.resolve_click(1, ElementSet::All), vec![&3.0, &4.0, &5.0]);
    assert_eq!(engine.resolve_click(0, ElementSet::Highlighted), vec![&2.0]);
    assert_eq!(engine.resolve_click(1, ElementSet::Highlighted), vec![&4.0]);
    assert!(engine.resolve_click(2, ElementSet::All).is_empty());
}

#[test]
fn test_person_histogram() {
    let persons = people(200);
    let highlighted: Vec<Person> = persons.iter().filter(|p| p.age % 3 == 0).cloned().collect();

    let mut engine = histograms::numeric(persons.clone(), |p: &Person| p.age).unwrap();
    engine.set_elements(persons.clone(), highlighted.clone());

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.total_count(), 200);
    assert_eq!(snapshot.highlighted().iter().sum::<usize>(), highlighted.len());
    for bar in snapshot.bars() {
        assert!(bar.highlighted <= bar.total());
    }

    // Every element is resolved in exactly one bin
    let mut resolved = Vec::new();
    for bin in 0..engine.bin_count() {
        let event = engine.click(bin, false).unwrap();
        assert!(event.bin_elements.iter().all(|p| engine.binning().compute_bin(p) == Some(bin)));
        resolved.extend(event.bin_elements);
    }
    assert_eq!(resolved.len(), persons.len());
    assert!(persons.iter().all(|p| resolved.iter().filter(|r| r.name == p.name).count() == 1));
}

#[test]
fn test_categorical_histogram() {
    let elements = vec![
        "A", "A", "A", "A", "A", "B", "B", "B", "B", "B", "B", "C", "C", "C", "C", "C", "C", "C",
        "C", "D", "D", "D",
    ];
    let highlighted = vec!["A", "A", "A", "B", "B", "B", "B", "C", "C", "D", "D"];
    let mut engine = histograms::categorical_identity(elements.clone()).unwrap();
    engine.set_elements(elements, highlighted);

    assert_eq!(engine.bin_labels(), vec!["A", "B", "C", "D"]);
    assert_eq!(engine.snapshot().total(), [5, 6, 8, 3]);
    assert_eq!(engine.snapshot().highlighted(), [3, 4, 2, 2]);
    assert_eq!(engine.snapshot().remainder(), vec![2, 2, 6, 1]);
    assert!(matches!(engine.set_bin_count(2), Err(Error::FixedBinning)));
}

#[test]
fn test_small_range_labels() {
    let elements: Vec<f64> = (1..=9).map(|i| 100.0 + f64::from(i) / 1000.0).collect();
    let engine = HistogramBuilder::new()
        .bin_count(4)
        .label_separator("...")
        .numeric(elements, |v: &f64| *v)
        .unwrap();
    // Total range is 0.008, so three decimal digits are used
    assert_eq!(engine.bin_label(0).unwrap(), "100.001...100.003");
    assert_eq!(engine.snapshot().total_count(), 9);
}

#[test]
fn test_date_histogram_with_chrono_keys() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let dates: Vec<DateTime<Utc>> = (0..4).map(|d| start + chrono::Duration::days(d)).collect();
    let engine = HistogramBuilder::new()
        .bin_count(3)
        .date_pattern("%Y-%m-%d")
        .label_separator(" .. ")
        .date(dates, |d: &DateTime<Utc>| *d)
        .unwrap();
    assert_eq!(engine.bin_label(0).unwrap(), "2024-03-01 .. 2024-03-02");
    assert_eq!(engine.bin_label(2).unwrap(), "2024-03-03 .. 2024-03-04");
    assert_eq!(engine.snapshot().total(), [1, 1, 2]);
}

#[test]
fn test_listener_failures_do_not_corrupt_state() {
    let mut engine = HistogramBuilder::new()
        .bin_count(2)
        .numeric(vec![1.0, 2.0, 3.0], |v: &f64| *v)
        .unwrap();

    let received = Rc::new(RefCell::new(Vec::new()));
    engine.add_listener(|_: &HistogramClickEvent<f64>| -> Result<()> {
        Err(Error::Listener("rejected".to_string()))
    });
    let sink = Rc::clone(&received);
    let shared: Rc<dyn HistogramListener<f64>> =
        Rc::new(move |event: &HistogramClickEvent<f64>| -> Result<()> {
            sink.borrow_mut().push(event.bin);
            Ok(())
        });
    engine.add_shared_listener(Rc::clone(&shared));

    let before = engine.snapshot().clone();
    let event = engine.click(1, true).unwrap();
    assert_eq!(event.bin_elements, vec![2.0, 3.0]);
    assert_eq!(*received.borrow(), vec![1]);
    assert_eq!(engine.snapshot(), &before);

    assert!(engine.remove_shared_listener(&shared));
    assert_eq!(engine.listener_count(), 1);
    engine.click(0, false).unwrap();
    assert_eq!(*received.borrow(), vec![1]);
}

#[test]
fn test_failed_rebinning_keeps_state() {
    let mut engine = HistogramBuilder::new()
        .bin_count(4)
        .max_bin_count(10)
        .numeric(vec![0.0, 1.0, 2.0, 3.0], |v: &f64| *v)
        .unwrap();
    let labels = engine.bin_labels();
    let snapshot = engine.snapshot().clone();

    assert!(engine.set_bin_count(0).is_err());
    assert!(engine.set_bin_count(11).is_err());
    assert_eq!(engine.bin_count(), 4);
    assert_eq!(engine.bin_labels(), labels);
    assert_eq!(engine.snapshot(), &snapshot);
}

#[test]
fn test_config_roundtrip_builds_same_histogram() {
    let builder = HistogramBuilder::new()
        .bin_count_rule(BinCountRule::Fixed(6))
        .range(0.0, 60.0);
    let json = serde_json::to_string(builder.config()).unwrap();
    let config = serde_json::from_str(&json).unwrap();

    let values: Vec<f64> = (0..60).map(f64::from).collect();
    let a = builder.numeric(values.clone(), |v: &f64| *v).unwrap();
    let b = HistogramBuilder::from_config(config).numeric(values, |v: &f64| *v).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.bin_labels(), b.bin_labels());
}

proptest! {
    // Property: rebinning to any count keeps every in-range element resolvable
    #[test]
    fn prop_rebinning_preserves_elements(
        values in prop::collection::vec(-100.0..100.0f64, 1..100),
        bin_count in 1usize..64,
    ) {
        let mut engine = histograms::numeric(values.clone(), |v: &f64| *v).unwrap();
        engine.set_bin_count(bin_count).unwrap();
        prop_assert_eq!(engine.snapshot().len(), bin_count);
        prop_assert_eq!(engine.snapshot().total_count(), values.len());
        let resolved: usize = (0..bin_count)
            .map(|bin| engine.resolve_click(bin, ElementSet::All).len())
            .sum();
        prop_assert_eq!(resolved, values.len());
    }
}
