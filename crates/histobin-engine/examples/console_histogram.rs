//! Renders numeric, categorical and date histograms as text bars
//!
//! Run with `RUST_LOG=histobin_engine=debug` to see rebinning and click logs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use histobin_core::Result;
use histobin_engine::{histograms, HistogramBuilder, HistogramClickEvent, HistogramEngine};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Person {
    name: String,
    age: u32,
    city: &'static str,
    born: DateTime<Utc>,
}

const CITIES: [&str; 4] = ["Berlin", "Lisbon", "Oslo", "Vienna"];
const BAR_WIDTH: usize = 40;

fn people(n: usize, rng: &mut StdRng) -> Vec<Person> {
    let epoch = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let age = rng.gen_range(0..90);
            Person {
                name: format!("Person{i}"),
                age,
                city: CITIES[rng.gen_range(0..CITIES.len())],
                born: epoch + Duration::days(rng.gen_range(0..365 * 70)),
            }
        })
        .collect()
}

fn render<T>(title: &str, engine: &HistogramEngine<T>) {
    println!("=== {title} ===");
    let snapshot = engine.snapshot();
    let scale = snapshot.max_count().max(1);
    for bar in snapshot.bars() {
        let highlighted = bar.highlighted * BAR_WIDTH / scale;
        let remainder = bar.remainder * BAR_WIDTH / scale;
        let label = engine.bin_label(bar.bin).unwrap_or_default().replace('\n', " .. ");
        println!(
            "{label:>45} |{}{} {}/{}",
            "#".repeat(highlighted),
            "-".repeat(remainder),
            bar.highlighted,
            bar.total()
        );
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let persons = people(500, &mut rng);
    let seniors: Vec<Person> = persons.iter().filter(|p| p.age >= 60).cloned().collect();

    let mut ages = histograms::numeric(persons.clone(), |p: &Person| p.age)?;
    ages.set_highlighted(seniors.clone());
    ages.add_listener(|event: &HistogramClickEvent<Person>| -> Result<()> {
        let names: Vec<&str> = event.bin_elements.iter().take(3).map(|p| p.name.as_str()).collect();
        println!(
            "clicked bin {} with {} people, e.g. {names:?}",
            event.bin,
            event.bin_elements.len()
        );
        Ok(())
    });
    render("Age", &ages);

    ages.set_bin_count(5)?;
    render("Age, 5 bins", &ages);
    ages.click(4, true)?;
    println!();

    let mut cities = histograms::categorical(persons.clone(), |p: &Person| p.city)?;
    cities.set_highlighted(seniors.clone());
    render("City", &cities);

    let mut births = HistogramBuilder::new()
        .bin_count(7)
        .date_pattern("%Y-%m-%d")
        .date(persons, |p: &Person| p.born)?;
    births.set_highlighted(seniors);
    render("Date of birth", &births);

    Ok(())
}
