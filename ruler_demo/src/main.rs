// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the ticks generated for a few axes, standing in for a renderer.
//!
//! Set `RUST_LOG=trace` to see the tick search. Build with `--features parley`
//! to measure labels with real fonts.

use chrono::{TimeZone, Utc};
use log::LevelFilter;
use ruler_axis::{
    AxisOrientation, ContinuousRange, KSigmaFormatter, Range, TicksProvider, TimeFormatter,
    ValueFormatter, format, time, timestamp_to_value,
};
use ruler_text::{TextMeasurer, TextStyle};

fn main() {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger unavailable: {err}");
    }

    let measurer = measurer();
    let style = TextStyle::new(11.0);

    let mut linear = ContinuousRange::new(0.0, 100.0);
    linear.set_domain(500);
    print_axis("linear, 500px", &linear, &*measurer, &style, None);

    let stepped = linear.with_interval(2.5);
    print_axis("interval 2.5", &stepped, &*measurer, &style, None);

    let price = ContinuousRange::new(1812.4, 1893.7)
        .with_domain(320)
        .with_descending(true);
    print_axis("descending, vertical", &price, &*measurer, &style, None);

    let ratio = ContinuousRange::new(0.0, 1.0).with_domain(240);
    print_axis("percent", &ratio, &*measurer, &style, Some(&format::percent));

    let sigma = KSigmaFormatter::new(2.0, format::float);
    let spread = ContinuousRange::new(-3.0, 3.0).with_domain(400);
    print_axis("k-sigma", &spread, &*measurer, &style, Some(&sigma));

    let Some(start) = Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).single() else {
        return;
    };
    let end = start + chrono::Duration::hours(12);
    let day = ContinuousRange::new(timestamp_to_value(start), timestamp_to_value(end))
        .with_domain(900)
        .with_interval(3_600e9);
    print_axis("time of day", &day, &*measurer, &style, Some(&time::minute));

    match TimeFormatter::new("%a %H:%M") {
        Ok(custom) => print_axis("custom time pattern", &day, &*measurer, &style, Some(&custom)),
        Err(err) => log::warn!("{err}"),
    }

    let cramped = ContinuousRange::new(0.0, 100.0).with_domain(1);
    print_axis("no room", &cramped, &*measurer, &style, None);
}

fn print_axis(
    title: &str,
    range: &ContinuousRange,
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
    formatter: Option<&dyn ValueFormatter>,
) {
    // Price-style axes run top to bottom with the largest value first.
    let orientation = AxisOrientation::from_vertical(range.is_descending());
    let ticks = range.ticks(measurer, orientation, style, formatter);
    println!("{title}: {range} ({orientation:?})");
    println!("  {ticks}");
    for tick in &ticks {
        println!("  {:>5}px  {}", range.translate(tick.value), tick.label);
    }
}

#[cfg(feature = "parley")]
fn measurer() -> Box<dyn TextMeasurer> {
    Box::new(ruler_text_parley::ParleyTextMeasurer::new())
}

#[cfg(not(feature = "parley"))]
fn measurer() -> Box<dyn TextMeasurer> {
    Box::new(ruler_text::HeuristicTextMeasurer)
}
