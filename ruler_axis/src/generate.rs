// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-aware continuous tick generation.
//!
//! Tick generation runs in two phases:
//! 1. **Fit**: measure one label and work out how many label-sized slots fit in
//!    the axis's pixel domain.
//! 2. **Snap**: if the range suggests a tick interval, pick the smallest "nice"
//!    multiple of it (1, 2, 5, 10, ...) whose tick count still fits.
//!
//! The first and last ticks sit exactly on the range bounds. Interior ticks
//! are rounded up to a magnitude-derived unit unless the caller supplied an
//! interval, in which case every tick is on the caller's grid.

extern crate alloc;

use ruler_text::{TextMeasurer, TextStyle};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::{self, ValueFormatter};
use crate::range::Range;
use crate::tick::{Tick, Ticks};
use crate::value::Value;

/// Space added after each label along a horizontal axis, in pixels.
pub const DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING: f64 = 5.0;
/// Space added after each label along a vertical axis, in pixels.
pub const DEFAULT_MINIMUM_TICK_VERTICAL_SPACING: f64 = 5.0;
/// Upper bound on the number of ticks one axis may produce.
pub const DEFAULT_TICK_COUNT_SANITY_CHECK: usize = 1 << 10;
/// The rounding unit for interior ticks is the nice unit divided by this.
pub const DEFAULT_ROUNDING_DIVISOR: f64 = 10.0;

/// Multiples of a suggested interval tried in order, smallest first.
pub const INTERVAL_MULTIPLIERS: [f64; 18] = [
    1.0,
    2.0,
    5.0,
    10.0,
    20.0,
    50.0,
    100.0,
    200.0,
    500.0,
    1_000.0,
    2_000.0,
    5_000.0,
    10_000.0,
    20_000.0,
    50_000.0,
    100_000.0,
    500_000.0,
    1_000_000.0,
];

/// Which way the axis runs on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Labels are laid out side by side; their widths limit the count.
    Horizontal,
    /// Labels are stacked; their heights limit the count.
    Vertical,
}

impl AxisOrientation {
    /// Returns [`AxisOrientation::Vertical`] when `is_vertical` is set.
    pub fn from_vertical(is_vertical: bool) -> Self {
        if is_vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// Tunable constants of the tick search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickConfig {
    /// Pixels kept free after each label on a horizontal axis.
    pub horizontal_spacing: f64,
    /// Pixels kept free after each label on a vertical axis.
    pub vertical_spacing: f64,
    /// Maximum number of ticks returned.
    pub sanity_ceiling: usize,
    /// Divides the nice rounding unit to get the interior tick rounding step.
    pub rounding_divisor: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_MINIMUM_TICK_VERTICAL_SPACING,
            sanity_ceiling: DEFAULT_TICK_COUNT_SANITY_CHECK,
            rounding_divisor: DEFAULT_ROUNDING_DIVISOR,
        }
    }
}

impl TickConfig {
    /// Set the horizontal label spacing.
    #[must_use]
    pub fn with_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the vertical label spacing.
    #[must_use]
    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the maximum number of ticks. Values below 2 are treated as 2.
    #[must_use]
    pub fn with_sanity_ceiling(mut self, ceiling: usize) -> Self {
        self.sanity_ceiling = ceiling;
        self
    }

    /// Set the rounding divisor.
    #[must_use]
    pub fn with_rounding_divisor(mut self, divisor: f64) -> Self {
        self.rounding_divisor = divisor;
        self
    }

    fn spacing(&self, orientation: AxisOrientation) -> f64 {
        match orientation {
            AxisOrientation::Horizontal => self.horizontal_spacing,
            AxisOrientation::Vertical => self.vertical_spacing,
        }
    }

    fn max_steps(&self) -> usize {
        self.sanity_ceiling.saturating_sub(1).max(1)
    }
}

/// Something that knows how to lay out its own ticks.
pub trait TicksProvider {
    /// Generates labeled ticks for an axis running in `orientation`.
    fn ticks(
        &self,
        measurer: &dyn TextMeasurer,
        orientation: AxisOrientation,
        style: &TextStyle,
        formatter: Option<&dyn ValueFormatter>,
    ) -> Ticks;
}

impl<R: Range> TicksProvider for R {
    fn ticks(
        &self,
        measurer: &dyn TextMeasurer,
        orientation: AxisOrientation,
        style: &TextStyle,
        formatter: Option<&dyn ValueFormatter>,
    ) -> Ticks {
        generate_continuous_ticks(measurer, self, orientation, style, formatter)
    }
}

/// Generates ticks for `range` with the default [`TickConfig`].
///
/// `formatter` defaults to [`format::float`]. See
/// [`generate_continuous_ticks_with`].
pub fn generate_continuous_ticks(
    measurer: &dyn TextMeasurer,
    range: &dyn Range,
    orientation: AxisOrientation,
    style: &TextStyle,
    formatter: Option<&dyn ValueFormatter>,
) -> Ticks {
    generate_continuous_ticks_with(
        &TickConfig::default(),
        measurer,
        range,
        orientation,
        style,
        formatter,
    )
}

/// Generates ticks for `range`, spaced so that labels measured with `style`
/// do not collide.
///
/// Never fails. A range with no pixel room, no value span, or labels too
/// large to fit even once yields a single tick at the range's start (`min`,
/// or `max` when descending). Otherwise ticks run from the start bound to the
/// end bound in the range's direction, at most `config.sanity_ceiling` of them.
pub fn generate_continuous_ticks_with(
    config: &TickConfig,
    measurer: &dyn TextMeasurer,
    range: &dyn Range,
    orientation: AxisOrientation,
    style: &TextStyle,
    formatter: Option<&dyn ValueFormatter>,
) -> Ticks {
    let default_formatter: &dyn ValueFormatter = &format::float;
    let formatter = formatter.unwrap_or(default_formatter);
    let label = |value: f64| Tick::new(value, formatter.format(&Value::Float64(value)));

    let (min, max) = (range.min(), range.max());
    let descending = range.is_descending();
    let start = if descending { max } else { min };

    let label_box = measurer
        .measure(&formatter.format(&Value::Float64(min)), style)
        .size();
    let tick_size = match orientation {
        AxisOrientation::Horizontal => label_box.width,
        AxisOrientation::Vertical => label_box.height,
    } + config.spacing(orientation);

    let interval = range.interval();
    let value_range = (max - min).abs();
    let visual_range = f64::from(range.domain());

    if !value_range.is_finite() || value_range == 0.0 || visual_range <= 0.0 {
        log::debug!("degenerate axis {range}: single tick");
        return core::iter::once(label(start)).collect();
    }

    let mut tick_count = to_count(visual_range / tick_size);
    let mut value_step = value_range / tick_count as f64;

    if interval != 0.0
        && let Some((count, step)) = INTERVAL_MULTIPLIERS.iter().find_map(|m| {
            let step = interval * m;
            let count = to_count(value_range / step);
            (count <= tick_count).then_some((count, step))
        })
    {
        tick_count = count;
        value_step = step;
    }

    if tick_count > config.max_steps() {
        log::debug!(
            "clamping {tick_count} tick steps on {range} to {}",
            config.max_steps()
        );
        tick_count = config.max_steps();
        if interval == 0.0 {
            value_step = value_range / tick_count as f64;
        }
    } else if tick_count < 1 {
        log::debug!("labels do not fit on {range}: single tick");
        return core::iter::once(label(start)).collect();
    }

    log::trace!(
        "{range}: {tick_count} steps of {value_step} ({orientation:?}, tick size {tick_size})"
    );

    // Ticks walk from the start bound toward the other one, even when the
    // bounds were authored in reverse.
    let toward = if (max >= min) != descending { 1.0 } else { -1.0 };
    let round_to = interior_rounding_unit(
        nice_rounding_unit(value_range) / config.rounding_divisor,
        value_step,
    );
    (0..=tick_count)
        .map(|x| {
            let offset = if interval != 0.0 || x == 0 {
                value_step * x as f64
            } else if x == tick_count {
                value_range
            } else {
                round_up(value_step * x as f64, round_to).min(value_range)
            };
            label(start + toward * offset)
        })
        .collect()
}

/// Floors a tick count, mapping NaN and anything below one to zero.
fn to_count(steps: f64) -> usize {
    let steps = steps.floor();
    if steps.is_nan() || steps < 1.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, reason = "saturating cast")]
    {
        steps as usize
    }
}

/// Shrinks `round_to` by powers of ten until it is at most a tenth of `step`.
///
/// Offsets `step` apart, each rounded up by less than a tenth of `step`, stay
/// strictly increasing, so no two interior ticks collapse onto one value.
fn interior_rounding_unit(mut round_to: f64, step: f64) -> f64 {
    while round_to.is_finite() && round_to >= 1e-15 && round_to * 10.0 > step {
        round_to /= 10.0;
    }
    round_to
}

/// The magnitude used to round interior ticks of a span of `delta`.
///
/// Returns one tenth of the largest power of ten (at most `1e10`) that `delta`
/// exceeds, or zero when `delta` exceeds none of them.
pub fn nice_rounding_unit(delta: f64) -> f64 {
    let mut cursor = 1e10_f64;
    while cursor > 0.0 {
        if delta > cursor {
            return cursor / 10.0;
        }
        cursor /= 10.0;
    }
    0.0
}

/// Rounds `value` up to the next multiple of `round_to`.
///
/// A `round_to` below `1e-15` leaves `value` untouched.
pub fn round_up(value: f64, round_to: f64) -> f64 {
    if round_to < 1e-15 || !round_to.is_finite() {
        return value;
    }
    (value / round_to).ceil() * round_to
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::format::{int, percent};
    use crate::range::ContinuousRange;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use ruler_text::{FixedTextMeasurer, HeuristicTextMeasurer, TextMetrics};

    /// Records every label it is asked to measure.
    struct RecordingMeasurer {
        seen: RefCell<Vec<(String, f64)>>,
    }

    impl TextMeasurer for RecordingMeasurer {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            self.seen
                .borrow_mut()
                .push((String::from(text), style.font_size));
            TextMetrics::from_box(40.0, 10.0)
        }
    }

    fn labels(ticks: &Ticks) -> Vec<&str> {
        ticks.iter().map(|t| t.label.as_str()).collect()
    }

    fn horizontal(range: &ContinuousRange) -> Ticks {
        generate_continuous_ticks(
            &FixedTextMeasurer::new(40.0, 10.0),
            range,
            AxisOrientation::Horizontal,
            &TextStyle::default(),
            None,
        )
    }

    #[test]
    fn fits_labels_and_rounds_interior_ticks() {
        let range = ContinuousRange::new(0.0, 100.0).with_domain(500);
        let ticks = horizontal(&range);
        assert_eq!(
            labels(&ticks),
            [
                "0.00", "9.10", "18.20", "27.30", "36.40", "45.50", "54.60", "63.70", "72.80",
                "81.90", "91.00", "100.00"
            ],
            "11 steps of 100/11, interior ticks rounded up to 0.1"
        );
        assert_eq!(ticks[0].value, 0.0, "first tick is exactly min");
        assert_eq!(ticks[11].value, 100.0, "last tick is exactly max");
        assert!(ticks.is_ascending(), "ascending range gives ascending ticks");
    }

    #[test]
    fn vertical_axis_uses_label_height() {
        let range = ContinuousRange::new(0.0, 100.0).with_domain(150);
        let ticks = generate_continuous_ticks(
            &FixedTextMeasurer::new(40.0, 10.0),
            &range,
            AxisOrientation::Vertical,
            &TextStyle::default(),
            None,
        );
        // 150 / (10 + 5) = 10 steps.
        assert_eq!(ticks.len(), 11, "height-limited count");
        assert_eq!(ticks[1].label, "10.00", "exact tenth of the span");
    }

    #[test]
    fn suggested_interval_snaps_to_nice_multiple() {
        let range = ContinuousRange::new(0.0, 100.0)
            .with_domain(500)
            .with_interval(1.0);
        let ticks = horizontal(&range);
        // 1, 2 and 5 would need 100, 50 and 20 ticks; 10 needs 10 <= 11.
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(
            values,
            [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
            "every tick sits on the interval grid"
        );
    }

    #[test]
    fn unfittable_interval_keeps_fit_count() {
        let range = ContinuousRange::new(0.0, 1e6)
            .with_domain(500)
            .with_interval(1e-9);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 12, "no multiplier fits: 11 fitted steps stand");
        assert_eq!(ticks[0].value, 0.0, "starts at min");
    }

    #[test]
    fn interval_larger_than_span_is_single_tick() {
        let range = ContinuousRange::new(0.0, 10.0)
            .with_domain(500)
            .with_interval(50.0);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 1, "no whole interval fits in the span");
        assert_eq!(ticks[0].label, "0.00", "tick at the start");
    }

    #[test]
    fn descending_range_starts_at_max() {
        let range = ContinuousRange::new(0.0, 10.0)
            .with_domain(100)
            .with_descending(true);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 3, "two steps fit in 100px");
        assert_eq!(ticks[0].value, 10.0, "first tick is max");
        assert_eq!(ticks[2].value, 0.0, "last tick is min");
        assert!(ticks.is_descending(), "values decrease along the axis");
    }

    #[test]
    fn descending_interval_grid() {
        let range = ContinuousRange::new(0.0, 10.0)
            .with_domain(500)
            .with_interval(2.5)
            .with_descending(true);
        let values: Vec<f64> = horizontal(&range).iter().map(|t| t.value).collect();
        assert_eq!(values, [10.0, 7.5, 5.0, 2.5, 0.0], "stepped down from max");
    }

    #[test]
    fn tiny_domain_degrades_to_single_tick() {
        let range = ContinuousRange::new(0.0, 100.0).with_domain(1);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 1, "label does not fit even once");
        assert_eq!(ticks[0].value, 0.0, "tick at min");
        assert_eq!(ticks[0].label, "0.00", "formatted like any other tick");

        let ticks = horizontal(&range.with_descending(true));
        assert_eq!(ticks[0].value, 100.0, "descending starts at max");
    }

    #[test]
    fn broken_geometry_degrades_to_single_tick() {
        for range in [
            ContinuousRange::new(0.0, 100.0),
            ContinuousRange::new(0.0, 100.0).with_domain(-40),
            ContinuousRange::new(5.0, 5.0).with_domain(500),
            ContinuousRange::new(0.0, f64::INFINITY).with_domain(500),
            ContinuousRange::new(f64::NAN, 1.0).with_domain(500),
        ] {
            assert_eq!(horizontal(&range).len(), 1, "single tick for {range}");
        }
    }

    #[test]
    fn reversed_bounds_use_magnitude() {
        let range = ContinuousRange::new(100.0, 0.0).with_domain(500);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 12, "same count as 0..100");
        assert_eq!(ticks[0].value, 100.0, "starts at the authored min");
        assert_eq!(ticks[11].value, 0.0, "ends at the authored max");
        assert!(ticks.is_descending(), "walks toward max");
    }

    #[test]
    fn sanity_ceiling_bounds_output() {
        let measurer = FixedTextMeasurer::new(0.0, 0.0);
        let config = TickConfig::default().with_horizontal_spacing(0.0);
        let range = ContinuousRange::new(0.0, 1e6).with_domain(1000);
        let ticks = generate_continuous_ticks_with(
            &config,
            &measurer,
            &range,
            AxisOrientation::Horizontal,
            &TextStyle::default(),
            None,
        );
        assert_eq!(ticks.len(), DEFAULT_TICK_COUNT_SANITY_CHECK, "clamped");
        assert_eq!(
            ticks.last().map(|t| t.value),
            Some(1e6),
            "clamped axis still reaches max"
        );
        assert!(
            ticks.windows(2).all(|w| w[0].value < w[1].value),
            "rounding never breaks ordering"
        );

        let range = ContinuousRange::new(0.0, 1e5)
            .with_domain(1_000_000)
            .with_interval(1.0);
        let ticks = generate_continuous_ticks_with(
            &config.with_sanity_ceiling(16),
            &measurer,
            &range,
            AxisOrientation::Horizontal,
            &TextStyle::default(),
            None,
        );
        assert_eq!(ticks.len(), 16, "custom ceiling");
        assert_eq!(ticks[15].value, 15.0, "interval grid is kept");
    }

    #[test]
    fn interior_ticks_never_repeat() {
        // 111 steps of ~0.91 are finer than the span's 1.0 rounding unit.
        let range = ContinuousRange::new(0.0, 101.0).with_domain(5000);
        let ticks = horizontal(&range);
        assert_eq!(ticks.len(), 112, "every fitted step is kept");
        assert!(
            ticks.windows(2).all(|w| w[0].value < w[1].value),
            "values strictly increase"
        );
        assert!(
            ticks.windows(2).all(|w| w[0].label != w[1].label),
            "neighbouring labels differ"
        );
        assert_eq!(ticks[1].label, "0.91", "rounded to a finer unit");
        assert_eq!(ticks[111].value, 101.0, "last tick is exactly max");
    }

    #[test]
    fn rounding_divisor_and_spacing_are_tunable() {
        let range = ContinuousRange::new(0.0, 100.0).with_domain(315);
        let measurer = FixedTextMeasurer::new(40.0, 10.0);
        let run = |config: &TickConfig, orientation, range: &ContinuousRange| {
            generate_continuous_ticks_with(
                config,
                &measurer,
                range,
                orientation,
                &TextStyle::default(),
                None,
            )
        };

        let tenths = run(&TickConfig::default(), AxisOrientation::Horizontal, &range);
        assert_eq!(
            labels(&tenths),
            ["0.00", "14.30", "28.60", "42.90", "57.20", "71.50", "85.80", "100.00"],
            "default divisor rounds up to 0.1"
        );

        let whole = run(
            &TickConfig::default().with_rounding_divisor(1.0),
            AxisOrientation::Horizontal,
            &range,
        );
        assert_eq!(
            labels(&whole),
            ["0.00", "15.00", "29.00", "43.00", "58.00", "72.00", "86.00", "100.00"],
            "divisor 1 rounds up to whole units"
        );

        let tall = ContinuousRange::new(0.0, 100.0).with_domain(150);
        let roomy = run(
            &TickConfig::default().with_vertical_spacing(20.0),
            AxisOrientation::Vertical,
            &tall,
        );
        // 150 / (10 + 20) = 5 steps instead of 10.
        assert_eq!(roomy.len(), 6, "wider vertical spacing fits fewer ticks");
        assert_eq!(roomy[1].label, "20.00", "even fifths of the span");
    }

    #[test]
    fn labels_match_formatter_and_output_is_stable() {
        let ranges = [
            ContinuousRange::new(0.0, 1.0).with_domain(300),
            ContinuousRange::new(-50.0, 1234.5).with_domain(800),
            ContinuousRange::new(0.0, 1e9).with_domain(640).with_descending(true),
            ContinuousRange::new(3.0, 17.0).with_domain(200).with_interval(0.5),
        ];
        for range in ranges {
            for formatter in [&format::float as &dyn ValueFormatter, &int, &percent] {
                let a = generate_continuous_ticks(
                    &HeuristicTextMeasurer,
                    &range,
                    AxisOrientation::Horizontal,
                    &TextStyle::new(12.0),
                    Some(formatter),
                );
                let b = generate_continuous_ticks(
                    &HeuristicTextMeasurer,
                    &range,
                    AxisOrientation::Horizontal,
                    &TextStyle::new(12.0),
                    Some(formatter),
                );
                assert_eq!(a, b, "deterministic for {range}");
                assert!(!a.is_empty(), "at least one tick for {range}");
                assert!(a.len() <= DEFAULT_TICK_COUNT_SANITY_CHECK, "bounded");
                for tick in &a {
                    assert_eq!(
                        tick.label,
                        formatter.format(&Value::Float64(tick.value)),
                        "label is the formatted value"
                    );
                }
                if range.descending {
                    assert!(a.is_descending(), "descending order for {range}");
                } else {
                    assert!(a.is_ascending(), "ascending order for {range}");
                }
            }
        }
    }

    #[test]
    fn measures_min_label_with_given_style() {
        let measurer = RecordingMeasurer {
            seen: RefCell::new(Vec::new()),
        };
        let range = ContinuousRange::new(2.5, 7.5).with_domain(100);
        let _ = generate_continuous_ticks(
            &measurer,
            &range,
            AxisOrientation::Horizontal,
            &TextStyle::new(18.0),
            Some(&int),
        );
        assert_eq!(
            measurer.seen.into_inner(),
            [(String::from("2"), 18.0)],
            "one measurement of the formatted min"
        );
    }

    #[test]
    fn provider_delegates_to_generator() {
        let range = ContinuousRange::new(0.0, 100.0).with_domain(500);
        let via_trait = range.ticks(
            &FixedTextMeasurer::new(40.0, 10.0),
            AxisOrientation::from_vertical(false),
            &TextStyle::default(),
            None,
        );
        assert_eq!(via_trait, horizontal(&range), "same ticks either way");
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(nice_rounding_unit(100.0), 1.0, "100 exceeds 10");
        assert_eq!(nice_rounding_unit(10.0), 0.1, "10 exceeds 1");
        assert_eq!(nice_rounding_unit(5e10), 1e9, "capped at 1e10");
        assert_eq!(nice_rounding_unit(0.0), 0.0, "nothing exceeded");
        assert_eq!(round_up(9.0, 5.0), 10.0, "next multiple");
        assert_eq!(round_up(10.0, 5.0), 10.0, "already a multiple");
        assert_eq!(round_up(1.234, 0.0), 1.234, "tiny unit is a no-op");
    }
}
