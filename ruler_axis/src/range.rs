// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis ranges: a data interval plus the pixels available to draw it.

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A data interval mapped onto a pixel extent.
///
/// `min <= max` is not required. Anything needing a magnitude should use
/// `delta().abs()`. A range belongs to one render pass: the caller sets the
/// domain once the axis length is known, then translates and generates ticks.
pub trait Range: fmt::Display {
    /// The lower data bound (as authored).
    fn min(&self) -> f64;
    /// Sets the lower data bound.
    fn set_min(&mut self, min: f64);
    /// The upper data bound (as authored).
    fn max(&self) -> f64;
    /// Sets the upper data bound.
    fn set_max(&mut self, max: f64);

    /// `max - min`, signed.
    fn delta(&self) -> f64 {
        self.max() - self.min()
    }

    /// Suggested data spacing between ticks, or `0.0` for none.
    fn interval(&self) -> f64;

    /// Pixel length available for the axis.
    fn domain(&self) -> i32;
    /// Sets the pixel length available for the axis.
    fn set_domain(&mut self, domain: i32);

    /// Whether values decrease as pixel coordinates increase.
    fn is_descending(&self) -> bool;

    /// Maps a data value to a pixel offset in `0..=domain`.
    fn translate(&self, value: f64) -> i32;

    /// An unset range has both bounds at zero.
    fn is_zero(&self) -> bool {
        self.min() == 0.0 && self.max() == 0.0
    }
}

/// A linear [`Range`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousRange {
    /// Lower data bound.
    pub min: f64,
    /// Upper data bound.
    pub max: f64,
    /// Pixel length of the axis.
    pub domain: i32,
    /// Suggested tick spacing in data units (`0.0` for none).
    pub interval: f64,
    /// Whether values decrease along the axis.
    pub descending: bool,
}

impl ContinuousRange {
    /// Creates an ascending range over `min..max` with no domain yet.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Sets the pixel domain.
    #[must_use]
    pub fn with_domain(mut self, domain: i32) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the suggested tick spacing.
    #[must_use]
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the direction.
    #[must_use]
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Sets the suggested tick spacing in place.
    pub fn set_interval(&mut self, interval: f64) {
        self.interval = interval;
    }

    /// Sets the direction in place.
    pub fn set_descending(&mut self, descending: bool) {
        self.descending = descending;
    }
}

impl Range for ContinuousRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    fn interval(&self) -> f64 {
        self.interval
    }

    fn domain(&self) -> i32 {
        self.domain
    }

    fn set_domain(&mut self, domain: i32) {
        self.domain = domain;
    }

    fn is_descending(&self) -> bool {
        self.descending
    }

    fn translate(&self, value: f64) -> i32 {
        let delta = self.delta();
        let ratio = if delta == 0.0 || !delta.is_finite() {
            0.0
        } else {
            (value - self.min) / delta
        };
        let offset = (ratio * f64::from(self.domain)).ceil();
        #[allow(clippy::cast_possible_truncation, reason = "saturating cast")]
        let offset = offset as i32;
        if self.descending {
            self.domain.saturating_sub(offset)
        } else {
            offset
        }
    }
}

impl fmt::Display for ContinuousRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContinuousRange [{:.2},{:.2}] => {}",
            self.min, self.max, self.domain
        )?;
        if self.descending {
            f.write_str(" (descending)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn translate_hits_domain_endpoints() {
        let r = ContinuousRange::new(0.0, 10.0).with_domain(100);
        assert_eq!(r.translate(0.0), 0, "min maps to the start");
        assert_eq!(r.translate(10.0), 100, "max maps to the end");
        assert_eq!(r.translate(5.0), 50, "midpoint");
        assert_eq!(r.translate(2.5), 25, "linear in between");
    }

    #[test]
    fn descending_translate_swaps_endpoints() {
        let r = ContinuousRange::new(0.0, 10.0)
            .with_domain(100)
            .with_descending(true);
        assert_eq!(r.translate(0.0), 100, "min maps to the end");
        assert_eq!(r.translate(10.0), 0, "max maps to the start");
        assert_eq!(r.translate(7.5), 25, "linear in between");
    }

    #[test]
    fn reversed_bounds_still_translate() {
        let r = ContinuousRange::new(10.0, 0.0).with_domain(100);
        assert_eq!(r.translate(10.0), 0, "authored min maps to the start");
        assert_eq!(r.translate(0.0), 100, "authored max maps to the end");
        assert_eq!(r.delta(), -10.0, "delta keeps its sign");
    }

    #[test]
    fn flat_range_translates_to_start() {
        let r = ContinuousRange::new(3.0, 3.0).with_domain(100);
        assert_eq!(r.translate(3.0), 0, "no division by zero");
        assert_eq!(r.translate(7.0), 0, "every value lands on the start");
    }

    #[test]
    fn zero_range_is_unset() {
        let mut r = ContinuousRange::default();
        assert!(r.is_zero(), "default range is unset");
        r.set_max(1.0);
        assert!(!r.is_zero(), "a bound was set");
        r.set_domain(320);
        r.set_interval(0.25);
        assert_eq!(r.domain(), 320, "domain setter");
        assert_eq!(r.interval(), 0.25, "interval setter");
    }

    #[test]
    fn display_is_diagnostic() {
        let r = ContinuousRange::new(0.0, 1.5).with_domain(200);
        assert_eq!(r.to_string(), "ContinuousRange [0.00,1.50] => 200", "ascending");
        let r = r.with_descending(true);
        assert_eq!(
            r.to_string(),
            "ContinuousRange [0.00,1.50] => 200 (descending)",
            "descending marker"
        );
    }
}
