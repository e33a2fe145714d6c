// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis scaling and tick label generation.
//!
//! This crate turns an axis description into a finite list of labeled ticks:
//! - A [`Range`] holds the data interval, the pixels available to draw it,
//!   an optional suggested interval and the axis direction.
//! - [`generate_continuous_ticks`] measures a label with a
//!   [`ruler_text::TextMeasurer`], works out how many ticks fit without the
//!   labels colliding, and snaps them to readable values.
//! - [`format`] and [`time`] hold the label formatters; custom ones are any
//!   `Fn(&Value) -> String`.
//!
//! Drawing is out of scope: callers place each tick at
//! [`Range::translate`] of its value.
//!
//! ```
//! use ruler_axis::{AxisOrientation, ContinuousRange, generate_continuous_ticks};
//! use ruler_text::{FixedTextMeasurer, TextStyle};
//!
//! let range = ContinuousRange::new(0.0, 100.0).with_domain(500).with_interval(1.0);
//! let ticks = generate_continuous_ticks(
//!     &FixedTextMeasurer::new(40.0, 10.0),
//!     &range,
//!     AxisOrientation::Horizontal,
//!     &TextStyle::default(),
//!     None,
//! );
//! assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("0.00"));
//! assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("100.00"));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
#[cfg(not(feature = "std"))]
mod float;
pub mod format;
mod generate;
mod range;
mod tick;
pub mod time;
mod value;

pub use error::FormatError;
pub use format::{FloatFormat, FloatFormatter, KSigmaFormatter, ValueFormatter};
pub use generate::{
    AxisOrientation, DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING,
    DEFAULT_MINIMUM_TICK_VERTICAL_SPACING, DEFAULT_ROUNDING_DIVISOR,
    DEFAULT_TICK_COUNT_SANITY_CHECK, INTERVAL_MULTIPLIERS, TickConfig, TicksProvider,
    generate_continuous_ticks, generate_continuous_ticks_with, nice_rounding_unit, round_up,
};
pub use range::{ContinuousRange, Range};
pub use tick::{Tick, Ticks};
pub use time::TimeFormatter;
pub use value::{Value, timestamp_to_value};
