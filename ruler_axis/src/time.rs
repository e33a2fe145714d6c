// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamp label formatters.
//!
//! Time axes are ordinary numeric ranges whose values are nanoseconds since the
//! Unix epoch (see [`crate::timestamp_to_value`]). The formatters here accept
//! either a [`Value::Timestamp`] or any numeric value read as epoch
//! nanoseconds, and render it with a strftime pattern in UTC.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;

use crate::error::FormatError;
use crate::format::ValueFormatter;
use crate::value::Value;

/// `2024-03-09`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `03-09 3PM`
pub const DATE_HOUR_FORMAT: &str = "%m-%d %-I%p";
/// `03-09 3:04PM`
pub const DATE_MINUTE_FORMAT: &str = "%m-%d %-I:%M%p";
/// `2024-03-09 15:04:05`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `3PM`
pub const HOUR_FORMAT: &str = "%-I%p";
/// `3:04PM`
pub const MINUTE_FORMAT: &str = "%-I:%M%p";
/// `15:04:05`
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Renders `value` as a UTC timestamp using a strftime `pattern`.
///
/// Non-time kinds and patterns chrono cannot render produce `""`.
pub fn format_time(value: &Value, pattern: &str) -> String {
    render(value, pattern, None)
}

fn render(value: &Value, pattern: &str, offset: Option<FixedOffset>) -> String {
    let Some(t) = value.to_timestamp() else {
        return String::new();
    };
    let items = StrftimeItems::new(pattern);
    let mut out = String::new();
    let written = match offset {
        Some(offset) => write!(
            out,
            "{}",
            t.with_timezone(&offset).format_with_items(items)
        ),
        None => write!(out, "{}", t.format_with_items(items)),
    };
    if written.is_err() {
        log::debug!("time pattern {pattern:?} could not render {t}");
        return String::new();
    }
    out
}

/// Labels as a date, e.g. `2024-03-09`.
pub fn date(value: &Value) -> String {
    format_time(value, DATE_FORMAT)
}

/// Labels as month-day and hour, e.g. `03-09 3PM`.
pub fn date_hour(value: &Value) -> String {
    format_time(value, DATE_HOUR_FORMAT)
}

/// Labels as month-day, hour and minute, e.g. `03-09 3:04PM`.
pub fn date_minute(value: &Value) -> String {
    format_time(value, DATE_MINUTE_FORMAT)
}

/// Labels as a full date and 24-hour time, e.g. `2024-03-09 15:04:05`.
pub fn date_time(value: &Value) -> String {
    format_time(value, DATE_TIME_FORMAT)
}

/// Labels as a 12-hour clock hour, e.g. `3PM`.
pub fn hour(value: &Value) -> String {
    format_time(value, HOUR_FORMAT)
}

/// Labels as a 12-hour clock time, e.g. `3:04PM`.
pub fn minute(value: &Value) -> String {
    format_time(value, MINUTE_FORMAT)
}

/// Labels as a 24-hour clock time, e.g. `15:04:05`.
pub fn time(value: &Value) -> String {
    format_time(value, TIME_FORMAT)
}

/// A timestamp formatter closed over a strftime pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeFormatter {
    pattern: Cow<'static, str>,
    offset: Option<FixedOffset>,
}

impl TimeFormatter {
    /// Creates a formatter for `pattern`, rejecting patterns chrono cannot parse.
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Result<Self, FormatError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidTimePattern(pattern.to_string()));
        }
        Ok(Self {
            pattern,
            offset: None,
        })
    }

    /// Renders in a fixed offset from UTC instead of UTC itself.
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl ValueFormatter for TimeFormatter {
    fn format(&self, value: &Value) -> String {
        render(value, &self.pattern, self.offset)
    }
}
