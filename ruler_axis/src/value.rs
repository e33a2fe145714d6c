// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed inputs accepted by value formatters.

use chrono::{DateTime, Utc};

/// A value to be rendered as a tick label.
///
/// Formatters match on the variant and render the kinds they understand;
/// anything else (including [`Value::Unrecognized`]) renders as an empty label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// A 32-bit integer.
    Int32(i32),
    /// A 64-bit integer.
    Int64(i64),
    /// A 32-bit float.
    Float32(f32),
    /// A 64-bit float. Tick generation always labels with this kind.
    Float64(f64),
    /// A point in time.
    Timestamp(DateTime<Utc>),
    /// An input no formatter knows how to render.
    Unrecognized,
}

impl Value {
    /// Returns the value widened to `f64`, or `None` for non-numeric kinds.
    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            Self::Int32(v) => Some(f64::from(v)),
            Self::Int64(v) => Some(v as f64),
            Self::Float32(v) => Some(f64::from(v)),
            Self::Float64(v) => Some(v),
            Self::Timestamp(_) | Self::Unrecognized => None,
        }
    }

    /// Returns the value as a timestamp.
    ///
    /// Numeric kinds are read as nanoseconds since the Unix epoch; fractional
    /// nanoseconds are truncated and out-of-range floats saturate.
    pub fn to_timestamp(&self) -> Option<DateTime<Utc>> {
        let nanos = match *self {
            Self::Timestamp(t) => return Some(t),
            Self::Int32(v) => i64::from(v),
            Self::Int64(v) => v,
            #[allow(clippy::cast_possible_truncation, reason = "saturating cast")]
            Self::Float32(v) => v as i64,
            #[allow(clippy::cast_possible_truncation, reason = "saturating cast")]
            Self::Float64(v) => v as i64,
            Self::Unrecognized => return None,
        };
        Some(DateTime::from_timestamp_nanos(nanos))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

/// Converts a timestamp into the numeric axis value time formatters read back:
/// nanoseconds since the Unix epoch.
pub fn timestamp_to_value(t: DateTime<Utc>) -> f64 {
    let secs = t.timestamp() as f64;
    secs * 1e9 + f64::from(t.timestamp_subsec_nanos())
}
