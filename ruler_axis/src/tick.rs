// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled ticks and ordered tick collections.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// One labeled mark on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data units.
    pub value: f64,
    /// Rendered label text.
    pub label: String,
}

impl Tick {
    /// Creates a tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// An ordered sequence of ticks, as drawn along one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks(Vec<Tick>);

impl Ticks {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tick.
    pub fn push(&mut self, tick: Tick) {
        self.0.push(tick);
    }

    /// Sorts ascending by value. NaN values sort last.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.value.total_cmp(&b.value));
    }

    /// Whether values never decrease from one tick to the next.
    pub fn is_ascending(&self) -> bool {
        self.0.windows(2).all(|w| w[0].value <= w[1].value)
    }

    /// Whether values never increase from one tick to the next.
    pub fn is_descending(&self) -> bool {
        self.0.windows(2).all(|w| w[0].value >= w[1].value)
    }

    /// Consumes the collection, returning the ticks.
    pub fn into_vec(self) -> Vec<Tick> {
        self.0
    }
}

impl Deref for Ticks {
    type Target = [Tick];

    fn deref(&self) -> &[Tick] {
        &self.0
    }
}

impl From<Vec<Tick>> for Ticks {
    fn from(ticks: Vec<Tick>) -> Self {
        Self(ticks)
    }
}

impl FromIterator<Tick> for Ticks {
    fn from_iter<I: IntoIterator<Item = Tick>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Ticks {
    type Item = Tick;
    type IntoIter = alloc::vec::IntoIter<Tick>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ticks {
    type Item = &'a Tick;
    type IntoIter = core::slice::Iter<'a, Tick>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// `[0: 0.00], [1: 50.00], [2: 100.00]`
impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tick) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{i}: {}]", tick.label)?;
        }
        Ok(())
    }
}
