// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed label measurement.
//!
//! [`ParleyTextMeasurer`] shapes tick labels with Parley and remembers what it
//! measured. An axis is laid out again on every resize and redraw with mostly
//! the same labels, so a repeated `(text, style)` pair skips shaping entirely.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use core::cell::RefCell;

use hashbrown::HashMap;
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{
    Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle,
    FontWeight as ParleyFontWeight, LayoutContext,
};
use ruler_text::{FontFamily, FontStyle, FontWeight, TextMeasurer, TextMetrics, TextStyle};

/// Labels remembered before the cache starts over.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// One measured label. Font sizes compare by bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    font_size: u64,
    family: FontFamily,
    weight: FontWeight,
    style: FontStyle,
}

impl LabelKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: String::from(text),
            font_size: style.font_size.to_bits(),
            family: style.font_family.clone(),
            weight: style.font_weight,
            style: style.font_style,
        }
    }
}

struct Shaper {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
}

/// A [`TextMeasurer`] that shapes the first line of each label with Parley.
///
/// Metrics are cached per label text and style, up to
/// [`DEFAULT_CACHE_CAPACITY`] entries unless configured otherwise. Reuse one
/// measurer across layout passes to benefit from it.
pub struct ParleyTextMeasurer {
    shaper: RefCell<Shaper>,
    labels: RefCell<HashMap<LabelKey, TextMetrics>>,
    cache_capacity: usize,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("cached_labels", &self.cached_labels())
            .field("cache_capacity", &self.cache_capacity)
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer using Parley's default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shaper: RefCell::new(Shaper {
                font_cx: FontContext::new(),
                layout_cx: LayoutContext::new(),
            }),
            labels: RefCell::new(HashMap::new()),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// Measurements are scaled back into logical pixels, so tick spacing stays
    /// independent of the device pixel ratio.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self.labels.get_mut().clear();
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self.labels.get_mut().clear();
        self
    }

    /// Sets how many labels are remembered. Zero turns caching off.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self.labels.get_mut().clear();
        self
    }

    /// Number of labels currently cached.
    pub fn cached_labels(&self) -> usize {
        self.labels.borrow().len()
    }

    /// Forgets every cached label, e.g. after the font set changed.
    pub fn clear_cache(&self) {
        self.labels.borrow_mut().clear();
    }

    fn shape(&self, line: &str, style: &TextStyle) -> TextMetrics {
        let scale = self.display_scale.max(1.0e-6);
        let mut shaper = self.shaper.borrow_mut();
        let Shaper { font_cx, layout_cx } = &mut *shaper;

        let mut builder = layout_cx.ranged_builder(font_cx, line, scale, self.quantize);
        for property in style_properties(style) {
            builder.push_default(property);
        }
        let mut layout: parley::Layout<()> = builder.build(line);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(first) = layout.lines().next() else {
            return TextMetrics::default();
        };
        let m = first.metrics();
        let logical = |v: f32| f64::from(v) / f64::from(scale);
        TextMetrics {
            advance_width: logical(m.advance),
            ascent: logical(m.ascent),
            descent: logical(m.descent),
            leading: logical(m.leading),
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let line = text.split('\n').next().unwrap_or_default();
        if line.is_empty() {
            return TextMetrics::default();
        }

        let key = LabelKey::new(line, style);
        let cached = self.labels.borrow().get(&key).copied();
        if let Some(metrics) = cached {
            return metrics;
        }

        let metrics = self.shape(line, style);
        if self.cache_capacity > 0 {
            let mut labels = self.labels.borrow_mut();
            if labels.len() >= self.cache_capacity {
                labels.clear();
            }
            labels.insert(key, metrics);
        }
        metrics
    }
}

/// Parley defaults for one label style.
fn style_properties(style: &TextStyle) -> [StyleProperty<'_, ()>; 4] {
    let family = match &style.font_family {
        FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
        FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
        FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
        FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
    };
    let slant = match style.font_style {
        FontStyle::Normal => ParleyFontStyle::Normal,
        FontStyle::Italic => ParleyFontStyle::Italic,
        FontStyle::Oblique => ParleyFontStyle::Oblique(None),
    };
    [
        StyleProperty::FontSize(font_size_f32(style.font_size)),
        StyleProperty::FontStack(FontStack::from(family)),
        StyleProperty::FontStyle(slant),
        StyleProperty::FontWeight(ParleyFontWeight::new(f32::from(style.font_weight.0))),
    ]
}

/// Non-finite and negative sizes become zero; huge ones saturate.
fn font_size_f32(font_size: f64) -> f32 {
    if !font_size.is_finite() {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to the f32 range first"
    )]
    {
        font_size.clamp(0.0, f64::from(f32::MAX)) as f32
    }
}
