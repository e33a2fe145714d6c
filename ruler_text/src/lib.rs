// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for tick label spacing.
//!
//! Axis tick generation needs to know how much room one label takes before it
//! can decide how many ticks fit along an axis. Glyph shaping stays downstream,
//! so the tick generator depends only on the tiny [`TextMeasurer`] interface
//! defined here.
//!
//! This crate is:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (a shaping engine, a canvas, or a fixed-size test double
//!   can all implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

use kurbo::Size;

/// Measures the rendered size of a single label.
///
/// The style is applied by passing it along with the text; measurers must not
/// keep style state between calls.
pub trait TextMeasurer {
    /// Measure a single line of text rendered with `style`.
    ///
    /// `text` is treated as a single line.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
///
/// Only what affects the measured box lives here; color and stroke belong to
/// the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Roboto Mono"`).
    Named(Arc<str>),
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of a box `width` wide and `height` tall, with the whole height
    /// above the baseline.
    #[must_use]
    pub fn from_box(width: f64, height: f64) -> Self {
        Self {
            advance_width: width,
            ascent: height,
            descent: 0.0,
            leading: 0.0,
        }
    }

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Horizontal extent of the label.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.advance_width
    }

    /// Vertical extent of the label.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.line_height()
    }

    /// The label's bounding box.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        let descent = 0.2 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            descent,
            leading: 0.0,
        }
    }
}

/// Reports the same box for every label, whatever the text or style.
///
/// Handy for golden tests of tick layout where shaping would add noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTextMeasurer {
    /// Width reported for every label.
    pub width: f64,
    /// Height reported for every label.
    pub height: f64,
}

impl FixedTextMeasurer {
    /// Creates a measurer that reports `width` x `height` for everything.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl TextMeasurer for FixedTextMeasurer {
    fn measure(&self, _text: &str, _style: &TextStyle) -> TextMetrics {
        TextMetrics::from_box(self.width, self.height)
    }
}
