// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatters.
//!
//! A formatter is anything implementing [`ValueFormatter`]; plain functions
//! and closures of type `Fn(&Value) -> String` qualify. Formatters never fail:
//! a value kind a formatter does not handle renders as `""`.
//!
//! Numeric patterns use printf-style float directives (`%.2f`, `%+08.3f`,
//! `%0.2f%%`, `%.3e`, `%g`), parsed once by [`FloatFormat::parse`].

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

use crate::error::FormatError;
use crate::value::Value;

/// Pattern used by [`float`].
pub const DEFAULT_FLOAT_FORMAT: &str = "%.2f";
/// Pattern used by [`percent`], applied after scaling by 100.
pub const DEFAULT_PERCENT_FORMAT: &str = "%0.2f%%";

/// Widths and precisions beyond this are clamped.
const MAX_WIDTH: usize = 100;

/// Renders a [`Value`] as a tick label.
pub trait ValueFormatter {
    /// Formats `value`, returning `""` for kinds this formatter does not handle.
    fn format(&self, value: &Value) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(&Value) -> String + ?Sized,
{
    fn format(&self, value: &Value) -> String {
        self(value)
    }
}

/// How a [`FloatFormat`] lays out the digits of a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    /// `%f`: fixed decimals.
    Fixed,
    /// `%e`: one leading digit and a signed, two-digit exponent.
    Exponent,
    /// `%g`: fixed or exponent, whichever suits the magnitude, without
    /// trailing zeros.
    General,
}

/// A parsed printf-style float pattern: literal text around one
/// `%[flags][width][.precision]verb` directive, where the verb is one of
/// `f`, `F`, `e`, `E`, `g` or `G`.
///
/// Supported flags are `-` (left align), `+` (always print a sign),
/// space (pad positive numbers with a space), `0` (zero pad) and `#`
/// (accepted, no effect). `%f` and `%e` default to 6 decimals. `%g` without a
/// precision prints the shortest digits that read back as the same number,
/// switching to exponent form below `1e-4` and from `1e6` up. `%%` is a
/// literal percent sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatFormat {
    prefix: Cow<'static, str>,
    suffix: Cow<'static, str>,
    width: usize,
    precision: Option<usize>,
    notation: Notation,
    upper: bool,
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
}

impl FloatFormat {
    /// `%.{precision}f` with no surrounding text.
    pub const fn fixed(precision: usize) -> Self {
        Self {
            prefix: Cow::Borrowed(""),
            suffix: Cow::Borrowed(""),
            width: 0,
            precision: Some(precision),
            notation: Notation::Fixed,
            upper: false,
            left: false,
            plus: false,
            space: false,
            zero: false,
        }
    }

    /// The percent pattern, `%0.2f%%`.
    pub const fn percent() -> Self {
        Self {
            prefix: Cow::Borrowed(""),
            suffix: Cow::Borrowed("%"),
            width: 0,
            precision: Some(2),
            notation: Notation::Fixed,
            upper: false,
            left: false,
            plus: false,
            space: false,
            zero: true,
        }
    }

    /// Parses a printf-style pattern holding exactly one float directive.
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        let mut out = Self::fixed(0);
        out.precision = None;
        let mut literal = String::new();
        let mut prefix = None;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if prefix.is_some() {
                return Err(FormatError::MultipleDirectives(pattern.to_string()));
            }

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => out.left = true,
                    '+' => out.plus = true,
                    ' ' => out.space = true,
                    '0' => out.zero = true,
                    '#' => {}
                    _ => break,
                }
                chars.next();
            }
            out.width = take_number(&mut chars).unwrap_or(0);
            if chars.peek() == Some(&'.') {
                chars.next();
                out.precision = Some(take_number(&mut chars).unwrap_or(0));
            }
            let Some(verb) = chars.next() else {
                return Err(FormatError::IncompleteDirective(pattern.to_string()));
            };
            out.notation = match verb.to_ascii_lowercase() {
                'f' => Notation::Fixed,
                'e' => Notation::Exponent,
                'g' => Notation::General,
                _ => {
                    return Err(FormatError::UnsupportedDirective {
                        pattern: pattern.to_string(),
                        verb,
                    });
                }
            };
            out.upper = verb.is_ascii_uppercase();
            prefix = Some(core::mem::take(&mut literal));
        }

        let Some(prefix) = prefix else {
            return Err(FormatError::MissingDirective(pattern.to_string()));
        };
        out.prefix = Cow::Owned(prefix);
        out.suffix = Cow::Owned(literal);
        Ok(out)
    }

    /// The precision written in the pattern, if any.
    ///
    /// For `%f` and `%e` this counts digits after the decimal point; for `%g`
    /// it counts significant digits.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Renders `v` with this pattern.
    pub fn render(&self, v: f64) -> String {
        let mut body = if v.is_finite() {
            match self.notation {
                Notation::Fixed => alloc::format!("{v:.*}", self.precision.unwrap_or(6)),
                Notation::Exponent => {
                    c_exponent(&alloc::format!("{v:.*e}", self.precision.unwrap_or(6)))
                }
                Notation::General => general(v, self.precision),
            }
        } else {
            v.to_string()
        };
        if self.upper && self.notation != Notation::Fixed {
            body = body.replace('e', "E");
        }
        if !body.starts_with('-') {
            if self.plus {
                body.insert(0, '+');
            } else if self.space {
                body.insert(0, ' ');
            }
        }

        let len = body.chars().count();
        if len < self.width {
            let pad = self.width - len;
            if self.left {
                body.extend(core::iter::repeat_n(' ', pad));
            } else if self.zero && v.is_finite() {
                let at = usize::from(body.starts_with(['+', '-', ' ']));
                body.insert_str(at, &"0".repeat(pad));
            } else {
                body.insert_str(0, &" ".repeat(pad));
            }
        }

        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&body);
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escape = |s: &str| s.replace('%', "%%");
        f.write_str(&escape(&self.prefix))?;
        f.write_str("%")?;
        for (on, c) in [
            (self.left, '-'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.zero, '0'),
        ] {
            if on {
                write!(f, "{c}")?;
            }
        }
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        let verb = match self.notation {
            Notation::Fixed => 'f',
            Notation::Exponent => 'e',
            Notation::General => 'g',
        };
        if self.upper {
            write!(f, "{}", verb.to_ascii_uppercase())?;
        } else {
            write!(f, "{verb}")?;
        }
        f.write_str(&escape(&self.suffix))
    }
}

/// Rewrites Rust's exponent suffix (`1.5e2`) the printf way (`1.5e+02`).
fn c_exponent(sci: &str) -> String {
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci.to_string();
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    alloc::format!("{mantissa}e{sign}{digits:0>2}")
}

/// `%g` for a finite `v`.
fn general(v: f64, precision: Option<usize>) -> String {
    // Exponent form is used once the decimal exponent reaches `cutoff`.
    let (sci, cutoff) = match precision {
        Some(p) => {
            let p = p.max(1);
            (alloc::format!("{v:.*e}", p - 1), p)
        }
        None => (alloc::format!("{v:e}"), 6),
    };
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    if exp < -4 || usize::try_from(exp).is_ok_and(|e| e >= cutoff) {
        return c_exponent(&alloc::format!("{mantissa}e{exp}"));
    }
    if precision.is_none() {
        return v.to_string();
    }
    let digits = mantissa.chars().filter(char::is_ascii_digit).count();
    let lead = usize::try_from(exp.unsigned_abs()).unwrap_or(0);
    let decimals = if exp >= 0 {
        digits.saturating_sub(lead + 1)
    } else {
        digits + lead - 1
    };
    alloc::format!("{v:.*}", decimals)
}

fn take_number(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let d = usize::try_from(d).unwrap_or(0);
        n = Some(
            n.unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(d)
                .min(MAX_WIDTH),
        );
    }
    n
}

/// Renders any numeric [`Value`] with `format`; other kinds render as `""`.
pub fn format_float_with(value: &Value, format: &FloatFormat) -> String {
    value
        .to_f64()
        .map(|v| format.render(v))
        .unwrap_or_default()
}

/// Renders any numeric [`Value`] with a printf-style `pattern`.
///
/// An invalid pattern renders as `""`; use [`FloatFormatter::new`] to have it
/// reported instead.
pub fn format_float(value: &Value, pattern: &str) -> String {
    match FloatFormat::parse(pattern) {
        Ok(format) => format_float_with(value, &format),
        Err(err) => {
            log::debug!("ignoring float pattern: {err}");
            String::new()
        }
    }
}

/// Two-decimal float labels (`%.2f`). The default tick formatter.
pub fn float(value: &Value) -> String {
    format_float_with(value, &FloatFormat::fixed(2))
}

/// Base-10 integer labels. Floats are truncated toward zero, not rounded.
pub fn int(value: &Value) -> String {
    match *value {
        Value::Int32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        #[allow(clippy::cast_possible_truncation, reason = "truncation is the contract")]
        Value::Float32(v) => (v as i64).to_string(),
        #[allow(clippy::cast_possible_truncation, reason = "truncation is the contract")]
        Value::Float64(v) => (v as i64).to_string(),
        Value::Timestamp(_) | Value::Unrecognized => String::new(),
    }
}

/// Percent labels for ratios: `0.4567` renders as `45.67%`.
///
/// Only [`Value::Float64`] is accepted.
pub fn percent(value: &Value) -> String {
    match *value {
        Value::Float64(v) => FloatFormat::percent().render(v * 100.0),
        _ => String::new(),
    }
}

/// A float formatter closed over a parsed pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatFormatter {
    format: FloatFormat,
}

impl FloatFormatter {
    /// Creates a formatter for a printf-style `pattern` such as `"%.3f"`.
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        FloatFormat::parse(pattern).map(Self::from)
    }

    /// The parsed pattern.
    pub fn float_format(&self) -> &FloatFormat {
        &self.format
    }
}

impl From<FloatFormat> for FloatFormatter {
    fn from(format: FloatFormat) -> Self {
        Self { format }
    }
}

impl ValueFormatter for FloatFormatter {
    fn format(&self, value: &Value) -> String {
        format_float_with(value, &self.format)
    }
}

/// Prefixes another formatter's label with a sigma multiple: `"2σ 1.50"`.
///
/// `k` is printed with no decimals.
#[derive(Clone, Debug)]
pub struct KSigmaFormatter<F> {
    k: f64,
    base: F,
}

impl<F: ValueFormatter> KSigmaFormatter<F> {
    /// Wraps `base`, labelling values as multiples of `k` sigma.
    pub fn new(k: f64, base: F) -> Self {
        Self { k, base }
    }
}

impl<F: ValueFormatter> ValueFormatter for KSigmaFormatter<F> {
    fn format(&self, value: &Value) -> String {
        alloc::format!("{:.0}σ {}", self.k, self.base.format(value))
    }
}
