// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Why a formatter pattern was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A float pattern has no `%f`, `%e` or `%g` directive.
    #[error("float pattern {0:?} has no float directive")]
    MissingDirective(String),
    /// A float pattern has more than one value directive.
    #[error("float pattern {0:?} has more than one directive")]
    MultipleDirectives(String),
    /// A directive other than a float verb (`f`, `e`, `g`, any case) or `%%`.
    #[error("unsupported directive %{verb} in float pattern {pattern:?}")]
    UnsupportedDirective {
        /// The offending pattern.
        pattern: String,
        /// The verb character after `%` and its flags.
        verb: char,
    },
    /// The pattern ends inside a directive.
    #[error("float pattern {0:?} ends inside a directive")]
    IncompleteDirective(String),
    /// A strftime pattern chrono cannot render.
    #[error("invalid time pattern {0:?}")]
    InvalidTimePattern(String),
}
