// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Points live in percentage space: `x` and `y` are percentages of the
//! image width and height. This module converts between pixel offsets and
//! that space and keeps stored coordinates inside `[0, 100]` with two
//! decimals.

/// Upper bound of the percentage space.
pub const MAX_PERCENT: f64 = 100.0;

/// Clamp a raw percentage into `[0, 100]` and round it to two decimals.
///
/// Rounding is half away from zero. NaN resolves to `0.0` so the function
/// stays total. Idempotent: `normalize_percent(normalize_percent(v)) ==
/// normalize_percent(v)`.
pub fn normalize_percent(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    let clamped = raw.clamp(0.0, MAX_PERCENT);
    (clamped * 100.0).round() / 100.0
}

/// Convert a pixel offset inside an extent into a raw (unclamped) percentage.
pub fn to_percent(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    offset / extent * MAX_PERCENT
}

/// Convert a percentage back into a pixel offset inside an extent.
pub fn from_percent(percent: f64, extent: f64) -> f64 {
    percent / MAX_PERCENT * extent
}

/// Euclidean distance between two points in percentage units.
pub fn percent_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
