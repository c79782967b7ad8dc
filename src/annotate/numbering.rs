// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display numbering of points.
//!
//! A point's number is its position in the collection plus one. Numbers are
//! derived on every call and never stored, so they stay contiguous after
//! removals.

use crate::models::point::{Point, PointId};

/// 1-based display number of the point with `id`, if present.
pub fn point_number(points: &[Point], id: PointId) -> Option<usize> {
    points.iter().position(|p| p.id == id).map(|index| index + 1)
}

/// Every point paired with its display number, in display order.
pub fn numbered(points: &[Point]) -> impl Iterator<Item = (usize, &Point)> {
    points.iter().enumerate().map(|(index, point)| (index + 1, point))
}

/// Committed points paired with their global display number.
pub fn committed(points: &[Point]) -> impl Iterator<Item = (usize, &Point)> {
    numbered(points).filter(|(_, point)| !point.is_draft())
}
