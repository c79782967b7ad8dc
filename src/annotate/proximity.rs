// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hit-testing of placement requests against existing points.
//!
//! Distances are measured in percentage units, so the result does not
//! depend on zoom level or image resolution.

use crate::models::point::{Point, Position};
use crate::util::geometry::percent_distance;

/// Default distance below which a placement selects an existing point.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 1.5;

/// Nearest point strictly closer than `threshold` to `candidate`.
pub fn find_nearby<'a>(points: &'a [Point], candidate: Position, threshold: f64) -> Option<&'a Point> {
    points
        .iter()
        .map(|point| (point, percent_distance(point.position.as_tuple(), candidate.as_tuple())))
        .filter(|(_, distance)| *distance < threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(point, _)| point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::PointId;

    #[test]
    fn test_close_placement_hits_existing_point() {
        let points = vec![Point::committed(PointId(1), 50.0, 50.0, "Pecho")];
        let hit = find_nearby(&points, Position::normalized(50.1, 50.1), DEFAULT_PROXIMITY_THRESHOLD);
        assert_eq!(hit.map(|p| p.id), Some(PointId(1)));
    }

    #[test]
    fn test_threshold_is_strict() {
        let points = vec![Point::draft(PointId(1), 10.0, 10.0)];
        assert!(find_nearby(&points, Position::normalized(11.5, 10.0), 1.5).is_none());
        assert!(find_nearby(&points, Position::normalized(11.49, 10.0), 1.5).is_some());
    }

    #[test]
    fn test_nearest_point_wins() {
        let points = vec![
            Point::committed(PointId(1), 10.0, 10.0, "A"),
            Point::committed(PointId(2), 11.0, 10.0, "B"),
        ];
        let hit = find_nearby(&points, Position::normalized(10.8, 10.0), 1.5);
        assert_eq!(hit.map(|p| p.id), Some(PointId(2)));
    }

    #[test]
    fn test_empty_collection() {
        assert!(find_nearby(&[], Position::normalized(0.0, 0.0), 1.5).is_none());
    }
}
