// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation store.
//!
//! Owns the ordered point collection, the active selection and the temporary
//! text buffer of the point being edited. Every operation is total: unknown
//! ids are ignored and blank text resolves to the fallback specification.

use crate::annotate::numbering;
use crate::models::point::{Point, PointId};
use std::fmt;

/// Broken store invariant. These indicate a defect in the calling code, not
/// a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More than one point is still a draft.
    MultipleDrafts(Vec<PointId>),
    /// A draft exists but is not the active point.
    InactiveDraft(PointId),
    /// The active id does not match any point.
    DanglingActive(PointId),
    /// The text buffer holds text while nothing is active.
    OrphanBuffer,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleDrafts(ids) => write!(f, "{} draft points exist: {:?}", ids.len(), ids),
            Self::InactiveDraft(id) => write!(f, "draft point {} is not active", id),
            Self::DanglingActive(id) => write!(f, "active point {} is not in the collection", id),
            Self::OrphanBuffer => write!(f, "text buffer is set with no active point"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Point collection plus edit state.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    /// Points in display order
    points: Vec<Point>,

    /// Point currently selected for viewing or editing
    active_id: Option<PointId>,

    /// In-progress text for the active point
    temp_specification: String,

    /// Next identifier to hand out
    next_id: u64,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            active_id: None,
            temp_specification: String::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with existing points.
    ///
    /// Drafts are dropped since a seed cannot carry an open edit.
    pub fn with_points(points: Vec<Point>) -> Self {
        let seeded: Vec<Point> = points.into_iter().filter(|p| !p.is_draft()).collect();
        let next_id = seeded.iter().map(|p| p.id.0).max().map_or(1, |max| max + 1);
        log::debug!("Seeded store with {} points", seeded.len());
        Self {
            points: seeded,
            active_id: None,
            temp_specification: String::new(),
            next_id,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn active_id(&self) -> Option<PointId> {
        self.active_id
    }

    /// The active point, if any.
    pub fn active_point(&self) -> Option<&Point> {
        self.active_id.and_then(|id| self.get(id))
    }

    pub fn temp_specification(&self) -> &str {
        &self.temp_specification
    }

    /// Replace the text buffer. Ignored while nothing is active.
    pub fn set_temp_specification(&mut self, text: impl Into<String>) {
        if self.active_id.is_some() {
            self.temp_specification = text.into();
        }
    }

    /// Display number of a point in the current collection.
    pub fn point_number(&self, point: &Point) -> Option<usize> {
        numbering::point_number(&self.points, point.id)
    }

    /// Append a draft point and make it active.
    ///
    /// A previously active draft is left in place; callers discard it first.
    pub fn add_point(&mut self, x: f64, y: f64) -> Point {
        let id = PointId(self.next_id);
        self.next_id += 1;

        let point = Point::draft(id, x, y);
        self.points.push(point.clone());
        self.active_id = Some(id);
        self.temp_specification.clear();

        log::debug!(
            "Added point {} at ({:.2}, {:.2}), total: {}",
            id,
            point.position.x,
            point.position.y,
            self.points.len()
        );
        point
    }

    /// Remove a point. Unknown ids are ignored.
    pub fn remove_point(&mut self, id: PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        let removed = self.points.len() != before;

        if self.active_id == Some(id) {
            self.clear_active();
        }
        if removed {
            log::debug!("Removed point {}, total: {}", id, self.points.len());
        }
        removed
    }

    /// Save text on a point and end the edit session.
    pub fn update_specification(&mut self, id: PointId, text: &str) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.commit(text);
            log::debug!("Saved specification on point {}", id);
        }
        self.clear_active();
    }

    /// End the edit session, discarding the active point if it is a draft.
    ///
    /// A committed point keeps its saved text.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.active_id {
            let before = self.points.len();
            self.points.retain(|p| p.id != id || !p.is_draft());
            if self.points.len() != before {
                log::debug!("Discarded draft point {}", id);
            }
        }
        self.clear_active();
    }

    /// Change the active point without touching the collection.
    ///
    /// Unknown ids are ignored. Deactivating clears the text buffer.
    pub fn set_active(&mut self, id: Option<PointId>) {
        match id {
            Some(id) if self.get(id).is_some() => self.active_id = Some(id),
            Some(_) => {}
            None => self.clear_active(),
        }
    }

    /// Report the first broken invariant, if any.
    pub fn invariant_violation(&self) -> Option<InvariantViolation> {
        let drafts: Vec<PointId> = self.points.iter().filter(|p| p.is_draft()).map(|p| p.id).collect();
        if drafts.len() > 1 {
            return Some(InvariantViolation::MultipleDrafts(drafts));
        }
        if let Some(&draft) = drafts.first() {
            if self.active_id != Some(draft) {
                return Some(InvariantViolation::InactiveDraft(draft));
            }
        }
        match self.active_id {
            Some(id) if self.get(id).is_none() => Some(InvariantViolation::DanglingActive(id)),
            None if !self.temp_specification.is_empty() => Some(InvariantViolation::OrphanBuffer),
            _ => None,
        }
    }

    fn clear_active(&mut self) {
        self.active_id = None;
        self.temp_specification.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::FALLBACK_SPECIFICATION;

    #[test]
    fn test_add_then_cancel_removes_draft() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);

        assert_eq!(store.len(), 1);
        assert_eq!(store.active_id(), Some(point.id));
        assert_eq!(store.points()[0].specification(), None);

        store.cancel_edit();
        assert!(store.is_empty());
        assert_eq!(store.active_id(), None);
    }

    #[test]
    fn test_update_specification_ends_session() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);
        store.set_temp_specification("Pecho: 95cm");

        store.update_specification(point.id, "Pecho: 95cm");
        assert_eq!(store.points()[0].specification(), Some("Pecho: 95cm"));
        assert_eq!(store.active_id(), None);
        assert_eq!(store.temp_specification(), "");
    }

    #[test]
    fn test_blank_text_stores_fallback() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);
        store.update_specification(point.id, "   ");
        assert_eq!(store.points()[0].specification(), Some(FALLBACK_SPECIFICATION));
    }

    #[test]
    fn test_cancel_keeps_committed_point() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);
        store.update_specification(point.id, "Cintura: 80cm");

        store.set_active(Some(point.id));
        store.set_temp_specification("Cintura: 82cm");
        store.cancel_edit();

        assert_eq!(store.len(), 1);
        assert_eq!(store.points()[0].specification(), Some("Cintura: 80cm"));
        assert_eq!(store.temp_specification(), "");
    }

    #[test]
    fn test_add_normalizes_coordinates() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(-4.0, 100.126);
        assert_eq!(point.position.x, 0.0);
        assert_eq!(point.position.y, 100.0);

        let point = store.add_point(33.3333, 66.6666);
        assert_eq!(point.position.x, 33.33);
        assert_eq!(point.position.y, 66.67);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut store = AnnotationStore::new();
        let a = store.add_point(1.0, 1.0).id;
        store.cancel_edit();
        let b = store.add_point(1.0, 1.0).id;
        assert!(b > a);
    }

    #[test]
    fn test_add_point_does_not_discard_previous_draft() {
        let mut store = AnnotationStore::new();
        let first = store.add_point(10.0, 10.0);
        let second = store.add_point(80.0, 80.0);

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_id(), Some(second.id));
        assert_eq!(
            store.invariant_violation(),
            Some(InvariantViolation::MultipleDrafts(vec![first.id, second.id]))
        );
    }

    #[test]
    fn test_remove_active_clears_session() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);
        store.set_temp_specification("Manga");

        assert!(store.remove_point(point.id));
        assert!(store.is_empty());
        assert_eq!(store.active_id(), None);
        assert_eq!(store.temp_specification(), "");
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(10.0, 20.0);
        store.update_specification(point.id, "Largo");

        assert!(!store.remove_point(PointId(999)));
        store.update_specification(PointId(999), "nada");
        store.set_active(Some(PointId(999)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.active_id(), None);
        assert_eq!(store.points()[0].specification(), Some("Largo"));
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let mut store = AnnotationStore::with_points(vec![Point::committed(PointId(3), 5.0, 5.0, "Cuello")]);
        store.set_active(Some(PointId(3)));
        store.set_temp_specification("Cuello");
        store.set_active(Some(PointId(3)));

        assert_eq!(store.active_id(), Some(PointId(3)));
        assert_eq!(store.temp_specification(), "Cuello");
        assert_eq!(store.active_point().map(|p| p.id), Some(PointId(3)));

        store.set_active(None);
        assert_eq!(store.active_point(), None);
        assert_eq!(store.temp_specification(), "");
    }

    #[test]
    fn test_buffer_ignored_without_active_point() {
        let mut store = AnnotationStore::new();
        store.set_temp_specification("nadie");
        assert_eq!(store.temp_specification(), "");
        assert_eq!(store.invariant_violation(), None);
    }

    #[test]
    fn test_seeded_store_drops_drafts_and_continues_ids() {
        let store = AnnotationStore::with_points(vec![
            Point::committed(PointId(10), 1.0, 1.0, "A"),
            Point::draft(PointId(20), 2.0, 2.0),
            Point::committed(PointId(4), 3.0, 3.0, "B"),
        ]);
        assert_eq!(store.len(), 2);

        let mut store = store;
        assert_eq!(store.add_point(50.0, 50.0).id, PointId(11));
    }

    #[test]
    fn test_point_number_tracks_position() {
        let mut store = AnnotationStore::new();
        let a = store.add_point(1.0, 1.0);
        store.update_specification(a.id, "A");
        let b = store.add_point(20.0, 20.0);
        store.update_specification(b.id, "B");

        assert_eq!(store.point_number(&b), Some(2));
        store.remove_point(a.id);
        assert_eq!(store.point_number(&b), Some(1));
        assert_eq!(store.point_number(&a), None);
    }

    #[test]
    fn test_inactive_draft_is_reported() {
        let mut store = AnnotationStore::new();
        let point = store.add_point(1.0, 1.0);
        store.set_active(None);
        assert_eq!(store.invariant_violation(), Some(InvariantViolation::InactiveDraft(point.id)));
    }
}
