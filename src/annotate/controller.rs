// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interaction policy for placing, selecting and editing points.
//!
//! The controller turns UI events (double-click placement, marker clicks,
//! text edits, save and cancel) into store operations. Each handler returns
//! an [`EditEvent`] describing what changed so the presentation layer can
//! react without observing the store directly.
//!
//! At most one draft point exists at any time, and it is always the active
//! point. Every handler re-checks this in debug builds.

use crate::annotate::proximity::{find_nearby, DEFAULT_PROXIMITY_THRESHOLD};
use crate::annotate::store::AnnotationStore;
use crate::models::point::{Point, PointId, Position};

/// Outcome of a handled UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// A new draft point was placed and activated.
    Created(PointId),
    /// An existing point became active.
    Selected(PointId),
    /// The active point's saved text was loaded into the buffer.
    Opened(PointId),
    /// Text was saved on a point.
    Committed(PointId),
    /// A draft point was thrown away.
    Discarded(PointId),
    /// The edit session on a saved point ended without changes.
    Closed(PointId),
    /// A point was deleted.
    Removed(PointId),
    /// The buffer of the active point changed.
    Edited(PointId),
    /// Nothing changed.
    Ignored,
}

/// Edit session state, derived from the store.
///
/// Selecting a saved point loads its text into the buffer, so a freshly
/// selected point reports `Editing`; `Viewing` is the state after the buffer
/// was emptied while the point stayed active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    /// The active point has never been saved.
    Drafting(PointId),
    /// A saved point is active with an empty buffer.
    Viewing(PointId),
    /// A saved point is active and its buffer holds text.
    Editing(PointId),
}

/// Translates UI events into [`AnnotationStore`] calls.
#[derive(Debug, Clone)]
pub struct EditController {
    store: AnnotationStore,
    proximity_threshold: f64,
}

impl Default for EditController {
    fn default() -> Self {
        Self::new(AnnotationStore::new())
    }
}

impl EditController {
    pub fn new(store: AnnotationStore) -> Self {
        Self {
            store,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
        }
    }

    /// Set the distance below which a placement selects an existing point.
    pub fn with_proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn points(&self) -> &[Point] {
        self.store.points()
    }

    pub fn active_point(&self) -> Option<&Point> {
        self.store.active_point()
    }

    pub fn temp_specification(&self) -> &str {
        self.store.temp_specification()
    }

    pub fn point_number(&self, point: &Point) -> Option<usize> {
        self.store.point_number(point)
    }

    pub fn state(&self) -> EditState {
        match self.store.active_point() {
            None => EditState::Idle,
            Some(point) if point.is_draft() => EditState::Drafting(point.id),
            Some(point) if self.store.temp_specification().is_empty() => EditState::Viewing(point.id),
            Some(point) => EditState::Editing(point.id),
        }
    }

    /// Double-click at a position given in percentages of the rendered image.
    ///
    /// Selects the nearest existing point within the proximity threshold,
    /// otherwise discards any open draft and places a new one.
    pub fn placement_requested(&mut self, x: f64, y: f64) -> EditEvent {
        let candidate = Position::normalized(x, y);
        let nearby = find_nearby(self.store.points(), candidate, self.proximity_threshold).map(|p| p.id);

        let event = match nearby {
            Some(id) if self.store.active_id() == Some(id) => EditEvent::Ignored,
            Some(id) => self.activate(id),
            None => {
                self.discard_open_draft();
                EditEvent::Created(self.store.add_point(candidate.x, candidate.y).id)
            }
        };
        self.finish(event)
    }

    /// Click on a marker. With Ctrl held the point is deleted; otherwise the
    /// click selects it, or toggles the edit buffer if it is already active.
    pub fn point_clicked(&mut self, id: PointId, ctrl_held: bool) -> EditEvent {
        let event = if ctrl_held {
            if self.store.remove_point(id) {
                EditEvent::Removed(id)
            } else {
                EditEvent::Ignored
            }
        } else {
            self.select_point(id)
        };
        self.finish(event)
    }

    /// Replace the edit buffer of the active point.
    pub fn text_changed(&mut self, text: &str) -> EditEvent {
        let event = match self.store.active_id() {
            Some(id) => {
                self.store.set_temp_specification(text);
                EditEvent::Edited(id)
            }
            None => EditEvent::Ignored,
        };
        self.finish(event)
    }

    /// Save the buffer on the active point.
    ///
    /// Saving a draft with blank text discards it. A saved point cleared to
    /// blank text keeps the fallback specification.
    pub fn save_requested(&mut self) -> EditEvent {
        let event = match self.store.active_point() {
            Some(point) if point.is_draft() && self.store.temp_specification().trim().is_empty() => {
                let id = point.id;
                self.store.cancel_edit();
                EditEvent::Discarded(id)
            }
            Some(point) => {
                let id = point.id;
                let text = self.store.temp_specification().to_string();
                self.store.update_specification(id, &text);
                EditEvent::Committed(id)
            }
            None => EditEvent::Ignored,
        };
        self.finish(event)
    }

    /// Close the edit session, discarding the active point if it is a draft.
    pub fn cancel_requested(&mut self) -> EditEvent {
        let event = match self.store.active_point() {
            Some(point) => {
                let (id, draft) = (point.id, point.is_draft());
                self.store.cancel_edit();
                if draft {
                    EditEvent::Discarded(id)
                } else {
                    EditEvent::Closed(id)
                }
            }
            None => EditEvent::Ignored,
        };
        self.finish(event)
    }

    fn select_point(&mut self, id: PointId) -> EditEvent {
        let Some(point) = self.store.get(id) else {
            return EditEvent::Ignored;
        };
        let (draft, saved) = (point.is_draft(), point.specification().map(str::to_string));
        if self.store.active_id() != Some(id) {
            return self.activate(id);
        }

        // Repeated click on the active point toggles on the buffer.
        if self.store.temp_specification().is_empty() {
            match saved {
                Some(text) => {
                    self.store.set_temp_specification(text);
                    EditEvent::Opened(id)
                }
                None => EditEvent::Ignored,
            }
        } else if draft {
            self.store.cancel_edit();
            EditEvent::Discarded(id)
        } else {
            self.store.set_active(None);
            EditEvent::Closed(id)
        }
    }

    /// Make another point active, loading its saved text into the buffer.
    fn activate(&mut self, id: PointId) -> EditEvent {
        self.discard_open_draft();
        self.store.set_active(None);
        self.store.set_active(Some(id));
        let saved = self.store.get(id).and_then(|p| p.specification()).map(str::to_string);
        if let Some(text) = saved {
            self.store.set_temp_specification(text);
        }
        EditEvent::Selected(id)
    }

    /// Drop the active point if it was never saved.
    fn discard_open_draft(&mut self) {
        if self.store.active_point().is_some_and(Point::is_draft) {
            self.store.cancel_edit();
        }
    }

    fn finish(&self, event: EditEvent) -> EditEvent {
        debug_assert!(
            self.store.invariant_violation().is_none(),
            "annotation invariant broken after {:?}: {}",
            event,
            self.store.invariant_violation().map(|v| v.to_string()).unwrap_or_default()
        );
        match event {
            EditEvent::Ignored => {}
            EditEvent::Edited(id) => log::debug!("Edited buffer of point {}", id),
            _ => log::info!("{:?} ({} points)", event, self.store.len()),
        }
        event
    }
}
