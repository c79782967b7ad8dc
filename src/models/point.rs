// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation point data structures.
//!
//! A point is placed on the image in percentage space and carries a free
//! text specification once it has been saved. Until then it is a draft.

use crate::util::geometry::normalize_percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text stored when a point is saved with blank text.
pub const FALLBACK_SPECIFICATION: &str = "Sin especificación";

/// Unique identifier of a point within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position in percentage space (0.0 to 100.0, two decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Build a position from raw percentages, clamping and rounding both axes.
    pub fn normalized(x: f64, y: f64) -> Self {
        Self {
            x: normalize_percent(x),
            y: normalize_percent(y),
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Whether a point has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PointState {
    /// Placed but never saved; only exists while it is the active point.
    Draft,
    /// Saved; the text is never empty.
    Committed { specification: String },
}

/// A point placed on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub position: Position,
    #[serde(flatten)]
    pub state: PointState,
}

impl Point {
    /// Create a draft point at a raw position.
    pub fn draft(id: PointId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Position::normalized(x, y),
            state: PointState::Draft,
        }
    }

    /// Create a saved point at a raw position.
    pub fn committed(id: PointId, x: f64, y: f64, specification: &str) -> Self {
        Self {
            id,
            position: Position::normalized(x, y),
            state: PointState::Committed {
                specification: resolve_specification(specification),
            },
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self.state, PointState::Draft)
    }

    /// The saved text, or `None` for a draft.
    pub fn specification(&self) -> Option<&str> {
        match &self.state {
            PointState::Draft => None,
            PointState::Committed { specification } => Some(specification),
        }
    }

    /// Save text on this point, turning a draft into a committed point.
    pub fn commit(&mut self, text: &str) {
        self.state = PointState::Committed {
            specification: resolve_specification(text),
        };
    }
}

/// Trim the text, substituting the fallback when nothing is left.
pub fn resolve_specification(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        FALLBACK_SPECIFICATION.to_string()
    } else {
        trimmed.to_string()
    }
}
