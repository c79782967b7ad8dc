// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation state core.
//!
//! The store owns the points and the edit session, the controller applies
//! the interaction rules on top of it, and the proximity and numbering
//! helpers read snapshots of the point collection.

pub mod controller;
pub mod numbering;
pub mod proximity;
pub mod store;

pub use controller::{EditController, EditEvent, EditState};
pub use store::{AnnotationStore, InvariantViolation};
