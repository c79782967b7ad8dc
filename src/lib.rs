// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PINSPEC - point specifications on images.
//!
//! Place numbered points on an image and attach a free text specification
//! (for example a garment measurement) to each one. The annotation state
//! core in [`annotate`] is independent of any UI toolkit.

pub mod annotate;
pub mod io;
pub mod models;
pub mod settings;
pub mod util;
