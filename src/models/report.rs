// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Specification report.
//!
//! A flat, numbered listing of every point and its text, used for logging
//! and for exporting the annotations of an image.

use crate::annotate::numbering;
use crate::models::point::{Point, FALLBACK_SPECIFICATION};
use serde::{Deserialize, Serialize};

/// One numbered line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationRow {
    pub number: usize,
    pub x: f64,
    pub y: f64,
    pub specification: String,
}

/// Exported report for a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub image_file: String,
    pub image_width: u32,
    pub image_height: u32,
    pub specifications: Vec<SpecificationRow>,
}

impl ReportDocument {
    /// Build a report for the given image and points.
    pub fn new(image_file: String, image_width: u32, image_height: u32, points: &[Point]) -> Self {
        Self {
            image_file,
            image_width,
            image_height,
            specifications: build_report(points),
        }
    }
}

/// Number every point in display order. Drafts show the fallback text.
pub fn build_report(points: &[Point]) -> Vec<SpecificationRow> {
    numbering::numbered(points)
        .map(|(number, point)| SpecificationRow {
            number,
            x: point.position.x,
            y: point.position.y,
            specification: point.specification().unwrap_or(FALLBACK_SPECIFICATION).to_string(),
        })
        .collect()
}

/// Write the report as a table through the log.
pub fn log_report(rows: &[SpecificationRow]) {
    if rows.is_empty() {
        log::info!("No specifications yet");
        return;
    }
    log::info!("{:>4}  {:>7}  {:>7}  Specification", "#", "X (%)", "Y (%)");
    for row in rows {
        log::info!("{:>4}  {:>7.2}  {:>7.2}  {}", row.number, row.x, row.y, row.specification);
    }
}
