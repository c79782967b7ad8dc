// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Report export.
//!
//! This module writes specification reports in YAML and JSON formats.

use crate::models::report::ReportDocument;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export a report to YAML format.
pub fn export_yaml(report: &ReportDocument, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(report).context("Failed to encode report as YAML")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a report to JSON format.
pub fn export_json(report: &ReportDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to encode report as JSON")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a report in the format matching the file extension.
pub fn export_report(report: &ReportDocument, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(report, path),
        Some("json") => export_json(report, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::{Point, PointId};
    use tempfile::tempdir;

    fn sample() -> ReportDocument {
        let points = vec![
            Point::committed(PointId(1), 25.0, 40.0, "Hombro: 45cm"),
            Point::committed(PointId(2), 60.0, 75.5, "Largo: 70cm"),
        ];
        ReportDocument::new("prenda.png".to_string(), 800, 600, &points)
    }

    #[test]
    fn test_export_json_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        export_report(&sample(), &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["image_file"], "prenda.png");
        assert_eq!(value["specifications"][1]["number"], 2);
        assert_eq!(value["specifications"][1]["specification"], "Largo: 70cm");
    }

    #[test]
    fn test_export_yaml_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.yml");
        export_report(&sample(), &path).unwrap();

        let parsed: ReportDocument = serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.image_width, 800);
        assert_eq!(parsed.specifications[0].specification, "Hombro: 45cm");
        assert_eq!(parsed.specifications[1].y, 75.5);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        assert!(export_report(&sample(), &path).is_err());
        assert!(!path.exists());
    }
}
