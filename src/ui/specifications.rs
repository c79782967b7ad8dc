// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Specifications side panel.
//!
//! Lists every saved point with its number, position and text. Clicking an
//! entry selects the point.

use pinspec::annotate::numbering;
use pinspec::models::point::{Point, PointId};

/// Result of side panel interaction.
pub enum SpecificationsAction {
    None,
    Select(PointId),
}

/// Display the list of saved specifications.
pub fn show(ui: &mut egui::Ui, points: &[Point], active_id: Option<PointId>) -> SpecificationsAction {
    let mut action = SpecificationsAction::None;
    let saved: Vec<(usize, &Point)> = numbering::committed(points).collect();

    ui.heading(format!("Specifications ({})", saved.len()));
    ui.separator();

    if saved.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label("No specifications yet");
            ui.label(egui::RichText::new("Double-click the image to add one").small().weak());
        });
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (number, point) in saved {
            let is_active = Some(point.id) == active_id;
            let text = point.specification().unwrap_or_default();

            let response = ui
                .group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(format!("#{}", number)).strong());
                        ui.label(
                            egui::RichText::new(format!("({:.2}%, {:.2}%)", point.position.x, point.position.y))
                                .small()
                                .weak(),
                        );
                    });
                    let label = egui::RichText::new(text);
                    ui.label(if is_active { label.strong() } else { label });
                })
                .response
                .interact(egui::Sense::click());

            if response.clicked() {
                action = SpecificationsAction::Select(point.id);
            }
        }
    });

    action
}
