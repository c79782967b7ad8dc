// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with zoom controls.

use crate::ui::viewport::Viewport;

/// Display the toolbar and apply zoom commands to the viewport.
pub fn show(ui: &mut egui::Ui, viewport: &mut Viewport) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("+").on_hover_text("Zoom in").clicked() {
            viewport.zoom_in();
        }
        if ui.button("−").on_hover_text("Zoom out").clicked() {
            viewport.zoom_out();
        }
        if ui.button("⟲").on_hover_text("Reset view").clicked() {
            viewport.reset();
        }
        ui.label(format!("{:.0}%", viewport.zoom * 100.0));

        ui.separator();

        ui.label(
            egui::RichText::new("Double-click to add a point, click a point to edit, Ctrl+Click to delete")
                .italics()
                .weak(),
        );
    });
}
