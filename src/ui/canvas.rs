// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and point placement.
//!
//! This module draws the image with its numbered point markers, applies
//! wheel zoom and drag panning to the viewport, and reports placement and
//! marker clicks back to the application.

use crate::ui::viewport::Viewport;
use pinspec::annotate::numbering;
use pinspec::models::point::{Point, PointId};

/// Marker radius in screen points.
const MARKER_RADIUS: f32 = 7.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// Double-click at raw percentages of the rendered image
    Place { x: f64, y: f64 },
    /// Click on a marker
    ClickPoint { id: PointId, ctrl: bool },
}

/// Display the main canvas area and handle mouse interactions.
///
/// Returns the action together with the screen rectangle of the image, which
/// the editor popup uses to anchor itself next to the active point.
pub fn show(
    ui: &mut egui::Ui,
    viewport: &mut Viewport,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    points: &[Point],
    active_id: Option<PointId>,
) -> (CanvasAction, Option<egui::Rect>) {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let (Some(texture), Some(size)) = (image_texture, image_size) else {
        show_welcome(ui);
        return (action, None);
    };

    let (canvas_rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    // Zoom with the wheel or pinch while hovering, pan by dragging
    if response.hovered() {
        let (scroll, pinch) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
        if scroll != 0.0 {
            viewport.zoom_wheel(scroll / 50.0);
        }
        if pinch != 1.0 {
            viewport.zoom_by(pinch);
        }
    }
    if response.dragged() {
        viewport.pan_by(response.drag_delta());
    }

    let image_rect = viewport.image_rect(canvas_rect, size);
    let painter = ui.painter_at(canvas_rect);
    painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));
    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    // A double-click also reports a click in the same frame; placement wins
    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some((x, y)) = viewport.screen_to_percent(pos, image_rect) {
                action = CanvasAction::Place { x, y };
            }
        }
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some(id) = marker_at(viewport, points, image_rect, pos) {
                let ctrl = ui.input(|i| i.modifiers.ctrl || i.modifiers.command);
                action = CanvasAction::ClickPoint { id, ctrl };
            }
        }
    }

    for (number, point) in numbering::numbered(points) {
        let center = viewport.percent_to_screen(point.position.x, point.position.y, image_rect);
        draw_marker(&painter, center, number, Some(point.id) == active_id);
    }

    if let Some(pos) = response.hover_pos() {
        if let Some(id) = marker_at(viewport, points, image_rect, pos) {
            let hint = if Some(id) == active_id {
                "Ctrl+Click to cancel"
            } else {
                "Ctrl+Click to delete"
            };
            response.clone().on_hover_text(hint);
        }
    }

    (action, Some(image_rect))
}

/// Topmost marker under a screen position.
fn marker_at(viewport: &Viewport, points: &[Point], image_rect: egui::Rect, pos: egui::Pos2) -> Option<PointId> {
    points
        .iter()
        .rev()
        .find(|p| {
            let center = viewport.percent_to_screen(p.position.x, p.position.y, image_rect);
            center.distance(pos) <= MARKER_RADIUS + 2.0
        })
        .map(|p| p.id)
}

/// Draw a numbered point marker.
fn draw_marker(painter: &egui::Painter, center: egui::Pos2, number: usize, is_active: bool) {
    let accent = egui::Color32::from_rgb(66, 133, 244);
    let (radius, fill) = if is_active {
        (MARKER_RADIUS * 1.25, accent)
    } else {
        (MARKER_RADIUS, egui::Color32::WHITE)
    };

    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, egui::Stroke::new(2.0, accent));

    let label_pos = center - egui::vec2(0.0, radius + 4.0);
    let galley = painter.layout_no_wrap(number.to_string(), egui::FontId::proportional(12.0), accent);
    let label_rect = egui::Rect::from_center_size(
        label_pos - egui::vec2(0.0, galley.size().y / 2.0),
        galley.size() + egui::vec2(6.0, 2.0),
    );
    painter.rect_filled(label_rect, 3.0, egui::Color32::WHITE);
    painter.galley(label_rect.center() - galley.size() / 2.0, galley, accent);
}

/// Show the welcome message when no image is loaded.
fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("PINSPEC")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Point specifications on images")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open an image, then double-click it to add a point")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
