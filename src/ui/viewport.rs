// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pan and zoom transform for the canvas.
//!
//! The image is fitted into the available area, scaled about the centre by
//! the zoom factor and shifted by the pan offset. Pointer positions are
//! converted into percentages of the rendered image so that annotation
//! coordinates do not depend on the current transform.

use pinspec::settings::ViewportSettings;
use pinspec::util::geometry::{from_percent, to_percent};

pub struct Viewport {
    /// Current scale relative to the fitted image
    pub zoom: f32,
    /// Offset of the image centre from the canvas centre, in screen points
    pub pan: egui::Vec2,
    settings: ViewportSettings,
}

impl Viewport {
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            zoom: settings.initial_zoom,
            pan: egui::Vec2::ZERO,
            settings,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(1.0 + self.settings.button_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / (1.0 + self.settings.button_step));
    }

    /// Zoom by wheel notches; positive scrolls in.
    pub fn zoom_wheel(&mut self, notches: f32) {
        self.zoom_by((1.0 + self.settings.wheel_step).powf(notches));
    }

    /// Multiply the zoom factor, clamped to the configured limits.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(self.settings.min_zoom, self.settings.max_zoom);
    }

    pub fn pan_by(&mut self, delta: egui::Vec2) {
        self.pan += delta;
    }

    pub fn reset(&mut self) {
        self.zoom = self.settings.initial_zoom;
        self.pan = egui::Vec2::ZERO;
    }

    /// Screen rectangle of the image inside `available`.
    pub fn image_rect(&self, available: egui::Rect, image_size: (u32, u32)) -> egui::Rect {
        let (img_width, img_height) = image_size;
        let img_aspect = img_width.max(1) as f32 / img_height.max(1) as f32;
        let available_aspect = available.width() / available.height().max(1.0);

        let fitted = if img_aspect > available_aspect {
            // Image is wider - fit to width
            egui::vec2(available.width(), available.width() / img_aspect)
        } else {
            // Image is taller - fit to height
            egui::vec2(available.height() * img_aspect, available.height())
        };

        egui::Rect::from_center_size(available.center() + self.pan, fitted * self.zoom)
    }

    /// Raw percentages of the rendered image under `pos`, or `None` when the
    /// position is outside the image.
    pub fn screen_to_percent(&self, pos: egui::Pos2, image_rect: egui::Rect) -> Option<(f64, f64)> {
        if !image_rect.contains(pos) {
            return None;
        }
        Some((
            to_percent((pos.x - image_rect.min.x) as f64, image_rect.width() as f64),
            to_percent((pos.y - image_rect.min.y) as f64, image_rect.height() as f64),
        ))
    }

    /// Screen position of a point given in percentages.
    pub fn percent_to_screen(&self, x: f64, y: f64, image_rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            image_rect.min.x + from_percent(x, image_rect.width() as f64) as f32,
            image_rect.min.y + from_percent(y, image_rect.height() as f64) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 500.0))
    }

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        let viewport = Viewport::new(ViewportSettings::default());
        let rect = viewport.image_rect(canvas(), (1920, 1080));
        assert!((rect.width() - 888.89).abs() < 0.1);
        assert_eq!(rect.height(), 500.0);
        assert!((rect.center() - canvas().center()).length() < 0.01);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut viewport = Viewport::new(ViewportSettings::default());
        for _ in 0..50 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom, 8.0);
        for _ in 0..50 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom, 0.5);

        viewport.zoom_by(f32::NAN);
        assert_eq!(viewport.zoom, 0.5);
        viewport.reset();
        assert_eq!(viewport.zoom, 1.0);
    }

    #[test]
    fn test_percent_mapping_is_independent_of_transform() {
        let mut viewport = Viewport::new(ViewportSettings::default());
        let rect = viewport.image_rect(canvas(), (1000, 1000));
        let marker = viewport.percent_to_screen(25.0, 75.0, rect);
        let (x, y) = viewport.screen_to_percent(marker, rect).unwrap();
        assert!((x - 25.0).abs() < 0.01 && (y - 75.0).abs() < 0.01);

        viewport.zoom_by(3.0);
        viewport.pan_by(egui::vec2(120.0, -40.0));
        let rect = viewport.image_rect(canvas(), (1000, 1000));
        let marker = viewport.percent_to_screen(25.0, 75.0, rect);
        let (x, y) = viewport.screen_to_percent(marker, rect).unwrap();
        assert!((x - 25.0).abs() < 0.01 && (y - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_outside_image_is_none() {
        let viewport = Viewport::new(ViewportSettings::default());
        let rect = viewport.image_rect(canvas(), (500, 500));
        assert!(viewport.screen_to_percent(egui::pos2(5.0, 5.0), rect).is_none());
    }
}
