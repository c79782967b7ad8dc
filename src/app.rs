// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the edit controller and the viewport, loads images in
//! the background, and routes canvas, editor and panel actions into the
//! controller.

use crate::ui::{canvas, editor, specifications, toolbar, viewport::Viewport};
use pinspec::annotate::{EditController, EditEvent};
use pinspec::io::{media, serialization};
use pinspec::models::report::{self, ReportDocument};
use pinspec::settings::Settings;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Result of background image loading operation.
struct LoadedImageData {
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Main application state.
pub struct PinspecApp {
    /// Points and the current edit session
    controller: EditController,

    /// Pan and zoom of the canvas
    viewport: Viewport,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Path of the loaded image
    image_path: Option<PathBuf>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImageData, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    settings: Settings,
}

impl PinspecApp {
    /// Create a new application instance.
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: Self::fresh_controller(&settings),
            viewport: Viewport::new(settings.viewport.clone()),
            image_texture: None,
            image_path: None,
            image_size: None,
            image_loader: None,
            loading_message: None,
            settings,
        }
    }

    fn fresh_controller(settings: &Settings) -> EditController {
        EditController::default().with_proximity_threshold(settings.annotation.proximity_threshold)
    }

    /// Build the report for the current image.
    fn report(&self) -> ReportDocument {
        let image_file = self
            .image_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        let (width, height) = self.image_size.unwrap_or((0, 0));
        ReportDocument::new(image_file, width, height, self.controller.points())
    }

    /// Export the report to a file.
    fn export_report(&self, path: PathBuf) {
        match serialization::export_report(&self.report(), &path) {
            Ok(()) => log::info!("Exported specifications to {}", path.display()),
            Err(e) => log::error!("Failed to export specifications: {:#}", e),
        }
    }

    /// Load an image file and create a texture for display (asynchronously).
    pub fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::load_image(&path)
                .map(|loaded| {
                    log::info!("Loaded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
                    LoadedImageData {
                        path,
                        width: loaded.width,
                        height: loaded.height,
                        pixels: loaded.pixels,
                    }
                })
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
        });
    }

    /// Install a finished image load. Points belong to an image, so they
    /// are cleared along with the view.
    fn receive_image(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture = ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_size = Some((loaded.width, loaded.height));
                self.image_path = Some(loaded.path);
                self.controller = Self::fresh_controller(&self.settings);
                self.viewport.reset();
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", media::IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.load_image_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_image = self.image_size.is_some();
                    ui.add_enabled_ui(has_image, |ui| {
                        ui.menu_button("Export Specifications", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("specifications.yaml")
                                    .save_file()
                                {
                                    self.export_report(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("specifications.json")
                                    .save_file()
                                {
                                    self.export_report(path);
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    if ui.button("Log Specifications").clicked() {
                        report::log_report(&report::build_report(self.controller.points()));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Zoom In").clicked() {
                        self.viewport.zoom_in();
                        ui.close_menu();
                    }
                    if ui.button("Zoom Out").clicked() {
                        self.viewport.zoom_out();
                        ui.close_menu();
                    }
                    if ui.button("Reset Zoom").clicked() {
                        self.viewport.reset();
                        ui.close_menu();
                    }
                });
            });
        });
    }
}

impl eframe::App for PinspecApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_image(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        self.menu_bar(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut self.viewport);
        });

        // Specifications panel (right side)
        let panel_action = egui::SidePanel::right("specifications")
            .default_width(250.0)
            .show(ctx, |ui| {
                specifications::show(ui, self.controller.points(), self.controller.store().active_id())
            })
            .inner;

        if let specifications::SpecificationsAction::Select(id) = panel_action {
            if self.controller.store().active_id() != Some(id) {
                self.controller.point_clicked(id, false);
            }
        }

        // Main canvas (center)
        let (canvas_action, image_rect) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    (canvas::CanvasAction::None, None)
                } else {
                    canvas::show(
                        ui,
                        &mut self.viewport,
                        &self.image_texture,
                        self.image_size,
                        self.controller.points(),
                        self.controller.store().active_id(),
                    )
                }
            })
            .inner;

        let event = match canvas_action {
            canvas::CanvasAction::Place { x, y } => self.controller.placement_requested(x, y),
            canvas::CanvasAction::ClickPoint { id, ctrl } => self.controller.point_clicked(id, ctrl),
            canvas::CanvasAction::None => EditEvent::Ignored,
        };
        if event != EditEvent::Ignored {
            ctx.request_repaint();
        }

        // Editor popup for the active point
        let Some(image_rect) = image_rect else {
            return;
        };
        let Some(active) = self.controller.active_point() else {
            return;
        };
        let number = self.controller.point_number(active).unwrap_or_default();
        let anchor = self
            .viewport
            .percent_to_screen(active.position.x, active.position.y, image_rect);

        match editor::show(ctx, anchor, number, self.controller.temp_specification()) {
            editor::EditorAction::TextChanged(text) => {
                self.controller.text_changed(&text);
            }
            editor::EditorAction::Save => {
                self.controller.save_requested();
            }
            editor::EditorAction::Cancel => {
                self.controller.cancel_requested();
            }
            editor::EditorAction::None => {}
        }
    }
}
