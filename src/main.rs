// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PINSPEC - point specifications on images
//!
//! A desktop viewer for placing numbered points on a zoomable image and
//! attaching a text specification to each one.

mod app;
mod ui;

use anyhow::Result;
use app::PinspecApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = pinspec::settings::resolve();
    let initial_image = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PINSPEC - Image Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PINSPEC",
        options,
        Box::new(move |_cc| {
            let mut app = PinspecApp::new(settings);
            if let Some(path) = initial_image {
                app.load_image_file(path);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
