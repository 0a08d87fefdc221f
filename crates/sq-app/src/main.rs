//! Main application entry point

use std::path::Path;

use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{PersistenceSettings, SequenceDemoApp};
use crate::course::CourseConfig;

mod app;
mod course;
mod mounted;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let course = match std::env::args().nth(1) {
        Some(path) => CourseConfig::load(Path::new(&path))?,
        None => CourseConfig::builtin(),
    };
    info!("Starting sequence demo with {} units", course.units.len());

    let runtime = tokio::runtime::Runtime::new()?;
    let persistence = PersistenceSettings::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sequence Demo",
        options,
        Box::new(move |_cc| {
            Box::new(SequenceDemoApp::new(course, "course", persistence, runtime))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
