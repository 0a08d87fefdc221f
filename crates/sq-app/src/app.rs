//! Demo host: one page at a time, driven by an in-memory location

use std::sync::Arc;

use eframe::egui;
use sq_core::{Location, MemoryLocation, Transition, COURSE_ROOT_HREF};
use sq_persist::{
    HandlerEndpoint, HttpTransport, LogTransport, PersistenceClient, PositionTransport,
};

use crate::course::CourseConfig;
use crate::mounted::MountedSequence;

/// Where position updates go
pub struct PersistenceSettings {
    pub endpoint: HandlerEndpoint,
    pub transport: Arc<dyn PositionTransport>,
}

impl PersistenceSettings {
    /// HTTP when `SEQUENCE_HANDLER_ORIGIN` is set, log-only otherwise
    pub fn from_env() -> Self {
        match std::env::var("SEQUENCE_HANDLER_ORIGIN") {
            Ok(origin) => {
                let mut endpoint = HandlerEndpoint::new(origin);
                if let Ok(token) = std::env::var("SEQUENCE_XSRF_TOKEN") {
                    endpoint = endpoint.with_xsrf_token(token);
                }
                tracing::info!("Persisting positions to {}", endpoint.origin);
                Self {
                    endpoint,
                    transport: Arc::new(HttpTransport::new()),
                }
            }
            Err(_) => Self {
                endpoint: HandlerEndpoint::new("http://localhost"),
                transport: Arc::new(LogTransport),
            },
        }
    }
}

/// What the window currently shows
enum PageView {
    Outline,
    Unit(MountedSequence),
    Missing(String),
}

pub struct SequenceDemoApp {
    course: CourseConfig,
    location: Arc<MemoryLocation>,
    loaded_path: Option<String>,
    view: PageView,
    persistence: PersistenceSettings,
    runtime: tokio::runtime::Runtime,
}

impl SequenceDemoApp {
    pub fn new(
        course: CourseConfig,
        start_url: &str,
        persistence: PersistenceSettings,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            course,
            location: Arc::new(MemoryLocation::new(start_url)),
            loaded_path: None,
            view: PageView::Outline,
            persistence,
            runtime,
        }
    }

    /// Rebuild the page if the location moved since the last frame
    fn sync_with_location(&mut self) {
        let path = self.location.path();
        if self.loaded_path.as_deref() == Some(path.as_str()) {
            return;
        }

        self.view = if path == COURSE_ROOT_HREF {
            PageView::Outline
        } else {
            match self.course.unit(&path) {
                Some(unit) => {
                    let client = PersistenceClient::new(
                        unit.usage_id.clone(),
                        Arc::new(self.persistence.endpoint.clone()),
                        self.persistence.transport.clone(),
                        self.runtime.handle().clone(),
                    );
                    match MountedSequence::mount(unit, self.location.clone(), client) {
                        Ok(sequence) => PageView::Unit(sequence),
                        Err(e) => {
                            tracing::error!("Failed to mount {}: {}", path, e);
                            PageView::Missing(format!("{}: {}", path, e))
                        }
                    }
                }
                None => {
                    tracing::warn!("No unit at {}", path);
                    PageView::Missing(format!("No unit at {}", path))
                }
            }
        };
        self.loaded_path = Some(path);
    }

    fn show_outline(&self, ui: &mut egui::Ui) {
        ui.heading(self.course.title.as_str());
        ui.add_space(8.0);
        for unit in &self.course.units {
            if ui.link(unit.title.as_str()).clicked() {
                self.location.assign(&unit.uri);
            }
        }
    }
}

impl eframe::App for SequenceDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_with_location();

        egui::TopBottomPanel::top("course_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.link(self.course.title.as_str()).clicked() {
                    self.location.assign(COURSE_ROOT_HREF);
                }
                ui.label("›");
                ui.label(self.location.path());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.view {
            PageView::Outline => self.show_outline(ui),
            PageView::Unit(sequence) => {
                if let Some(Transition::LeftUnit { target, .. }) = sequence.ui(ui) {
                    tracing::debug!("Loading {}", target.url);
                    ctx.request_repaint();
                }
            }
            PageView::Missing(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, message.as_str());
            }
        });

        // Clicks above may have navigated; pick the new page up next frame
        if self.location.path() != self.loaded_path.clone().unwrap_or_default() {
            ctx.request_repaint();
        }
    }
}
