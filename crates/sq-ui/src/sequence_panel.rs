//! egui rendering of a sequence widget
//!
//! Painting is driven entirely by a [`MemorySurface`]; the panel never looks
//! at the controller. Clicks are handed back as [`SequenceInput`] so the host
//! can release the surface lock before dispatching them.

use egui::{Align, Button, Id, Layout, ScrollArea, Ui};
use serde::{Deserialize, Serialize};
use sq_core::{NavSide, StepOrigin};

use crate::render::NavLayout;
use crate::surface::{MemorySurface, SequenceSurface};

/// Content of one page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaneContent {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A user action on the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceInput {
    Jump(usize),
    Step(NavSide, StepOrigin),
}

/// Paints one sequence widget instance
pub struct SequencePanel {
    id: Id,
    layout: NavLayout,
}

impl SequencePanel {
    /// `usage_id` keeps egui ids apart when a page hosts several widgets
    pub fn new(usage_id: &str, layout: NavLayout) -> Self {
        Self {
            id: Id::new(("sequence", usage_id)),
            layout,
        }
    }

    /// Draw the nav strip, the visible pane and the footer links
    pub fn ui(
        &self,
        ui: &mut Ui,
        surface: &mut MemorySurface,
        panes: &[PaneContent],
    ) -> Option<SequenceInput> {
        let mut input = None;

        ui.horizontal(|ui| {
            let prev = Button::new("◀");
            if ui.add_enabled(!surface.arrow_disabled(NavSide::Previous), prev).clicked() {
                input = Some(SequenceInput::Step(NavSide::Previous, StepOrigin::Strip));
            }

            for page in 0..surface.pane_count() {
                let active = surface.is_nav_active(self.layout.nav_index(page));
                let title = panes.get(page).map(|p| p.title.as_str()).unwrap_or("");
                let tab = ui
                    .selectable_label(active, format!("{}", page + 1))
                    .on_hover_text(title);
                if tab.clicked() {
                    input = Some(SequenceInput::Jump(page));
                }
            }

            let next = Button::new("▶");
            if ui.add_enabled(!surface.arrow_disabled(NavSide::Next), next).clicked() {
                input = Some(SequenceInput::Step(NavSide::Next, StepOrigin::Strip));
            }
        });

        ui.separator();

        let mut scroll = ScrollArea::vertical()
            .id_source(self.id.with("panes"))
            .max_height((ui.available_height() - 40.0).max(80.0))
            .auto_shrink([false, false]);
        if surface.take_scroll_request() {
            scroll = scroll.vertical_scroll_offset(0.0);
        }
        scroll.show(ui, |ui| {
            for pane in surface.visible_panes() {
                if let Some(content) = panes.get(pane) {
                    ui.heading(content.title.as_str());
                    ui.label(content.body.as_str());
                }
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            let prev = surface.footer_link(NavSide::Previous);
            if prev.visible && ui.link(prev.label.as_str()).clicked() {
                input = Some(SequenceInput::Step(NavSide::Previous, StepOrigin::Footer));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let next = surface.footer_link(NavSide::Next);
                if next.visible && ui.link(next.label.as_str()).clicked() {
                    input = Some(SequenceInput::Step(NavSide::Next, StepOrigin::Footer));
                }
            });
        });

        input
    }
}
