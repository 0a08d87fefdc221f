//! A sequence widget attached to the current page

use std::sync::Arc;

use parking_lot::RwLock;
use sq_core::{Location, NavigationController, NavigationError, Transition};
use sq_persist::{PersistenceClient, PersistenceSubscriber};
use sq_ui::{
    MemorySurface, PaneContent, RenderSync, SequenceInput, SequencePanel, TRAILING_NAV_ENTRIES,
};

use crate::course::UnitConfig;

/// Everything one widget instance owns. Dropping it detaches the widget:
/// the controller only holds weak references to its subscribers.
pub struct MountedSequence {
    controller: Arc<NavigationController>,
    surface: Arc<RwLock<MemorySurface>>,
    panel: SequencePanel,
    panes: Vec<PaneContent>,
    _render: Arc<RenderSync<MemorySurface>>,
    _persistence: Arc<PersistenceSubscriber>,
}

impl MountedSequence {
    /// Attach a widget for `unit`, consuming any entry directive in `location`
    pub fn mount(
        unit: &UnitConfig,
        location: Arc<dyn Location>,
        persistence: PersistenceClient,
    ) -> Result<Self, NavigationError> {
        let attributes = &unit.attributes;
        let controller = Arc::new(NavigationController::new(attributes, location)?);

        let surface = Arc::new(RwLock::new(MemorySurface::new(
            attributes.page_count,
            attributes.leading_nav_entries,
            TRAILING_NAV_ENTRIES,
        )));
        let render = Arc::new(RenderSync::new(surface.clone(), attributes));
        let persistence = Arc::new(PersistenceSubscriber::new(persistence));

        controller.add_subscriber(render.clone());
        controller.add_subscriber(persistence.clone());
        let position = controller.initialize()?;
        tracing::info!("Mounted {} at page {}", unit.uri, position);

        Ok(Self {
            controller,
            panel: SequencePanel::new(&unit.usage_id, render.layout()),
            surface,
            panes: unit.panes.clone(),
            _render: render,
            _persistence: persistence,
        })
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn surface(&self) -> &Arc<RwLock<MemorySurface>> {
        &self.surface
    }

    /// Route one user input into the controller
    pub fn dispatch(&self, input: SequenceInput) -> Result<Transition, NavigationError> {
        match input {
            SequenceInput::Jump(page) => self.controller.jump_to(page),
            SequenceInput::Step(side, origin) => self.controller.step(side, origin),
        }
    }

    /// Paint the widget and apply whatever the user clicked
    pub fn ui(&self, ui: &mut egui::Ui) -> Option<Transition> {
        let input = {
            let mut surface = self.surface.write();
            self.panel.ui(ui, &mut surface, &self.panes)
        }?;

        match self.dispatch(input) {
            Ok(transition) => Some(transition),
            Err(e) => {
                tracing::warn!("Ignoring {:?}: {}", input, e);
                None
            }
        }
    }
}
