//! Projection of a navigation position onto a [`SequenceSurface`]

use std::sync::Arc;

use parking_lot::RwLock;
use sq_core::{
    AdjacentUnit, AdjacentUnits, ButtonLabels, NavSide, NavigationContext,
    NavigationSubscriber, SequenceAttributes,
};

use crate::surface::{FooterLink, SequenceSurface};

/// Maps page indices to nav-list entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLayout {
    /// Non-page entries before the first page tab
    pub leading_entries: usize,
}

impl NavLayout {
    pub fn nav_index(&self, page: usize) -> usize {
        page + self.leading_entries
    }
}

/// Keeps a surface in step with the controller's position
pub struct RenderSync<S> {
    surface: Arc<RwLock<S>>,
    layout: NavLayout,
    labels: ButtonLabels,
    units: AdjacentUnits,
}

impl<S: SequenceSurface> RenderSync<S> {
    pub fn new(surface: Arc<RwLock<S>>, attributes: &SequenceAttributes) -> Self {
        Self {
            surface,
            layout: NavLayout {
                leading_entries: attributes.leading_nav_entries,
            },
            labels: attributes.labels.clone(),
            units: attributes.adjacent_units(),
        }
    }

    pub fn layout(&self) -> NavLayout {
        self.layout
    }

    /// Paint `context` onto the surface. Everything is recomputed from the
    /// context, so repeated calls with the same position are harmless.
    pub fn render(&self, context: &NavigationContext) {
        let mut surface = self.surface.write();

        for pane in 0..surface.pane_count() {
            surface.set_pane_hidden(pane, pane != context.position);
        }

        let active = self.layout.nav_index(context.position);
        if active < surface.nav_entry_count() {
            for entry in 0..surface.nav_entry_count() {
                surface.set_nav_active(entry, entry == active);
            }
        }

        surface.set_arrow_disabled(NavSide::Previous, !context.can_go_prev());
        surface.set_arrow_disabled(NavSide::Next, !context.can_go_next());

        surface.set_footer_link(NavSide::Previous, self.footer_link(NavSide::Previous, context));
        surface.set_footer_link(NavSide::Next, self.footer_link(NavSide::Next, context));

        if context.scrolls_to_top() {
            surface.scroll_to_top();
        }
    }

    /// Label and visibility of the footer link on `side` at `context`
    pub fn footer_link(&self, side: NavSide, context: &NavigationContext) -> FooterLink {
        match side {
            NavSide::Previous if !context.can_go_prev() => match &self.units.previous {
                Some(AdjacentUnit::Unit(_)) => FooterLink::shown(&self.labels.prev),
                Some(AdjacentUnit::CourseRoot) | None => FooterLink::hidden(),
            },
            NavSide::Previous => FooterLink::shown(&self.labels.prev),
            NavSide::Next if !context.can_go_next() => match &self.units.next {
                Some(AdjacentUnit::CourseRoot) => FooterLink::shown(&self.labels.end),
                Some(AdjacentUnit::Unit(_)) => FooterLink::shown(&self.labels.next),
                None => FooterLink::hidden(),
            },
            NavSide::Next => FooterLink::shown(&self.labels.next),
        }
    }
}

impl<S: SequenceSurface> NavigationSubscriber for RenderSync<S> {
    fn on_navigation_change(&self, context: &NavigationContext) {
        tracing::trace!("Rendering page {} of {}", context.position, context.page_count());
        self.render(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use sq_core::{
        MemoryLocation, NavigationCause, NavigationController, StepOrigin, Transition,
    };

    fn context(position: usize, last_index: usize) -> NavigationContext {
        NavigationContext {
            position,
            last_index,
            cause: NavigationCause::Jump,
        }
    }

    fn render_sync(attributes: &SequenceAttributes) -> (RenderSync<MemorySurface>, Arc<RwLock<MemorySurface>>) {
        let surface = Arc::new(RwLock::new(MemorySurface::new(
            attributes.page_count,
            attributes.leading_nav_entries,
            1,
        )));
        (RenderSync::new(surface.clone(), attributes), surface)
    }

    #[test]
    fn test_exactly_one_pane_and_tab_for_every_position() {
        let attributes = SequenceAttributes::new(4);
        let (sync, surface) = render_sync(&attributes);

        for position in 0..4 {
            sync.render(&context(position, 3));
            let surface = surface.read();
            assert_eq!(surface.visible_panes(), vec![position]);
            assert_eq!(surface.active_nav_entries(), vec![position + 1]);
        }
    }

    #[test]
    fn test_arrows_disabled_only_at_boundaries() {
        let attributes = SequenceAttributes::new(3);
        let (sync, surface) = render_sync(&attributes);

        for position in 0..3 {
            sync.render(&context(position, 2));
            let surface = surface.read();
            assert_eq!(surface.arrow_disabled(NavSide::Previous), position == 0);
            assert_eq!(surface.arrow_disabled(NavSide::Next), position == 2);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let attributes = SequenceAttributes::new(3).with_next_href("course");
        let (sync, surface) = render_sync(&attributes);

        sync.render(&context(2, 2));
        let once = surface.read().clone();
        sync.render(&context(2, 2));
        let twice = surface.read().clone();

        assert_eq!(once.visible_panes(), twice.visible_panes());
        assert_eq!(once.active_nav_entries(), twice.active_nav_entries());
        for side in [NavSide::Previous, NavSide::Next] {
            assert_eq!(once.arrow_disabled(side), twice.arrow_disabled(side));
            assert_eq!(once.footer_link(side), twice.footer_link(side));
        }
    }

    #[test]
    fn test_footer_links_against_course_root() {
        let attributes = SequenceAttributes::new(2)
            .with_previous_href("course")
            .with_next_href("course");
        let (sync, _) = render_sync(&attributes);
        let labels = ButtonLabels::default();

        let first = context(0, 1);
        assert_eq!(sync.footer_link(NavSide::Previous, &first), FooterLink::hidden());
        assert_eq!(sync.footer_link(NavSide::Next, &first), FooterLink::shown(&labels.next));

        let last = context(1, 1);
        assert_eq!(sync.footer_link(NavSide::Previous, &last), FooterLink::shown(&labels.prev));
        assert_eq!(sync.footer_link(NavSide::Next, &last), FooterLink::shown(&labels.end));
    }

    #[test]
    fn test_footer_links_between_units() {
        let attributes = SequenceAttributes::new(1)
            .with_previous_href("unit?unit=1")
            .with_next_href("unit?unit=3");
        let (sync, _) = render_sync(&attributes);
        let labels = ButtonLabels::default();

        let only = context(0, 0);
        assert_eq!(sync.footer_link(NavSide::Previous, &only), FooterLink::shown(&labels.prev));
        assert_eq!(sync.footer_link(NavSide::Next, &only), FooterLink::shown(&labels.next));
    }

    #[test]
    fn test_footer_next_hidden_without_next_unit() {
        let attributes = SequenceAttributes::new(2);
        let (sync, _) = render_sync(&attributes);
        assert_eq!(sync.footer_link(NavSide::Next, &context(1, 1)), FooterLink::hidden());
    }

    #[test]
    fn test_subscribed_render_follows_controller() {
        let attributes = SequenceAttributes::new(3).with_next_href("unit?unit=9");
        let (sync, surface) = render_sync(&attributes);
        let sync = Arc::new(sync);

        let location = Arc::new(MemoryLocation::new("unit?unit=8#cb-xblocks-core-nav-prev"));
        let controller = NavigationController::new(&attributes, location.clone()).unwrap();
        controller.add_subscriber(sync.clone());

        controller.initialize().unwrap();
        assert_eq!(surface.read().visible_panes(), vec![2]);
        assert_eq!(surface.read().scroll_count(), 0);

        controller.previous(StepOrigin::Footer).unwrap();
        assert_eq!(surface.read().visible_panes(), vec![1]);
        assert_eq!(surface.read().scroll_count(), 1);

        controller.next(StepOrigin::Strip).unwrap();
        assert_eq!(surface.read().scroll_count(), 1);

        // Leaving the unit does not repaint
        let transition = controller.next(StepOrigin::Footer).unwrap();
        assert!(matches!(transition, Transition::LeftUnit { .. }));
        assert_eq!(surface.read().visible_panes(), vec![2]);
        assert_eq!(surface.read().scroll_count(), 1);
    }
}
