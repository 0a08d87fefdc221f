//! Navigation controller implementation

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::{
    BoundaryRouter, EntryDirective, NavSide, NavigationCause, NavigationContext,
    NavigationSubscriber, PositionState, StepOrigin, Transition,
};
use crate::attributes::SequenceAttributes;
use crate::error::NavigationError;
use crate::location::Location;

/// Drives one sequence widget instance.
///
/// Owns the position for exactly one widget; two widgets on the same page
/// each get their own controller. Input handlers typically hold an
/// `Arc<NavigationController>` and call the transition methods below, which
/// update the position and then broadcast a [`NavigationContext`] to every
/// live subscriber (rendering, persistence).
pub struct NavigationController {
    state: RwLock<PositionState>,
    persisted_position: usize,
    router: BoundaryRouter,
    location: Arc<dyn Location>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
}

impl NavigationController {
    /// Create a controller from the widget's static attributes.
    ///
    /// Nothing is rendered until [`initialize`](Self::initialize) runs, so
    /// subscribers can be registered first.
    pub fn new(
        attributes: &SequenceAttributes,
        location: Arc<dyn Location>,
    ) -> Result<Self, NavigationError> {
        let state = PositionState::new(attributes.page_count)?;

        Ok(Self {
            state: RwLock::new(state),
            persisted_position: attributes.position,
            router: BoundaryRouter::new(attributes.adjacent_units()),
            location,
            subscribers: RwLock::new(Vec::new()),
        })
    }

    /// Resolve the initial position from the entry directive and render it.
    /// Subscribers see [`NavigationCause::Initial`]; nothing is persisted.
    pub fn initialize(&self) -> Result<usize, NavigationError> {
        let directive = EntryDirective::consume(self.location.as_ref());
        let mut state = self.state.write();
        let initial = BoundaryRouter::resolve_entry(
            directive,
            self.persisted_position,
            state.last_index(),
        );
        state.set_position(initial)?;
        drop(state);

        tracing::debug!("Sequence initialized at position {} ({:?})", initial, directive);
        self.notify_subscribers(NavigationCause::Initial);
        Ok(initial)
    }

    /// Select page `index` directly (tab click)
    pub fn jump_to(&self, index: usize) -> Result<Transition, NavigationError> {
        let mut state = self.state.write();
        let from = state.position();
        state.set_position(index)?;
        drop(state);

        tracing::debug!("Jumped from page {} to {}", from, index);
        self.notify_subscribers(NavigationCause::Jump);
        Ok(Transition::Moved { from, to: index })
    }

    /// Activate the "previous" endpoint
    pub fn previous(&self, origin: StepOrigin) -> Result<Transition, NavigationError> {
        self.step(NavSide::Previous, origin)
    }

    /// Activate the "next" endpoint
    pub fn next(&self, origin: StepOrigin) -> Result<Transition, NavigationError> {
        self.step(NavSide::Next, origin)
    }

    /// Move one page towards `side`, or hand over to the boundary router at the edge
    pub fn step(&self, side: NavSide, origin: StepOrigin) -> Result<Transition, NavigationError> {
        let mut state = self.state.write();
        let from = state.position();
        let to = match side {
            NavSide::Previous if state.can_go_prev() => from - 1,
            NavSide::Next if state.can_go_next() => from + 1,
            _ => {
                drop(state);
                return Ok(self.exit(side));
            }
        };
        state.set_position(to)?;
        drop(state);

        tracing::debug!("Stepped {:?} from page {} to {}", side, from, to);
        self.notify_subscribers(NavigationCause::Step(side, origin));
        Ok(Transition::Moved { from, to })
    }

    fn exit(&self, side: NavSide) -> Transition {
        match self.router.exit(side, self.location.as_ref()) {
            Some(target) => Transition::LeftUnit { side, target },
            None => {
                tracing::debug!("No adjacent unit on the {:?} side, ignoring", side);
                Transition::Blocked { side }
            }
        }
    }

    pub fn position(&self) -> usize {
        self.state.read().position()
    }

    pub fn last_index(&self) -> usize {
        self.state.read().last_index()
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.read().can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.read().can_go_next()
    }

    pub fn router(&self) -> &BoundaryRouter {
        &self.router
    }

    /// Current navigation context, tagged with `cause`
    pub fn context(&self, cause: NavigationCause) -> NavigationContext {
        let state = self.state.read();
        NavigationContext {
            position: state.position(),
            last_index: state.last_index(),
            cause,
        }
    }

    /// Add a subscriber. Only a weak reference is kept; the caller owns it.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of a position change
    fn notify_subscribers(&self, cause: NavigationCause) {
        let context = self.context(cause);
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        let live: Vec<_> = subscribers.iter().filter_map(Weak::upgrade).collect();
        drop(subscribers);

        for subscriber in live {
            subscriber.on_navigation_change(&context);
        }
    }
}
