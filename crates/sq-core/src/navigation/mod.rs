use serde::{Deserialize, Serialize};

mod boundary;
mod engine;
mod entry;
mod position;
mod subscriber;

pub use boundary::{AdjacentUnit, AdjacentUnits, BoundaryRouter, ExitTarget, COURSE_ROOT_HREF};
pub use engine::NavigationController;
pub use entry::{EntryDirective, NAV_NEXT_MARKER, NAV_PREV_MARKER};
pub use position::PositionState;
pub use subscriber::NavigationSubscriber;

/// One of the two directional navigation endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NavSide {
    Previous,
    Next,
}

/// Which control a prev/next activation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOrigin {
    /// Arrow entries in the widget's own nav strip
    Strip,
    /// Course-level buttons below the unit; in-unit moves also scroll to top
    Footer,
}

/// Why subscribers are being told about a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCause {
    /// First paint after attach; not a user-driven change
    Initial,
    /// Explicit page/tab click
    Jump,
    /// Prev/next activation that stayed inside the unit
    Step(NavSide, StepOrigin),
}

/// Snapshot passed to subscribers after every position change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub position: usize,
    pub last_index: usize,
    pub cause: NavigationCause,
}

impl NavigationContext {
    pub fn can_go_prev(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.position < self.last_index
    }

    pub fn page_count(&self) -> usize {
        self.last_index + 1
    }

    /// Whether the page should be scrolled back to the top after this change
    pub fn scrolls_to_top(&self) -> bool {
        matches!(self.cause, NavigationCause::Step(_, StepOrigin::Footer))
    }

    /// Whether this change was driven by the user (and so should be persisted)
    pub fn is_user_driven(&self) -> bool {
        !matches!(self.cause, NavigationCause::Initial)
    }
}

/// Outcome of a controller input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Position changed inside the unit (`from == to` when re-selecting the current page)
    Moved { from: usize, to: usize },
    /// The browsing context was sent to an adjacent unit; position untouched
    LeftUnit { side: NavSide, target: ExitTarget },
    /// At a boundary with no adjacent unit configured; nothing happened
    Blocked { side: NavSide },
}
