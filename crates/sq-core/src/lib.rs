//! Core functionality for the sequence navigation widget
//!
//! This crate provides the page-position state machine that backs a
//! multi-page course unit: bounds-checked position state, entry resolution
//! from the URL fragment, routing past the unit's first/last page, and the
//! controller that ties them together and broadcasts changes to subscribers.

pub mod attributes;
pub mod error;
pub mod location;
pub mod navigation;

// Re-export commonly used types
pub use attributes::{ButtonLabels, SequenceAttributes};
pub use error::NavigationError;
pub use location::{Location, MemoryLocation};
pub use navigation::{
    AdjacentUnit, AdjacentUnits, BoundaryRouter, EntryDirective, ExitTarget,
    NavSide, NavigationCause, NavigationContext, NavigationController,
    NavigationSubscriber, PositionState, StepOrigin, Transition, COURSE_ROOT_HREF,
    NAV_NEXT_MARKER, NAV_PREV_MARKER,
};
