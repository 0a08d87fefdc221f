//! Routing past the first/last page of a unit

use serde::{Deserialize, Serialize};

use crate::location::Location;

use super::{EntryDirective, NavSide};

/// href the course outline uses for "back to the course root"
pub const COURSE_ROOT_HREF: &str = "course";

/// A unit reachable from this one's previous/next button
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdjacentUnit {
    /// The course outline page
    CourseRoot,
    /// Another unit at the given URI
    Unit(String),
}

impl AdjacentUnit {
    pub fn from_href(href: &str) -> Self {
        if href == COURSE_ROOT_HREF {
            AdjacentUnit::CourseRoot
        } else {
            AdjacentUnit::Unit(href.to_string())
        }
    }

    pub fn href(&self) -> &str {
        match self {
            AdjacentUnit::CourseRoot => COURSE_ROOT_HREF,
            AdjacentUnit::Unit(uri) => uri,
        }
    }
}

/// The units on either side of the current one
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjacentUnits {
    pub previous: Option<AdjacentUnit>,
    pub next: Option<AdjacentUnit>,
}

impl AdjacentUnits {
    pub fn get(&self, side: NavSide) -> Option<&AdjacentUnit> {
        match side {
            NavSide::Previous => self.previous.as_ref(),
            NavSide::Next => self.next.as_ref(),
        }
    }
}

/// Where a boundary exit sends the browsing context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitTarget {
    pub unit: AdjacentUnit,
    /// Unit href with the directional entry marker appended
    pub url: String,
}

/// Decides what happens at the edges of a unit
#[derive(Debug, Clone, Default)]
pub struct BoundaryRouter {
    units: AdjacentUnits,
}

impl BoundaryRouter {
    pub fn new(units: AdjacentUnits) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &AdjacentUnits {
        &self.units
    }

    /// Exit target for leaving through `side`, or `None` if no unit lies that way
    pub fn exit_target(&self, side: NavSide) -> Option<ExitTarget> {
        self.units.get(side).map(|unit| ExitTarget {
            unit: unit.clone(),
            url: format!("{}{}", unit.href(), EntryDirective::marker_for_exit(side)),
        })
    }

    /// Leave the unit through `side`. A no-op returning `None` when nothing is configured.
    pub fn exit(&self, side: NavSide, location: &dyn Location) -> Option<ExitTarget> {
        let target = self.exit_target(side)?;
        tracing::info!("Leaving unit through {:?} to {}", side, target.url);
        location.assign(&target.url);
        Some(target)
    }

    /// Initial position for a freshly attached widget
    pub fn resolve_entry(directive: EntryDirective, persisted: usize, last_index: usize) -> usize {
        match directive {
            EntryDirective::FromEnd => last_index,
            EntryDirective::FromStart => 0,
            EntryDirective::None if persisted > last_index => {
                tracing::warn!(
                    "Persisted position {} exceeds last index {}, clamping",
                    persisted,
                    last_index
                );
                last_index
            }
            EntryDirective::None => persisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;

    fn router() -> BoundaryRouter {
        BoundaryRouter::new(AdjacentUnits {
            previous: Some(AdjacentUnit::CourseRoot),
            next: Some(AdjacentUnit::Unit("unit?unit=7".to_string())),
        })
    }

    #[test]
    fn test_exit_appends_directional_marker() {
        let router = router();
        assert_eq!(
            router.exit_target(NavSide::Next).map(|t| t.url),
            Some("unit?unit=7#cb-xblocks-core-nav-next".to_string())
        );
        assert_eq!(
            router.exit_target(NavSide::Previous).map(|t| t.url),
            Some("course#cb-xblocks-core-nav-prev".to_string())
        );
    }

    #[test]
    fn test_exit_navigates_location() {
        let location = MemoryLocation::new("unit?unit=6");
        let target = router().exit(NavSide::Next, &location).unwrap();
        assert_eq!(target.unit, AdjacentUnit::Unit("unit?unit=7".to_string()));
        assert_eq!(location.assigned(), vec!["unit?unit=7#cb-xblocks-core-nav-next".to_string()]);
    }

    #[test]
    fn test_exit_without_adjacent_unit_is_noop() {
        let location = MemoryLocation::new("unit?unit=6");
        let router = BoundaryRouter::default();
        assert_eq!(router.exit(NavSide::Previous, &location), None);
        assert!(location.assigned().is_empty());
    }

    #[test]
    fn test_resolve_entry() {
        assert_eq!(BoundaryRouter::resolve_entry(EntryDirective::FromEnd, 1, 3), 3);
        assert_eq!(BoundaryRouter::resolve_entry(EntryDirective::FromStart, 1, 3), 0);
        assert_eq!(BoundaryRouter::resolve_entry(EntryDirective::None, 1, 3), 1);
        assert_eq!(BoundaryRouter::resolve_entry(EntryDirective::None, 9, 3), 3);
    }
}
