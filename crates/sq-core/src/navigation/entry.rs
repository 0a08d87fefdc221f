use crate::location::Location;

use super::NavSide;

/// Fragment set when arriving through the "previous" button of the following unit
pub const NAV_PREV_MARKER: &str = "#cb-xblocks-core-nav-prev";
/// Fragment set when arriving through the "next" button of the preceding unit
pub const NAV_NEXT_MARKER: &str = "#cb-xblocks-core-nav-next";

/// One-shot signal deciding which page a freshly loaded unit opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDirective {
    /// Arrived from the start of the next unit: open on the last page
    FromEnd,
    /// Arrived from the end of the previous unit: open on the first page
    FromStart,
    /// Use the persisted position
    None,
}

impl EntryDirective {
    /// Interpret a URL fragment; the leading `#` is optional
    pub fn parse(fragment: &str) -> Self {
        let marker = fragment.strip_prefix('#').unwrap_or(fragment);
        if marker == &NAV_PREV_MARKER[1..] {
            EntryDirective::FromEnd
        } else if marker == &NAV_NEXT_MARKER[1..] {
            EntryDirective::FromStart
        } else {
            EntryDirective::None
        }
    }

    /// Read the directive from `location` and clear the fragment if it was one
    pub fn consume(location: &dyn Location) -> Self {
        let directive = Self::parse(&location.fragment());
        if directive != EntryDirective::None {
            tracing::debug!("Consumed entry directive {:?}", directive);
            location.clear_fragment();
        }
        directive
    }

    /// Marker to append when leaving a unit through `side`
    pub fn marker_for_exit(side: NavSide) -> &'static str {
        match side {
            NavSide::Previous => NAV_PREV_MARKER,
            NavSide::Next => NAV_NEXT_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;

    #[test]
    fn test_parse_markers() {
        assert_eq!(EntryDirective::parse(NAV_PREV_MARKER), EntryDirective::FromEnd);
        assert_eq!(EntryDirective::parse(NAV_NEXT_MARKER), EntryDirective::FromStart);
        assert_eq!(EntryDirective::parse("cb-xblocks-core-nav-next"), EntryDirective::FromStart);
        assert_eq!(EntryDirective::parse(""), EntryDirective::None);
        assert_eq!(EntryDirective::parse("#section-2"), EntryDirective::None);
    }

    #[test]
    fn test_consume_is_one_shot() {
        let location = MemoryLocation::new("unit?unit=2#cb-xblocks-core-nav-prev");
        assert_eq!(EntryDirective::consume(&location), EntryDirective::FromEnd);
        assert_eq!(EntryDirective::consume(&location), EntryDirective::None);
    }

    #[test]
    fn test_unrelated_fragment_is_kept() {
        let location = MemoryLocation::new("unit?unit=2#section-2");
        assert_eq!(EntryDirective::consume(&location), EntryDirective::None);
        assert_eq!(location.fragment(), "#section-2");
    }

    #[test]
    fn test_exit_markers_round_trip_to_opposite_entry() {
        assert_eq!(
            EntryDirective::parse(EntryDirective::marker_for_exit(NavSide::Previous)),
            EntryDirective::FromEnd
        );
        assert_eq!(
            EntryDirective::parse(EntryDirective::marker_for_exit(NavSide::Next)),
            EntryDirective::FromStart
        );
    }
}
