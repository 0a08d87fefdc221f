use crate::error::NavigationError;

/// The active page of a sequence, bounded by a fixed last index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionState {
    position: usize,
    last_index: usize,
}

impl PositionState {
    /// Create state for a unit with `page_count` pages, starting on the first page
    pub fn new(page_count: usize) -> Result<Self, NavigationError> {
        let last_index = page_count.checked_sub(1).ok_or(NavigationError::NoPages)?;
        Ok(Self { position: 0, last_index })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn can_go_prev(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.position < self.last_index
    }

    /// Move to `index`. Never clamps: out-of-range indices are rejected and
    /// the current position is kept.
    pub fn set_position(&mut self, index: usize) -> Result<(), NavigationError> {
        if index > self.last_index {
            return Err(NavigationError::OutOfRange {
                index,
                last_index: self.last_index,
            });
        }
        self.position = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_flags() {
        let mut state = PositionState::new(3).unwrap();
        assert!(!state.can_go_prev());
        assert!(state.can_go_next());

        state.set_position(1).unwrap();
        assert!(state.can_go_prev());
        assert!(state.can_go_next());

        state.set_position(2).unwrap();
        assert!(state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_single_page_is_both_boundaries() {
        let state = PositionState::new(1).unwrap();
        assert_eq!(state.last_index(), 0);
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        let mut state = PositionState::new(3).unwrap();
        state.set_position(1).unwrap();

        let err = state.set_position(3).unwrap_err();
        assert_eq!(err, NavigationError::OutOfRange { index: 3, last_index: 2 });
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(PositionState::new(0), Err(NavigationError::NoPages));
    }
}
