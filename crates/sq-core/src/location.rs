//! Browsing-context abstraction
//!
//! The widget reads its entry directive from the URL fragment and leaves the
//! unit through a full-page navigation. Both go through [`Location`] so the
//! controller never touches a concrete window object.

use parking_lot::Mutex;

/// The page location a sequence widget lives in
pub trait Location: Send + Sync {
    /// Current URL fragment including the leading `#`, or an empty string
    fn fragment(&self) -> String;

    /// Reset the fragment so a reload does not see it again
    fn clear_fragment(&self);

    /// Navigate the whole browsing context to `url`
    fn assign(&self, url: &str);
}

#[derive(Debug, Default)]
struct LocationState {
    path: String,
    fragment: String,
    assigned: Vec<String>,
}

/// In-memory location used by hosts without a real window and by tests
#[derive(Debug, Default)]
pub struct MemoryLocation {
    state: Mutex<LocationState>,
}

impl MemoryLocation {
    /// Create a location pointing at `url`; anything after `#` becomes the fragment
    pub fn new(url: &str) -> Self {
        let location = Self::default();
        location.load(url);
        location
    }

    /// Replace the current URL without recording a navigation
    pub fn load(&self, url: &str) {
        let mut state = self.state.lock();
        match url.find('#') {
            Some(split) => {
                state.path = url[..split].to_string();
                state.fragment = url[split..].to_string();
            }
            None => {
                state.path = url.to_string();
                state.fragment.clear();
            }
        }
    }

    /// Current URL without the fragment
    pub fn path(&self) -> String {
        self.state.lock().path.clone()
    }

    /// Every URL passed to [`Location::assign`], oldest first
    pub fn assigned(&self) -> Vec<String> {
        self.state.lock().assigned.clone()
    }

    /// Most recent navigation target, if any
    pub fn last_assigned(&self) -> Option<String> {
        self.state.lock().assigned.last().cloned()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.state.lock().fragment.clone()
    }

    fn clear_fragment(&self) {
        self.state.lock().fragment.clear();
    }

    fn assign(&self, url: &str) {
        tracing::debug!("Navigating to {}", url);
        let mut state = self.state.lock();
        state.assigned.push(url.to_string());
        drop(state);
        self.load(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_is_split_from_path() {
        let location = MemoryLocation::new("unit?unit=3#cb-xblocks-core-nav-prev");
        assert_eq!(location.path(), "unit?unit=3");
        assert_eq!(location.fragment(), "#cb-xblocks-core-nav-prev");

        location.clear_fragment();
        assert_eq!(location.fragment(), "");
        assert_eq!(location.path(), "unit?unit=3");
    }

    #[test]
    fn test_assign_records_and_loads() {
        let location = MemoryLocation::new("unit?unit=3");
        location.assign("unit?unit=4#x");
        assert_eq!(location.assigned(), vec!["unit?unit=4#x".to_string()]);
        assert_eq!(location.path(), "unit?unit=4");
        assert_eq!(location.fragment(), "#x");
    }
}
