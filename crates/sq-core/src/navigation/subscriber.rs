//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that need to respond to position changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after every render-worthy position change, including the initial one
    fn on_navigation_change(&self, context: &NavigationContext);
}
