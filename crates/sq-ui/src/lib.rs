//! User interface side of the sequence widget
//!
//! [`RenderSync`] projects the controller's position onto a
//! [`SequenceSurface`]; [`SequencePanel`] paints the retained
//! [`MemorySurface`] with egui and turns clicks back into inputs.

pub mod render;
pub mod sequence_panel;
pub mod surface;

/// Re-export commonly used types
pub use render::{NavLayout, RenderSync};
pub use sequence_panel::{PaneContent, SequenceInput, SequencePanel};
pub use surface::{FooterLink, MemorySurface, SequenceSurface};

/// Nav-list entries after the last page tab (the "next" arrow)
pub const TRAILING_NAV_ENTRIES: usize = 1;
