//! The visual surface a sequence widget paints into

use sq_core::NavSide;

/// State of a course-level previous/next link
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FooterLink {
    pub visible: bool,
    pub label: String,
}

impl FooterLink {
    pub fn shown(label: impl Into<String>) -> Self {
        Self {
            visible: true,
            label: label.into(),
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Mutable view of a rendered sequence widget.
///
/// Implementations own the actual elements (DOM nodes, retained UI model);
/// [`RenderSync`](crate::RenderSync) only flips their attributes.
pub trait SequenceSurface: Send + Sync {
    /// Number of content panes
    fn pane_count(&self) -> usize;

    fn set_pane_hidden(&mut self, index: usize, hidden: bool);

    /// Number of entries in the nav list, including non-page entries
    fn nav_entry_count(&self) -> usize;

    fn set_nav_active(&mut self, index: usize, active: bool);

    /// Disabled flag of the nav-strip arrow on `side`
    fn set_arrow_disabled(&mut self, side: NavSide, disabled: bool);

    fn set_footer_link(&mut self, side: NavSide, link: FooterLink);

    /// Bring the top of the page back into view
    fn scroll_to_top(&mut self);
}

/// Retained in-memory surface; egui paints from it and tests inspect it
#[derive(Debug, Clone)]
pub struct MemorySurface {
    panes_hidden: Vec<bool>,
    nav_active: Vec<bool>,
    prev_disabled: bool,
    next_disabled: bool,
    footer_prev: FooterLink,
    footer_next: FooterLink,
    scroll_requested: bool,
    scroll_count: usize,
}

impl MemorySurface {
    /// Surface with `page_count` panes and a nav list of
    /// `leading + page_count + trailing` entries, all panes hidden
    pub fn new(page_count: usize, leading: usize, trailing: usize) -> Self {
        Self {
            panes_hidden: vec![true; page_count],
            nav_active: vec![false; leading + page_count + trailing],
            prev_disabled: false,
            next_disabled: false,
            footer_prev: FooterLink::hidden(),
            footer_next: FooterLink::hidden(),
            scroll_requested: false,
            scroll_count: 0,
        }
    }

    pub fn visible_panes(&self) -> Vec<usize> {
        self.panes_hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn active_nav_entries(&self) -> Vec<usize> {
        self.nav_active
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_nav_active(&self, index: usize) -> bool {
        self.nav_active.get(index).copied().unwrap_or(false)
    }

    pub fn arrow_disabled(&self, side: NavSide) -> bool {
        match side {
            NavSide::Previous => self.prev_disabled,
            NavSide::Next => self.next_disabled,
        }
    }

    pub fn footer_link(&self, side: NavSide) -> &FooterLink {
        match side {
            NavSide::Previous => &self.footer_prev,
            NavSide::Next => &self.footer_next,
        }
    }

    /// Total scroll-to-top requests seen so far
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }

    /// Consume a pending scroll-to-top request
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

impl SequenceSurface for MemorySurface {
    fn pane_count(&self) -> usize {
        self.panes_hidden.len()
    }

    fn set_pane_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(pane) = self.panes_hidden.get_mut(index) {
            *pane = hidden;
        }
    }

    fn nav_entry_count(&self) -> usize {
        self.nav_active.len()
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        if let Some(entry) = self.nav_active.get_mut(index) {
            *entry = active;
        }
    }

    fn set_arrow_disabled(&mut self, side: NavSide, disabled: bool) {
        match side {
            NavSide::Previous => self.prev_disabled = disabled,
            NavSide::Next => self.next_disabled = disabled,
        }
    }

    fn set_footer_link(&mut self, side: NavSide, link: FooterLink) {
        match side {
            NavSide::Previous => self.footer_prev = link,
            NavSide::Next => self.footer_next = link,
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requested = true;
        self.scroll_count += 1;
    }
}
