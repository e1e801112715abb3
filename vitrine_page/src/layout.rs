// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the controller knows about the document.
//!
//! [`PageInventory`] is collected once at startup: which optional elements
//! exist and how many of each group there are. [`PageLayout`] is queried on
//! demand for geometry and text that change while the page is alive.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;

/// Entrance-animated elements are staggered within their own group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntranceGroup {
    /// `.feature-card`.
    FeatureCard,
    /// `.privacy-point`.
    PrivacyPoint,
    /// `.contact-card`, `.about-content`, `.section-header`.
    #[default]
    Other,
}

/// Element counts and presence flags discovered at startup.
///
/// Missing elements disable their feature instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInventory {
    /// `#pageLoader` exists.
    pub has_loader: bool,
    /// `.navbar` exists.
    pub has_navbar: bool,
    /// Both `.mobile-menu-btn` and `.nav-links` exist.
    pub has_menu: bool,
    /// `id` of every `section[id]`, in document order.
    pub sections: Vec<String>,
    /// `href` of every `.nav-link`, in document order.
    pub nav_links: Vec<String>,
    /// Number of scroll-revealed elements.
    pub revealables: usize,
    /// Number of carousel slides.
    pub slides: usize,
    /// Number of carousel dots.
    pub dots: usize,
    /// Group of every entrance-animated element, in document order.
    pub entrance: Vec<EntranceGroup>,
    /// `.hero-stats` exists.
    pub has_hero_stats: bool,
    /// Number of `.stat-number` labels inside `.hero-stats`.
    pub stat_labels: usize,
    /// Number of decorative shapes.
    pub shapes: usize,
    /// Number of `img[data-src]`.
    pub lazy_images: usize,
    /// `.contact-form` exists.
    pub has_contact_form: bool,
}

impl PageInventory {
    /// Index of the nav link pointing at section `id`, if any.
    #[must_use]
    pub fn nav_link_for(&self, id: &str) -> Option<usize> {
        self.nav_links
            .iter()
            .position(|href| href.strip_prefix('#') == Some(id))
    }
}

/// Live geometry and text queries.
pub trait PageLayout {
    /// Viewport size in CSS pixels.
    fn viewport(&self) -> Size;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Top edge of revealable element `index`, relative to the viewport top.
    fn revealable_top(&self, index: usize) -> Option<f64>;

    /// Document-space vertical span `[top, top + height)` of section `index`.
    fn section_span(&self, index: usize) -> Option<Range<f64>>;

    /// Document-space top of the element with this `id`, if it exists.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    /// Current text of stat label `index`.
    fn stat_text(&self, index: usize) -> Option<String>;
}

/// A [`PageLayout`] backed by plain values.
///
/// Useful for tests and for hosts that measure everything up front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticLayout {
    /// Viewport size.
    pub viewport: Size,
    /// Window scroll offset.
    pub scroll_y: f64,
    /// Document-space top of each revealable element.
    pub revealable_tops: Vec<f64>,
    /// Document-space span of each section.
    pub sections: Vec<Range<f64>>,
    /// `(id, document top)` pairs for anchor targets.
    pub anchors: Vec<(String, f64)>,
    /// Text of each stat label.
    pub stat_texts: Vec<String>,
}

impl StaticLayout {
    /// An empty page with the given viewport.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Sets the scroll offset.
    #[must_use]
    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

impl PageLayout for StaticLayout {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn revealable_top(&self, index: usize) -> Option<f64> {
        self.revealable_tops.get(index).map(|top| top - self.scroll_y)
    }

    fn section_span(&self, index: usize) -> Option<Range<f64>> {
        self.sections.get(index).cloned()
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, top)| *top)
    }

    fn stat_text(&self, index: usize) -> Option<String> {
        self.stat_texts.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn nav_link_lookup_matches_fragment() {
        let inv = PageInventory {
            nav_links: vec!["#home".into(), "#features".into(), "/blog".into()],
            ..PageInventory::default()
        };
        assert_eq!(inv.nav_link_for("features"), Some(1));
        assert_eq!(inv.nav_link_for("blog"), None);
    }

    #[test]
    fn static_layout_reports_viewport_relative_tops() {
        let mut layout = StaticLayout::new(Size::new(800.0, 600.0)).scrolled_to(250.0);
        layout.revealable_tops = vec![1_000.0];
        assert_eq!(layout.revealable_top(0), Some(750.0));
        assert_eq!(layout.revealable_top(1), None);
    }
}
