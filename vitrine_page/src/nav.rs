// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar styling and active-section tracking.

use core::ops::Range;

/// Index of the section containing `probe`, if any.
///
/// Spans are half-open. When spans overlap the last match wins, matching the
/// order in which a later section paints over an earlier one.
#[must_use]
pub fn active_section(
    probe: f64,
    spans: impl IntoIterator<Item = Option<Range<f64>>>,
) -> Option<usize> {
    let mut active = None;
    for (index, span) in spans.into_iter().enumerate() {
        if span.is_some_and(|span| span.contains(&probe)) {
            active = Some(index);
        }
    }
    active
}

/// Returns the element id a same-page `href` points at.
///
/// `"#contact"` yields `"contact"`. Bare `"#"`, other pages, and absolute URLs
/// yield `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether the navbar uses its "scrolled" style.
///
/// The state starts unknown so the first update always reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    scrolled: Option<bool>,
}

impl NavbarState {
    /// Current style, if any update has happened yet.
    #[must_use]
    pub fn is_scrolled(&self) -> Option<bool> {
        self.scrolled
    }

    /// Recomputes the style for `scroll_y`.
    ///
    /// Returns the new style when it changed. There is no hysteresis.
    pub fn update(&mut self, scroll_y: f64, threshold: f64) -> Option<bool> {
        let scrolled = scroll_y > threshold;
        if self.scrolled == Some(scrolled) {
            return None;
        }
        self.scrolled = Some(scrolled);
        Some(scrolled)
    }
}

/// Which nav link carries the active marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavHighlight {
    active: Option<usize>,
    synced: bool,
}

impl NavHighlight {
    /// Currently highlighted link.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Sets the highlighted link; returns `true` if the document needs updating.
    pub fn set(&mut self, link: Option<usize>) -> bool {
        if self.synced && self.active == link {
            return false;
        }
        self.active = link;
        self.synced = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn position_picks_containing_section() {
        let spans = vec![Some(0.0..600.0), Some(600.0..1400.0), Some(1400.0..2000.0)];
        assert_eq!(active_section(0.0, spans.clone()), Some(0));
        assert_eq!(active_section(600.0, spans.clone()), Some(1));
        assert_eq!(active_section(1_399.9, spans.clone()), Some(1));
        assert_eq!(active_section(2_000.0, spans), None);
    }

    #[test]
    fn missing_spans_are_skipped() {
        assert_eq!(active_section(10.0, [None, Some(0.0..20.0)]), Some(1));
    }

    #[test]
    fn fragments() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("https://example.com/#about"), None);
    }

    #[test]
    fn navbar_reports_changes_only() {
        let mut bar = NavbarState::default();
        assert_eq!(bar.update(0.0, 50.0), Some(false));
        assert_eq!(bar.update(50.0, 50.0), None);
        assert_eq!(bar.update(51.0, 50.0), Some(true));
        assert_eq!(bar.update(400.0, 50.0), None);
        assert_eq!(bar.is_scrolled(), Some(true));
    }

    #[test]
    fn highlight_first_set_always_syncs() {
        let mut nav = NavHighlight::default();
        assert!(nav.set(None));
        assert!(!nav.set(None));
        assert!(nav.set(Some(2)));
        assert!(!nav.set(Some(2)));
        assert_eq!(nav.active(), Some(2));
    }
}
