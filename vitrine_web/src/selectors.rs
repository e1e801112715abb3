// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS selectors the shim uses to find page elements.

use vitrine_page::EntranceGroup;

/// `id` of the full-screen loader.
pub const LOADER_ID: &str = "pageLoader";
/// Fixed top navigation bar.
pub const NAVBAR: &str = ".navbar";
/// Hamburger button shown on narrow layouts.
pub const MENU_BUTTON: &str = ".mobile-menu-btn";
/// Panel holding the nav links; toggled by the menu button.
pub const NAV_PANEL: &str = ".nav-links";
/// Individual nav links.
pub const NAV_LINK: &str = ".nav-link";
/// Sections that can be highlighted in the nav.
pub const SECTIONS: &str = "section[id]";
/// Elements revealed on scroll.
pub const REVEALABLES: &str =
    ".reveal, .reveal-left, .reveal-right, .reveal-scale, .stagger-children";
/// Carousel container; hovering pauses auto-advance.
pub const CAROUSEL: &str = ".screenshot-carousel";
/// Carousel slides.
pub const SLIDES: &str = ".screenshot";
/// Carousel dots, one per slide.
pub const DOTS: &str = ".dot";
/// Elements with an entrance animation.
pub const ENTRANCE: &str =
    ".feature-card, .privacy-point, .contact-card, .about-content, .section-header";
/// Block whose visibility starts the stat counters.
pub const HERO_STATS: &str = ".hero-stats";
/// Counter labels inside the stats block.
pub const STAT_LABELS: &str = ".hero-stats .stat-number";
/// Decorative shapes moved by the pointer.
pub const SHAPES: &str = ".shape";
/// Images with a deferred source.
pub const LAZY_IMAGES: &str = "img[data-src]";
/// Contact form.
pub const CONTACT_FORM: &str = ".contact-form";
/// Email field inside the contact form.
pub const EMAIL_FIELD: &str = "input[type=\"email\"]";
/// Message field inside the contact form.
pub const MESSAGE_FIELD: &str = "textarea";
/// Links to an element on the same page.
pub const SAME_PAGE_ANCHOR: &str = "a[href^=\"#\"]";
/// Download buttons whose clicks are logged.
pub const DOWNLOAD_BUTTON: &str = ".download-btn, #downloadApk";

/// Label logged for a download button without an `aria-label`.
pub const DEFAULT_DOWNLOAD_LABEL: &str = "APK";

/// Stagger group of an entrance element, given a class membership test.
#[must_use]
pub fn entrance_group(has_class: impl Fn(&str) -> bool) -> EntranceGroup {
    if has_class("feature-card") {
        EntranceGroup::FeatureCard
    } else if has_class("privacy-point") {
        EntranceGroup::PrivacyPoint
    } else {
        EntranceGroup::Other
    }
}

/// Label logged for a download click; missing or empty labels fall back to
/// [`DEFAULT_DOWNLOAD_LABEL`].
#[must_use]
pub fn download_label(aria_label: Option<String>) -> String {
    aria_label
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_LABEL.to_owned())
}

/// Parsing phase reported by `document.readyState`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// The document is still being parsed; elements may be missing.
    Loading,
    /// Parsing is done but subresources are still loading.
    Interactive,
    /// The `load` event has fired.
    Complete,
}

impl ReadyState {
    /// Reads a `document.readyState` string. Unknown values count as
    /// [`ReadyState::Interactive`].
    #[must_use]
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// Returns `true` once every element of the document exists.
    #[must_use]
    pub fn is_parsed(self) -> bool {
        self != Self::Loading
    }

    /// Returns `true` if the `load` event has already fired.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_class_names() {
        assert_eq!(
            entrance_group(|c| c == "feature-card"),
            EntranceGroup::FeatureCard
        );
        assert_eq!(
            entrance_group(|c| c == "privacy-point"),
            EntranceGroup::PrivacyPoint
        );
        assert_eq!(entrance_group(|c| c == "section-header"), EntranceGroup::Other);
    }

    #[test]
    fn download_label_defaults() {
        assert_eq!(download_label(None), "APK");
        assert_eq!(download_label(Some(String::new())), "APK");
        assert_eq!(download_label(Some("Android".into())), "Android");
    }

    #[test]
    fn ready_states() {
        let loading = ReadyState::parse("loading");
        assert!(!loading.is_parsed());
        assert!(!loading.is_loaded());

        let interactive = ReadyState::parse("interactive");
        assert!(interactive.is_parsed());
        assert!(!interactive.is_loaded());

        let complete = ReadyState::parse("complete");
        assert!(complete.is_parsed());
        assert!(complete.is_loaded());

        assert_eq!(ReadyState::parse(""), ReadyState::Interactive);
    }
}
