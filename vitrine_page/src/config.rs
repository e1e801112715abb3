// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_carousel::DEFAULT_PERIOD_MS;
use vitrine_motion::counter::DEFAULT_DURATION_MS;
use vitrine_motion::parallax::DEFAULT_PARALLAX_STEP;
use vitrine_observe::DEFAULT_REVEAL_OFFSET;

use crate::form::MIN_MESSAGE_CHARS;

/// Tunable constants for every page behavior.
///
/// Distances are CSS pixels, durations milliseconds, thresholds visible
/// fractions in `[0, 1]`, stagger steps seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Delay between window `load` and hiding the loader.
    pub loader_delay_ms: u64,
    /// How far above the viewport bottom a revealable element's top must be.
    pub reveal_offset: f64,
    /// Scroll offset past which the navbar switches to its solid style.
    pub navbar_threshold: f64,
    /// Offset added to the scroll position when picking the active section.
    pub nav_probe_offset: f64,
    /// Minimum interval between active-link updates.
    pub nav_throttle_ms: u64,
    /// Carousel auto-advance period.
    pub carousel_period_ms: u64,
    /// Visibility needed to start an entrance animation.
    pub entrance_threshold: f64,
    /// Visibility of the stats block needed to start the counters.
    pub stats_threshold: f64,
    /// Visibility needed to load a deferred image.
    pub lazy_image_threshold: f64,
    /// Counter animation length.
    pub counter_duration_ms: u64,
    /// Parallax travel added per shape index.
    pub parallax_step: f64,
    /// How long a toast stays before its exit animation.
    pub toast_visible_ms: u64,
    /// Length of the toast exit animation; the node is removed afterwards.
    pub toast_exit_ms: u64,
    /// Minimum trimmed length of a contact message.
    pub min_message_chars: usize,
    /// Transition delay step between feature cards.
    pub feature_card_stagger: f64,
    /// Transition delay step between privacy points.
    pub privacy_point_stagger: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: 500,
            reveal_offset: DEFAULT_REVEAL_OFFSET,
            navbar_threshold: 50.0,
            nav_probe_offset: 100.0,
            nav_throttle_ms: 100,
            carousel_period_ms: DEFAULT_PERIOD_MS,
            entrance_threshold: 0.1,
            stats_threshold: 0.5,
            lazy_image_threshold: 0.0,
            counter_duration_ms: DEFAULT_DURATION_MS,
            parallax_step: DEFAULT_PARALLAX_STEP,
            toast_visible_ms: 3_000,
            toast_exit_ms: 300,
            min_message_chars: MIN_MESSAGE_CHARS,
            feature_card_stagger: 0.1,
            privacy_point_stagger: 0.15,
        }
    }
}
