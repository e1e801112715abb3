// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;
use vitrine_observe::Visibility;

use crate::effect::ObserverKind;
use crate::notify::ToastId;

/// Keys the page reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `Escape`.
    Escape,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Where a click landed, pre-classified by the host.
///
/// The host walks up from the event target and fills in whichever of these
/// apply; a plain click on the page background leaves everything at its default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Inside the mobile menu button.
    pub in_menu_button: bool,
    /// Inside the navigation panel.
    pub in_nav_panel: bool,
    /// On a link inside the navigation panel.
    pub panel_link: bool,
    /// `href` of the enclosing anchor, if any.
    pub anchor_href: Option<String>,
    /// Index of the carousel dot clicked, if any.
    pub dot: Option<usize>,
    /// Label of the download button clicked, if any.
    pub download: Option<String>,
    /// Toast clicked, if any.
    pub toast: Option<ToastId>,
}

/// Input delivered to [`PageBehaviors::handle`](crate::PageBehaviors::handle).
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// `DOMContentLoaded`.
    DomReady,
    /// Window `load`.
    Load,
    /// Window scroll; geometry is read through the layout.
    Scroll,
    /// Any click on the document.
    Click(ClickTarget),
    /// Document `keydown`.
    Key(Key),
    /// Pointer moved to this viewport position.
    PointerMove(Point),
    /// Pointer entered the carousel container.
    CarouselEnter,
    /// Pointer left the carousel container.
    CarouselLeave,
    /// A visibility sample from one of the observers.
    Visibility {
        /// Observer that produced the sample.
        observer: ObserverKind,
        /// Element index within that observer's group.
        index: usize,
        /// The sample.
        visibility: Visibility,
    },
    /// Contact form submission with the current field values.
    ///
    /// A field is `None` when the form lacks the corresponding input.
    Submit {
        /// Value of the `input[type=email]`.
        email: Option<String>,
        /// Value of the `textarea`.
        message: Option<String>,
    },
}
