// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative DOM mutations produced by the controller.

use alloc::string::String;

use crate::notify::{ToastId, ToastKind};

/// An element the controller wants to mutate.
///
/// Indexed variants refer to the element's position in document order within
/// its group, as counted in [`PageInventory`](crate::PageInventory).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<body>`.
    Body,
    /// `#pageLoader`.
    Loader,
    /// `.navbar`.
    Navbar,
    /// `.mobile-menu-btn`.
    MenuButton,
    /// `.nav-links` panel.
    NavPanel,
    /// The `i`-th `.nav-link`.
    NavLink(usize),
    /// The `i`-th carousel `.screenshot`.
    Slide(usize),
    /// The `i`-th carousel `.dot`.
    Dot(usize),
    /// The `i`-th scroll-revealed element.
    Revealable(usize),
    /// The `i`-th entrance-animated element.
    Entrance(usize),
    /// The `.hero-stats` block.
    HeroStats,
    /// The `i`-th `.stat-number` label.
    StatLabel(usize),
    /// The `i`-th `img[data-src]`.
    LazyImage(usize),
    /// The `i`-th decorative `.shape`.
    Shape(usize),
    /// A live toast notification.
    Toast(ToastId),
}

/// Visibility observers the host must keep registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    /// Entrance animations (10% visibility by default).
    Entrance,
    /// The stats block (50% visibility by default); always index `0`.
    Stats,
    /// Deferred images.
    LazyImage,
}

impl ObserverKind {
    /// Element observed under this kind at `index`.
    #[must_use]
    pub fn target(self, index: usize) -> Target {
        match self {
            Self::Entrance => Target::Entrance(index),
            Self::Stats => Target::HeroStats,
            Self::LazyImage => Target::LazyImage(index),
        }
    }
}

/// One DOM mutation for the host to apply, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// `target.classList.add(class)`.
    AddClass {
        /// Element to change.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// `target.classList.remove(class)`.
    RemoveClass {
        /// Element to change.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// Inline style assignment.
    SetStyle {
        /// Element to change.
        target: Target,
        /// CSS property name, e.g. `transform` or `transition-delay`.
        property: &'static str,
        /// CSS value.
        value: String,
    },
    /// Replace the element's text content.
    SetText {
        /// Element to change.
        target: Target,
        /// New text.
        text: String,
    },
    /// Cancel the browser's default action for the current event.
    PreventDefault,
    /// Smoothly scroll the window so document offset `top` is at the viewport top.
    ScrollTo {
        /// Document-space vertical offset.
        top: f64,
    },
    /// Copy `data-src` into `src` on a deferred image and drop `data-src`.
    LoadImage {
        /// Image index.
        index: usize,
    },
    /// Start observing an element's visibility.
    Observe {
        /// Observer to register with.
        observer: ObserverKind,
        /// Element index within that observer's group.
        index: usize,
    },
    /// Stop observing an element; it has fired and will not fire again.
    Unobserve {
        /// Observer to unregister from.
        observer: ObserverKind,
        /// Element index within that observer's group.
        index: usize,
    },
    /// Create and append a toast node.
    ShowToast {
        /// Handle used by later effects.
        id: ToastId,
        /// Text content.
        message: String,
        /// Styling variant.
        kind: ToastKind,
    },
    /// Remove a toast node from the document.
    RemoveToast {
        /// Toast to remove.
        id: ToastId,
    },
    /// Reset the contact form's fields.
    ResetForm,
    /// Schedule a display-frame callback that calls
    /// [`PageBehaviors::frame`](crate::PageBehaviors::frame).
    RequestFrame,
}

impl Effect {
    /// Shorthand for [`Effect::AddClass`].
    #[must_use]
    pub fn add_class(target: Target, class: &'static str) -> Self {
        Self::AddClass { target, class }
    }

    /// Shorthand for [`Effect::RemoveClass`].
    #[must_use]
    pub fn remove_class(target: Target, class: &'static str) -> Self {
        Self::RemoveClass { target, class }
    }

    /// Shorthand for [`Effect::SetStyle`].
    #[must_use]
    pub fn set_style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }
}
