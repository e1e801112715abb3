// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast notifications.
//!
//! A toast is shown immediately, starts its exit animation after
//! `toast_visible_ms`, and is removed `toast_exit_ms` later. The timing lives
//! in [`PageBehaviors`](crate::PageBehaviors); this module holds the handle
//! type and the presentation.

use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};

use peniko::Color;

use crate::styles::css_color;

/// Animation applied when a toast appears.
pub const TOAST_ENTER_ANIMATION: &str = "slideIn 0.3s ease-out";

/// Animation applied when a toast starts to leave.
pub const TOAST_EXIT_ANIMATION: &str = "slideOut 0.3s ease-out forwards";

/// Handle of a live toast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Toast styling variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// Something worked.
    Success,
    /// Something was rejected.
    Error,
}

impl ToastKind {
    /// Lowercase name used in the `notification-*` class.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Background color.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Self::Success => Color::from_rgb8(0x10, 0xB9, 0x81),
            Self::Error => Color::from_rgb8(0xEF, 0x44, 0x44),
            Self::Info => Color::from_rgb8(0x66, 0x7E, 0xEA),
        }
    }

    /// Full `class` attribute for a toast of this kind.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.name())
    }

    /// Inline styles for a freshly created toast, as `(property, value)` pairs.
    #[must_use]
    pub fn style(self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "fixed".into()),
            ("bottom", "24px".into()),
            ("right", "24px".into()),
            ("padding", "16px 24px".into()),
            ("border-radius", "12px".into()),
            ("color", "white".into()),
            ("font-weight", "500".into()),
            ("z-index", "9999".into()),
            ("animation", TOAST_ENTER_ANIMATION.into()),
            ("background", css_color(self.background())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_of(kind: ToastKind) -> String {
        kind.style()
            .into_iter()
            .find(|(property, _)| *property == "background")
            .map(|(_, value)| value)
            .unwrap_or_default()
    }

    #[test]
    fn kinds_have_distinct_backgrounds() {
        assert_eq!(background_of(ToastKind::Success), "#10B981");
        assert_eq!(background_of(ToastKind::Error), "#EF4444");
        assert_eq!(background_of(ToastKind::Info), "#667EEA");
    }

    #[test]
    fn class_names() {
        assert_eq!(ToastKind::Error.class_name(), "notification notification-error");
    }
}
