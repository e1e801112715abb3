// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and stylesheet snippets shared by the controller and hosts.

use alloc::format;
use alloc::string::String;

use peniko::Color;

/// Rule applied by the `animate-in` class once an entrance element is visible.
pub const ANIMATE_IN_CSS: &str = "
    .animate-in {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
";

/// Keyframes used by toast notifications.
pub const NOTIFICATION_KEYFRAMES_CSS: &str = "
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
";

/// Transition installed on entrance elements before they animate in.
pub const ENTRANCE_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// Navbar background once the page is scrolled.
#[must_use]
pub fn navbar_solid() -> Color {
    Color::new([13.0 / 255.0, 13.0 / 255.0, 26.0 / 255.0, 0.95])
}

/// Navbar background at the top of the page.
#[must_use]
pub fn navbar_translucent() -> Color {
    Color::new([13.0 / 255.0, 13.0 / 255.0, 26.0 / 255.0, 0.8])
}

/// Navbar drop shadow once the page is scrolled.
#[must_use]
pub fn navbar_shadow() -> String {
    format!("0 4px 20px {}", css_color(Color::new([0.0, 0.0, 0.0, 0.3])))
}

/// Renders a color as CSS: `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise.
#[must_use]
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    let alpha = color.components[3];
    if alpha >= 1.0 {
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("rgba({}, {}, {}, {alpha})", rgba.r, rgba.g, rgba.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(css_color(Color::from_rgb8(0x10, 0xB9, 0x81)), "#10B981");
    }

    #[test]
    fn navbar_colors() {
        assert_eq!(css_color(navbar_solid()), "rgba(13, 13, 26, 0.95)");
        assert_eq!(css_color(navbar_translucent()), "rgba(13, 13, 26, 0.8)");
        assert_eq!(navbar_shadow(), "0 4px 20px rgba(0, 0, 0, 0.3)");
    }
}
