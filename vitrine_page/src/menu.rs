// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Open/closed state of the mobile navigation panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// A closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` while the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the panel; returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        core::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
