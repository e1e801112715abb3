// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-follow parallax for decorative shapes.
//!
//! Shape `i` moves `(i + 1) * step` pixels across the full width/height of the
//! viewport, centered so the pointer in the middle of the screen leaves every
//! shape at rest. Offsets are recomputed from scratch on every pointer move;
//! there is no smoothing.
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vitrine_motion::parallax::Parallax;
//!
//! let parallax = Parallax::new(2);
//! let viewport = Size::new(1000.0, 800.0);
//!
//! let offsets: Vec<Vec2> = parallax.offsets(Point::new(1000.0, 0.0), viewport).collect();
//! assert_eq!(offsets, [Vec2::new(10.0, -10.0), Vec2::new(20.0, -20.0)]);
//! ```

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Size, Vec2};

/// Pixels of travel added per shape index.
pub const DEFAULT_PARALLAX_STEP: f64 = 20.0;

/// Offset for shape `index` given the pointer position and viewport size.
///
/// Returns zero for a degenerate viewport.
#[must_use]
pub fn parallax_offset(index: usize, pointer: Point, viewport: Size, step: f64) -> Vec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec2::ZERO;
    }
    let speed = (index as f64 + 1.0) * step;
    let x = pointer.x / viewport.width;
    let y = pointer.y / viewport.height;
    Vec2::new((x - 0.5) * speed, (y - 0.5) * speed)
}

/// CSS `transform` value for an offset, e.g. `translate(10px, -4.5px)`.
#[must_use]
pub fn css_translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Parallax configuration for a fixed number of shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallax {
    shapes: usize,
    step: f64,
}

impl Parallax {
    /// Parallax for `shapes` shapes with [`DEFAULT_PARALLAX_STEP`].
    #[must_use]
    pub fn new(shapes: usize) -> Self {
        Self {
            shapes,
            step: DEFAULT_PARALLAX_STEP,
        }
    }

    /// Overrides the per-index step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Number of shapes.
    #[must_use]
    pub fn shapes(&self) -> usize {
        self.shapes
    }

    /// Offsets for every shape in index order.
    pub fn offsets(&self, pointer: Point, viewport: Size) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.shapes).map(move |i| parallax_offset(i, pointer, viewport, self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(800.0, 600.0);

    #[test]
    fn centered_pointer_is_at_rest() {
        let center = Point::new(400.0, 300.0);
        for i in 0..4 {
            assert_eq!(parallax_offset(i, center, VIEW, 20.0), Vec2::ZERO);
        }
    }

    #[test]
    fn magnitude_scales_with_index() {
        let corner = Point::new(0.0, 0.0);
        assert_eq!(parallax_offset(0, corner, VIEW, 20.0), Vec2::new(-10.0, -10.0));
        assert_eq!(parallax_offset(2, corner, VIEW, 20.0), Vec2::new(-30.0, -30.0));
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(parallax_offset(0, p, Size::ZERO, 20.0), Vec2::ZERO);
    }

    #[test]
    fn css_output() {
        assert_eq!(css_translate(Vec2::new(10.0, -4.5)), "translate(10px, -4.5px)");
    }
}
