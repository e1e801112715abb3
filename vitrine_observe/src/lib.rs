// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Observe: visibility bookkeeping for scroll-driven page effects.
//!
//! Two families of "show it once it is on screen" behavior live here:
//!
//! - [`RevealSet`]: a scroll-position test. On every scroll tick the host
//!   reports each element's top edge relative to the viewport and the set
//!   latches elements whose top has crossed `viewport_height - offset`.
//! - [`OneShotObserver`]: an intersection-ratio test mirroring the semantics of
//!   a browser `IntersectionObserver` with a single threshold, except that each
//!   key fires at most once and is dropped from observation when it does.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_observe::{OneShotObserver, Visibility};
//!
//! let mut images = OneShotObserver::new(0.0);
//! images.observe(7_u32);
//!
//! assert!(!images.report(&7, Visibility::hidden()));
//! assert!(images.report(&7, Visibility::new(0.25)));
//! // Already triggered: later reports are ignored.
//! assert!(!images.report(&7, Visibility::new(1.0)));
//! assert!(images.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod one_shot;
mod reveal;
mod visibility;

pub use one_shot::OneShotObserver;
pub use reveal::{DEFAULT_REVEAL_OFFSET, RevealSet, should_reveal};
pub use visibility::Visibility;
