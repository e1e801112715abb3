// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Page: every interactive behavior of a portfolio landing page, as one
//! headless controller.
//!
//! [`PageBehaviors`] owns all page state (carousel position, menu state, timer
//! handles, one-shot observers, running counters). Hosts feed it
//! [`PageEvent`]s together with a [`PageLayout`] that answers geometry
//! questions, and receive a list of [`Effect`]s describing the DOM mutations to
//! perform. The controller never touches a document itself, so every behavior
//! can be exercised in plain unit tests.
//!
//! The behaviors covered:
//!
//! - page loader fade-out and `loaded`/`loading` body classes
//! - scroll reveal of `.reveal*` elements
//! - navbar background on scroll and active nav-link highlighting (throttled)
//! - mobile menu toggle with outside-click and Escape dismissal
//! - smooth scrolling for same-page anchors
//! - the screenshot carousel (timer, dots, arrow keys, pause on hover)
//! - entrance animations, stat counters, and lazy images driven by
//!   visibility samples
//! - pointer parallax for decorative shapes
//! - contact form validation and toast notifications
//!
//! ## Driving the controller
//!
//! ```rust
//! use kurbo::Size;
//! use vitrine_page::{Effect, PageBehaviors, PageConfig, PageEvent, PageInventory, StaticLayout, Target};
//!
//! let inventory = PageInventory {
//!     slides: 3,
//!     dots: 3,
//!     has_loader: true,
//!     ..PageInventory::default()
//! };
//! let layout = StaticLayout::new(Size::new(1280.0, 720.0));
//! let mut page = PageBehaviors::new(PageConfig::default(), inventory);
//!
//! let effects = page.init(0, &layout);
//! assert!(effects.contains(&Effect::add_class(Target::Slide(0), "active")));
//!
//! page.handle(PageEvent::Load, 10, &layout);
//! assert_eq!(page.next_deadline(), Some(510));
//!
//! let effects = page.advance(510, &layout);
//! assert!(effects.contains(&Effect::add_class(Target::Loader, "hidden")));
//! ```
//!
//! Hosts typically arm one native timeout for [`PageBehaviors::next_deadline`],
//! call [`PageBehaviors::advance`] when it fires, and run a frame loop while the
//! effects contain [`Effect::RequestFrame`].
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the `log`
//! facade.

#![no_std]

extern crate alloc;

mod behaviors;
mod config;
mod effect;
mod event;
pub mod form;
mod layout;
mod menu;
mod nav;
pub mod notify;
pub mod styles;

pub use behaviors::PageBehaviors;
pub use config::PageConfig;
pub use effect::{Effect, ObserverKind, Target};
pub use event::{ClickTarget, Key, PageEvent};
pub use layout::{EntranceGroup, PageInventory, PageLayout, StaticLayout};
pub use menu::MenuState;
pub use nav::{NavHighlight, NavbarState, active_section, fragment_id};
pub use notify::{ToastId, ToastKind};
pub use vitrine_observe::Visibility;
