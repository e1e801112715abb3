// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Point;
use vitrine_carousel::{Carousel, Direction, SlideChange};
use vitrine_motion::counter::{CounterAnimation, parse_stat_target};
use vitrine_motion::parallax::{Parallax, css_translate};
use vitrine_motion::stagger_delay;
use vitrine_observe::{OneShotObserver, RevealSet, Visibility};
use vitrine_timing::{Throttle, TimerId, TimerQueue};

use crate::config::PageConfig;
use crate::effect::{Effect, ObserverKind, Target};
use crate::event::{ClickTarget, Key, PageEvent};
use crate::form::validate_contact_with;
use crate::layout::{EntranceGroup, PageInventory, PageLayout};
use crate::menu::MenuState;
use crate::nav::{NavHighlight, NavbarState, active_section, fragment_id};
use crate::notify::{TOAST_EXIT_ANIMATION, ToastId, ToastKind};
use crate::styles::{ENTRANCE_TRANSITION, css_color, navbar_shadow, navbar_solid, navbar_translucent};

const ACTIVE: &str = "active";

/// Work scheduled for later.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Deferred {
    HideLoader,
    ToastExit(ToastId),
    ToastRemove(ToastId),
}

/// All interactive state of one page.
///
/// Construct once at startup with [`PageBehaviors::new`], apply the effects of
/// [`PageBehaviors::init`], then route every host event through
/// [`PageBehaviors::handle`]. Timer expiry is reported with
/// [`PageBehaviors::advance`] and display frames with [`PageBehaviors::frame`].
#[derive(Debug)]
pub struct PageBehaviors {
    config: PageConfig,
    inventory: PageInventory,
    navbar: NavbarState,
    nav: NavHighlight,
    nav_throttle: Throttle,
    menu: MenuState,
    reveal: RevealSet,
    carousel: Option<Carousel>,
    entrance: OneShotObserver<usize>,
    stats: OneShotObserver<usize>,
    images: OneShotObserver<usize>,
    counters: Vec<(usize, CounterAnimation)>,
    parallax: Parallax,
    timers: TimerQueue<Deferred>,
    /// Toasts still fully shown, with their pending exit timers.
    toast_exits: Vec<(ToastId, TimerId)>,
    next_toast: u64,
    loader_hidden: bool,
}

impl PageBehaviors {
    /// Creates the controller for a page with the given inventory.
    #[must_use]
    pub fn new(config: PageConfig, inventory: PageInventory) -> Self {
        let carousel = Carousel::new(inventory.slides)
            .map(|c| c.with_period(config.carousel_period_ms));
        Self {
            navbar: NavbarState::default(),
            nav: NavHighlight::default(),
            nav_throttle: Throttle::new(config.nav_throttle_ms),
            menu: MenuState::new(),
            reveal: RevealSet::with_offset(inventory.revealables, config.reveal_offset),
            carousel,
            entrance: OneShotObserver::new(config.entrance_threshold),
            stats: OneShotObserver::new(config.stats_threshold),
            images: OneShotObserver::new(config.lazy_image_threshold),
            counters: Vec::new(),
            parallax: Parallax::new(inventory.shapes).with_step(config.parallax_step),
            timers: TimerQueue::new(),
            toast_exits: Vec::new(),
            next_toast: 0,
            loader_hidden: false,
            config,
            inventory,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The inventory the controller was built with.
    #[must_use]
    pub fn inventory(&self) -> &PageInventory {
        &self.inventory
    }

    /// Carousel state, if the page has slides.
    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// Returns `true` while the mobile menu is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Index of the highlighted nav link.
    #[must_use]
    pub fn active_nav_link(&self) -> Option<usize> {
        self.nav.active()
    }

    /// Whether the navbar currently uses its scrolled style.
    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar.is_scrolled().unwrap_or(false)
    }

    /// Returns `true` once revealable element `index` is active.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_active(index)
    }

    /// Returns `true` once the loader has been hidden.
    #[must_use]
    pub fn loader_hidden(&self) -> bool {
        self.loader_hidden
    }

    /// Number of counters still animating.
    #[must_use]
    pub fn running_counters(&self) -> usize {
        self.counters.len()
    }

    /// Earliest timestamp at which [`PageBehaviors::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let carousel = self.carousel.as_ref().and_then(Carousel::deadline);
        match (self.timers.next_deadline(), carousel) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// One-time setup: initial carousel slide, entrance styles, observer
    /// registrations, and a first reveal pass.
    pub fn init(&mut self, now: u64, layout: &impl PageLayout) -> Vec<Effect> {
        let mut fx = Vec::new();

        if let Some(carousel) = &mut self.carousel {
            let change = carousel.show(0);
            carousel.start(now);
            for i in 0..carousel.len() {
                fx.push(Effect::remove_class(Target::Slide(i), ACTIVE));
            }
            for i in 0..self.inventory.dots {
                fx.push(Effect::remove_class(Target::Dot(i), ACTIVE));
            }
            self.mark_slide(&mut fx, change);
        }

        let mut feature_cards = 0;
        let mut privacy_points = 0;
        for (index, group) in self.inventory.entrance.iter().enumerate() {
            let target = Target::Entrance(index);
            fx.push(Effect::set_style(target, "opacity", "0"));
            fx.push(Effect::set_style(target, "transform", "translateY(30px)"));
            fx.push(Effect::set_style(target, "transition", ENTRANCE_TRANSITION));
            let delay = match group {
                EntranceGroup::FeatureCard => {
                    feature_cards += 1;
                    Some(stagger_delay(feature_cards - 1, self.config.feature_card_stagger))
                }
                EntranceGroup::PrivacyPoint => {
                    privacy_points += 1;
                    Some(stagger_delay(privacy_points - 1, self.config.privacy_point_stagger))
                }
                EntranceGroup::Other => None,
            };
            if let Some(delay) = delay {
                fx.push(Effect::set_style(target, "transition-delay", alloc::format!("{delay}s")));
            }
            if self.entrance.observe(index) {
                fx.push(Effect::Observe {
                    observer: ObserverKind::Entrance,
                    index,
                });
            }
        }

        if self.inventory.has_hero_stats && self.stats.observe(0) {
            fx.push(Effect::Observe {
                observer: ObserverKind::Stats,
                index: 0,
            });
        }

        for index in 0..self.inventory.lazy_images {
            if self.images.observe(index) {
                fx.push(Effect::Observe {
                    observer: ObserverKind::LazyImage,
                    index,
                });
            }
        }

        self.reveal_pass(&mut fx, layout);
        log::debug!(
            "page behaviors armed: {} slides, {} entrance, {} lazy images",
            self.inventory.slides,
            self.inventory.entrance.len(),
            self.inventory.lazy_images
        );
        fx
    }

    /// Routes one host event.
    pub fn handle(&mut self, event: PageEvent, now: u64, layout: &impl PageLayout) -> Vec<Effect> {
        let mut fx = Vec::new();
        match event {
            PageEvent::DomReady => {
                fx.push(Effect::add_class(Target::Body, "loaded"));
                log::info!("page behaviors initialized");
            }
            PageEvent::Load => {
                self.timers
                    .schedule(now.saturating_add(self.config.loader_delay_ms), Deferred::HideLoader);
            }
            PageEvent::Scroll => self.on_scroll(&mut fx, now, layout),
            PageEvent::Click(target) => self.on_click(&mut fx, target, now, layout),
            PageEvent::Key(key) => self.on_key(&mut fx, key, now),
            PageEvent::PointerMove(pointer) => self.on_pointer_move(&mut fx, pointer, layout),
            PageEvent::CarouselEnter => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.pointer_enter();
                }
            }
            PageEvent::CarouselLeave => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.pointer_leave(now);
                }
            }
            PageEvent::Visibility {
                observer,
                index,
                visibility,
            } => self.on_visibility(&mut fx, observer, index, visibility, now, layout),
            PageEvent::Submit { email, message } => {
                self.on_submit(&mut fx, email.as_deref(), message.as_deref(), now);
            }
        }
        fx
    }

    /// Runs every timer due at `now`: loader, toasts, and carousel auto-advance.
    pub fn advance(&mut self, now: u64, layout: &impl PageLayout) -> Vec<Effect> {
        let mut fx = Vec::new();
        while let Some((_, deferred)) = self.timers.pop_due(now) {
            match deferred {
                Deferred::HideLoader => self.hide_loader(&mut fx, layout),
                Deferred::ToastExit(id) => {
                    self.toast_exits.retain(|(toast, _)| *toast != id);
                    self.begin_toast_exit(&mut fx, id, now);
                }
                Deferred::ToastRemove(id) => fx.push(Effect::RemoveToast { id }),
            }
        }
        if let Some(change) = self.carousel.as_mut().and_then(|c| c.tick(now)) {
            log::trace!("carousel auto-advance to slide {}", change.current);
            self.mark_slide(&mut fx, change);
        }
        fx
    }

    /// Advances running counters to frame timestamp `now`.
    ///
    /// Emits [`Effect::RequestFrame`] while any counter is unfinished.
    pub fn frame(&mut self, now: u64) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.counters.retain_mut(|(label, counter)| {
            let frame = counter.tick(now);
            fx.push(Effect::SetText {
                target: Target::StatLabel(*label),
                text: counter.label(frame.value),
            });
            !frame.finished
        });
        if !self.counters.is_empty() {
            fx.push(Effect::RequestFrame);
        }
        fx
    }

    /// Shows a toast and schedules its dismissal.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, now: u64) -> (ToastId, Vec<Effect>) {
        let mut fx = Vec::new();
        let id = self.push_toast(&mut fx, message.into(), kind, now);
        (id, fx)
    }

    fn push_toast(&mut self, fx: &mut Vec<Effect>, message: String, kind: ToastKind, now: u64) -> ToastId {
        let id = ToastId(self.next_toast);
        self.next_toast += 1;
        let exit = self
            .timers
            .schedule(now.saturating_add(self.config.toast_visible_ms), Deferred::ToastExit(id));
        self.toast_exits.push((id, exit));
        fx.push(Effect::ShowToast { id, message, kind });
        id
    }

    fn begin_toast_exit(&mut self, fx: &mut Vec<Effect>, id: ToastId, now: u64) {
        fx.push(Effect::set_style(Target::Toast(id), "animation", TOAST_EXIT_ANIMATION));
        self.timers
            .schedule(now.saturating_add(self.config.toast_exit_ms), Deferred::ToastRemove(id));
    }

    /// Starts the exit of a toast that is still fully shown. Toasts already
    /// leaving are not touched.
    fn dismiss_toast(&mut self, fx: &mut Vec<Effect>, id: ToastId, now: u64) {
        let Some(slot) = self.toast_exits.iter().position(|(toast, _)| *toast == id) else {
            return;
        };
        let (_, exit) = self.toast_exits.swap_remove(slot);
        self.timers.cancel(exit);
        log::debug!("toast {} dismissed", id.0);
        self.begin_toast_exit(fx, id, now);
    }

    fn hide_loader(&mut self, fx: &mut Vec<Effect>, layout: &impl PageLayout) {
        if self.inventory.has_loader {
            fx.push(Effect::add_class(Target::Loader, "hidden"));
        }
        fx.push(Effect::remove_class(Target::Body, "loading"));
        self.loader_hidden = true;
        log::debug!("loader hidden");
        self.reveal_pass(fx, layout);
    }

    fn reveal_pass(&mut self, fx: &mut Vec<Effect>, layout: &impl PageLayout) {
        let height = layout.viewport().height;
        for index in self.reveal.update(height, |i| layout.revealable_top(i)) {
            fx.push(Effect::add_class(Target::Revealable(index), ACTIVE));
        }
    }

    fn on_scroll(&mut self, fx: &mut Vec<Effect>, now: u64, layout: &impl PageLayout) {
        self.reveal_pass(fx, layout);

        let scroll_y = layout.scroll_y();
        if self.inventory.has_navbar {
            if let Some(scrolled) = self.navbar.update(scroll_y, self.config.navbar_threshold) {
                let (background, shadow) = if scrolled {
                    (css_color(navbar_solid()), navbar_shadow())
                } else {
                    (css_color(navbar_translucent()), "none".to_string())
                };
                fx.push(Effect::set_style(Target::Navbar, "background", background));
                fx.push(Effect::set_style(Target::Navbar, "box-shadow", shadow));
            }
        }

        if self.inventory.nav_links.is_empty() || !self.nav_throttle.try_fire(now) {
            return;
        }
        let probe = scroll_y + self.config.nav_probe_offset;
        // Sections without a nav link never take the highlight.
        let links: Vec<_> = self
            .inventory
            .sections
            .iter()
            .map(|id| self.inventory.nav_link_for(id))
            .collect();
        let spans = links
            .iter()
            .enumerate()
            .map(|(i, link)| link.and_then(|_| layout.section_span(i)));
        let link = active_section(probe, spans).and_then(|section| links[section]);
        if self.nav.set(link) {
            for i in 0..self.inventory.nav_links.len() {
                if Some(i) != link {
                    fx.push(Effect::remove_class(Target::NavLink(i), ACTIVE));
                }
            }
            if let Some(i) = link {
                fx.push(Effect::add_class(Target::NavLink(i), ACTIVE));
            }
        }
    }

    fn on_click(&mut self, fx: &mut Vec<Effect>, click: ClickTarget, now: u64, layout: &impl PageLayout) {
        if let Some(label) = &click.download {
            log::info!("download clicked: {label}");
        }

        if let Some(id) = click.toast {
            self.dismiss_toast(fx, id, now);
        }

        if self.inventory.has_menu {
            let changed = if click.in_menu_button {
                self.menu.toggle();
                true
            } else if click.panel_link || !click.in_nav_panel {
                self.menu.close()
            } else {
                false
            };
            if changed {
                self.mirror_menu(fx);
            }
        }

        if let Some(id) = click.anchor_href.as_deref().and_then(fragment_id) {
            if let Some(top) = layout.anchor_top(id) {
                fx.push(Effect::PreventDefault);
                fx.push(Effect::ScrollTo { top });
            }
        }

        if let (Some(dot), Some(carousel)) = (click.dot, &mut self.carousel) {
            let change = carousel.jump(dot, now);
            log::debug!("carousel jump to slide {}", change.current);
            self.mark_slide(fx, change);
        }
    }

    fn on_key(&mut self, fx: &mut Vec<Effect>, key: Key, now: u64) {
        let direction = match key {
            Key::Escape => {
                if self.inventory.has_menu && self.menu.close() {
                    self.mirror_menu(fx);
                }
                return;
            }
            Key::ArrowLeft => Direction::Backward,
            Key::ArrowRight => Direction::Forward,
            Key::Other => return,
        };
        if let Some(carousel) = &mut self.carousel {
            let change = carousel.step(direction, now);
            self.mark_slide(fx, change);
        }
    }

    fn on_pointer_move(&mut self, fx: &mut Vec<Effect>, pointer: Point, layout: &impl PageLayout) {
        let viewport = layout.viewport();
        for (index, offset) in self.parallax.offsets(pointer, viewport).enumerate() {
            fx.push(Effect::set_style(Target::Shape(index), "transform", css_translate(offset)));
        }
    }

    fn on_visibility(
        &mut self,
        fx: &mut Vec<Effect>,
        observer: ObserverKind,
        index: usize,
        visibility: Visibility,
        now: u64,
        layout: &impl PageLayout,
    ) {
        let triggered = match observer {
            ObserverKind::Entrance => self.entrance.report(&index, visibility),
            ObserverKind::Stats => self.stats.report(&index, visibility),
            ObserverKind::LazyImage => self.images.report(&index, visibility),
        };
        if !triggered {
            return;
        }
        match observer {
            ObserverKind::Entrance => {
                let target = Target::Entrance(index);
                fx.push(Effect::add_class(target, "animate-in"));
                fx.push(Effect::set_style(target, "opacity", "1"));
                fx.push(Effect::set_style(target, "transform", "translateY(0)"));
            }
            ObserverKind::Stats => self.start_counters(fx, now, layout),
            ObserverKind::LazyImage => fx.push(Effect::LoadImage { index }),
        }
        fx.push(Effect::Unobserve { observer, index });
    }

    fn start_counters(&mut self, fx: &mut Vec<Effect>, now: u64, layout: &impl PageLayout) {
        let before = self.counters.len();
        for label in 0..self.inventory.stat_labels {
            let target = layout
                .stat_text(label)
                .as_deref()
                .and_then(parse_stat_target)
                .unwrap_or(0);
            if target == 0 {
                continue;
            }
            let counter = CounterAnimation::new(target, now).with_duration(self.config.counter_duration_ms);
            self.counters.push((label, counter));
        }
        if self.counters.len() > before {
            log::debug!("started {} stat counters", self.counters.len() - before);
            fx.push(Effect::RequestFrame);
        }
    }

    fn on_submit(&mut self, fx: &mut Vec<Effect>, email: Option<&str>, message: Option<&str>, now: u64) {
        if !self.inventory.has_contact_form {
            return;
        }
        fx.push(Effect::PreventDefault);
        let (Some(email), Some(message)) = (email, message) else {
            return;
        };
        match validate_contact_with(email, message, self.config.min_message_chars) {
            Ok(()) => {
                log::info!("contact form accepted");
                self.push_toast(fx, "Message sent successfully!".into(), ToastKind::Success, now);
                fx.push(Effect::ResetForm);
            }
            Err(err) => {
                log::info!("contact form rejected: {err}");
                self.push_toast(fx, err.to_string(), ToastKind::Error, now);
            }
        }
    }

    fn mirror_menu(&self, fx: &mut Vec<Effect>) {
        let effect = if self.menu.is_open() {
            Effect::add_class
        } else {
            Effect::remove_class
        };
        fx.push(effect(Target::MenuButton, ACTIVE));
        fx.push(effect(Target::NavPanel, ACTIVE));
        log::debug!("mobile menu {}", if self.menu.is_open() { "opened" } else { "closed" });
    }

    fn mark_slide(&self, fx: &mut Vec<Effect>, change: SlideChange) {
        let dots = self.inventory.dots;
        if !change.is_noop() {
            fx.push(Effect::remove_class(Target::Slide(change.previous), ACTIVE));
            if change.previous < dots {
                fx.push(Effect::remove_class(Target::Dot(change.previous), ACTIVE));
            }
        }
        fx.push(Effect::add_class(Target::Slide(change.current), ACTIVE));
        if change.current < dots {
            fx.push(Effect::add_class(Target::Dot(change.current), ACTIVE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use kurbo::Size;

    fn layout() -> StaticLayout {
        StaticLayout::new(Size::new(1_000.0, 800.0))
    }

    #[test]
    fn missing_dots_are_not_touched() {
        let inventory = PageInventory {
            slides: 3,
            dots: 1,
            ..PageInventory::default()
        };
        let mut page = PageBehaviors::new(PageConfig::default(), inventory);
        page.init(0, &layout());
        let fx = page.advance(4_000, &layout());
        assert_eq!(
            fx,
            [
                Effect::remove_class(Target::Slide(0), ACTIVE),
                Effect::remove_class(Target::Dot(0), ACTIVE),
                Effect::add_class(Target::Slide(1), ACTIVE),
            ]
        );
    }

    #[test]
    fn deadline_is_earliest_of_timers_and_carousel() {
        let inventory = PageInventory {
            slides: 2,
            ..PageInventory::default()
        };
        let mut page = PageBehaviors::new(PageConfig::default(), inventory);
        assert_eq!(page.next_deadline(), None);
        page.init(0, &layout());
        assert_eq!(page.next_deadline(), Some(4_000));
        page.handle(PageEvent::Load, 100, &layout());
        assert_eq!(page.next_deadline(), Some(600));
    }

    #[test]
    fn stagger_counts_within_each_group() {
        let inventory = PageInventory {
            entrance: alloc::vec![
                EntranceGroup::Other,
                EntranceGroup::FeatureCard,
                EntranceGroup::PrivacyPoint,
                EntranceGroup::FeatureCard,
            ],
            ..PageInventory::default()
        };
        let mut page = PageBehaviors::new(PageConfig::default(), inventory);
        let fx = page.init(0, &layout());
        let delays: Vec<_> = fx
            .iter()
            .filter_map(|effect| match effect {
                Effect::SetStyle {
                    target: Target::Entrance(i),
                    property: "transition-delay",
                    value,
                } => Some((*i, value.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(delays, [(1, "0s"), (2, "0s"), (3, "0.1s")]);
    }
}
