// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener wiring, effect application, and the timer/frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use js_sys::Array;
use vitrine_page::styles::{ANIMATE_IN_CSS, NOTIFICATION_KEYFRAMES_CSS};
use vitrine_page::{
    Effect, Key, ObserverKind, PageBehaviors, PageConfig, PageEvent, Target, ToastId, ToastKind,
    Visibility,
};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement,
    HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Node, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::dom::{Dom, DomLayout};
use crate::selectors::{self, ReadyState};

type Shared = Rc<RefCell<Runtime>>;

#[derive(Debug)]
struct NativeObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Everything the listeners share.
#[derive(Debug)]
struct Runtime {
    page: PageBehaviors,
    dom: Dom,
    toasts: HashMap<ToastId, HtmlElement>,
    observers: HashMap<ObserverKind, NativeObserver>,
    ticker: Option<Closure<dyn FnMut()>>,
    framer: Option<Closure<dyn FnMut(f64)>>,
    /// Deadline and handle of the pending timeout.
    armed: Option<(u64, i32)>,
    frame_pending: bool,
}

/// Milliseconds on the `performance.now()` clock.
#[expect(
    clippy::cast_possible_truncation,
    reason = "page clocks stay far below u64::MAX milliseconds"
)]
fn to_millis(timestamp: f64) -> u64 {
    timestamp.max(0.0) as u64
}

fn now(window: &Window) -> u64 {
    to_millis(window.performance().map_or(0.0, |p| p.now()))
}

impl Runtime {
    fn handle(&mut self, event: PageEvent, raw: Option<&Event>) {
        let now = now(&self.dom.window);
        let effects = self.page.handle(event, now, &DomLayout { dom: &self.dom });
        self.apply(effects, raw);
    }

    fn apply(&mut self, effects: Vec<Effect>, raw: Option<&Event>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect, raw) {
                log::error!("failed to apply page effect: {err:?}");
            }
        }
        self.arm_timer();
    }

    fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Toast(id) => self.toasts.get(&id),
            _ => self.dom.element(target),
        }
    }

    fn apply_one(&mut self, effect: Effect, raw: Option<&Event>) -> Result<(), JsValue> {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                if let Some(el) = self.element(target) {
                    el.style().set_property(property, &value)?;
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.element(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Effect::PreventDefault => {
                if let Some(event) = raw {
                    event.prevent_default();
                }
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.dom.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::LoadImage { index } => {
                let image = self
                    .dom
                    .lazy_images
                    .get(index)
                    .and_then(|el| el.dyn_ref::<HtmlImageElement>());
                if let Some(image) = image {
                    if let Some(src) = image.get_attribute("data-src") {
                        image.set_src(&src);
                    }
                    image.remove_attribute("data-src")?;
                }
            }
            Effect::Observe { observer, index } => {
                if let (Some(native), Some(el)) = (
                    self.observers.get(&observer),
                    self.dom.element(observer.target(index)),
                ) {
                    native.observer.observe(el);
                }
            }
            Effect::Unobserve { observer, index } => {
                if let (Some(native), Some(el)) = (
                    self.observers.get(&observer),
                    self.dom.element(observer.target(index)),
                ) {
                    native.observer.unobserve(el);
                }
            }
            Effect::ShowToast { id, message, kind } => self.show_toast(id, &message, kind)?,
            Effect::RemoveToast { id } => {
                if let Some(toast) = self.toasts.remove(&id) {
                    toast.remove();
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.dom.contact_form {
                    form.reset();
                }
            }
            Effect::RequestFrame => self.request_frame(),
        }
        Ok(())
    }

    fn show_toast(&mut self, id: ToastId, message: &str, kind: ToastKind) -> Result<(), JsValue> {
        let document = &self.dom.document;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let toast = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        toast.set_class_name(&kind.class_name());
        toast.set_text_content(Some(message));
        let style = toast.style();
        for (property, value) in kind.style() {
            style.set_property(property, &value)?;
        }
        body.append_child(&toast)?;
        self.toasts.insert(id, toast);
        Ok(())
    }

    /// Keeps one native timeout armed for the controller's next deadline.
    fn arm_timer(&mut self) {
        let next = self.page.next_deadline();
        if self.armed.map(|(deadline, _)| deadline) == next {
            return;
        }
        if let Some((_, handle)) = self.armed.take() {
            self.dom.window.clear_timeout_with_handle(handle);
        }
        let (Some(deadline), Some(ticker)) = (next, &self.ticker) else {
            return;
        };
        let delay = deadline.saturating_sub(now(&self.dom.window));
        let delay = i32::try_from(delay).unwrap_or(i32::MAX);
        match self
            .dom
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                ticker.as_ref().unchecked_ref(),
                delay,
            ) {
            Ok(handle) => self.armed = Some((deadline, handle)),
            Err(err) => log::error!("failed to arm page timer: {err:?}"),
        }
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        let Some(framer) = &self.framer else {
            return;
        };
        match self
            .dom
            .window
            .request_animation_frame(framer.as_ref().unchecked_ref())
        {
            Ok(_) => self.frame_pending = true,
            Err(err) => log::error!("failed to request animation frame: {err:?}"),
        }
    }

    fn toast_at(&self, event: &Event) -> Option<ToastId> {
        let node = event.target()?.dyn_into::<Node>().ok()?;
        self.toasts
            .iter()
            .find(|(_, toast)| toast.contains(Some(&node)))
            .map(|(id, _)| *id)
    }

    fn observed_index(&self, kind: ObserverKind, target: &Element) -> Option<usize> {
        match kind {
            ObserverKind::Entrance => Dom::index_of(&self.dom.entrance, target),
            ObserverKind::Stats => self
                .dom
                .hero_stats
                .as_ref()
                .filter(|stats| AsRef::<Element>::as_ref(*stats) == target)
                .map(|_| 0),
            ObserverKind::LazyImage => Dom::index_of(&self.dom.lazy_images, target),
        }
    }
}

fn dispatch(shared: &Shared, event: PageEvent, raw: Option<&Event>) {
    let Ok(mut rt) = shared.try_borrow_mut() else {
        log::warn!("dropped re-entrant page event {event:?}");
        return;
    };
    rt.handle(event, raw);
}

/// Starts the page runtime, waiting for `DOMContentLoaded` while the document
/// is still being parsed.
pub(crate) fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    if ReadyState::parse(&document.ready_state()).is_parsed() {
        return boot(window);
    }
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = boot(window.clone()) {
            log::error!("failed to start page behaviors: {err:?}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Discovers the parsed page, installs every listener, and runs the initial pass.
fn boot(window: Window) -> Result<(), JsValue> {
    let dom = Dom::discover(window)?;
    inject_styles(&dom.document)?;
    let page = PageBehaviors::new(PageConfig::default(), dom.inventory());
    let shared = Rc::new(RefCell::new(Runtime {
        page,
        dom,
        toasts: HashMap::new(),
        observers: HashMap::new(),
        ticker: None,
        framer: None,
        armed: None,
        frame_pending: false,
    }));

    install_clock(&shared);
    install_observers(&shared)?;
    register_listeners(&shared)?;

    {
        let mut rt = shared.borrow_mut();
        let now = now(&rt.dom.window);
        let Runtime { page, dom, .. } = &mut *rt;
        let effects = page.init(now, &DomLayout { dom });
        rt.apply(effects, None);
    }

    dispatch(&shared, PageEvent::DomReady, None);
    let (window, loaded) = {
        let rt = shared.borrow();
        let state = ReadyState::parse(&rt.dom.document.ready_state());
        (rt.dom.window.clone(), state.is_loaded())
    };
    if loaded {
        dispatch(&shared, PageEvent::Load, None);
    } else {
        listen(&window, "load", &shared, |_, _| Some(PageEvent::Load))?;
    }
    Ok(())
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        log::warn!("document has no head; animation styles not injected");
        return Ok(());
    };
    for css in [ANIMATE_IN_CSS, NOTIFICATION_KEYFRAMES_CSS] {
        let style = document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
    }
    Ok(())
}

/// Creates the reusable timeout and animation-frame callbacks.
fn install_clock(shared: &Shared) {
    let weak = Rc::downgrade(shared);
    let ticker = Closure::<dyn FnMut()>::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut rt) = shared.try_borrow_mut() else {
            return;
        };
        rt.armed = None;
        let now = now(&rt.dom.window);
        let Runtime { page, dom, .. } = &mut *rt;
        let effects = page.advance(now, &DomLayout { dom });
        rt.apply(effects, None);
    });

    let weak = Rc::downgrade(shared);
    let framer = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut rt) = shared.try_borrow_mut() else {
            return;
        };
        rt.frame_pending = false;
        let effects = rt.page.frame(to_millis(timestamp));
        rt.apply(effects, None);
    });

    let mut rt = shared.borrow_mut();
    rt.ticker = Some(ticker);
    rt.framer = Some(framer);
}

fn install_observers(shared: &Shared) -> Result<(), JsValue> {
    let config = shared.borrow().page.config().clone();
    let kinds = [
        (ObserverKind::Entrance, config.entrance_threshold),
        (ObserverKind::Stats, config.stats_threshold),
        (ObserverKind::LazyImage, config.lazy_image_threshold),
    ];
    for (kind, threshold) in kinds {
        let weak = Rc::downgrade(shared);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _: IntersectionObserver| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let index = match shared.try_borrow() {
                        Ok(rt) => rt.observed_index(kind, &entry.target()),
                        Err(_) => None,
                    };
                    let Some(index) = index else {
                        continue;
                    };
                    let visibility =
                        Visibility::from_entry(entry.intersection_ratio(), entry.is_intersecting());
                    dispatch(
                        &shared,
                        PageEvent::Visibility {
                            observer: kind,
                            index,
                            visibility,
                        },
                        None,
                    );
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        shared.borrow_mut().observers.insert(
            kind,
            NativeObserver {
                observer,
                _callback: callback,
            },
        );
    }
    Ok(())
}

/// Adds a listener that lives as long as the page.
fn listen(
    target: &EventTarget,
    kind: &str,
    shared: &Shared,
    translate: impl Fn(&Runtime, &Event) -> Option<PageEvent> + 'static,
) -> Result<(), JsValue> {
    let shared = Rc::clone(shared);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let page_event = match shared.try_borrow() {
            Ok(rt) => translate(&rt, &event),
            Err(_) => None,
        };
        if let Some(page_event) = page_event {
            dispatch(&shared, page_event, Some(&event));
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn register_listeners(shared: &Shared) -> Result<(), JsValue> {
    let (window, document, carousel, form) = {
        let rt = shared.borrow();
        (
            rt.dom.window.clone(),
            rt.dom.document.clone(),
            rt.dom.carousel.clone(),
            rt.dom.contact_form.clone(),
        )
    };

    listen(&window, "scroll", shared, |_, _| Some(PageEvent::Scroll))?;
    listen(&window, "mousemove", shared, |_, event| {
        Dom::pointer(event).map(PageEvent::PointerMove)
    })?;
    listen(&document, "click", shared, |rt, event| {
        let mut click = rt.dom.click_target(event);
        click.toast = rt.toast_at(event);
        Some(PageEvent::Click(click))
    })?;
    listen(&document, "keydown", shared, |_, event| {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        Some(PageEvent::Key(Key::from_dom(&key)))
    })?;

    if let Some(carousel) = carousel {
        listen(&carousel, "mouseenter", shared, |_, _| {
            Some(PageEvent::CarouselEnter)
        })?;
        listen(&carousel, "mouseleave", shared, |_, _| {
            Some(PageEvent::CarouselLeave)
        })?;
    }

    if let Some(form) = form {
        listen(&form, "submit", shared, |rt, _| {
            rt.dom.contact_form.as_ref().map(submission)
        })?;
    }
    Ok(())
}

fn submission(form: &HtmlFormElement) -> PageEvent {
    let field = |selector: &str| form.query_selector(selector).ok().flatten();
    PageEvent::Submit {
        email: field(selectors::EMAIL_FIELD)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value()),
        message: field(selectors::MESSAGE_FIELD)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .map(|area| area.value()),
    }
}
