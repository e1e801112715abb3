// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element discovery and geometry queries over `web-sys`.

use core::ops::Range;

use kurbo::{Point, Size};
use vitrine_page::{ClickTarget, PageInventory, PageLayout, Target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, Node, Window};

use crate::selectors;

/// Handles to every element the controller can address.
///
/// Indexed groups are stored in document order, matching the indices carried
/// by [`Target`] values.
#[derive(Debug)]
pub(crate) struct Dom {
    pub(crate) window: Window,
    pub(crate) document: Document,
    body: Option<HtmlElement>,
    loader: Option<HtmlElement>,
    navbar: Option<HtmlElement>,
    menu_button: Option<HtmlElement>,
    nav_panel: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    revealables: Vec<HtmlElement>,
    pub(crate) carousel: Option<HtmlElement>,
    slides: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    pub(crate) entrance: Vec<HtmlElement>,
    pub(crate) hero_stats: Option<HtmlElement>,
    stat_labels: Vec<HtmlElement>,
    shapes: Vec<HtmlElement>,
    pub(crate) lazy_images: Vec<HtmlElement>,
    pub(crate) contact_form: Option<HtmlFormElement>,
}

impl Dom {
    /// Queries the document for every behavior's elements.
    pub(crate) fn discover(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let one = |selector: &str| -> Result<Option<HtmlElement>, JsValue> {
            Ok(document
                .query_selector(selector)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
        };
        let loader = document
            .get_element_by_id(selectors::LOADER_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let contact_form = document
            .query_selector(selectors::CONTACT_FORM)?
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        Ok(Self {
            body: document.body(),
            loader,
            navbar: one(selectors::NAVBAR)?,
            menu_button: one(selectors::MENU_BUTTON)?,
            nav_panel: one(selectors::NAV_PANEL)?,
            nav_links: all(&document, selectors::NAV_LINK)?,
            sections: all(&document, selectors::SECTIONS)?,
            revealables: all(&document, selectors::REVEALABLES)?,
            carousel: one(selectors::CAROUSEL)?,
            slides: all(&document, selectors::SLIDES)?,
            dots: all(&document, selectors::DOTS)?,
            entrance: all(&document, selectors::ENTRANCE)?,
            hero_stats: one(selectors::HERO_STATS)?,
            stat_labels: all(&document, selectors::STAT_LABELS)?,
            shapes: all(&document, selectors::SHAPES)?,
            lazy_images: all(&document, selectors::LAZY_IMAGES)?,
            contact_form,
            window,
            document,
        })
    }

    /// Summarizes what was found for the controller.
    pub(crate) fn inventory(&self) -> PageInventory {
        PageInventory {
            has_loader: self.loader.is_some(),
            has_navbar: self.navbar.is_some(),
            has_menu: self.menu_button.is_some() && self.nav_panel.is_some(),
            sections: self
                .sections
                .iter()
                .map(|section| section.id())
                .collect(),
            nav_links: self
                .nav_links
                .iter()
                .map(|link| link.get_attribute("href").unwrap_or_default())
                .collect(),
            revealables: self.revealables.len(),
            slides: self.slides.len(),
            dots: self.dots.len(),
            entrance: self
                .entrance
                .iter()
                .map(|el| {
                    let classes = el.class_list();
                    selectors::entrance_group(|class| classes.contains(class))
                })
                .collect(),
            has_hero_stats: self.hero_stats.is_some(),
            stat_labels: self.stat_labels.len(),
            shapes: self.shapes.len(),
            lazy_images: self.lazy_images.len(),
            has_contact_form: self.contact_form.is_some(),
        }
    }

    /// Resolves a static target. Toasts live in the runtime, not here.
    pub(crate) fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Body => self.body.as_ref(),
            Target::Loader => self.loader.as_ref(),
            Target::Navbar => self.navbar.as_ref(),
            Target::MenuButton => self.menu_button.as_ref(),
            Target::NavPanel => self.nav_panel.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Slide(i) => self.slides.get(i),
            Target::Dot(i) => self.dots.get(i),
            Target::Revealable(i) => self.revealables.get(i),
            Target::Entrance(i) => self.entrance.get(i),
            Target::HeroStats => self.hero_stats.as_ref(),
            Target::StatLabel(i) => self.stat_labels.get(i),
            Target::LazyImage(i) => self.lazy_images.get(i),
            Target::Shape(i) => self.shapes.get(i),
            Target::Toast(_) => None,
        }
    }

    /// Describes where a click landed. Toasts are resolved by the runtime.
    pub(crate) fn click_target(&self, event: &Event) -> ClickTarget {
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return ClickTarget::default();
        };
        let node: &Node = element.as_ref();
        let inside = |container: &Option<HtmlElement>| {
            container
                .as_ref()
                .is_some_and(|container| container.contains(Some(node)))
        };
        let closest = |selector: &str| element.closest(selector).ok().flatten();

        let panel_link = closest("a").is_some_and(|link| {
            self.nav_panel
                .as_ref()
                .is_some_and(|panel| panel.contains(Some(AsRef::<Node>::as_ref(&link))))
        });
        let dot = closest(selectors::DOTS).and_then(|dot| {
            self.dots
                .iter()
                .position(|candidate| AsRef::<Element>::as_ref(candidate) == &dot)
        });
        ClickTarget {
            in_menu_button: inside(&self.menu_button),
            in_nav_panel: inside(&self.nav_panel),
            panel_link,
            anchor_href: closest(selectors::SAME_PAGE_ANCHOR)
                .and_then(|anchor| anchor.get_attribute("href")),
            dot,
            download: closest(selectors::DOWNLOAD_BUTTON)
                .map(|button| selectors::download_label(button.get_attribute("aria-label"))),
            toast: None,
        }
    }

    /// Index of `element` within an observed group.
    pub(crate) fn index_of(group: &[HtmlElement], element: &Element) -> Option<usize> {
        group
            .iter()
            .position(|candidate| AsRef::<Element>::as_ref(candidate) == element)
    }

    /// Pointer position of a mouse event in viewport coordinates.
    pub(crate) fn pointer(event: &Event) -> Option<Point> {
        let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
        Some(Point::new(
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
        ))
    }
}

fn all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// [`PageLayout`] answered from live DOM measurements.
#[derive(Debug)]
pub(crate) struct DomLayout<'a> {
    pub(crate) dom: &'a Dom,
}

impl PageLayout for DomLayout<'_> {
    fn viewport(&self) -> Size {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size::new(
            dimension(self.dom.window.inner_width()),
            dimension(self.dom.window.inner_height()),
        )
    }

    fn scroll_y(&self) -> f64 {
        self.dom.window.scroll_y().unwrap_or(0.0)
    }

    fn revealable_top(&self, index: usize) -> Option<f64> {
        self.dom
            .revealables
            .get(index)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn section_span(&self, index: usize) -> Option<Range<f64>> {
        self.dom.sections.get(index).map(|section| {
            let top = f64::from(section.offset_top());
            top..top + f64::from(section.offset_height())
        })
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        let target = self.dom.document.get_element_by_id(id)?;
        Some(target.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn stat_text(&self, index: usize) -> Option<String> {
        self.dom.stat_labels.get(index)?.text_content()
    }
}
