// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Web: binds [`vitrine_page`] to a live document via `web-sys`.
//!
//! On `wasm32` the module start hook discovers the page's elements, injects the
//! stylesheets the animations rely on, and wires every listener to a single
//! [`PageBehaviors`](vitrine_page::PageBehaviors) held in an
//! `Rc<RefCell<..>>`. Each listener translates its DOM event into a
//! [`PageEvent`](vitrine_page::PageEvent), and the returned effects are applied
//! in order. One native timeout is kept armed for the controller's next
//! deadline, and an animation-frame loop runs while counters are animating.
//!
//! Missing elements disable their behavior. Failures inside listeners are
//! logged through `console_log` rather than thrown.
//!
//! The selector table in [`selectors`] is available on every target.

pub mod selectors;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod runtime;

/// Entry point run when the module is instantiated.
///
/// Installs the panic hook and console logger, then starts the page runtime.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level)
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    runtime::start()
}
