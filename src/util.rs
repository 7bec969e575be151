// DOM helpers shared by the components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Mail fallback used when no chat widget is installed on the page.
pub const CONTACT_MAILTO: &str = "mailto:consulting@awani.ai?subject=Consulting%20Inquiry";

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Smooth-scrolls the viewport to a section anchor. A missing anchor is
/// normal on a static page and is silently skipped.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Applies or releases the body scroll lock. Settable, not counted: applying
/// the current state again is a no-op.
pub fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

/// Toggles the body class that lets stylesheets cheapen expensive effects
/// while a scroll burst is in progress. Purely a rendering hint.
pub fn set_scroll_activity(active: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let list = body.class_list();
    let _ = if active {
        list.add_1("is-scrolling")
    } else {
        list.remove_1("is-scrolling")
    };
}

/// Book-a-call action: delegate to the embedded chat widget when the host
/// page provides one, otherwise fall back to a mail link.
pub fn open_chat() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(api) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("tidioChatApi")) {
        if !api.is_undefined() && !api.is_null() {
            if let Ok(open) = js_sys::Reflect::get(&api, &JsValue::from_str("open")) {
                if let Some(f) = open.dyn_ref::<js_sys::Function>() {
                    let _ = f.call0(&api);
                    return;
                }
            }
        }
    }
    let _ = window.location().set_href(CONTACT_MAILTO);
}
