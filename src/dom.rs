use folio_core::{scroll_target, NavSection};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub(crate) fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.trim_start_matches('#').is_empty() {
        None
    } else {
        Some(hash)
    }
}

/// Smooth-scrolls so `section` sits just below the navbar. Returns false when
/// the page has no element with that id.
pub(crate) fn scroll_to_section(section: NavSection) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.id()))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        gloo::console::log!("scroll target missing", section.id());
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(element.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub(crate) fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(_) => true,
        Err(err) => {
            gloo::console::warn!("failed to open project link", url.to_string(), err);
            false
        }
    }
}
