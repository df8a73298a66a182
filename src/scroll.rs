//! Smooth Scrolling
//!
//! In-page anchor navigation and the delayed scroll to the URL hash on
//! page load.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::HASH_SCROLL_DELAY_MS;

/// Element id named by an in-page `#anchor`
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn find_target(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn scroll_into_view(target: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll to the element with `id`. Returns false when it does not
/// exist.
pub fn scroll_to_anchor(id: &str) -> bool {
    match find_target(id) {
        Some(target) => {
            scroll_into_view(&target);
            true
        }
        None => false,
    }
}

/// Record `href` as the URL hash without jumping
pub fn push_hash(href: &str) {
    let Some(history) = web_sys::window().and_then(|win| win.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
        web_sys::console::warn_1(&format!("[SCROLL] pushState failed: {:?}", e).into());
    }
}

/// If the page was opened with a hash naming an element, scroll to it once
/// after a short delay
pub fn scroll_to_location_hash_later() {
    let Some(hash) = web_sys::window().and_then(|win| win.location().hash().ok()) else {
        return;
    };
    let Some(target) = anchor_id(&hash).and_then(find_target) else {
        return;
    };
    Timeout::new(HASH_SCROLL_DELAY_MS, move || scroll_into_view(&target)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#shop"), Some("shop"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/about#team"), None);
        assert_eq!(anchor_id(""), None);
    }
}
