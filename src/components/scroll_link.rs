//! Scroll Link Component
//!
//! Anchor that scrolls smoothly to an in-page target instead of jumping.

use leptos::prelude::*;

use crate::scroll;

/// `<a>` that smooth-scrolls when `href` names an element on the page.
/// Other links navigate normally.
#[component]
pub fn ScrollLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = href.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(id) = scroll::anchor_id(&target) {
            if scroll::scroll_to_anchor(id) {
                ev.prevent_default();
                scroll::push_hash(&target);
            }
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
