//! Product Card Component
//!
//! Catalog tile acting as the trigger for the detail modal and the
//! quick-view carousel.

use leptos::prelude::*;

use crate::attrs::{normalize_product, normalize_quick_view, split_images, AttrIssue};
use crate::config::PLACEHOLDER_IMAGE;
use crate::models::ProductAttrs;
use crate::store::{store_open_product, store_open_quick_view, use_app_store};

fn warn_issues(tag: &str, subject: &str, issues: &[AttrIssue]) {
    for issue in issues {
        web_sys::console::warn_1(
            &format!("[{}] Invalid {} JSON for '{}': {}", tag, issue.field, subject, issue.error).into(),
        );
    }
}

/// Product tile with "Details" and optional "Quick view" triggers
#[component]
pub fn ProductCard(attrs: ProductAttrs) -> impl IntoView {
    let store = use_app_store();

    let (preview, _) = normalize_product(&attrs);
    let cover = split_images(attrs.images.as_deref().unwrap_or(""))
        .into_iter()
        .next()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let quick_attrs = attrs.quick_view_attrs();
    let has_gallery = quick_attrs.images.is_some();

    let open_details = move |_| {
        let (product, issues) = normalize_product(&attrs);
        warn_issues("MODAL", &product.id, &issues);
        store_open_product(&store, product);
    };

    let open_quick_view = move |_| {
        let (quick_view, issues) = normalize_quick_view(&quick_attrs);
        warn_issues("QUICKVIEW", &quick_view.title, &issues);
        store_open_quick_view(&store, quick_view);
    };

    view! {
        <div class="col">
            <div class="card h-100 product-card">
                <img src=cover class="card-img-top" alt=preview.name.clone() loading="lazy" />
                <div class="card-body">
                    <h5 class="card-title">{preview.name.clone()}</h5>
                    <p class="card-text fw-bold">{preview.formatted_price()}</p>
                </div>
                <div class="card-footer d-flex gap-2">
                    <button class="btn btn-dark btn-sm open-product" on:click=open_details>
                        "Details"
                    </button>
                    {has_gallery.then(move || view! {
                        <button class="btn btn-outline-dark btn-sm" on:click=open_quick_view>
                            "Quick view"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
