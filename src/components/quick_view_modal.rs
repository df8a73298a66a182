//! Quick View Modal Component
//!
//! Image carousel for a product's gallery. Every opening rebuilds the
//! slides from scratch with the first one active.

use leptos::prelude::*;

use crate::gallery::Gallery;
use crate::models::CarouselView;
use crate::store::{store_close_quick_view, use_app_store, AppStateStoreFields};

#[component]
pub fn QuickViewModal() -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.quick_view().with(|q| q.is_some());

    view! {
        <div
            class=move || if is_open() { "modal fade show d-block" } else { "modal fade" }
            id="quickViewModal"
            tabindex="-1"
            aria-labelledby="modalTitle"
        >
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    {move || store.quick_view().get().map(|quick_view| view! {
                        <QuickViewBody quick_view=quick_view />
                    })}
                </div>
            </div>
        </div>
        <Show when=is_open>
            <div class="modal-backdrop fade show" on:click=move |_| store_close_quick_view(&store)></div>
        </Show>
    }
}

#[component]
fn QuickViewBody(quick_view: CarouselView) -> impl IntoView {
    let store = use_app_store();
    let slides = quick_view.slides();
    let carousel = RwSignal::new(Gallery::new(quick_view.images.clone()));

    view! {
        <div class="modal-header">
            <h5 class="modal-title" id="modalTitle">{quick_view.title.clone()}</h5>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| store_close_quick_view(&store)
            ></button>
        </div>
        <div class="modal-body">
            <p id="modalPrice" class="fw-bold">{quick_view.price.clone()}</p>
            <div class="carousel slide">
                <div class="carousel-inner" id="modalCarouselInner">
                    {slides.into_iter().enumerate().map(|(idx, slide)| view! {
                        <div class=move || if carousel.with(|c| c.is_active(idx)) { "carousel-item active" } else { "carousel-item" }>
                            <img src=slide.src class="d-block w-100" alt=slide.alt loading="lazy" />
                        </div>
                    }).collect_view()}
                </div>
                <Show when=move || carousel.with(|c| c.len() > 1)>
                    <button class="carousel-control-prev" type="button" on:click=move |_| carousel.update(Gallery::prev)>
                        <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                        <span class="visually-hidden">"Previous"</span>
                    </button>
                    <button class="carousel-control-next" type="button" on:click=move |_| carousel.update(Gallery::next)>
                        <span class="carousel-control-next-icon" aria-hidden="true"></span>
                        <span class="visually-hidden">"Next"</span>
                    </button>
                </Show>
            </div>
        </div>
    }
}
