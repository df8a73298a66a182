//! UI Components
//!
//! Leptos components of the catalog page.

mod cart_badge;
mod cart_toast;
mod product_card;
mod product_modal;
mod quick_view_modal;
mod scroll_link;

pub use cart_badge::CartBadge;
pub use cart_toast::CartToast;
pub use product_card::ProductCard;
pub use product_modal::ProductModal;
pub use quick_view_modal::QuickViewModal;
pub use scroll_link::ScrollLink;
