//! Page Constants

/// Toast auto-dismiss delay
pub const TOAST_DELAY_MS: u32 = 1500;

/// Delay before scrolling to the URL hash on load
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

/// Shown when a product has no images
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/500x400?text=No+Image";

/// Size option label for products without sizes
pub const ONE_SIZE_LABEL: &str = "One size";

pub const DEFAULT_PRODUCT_NAME: &str = "Product";

pub const ADDED_TO_CART_MESSAGE: &str = "Added to cart!";
