//! Gallery Selection
//!
//! Active-image tracking for the modal thumbnails and the quick-view
//! carousel.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    active: usize,
}

impl Gallery {
    /// First image starts active
    pub fn new(images: Vec<String>) -> Self {
        Self { images, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Active image, or "" for an empty gallery
    pub fn current(&self) -> &str {
        self.images.get(self.active).map(String::as_str).unwrap_or("")
    }

    pub fn is_active(&self, idx: usize) -> bool {
        !self.images.is_empty() && self.active == idx
    }

    /// Make `idx` active. Out-of-range indices are ignored.
    pub fn select(&mut self, idx: usize) -> bool {
        if idx >= self.images.len() {
            return false;
        }
        self.active = idx;
        true
    }

    /// Advance with wrap-around
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.active = (self.active + 1) % self.images.len();
        }
    }

    /// Step back with wrap-around
    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.active = (self.active + self.images.len() - 1) % self.images.len();
        }
    }
}
