//! Toast State
//!
//! One reusable notification. A newer message supersedes the older one and
//! only the newest message's timer may hide the toast.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    generation: u32,
}

impl ToastState {
    /// Show `message`; returns the generation to pass to `dismiss`
    pub fn show(&mut self, message: &str) -> u32 {
        self.message = message.to_string();
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hide the toast if no newer message was shown since `generation`
    pub fn dismiss(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_dismiss() {
        let mut toast = ToastState::default();
        let gen = toast.show("Added to cart!");
        assert!(toast.visible);
        assert!(toast.dismiss(gen));
        assert!(!toast.visible);
        assert_eq!(toast.message, "Added to cart!");
    }

    #[test]
    fn test_last_message_wins() {
        let mut toast = ToastState::default();
        let first = toast.show("first");
        let second = toast.show("second");

        assert!(!toast.dismiss(first));
        assert!(toast.visible);
        assert_eq!(toast.message, "second");

        assert!(toast.dismiss(second));
        assert!(!toast.visible);
    }
}
