//! Remote control input resource.
//!
//! A remote controller (phone app, MIDI box, OSC bridge...) exposes a bank of
//! numbered buttons. Whatever polls the device writes the held buttons into
//! [`RemoteInput`]; systems only ever ask [`InputSource::is_button_down`].

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Source of numbered button states.
pub trait InputSource: Send + Sync {
    /// Whether button `index` is held this frame.
    fn is_button_down(&self, index: usize) -> bool;
}

/// Button states of the remote controller for the current frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct RemoteInput {
    held: FxHashSet<usize>,
}

impl RemoteInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, index: usize) {
        self.held.insert(index);
    }

    pub fn release(&mut self, index: usize) {
        self.held.remove(&index);
    }

    pub fn set(&mut self, index: usize, down: bool) {
        if down {
            self.press(index);
        } else {
            self.release(index);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputSource for RemoteInput {
    fn is_button_down(&self, index: usize) -> bool {
        self.held.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_buttons_held() {
        let input = RemoteInput::default();
        assert!(!input.is_button_down(0));
        assert!(!input.is_button_down(15));
    }

    #[test]
    fn press_and_release() {
        let mut input = RemoteInput::new();
        input.press(3);
        assert!(input.is_button_down(3));
        assert!(!input.is_button_down(2));
        input.set(3, false);
        assert!(!input.is_button_down(3));
        input.set(1, true);
        input.press(2);
        input.release_all();
        assert!(!input.is_button_down(1));
        assert!(!input.is_button_down(2));
    }
}
