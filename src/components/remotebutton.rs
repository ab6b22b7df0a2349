//! Remote button to integer value adapter.
//!
//! While the configured remote button is held, the
//! [`remote_button_system`](crate::systems::remotebutton::remote_button_system)
//! triggers an [`IntValueEvent`](crate::events::intvalue::IntValueEvent)
//! carrying `value` every frame. Typical use: a bank of buttons each selecting
//! a preset index.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoteButtonToIntValue {
    /// Remote button to watch.
    pub button_index: usize,
    /// Value sent while the button is held.
    pub value: i32,
}

impl RemoteButtonToIntValue {
    pub fn new(button_index: usize, value: i32) -> Self {
        RemoteButtonToIntValue {
            button_index,
            value,
        }
    }
}
