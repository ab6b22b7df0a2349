//! Integer value events.
//!
//! Emitted by [`crate::systems::remotebutton::remote_button_system`] while a
//! [`RemoteButtonToIntValue`](crate::components::remotebutton::RemoteButtonToIntValue)
//! button is held. Observers map the value onto whatever it selects
//! (a prompt preset, an effect level, a camera index...).

use bevy_ecs::prelude::*;

/// Event carrying the integer configured on a remote button adapter.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValueEvent {
    /// The adapter entity whose button is held.
    pub entity: Entity,
    /// The configured value.
    pub value: i32,
}
