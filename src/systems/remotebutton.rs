//! Remote button polling system.
//!
//! Polls an [`InputSource`] resource each frame and triggers an
//! [`IntValueEvent`] for every [`RemoteButtonToIntValue`] whose button is
//! held. The event repeats every frame while the button stays down.
use bevy_ecs::prelude::*;

use crate::components::remotebutton::RemoteButtonToIntValue;
use crate::events::intvalue::IntValueEvent;
use crate::resources::remoteinput::InputSource;

/// Emit [`IntValueEvent`]s for held remote buttons.
///
/// Generic over the input resource so hosts can plug in their own device
/// state; the engine registers it as `remote_button_system::<RemoteInput>`.
/// Without the resource the system does nothing.
///
/// [`RemoteInput`]: crate::resources::remoteinput::RemoteInput
pub fn remote_button_system<I: InputSource + Resource>(
    input: Option<Res<I>>,
    query: Query<(Entity, &RemoteButtonToIntValue)>,
    mut commands: Commands,
) {
    let Some(input) = input else {
        return;
    };
    for (entity, adapter) in query.iter() {
        if input.is_button_down(adapter.button_index) {
            commands.trigger(IntValueEvent {
                entity,
                value: adapter.value,
            });
        }
    }
}
