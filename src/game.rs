//! World setup and frame stepping.
//!
//! Builds an ECS world with every resource, observer and system the tool set
//! needs, and spawns the camera rig: a camera entity carrying a flip-book
//! sequence and a posterizer. Used by the binary and by the integration
//! tests.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::appconfigured::AppConfigured;
use crate::components::camera::Camera;
use crate::components::flipbook::FlipBookSequence;
use crate::components::remotebutton::RemoteButtonToIntValue;
use crate::events::flipbook::{PageCapturedEvent, PageRetiredEvent};
use crate::events::intvalue::IntValueEvent;
use crate::resources::appconfig::AppConfig;
use crate::resources::remoteinput::RemoteInput;
use crate::resources::rendergraph::{RecordingGraph, TextureDesc};
use crate::resources::renderpasses::RenderPassQueue;
use crate::resources::sessionstats::SessionStats;
use crate::resources::worldtime::WorldTime;
use crate::systems::appconfig::apply_config_changes;
use crate::systems::flipbook::{flipbook_sequence_system, flipbook_timing_system};
use crate::systems::posterizer::PosterizerFeature;
use crate::systems::remotebutton::remote_button_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

pub const RENDER_WIDTH: u32 = 640;
pub const RENDER_HEIGHT: u32 = 360;

fn count_captured_pages(trigger: On<PageCapturedEvent>, mut stats: ResMut<SessionStats>) {
    debug!(
        "page {} captured on {:?}",
        trigger.event().index,
        trigger.event().entity
    );
    stats.pages_captured += 1;
}

fn count_retired_pages(trigger: On<PageRetiredEvent>, mut stats: ResMut<SessionStats>) {
    debug!(
        "page {} retired on {:?}",
        trigger.event().index,
        trigger.event().entity
    );
    stats.pages_retired += 1;
}

fn record_int_value(trigger: On<IntValueEvent>, mut stats: ResMut<SessionStats>) {
    stats.last_int_value = Some(trigger.event().value);
}

/// Create a world holding `config` and every shared resource.
///
/// The posterizer feature is installed into the render pass queue and the
/// session observers are registered.
pub fn setup_world(config: AppConfig) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(WorldTime::default());
    world.insert_resource(RemoteInput::new());
    world.insert_resource(RecordingGraph::new());
    world.insert_resource(SessionStats::default());

    let mut queue = RenderPassQueue::new();
    PosterizerFeature::create().add_render_passes(&mut queue);
    world.insert_resource(queue);

    world.spawn(Observer::new(count_captured_pages));
    world.spawn(Observer::new(count_retired_pages));
    world.spawn(Observer::new(record_int_value));
    // Observers must exist before any system triggers events.
    world.flush();
    world
}

/// Spawn a camera rendering offscreen with the configured flip-book and
/// posterizer attached. The rig keeps following later config changes.
pub fn spawn_camera_rig(world: &mut World) -> Entity {
    let color = world
        .resource_mut::<RecordingGraph>()
        .import_texture(TextureDesc::color("CameraColor", RENDER_WIDTH, RENDER_HEIGHT));
    let (flipbook, posterizer) = {
        let config = world.resource::<AppConfig>();
        (config.flipbook.clone(), config.posterizer.clone())
    };
    world
        .spawn((
            Camera::offscreen(color),
            flipbook,
            FlipBookSequence::new(),
            posterizer,
            AppConfigured,
        ))
        .id()
}

/// Spawn one remote button adapter per `(button, value)` pair.
pub fn spawn_remote_buttons(world: &mut World, bindings: &[(usize, i32)]) -> Vec<Entity> {
    bindings
        .iter()
        .map(|&(button, value)| world.spawn(RemoteButtonToIntValue::new(button, value)).id())
        .collect()
}

/// Build the per-frame update schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(apply_config_changes); // Must run early to apply config before other systems
    update.add_systems(flipbook_timing_system.after(apply_config_changes));
    update.add_systems(flipbook_sequence_system.after(flipbook_timing_system));
    update.add_systems(remote_button_system::<RemoteInput>);
    update.add_systems(
        render_system
            .after(flipbook_sequence_system)
            .after(remote_button_system::<RemoteInput>),
    );
    update
}

/// Advance the world by one frame of `dt` unscaled seconds.
pub fn step(world: &mut World, update: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    update.run(world);
    world.clear_trackers(); // Clear changed components for next frame
}
