//! Render recording system.
//!
//! Once per frame, resets the [`RecordingGraph`] and, for every [`Camera`]
//! entity, records the installed [`RenderPassQueue`] starting from the
//! camera's target. The final color texture is stored in
//! [`Camera::output`] for the presenter.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::camera::Camera;
use crate::resources::rendergraph::RecordingGraph;
use crate::resources::renderpasses::{RenderContext, RenderPassQueue};

/// Exclusive system recording all cameras for this frame.
///
/// Does nothing if either the queue or the graph resource is missing.
pub fn render_system(world: &mut World) {
    if !world.contains_resource::<RenderPassQueue>() || !world.contains_resource::<RecordingGraph>()
    {
        return;
    }

    let cameras: Vec<Entity> = world
        .query_filtered::<Entity, With<Camera>>()
        .iter(world)
        .collect();

    world.resource_scope(|world, mut queue: Mut<RenderPassQueue>| {
        world.resource_scope(|world, mut graph: Mut<RecordingGraph>| {
            graph.begin_frame();
            for entity in cameras {
                let Some(camera) = world.get::<Camera>(entity) else {
                    continue;
                };
                let mut frame = camera.frame_targets();
                let written = {
                    let mut ctx = RenderContext {
                        graph: &mut *graph,
                        frame: &mut frame,
                        camera: world.entity(entity),
                    };
                    queue.record_all(&mut ctx)
                };
                debug!(
                    "camera {:?}: {} pass(es) wrote output, color now {:?}",
                    entity,
                    written.len(),
                    frame.color
                );
                if let Some(mut camera) = world.get_mut::<Camera>(entity) {
                    camera.output = Some(frame.color);
                }
            }
        });
    });
}
