//! Render pass queue resource.
//!
//! Holds the post-processing passes installed by renderer features and
//! records them, in [`RenderPassEvent`] order, for each camera. See
//! [`crate::systems::render::render_system`] for the per-frame driver.

use bevy_ecs::prelude::Resource;
use bevy_ecs::world::EntityRef;
use log::trace;

use crate::resources::rendergraph::{FrameTargets, RenderGraph, TextureHandle};

/// Point in the frame at which a pass is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderPassEvent {
    BeforeRenderingOpaques,
    AfterRenderingOpaques,
    BeforeRenderingPostProcessing,
    AfterRenderingPostProcessing,
}

/// Everything a pass may touch while recording one camera.
pub struct RenderContext<'a> {
    pub graph: &'a mut dyn RenderGraph,
    pub frame: &'a mut FrameTargets,
    /// The camera entity being rendered; passes read their controllers from it.
    pub camera: EntityRef<'a>,
}

/// A pass that records work into the render graph.
pub trait RenderPass: Send + Sync {
    fn name(&self) -> &str;

    fn event(&self) -> RenderPassEvent;

    /// Records the pass for the camera in `ctx`.
    ///
    /// Returns the texture the pass wrote, or `None` if it was skipped.
    fn record(&mut self, ctx: &mut RenderContext<'_>) -> Option<TextureHandle>;
}

/// Installed render passes, kept sorted by event.
#[derive(Resource, Default)]
pub struct RenderPassQueue {
    passes: Vec<Box<dyn RenderPass>>,
}

impl RenderPassQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pass after every pass with the same or an earlier event.
    pub fn enqueue(&mut self, pass: Box<dyn RenderPass>) {
        let at = self
            .passes
            .partition_point(|p| p.event() <= pass.event());
        self.passes.insert(at, pass);
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Pass names in recording order.
    pub fn names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Records every pass for one camera and returns the textures they wrote.
    pub fn record_all(&mut self, ctx: &mut RenderContext<'_>) -> Vec<TextureHandle> {
        let mut written = Vec::new();
        for pass in self.passes.iter_mut() {
            match pass.record(ctx) {
                Some(texture) => {
                    trace!("render pass '{}' wrote {:?}", pass.name(), texture);
                    written.push(texture);
                }
                None => trace!("render pass '{}' skipped", pass.name()),
            }
        }
        written
    }
}
