//! Posterization render pass and the feature that installs it.
//!
//! The pass is a lookup-and-blit: it reads the camera's
//! [`PosterizerController`], copies the camera color into a fresh texture
//! through the posterize material, and makes that texture the new camera
//! color.

use log::{debug, warn};

use crate::components::posterizer::PosterizerController;
use crate::resources::rendergraph::{BlitPass, TextureHandle};
use crate::resources::renderpasses::{RenderContext, RenderPass, RenderPassEvent, RenderPassQueue};

pub const POSTERIZER_PASS_NAME: &str = "Posterizer";

/// Blits the camera color through the posterize material.
#[derive(Debug, Clone)]
pub struct PosterizerPass {
    pub event: RenderPassEvent,
}

impl RenderPass for PosterizerPass {
    fn name(&self) -> &str {
        POSTERIZER_PASS_NAME
    }

    fn event(&self) -> RenderPassEvent {
        self.event
    }

    fn record(&mut self, ctx: &mut RenderContext<'_>) -> Option<TextureHandle> {
        let ctrl = ctx.camera.get::<PosterizerController>()?;
        if !ctrl.enabled {
            return None;
        }

        // Back buffer sources are not supported.
        if ctx.frame.is_back_buffer {
            debug!(
                "posterizer skipped for {:?}: camera targets the back buffer",
                ctx.camera.id()
            );
            return None;
        }

        let source = ctx.frame.color;
        let Some(mut desc) = ctx.graph.texture_desc(source) else {
            warn!("posterizer: unknown camera color texture {:?}", source);
            return None;
        };
        desc.name = POSTERIZER_PASS_NAME.to_string();
        desc.clear_buffer = false;
        desc.depth_buffer_bits = 0;
        let dest = ctx.graph.create_texture(desc);

        ctx.graph.add_blit_pass(BlitPass {
            name: POSTERIZER_PASS_NAME.to_string(),
            source,
            destination: dest,
            material: ctrl.material(),
            pass_index: 0,
        });

        ctx.frame.color = dest;
        Some(dest)
    }
}

/// Renderer feature owning the posterizer pass.
#[derive(Debug, Clone)]
pub struct PosterizerFeature {
    pass: PosterizerPass,
}

impl PosterizerFeature {
    /// Creates the feature with its pass scheduled before post-processing.
    pub fn create() -> Self {
        Self {
            pass: PosterizerPass {
                event: RenderPassEvent::BeforeRenderingPostProcessing,
            },
        }
    }

    pub fn add_render_passes(&self, queue: &mut RenderPassQueue) {
        queue.enqueue(Box::new(self.pass.clone()));
    }
}
