//! Camera component.
//!
//! A camera renders into `target` every frame; the render pass queue then
//! post-processes that image and the final texture is published in
//! `output` for the presenter.

use bevy_ecs::prelude::Component;

use crate::resources::rendergraph::{FrameTargets, TextureHandle};

/// Camera whose color output is fed through the render pass queue.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Texture the camera renders into.
    pub target: TextureHandle,
    /// The target is the back buffer rather than an offscreen texture.
    pub is_back_buffer: bool,
    /// Final color texture of the last recorded frame.
    pub output: Option<TextureHandle>,
}

impl Camera {
    /// Camera rendering into an offscreen color texture.
    pub fn offscreen(target: TextureHandle) -> Self {
        Camera {
            target,
            is_back_buffer: false,
            output: None,
        }
    }

    /// Camera rendering straight into the back buffer.
    pub fn back_buffer(target: TextureHandle) -> Self {
        Camera {
            target,
            is_back_buffer: true,
            output: None,
        }
    }

    /// Frame targets at the start of a frame, before any pass ran.
    pub fn frame_targets(&self) -> FrameTargets {
        FrameTargets {
            color: self.target,
            is_back_buffer: self.is_back_buffer,
        }
    }
}
