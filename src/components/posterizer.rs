//! Posterizer controller component.
//!
//! Attach [`PosterizerController`] to a camera entity to have the
//! [`PosterizerPass`](crate::systems::posterizer::PosterizerPass) quantize its
//! color output. Cameras without the component, or with it disabled, are
//! left untouched.

use bevy_ecs::prelude::Component;

use crate::resources::rendergraph::{BlitMaterial, UniformValue};

pub const POSTERIZE_SHADER: &str = "posterize";
pub const DEFAULT_LEVELS: u32 = 4;

/// Per-camera posterization settings.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PosterizerController {
    pub enabled: bool,
    /// Number of color levels per channel.
    pub levels: u32,
}

impl Default for PosterizerController {
    fn default() -> Self {
        Self {
            enabled: true,
            levels: DEFAULT_LEVELS,
        }
    }
}

impl PosterizerController {
    pub fn new(levels: u32) -> Self {
        Self {
            enabled: true,
            levels,
        }
    }

    /// Blit material carrying the current settings.
    pub fn material(&self) -> BlitMaterial {
        BlitMaterial::new(POSTERIZE_SHADER).with_uniform(
            "uLevels",
            UniformValue::Int(self.levels.max(1).min(i32::MAX as u32) as i32),
        )
    }
}
