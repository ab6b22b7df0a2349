//! Render graph boundary.
//!
//! Post-processing passes never talk to a GPU directly. They record work
//! against a [`RenderGraph`]: they look up texture descriptors, allocate
//! transient textures, and add blit passes. The host renderer implements the
//! trait; [`RecordingGraph`] is an in-memory implementation that simply keeps
//! what was recorded, used by the headless runner and the tests.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Opaque handle to a texture owned by the render graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Pixel format of a render graph texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFormat {
    #[default]
    Rgba8,
    Rgba16Float,
}

/// Description used to allocate a render graph texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Debug name of the texture.
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Whether the texture is cleared before first use.
    pub clear_buffer: bool,
    /// Depth buffer bits; 0 means no depth attachment.
    pub depth_buffer_bits: u32,
}

impl TextureDesc {
    pub fn color(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            format: TextureFormat::default(),
            clear_buffer: true,
            depth_buffer_bits: 0,
        }
    }
}

/// Value of a material uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
}

/// Shader plus uniform values used by a blit.
#[derive(Debug, Clone, PartialEq)]
pub struct BlitMaterial {
    /// Key of the shader in the host's shader store.
    pub shader: Arc<str>,
    pub uniforms: FxHashMap<Arc<str>, UniformValue>,
}

impl BlitMaterial {
    pub fn new(shader: &str) -> Self {
        Self {
            shader: Arc::from(shader),
            uniforms: FxHashMap::default(),
        }
    }

    /// Builder-style uniform setter.
    pub fn with_uniform(mut self, name: &str, value: UniformValue) -> Self {
        self.uniforms.insert(Arc::from(name), value);
        self
    }
}

/// A full-screen copy from `source` to `destination` through a material.
#[derive(Debug, Clone, PartialEq)]
pub struct BlitPass {
    pub name: String,
    pub source: TextureHandle,
    pub destination: TextureHandle,
    pub material: BlitMaterial,
    /// Shader pass index within the material.
    pub pass_index: u32,
}

/// Per-camera frame targets handed to render passes.
///
/// `color` is the texture later passes read from; a pass that produces a new
/// image replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTargets {
    /// Current camera color texture.
    pub color: TextureHandle,
    /// The camera renders straight into the back buffer.
    pub is_back_buffer: bool,
}

/// Recording interface implemented by the host renderer.
pub trait RenderGraph {
    /// Descriptor of an existing texture, if the handle is known.
    fn texture_desc(&self, texture: TextureHandle) -> Option<TextureDesc>;

    /// Allocates a texture and returns its handle.
    fn create_texture(&mut self, desc: TextureDesc) -> TextureHandle;

    /// Appends a blit pass to the graph.
    fn add_blit_pass(&mut self, pass: BlitPass);
}

/// Handles of transient textures carry this bit.
const TRANSIENT_BIT: u64 = 1 << 63;
/// Transient handles keep the frame generation above the low 32 index bits.
const GENERATION_SHIFT: u32 = 32;
const GENERATION_MASK: u64 = (1 << 31) - 1;
const INDEX_MASK: u64 = (1 << GENERATION_SHIFT) - 1;

/// In-memory [`RenderGraph`] keeping every recorded texture and pass.
///
/// Imported textures live for the whole session; textures created by passes
/// are transient and dropped, together with the recorded passes, by
/// [`begin_frame`](RecordingGraph::begin_frame). Transient handles carry the
/// frame generation, so a handle kept from an earlier frame no longer
/// resolves.
#[derive(Resource, Debug, Default)]
pub struct RecordingGraph {
    imported: Vec<TextureDesc>,
    transient: Vec<TextureDesc>,
    blits: Vec<BlitPass>,
    generation: u64,
}

impl RecordingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an externally owned texture such as a camera target.
    pub fn import_texture(&mut self, desc: TextureDesc) -> TextureHandle {
        let handle = TextureHandle(self.imported.len() as u64);
        self.imported.push(desc);
        handle
    }

    /// Blit passes recorded so far, in order.
    pub fn blits(&self) -> &[BlitPass] {
        &self.blits
    }

    /// Imported plus transient textures.
    pub fn texture_count(&self) -> usize {
        self.imported.len() + self.transient.len()
    }

    /// Drops recorded passes and transient textures, keeping imports.
    pub fn begin_frame(&mut self) {
        self.transient.clear();
        self.blits.clear();
        self.generation = (self.generation + 1) & GENERATION_MASK;
    }
}

impl RenderGraph for RecordingGraph {
    fn texture_desc(&self, texture: TextureHandle) -> Option<TextureDesc> {
        if texture.0 & TRANSIENT_BIT != 0 {
            let generation = (texture.0 >> GENERATION_SHIFT) & GENERATION_MASK;
            if generation != self.generation {
                return None;
            }
            self.transient
                .get((texture.0 & INDEX_MASK) as usize)
                .cloned()
        } else {
            self.imported.get(texture.0 as usize).cloned()
        }
    }

    fn create_texture(&mut self, desc: TextureDesc) -> TextureHandle {
        let handle = TextureHandle(
            TRANSIENT_BIT
                | (self.generation << GENERATION_SHIFT)
                | (self.transient.len() as u64 & INDEX_MASK),
        );
        self.transient.push(desc);
        handle
    }

    fn add_blit_pass(&mut self, pass: BlitPass) {
        self.blits.push(pass);
    }
}
