//! dcamfx library.
//!
//! Camera effects tool set on top of `bevy_ecs`: a flip-book page sequence
//! driven by the [`pagetiming`] model, a posterization render pass recorded
//! against an abstract render graph, and a remote-button-to-event adapter.
//! Exposed as a library for the binary and the integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod pagetiming;
pub mod resources;
pub mod systems;
