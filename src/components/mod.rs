//! ECS components for entities.
//!
//! Submodules overview:
//! - [`appconfigured`] – marks entities whose settings follow the config file
//! - [`camera`] – render target and final output of a camera
//! - [`flipbook`] – flip-book configuration and its runtime page queue
//! - [`posterizer`] – per-camera posterization settings
//! - [`remotebutton`] – maps a held remote button onto an integer event

pub mod appconfigured;
pub mod camera;
pub mod flipbook;
pub mod posterizer;
pub mod remotebutton;
