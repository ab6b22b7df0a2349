//! ECS systems run by the update schedule.
//!
//! - [`appconfig`] – pushes configuration changes onto components
//! - [`flipbook`] – flip-book timing refresh and page sampling
//! - [`posterizer`] – posterization render pass and feature
//! - [`remotebutton`] – remote button polling
//! - [`render`] – records render passes for every camera
//! - [`time`] – world clock update
pub mod appconfig;
pub mod flipbook;
pub mod posterizer;
pub mod remotebutton;
pub mod render;
pub mod time;
