//! Marker for entities whose settings follow [`AppConfig`].
//!
//! [`apply_config_changes`] only rewrites the [`FlipBook`] and
//! [`PosterizerController`] of entities carrying this marker; entities
//! configured individually keep their own values.
//!
//! [`AppConfig`]: crate::resources::appconfig::AppConfig
//! [`apply_config_changes`]: crate::systems::appconfig::apply_config_changes
//! [`FlipBook`]: crate::components::flipbook::FlipBook
//! [`PosterizerController`]: crate::components::posterizer::PosterizerController

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfigured;
