//! Configuration change detection system.
//!
//! Monitors [`AppConfig`] for changes and copies its settings onto the
//! [`FlipBook`] and [`PosterizerController`] of every [`AppConfigured`]
//! entity. Unmarked entities are left alone. Writing a new
//! flip-book configuration marks the component changed, which in turn makes
//! [`flipbook_timing_system`](crate::systems::flipbook::flipbook_timing_system)
//! revalidate the sequence.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::appconfigured::AppConfigured;
use crate::components::flipbook::FlipBook;
use crate::components::posterizer::PosterizerController;
use crate::resources::appconfig::AppConfig;

/// System that applies configuration changes.
///
/// Components already equal to the configuration are left untouched so
/// their change ticks stay quiet.
pub fn apply_config_changes(
    maybe_config: Option<Res<AppConfig>>,
    mut flipbooks: Query<&mut FlipBook, With<AppConfigured>>,
    mut posterizers: Query<&mut PosterizerController, With<AppConfigured>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    for mut flipbook in flipbooks.iter_mut() {
        if *flipbook != config.flipbook {
            *flipbook = config.flipbook.clone();
        }
    }
    for mut posterizer in posterizers.iter_mut() {
        if *posterizer != config.posterizer {
            *posterizer = config.posterizer.clone();
        }
    }

    debug!("AppConfig changes applied.");
}
