//! Counters collected by the session observers.
//!
//! Filled by the observers registered in [`crate::game::setup_world`]; the
//! headless runner prints them when it exits.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Pages captured across all sequences.
    pub pages_captured: u64,
    /// Pages retired across all sequences.
    pub pages_retired: u64,
    /// Last value received from a remote button adapter.
    pub last_int_value: Option<i32>,
}
