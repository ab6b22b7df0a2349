//! Flip-book page events.
//!
//! [`PageCapturedEvent`] fires when a
//! [`FlipBookSequence`](crate::components::flipbook::FlipBookSequence)
//! samples a new page; the host uses it to grab the camera image and send it
//! to the image backend. [`PageRetiredEvent`] fires when a page leaves the
//! queue and its resources can be released.

use bevy_ecs::prelude::*;

/// A new page was appended to a sequence.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapturedEvent {
    /// Entity owning the sequence.
    pub entity: Entity,
    /// Capture index of the new page.
    pub index: u64,
}

/// A page was dropped from a sequence.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRetiredEvent {
    /// Entity owning the sequence.
    pub entity: Entity,
    /// Capture index of the dropped page.
    pub index: u64,
}
