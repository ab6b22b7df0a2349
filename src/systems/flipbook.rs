//! Flip-book sequence systems.
//!
//! - [`flipbook_timing_system`] – revalidates the timing of a sequence when
//!   its [`FlipBook`] configuration is added or edited
//! - [`flipbook_sequence_system`] – captures a page every sample interval and
//!   retires pages that no longer fit the queue
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `flipbook_timing_system` refreshes the cached
//!    [`PageTiming`](crate::pagetiming::PageTiming) of changed flip-books
//! 2. `flipbook_sequence_system` ages every live page by the world delta
//! 3. For every whole `sample_interval` accumulated, a page is captured and
//!    [`PageCapturedEvent`] is triggered; captures that could not survive the
//!    frame are skipped
//! 4. While the queue holds more than `page_count` pages, the oldest is
//!    dropped and [`PageRetiredEvent`] is triggered

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::flipbook::{FlipBook, FlipBookSequence};
use crate::events::flipbook::{PageCapturedEvent, PageRetiredEvent};
use crate::resources::worldtime::WorldTime;

/// Recompute the cached timing of flip-books whose configuration changed.
///
/// An invalid configuration is logged, all live pages are retired and the
/// sequence stops until the configuration is fixed.
pub fn flipbook_timing_system(
    mut query: Query<
        (Entity, &FlipBook, &mut FlipBookSequence),
        Or<(Changed<FlipBook>, Added<FlipBookSequence>)>,
    >,
    mut commands: Commands,
) {
    for (entity, flipbook, mut sequence) in query.iter_mut() {
        let retired = match flipbook.timing() {
            Ok(timing) => {
                info!("FlipBook {:?}: {}", entity, timing);
                sequence.timing = Some(timing);
                sequence.retire_overflow(timing.page_count as usize)
            }
            Err(e) => {
                warn!("FlipBook {:?} stopped: {}", entity, e);
                sequence.timing = None;
                let retired = sequence.retire_overflow(0);
                sequence.clear();
                retired
            }
        };
        for index in retired {
            commands.trigger(PageRetiredEvent { entity, index });
        }
    }
}

/// Advance running sequences by the world delta.
///
/// Several pages can be captured in one frame when the delta spans more
/// than one interval; each gets the age it would have had if captured on
/// time. When the delta spans more than `page_count` intervals only the
/// newest `page_count` captures are materialised; the overrun ones consume
/// their indices without triggering any event.
pub fn flipbook_sequence_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut FlipBookSequence)>,
    mut commands: Commands,
) {
    let dt = world_time.delta as f64; // delta is already scaled by time_scale
    for (entity, mut sequence) in query.iter_mut() {
        let Some(timing) = sequence.timing else {
            continue;
        };
        for page in sequence.pages.iter_mut() {
            page.age += dt;
        }
        sequence.accumulator += dt;
        if sequence.accumulator < timing.sample_interval {
            continue;
        }

        let captures = (sequence.accumulator / timing.sample_interval).floor() as u64;
        let remainder = sequence.accumulator % timing.sample_interval;
        sequence.accumulator = remainder;

        // Captures older than the queue capacity would retire in this same frame.
        let kept = captures.min(timing.page_count as u64);
        let skipped = captures - kept;
        if skipped > 0 {
            debug!(
                "FlipBook {:?}: {} page(s) overrun in one frame",
                entity, skipped
            );
            sequence.skip(skipped);
        }

        for behind in (0..kept).rev() {
            let age = remainder + behind as f64 * timing.sample_interval;
            let index = sequence.capture(age);
            commands.trigger(PageCapturedEvent { entity, index });
            for retired in sequence.retire_overflow(timing.page_count as usize) {
                commands.trigger(PageRetiredEvent {
                    entity,
                    index: retired,
                });
            }
        }
    }
}
