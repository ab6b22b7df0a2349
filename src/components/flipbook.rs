//! Flip-book components.
//!
//! - [`FlipBook`] – user-editable sequence configuration plus the settings
//!   forwarded to the generative image backend
//! - [`FlipBookSequence`] – runtime page queue driven by
//!   [`crate::systems::flipbook`]
//!
//! The derived timing values are never stored on [`FlipBook`]; they are
//! computed on read through [`crate::pagetiming::compute_timing`]. The
//! sequence keeps a cached copy that is refreshed whenever the configuration
//! changes.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::TimingError;
use crate::pagetiming::{PageTiming, compute_timing};

pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.05;
pub const DEFAULT_SEQUENCE_DURATION: f64 = 1.2;
pub const DEFAULT_EASE_OUT_POWER: f64 = 4.0;
pub const DEFAULT_PROMPT: &str = "painting";
pub const DEFAULT_STRENGTH: f32 = 0.5;
pub const DEFAULT_GUIDANCE: f32 = 1.25;
pub const DEFAULT_RESOURCE_DIR: &str = "StableDiffusion";

/// Flip-book configuration attached to a camera-like entity.
///
/// `prompt`, `strength`, `guidance` and `resource_dir` are opaque to this
/// crate and only passed through to whatever renders the pages.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipBook {
    /// Seconds between two captured pages.
    pub sample_interval: f64,
    /// Requested length of the whole sequence in seconds.
    pub sequence_duration: f64,
    /// Ease-out exponent for the last page.
    pub ease_out_power: f64,
    /// Text prompt for the image backend.
    pub prompt: String,
    /// Denoising strength for the image backend.
    pub strength: f32,
    /// Guidance scale for the image backend.
    pub guidance: f32,
    /// Directory holding the image backend's model resources.
    pub resource_dir: String,
}

impl Default for FlipBook {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            sequence_duration: DEFAULT_SEQUENCE_DURATION,
            ease_out_power: DEFAULT_EASE_OUT_POWER,
            prompt: DEFAULT_PROMPT.to_string(),
            strength: DEFAULT_STRENGTH,
            guidance: DEFAULT_GUIDANCE,
            resource_dir: DEFAULT_RESOURCE_DIR.to_string(),
        }
    }
}

impl FlipBook {
    pub fn new(sample_interval: f64, sequence_duration: f64, ease_out_power: f64) -> Self {
        Self {
            sample_interval,
            sequence_duration,
            ease_out_power,
            ..Self::default()
        }
    }

    /// Derived timing of this configuration.
    pub fn timing(&self) -> Result<PageTiming, TimingError> {
        compute_timing(
            self.sample_interval,
            self.sequence_duration,
            self.ease_out_power,
        )
    }

    /// Number of pages kept in the sequence queue.
    pub fn queue_length(&self) -> Result<u32, TimingError> {
        self.timing().map(|t| t.page_count)
    }

    /// Quantized sequence duration.
    pub fn actual_duration(&self) -> Result<f64, TimingError> {
        self.timing().map(|t| t.actual_duration)
    }

    /// Display duration of the final page.
    pub fn last_page_duration(&self) -> Result<f64, TimingError> {
        self.timing().map(|t| t.last_page_duration)
    }
}

/// A captured page living in a [`FlipBookSequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// Capture order within the sequence, starting at 0.
    pub index: u64,
    /// Seconds since the page was captured.
    pub age: f64,
}

/// Runtime state of a flip-book sequence.
///
/// `timing` is `None` until [`flipbook_timing_system`] has validated the
/// entity's [`FlipBook`], and again whenever the configuration becomes
/// invalid. A sequence without timing does not advance.
///
/// [`flipbook_timing_system`]: crate::systems::flipbook::flipbook_timing_system
#[derive(Component, Debug, Clone, Default)]
pub struct FlipBookSequence {
    /// Cached timing of the owning [`FlipBook`].
    pub timing: Option<PageTiming>,
    /// Time accumulated towards the next capture.
    pub accumulator: f64,
    /// Live pages, oldest first.
    pub pages: VecDeque<Page>,
    /// Index the next captured page will receive.
    pub next_index: u64,
}

impl FlipBookSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sequence has a valid timing and advances with world time.
    pub fn is_running(&self) -> bool {
        self.timing.is_some()
    }

    /// Appends a page captured `age` seconds ago and returns its index.
    pub fn capture(&mut self, age: f64) -> u64 {
        let index = self.next_index;
        self.next_index += 1;
        self.pages.push_back(Page { index, age });
        index
    }

    /// Consumes `count` indices without queuing pages.
    pub fn skip(&mut self, count: u64) {
        self.next_index = self.next_index.saturating_add(count);
    }

    /// Removes pages beyond `capacity`, oldest first, returning their indices.
    pub fn retire_overflow(&mut self, capacity: usize) -> Vec<u64> {
        let mut retired = Vec::new();
        while self.pages.len() > capacity {
            if let Some(page) = self.pages.pop_front() {
                retired.push(page.index);
            }
        }
        retired
    }

    /// Drops all pages and restarts capture timing. Page indices keep counting.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.accumulator = 0.0;
    }
}
