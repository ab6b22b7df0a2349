//! Flip-book page timing model.
//!
//! A flip-book samples a new page every `sample_interval` seconds and keeps
//! enough pages to cover `target_duration`. The requested duration is
//! quantized down to a whole number of pages, and the final page is held on
//! screen longer under an inverse power-law ease-out curve.
//!
//! ```text
//! page_count         = floor(target_duration / sample_interval)
//! actual_duration    = page_count * sample_interval
//! last_page_duration = actual_duration * (sample_interval / actual_duration) ^ (1 / ease_out_power)
//! ```
//!
//! All values are recomputed from the configuration on demand; nothing here
//! holds state.

use serde::Serialize;
use std::fmt;

use crate::error::TimingError;

/// Derived timing values of a flip-book sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageTiming {
    /// Nominal time between two consecutive pages, in seconds.
    pub sample_interval: f64,
    /// Number of pages in the sequence. Always at least 1.
    pub page_count: u32,
    /// Total sequence length after quantizing to `page_count` pages.
    ///
    /// May be shorter than the requested duration. Anything that plays the
    /// pages back must use this value.
    pub actual_duration: f64,
    /// Display duration of the final page under the ease-out curve.
    pub last_page_duration: f64,
}

impl PageTiming {
    /// Duration of a page that is not affected by the ease-out.
    pub fn uniform_page_duration(&self) -> f64 {
        self.sample_interval
    }
}

impl fmt::Display for PageTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages x {:.4}s = {:.4}s, last page {:.4}s",
            self.page_count, self.sample_interval, self.actual_duration, self.last_page_duration
        )
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), TimingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TimingError::invalid(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Computes the page timing for a flip-book sequence.
///
/// # Errors
///
/// Returns [`TimingError::InvalidConfiguration`] when any input is not a
/// positive finite number, or when `target_duration` is shorter than one
/// `sample_interval` (the sequence would have no pages).
///
/// # Example
///
/// ```
/// use dcamfx::pagetiming::compute_timing;
///
/// let timing = compute_timing(0.05, 1.2, 4.0).unwrap();
/// assert_eq!(timing.page_count, 24);
/// ```
pub fn compute_timing(
    sample_interval: f64,
    target_duration: f64,
    ease_out_power: f64,
) -> Result<PageTiming, TimingError> {
    require_positive("sample_interval", sample_interval)?;
    require_positive("target_duration", target_duration)?;
    require_positive("ease_out_power", ease_out_power)?;

    let pages = (target_duration / sample_interval).floor();
    if pages < 1.0 {
        return Err(TimingError::invalid(format!(
            "target_duration {target_duration} is shorter than one sample_interval {sample_interval}"
        )));
    }
    if pages > u32::MAX as f64 {
        return Err(TimingError::invalid(format!(
            "{pages} pages exceed the supported page count"
        )));
    }
    let page_count = pages as u32;

    let actual_duration = page_count as f64 * sample_interval;
    let exponent = ease_out_power.recip();

    // A single page or a linear curve leaves the last page at the uniform duration.
    let last_page_duration = if page_count == 1 || exponent == 1.0 {
        sample_interval
    } else {
        actual_duration * (sample_interval / actual_duration).powf(exponent)
    };

    Ok(PageTiming {
        sample_interval,
        page_count,
        actual_duration,
        last_page_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn reference_sequence() {
        let t = compute_timing(0.05, 1.2, 4.0).unwrap();
        assert_eq!(t.page_count, 24);
        assert!((t.actual_duration - 1.2).abs() < EPSILON);
        let expected = 1.2 * (0.05f64 / 1.2).powf(0.25);
        assert!((t.last_page_duration - expected).abs() < EPSILON);
        assert!((t.last_page_duration - 0.5422).abs() < 1e-3);
    }

    #[test]
    fn actual_duration_is_quantized() {
        let t = compute_timing(0.1, 1.05, 2.0).unwrap();
        assert_eq!(t.page_count, 10);
        assert_eq!(t.actual_duration, 10.0 * 0.1);
        assert!(t.actual_duration < 1.05);
    }

    #[test]
    fn linear_power_keeps_uniform_last_page() {
        let t = compute_timing(0.05, 1.2, 1.0).unwrap();
        assert_eq!(t.last_page_duration, 0.05);
        assert_eq!(t.uniform_page_duration(), 0.05);
    }

    #[test]
    fn single_page_boundary() {
        let t = compute_timing(0.05, 0.05, 4.0).unwrap();
        assert_eq!(t.page_count, 1);
        assert_eq!(t.actual_duration, 0.05);
        assert_eq!(t.last_page_duration, 0.05);
    }

    #[test]
    fn too_short_duration_is_rejected() {
        let err = compute_timing(0.05, 0.03, 4.0).unwrap_err();
        assert!(matches!(err, TimingError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("shorter than one sample_interval"));
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        assert!(compute_timing(0.0, 1.2, 4.0).is_err());
        assert!(compute_timing(-0.05, 1.2, 4.0).is_err());
        assert!(compute_timing(0.05, 0.0, 4.0).is_err());
        assert!(compute_timing(0.05, 1.2, 0.0).is_err());
        assert!(compute_timing(0.05, 1.2, -1.0).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(compute_timing(f64::NAN, 1.2, 4.0).is_err());
        assert!(compute_timing(0.05, f64::INFINITY, 4.0).is_err());
        assert!(compute_timing(0.05, 1.2, f64::NAN).is_err());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = compute_timing(0.033, 2.7, 3.3).unwrap();
        let b = compute_timing(0.033, 2.7, 3.3).unwrap();
        assert_eq!(a.page_count, b.page_count);
        assert_eq!(a.actual_duration.to_bits(), b.actual_duration.to_bits());
        assert_eq!(a.last_page_duration.to_bits(), b.last_page_duration.to_bits());
    }

    #[test]
    fn stronger_ease_out_holds_last_page_longer() {
        let mut previous = 0.0;
        for power in [1.0, 1.5, 2.0, 4.0, 8.0, 16.0] {
            let t = compute_timing(0.05, 1.2, power).unwrap();
            assert!(t.last_page_duration > previous);
            assert!(t.last_page_duration >= t.sample_interval);
            assert!(t.last_page_duration < t.actual_duration);
            previous = t.last_page_duration;
        }
    }

    #[test]
    fn display_summarizes_timing() {
        let t = compute_timing(0.05, 1.2, 1.0).unwrap();
        assert_eq!(
            t.to_string(),
            "24 pages x 0.0500s = 1.2000s, last page 0.0500s"
        );
    }
}
