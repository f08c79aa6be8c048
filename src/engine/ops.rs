//! Buffer algebra: slicing, additive mixing, concatenation.
//!
//! All operations hang off a [`Mixdown`] session, which owns the
//! output sample rate. Operations are pure: inputs are read through
//! shared references, every call allocates a fresh single-channel
//! output, and nothing is mutated in place. Addition is a plain f32
//! sum with no normalization -- mixing buffers near full scale can
//! leave samples outside [-1, 1], which the PCM encoder clamps later.

use crate::engine::buffer::{SampleBuffer, DEFAULT_SAMPLE_RATE};
use crate::engine::range::{resolve_end, resolve_start};

/// An audio manipulation session.
///
/// Carries the sample rate that every produced buffer (and the final
/// WAV header) uses. Input buffers are expected to share this rate;
/// the decode boundary in [`crate::io`] enforces that.
///
/// # Example
/// ```
/// use mixdown::engine::{Mixdown, SampleBuffer};
///
/// let session = Mixdown::new(44100);
/// let a = SampleBuffer::silent(1, 44100, 44100);
/// let b = SampleBuffer::silent(1, 22050, 44100);
/// let joined = session.concat(&[a, b], None);
/// assert_eq!(joined.len(), 66150);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mixdown {
    sample_rate: u32,
}

impl Default for Mixdown {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl Mixdown {
    /// Create a session producing buffers at the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// The session's output sample rate in Hz.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of output samples for a duration in seconds (truncating).
    #[inline]
    fn frames(&self, duration: f64) -> usize {
        (self.sample_rate as f64 * duration) as usize
    }

    /// Extract `[start, end)` from a buffer and fold it into a mono
    /// buffer of exactly `sample_rate * duration` samples.
    ///
    /// `start`/`end` are sample positions: `None` means the
    /// buffer's own bounds, negative values wrap from the end (see
    /// [`crate::engine::range`]). All of the source's channels are
    /// summed sample-for-sample into the single output channel.
    ///
    /// A resolved `start >= end` extracts nothing and yields a silent
    /// buffer of the requested duration. A `duration` longer than the
    /// extracted range leaves the remainder at zero.
    pub fn slice(
        &self,
        buffer: &SampleBuffer,
        start: Option<i64>,
        end: Option<i64>,
        duration: f64,
    ) -> SampleBuffer {
        let start = resolve_start(start, buffer.len());
        let end = resolve_end(end, buffer.len());

        let mut out = vec![0.0_f32; self.frames(duration)];
        if start < end {
            for channel in &buffer.channels {
                fold_into(&mut out, &channel[start..end]);
            }
        }
        SampleBuffer::new(vec![out], self.sample_rate)
    }

    /// Mix buffers into a mono buffer of exactly
    /// `sample_rate * duration` samples by adding each input's first
    /// channel at matching indices.
    ///
    /// Inputs longer than the output are truncated: out-of-bounds
    /// samples are dropped, never written past the allocation.
    pub fn merge_by_sum(&self, buffers: &[SampleBuffer], duration: f64) -> SampleBuffer {
        let mut out = vec![0.0_f32; self.frames(duration)];
        for buffer in buffers {
            fold_into(&mut out, buffer.first_channel());
        }
        SampleBuffer::new(vec![out], self.sample_rate)
    }

    /// Mix buffers as [`merge_by_sum`](Self::merge_by_sum), sizing the
    /// output to the longest input's duration when `duration` is
    /// `None`. An empty input list yields an empty buffer.
    pub fn merge_by_buffer(&self, buffers: &[SampleBuffer], duration: Option<f64>) -> SampleBuffer {
        let duration = duration.unwrap_or_else(|| max_duration(buffers));
        self.merge_by_sum(buffers, duration)
    }

    /// Lay buffers end-to-end into one mono buffer, first channels
    /// only, input order preserved, no gaps.
    ///
    /// When `duration` is given and shorter than the concatenation,
    /// the result is truncated via [`slice`](Self::slice); otherwise
    /// the full concatenation is returned.
    pub fn concat(&self, buffers: &[SampleBuffer], duration: Option<f64>) -> SampleBuffer {
        let total: usize = buffers.iter().map(|b| b.first_channel().len()).sum();

        let mut out = Vec::with_capacity(total);
        for buffer in buffers {
            out.extend_from_slice(buffer.first_channel());
        }
        let output = SampleBuffer::new(vec![out], self.sample_rate);

        match duration {
            Some(d) if d < output.duration_secs() => {
                let end = (d * self.sample_rate as f64) as i64;
                self.slice(&output, Some(0), Some(end), d)
            }
            _ => output,
        }
    }
}

/// Add `src` into `out` at matching indices, bounded by `out`'s length.
fn fold_into(out: &mut [f32], src: &[f32]) {
    let n = out.len().min(src.len());
    for (dst, s) in out[..n].iter_mut().zip(&src[..n]) {
        *dst += s;
    }
}

/// Longest duration among the inputs, in seconds. Empty input -> 0.
fn max_duration(buffers: &[SampleBuffer]) -> f64 {
    buffers
        .iter()
        .map(SampleBuffer::duration_secs)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RATE: u32 = 44100;

    fn constant_buffer(value: f32, num_samples: usize) -> SampleBuffer {
        SampleBuffer::new(vec![vec![value; num_samples]], RATE)
    }

    // ------------------------------------------------------------------------
    // slice
    // ------------------------------------------------------------------------

    #[test]
    fn test_slice_full_range_sums_channels() {
        let buffer = SampleBuffer::new(vec![vec![0.25; 1000], vec![0.5; 1000]], RATE);
        let session = Mixdown::new(RATE);

        let out = session.slice(&buffer, None, None, buffer.duration_secs());

        assert_eq!(out.num_channels(), 1);
        assert_eq!(out.len(), 1000);
        for &s in out.first_channel() {
            assert_relative_eq!(s, 0.75, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_slice_subrange() {
        let samples: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let buffer = SampleBuffer::new(vec![samples], RATE);
        let session = Mixdown::new(RATE);

        let duration = 20.0 / RATE as f64;
        let out = session.slice(&buffer, Some(10), Some(30), duration);

        assert_eq!(out.len(), 20);
        assert_eq!(out.first_channel()[0], 10.0);
        assert_eq!(out.first_channel()[19], 29.0);
    }

    #[test]
    fn test_slice_negative_positions_wrap() {
        let samples: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let buffer = SampleBuffer::new(vec![samples], RATE);
        let session = Mixdown::new(RATE);

        // -10 resolves to index 90; open end resolves to 100
        let duration = 10.0 / RATE as f64;
        let out = session.slice(&buffer, Some(-10), None, duration);

        assert_eq!(out.len(), 10);
        assert_eq!(out.first_channel()[0], 90.0);
        assert_eq!(out.first_channel()[9], 99.0);
    }

    #[test]
    fn test_slice_inverted_range_is_silent() {
        let buffer = constant_buffer(0.5, 100);
        let session = Mixdown::new(RATE);

        let duration = 50.0 / RATE as f64;
        let out = session.slice(&buffer, Some(80), Some(20), duration);

        assert_eq!(out.len(), 50);
        assert!(out.first_channel().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_slice_duration_longer_than_range_pads_with_silence() {
        let buffer = constant_buffer(1.0, 100);
        let session = Mixdown::new(RATE);

        let duration = 200.0 / RATE as f64;
        let out = session.slice(&buffer, Some(0), Some(100), duration);

        assert_eq!(out.len(), 200);
        assert!(out.first_channel()[..100].iter().all(|&s| s == 1.0));
        assert!(out.first_channel()[100..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_slice_does_not_mutate_input() {
        let buffer = constant_buffer(0.5, 100);
        let original = buffer.clone();
        let session = Mixdown::new(RATE);

        let _ = session.slice(&buffer, Some(10), Some(90), 0.001);
        assert_eq!(buffer, original);
    }

    // ------------------------------------------------------------------------
    // merge
    // ------------------------------------------------------------------------

    #[test]
    fn test_merge_by_sum_silence() {
        let session = Mixdown::new(RATE);
        let a = SampleBuffer::silent(1, RATE as usize, RATE);
        let b = SampleBuffer::silent(1, RATE as usize, RATE);

        let out = session.merge_by_sum(&[a, b], 1.0);

        assert_eq!(out.len(), RATE as usize);
        assert!(out.first_channel().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_merge_by_sum_adds_samples() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.5, RATE as usize);
        let b = constant_buffer(0.5, RATE as usize);

        let out = session.merge_by_sum(&[a, b], 1.0);

        assert_eq!(out.len(), RATE as usize);
        for &s in out.first_channel() {
            assert_relative_eq!(s, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_merge_by_sum_drops_out_of_bounds_samples() {
        let session = Mixdown::new(RATE);
        // Input twice as long as the requested output
        let long = constant_buffer(0.25, 200);

        let duration = 100.0 / RATE as f64;
        let out = session.merge_by_sum(&[long], duration);

        assert_eq!(out.len(), 100);
        assert!(out.first_channel().iter().all(|&s| s == 0.25));
    }

    #[test]
    fn test_merge_by_buffer_defaults_to_longest_input() {
        let session = Mixdown::new(RATE);
        let short = constant_buffer(0.1, RATE as usize / 2);
        let long = constant_buffer(0.2, RATE as usize);

        let out = session.merge_by_buffer(&[short, long], None);

        assert_eq!(out.len(), RATE as usize);
        assert_relative_eq!(out.first_channel()[0], 0.3, epsilon = 1e-6);
        // Past the short input only the long one contributes
        assert_relative_eq!(
            out.first_channel()[RATE as usize - 1],
            0.2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_merge_by_buffer_explicit_duration() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.5, RATE as usize);

        let out = session.merge_by_buffer(&[a], Some(0.5));
        assert_eq!(out.len(), RATE as usize / 2);
    }

    #[test]
    fn test_merge_by_buffer_empty_input() {
        let session = Mixdown::new(RATE);
        let out = session.merge_by_buffer(&[], None);
        assert!(out.is_empty());
        assert_eq!(out.num_channels(), 1);
    }

    // ------------------------------------------------------------------------
    // concat
    // ------------------------------------------------------------------------

    #[test]
    fn test_concat_lengths_add() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.1, 300);
        let b = constant_buffer(0.2, 500);

        let out = session.concat(&[a, b], None);

        assert_eq!(out.len(), 800);
        assert_eq!(out.num_channels(), 1);
    }

    #[test]
    fn test_concat_preserves_order() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.1, 10);
        let b = constant_buffer(0.2, 10);
        let c = constant_buffer(0.3, 10);

        let out = session.concat(&[a, b, c], None);

        assert_eq!(out.first_channel()[5], 0.1);
        assert_eq!(out.first_channel()[15], 0.2);
        assert_eq!(out.first_channel()[25], 0.3);
    }

    #[test]
    fn test_concat_truncates_to_duration() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.5, RATE as usize);
        let b = constant_buffer(0.25, RATE as usize);

        let out = session.concat(&[a, b], Some(1.5));

        assert_eq!(out.len(), (RATE as f64 * 1.5) as usize);
        assert_eq!(out.first_channel()[0], 0.5);
        // Past the one-second mark we are inside the second buffer
        assert_eq!(out.first_channel()[RATE as usize + 100], 0.25);
    }

    #[test]
    fn test_concat_duration_longer_than_output_is_noop() {
        let session = Mixdown::new(RATE);
        let a = constant_buffer(0.5, 100);

        let out = session.concat(&[a], Some(10.0));
        assert_eq!(out.len(), 100);
    }

    #[test]
    fn test_concat_uses_first_channel_only() {
        let session = Mixdown::new(RATE);
        let stereo = SampleBuffer::new(vec![vec![0.1; 50], vec![0.9; 50]], RATE);

        let out = session.concat(&[stereo], None);

        assert_eq!(out.len(), 50);
        assert!(out.first_channel().iter().all(|&s| s == 0.1));
    }

    // ------------------------------------------------------------------------
    // helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_fold_into_bounds() {
        let mut out = vec![0.0; 3];
        fold_into(&mut out, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(out, vec![1.0, 2.0, 3.0]);

        let mut out = vec![1.0; 4];
        fold_into(&mut out, &[0.5, 0.5]);
        assert_eq!(out, vec![1.5, 1.5, 1.0, 1.0]);
    }

    #[test]
    fn test_max_duration() {
        let a = constant_buffer(0.0, RATE as usize);
        let b = constant_buffer(0.0, RATE as usize / 4);
        assert_relative_eq!(max_duration(&[a, b]), 1.0, epsilon = 1e-9);
        assert_eq!(max_duration(&[]), 0.0);
    }
}
