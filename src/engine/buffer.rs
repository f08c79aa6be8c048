//! Sample buffer type shared by the whole pipeline.
//!
//! Audio is stored as non-interleaved 32-bit float samples, one
//! `Vec<f32>` per channel. Samples are conceptually in [-1.0, 1.0];
//! values outside that range are legal in memory (the algebra does no
//! normalization) and are clamped only at encode time.

/// Default session sample rate (CD rate, matching the original tool)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// A decoded audio buffer.
///
/// Every channel holds the same number of samples. Engine operations
/// take buffers by reference and allocate fresh outputs; a
/// `SampleBuffer` is never mutated once handed to an operation.
///
/// # Example
/// ```
/// use mixdown::engine::{SampleBuffer, DEFAULT_SAMPLE_RATE};
///
/// let buffer = SampleBuffer::silent(1, DEFAULT_SAMPLE_RATE as usize, DEFAULT_SAMPLE_RATE);
/// assert_eq!(buffer.num_channels(), 1);
/// assert_eq!(buffer.len(), 44100);
/// assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from existing channel data.
    ///
    /// Callers are responsible for the equal-channel-length invariant;
    /// `len()` reports the first channel's length.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        debug_assert!(
            channels.windows(2).all(|w| w[0].len() == w[1].len()),
            "channel lengths differ"
        );
        Self {
            channels,
            sample_rate,
        }
    }

    /// Create a zero-filled (silent) buffer.
    pub fn silent(num_channels: usize, num_samples: usize, sample_rate: u32) -> Self {
        Self {
            channels: vec![vec![0.0_f32; num_samples]; num_channels],
            sample_rate,
        }
    }

    /// Get the number of channels
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty (no samples)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// First channel's samples, or an empty slice for a channel-less
    /// buffer. Merge and concat operate on this channel only.
    #[inline]
    pub fn first_channel(&self) -> &[f32] {
        self.channels.first().map(Vec::as_slice).unwrap_or(&[])
    }
}
