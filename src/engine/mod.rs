//! Buffer algebra engine.
//!
//! The [`SampleBuffer`] data model plus the [`Mixdown`] session that
//! slices, mixes and concatenates buffers. Everything here is
//! synchronous and pure; the async fetch/decode/export boundary lives
//! in [`crate::io`].

pub mod buffer;
pub mod ops;
pub mod range;

pub use buffer::{SampleBuffer, DEFAULT_SAMPLE_RATE};
pub use ops::Mixdown;
