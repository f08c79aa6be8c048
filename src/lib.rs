//! mixdown - audio buffer splicing, mixing, concatenation and WAV export.
//!
//! The core is a small buffer algebra over decoded float sample
//! buffers, plus a bit-exact 16-bit PCM RIFF/WAVE serializer:
//!
//! - [`engine`]: the [`engine::SampleBuffer`] data model and the
//!   [`engine::Mixdown`] session with `slice`, `merge_by_sum`,
//!   `merge_by_buffer` and `concat`. Pure, synchronous, allocation-in /
//!   allocation-out.
//! - [`codec`]: mono-to-dual-channel interleaving, clamped float to
//!   int16 encoding, and the 44-byte WAVE header.
//! - [`io`]: the async edge -- concurrent fetch + decode of WAV inputs
//!   (first failure fails the batch) and file export.
//!
//! # Example
//! ```no_run
//! use mixdown::engine::Mixdown;
//!
//! # async fn run() -> mixdown::Result<()> {
//! let session = Mixdown::new(44100);
//! let buffers = session.fetch_audio(&["a.wav", "b.wav"]).await?;
//! let mixed = session.merge_by_buffer(&buffers, None);
//! session.export(&mixed, "out.wav").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codec;
pub mod engine;
pub mod error;
pub mod io;

pub use engine::{Mixdown, SampleBuffer};
pub use error::{MixdownError, Result};
