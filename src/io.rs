//! The async boundary: fetching, decoding, and exporting audio.
//!
//! The buffer algebra in [`crate::engine`] is synchronous and pure;
//! everything that touches the filesystem or a decoder lives here.
//! Fetch-and-decode over multiple files fans out concurrently and
//! joins with first-failure-wins semantics: one bad input fails the
//! whole batch, no partial results.

use std::io::Cursor;
use std::path::Path;

use futures::future::try_join_all;
use hound::{SampleFormat, WavReader};
use log::debug;

use crate::codec;
use crate::engine::{Mixdown, SampleBuffer};
use crate::error::{MixdownError, Result};

/// Decode WAV bytes into a [`SampleBuffer`].
///
/// Handles 8/16/24-bit integer and 32-bit integer/float sample
/// formats, any channel count, de-interleaved into per-channel arrays.
/// The buffer keeps the file's own sample rate; rate enforcement
/// against a session happens in [`Mixdown::fetch_audio`].
pub fn decode_wav(bytes: &[u8]) -> Result<SampleBuffer> {
    let reader = WavReader::new(Cursor::new(bytes)).map_err(|e| MixdownError::Decode {
        reason: format!("not a readable WAV stream: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    let channels = spec.channels as usize;
    let sample_rate = spec.sample_rate;

    let samples = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    if samples.is_empty() {
        return Err(MixdownError::EmptyInput);
    }

    Ok(SampleBuffer::new(
        deinterleave(&samples, channels),
        sample_rate,
    ))
}

impl Mixdown {
    /// Fetch and decode a batch of audio files concurrently.
    ///
    /// All reads and decodes run fanned out; the join fails as a whole
    /// if any one of them fails. Decoded buffers must match the
    /// session sample rate or the batch fails with
    /// [`MixdownError::RateMismatch`] -- this crate does no
    /// resampling.
    ///
    /// Results come back in input order.
    pub async fn fetch_audio<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<SampleBuffer>> {
        try_join_all(paths.iter().map(|path| self.fetch_one(path.as_ref()))).await
    }

    async fn fetch_one(&self, path: &Path) -> Result<SampleBuffer> {
        debug!("fetching {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MixdownError::FileNotFound {
                    path: path.display().to_string(),
                    source: Some(e),
                }
            } else {
                MixdownError::Io(e)
            }
        })?;

        let buffer = decode_wav(&bytes)?;
        if buffer.sample_rate != self.sample_rate() {
            return Err(MixdownError::RateMismatch {
                expected: self.sample_rate(),
                found: buffer.sample_rate,
            });
        }
        Ok(buffer)
    }

    /// Encode a buffer as 16-bit PCM WAVE and write it to `path`.
    ///
    /// The header carries the session sample rate, which rate
    /// enforcement at fetch time has made equal to the buffer's.
    pub async fn export<P: AsRef<Path>>(&self, buffer: &SampleBuffer, path: P) -> Result<()> {
        let bytes = codec::encode_wave(buffer, self.sample_rate());
        debug!(
            "exporting {} bytes to {}",
            bytes.len(),
            path.as_ref().display()
        );
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

/// Read all samples from a WAV reader and normalize to f32.
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| MixdownError::Decode {
                reason: format!("failed to read float samples: {}", e),
                source: Some(Box::new(e)),
            }),
        SampleFormat::Int => match bits_per_sample {
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|v| v as f32 / 128.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| MixdownError::Decode {
                    reason: format!("failed to read 8-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| MixdownError::Decode {
                    reason: format!("failed to read 16-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            24 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 8388608.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| MixdownError::Decode {
                    reason: format!("failed to read 24-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2147483648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| MixdownError::Decode {
                    reason: format!("failed to read 32-bit int samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            _ => Err(MixdownError::UnsupportedFormat {
                format: format!("{}-bit integer audio", bits_per_sample),
            }),
        },
    }
}

/// De-interleave samples from [L,R,L,R,...] to [[L,L,...], [R,R,...]]
fn deinterleave(samples: &[f32], channels: usize) -> Vec<Vec<f32>> {
    let frames = samples.len() / channels;
    let mut result = vec![Vec::with_capacity(frames); channels];

    for (i, sample) in samples.iter().enumerate() {
        result[i % channels].push(*sample);
    }

    result
}
