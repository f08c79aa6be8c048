//! PCM encoding: mono float buffers to interleaved 16-bit samples.

use crate::engine::SampleBuffer;

/// Duplicate a buffer's first channel into an interleaved dual-channel
/// stream (left = right = source sample).
///
/// Only the first channel is read, even when more exist; the pipeline
/// upstream has already folded everything into channel 0.
pub fn interleave(buffer: &SampleBuffer) -> Vec<f32> {
    let source = buffer.first_channel();
    let mut out = Vec::with_capacity(source.len() * 2);
    for &sample in source {
        out.push(sample);
        out.push(sample);
    }
    out
}

/// Convert float samples to signed 16-bit integers.
///
/// Each sample is clamped to [-1.0, 1.0] and scaled asymmetrically:
/// negative values by 32768 (0x8000), non-negative by 32767 (0x7fff),
/// truncating toward zero. The asymmetry keeps the full negative range
/// and must stay exactly as-is for bit-for-bit output compatibility.
pub fn encode(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| {
            let clamped = s.clamp(-1.0, 1.0);
            if clamped < 0.0 {
                (clamped * 32768.0) as i16
            } else {
                (clamped * 32767.0) as i16
            }
        })
        .collect()
}
