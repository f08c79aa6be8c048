//! Output encoding: float buffers to 16-bit PCM WAVE bytes.

pub mod pcm;
pub mod wave;

use crate::engine::SampleBuffer;

/// Encode a buffer's first channel into a complete WAVE byte sequence
/// (interleave, int16 encode, header + data).
pub fn encode_wave(buffer: &SampleBuffer, sample_rate: u32) -> Vec<u8> {
    let interleaved = pcm::interleave(buffer);
    let encoded = pcm::encode(&interleaved);
    wave::write(&encoded, sample_rate)
}
