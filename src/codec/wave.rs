//! RIFF/WAVE serialization.
//!
//! Produces the fixed 44-byte PCM header followed by little-endian
//! 16-bit samples. This byte layout is the crate's one bit-exact
//! external contract. Note the ChunkSize field: historical output
//! wrote `32 + data_bytes` where the RIFF spec says `36 +`, and
//! existing consumers expect that exact header, so the under-count is
//! kept deliberately.

/// Length of the canonical PCM WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

const NUM_CHANNELS: u16 = 2;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = NUM_CHANNELS * BITS_PER_SAMPLE / 8;

/// Serialize interleaved 16-bit samples into a complete WAVE file.
pub fn write(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_bytes = samples.len() as u32 * 2;
    let mut out = Vec::with_capacity(HEADER_LEN + data_bytes as usize);

    // RIFF chunk descriptor
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(32 + data_bytes).to_le_bytes()); // historical under-count
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&NUM_CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * BLOCK_ALIGN as u32).to_le_bytes());
    out.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data sub-chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_bytes.to_le_bytes());
    for &sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }

    out
}
