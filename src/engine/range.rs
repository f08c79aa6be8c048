//! Slice-endpoint resolution.
//!
//! Maps optional, possibly-negative sample positions to absolute
//! indices in `[0, len]`. Negative positions wrap from the end via the
//! truncated remainder (`len + (p % len)`), so `-1` resolves to the
//! last index. This is not a true mathematical modulo when
//! `abs(p) > len`; callers must not rely on multi-wrap behavior.
//! Out-of-range non-negative positions clamp to `len` rather than
//! failing, so resolution is total.

/// Resolve an optional start position against a buffer length.
///
/// `None` resolves to 0 (the beginning of the buffer).
pub fn resolve_start(pos: Option<i64>, len: usize) -> usize {
    match pos {
        None => 0,
        Some(p) => resolve(p, len),
    }
}

/// Resolve an optional end position against a buffer length.
///
/// `None` resolves to `len` (the end of the buffer).
pub fn resolve_end(pos: Option<i64>, len: usize) -> usize {
    match pos {
        None => len,
        Some(p) => resolve(p, len),
    }
}

fn resolve(p: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = len as i64;
    if p < 0 {
        // Truncated remainder: yields a value in (-len, 0], so the sum
        // lands in (0, len]. Note -len resolves to len, not 0.
        (len_i + (p % len_i)) as usize
    } else {
        p.min(len_i) as usize
    }
}
