use core::ops::Range;

/// Clamp-to-edge index mapping.
///
/// Indices below zero map to `0`, indices at or past `len` map to `len - 1`.
/// Returns `None` for an empty range.
pub fn clamp_index(i: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i < 0 {
        Some(0)
    } else {
        Some((i as usize).min(len - 1))
    }
}

/// Clips the half-open window `[start, end)` to `[0, len)`.
///
/// The result may be empty when the window lies entirely outside.
pub fn clamp_window(start: isize, end: isize, len: usize) -> Range<usize> {
    let lo = start.max(0) as usize;
    let hi = if end <= 0 { 0 } else { (end as usize).min(len) };
    lo.min(hi)..hi
}
