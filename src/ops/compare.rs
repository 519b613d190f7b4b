//! Buffer equality

use crate::engine::AudioBuffer;

/// Check two buffers for exact equality
///
/// Buffers are equal when length, channel count and every sample match.
/// Samples compare with `==` (no tolerance, so NaN never matches). Sample
/// rate is not compared. The scan goes channel by channel and stops at the
/// first difference.
pub fn equal(a: &AudioBuffer, b: &AudioBuffer) -> bool {
    if a.len() != b.len() || a.channels() != b.channels() {
        return false;
    }
    a.iter_channels()
        .zip(b.iter_channels())
        .all(|(left, right)| left == right)
}

/// Check that every adjacent pair in `buffers` is [`equal`]
///
/// Fewer than two buffers are trivially equal.
pub fn equal_all(buffers: &[&AudioBuffer]) -> bool {
    buffers.windows(2).all(|pair| equal(pair[0], pair[1]))
}
