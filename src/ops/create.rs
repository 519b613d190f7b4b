//! Buffer construction helpers

use crate::engine::AudioBuffer;

/// Create a new buffer with the same channel count, length and sample rate
///
/// Callers must not rely on the contents; this implementation zeroes them.
pub fn compatible(buffer: &AudioBuffer) -> AudioBuffer {
    AudioBuffer::new(buffer.channels(), buffer.len(), buffer.sample_rate())
}

/// Create an independent deep copy of a buffer
pub fn clone(buffer: &AudioBuffer) -> AudioBuffer {
    buffer.clone()
}
