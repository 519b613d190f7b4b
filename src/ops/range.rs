//! Allocating range transforms
//!
//! Each function here builds a new buffer out of sample ranges of its
//! inputs. Inputs are never modified.

use std::ops::Range;

use log::{debug, warn};

use crate::engine::AudioBuffer;
use crate::error::{BufferError, Result};
use crate::ops::create::clone;

/// Resolve a slice bound: negative counts back from the end, then clamp to `[0, length]`
fn resolve_bound(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}

/// Copy `range` of every channel into a new buffer
fn copy_range(buffer: &AudioBuffer, range: Range<usize>) -> AudioBuffer {
    let length = range.len();
    let channels = buffer
        .iter_channels()
        .map(|data| data[range.clone()].to_vec())
        .collect();
    AudioBuffer::from_parts(channels, length, buffer.sample_rate())
}

/// Copy samples `[start, end)` of every channel into a new buffer
///
/// Bounds follow standard slice semantics: a negative bound counts back from
/// the end, `None` for `end` means the end of the buffer, and out-of-range
/// bounds are clamped. If `end` falls at or before `start` the result is
/// empty. Channel count and sample rate are kept.
///
/// # Example
/// ```
/// use audio_buffer_utils::{ops, AudioBuffer};
///
/// let buffer = AudioBuffer::from_channels(vec![vec![1.0, 2.0, 3.0, 4.0]], 44100).unwrap();
/// assert_eq!(ops::slice(&buffer, 1, Some(3)).channel(0), &[2.0, 3.0]);
/// assert_eq!(ops::slice(&buffer, -2, None).channel(0), &[3.0, 4.0]);
/// ```
pub fn slice(buffer: &AudioBuffer, start: isize, end: Option<isize>) -> AudioBuffer {
    let length = buffer.len();
    let start = resolve_bound(start, length);
    let end = end.map_or(length, |end| resolve_bound(end, length)).max(start);
    copy_range(buffer, start..end)
}

/// Join two buffers end to end
///
/// The result has as many channels as the wider input, the summed length,
/// and the higher sample rate. No resampling happens. Where an input lacks
/// a channel, that channel is silent over the input's span.
pub fn concat(first: &AudioBuffer, second: &AudioBuffer) -> AudioBuffer {
    let channels = first.channels().max(second.channels());
    let length = first.len() + second.len();
    let sample_rate = first.sample_rate().max(second.sample_rate());

    if first.sample_rate() != second.sample_rate() {
        warn!(
            "Concatenating buffers at {} Hz and {} Hz without resampling; result uses {} Hz",
            first.sample_rate(),
            second.sample_rate(),
            sample_rate
        );
    }
    if first.channels() != second.channels() {
        debug!(
            "Concatenating {}-channel and {}-channel buffers; missing channels are silent",
            first.channels(),
            second.channels()
        );
    }

    let data = (0..channels)
        .map(|ch| {
            let mut joined = vec![0.0_f32; length];
            if let Some(head) = first.get_channel(ch) {
                joined[..first.len()].copy_from_slice(head);
            }
            if let Some(tail) = second.get_channel(ch) {
                joined[first.len()..].copy_from_slice(tail);
            }
            joined
        })
        .collect();

    AudioBuffer::from_parts(data, length, sample_rate)
}

/// Join any number of buffers end to end, folding [`concat`] left to right
///
/// A single buffer yields a copy of it.
///
/// # Returns
/// `BufferError::NoBuffers` if `buffers` is empty
pub fn concat_all(buffers: &[&AudioBuffer]) -> Result<AudioBuffer> {
    let (first, rest) = buffers.split_first().ok_or(BufferError::NoBuffers)?;
    Ok(rest
        .iter()
        .fold(clone(first), |joined, next| concat(&joined, next)))
}

/// Truncate or zero-pad every channel to `length` samples
pub fn resize(buffer: &AudioBuffer, length: usize) -> AudioBuffer {
    if length < buffer.len() {
        debug!("Truncating buffer from {} to {} samples", buffer.len(), length);
        return copy_range(buffer, 0..length);
    }

    debug!("Padding buffer from {} to {} samples", buffer.len(), length);
    let padding = AudioBuffer::new(buffer.channels(), length - buffer.len(), buffer.sample_rate());
    concat(buffer, &padding)
}
