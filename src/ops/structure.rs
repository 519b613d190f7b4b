//! In-place structural transforms
//!
//! These move samples between indices within each channel. Length and
//! channel count never change.

use crate::config::ShiftFill;
use crate::engine::AudioBuffer;

/// Reverse the sample order of every channel
pub fn reverse(buffer: &mut AudioBuffer) -> &mut AudioBuffer {
    for data in buffer.iter_channels_mut() {
        data.reverse();
    }
    buffer
}

/// Circularly shift every channel by `offset` samples
///
/// Positive offsets move samples toward higher indices, negative toward
/// lower, wrapping around the channel end. The sample at index `i` lands at
/// `(i + offset) mod len`, with the modulo taken non-negative, so any offset
/// (including `|offset| > len`) is valid.
///
/// # Example
/// ```
/// use audio_buffer_utils::{ops, AudioBuffer};
///
/// let mut buffer = AudioBuffer::from_channels(vec![vec![1.0, 2.0, 3.0, 4.0]], 44100).unwrap();
/// ops::rotate(&mut buffer, 1);
/// assert_eq!(buffer.channel(0), &[4.0, 1.0, 2.0, 3.0]);
/// ```
pub fn rotate(buffer: &mut AudioBuffer, offset: isize) -> &mut AudioBuffer {
    let length = buffer.len();
    if length == 0 {
        return buffer;
    }

    let shift = offset.rem_euclid(length as isize) as usize;
    if shift == 0 {
        return buffer;
    }

    for data in buffer.iter_channels_mut() {
        // Read from a snapshot: destinations overwrite unread sources otherwise
        let source = data.to_vec();
        for (index, &sample) in source.iter().enumerate() {
            data[(index + shift) % length] = sample;
        }
    }
    buffer
}

/// Linearly shift every channel by `offset` samples, without wrapping
///
/// Same as [`shift_with`] using [`ShiftFill::Stale`]: a positive shift
/// leaves the leading `offset` samples as they were, while a negative shift
/// zero-fills the trailing `|offset|` samples.
pub fn shift(buffer: &mut AudioBuffer, offset: isize) -> &mut AudioBuffer {
    shift_with(buffer, offset, ShiftFill::Stale)
}

/// Linearly shift every channel by `offset` samples, without wrapping
///
/// * `offset > 0`: `data[i + offset] = data[i]`. Leading positions are left
///   stale or zeroed depending on `fill`. An offset of at least the channel
///   length moves nothing.
/// * `offset <= 0`: `data[i + offset] = data[i]`, reading zero past the end,
///   so trailing positions are always zeroed. An offset of at least the
///   channel length silences the channel.
pub fn shift_with(buffer: &mut AudioBuffer, offset: isize, fill: ShiftFill) -> &mut AudioBuffer {
    let length = buffer.len();
    let distance = offset.unsigned_abs();

    for data in buffer.iter_channels_mut() {
        if offset > 0 {
            if distance < length {
                data.copy_within(0..length - distance, distance);
            }
            if fill == ShiftFill::Zero {
                data[..distance.min(length)].fill(0.0);
            }
        } else if distance < length {
            data.copy_within(distance..length, 0);
            data[length - distance..].fill(0.0);
        } else {
            data.fill(0.0);
        }
    }
    buffer
}
