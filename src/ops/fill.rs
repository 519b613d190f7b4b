//! Per-sample transforms
//!
//! [`fill_with`] and [`map`] are the primitives here: both walk channels in
//! ascending order and, within a channel, samples in ascending index order,
//! handing each producer call `(value, channel, index, channel_data)`.
//! Everything else in this module is a specialization of one of them.

use rand::Rng;

use crate::engine::AudioBuffer;

/// Value written by [`fill`]: a constant, or a per-sample producer
pub enum Fill<'a> {
    /// Write the same value to every sample
    Constant(f32),
    /// Write `producer(value, channel, index, channel_data)` to every sample
    With(&'a mut dyn FnMut(f32, usize, usize, &[f32]) -> f32),
}

/// Fill a buffer in place with a constant or a producer
///
/// # Example
/// ```
/// use audio_buffer_utils::{ops, AudioBuffer, Fill};
///
/// let mut buffer = AudioBuffer::new(2, 4, 44100);
/// ops::fill(&mut buffer, Fill::Constant(0.5));
/// ops::fill(&mut buffer, Fill::With(&mut |v, channel, _, _| v * channel as f32));
/// assert_eq!(buffer.channel(0), &[0.0; 4]);
/// assert_eq!(buffer.channel(1), &[0.5; 4]);
/// ```
pub fn fill<'b>(buffer: &'b mut AudioBuffer, value: Fill<'_>) -> &'b mut AudioBuffer {
    match value {
        Fill::Constant(constant) => fill_constant(buffer, constant),
        Fill::With(producer) => fill_with(buffer, producer),
    }
}

/// Set every sample of every channel to `value`
pub fn fill_constant(buffer: &mut AudioBuffer, value: f32) -> &mut AudioBuffer {
    for data in buffer.iter_channels_mut() {
        data.fill(value);
    }
    buffer
}

/// Replace every sample with the producer's output
///
/// The last argument is the live channel being rewritten, so indices below
/// the current one already hold produced values.
pub fn fill_with<F>(buffer: &mut AudioBuffer, mut producer: F) -> &mut AudioBuffer
where
    F: FnMut(f32, usize, usize, &[f32]) -> f32,
{
    for (channel, data) in buffer.iter_channels_mut().enumerate() {
        for index in 0..data.len() {
            let value = producer(data[index], channel, index, &*data);
            data[index] = value;
        }
    }
    buffer
}

/// Build a new buffer of identical shape from the producer's output
///
/// The source buffer is left untouched. The last producer argument is the
/// new channel under construction: produced values below `index`, zeros
/// from `index` on.
pub fn map<F>(buffer: &AudioBuffer, mut producer: F) -> AudioBuffer
where
    F: FnMut(f32, usize, usize, &[f32]) -> f32,
{
    let channels = buffer
        .iter_channels()
        .enumerate()
        .map(|(channel, source)| {
            let mut data = vec![0.0_f32; source.len()];
            for (index, &value) in source.iter().enumerate() {
                let mapped = producer(value, channel, index, &data);
                data[index] = mapped;
            }
            data
        })
        .collect();

    AudioBuffer::from_parts(channels, buffer.len(), buffer.sample_rate())
}

/// Negate every sample. Nothing is clamped.
pub fn invert(buffer: &mut AudioBuffer) -> &mut AudioBuffer {
    fill_with(buffer, |value, _, _, _| -value)
}

/// Silence every sample
pub fn zero(buffer: &mut AudioBuffer) -> &mut AudioBuffer {
    fill_constant(buffer, 0.0)
}

/// Overwrite every sample with uniform white noise in `[-1, 1)`
pub fn noise(buffer: &mut AudioBuffer) -> &mut AudioBuffer {
    noise_with_rng(buffer, &mut rand::thread_rng())
}

/// Like [`noise`], drawing from the given RNG
pub fn noise_with_rng<'b, R>(buffer: &'b mut AudioBuffer, rng: &mut R) -> &'b mut AudioBuffer
where
    R: Rng + ?Sized,
{
    fill_with(buffer, |_, _, _, _| rng.gen_range(-1.0..1.0))
}
