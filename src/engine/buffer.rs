//! Audio Buffer
//!
//! The buffer type every operation in this crate consumes and produces.
//! Audio is stored non-interleaved: one `Vec<f32>` per channel, all channels
//! sharing one length and one sample rate.

use crate::error::{BufferError, Result};

// ============================================================================
// Audio Buffer
// ============================================================================

/// Multi-channel, non-interleaved 32-bit float audio buffer
///
/// Channels are exposed as slices, so callers can rewrite samples but can
/// never change a channel's length. Every channel always holds exactly
/// [`len`](Self::len) samples.
///
/// Samples are nominally in `[-1.0, 1.0]` but are never clamped.
///
/// # Example
/// ```
/// use audio_buffer_utils::AudioBuffer;
///
/// // 1 second of stereo silence at 44.1kHz
/// let buffer = AudioBuffer::new(2, 44100, 44100);
/// assert_eq!(buffer.channels(), 2);
/// assert_eq!(buffer.len(), 44100);
/// assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    samples: Vec<Vec<f32>>,
    /// Samples per channel, kept separately so a channel-less buffer keeps its length
    length: usize,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new buffer of the given shape
    ///
    /// All samples are initialized to 0.0 (silence).
    ///
    /// # Arguments
    /// * `channels` - Number of channels
    /// * `length` - Number of samples per channel
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(channels: usize, length: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0_f32; length]; channels],
            length,
            sample_rate,
        }
    }

    /// Create a buffer from per-channel sample data
    ///
    /// Channel `i` of the result holds exactly `channels[i]`.
    ///
    /// # Returns
    /// Error if there are no channels, the channels differ in length, or the
    /// sample rate is zero
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(BufferError::InvalidSampleRate { sample_rate });
        }

        let length = channels.first().map(Vec::len).ok_or(BufferError::NoChannels)?;

        if let Some((channel, data)) = channels
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() != length)
        {
            return Err(BufferError::ShapeMismatch {
                channel,
                expected: length,
                found: data.len(),
            });
        }

        Ok(Self::from_parts(channels, length, sample_rate))
    }

    /// Assemble a buffer from channels already known to share `length`
    pub(crate) fn from_parts(samples: Vec<Vec<f32>>, length: usize, sample_rate: u32) -> Self {
        debug_assert!(samples.iter().all(|ch| ch.len() == length));
        Self {
            samples,
            length,
            sample_rate,
        }
    }

    /// Create an audio buffer from interleaved sample data
    ///
    /// # Arguments
    /// * `interleaved` - Interleaved sample data (L, R, L, R, ... for stereo)
    /// * `channels` - Number of interleaved channels
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Returns
    /// Result containing the AudioBuffer, or error if data length doesn't
    /// divide into the channel count
    pub fn from_interleaved(interleaved: &[f32], channels: usize, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(BufferError::NoChannels);
        }
        if sample_rate == 0 {
            return Err(BufferError::InvalidSampleRate { sample_rate });
        }
        if interleaved.len() % channels != 0 {
            return Err(BufferError::InterleavedMismatch {
                samples: interleaved.len(),
                channels,
            });
        }

        let length = interleaved.len() / channels;
        let mut samples = vec![Vec::with_capacity(length); channels];

        for frame in interleaved.chunks_exact(channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Ok(Self::from_parts(samples, length, sample_rate))
    }

    /// Convert the buffer to interleaved format
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut interleaved = Vec::with_capacity(self.channels() * self.length);

        for sample_idx in 0..self.length {
            for channel in &self.samples {
                interleaved.push(channel[sample_idx]);
            }
        }

        interleaved
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the buffer is empty (no samples per channel)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Get the sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.length as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Get mutable access to a channel's samples
    ///
    /// Writes are visible to every later read of this buffer.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.samples[index]
    }

    /// Get a channel's samples, or None if the index is out of bounds
    #[inline]
    pub fn get_channel(&self, index: usize) -> Option<&[f32]> {
        self.samples.get(index).map(Vec::as_slice)
    }

    /// Iterate over channels in ascending order
    pub fn iter_channels(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.samples.iter().map(Vec::as_slice)
    }

    /// Iterate mutably over channels in ascending order
    pub fn iter_channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> + '_ {
        self.samples.iter_mut().map(Vec::as_mut_slice)
    }

    /// Get a sample at the specified channel and index
    ///
    /// # Returns
    /// The sample value, or None if indices are out of bounds
    #[inline]
    pub fn get_sample(&self, channel: usize, index: usize) -> Option<f32> {
        self.samples
            .get(channel)
            .and_then(|ch| ch.get(index).copied())
    }

    /// Set a sample at the specified channel and index
    ///
    /// # Returns
    /// true if the sample was set, false if indices are out of bounds
    #[inline]
    pub fn set_sample(&mut self, channel: usize, index: usize, value: f32) -> bool {
        if let Some(sample) = self
            .samples
            .get_mut(channel)
            .and_then(|ch| ch.get_mut(index))
        {
            *sample = value;
            return true;
        }
        false
    }

    /// Check if all samples are finite (not NaN or Infinity)
    pub fn is_finite(&self) -> bool {
        self.samples
            .iter()
            .flat_map(|ch| ch.iter())
            .all(|s| s.is_finite())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Construction tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_buffer_new() {
        let buffer = AudioBuffer::new(3, 1000, 48000);
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.len(), 1000);
        assert_eq!(buffer.sample_rate(), 48000);
        assert!(buffer.iter_channels().all(|ch| ch.iter().all(|&s| s == 0.0)));
    }

    #[test]
    fn test_buffer_new_without_channels_keeps_length() {
        let buffer = AudioBuffer::new(0, 16, 44100);
        assert_eq!(buffer.channels(), 0);
        assert_eq!(buffer.len(), 16);
        assert!(buffer.to_interleaved().is_empty());
    }

    #[test]
    fn test_buffer_from_channels() {
        let buffer = AudioBuffer::from_channels(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 44100).unwrap();
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.channel(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_buffer_from_channels_shape_mismatch() {
        let result = AudioBuffer::from_channels(vec![vec![1.0, 2.0], vec![3.0]], 44100);
        assert!(matches!(
            result,
            Err(BufferError::ShapeMismatch {
                channel: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_buffer_from_channels_rejects_empty_and_zero_rate() {
        assert!(matches!(
            AudioBuffer::from_channels(vec![], 44100),
            Err(BufferError::NoChannels)
        ));
        assert!(matches!(
            AudioBuffer::from_channels(vec![vec![0.0]], 0),
            Err(BufferError::InvalidSampleRate { sample_rate: 0 })
        ));
    }

    #[test]
    fn test_buffer_clone_is_deep() {
        let original = AudioBuffer::from_channels(vec![vec![0.25; 4]], 44100).unwrap();
        let mut copy = original.clone();
        copy.channel_mut(0)[0] = -1.0;

        assert_eq!(original.channel(0)[0], 0.25);
        assert_eq!(copy.channel(0)[0], -1.0);
    }

    // ------------------------------------------------------------------------
    // Interleaving tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_buffer_from_interleaved_stereo() {
        let interleaved = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let buffer = AudioBuffer::from_interleaved(&interleaved, 2, 44100).unwrap();

        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.channel(0), &[0.1, 0.3, 0.5]);
        assert_eq!(buffer.channel(1), &[0.2, 0.4, 0.6]);
        assert_eq!(buffer.to_interleaved(), interleaved);
    }

    #[test]
    fn test_buffer_from_interleaved_invalid() {
        // 5 samples can't be evenly split into stereo
        let result = AudioBuffer::from_interleaved(&[0.1, 0.2, 0.3, 0.4, 0.5], 2, 44100);
        assert!(matches!(
            result,
            Err(BufferError::InterleavedMismatch {
                samples: 5,
                channels: 2
            })
        ));

        assert!(matches!(
            AudioBuffer::from_interleaved(&[0.1], 0, 44100),
            Err(BufferError::NoChannels)
        ));
    }

    #[test]
    fn test_buffer_from_interleaved_empty() {
        let buffer = AudioBuffer::from_interleaved(&[], 2, 44100).unwrap();
        assert_eq!(buffer.channels(), 2);
        assert!(buffer.is_empty());
    }

    // ------------------------------------------------------------------------
    // Access tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_buffer_get_set_sample() {
        let mut buffer = AudioBuffer::new(2, 100, 44100);

        assert!(buffer.set_sample(0, 50, 0.5));
        assert_eq!(buffer.get_sample(0, 50), Some(0.5));

        // Out of bounds
        assert_eq!(buffer.get_sample(2, 0), None);
        assert_eq!(buffer.get_sample(0, 100), None);
        assert!(!buffer.set_sample(2, 0, 0.5));
        assert!(!buffer.set_sample(0, 100, 0.5));
    }

    #[test]
    fn test_buffer_channel_writes_are_visible() {
        let mut buffer = AudioBuffer::new(2, 8, 44100);

        let right = buffer.channel_mut(1);
        right[0] = 0.5;
        right[7] = 0.75;

        assert_eq!(buffer.channel(1)[0], 0.5);
        assert_eq!(buffer.get_sample(1, 7), Some(0.75));
        assert_eq!(buffer.get_channel(0), Some(&[0.0_f32; 8][..]));
        assert_eq!(buffer.get_channel(2), None);
    }

    #[test]
    fn test_buffer_out_of_range_samples_are_kept() {
        let mut buffer = AudioBuffer::new(1, 2, 44100);
        buffer.set_sample(0, 0, 3.5);
        assert_eq!(buffer.get_sample(0, 0), Some(3.5));
        assert!(buffer.is_finite());

        buffer.set_sample(0, 1, f32::NAN);
        assert!(!buffer.is_finite());
    }
}
