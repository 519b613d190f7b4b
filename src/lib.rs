//! Audio Buffer Utils - Stateless Multi-Channel Buffer Operations
//!
//! A small set of operations over [`AudioBuffer`], an in-memory block of
//! audio held as one `f32` sample array per channel, all channels sharing
//! length and sample rate.
//!
//! # Architecture
//!
//! Two primitives carry the per-sample work:
//! - [`ops::fill_with`]: rewrite every sample in place from a producer
//! - [`ops::map`]: build a new buffer from a producer
//!
//! Everything else derives from them or from direct index manipulation.
//! In-place operations take `&mut AudioBuffer` and hand it back so calls
//! chain; allocating operations leave their inputs untouched.
//!
//! ```
//! use audio_buffer_utils::{ops, AudioBuffer};
//!
//! let mut buffer = AudioBuffer::from_channels(vec![vec![0.1, 0.2, 0.3]], 44100).unwrap();
//! ops::rotate(ops::invert(&mut buffer), 1);
//! assert_eq!(buffer.channel(0), &[-0.3, -0.1, -0.2]);
//!
//! let longer = ops::resize(&buffer, 5);
//! assert_eq!(longer.channel(0), &[-0.3, -0.1, -0.2, 0.0, 0.0]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ops;

pub use config::{OpsConfig, ShiftFill};
pub use engine::AudioBuffer;
pub use error::{BufferError, Result};
pub use ops::Fill;
