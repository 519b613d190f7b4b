//! Audio Engine Module
//!
//! Holds the buffer type the operations in [`crate::ops`] act on.

pub mod buffer;

pub use buffer::AudioBuffer;
