//! Buffer Operations
//!
//! Stateless operations over [`AudioBuffer`](crate::AudioBuffer):
//! - In place (take and return `&mut AudioBuffer`): fill, invert, zero,
//!   noise, reverse, rotate, shift
//! - Allocating (return a new buffer): map, clone, compatible, slice,
//!   concat, resize
//! - Comparison: equal

pub mod compare;
pub mod create;
pub mod fill;
pub mod range;
pub mod structure;

pub use compare::{equal, equal_all};
pub use create::{clone, compatible};
pub use fill::{fill, fill_constant, fill_with, invert, map, noise, noise_with_rng, zero, Fill};
pub use range::{concat, concat_all, resize, slice};
pub use structure::{reverse, rotate, shift, shift_with};
