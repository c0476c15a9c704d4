//! Core of the constellation poems watchface.
//!
//! A starfield with a randomly walked constellation, a generated constellation
//! name on a title card, then a handful of words revealed one per tick, all
//! paced by a five-phase state machine.
//!
//! - [`rng`]: shared pseudo-random source
//! - [`words`]: non-repeating shuffled word selection
//! - [`constellation`]: star field and random-walk constellation
//! - [`names`]: prefix + postfix constellation names
//! - [`phase`] / [`scheduler`]: the tick-driven state machine
//! - [`controller`]: scheduler plus tick timer, minute clock and teardown
//! - [`surface`]: boundary to whatever draws the pixels
//! - [`widgets`]: embedded-graphics rendering of that boundary
//! - [`config`] / [`vocabulary`]: compile-time configuration
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation free; every buffer is a fixed-size
//! `heapless` container. Tests run on the host with `std` enabled (via
//! `cfg_attr`):
//! ```bash
//! cargo test -p constellation-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod constellation;
pub mod controller;
pub mod error;
pub mod names;
pub mod phase;
pub mod rng;
pub mod scheduler;
pub mod styles;
pub mod surface;
pub mod timer;
pub mod vocabulary;
pub mod widgets;
pub mod words;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use controller::AnimationController;
pub use error::{AnimationError, ConfigError, SurfaceError};
pub use phase::Phase;
pub use rng::{RandomSource, SeededRng};
pub use scheduler::Scheduler;
pub use surface::Surface;
pub use widgets::DisplaySurface;
