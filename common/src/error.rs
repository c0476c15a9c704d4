//! Error types for the animation core.
//!
//! The generators themselves never fail. Errors come from two places: the
//! presentation surface running out of resources, and configuration that
//! does not fit the buffers it is written into.

use thiserror::Error;

/// Failure reported by a presentation surface.
///
/// Treated as fatal for the current phase: the scheduler propagates it
/// without attempting to undo partial work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("presentation surface out of resources")]
    OutOfResources,

    #[error("display rejected a draw call")]
    Draw,
}

/// Configuration that cannot be honoured at runtime.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("viewport {width}x{height} is too small to place stars and words")]
    ViewportTooSmall { width: u32, height: u32 },

    #[error("generated name needs {len} bytes but capacity is {capacity}")]
    NameTooLong { len: usize, capacity: usize },

    #[error("vocabulary has {words} words but {slots} word slots must be filled")]
    VocabularyTooSmall { words: usize, slots: usize },

    #[error("{0} list is empty")]
    EmptyList(&'static str),
}

/// Error returned by scheduler and controller operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
