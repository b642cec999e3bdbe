//! Errors raised by the simulation core

use thiserror::Error;

/// Errors that can occur while building or seeding a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Width or height was zero, or `width * height` overflows
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Random fill threshold outside of 0..=100
    #[error("random fill threshold must be a percentage in 0..=100, got {0}")]
    InvalidThreshold(u8),
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
