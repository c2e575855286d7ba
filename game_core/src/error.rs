//! Error types for the simulation core

use thiserror::Error;

/// Rejected game configuration
///
/// The tick simulation itself never fails; only building a round from a bad
/// `Config` does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("ground height {ground_height} does not fit in arena height {arena_height}")]
    GroundOutsideArena {
        ground_height: f32,
        arena_height: f32,
    },

    #[error("{what} of size {size} does not fit in arena width {arena_width}")]
    TooWide {
        what: &'static str,
        size: f32,
        arena_width: f32,
    },

    #[error("respawn margin {margin} leaves no room in arena width {arena_width}")]
    EmptyRespawnBand { margin: f32, arena_width: f32 },

    #[error("enemy direction must be -1 or 1, got {0}")]
    BadDirection(f32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
