//! Error types used across the crate.

/// Result alias used throughout `spatial_index`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::Curve`] construction and queries.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `bits` was not even, or not in `[2, 64]`.
    #[error("invalid curve order: bits must be even and in [2, 64], got {bits}")]
    InvalidBits {
        /// The rejected `bits` value.
        bits: u32,
    },

    /// A coordinate, or an entire rectangle, extends outside the curve's
    /// valid input square.
    #[error(
        "coordinate ({x}, {y}) is outside the valid input range [{input_min}, {input_max}]"
    )]
    OutOfRange {
        /// The offending x coordinate.
        x: i64,
        /// The offending y coordinate.
        y: i64,
        /// Lower bound of the curve's valid input range.
        input_min: i64,
        /// Upper bound of the curve's valid input range.
        input_max: i64,
    },

    /// A rectangle had a negative width or height.
    #[error("degenerate rectangle: width={width}, height={height}")]
    Degenerate {
        /// The rectangle's width, as supplied by the caller.
        width: i64,
        /// The rectangle's height, as supplied by the caller.
        height: i64,
    },
}
