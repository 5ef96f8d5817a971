//! A 2D point in curve input coordinates, and small byte-key helpers.

use std::fmt;

/// A point in a [`crate::Curve`]'s input coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
}

impl Point {
    /// Construct a point from raw coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    pub fn manhattan_distance(&self, other: &Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Append a point, offset to a non-negative range by `offset`, after a curve
/// key to disambiguate multiple points that share a curve position.
///
/// This mirrors the disambiguation scheme used by the original benchmark
/// harness this index was distilled from (`spatialKeyFromPoint` in
/// `benchmark/main.go`), but is not part of the core key format: the 8-byte
/// curve-index prefix returned by [`crate::Curve::encode_point`] is
/// unchanged, and callers who don't need disambiguation never have to see
/// this function.
///
/// `offset` must be large enough that `x + offset` and `y + offset` are both
/// non-negative for every point the caller will pass in; the curve's own
/// `input_max` (as returned by [`crate::Curve::valid_input_range`]) is always
/// a valid choice.
pub fn suffix_key(curve_key: &[u8; 8], point: Point, offset: i64) -> [u8; 24] {
    let mut out = [0u8; 24];
    out[..8].copy_from_slice(curve_key);
    out[8..16].copy_from_slice(&((point.x + offset) as u64).to_be_bytes());
    out[16..24].copy_from_slice(&((point.y + offset) as u64).to_be_bytes());
    out
}

/// Inverse of [`suffix_key`]: recover the point encoded after the curve key
/// prefix, undoing the `offset` applied at encode time.
pub fn split_suffixed_key(key: &[u8; 24], offset: i64) -> Point {
    let mut x_bytes = [0u8; 8];
    let mut y_bytes = [0u8; 8];
    x_bytes.copy_from_slice(&key[8..16]);
    y_bytes.copy_from_slice(&key[16..24]);
    let x = u64::from_be_bytes(x_bytes) as i64 - offset;
    let y = u64::from_be_bytes(y_bytes) as i64 - offset;
    Point::new(x, y)
}
