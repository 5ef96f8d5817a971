//! A 2D Hilbert-curve spatial index.
//!
//! A [`Curve`] maps integer `(x, y)` points onto a single `u64` position on a
//! Hilbert space-filling curve, encoded as an 8-byte big-endian key. Storing
//! points under that key in any byte-ordered key/value store clusters
//! spatially nearby points into nearby keys, so a rectangular region query
//! can be served by scanning a handful of contiguous key ranges instead of a
//! full table scan.
//!
//! [`Curve::encode_point`]/[`Curve::decode_point`] implement that mapping.
//! [`Curve::rectangle_to_ranges`] implements the query planner: given a
//! rectangle and a cost parameter trading off extra seeks against scanning
//! extra (non-matching) keys, it returns the sorted, disjoint list of
//! [`ByteRange`]s to scan.
//!
//! The crate does no I/O and holds no mutable or global state: every
//! operation is a pure function of a [`Curve`]'s parameters and its
//! arguments, so callers are free to construct one `Curve` and share it
//! across threads.
//!
//! ```
//! use spatial_index::Curve;
//!
//! let curve = Curve::new(32)?;
//! let key = curve.encode_point(3, -1)?;
//! assert_eq!(curve.decode_point(&key), (3, -1));
//! # Ok::<(), spatial_index::Error>(())
//! ```

pub mod byte_range;
mod codec;
pub mod curve;
pub mod error;
mod planner;
pub mod point;

pub use crate::byte_range::ByteRange;
pub use crate::curve::Curve;
pub use crate::error::{Error, Result};
pub use crate::point::Point;
