//! Curve parameters: the immutable grid a [`Curve`] is defined over.

use crate::error::{Error, Result};

/// Parameters of a 2D Hilbert curve over a `side x side` grid of integer
/// points, where `side = 2^(bits / 2)`.
///
/// A `Curve` is cheap to copy and carries no interior mutability; point
/// encoding/decoding and range planning are pure functions of its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    pub(crate) bits: u32,
    pub(crate) order: u32,
    pub(crate) side: u64,
    pub(crate) input_min: i64,
    pub(crate) input_max: i64,
    /// `length - 1`, i.e. the highest valid curve index. Stored instead of
    /// `length` itself because `length = 2^bits` does not fit in a `u64`
    /// when `bits == 64`, while `length - 1` always does (see DESIGN.md,
    /// open question OQ-1).
    pub(crate) max_index: u64,
}

impl Curve {
    /// Construct a curve with the given number of bits per curve index
    /// (i.e. `bits / 2` bits per axis).
    ///
    /// `bits` must be even and in `[2, 64]`; anything else is
    /// [`Error::InvalidBits`].
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits % 2 != 0 || bits > 64 {
            return Err(Error::InvalidBits { bits });
        }
        let order = bits / 2;
        let side: u64 = 1u64 << order;
        let max_index: u64 = if bits == 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };
        let half = (side / 2) as i64;
        let input_min = -half;
        let input_max = half - 1;

        Ok(Self {
            bits,
            order,
            side,
            input_min,
            input_max,
            max_index,
        })
    }

    /// Number of bits per curve index (`bits` passed to [`Curve::new`]).
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of bits per axis (`bits / 2`).
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Number of cells along each axis (`2^order`).
    pub const fn side(&self) -> u64 {
        self.side
    }

    /// Total number of curve positions, `side * side`.
    ///
    /// Returned as `u128` because `2^64` does not fit in a `u64`; use
    /// [`Curve::max_index`] when only the highest valid index is needed.
    pub const fn length(&self) -> u128 {
        1u128 << self.bits
    }

    /// The highest valid curve index (`length() - 1`), always representable
    /// in a `u64`.
    pub const fn max_index(&self) -> u64 {
        self.max_index
    }

    /// The inclusive range of valid input coordinates along either axis,
    /// `(input_min, input_max)`.
    pub const fn valid_input_range(&self) -> (i64, i64) {
        (self.input_min, self.input_max)
    }

    /// The big-endian byte encoding of the lowest and highest valid curve
    /// indices, `(0u64.to_be_bytes(), max_index.to_be_bytes())`.
    pub const fn output_range(&self) -> ([u8; 8], [u8; 8]) {
        (0u64.to_be_bytes(), self.max_index.to_be_bytes())
    }

    /// Whether `(x, y)` falls within this curve's valid input square.
    pub(crate) const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.input_min && x <= self.input_max && y >= self.input_min && y <= self.input_max
    }
}

impl Default for Curve {
    /// A 64-bit curve (`side = 2^32`), the "default curve" convenience
    /// mentioned in spec.md's design notes. Constructed fresh each call;
    /// there is no global/lazy-static curve instance.
    fn default() -> Self {
        Self::new(64).expect("bits=64 is always a valid curve order")
    }
}
