//! The point codec: `(x, y) <-> 8-byte big-endian Hilbert curve index`.
//!
//! The `rx`/`ry` bit-interleaving loop and quadrant rotation implement
//! spec.md §4.B's algorithm verbatim (the teacher's own Hilbert path,
//! `curves/hilbert2.rs`, uses a gray-code/entry-direction state machine
//! instead, so it confirms the curve's locality/bijection properties rather
//! than this specific rotation formulation). Widened from the teacher's
//! `u32` to `u64` throughout since this crate supports curve orders up to
//! `bits = 64`.

use crate::curve::Curve;
use crate::error::{Error, Result};

/// Map a point already translated into `[0, side)` unsigned grid coordinates
/// to its Hilbert curve index.
fn hilbert_index(side: u64, mut ux: u64, mut uy: u64) -> u64 {
    let mut d: u64 = 0;
    let mut s = side / 2;
    while s > 0 {
        let rx: u64 = u64::from((ux & s) > 0);
        let ry: u64 = u64::from((uy & s) > 0);
        d += s * s * ((3 * rx) ^ ry);
        rotate_quadrant(s, &mut ux, &mut uy, rx, ry);
        s /= 2;
    }
    d
}

/// Inverse of [`hilbert_index`]: map a curve index back to `[0, side)`
/// unsigned grid coordinates.
fn hilbert_point(side: u64, d: u64) -> (u64, u64) {
    let mut ux: u64 = 0;
    let mut uy: u64 = 0;
    let mut t = d;
    let mut s: u64 = 1;
    while s < side {
        let rx: u64 = 1 & (t / 2);
        let ry: u64 = 1 & (t ^ rx);
        rotate_quadrant(s, &mut ux, &mut uy, rx, ry);
        ux += s * rx;
        uy += s * ry;
        t /= 4;
        s *= 2;
    }
    (ux, uy)
}

/// Rotate/reflect a quadrant of side `s` per the standard Hilbert rule: when
/// `ry == 0`, reflect across the quadrant when `rx == 1`, then swap axes.
#[inline]
fn rotate_quadrant(s: u64, ux: &mut u64, uy: &mut u64, rx: u64, ry: u64) {
    if ry == 0 {
        if rx == 1 {
            *ux = s - 1 - *ux;
            *uy = s - 1 - *uy;
        }
        std::mem::swap(ux, uy);
    }
}

impl Curve {
    /// Encode a point into its 8-byte big-endian curve-index key.
    ///
    /// Fails with [`Error::OutOfRange`] if `x` or `y` is outside
    /// [`Curve::valid_input_range`].
    pub fn encode_point(&self, x: i64, y: i64) -> Result<[u8; 8]> {
        if !self.contains(x, y) {
            return Err(Error::OutOfRange {
                x,
                y,
                input_min: self.input_min,
                input_max: self.input_max,
            });
        }
        let ux = (x - self.input_min) as u64;
        let uy = (y - self.input_min) as u64;
        let d = hilbert_index(self.side, ux, uy);
        Ok(d.to_be_bytes())
    }

    /// Decode an 8-byte big-endian curve-index key back into its point.
    ///
    /// Undefined behavior only in the sense that a value greater than
    /// [`Curve::max_index`] decodes to coordinates outside the valid input
    /// square rather than panicking; callers are expected to only decode
    /// keys this curve itself produced.
    pub fn decode_point(&self, key: &[u8; 8]) -> (i64, i64) {
        let d = u64::from_be_bytes(*key);
        let (ux, uy) = hilbert_point(self.side, d);
        (ux as i64 + self.input_min, uy as i64 + self.input_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_bits4_enumeration() {
        // bits=4: side=4, input_min=-2, input_max=1.
        // All 16 points must map bijectively onto 0..15 with Manhattan-1
        // adjacency between consecutive curve indices.
        let curve = Curve::new(4).unwrap();
        let (lo, hi) = curve.valid_input_range();
        let mut points = Vec::new();
        for y in lo..=hi {
            for x in lo..=hi {
                points.push((x, y));
            }
        }
        assert_eq!(points.len(), 16);

        let mut seen = vec![false; 16];
        for &(x, y) in &points {
            let key = curve.encode_point(x, y).unwrap();
            let idx = u64::from_be_bytes(key) as usize;
            assert!(!seen[idx], "index {idx} produced by more than one point");
            seen[idx] = true;
            assert_eq!(curve.decode_point(&key), (x, y));
        }
        assert!(seen.iter().all(|&s| s), "not every index in 0..16 was hit");

        for idx in 0u64..15 {
            let p1 = curve.decode_point(&idx.to_be_bytes());
            let p2 = curve.decode_point(&(idx + 1).to_be_bytes());
            let dx = (p1.0 - p2.0).abs();
            let dy = (p1.1 - p2.1).abs();
            assert_eq!(dx + dy, 1, "indices {idx} and {} are not 4-neighbors", idx + 1);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let curve = Curve::new(4).unwrap();
        assert!(matches!(
            curve.encode_point(2, 0),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            curve.encode_point(0, -3),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn round_trip_various_bits() {
        for bits in (2..=64).step_by(2) {
            let curve = Curve::new(bits).unwrap();
            let (lo, hi) = curve.valid_input_range();
            let samples = [
                (lo, lo),
                (hi, hi),
                (lo, hi),
                (hi, lo),
                (0i64.clamp(lo, hi), 0i64.clamp(lo, hi)),
            ];
            for (x, y) in samples {
                let key = curve.encode_point(x, y).unwrap();
                assert_eq!(curve.decode_point(&key), (x, y), "bits={bits} ({x},{y})");
            }
        }
    }

    #[test]
    fn bijection_small_curve() {
        // bits=8: enumerate every point and confirm a bijection onto 0..length.
        let curve = Curve::new(8).unwrap();
        let (lo, hi) = curve.valid_input_range();
        let mut seen = vec![false; curve.length() as usize];
        for y in lo..=hi {
            for x in lo..=hi {
                let key = curve.encode_point(x, y).unwrap();
                let idx = u64::from_be_bytes(key) as usize;
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}
