//! The range planner: decompose a rectangle query into a cost-bounded list
//! of contiguous curve-index byte ranges.

use crate::byte_range::ByteRange;
use crate::curve::Curve;
use crate::error::{Error, Result};

impl Curve {
    /// Decompose the rectangle `[x, x+w] x [y, y+h]` into a sorted, disjoint
    /// list of [`ByteRange`]s whose union covers every curve index of every
    /// lattice point in the rectangle.
    ///
    /// `iops_cost` weighs the cost of an additional range (a seek) against
    /// the cost of one overscanned curve position: two adjacent ranges are
    /// merged iff the gap between them, in curve positions, is no larger
    /// than `iops_cost` times a per-call scale factor derived from the
    /// sampled rectangle's own index density (see `DESIGN.md`, open question
    /// OQ-2). `iops_cost = 0.0` yields the finest partition (one range per
    /// contiguous run of sampled indices); larger values produce fewer,
    /// wider ranges.
    ///
    /// The rectangle must sample a small number of lattice points: this
    /// function is `O(w * h)`, matching the expected usage pattern of small
    /// point-neighborhood queries described in the design notes.
    ///
    /// Fails with [`Error::Degenerate`] if `w < 0` or `h < 0`, and with
    /// [`Error::OutOfRange`] if the rectangle is not fully contained in
    /// [`Curve::valid_input_range`].
    pub fn rectangle_to_ranges(
        &self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        iops_cost: f32,
    ) -> Result<Vec<ByteRange>> {
        if w < 0 || h < 0 {
            return Err(Error::Degenerate { width: w, height: h });
        }
        if !self.contains(x, y) {
            return Err(Error::OutOfRange {
                x,
                y,
                input_min: self.input_min,
                input_max: self.input_max,
            });
        }
        // `x + w`/`y + h` can overflow `i64` for a caller-supplied `w`/`h`
        // (e.g. `w = i64::MAX`); an overflowing corner is, by construction,
        // not a point this curve's input square could contain, so it's
        // reported as the same `OutOfRange` rather than panicking.
        let x_max = x.checked_add(w).ok_or(Error::OutOfRange {
            x: i64::MAX,
            y,
            input_min: self.input_min,
            input_max: self.input_max,
        })?;
        let y_max = y.checked_add(h).ok_or(Error::OutOfRange {
            x,
            y: i64::MAX,
            input_min: self.input_min,
            input_max: self.input_max,
        })?;
        if !self.contains(x_max, y_max) {
            return Err(Error::OutOfRange {
                x: x_max,
                y: y_max,
                input_min: self.input_min,
                input_max: self.input_max,
            });
        }

        let mut indices = sample_rectangle(self, x, y, x_max, y_max);
        indices.sort_unstable();
        indices.dedup();

        let scale = merge_scale(&indices);
        let threshold = f64::from(iops_cost) * scale;

        let merged = merge_adjacent(&indices, threshold);
        Ok(merged
            .into_iter()
            .map(|(a, b)| ByteRange::from_indices(a, b))
            .collect())
    }
}

/// Encode every lattice point in `[x, x_max] x [y, y_max]` to its curve
/// index. The caller has already verified the rectangle lies within the
/// curve's valid input square, so every `encode_point` call here succeeds.
fn sample_rectangle(curve: &Curve, x: i64, y: i64, x_max: i64, y_max: i64) -> Vec<u64> {
    let width = (x_max - x + 1) as usize;
    let height = (y_max - y + 1) as usize;
    let mut indices = Vec::with_capacity(width * height);
    for yi in y..=y_max {
        for xi in x..=x_max {
            let key = curve
                .encode_point(xi, yi)
                .expect("rectangle was already validated against the curve's input range");
            indices.push(u64::from_be_bytes(key));
        }
    }
    indices
}

/// The "equivalent curve positions per seek" scale factor used by the
/// greedy merge predicate: the mean gap between consecutive sampled
/// indices, i.e. `(max - min) / (count - 1)`. A single sampled index (the
/// `w = 0, h = 0` case) has no gaps to average, so it scales to `1.0`.
fn merge_scale(sorted_indices: &[u64]) -> f64 {
    match sorted_indices.len() {
        0 | 1 => 1.0,
        n => {
            let span = sorted_indices[n - 1] - sorted_indices[0];
            span as f64 / (n - 1) as f64
        }
    }
}

/// Greedily merge adjacent singleton-derived ranges left to right: `sorted`
/// must already be ascending and deduplicated. Two ranges merge iff the gap
/// between them is no larger than `threshold` curve positions.
fn merge_adjacent(sorted: &[u64], threshold: f64) -> Vec<(u64, u64)> {
    let mut merged: Vec<(u64, u64)> = Vec::new();
    for &d in sorted {
        if let Some(last) = merged.last_mut() {
            let gap = d - last.1 - 1;
            if (gap as f64) <= threshold {
                last.1 = d;
                continue;
            }
        }
        merged.push((d, d));
    }
    merged
}
