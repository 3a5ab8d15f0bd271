/// Shared helpers for building synthetic test datasets.
use ndarray::{Array2, Array3};

#[allow(unused)]
/// Tensor whose value encodes its own (unit, channel, time) index, so any
/// slice can be traced back to its source position exactly.
///
/// Valid for u < 16, c < 1000, t < 1000 (stays within f32 integer range).
pub fn coded_tensor(s: usize, c: usize, t: usize) -> Array3<f32> {
    Array3::from_shape_fn((s, c, t), |(u, ch, tm)| {
        (u * 1_000_000 + ch * 1_000 + tm) as f32
    })
}

#[allow(unused)]
/// Ratings matrix whose value encodes (unit, dimension).
pub fn coded_ratings(s: usize, r: usize) -> Array2<f32> {
    Array2::from_shape_fn((s, r), |(u, d)| (u * 10 + d) as f32)
}
