//! Fixed-length windowing of trimmed trials.
//!
//! Drops the first `lead_trim` samples of every trial, then slices the
//! remainder into `window_size`-sample windows advancing by `step_size`,
//! dropping any trailing incomplete window. Each window carries the full
//! rating vector of the trial it came from.
use log::debug;
use ndarray::{s, Array2, Array3};

use crate::error::PreprocessError;

/// Index-aligned segmentation output.
///
/// `segments[i]` was cut from the unit whose rating row is `labels[i]`;
/// windows of one unit occupy a contiguous index range, units appear in
/// input order, and within a unit windows appear in increasing start order.
#[derive(Debug, Clone)]
pub struct Segmented {
    /// [N, C, window_size] — all windows, flattened across units.
    pub segments: Array3<f32>,
    /// [N, R] — the source unit's rating vector, replicated per window.
    pub labels: Array2<f32>,
}

impl Segmented {
    /// Number of (segment, label) pairs.
    pub fn len(&self) -> usize {
        self.segments.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of full windows a trial of `n_t` samples yields.
///
/// `floor((n_t - lead_trim - window_size) / step_size) + 1` when the trimmed
/// length holds at least one window, else 0.
pub fn windows_per_unit(
    n_t: usize,
    lead_trim: usize,
    window_size: usize,
    step_size: usize,
) -> usize {
    let remaining = n_t.saturating_sub(lead_trim);
    if remaining < window_size || window_size == 0 || step_size == 0 {
        0
    } else {
        (remaining - window_size) / step_size + 1
    }
}

/// Segment `data` ([S, C, T]) into windows and replicate `ratings` ([S, R])
/// onto them.
///
/// Units are processed in input order; within a unit, windows are emitted in
/// increasing start-offset order. This ordering is part of the contract:
/// `labels.row(i)` is exactly the rating row of the unit that produced
/// `segments[i]`.
///
/// A trial whose trimmed length is shorter than `window_size` contributes
/// zero windows — no padding, no error.
///
/// # Errors
///
/// * [`PreprocessError::InvalidWindowParameters`] when `window_size` or
///   `step_size` is zero.
/// * [`PreprocessError::ShapeMismatch`] when `ratings` does not have one row
///   per unit of `data`.
pub fn segment(
    data: &Array3<f32>,
    ratings: &Array2<f32>,
    lead_trim: usize,
    window_size: usize,
    step_size: usize,
) -> Result<Segmented, PreprocessError> {
    if window_size == 0 || step_size == 0 {
        return Err(PreprocessError::InvalidWindowParameters { window_size, step_size });
    }
    let (n_units, n_ch, n_t) = data.dim();
    if ratings.nrows() != n_units {
        return Err(PreprocessError::ShapeMismatch {
            axis: "unit",
            expected: n_units,
            found: ratings.nrows(),
        });
    }

    let per_unit = windows_per_unit(n_t, lead_trim, window_size, step_size);
    let n_total = n_units * per_unit;
    let n_r = ratings.ncols();

    let mut segments = Array3::<f32>::zeros((n_total, n_ch, window_size));
    let mut labels = Array2::<f32>::zeros((n_total, n_r));

    let t0 = lead_trim.min(n_t);
    let mut out = 0usize;
    for u in 0..n_units {
        let trial = data.slice(s![u, .., t0..]);
        let rating = ratings.row(u);
        for k in 0..per_unit {
            let start = k * step_size;
            segments
                .slice_mut(s![out, .., ..])
                .assign(&trial.slice(s![.., start..start + window_size]));
            labels.row_mut(out).assign(&rating);
            out += 1;
        }
    }
    debug_assert_eq!(out, n_total);

    debug!(
        "segmented {n_units} units × {per_unit} windows of {window_size} samples \
         ({n_ch} ch, trimmed {t0})"
    );
    Ok(Segmented { segments, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn deap_trial_yields_twenty_windows() {
        // (8064 - 384 - 384) / 384 + 1 = 20
        assert_eq!(windows_per_unit(8064, 384, 384, 384), 20);
    }

    #[test]
    fn short_remainder_yields_zero_windows() {
        // 8064 - 7800 = 264 < 384
        assert_eq!(windows_per_unit(8064, 7800, 384, 384), 0);
    }

    #[test]
    fn exact_fit_yields_one_window() {
        assert_eq!(windows_per_unit(768, 384, 384, 384), 1);
    }

    #[test]
    fn overlapping_step_counts_more_windows() {
        // remaining 1000, window 400, step 200 → starts 0,200,400,600
        assert_eq!(windows_per_unit(1000, 0, 400, 200), 4);
    }

    #[test]
    fn segment_counts_and_alignment() {
        let data = Array3::from_elem((3, 2, 10), 0.0_f32);
        let ratings = Array2::from_shape_fn((3, 4), |(u, r)| (u * 10 + r) as f32);
        let seg = segment(&data, &ratings, 2, 4, 4).unwrap();
        // remaining 8, two windows per unit, three units
        assert_eq!(seg.len(), 6);
        assert_eq!(seg.labels.shape(), &[6, 4]);
        for i in 0..6 {
            let u = i / 2;
            for r in 0..4 {
                assert_eq!(seg.labels[[i, r]], (u * 10 + r) as f32);
            }
        }
    }

    #[test]
    fn segment_values_follow_trim_and_start() {
        let data = Array3::from_shape_fn((2, 3, 12), |(u, c, t)| {
            (u * 1000 + c * 100 + t) as f32
        });
        let ratings = Array2::<f32>::zeros((2, 4));
        let seg = segment(&data, &ratings, 2, 4, 4).unwrap();
        // Unit 0, window 0 starts at trimmed offset 0 == absolute sample 2.
        assert_eq!(seg.segments[[0, 0, 0]], 2.0);
        // Unit 0, window 1 starts at absolute sample 6.
        assert_eq!(seg.segments[[1, 2, 0]], 206.0);
        // Unit 1, window 0.
        assert_eq!(seg.segments[[2, 1, 3]], 1105.0);
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let data = Array3::<f32>::zeros((1, 1, 10));
        let ratings = Array2::<f32>::zeros((1, 4));
        let err = segment(&data, &ratings, 0, 0, 4).unwrap_err();
        assert_eq!(
            err,
            PreprocessError::InvalidWindowParameters { window_size: 0, step_size: 4 }
        );
    }

    #[test]
    fn ratings_unit_mismatch_is_rejected() {
        let data = Array3::<f32>::zeros((3, 1, 10));
        let ratings = Array2::<f32>::zeros((2, 4));
        let err = segment(&data, &ratings, 0, 4, 4).unwrap_err();
        assert_eq!(
            err,
            PreprocessError::ShapeMismatch { axis: "unit", expected: 3, found: 2 }
        );
    }

    #[test]
    fn trim_past_end_yields_empty_output() {
        let data = Array3::from_elem((2, 1, 10), 1.0_f32);
        let ratings = Array2::<f32>::zeros((2, 4));
        let seg = segment(&data, &ratings, 50, 4, 4).unwrap();
        assert!(seg.is_empty());
        assert_eq!(seg.labels.nrows(), 0);
    }
}
