//! Rating binarization.
//!
//! Thresholds two self-report dimensions (valence and arousal by default)
//! into 0/1 flags, one row per unit, preserving input row order. Operates on
//! the raw ratings directly, independent of segmentation.
use ndarray::Array2;

use crate::error::PreprocessError;

/// Binarized affective labels, one row per unit.
///
/// Column order is fixed: [`BinarizedLabels::COLUMNS`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinarizedLabels {
    /// [S, 2] — 0/1 flags, rows in the input ratings' order.
    pub rows: Array2<u8>,
}

impl BinarizedLabels {
    /// Output column names, in column order.
    pub const COLUMNS: [&'static str; 2] = ["Positive Valence", "High Arousal"];

    /// Number of label rows.
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.nrows() == 0
    }
}

/// Binarize `ratings` ([S, R]): flag = 1 iff `rating[dim] >= threshold`.
///
/// Column 0 thresholds `valence_dim`, column 1 thresholds `arousal_dim`.
///
/// # Errors
///
/// [`PreprocessError::IndexOutOfRange`] when either dimension index is not
/// a column of `ratings`.
pub fn binarize_ratings(
    ratings: &Array2<f32>,
    threshold: f32,
    valence_dim: usize,
    arousal_dim: usize,
) -> Result<BinarizedLabels, PreprocessError> {
    let ncols = ratings.ncols();
    for dim in [valence_dim, arousal_dim] {
        if dim >= ncols {
            return Err(PreprocessError::IndexOutOfRange { dim, ncols });
        }
    }

    let mut rows = Array2::<u8>::zeros((ratings.nrows(), 2));
    for (i, rating) in ratings.rows().into_iter().enumerate() {
        rows[[i, 0]] = u8::from(rating[valence_dim] >= threshold);
        rows[[i, 1]] = u8::from(rating[arousal_dim] >= threshold);
    }
    Ok(BinarizedLabels { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn threshold_is_inclusive() {
        let ratings = array![[4.9_f32, 5.0, 3.0, 7.0]];
        let labels = binarize_ratings(&ratings, 5.0, 0, 1).unwrap();
        assert_eq!(labels.rows, array![[0_u8, 1]]);
    }

    #[test]
    fn row_order_is_preserved() {
        let ratings = array![
            [9.0_f32, 1.0],
            [1.0, 9.0],
            [5.0, 5.0],
        ];
        let labels = binarize_ratings(&ratings, 5.0, 0, 1).unwrap();
        assert_eq!(labels.rows, array![[1_u8, 0], [0, 1], [1, 1]]);
    }

    #[test]
    fn custom_dims_and_threshold() {
        let ratings = array![[0.0_f32, 0.0, 6.5, 2.0]];
        let labels = binarize_ratings(&ratings, 6.0, 2, 3).unwrap();
        assert_eq!(labels.rows, array![[1_u8, 0]]);
    }

    #[test]
    fn missing_dimension_is_rejected() {
        let ratings = array![[4.0_f32]];
        let err = binarize_ratings(&ratings, 5.0, 0, 1).unwrap_err();
        assert_eq!(err, PreprocessError::IndexOutOfRange { dim: 1, ncols: 1 });
    }

    #[test]
    fn column_names_are_fixed() {
        assert_eq!(BinarizedLabels::COLUMNS, ["Positive Valence", "High Arousal"]);
    }
}
