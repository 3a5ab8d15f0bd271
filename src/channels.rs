//! Channel-group splitting.
//!
//! DEAP recordings interleave two sensor modalities on one channel axis:
//! the first 32 channels are EEG electrodes, the last 8 are peripheral
//! sensors (EOG, EMG, GSR, respiration, plethysmograph, temperature).
//! [`split_channels`] separates them into two independently owned tensors.
use ndarray::{s, Array3};

use crate::error::PreprocessError;

/// Electrode names of the 32 EEG channels, in channel-axis order.
pub const EEG_CHANNELS: [&str; 32] = [
    "Fp1", "AF3", "F3", "F7", "FC5", "FC1", "C3", "T7", "CP5", "CP1", "P3",
    "P7", "PO3", "O1", "Oz", "Pz", "Fp2", "AF4", "Fz", "F4", "F8", "FC6",
    "FC2", "Cz", "C4", "T8", "CP6", "CP2", "P4", "P8", "PO4", "O2",
];

/// Sensor names of the 8 peripheral channels, in channel-axis order.
pub const PERIPHERAL_CHANNELS: [&str; 8] = [
    "hEOG", "vEOG", "zEMG", "tEMG", "GSR", "Respiration belt",
    "Plethysmograph", "Temperature",
];

/// Split `data` ([S, C, T]) into primary and auxiliary channel groups.
///
/// Primary covers channels `0..n_primary`, auxiliary covers the rest.
/// Both outputs are freshly owned copies sharing the unit and time axes of
/// the source; mutating one never shows through the other.
///
/// # Errors
///
/// [`PreprocessError::ShapeMismatch`] when `n_primary + n_auxiliary` does
/// not equal the channel-axis length.
pub fn split_channels(
    data: &Array3<f32>,
    n_primary: usize,
    n_auxiliary: usize,
) -> Result<(Array3<f32>, Array3<f32>), PreprocessError> {
    let n_ch = data.shape()[1];
    if n_primary + n_auxiliary != n_ch {
        return Err(PreprocessError::ShapeMismatch {
            axis: "channel",
            expected: n_primary + n_auxiliary,
            found: n_ch,
        });
    }

    let primary = data.slice(s![.., ..n_primary, ..]).to_owned();
    let auxiliary = data.slice(s![.., n_primary.., ..]).to_owned();
    Ok((primary, auxiliary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn split_shapes() {
        let data = Array3::from_elem((2, 40, 100), 1.0_f32);
        let (eeg, periph) = split_channels(&data, 32, 8).unwrap();
        assert_eq!(eeg.shape(), &[2, 32, 100]);
        assert_eq!(periph.shape(), &[2, 8, 100]);
    }

    #[test]
    fn split_preserves_values_and_order() {
        // Encode (unit, channel, time) into the value so slices are traceable.
        let data = Array3::from_shape_fn((2, 6, 4), |(u, c, t)| {
            (u * 1000 + c * 10 + t) as f32
        });
        let (a, b) = split_channels(&data, 4, 2).unwrap();
        assert_eq!(a[[1, 3, 2]], 1032.0);
        assert_eq!(b[[0, 0, 0]], 40.0); // channel 4 of the source
        assert_eq!(b[[1, 1, 3]], 1053.0);
    }

    #[test]
    fn split_rejects_bad_group_sizes() {
        let data = Array3::<f32>::zeros((1, 40, 10));
        let err = split_channels(&data, 32, 7).unwrap_err();
        assert_eq!(
            err,
            PreprocessError::ShapeMismatch { axis: "channel", expected: 39, found: 40 }
        );
    }

    #[test]
    fn channel_name_tables_match_group_sizes() {
        assert_eq!(EEG_CHANNELS.len() + PERIPHERAL_CHANNELS.len(), 40);
    }
}
