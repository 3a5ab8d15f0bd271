//! Preprocessing configuration.
//!
//! [`PreprocessConfig`] holds every tunable parameter of the pipeline.
//! All defaults match the DEAP reference dataset: 32 EEG + 8 peripheral
//! channels, 128 Hz sampling, a 3 s pre-trial baseline to trim, and
//! non-overlapping 3 s windows.

/// Configuration for channel splitting, segmentation, and label binarization.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use deap_prep::PreprocessConfig;
///
/// let cfg = PreprocessConfig {
///     window_size: 768,   // 6 s windows instead of 3 s
///     step_size:   768,
///     ..PreprocessConfig::default()
/// };
/// ```
///
/// Or just call [`PreprocessConfig::default()`] for the DEAP settings.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Number of leading channels forming the primary (EEG) group.
    ///
    /// Default: `32`.
    pub n_primary: usize,

    /// Number of trailing channels forming the auxiliary (peripheral) group.
    ///
    /// `n_primary + n_auxiliary` must equal the channel-axis length of the
    /// input tensor; [`crate::split_channels`] rejects anything else.
    ///
    /// Default: `8`.
    pub n_auxiliary: usize,

    /// Samples discarded from the start of every trial before windowing.
    ///
    /// DEAP trials carry a 3 s pre-trial baseline at 128 Hz, so the default
    /// drops 3 × 128 samples and keeps the 60 s stimulus period.
    ///
    /// Default: `384`.
    pub lead_trim: usize,

    /// Window length in samples.
    ///
    /// Trailing samples that do not fill a complete window are discarded
    /// (floor semantics, no padding).
    ///
    /// Default: `384` (3 s at 128 Hz).
    pub window_size: usize,

    /// Distance between consecutive window starts, in samples.
    ///
    /// Equal to `window_size` for non-overlapping windows, which is the
    /// default policy; smaller values produce overlapping windows.
    ///
    /// Default: `384`.
    pub step_size: usize,

    /// Rating score at or above which a dimension is flagged high/positive.
    ///
    /// DEAP self-reports use a continuous 1–9 scale, so 5 is the midpoint
    /// cutoff.
    ///
    /// Default: `5.0`.
    pub threshold: f32,

    /// Column of the ratings matrix holding the valence score.
    ///
    /// Default: `0`.
    pub valence_dim: usize,

    /// Column of the ratings matrix holding the arousal score.
    ///
    /// Default: `1`.
    pub arousal_dim: usize,
}

impl Default for PreprocessConfig {
    /// Returns the DEAP reference configuration:
    /// 32 + 8 channels · 384-sample trim · 384/384 windowing · threshold 5.
    fn default() -> Self {
        Self {
            n_primary: 32,
            n_auxiliary: 8,
            lead_trim: 384,
            window_size: 384,
            step_size: 384,
            threshold: 5.0,
            valence_dim: 0,
            arousal_dim: 1,
        }
    }
}

impl PreprocessConfig {
    /// Number of windows one trial of `n_t` samples contributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use deap_prep::PreprocessConfig;
    /// let cfg = PreprocessConfig::default();
    /// // (8064 - 384 - 384) / 384 + 1 = 20
    /// assert_eq!(cfg.windows_per_unit(8064), 20);
    /// ```
    pub fn windows_per_unit(&self, n_t: usize) -> usize {
        crate::segment::windows_per_unit(n_t, self.lead_trim, self.window_size, self.step_size)
    }
}
