//! # deap-prep — DEAP-style affective-signal preprocessing in pure Rust
//!
//! `deap-prep` turns a multi-subject physiological recording — per-trial
//! multichannel time series plus self-reported affective ratings — into
//! model-ready windows and binary labels. Channel splitting, window
//! segmentation, and label binarization are implemented over [`ndarray`]
//! tensors; loading the raw per-subject files and any downstream training
//! are the caller's business.
//!
//! ## Pipeline overview
//!
//! ```text
//! data [S, C, T]  +  ratings [S, R]
//!   │
//!   ├─ split_channels      [S, 32, T] EEG  +  [S, 8, T] peripheral
//!   ├─ segment             trim 384 samples, cut 384-sample windows
//!   │                        → segments [N, 32, 384] ∥ labels [N, R]
//!   └─ binarize_ratings    rating ≥ 5 → {Positive Valence, High Arousal}
//!                            → [S, 2] 0/1 table
//! ```
//!
//! Reference DEAP shapes: S = 1280 (32 subjects × 40 trials), C = 40,
//! T = 8064 (63 s at 128 Hz), R = 4 (valence, arousal, dominance, liking).
//!
//! ## Quick start
//!
//! ```
//! use deap_prep::{preprocess, PreprocessConfig};
//! use ndarray::{Array2, Array3};
//!
//! // 4 units of 10-channel, 1000-sample trials, 4 rating dimensions.
//! let data: Array3<f32> = Array3::zeros((4, 10, 1000));
//! let ratings: Array2<f32> = Array2::from_elem((4, 4), 6.0);
//!
//! let cfg = PreprocessConfig {
//!     n_primary: 8,
//!     n_auxiliary: 2,
//!     lead_trim: 100,
//!     window_size: 300,
//!     step_size: 300,
//!     ..PreprocessConfig::default()
//! };
//! let out = preprocess(&data, &ratings, &cfg).unwrap();
//!
//! assert_eq!(out.segments.segments.shape(), &[12, 8, 300]); // 3 windows × 4 units
//! assert_eq!(out.binarized.rows.shape(), &[4, 2]);
//! ```
//!
//! ## Running individual steps
//!
//! Each transform is also exposed as a standalone function:
//! [`split_channels`], [`segment::segment`], [`binarize_ratings`].

pub mod channels;
pub mod config;
pub mod error;
pub mod io;
pub mod label;
pub mod segment;

use log::{debug, info};
use ndarray::{Array2, Array3};

// ── Crate-root re-exports ─────────────────────────────────────────────────
//
// Everything a downstream user is likely to need is available directly as
// `deap_prep::Foo` without having to know the internal module layout.

// channels
pub use channels::{split_channels, EEG_CHANNELS, PERIPHERAL_CHANNELS};

// config
pub use config::PreprocessConfig;

// error
pub use error::PreprocessError;

// io — safetensors helpers
pub use io::{write_output, RawTrials, StWriter};

// label
pub use label::{binarize_ratings, BinarizedLabels};

// segment
pub use segment::{windows_per_unit, Segmented};

/// Everything the pipeline produces from one dataset.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    /// [S, n_primary, T] — the EEG channel group, untouched by windowing.
    pub primary: Array3<f32>,
    /// [S, n_auxiliary, T] — the peripheral channel group.
    pub auxiliary: Array3<f32>,
    /// Windowed primary-channel data with per-window rating vectors.
    pub segments: Segmented,
    /// Thresholded valence/arousal flags, one row per unit.
    pub binarized: BinarizedLabels,
}

/// Run the **full preprocessing pipeline** on one in-memory dataset.
///
/// This is the main entry point for the `deap-prep` library. It chains the
/// three transforms in order:
///
/// 1. Split the channel axis into primary (EEG) and auxiliary (peripheral)
///    groups of [`PreprocessConfig::n_primary`] / [`PreprocessConfig::n_auxiliary`]
///    channels.
/// 2. Trim [`PreprocessConfig::lead_trim`] samples from every trial of the
///    primary group and cut the remainder into
///    [`PreprocessConfig::window_size`]-sample windows advancing by
///    [`PreprocessConfig::step_size`], replicating each unit's rating vector
///    onto its windows.
/// 3. Binarize the raw ratings at [`PreprocessConfig::threshold`].
///
/// # Arguments
///
/// * `data`    – Raw recording, shape `[S, C, T]`.
/// * `ratings` – Self-report scores, shape `[S, R]`, one row per unit.
/// * `cfg`     – Pipeline configuration (see [`PreprocessConfig`]).
///
/// # Errors
///
/// Propagates the first failing transform's [`PreprocessError`]; no partial
/// output is produced.
pub fn preprocess(
    data: &Array3<f32>,
    ratings: &Array2<f32>,
    cfg: &PreprocessConfig,
) -> Result<Preprocessed, PreprocessError> {
    debug!(
        "input: data {:?}, ratings {:?}",
        data.shape(),
        ratings.shape()
    );

    let (primary, auxiliary) = split_channels(data, cfg.n_primary, cfg.n_auxiliary)?;
    debug!(
        "channel groups: primary {:?}, auxiliary {:?}",
        primary.shape(),
        auxiliary.shape()
    );

    let segments = segment::segment(
        &primary,
        ratings,
        cfg.lead_trim,
        cfg.window_size,
        cfg.step_size,
    )?;
    let binarized = binarize_ratings(ratings, cfg.threshold, cfg.valence_dim, cfg.arousal_dim)?;

    info!(
        "preprocessed {} units → {} segments, {} binarized label rows",
        data.shape()[0],
        segments.len(),
        binarized.len()
    );
    Ok(Preprocessed { primary, auxiliary, segments, binarized })
}
