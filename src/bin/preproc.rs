use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use deap_prep::{io::write_output, preprocess, PreprocessConfig, RawTrials};

#[derive(Parser)]
#[command(name = "preproc", about = "DEAP-style segmentation + label binarization")]
struct Args {
    /// Input safetensors with 'data' [S, C, T] and 'labels' [S, R]
    #[arg(long)]
    input: PathBuf,

    /// Output safetensors path
    #[arg(long)]
    output: PathBuf,

    /// Leading channels in the primary (EEG) group
    #[arg(long, default_value_t = 32)]
    n_primary: usize,

    /// Trailing channels in the auxiliary (peripheral) group
    #[arg(long, default_value_t = 8)]
    n_auxiliary: usize,

    /// Samples to trim from the start of every trial
    #[arg(long, default_value_t = 384)]
    lead_trim: usize,

    /// Window length in samples
    #[arg(long, default_value_t = 384)]
    window_size: usize,

    /// Step between window starts in samples
    #[arg(long, default_value_t = 384)]
    step_size: usize,

    /// Rating cutoff for the binary valence/arousal flags
    #[arg(long, default_value_t = 5.0)]
    threshold: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = RawTrials::load(&args.input)?;
    let (s, c, t) = raw.data.dim();
    info!("loaded {s} units × {c} ch × {t} samples, {} rating dims", raw.ratings.ncols());

    let cfg = PreprocessConfig {
        n_primary: args.n_primary,
        n_auxiliary: args.n_auxiliary,
        lead_trim: args.lead_trim,
        window_size: args.window_size,
        step_size: args.step_size,
        threshold: args.threshold,
        ..PreprocessConfig::default()
    };

    let out = preprocess(&raw.data, &raw.ratings, &cfg)?;
    info!(
        "produced {} segments of {:?}, {} label rows",
        out.segments.len(),
        &out.segments.segments.shape()[1..],
        out.binarized.len()
    );

    write_output(&out.segments, &out.binarized, &args.output)?;
    info!("written → {}", args.output.display());

    Ok(())
}
