//! Safetensors I/O for the preprocessing pipeline.
//!
//! Reader: parses a safetensors container holding the fully materialized
//! dataset (`data` [S, C, T] f32, `labels` [S, R] f32). Writer: emits the
//! segmented windows and binarized label table the same way.
use anyhow::{bail, Context, Result};
use ndarray::{Array2, Array3};
use std::collections::HashMap;
use std::path::Path;

use crate::label::BinarizedLabels;
use crate::segment::Segmented;

// ── Low-level safetensors parser (no dependency on the `safetensors` crate's
//    tensor types — we just need raw bytes → ndarray). ─────────────────────────

fn parse_header(bytes: &[u8]) -> Result<(HashMap<String, serde_json::Value>, usize)> {
    if bytes.len() < 8 {
        bail!("safetensors file too small");
    }
    let n = u64::from_le_bytes(bytes[..8].try_into().unwrap()) as usize;
    let header: HashMap<String, serde_json::Value> =
        serde_json::from_slice(&bytes[8..8 + n])
            .context("failed to parse safetensors header")?;
    Ok((header, 8 + n))
}

fn read_f32_tensor(
    bytes: &[u8],
    data_start: usize,
    entry: &serde_json::Value,
) -> Result<Vec<f32>> {
    let offsets = entry["data_offsets"]
        .as_array()
        .context("missing data_offsets")?;
    let s = offsets[0].as_u64().context("bad offset")? as usize;
    let e = offsets[1].as_u64().context("bad offset")? as usize;
    let raw = &bytes[data_start + s..data_start + e];
    Ok(raw
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

fn shape_of(entry: &serde_json::Value) -> Result<Vec<usize>> {
    entry["shape"]
        .as_array()
        .context("missing shape")?
        .iter()
        .map(|v| v.as_u64().map(|n| n as usize).context("bad shape entry"))
        .collect()
}

// ── Public structs ────────────────────────────────────────────────────────────

/// Raw trials loaded from a safetensors container.
pub struct RawTrials {
    /// [S, C, T] — all units' multichannel recordings.
    pub data: Array3<f32>,
    /// [S, R] — one self-report rating row per unit.
    pub ratings: Array2<f32>,
}

impl RawTrials {
    /// Load `data` and `labels` tensors from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let (header, data_start) = parse_header(&bytes)?;

        let data_entry = header.get("data").context("missing 'data' key")?;
        let shape = shape_of(data_entry)?;
        if shape.len() != 3 {
            bail!("'data' must be 3-D [S, C, T], got {shape:?}");
        }
        let data_vec = read_f32_tensor(&bytes, data_start, data_entry)?;
        let data = Array3::from_shape_vec((shape[0], shape[1], shape[2]), data_vec)?;

        let label_entry = header.get("labels").context("missing 'labels' key")?;
        let shape = shape_of(label_entry)?;
        if shape.len() != 2 {
            bail!("'labels' must be 2-D [S, R], got {shape:?}");
        }
        let label_vec = read_f32_tensor(&bytes, data_start, label_entry)?;
        let ratings = Array2::from_shape_vec((shape[0], shape[1]), label_vec)?;

        if data.shape()[0] != ratings.nrows() {
            bail!(
                "unit count mismatch: data has {} units, labels has {}",
                data.shape()[0],
                ratings.nrows()
            );
        }
        Ok(RawTrials { data, ratings })
    }
}

// ── Generic safetensors builder ───────────────────────────────────────────────

/// Simple safetensors file writer that handles F32, I32, and U8 tensors.
///
/// Usage:
/// ```rust,no_run
/// use deap_prep::io::StWriter;
/// use std::path::Path;
/// let mut w = StWriter::new();
/// w.add_f32("signal", &[1.0f32, 2.0, 3.0], &[1, 3]);
/// w.write(Path::new("/tmp/out.safetensors")).unwrap();
/// ```
#[derive(Default)]
pub struct StWriter {
    entries: Vec<(String, Vec<u8>, &'static str, Vec<usize>)>,
}

impl StWriter {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn add_f32(&mut self, name: &str, data: &[f32], shape: &[usize]) {
        let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.entries.push((name.to_string(), bytes, "F32", shape.to_vec()));
    }

    pub fn add_f32_arr2(&mut self, name: &str, arr: &Array2<f32>) {
        let data: Vec<f32> = arr.iter().copied().collect();
        self.add_f32(name, &data, &[arr.nrows(), arr.ncols()]);
    }

    pub fn add_f32_arr3(&mut self, name: &str, arr: &Array3<f32>) {
        let data: Vec<f32> = arr.iter().copied().collect();
        self.add_f32(name, &data, arr.shape());
    }

    pub fn add_i32(&mut self, name: &str, data: &[i32], shape: &[usize]) {
        let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.entries.push((name.to_string(), bytes, "I32", shape.to_vec()));
    }

    pub fn add_u8(&mut self, name: &str, data: &[u8], shape: &[usize]) {
        self.entries.push((name.to_string(), data.to_vec(), "U8", shape.to_vec()));
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        use std::io::Write;
        let mut header_map = serde_json::Map::new();
        let mut offset: usize = 0;
        for (name, data, dtype, shape) in &self.entries {
            header_map.insert(name.clone(), serde_json::json!({
                "dtype": dtype,
                "shape": shape,
                "data_offsets": [offset, offset + data.len()],
            }));
            offset += data.len();
        }
        let hdr_bytes = serde_json::to_vec(&header_map)?;
        let pad = (8 - hdr_bytes.len() % 8) % 8;
        let padded: Vec<u8> = hdr_bytes.into_iter()
            .chain(std::iter::repeat(b' ').take(pad))
            .collect();
        let mut f = std::fs::File::create(path)?;
        f.write_all(&(padded.len() as u64).to_le_bytes())?;
        f.write_all(&padded)?;
        for (_, data, _, _) in &self.entries {
            f.write_all(data)?;
        }
        Ok(())
    }
}

// ── Output writer ─────────────────────────────────────────────────────────────

/// Write segmentation output and the binarized label table to `path`.
///
/// Keys:
///   segments        [N, C, W]  f32
///   segment_labels  [N, R]     f32
///   binarized       [S, 2]     u8   (columns: Positive Valence, High Arousal)
///   n_segments      [1]        i32
pub fn write_output(
    segmented: &Segmented,
    binarized: &BinarizedLabels,
    path: &Path,
) -> Result<()> {
    let mut w = StWriter::new();
    w.add_f32_arr3("segments", &segmented.segments);
    w.add_f32_arr2("segment_labels", &segmented.labels);

    let flags: Vec<u8> = binarized.rows.iter().copied().collect();
    w.add_u8("binarized", &flags, &[binarized.len(), 2]);

    w.add_i32("n_segments", &[segmented.len() as i32], &[1]);
    w.write(path)
        .with_context(|| format!("writing {}", path.display()))
}
