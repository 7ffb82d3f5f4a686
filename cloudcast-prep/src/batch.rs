use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use cloudcast::c3d::camera::CameraIntrinsic;
use cloudcast::c3d::io::record::{
    write_record_binary, DatasetRecord, RecordError, RECORD_EXTENSION,
};
use cloudcast::c3d::projection::pointcloud_from_rgbd;
use cloudcast::c3d::rgbd::{RgbdError, RgbdImage};
use cloudcast::image::{ops, Image, ImageError};
use cloudcast::imgproc::color::rgb_from_bgr;
use cloudcast::io::png::{read_image_png_mono16, read_image_png_rgb8};
use cloudcast::io::IoError;

/// Filename prefix identifying color captures.
const RGB_PREFIX: &str = "rgb";

/// Filename prefix identifying depth captures.
const DEPTH_PREFIX: &str = "depth";

/// How rgb and depth files in the input directory are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStrategy {
    /// The Nth rgb file pairs with the Nth depth file in sorted order;
    /// pairing stops at the shorter list. This reproduces the historical
    /// capture layout, which relied on listing order rather than matching
    /// identifiers.
    Positional,
    /// rgb and depth files pair by the shared filename suffix after their
    /// prefix (`rgb_scene_42.png` with `depth_scene_42.png`); unmatched
    /// files are logged and skipped.
    Identifier,
}

/// Error types for the batch driver.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Error listing the input directory
    #[error("error listing the input directory")]
    Io(#[from] std::io::Error),

    /// An input file name is not valid UTF-8.
    #[error("input file name is not valid UTF-8: {0:?}")]
    NonUtf8FileName(PathBuf),

    /// Error reading or decoding an image file.
    #[error(transparent)]
    Image(#[from] IoError),

    /// Error operating on pixel buffers.
    #[error(transparent)]
    Pixel(#[from] ImageError),

    /// Error pairing color with depth.
    #[error(transparent)]
    Rgbd(#[from] RgbdError),

    /// Error packaging or writing the dataset record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// A matched rgb/depth file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePair {
    /// The color capture file.
    pub rgb: PathBuf,
    /// The depth capture file.
    pub depth: PathBuf,
}

/// Counts reported at batch completion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pairs converted into dataset records.
    pub processed: usize,
    /// Pairs skipped after a per-pair failure.
    pub skipped: usize,
}

// list the capture files with the given prefix, sorted by file name
fn list_prefixed(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, BatchError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

// strip the capture prefix from a file stem to get the shared identifier
fn capture_identifier(path: &Path, prefix: &str) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix(prefix).map(|id| id.to_string())
}

fn pair_by_identifier(rgb_files: Vec<PathBuf>, depth_files: Vec<PathBuf>) -> Vec<ImagePair> {
    let mut depth_by_id: HashMap<String, PathBuf> = depth_files
        .into_iter()
        .filter_map(|path| capture_identifier(&path, DEPTH_PREFIX).map(|id| (id, path)))
        .collect();

    let mut pairs = Vec::new();
    for rgb in rgb_files {
        let Some(id) = capture_identifier(&rgb, RGB_PREFIX) else {
            continue;
        };
        match depth_by_id.remove(&id) {
            Some(depth) => pairs.push(ImagePair { rgb, depth }),
            None => log::warn!("No depth capture matches {:?}", rgb),
        }
    }

    pairs
}

/// Discover rgb/depth capture pairs in the input directory.
///
/// Files whose names start with `rgb` are color captures and files starting
/// with `depth` are depth captures; both listings are sorted by file name
/// before pairing.
pub fn discover_pairs(
    dir: &Path,
    strategy: PairingStrategy,
) -> Result<Vec<ImagePair>, BatchError> {
    let rgb_files = list_prefixed(dir, RGB_PREFIX)?;
    let depth_files = list_prefixed(dir, DEPTH_PREFIX)?;

    let pairs = match strategy {
        PairingStrategy::Positional => rgb_files
            .into_iter()
            .zip(depth_files)
            .map(|(rgb, depth)| ImagePair { rgb, depth })
            .collect(),
        PairingStrategy::Identifier => pair_by_identifier(rgb_files, depth_files),
    };

    Ok(pairs)
}

// convert one rgb/depth pair into a dataset record file
fn process_pair(
    pair: &ImagePair,
    intrinsic: &CameraIntrinsic,
    output_dir: &Path,
) -> Result<PathBuf, BatchError> {
    // color captures are persisted in BGR channel order
    let bgr = read_image_png_rgb8(&pair.rgb)?;
    let mut rgb = Image::from_size_val(bgr.size(), 0)?;
    rgb_from_bgr(&bgr, &mut rgb)?;

    // depth captures are unsigned 16-bit millimeters
    let depth_mm = read_image_png_mono16(&pair.depth)?;
    let mut depth_m = Image::from_size_val(depth_mm.size(), 0.0f64)?;
    ops::cast_and_scale(&depth_mm, &mut depth_m, 1.0 / 1000.0)?;

    let frame = RgbdImage::new(rgb, depth_m)?;
    let cloud = pointcloud_from_rgbd(&frame, intrinsic);
    let record = DatasetRecord::from_pointcloud(&cloud)?;

    let rgb_name = pair
        .rgb
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| BatchError::NonUtf8FileName(pair.rgb.clone()))?;
    let record_path = output_dir.join(format!("{rgb_name}_data.{RECORD_EXTENSION}"));
    write_record_binary(&record_path, &record)?;

    Ok(record_path)
}

/// Convert every discovered pair into a dataset record.
///
/// Per-pair failures are logged and skipped so that a preparation run yields
/// as many valid records as possible; only directory listing failures abort
/// the batch.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    intrinsic: &CameraIntrinsic,
    strategy: PairingStrategy,
) -> Result<BatchSummary, BatchError> {
    let pairs = discover_pairs(input_dir, strategy)?;
    log::info!("Discovered {} capture pairs in {:?}", pairs.len(), input_dir);

    let mut summary = BatchSummary::default();
    for pair in &pairs {
        match process_pair(pair, intrinsic, output_dir) {
            Ok(record_path) => {
                log::info!("Processed {:?} -> {:?}", pair.rgb, record_path);
                summary.processed += 1;
            }
            Err(err) => {
                log::warn!("Skipping {:?}: {}", pair.rgb, err);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
