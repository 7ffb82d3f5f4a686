use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::pointcloud::PointCloud;

/// File extension used for persisted dataset records.
pub const RECORD_EXTENSION: &str = "bin";

/// Error types for dataset record persistence.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Error reading or writing the record file
    #[error("error reading or writing the record file")]
    Io(#[from] std::io::Error),

    /// Error encoding the record
    #[error("error encoding the record")]
    Encode(#[from] bincode::error::EncodeError),

    /// Error decoding the record
    #[error("error decoding the record")]
    Decode(#[from] bincode::error::DecodeError),

    /// The point cloud carries no color data.
    #[error("point cloud carries no colors")]
    MissingColors,
}

/// A persisted dataset record consumed by downstream perception models.
///
/// `label` is an all-zero placeholder until a segmentation stage fills it
/// in: the *unlabeled* sentinel. Consumers must not read it as an empty
/// object mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct DatasetRecord {
    /// RGB pixels, HxWx3 row-major.
    pub rgb: Vec<u8>,
    /// Camera-frame coordinates in meters, HxWx3 row-major.
    pub xyz: Vec<f64>,
    /// Per-pixel segmentation labels, HxW row-major.
    pub label: Vec<f32>,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
}

impl DatasetRecord {
    /// Package a dense point cloud and its aligned colors into a record.
    ///
    /// # Errors
    ///
    /// Fails with [`RecordError::MissingColors`] if the cloud does not carry
    /// per-point colors.
    pub fn from_pointcloud(cloud: &PointCloud) -> Result<Self, RecordError> {
        let colors = cloud.colors().ok_or(RecordError::MissingColors)?;

        Ok(Self {
            rgb: colors.iter().flatten().copied().collect(),
            xyz: cloud.points().iter().flatten().copied().collect(),
            label: vec![0.0; cloud.len()],
            width: cloud.width(),
            height: cloud.height(),
        })
    }
}

/// Write a dataset record to a binary file.
///
/// # Arguments
///
/// * `path` - The path to the record file.
/// * `record` - The record to persist.
pub fn write_record_binary(path: impl AsRef<Path>, record: &DatasetRecord) -> Result<(), RecordError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::encode_into_std_write(record, &mut writer, bincode::config::standard())?;
    writer.flush()?;

    Ok(())
}

/// Read a dataset record from a binary file.
///
/// # Arguments
///
/// * `path` - The path to the record file.
pub fn read_record_binary(path: impl AsRef<Path>) -> Result<DatasetRecord, RecordError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let record = bincode::decode_from_std_read(&mut reader, bincode::config::standard())?;

    Ok(record)
}
