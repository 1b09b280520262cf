//! COCO JSON reader and writer.
//!
//! The writer goes through a temporary file in the destination directory and
//! renames it into place, so a failed run never leaves a truncated
//! annotation file behind.
//!
//! # Ordering
//!
//! Records are written in the order they were read. Downstream consumers may
//! index images and annotations ordinally, so the writer must not reorder.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::model::CocoDataset;
use crate::error::LetterboxError;

/// Reads a dataset from a COCO JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read, or if a record is missing a
/// required field (`id`, `image_id`, `bbox`, ...).
pub fn read_coco_json(path: &Path) -> Result<CocoDataset, LetterboxError> {
    let file = File::open(path).map_err(LetterboxError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LetterboxError::CocoJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a dataset to a COCO JSON file.
///
/// The content is first written to `<path>.tmp` and renamed into place once
/// complete.
pub fn write_coco_json(path: &Path, dataset: &CocoDataset) -> Result<(), LetterboxError> {
    let tmp = tmp_path(path);

    let file = File::create(&tmp).map_err(LetterboxError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, dataset).map_err(|source| {
        LetterboxError::CocoJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(LetterboxError::Io)?;

    fs::rename(&tmp, path).map_err(LetterboxError::Io)
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Reads a dataset from a COCO JSON string.
///
/// Useful for testing without file I/O.
pub fn from_coco_str(json: &str) -> Result<CocoDataset, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a dataset from a COCO JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation overhead.
pub fn from_coco_slice(bytes: &[u8]) -> Result<CocoDataset, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a dataset to a COCO JSON string.
///
/// Useful for testing without file I/O.
pub fn to_coco_string(dataset: &CocoDataset) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(dataset)
}
