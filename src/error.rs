use std::path::PathBuf;
use thiserror::Error;

/// The main error type for letterbox operations.
#[derive(Debug, Error)]
pub enum LetterboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse COCO JSON from {path}: {source}")]
    CocoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write COCO JSON to {path}: {source}")]
    CocoJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid dimensions {width}x{height} for {context} (must be positive)")]
    InvalidDimension {
        context: String,
        width: i64,
        height: i64,
    },

    #[error("Image {image_id} not found on disk at {path}")]
    MissingImage { image_id: u64, path: PathBuf },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Annotation {annotation_id} references non-existent image {image_id}")]
    DanglingAnnotation { annotation_id: u64, image_id: u64 },

    #[error("Duplicate image ID {image_id}")]
    DuplicateImageId { image_id: u64 },

    #[error("Duplicate annotation ID {annotation_id}")]
    DuplicateAnnotationId { annotation_id: u64 },

    #[error("Check failed with {error_count} error(s) and {warning_count} warning(s)")]
    CheckFailed {
        error_count: usize,
        warning_count: usize,
    },
}
