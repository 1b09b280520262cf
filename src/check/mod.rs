//! Dataset integrity checks.
//!
//! The same conditions that abort a resize run (duplicate ids, dangling
//! annotations, unreadable image files) plus geometric data-quality checks,
//! reported all at once instead of failing on the first. Useful before
//! committing to a long batch run.

mod report;

pub use report::{CheckIssue, CheckReport, IssueCode, IssueContext, Severity};

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::coco::CocoDataset;
use crate::geometry::BBox;

/// Options for check behavior.
#[derive(Clone, Debug, Default)]
pub struct CheckOptions {
    /// If true, treat warnings as errors when deciding the exit status.
    pub strict: bool,

    /// When set, verify that each `file_name` exists under this directory and
    /// that on-disk dimensions match the record.
    pub images_dir: Option<PathBuf>,
}

/// Checks a dataset and returns a report of all issues found.
pub fn check_dataset(dataset: &CocoDataset, opts: &CheckOptions) -> CheckReport {
    let mut report = CheckReport::new();

    let image_ids: HashSet<u64> = dataset.images.iter().map(|i| i.id).collect();

    check_images(dataset, opts, &mut report);
    check_annotations(dataset, &image_ids, &mut report);

    report
}

fn check_images(dataset: &CocoDataset, opts: &CheckOptions, report: &mut CheckReport) {
    let mut seen_ids: HashMap<u64, usize> = HashMap::new();

    for (idx, image) in dataset.images.iter().enumerate() {
        let context = IssueContext::Image { id: image.id };

        if let Some(first_idx) = seen_ids.get(&image.id) {
            report.add(CheckIssue::error(
                IssueCode::DuplicateImageId,
                format!(
                    "Duplicate image ID {} (first seen at index {})",
                    image.id, first_idx
                ),
                context.clone(),
            ));
        } else {
            seen_ids.insert(image.id, idx);
        }

        if image.width == 0 || image.height == 0 {
            report.add(CheckIssue::error(
                IssueCode::InvalidImageDimensions,
                format!(
                    "Invalid dimensions {}x{} (must be positive)",
                    image.width, image.height
                ),
                context.clone(),
            ));
        }

        if image.file_name.is_empty() {
            report.add(CheckIssue::warning(
                IssueCode::EmptyFileName,
                "Empty filename",
                context.clone(),
            ));
            continue;
        }

        if let Some(images_dir) = &opts.images_dir {
            let path = images_dir.join(&image.file_name);
            if !path.is_file() {
                report.add(CheckIssue::error(
                    IssueCode::MissingImageFile,
                    format!("File not found: {}", path.display()),
                    context.clone(),
                ));
            } else if let Ok(size) = imagesize::size(&path) {
                if (size.width, size.height) != (image.width as usize, image.height as usize) {
                    report.add(CheckIssue::warning(
                        IssueCode::DimensionMismatch,
                        format!(
                            "Record says {}x{} but file is {}x{}",
                            image.width, image.height, size.width, size.height
                        ),
                        context,
                    ));
                }
            }
        }
    }
}

fn check_annotations(dataset: &CocoDataset, image_ids: &HashSet<u64>, report: &mut CheckReport) {
    let mut seen_ids: HashMap<u64, usize> = HashMap::new();

    // Image dimension lookup for bounds checking.
    let image_dims: HashMap<u64, (u32, u32)> = dataset
        .images
        .iter()
        .map(|i| (i.id, (i.width, i.height)))
        .collect();

    for (idx, annotation) in dataset.annotations.iter().enumerate() {
        let context = IssueContext::Annotation { id: annotation.id };

        if let Some(first_idx) = seen_ids.get(&annotation.id) {
            report.add(CheckIssue::error(
                IssueCode::DuplicateAnnotationId,
                format!(
                    "Duplicate annotation ID {} (first seen at index {})",
                    annotation.id, first_idx
                ),
                context.clone(),
            ));
        } else {
            seen_ids.insert(annotation.id, idx);
        }

        if !image_ids.contains(&annotation.image_id) {
            report.add(CheckIssue::error(
                IssueCode::DanglingAnnotation,
                format!("References non-existent image {}", annotation.image_id),
                context.clone(),
            ));
        }

        let bbox = BBox::from_xywh(annotation.bbox);

        if !bbox.is_finite() {
            report.add(CheckIssue::error(
                IssueCode::BBoxNotFinite,
                format!(
                    "Non-finite coordinates ({}, {}, {}, {})",
                    bbox.x1, bbox.y1, bbox.x2, bbox.y2
                ),
                context,
            ));
            continue;
        }

        if !bbox.is_ordered() {
            report.add(CheckIssue::error(
                IssueCode::InvalidBBoxOrdering,
                format!(
                    "Invalid ordering: ({}, {}) should be <= ({}, {})",
                    bbox.x1, bbox.y1, bbox.x2, bbox.y2
                ),
                context.clone(),
            ));
        }

        if bbox.area() <= 0.0 {
            report.add(CheckIssue::warning(
                IssueCode::InvalidBBoxArea,
                format!("Zero or negative area: {:.2}", bbox.area()),
                context.clone(),
            ));
        }

        if let Some((width, height)) = image_dims.get(&annotation.image_id) {
            let (w, h) = (f64::from(*width), f64::from(*height));
            // Small tolerance for floating point.
            let tolerance = 0.5;

            if bbox.x1 < -tolerance
                || bbox.y1 < -tolerance
                || bbox.x2 > w + tolerance
                || bbox.y2 > h + tolerance
            {
                report.add(CheckIssue::error(
                    IssueCode::BBoxOutOfBounds,
                    format!(
                        "Bounding box ({:.1}, {:.1}, {:.1}, {:.1}) extends outside image bounds (0, 0, {}, {})",
                        bbox.x1, bbox.y1, bbox.x2, bbox.y2, width, height
                    ),
                    context,
                ));
            }
        }
    }
}
