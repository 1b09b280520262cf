//! Orchestration of a full dataset resize run.
//!
//! Per image: decode, plan, resample, write the mirrored output file, then
//! patch that image's annotations and recorded dimensions back into the
//! dataset through the index. Each image owns a disjoint set of record slots,
//! so the patch pass never aliases across images. Processing is strictly
//! sequential and fail-fast: the first error aborts the run.

use std::fs;
use std::path::PathBuf;

use image::imageops::FilterType;

use crate::coco::CocoDataset;
use crate::error::LetterboxError;
use crate::geometry::{self, BBox, PadPolicy};
use crate::index::AnnotationIndex;
use crate::raster;

/// What happens to mapped boxes that fall outside the target canvas.
///
/// Aspect-ratio rounding can push a box at the image edge slightly out of
/// bounds. This mirrors the CLI's `--clamp` flag but is decoupled from clap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxPolicy {
    /// Leave mapped coordinates as computed. The historical behavior.
    #[default]
    Keep,
    /// Clamp coordinates into [0, target_w] x [0, target_h]. A box that
    /// becomes zero-area is kept and reported, never dropped.
    Clamp,
}

/// Options for a resize run.
#[derive(Clone, Debug)]
pub struct ResizeOptions {
    /// Directory the annotation file's image paths are relative to.
    pub images_dir: PathBuf,

    /// Root of the output image tree, mirroring the input's relative paths.
    pub output_images_dir: PathBuf,

    pub target_w: u32,
    pub target_h: u32,

    pub pad: PadPolicy,
    pub boxes: BoxPolicy,

    /// Resampling filter for the pixel plane.
    pub filter: FilterType,

    /// Collapse every annotation's category to this id, turning a multi-class
    /// dataset into a single-class one. `None` keeps source categories.
    pub collapse_category: Option<u64>,
}

/// Counts reported after a successful run.
#[derive(Clone, Copy, Debug)]
pub struct ResizeSummary {
    pub images: usize,
    pub annotations: usize,
}

/// Resizes every image and rewrites every bounding box in `dataset`.
///
/// The input is checked in full before any pixel is touched or any file
/// written: referential integrity (via [`AnnotationIndex::build`]), recorded
/// dimensions, and presence of every referenced file on disk.
pub fn resize_dataset(
    dataset: &mut CocoDataset,
    opts: &ResizeOptions,
) -> Result<ResizeSummary, LetterboxError> {
    if opts.target_w == 0 || opts.target_h == 0 {
        return Err(LetterboxError::InvalidDimension {
            context: "target canvas".to_string(),
            width: i64::from(opts.target_w),
            height: i64::from(opts.target_h),
        });
    }

    let index = AnnotationIndex::build(dataset)?;
    preflight(dataset, opts)?;

    for i in 0..dataset.images.len() {
        let (image_id, file_name, input_w, input_h) = {
            let image = &dataset.images[i];
            (image.id, image.file_name.clone(), image.width, image.height)
        };

        println!(
            "Resizing {} ({}x{} -> {}x{})...",
            file_name, input_w, input_h, opts.target_w, opts.target_h
        );

        let plan = geometry::plan(input_w, input_h, opts.target_w, opts.target_h, opts.pad)?;

        let src_path = opts.images_dir.join(&file_name);
        let decoded = image::open(&src_path).map_err(|source| LetterboxError::ImageDecode {
            path: src_path.clone(),
            source,
        })?;

        let canvas = raster::letterbox_image(
            &decoded,
            &plan,
            opts.target_w,
            opts.target_h,
            opts.filter,
        );

        let out_path = opts.output_images_dir.join(&file_name);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(LetterboxError::Io)?;
        }
        canvas
            .save(&out_path)
            .map_err(|source| LetterboxError::ImageEncode {
                path: out_path.clone(),
                source,
            })?;

        // Compute this image's box patches from the immutable view, then
        // write them back through the index positions.
        let mut patches = Vec::new();
        for &pos in index.annotations_for(image_id) {
            let annotation = &dataset.annotations[pos];
            let mapped = geometry::map_box(&BBox::from_xywh(annotation.bbox), &plan);
            let mapped = match opts.boxes {
                BoxPolicy::Keep => mapped,
                BoxPolicy::Clamp => {
                    let clamped =
                        mapped.clamped(f64::from(opts.target_w), f64::from(opts.target_h));
                    if clamped.area() == 0.0 && mapped.area() > 0.0 {
                        eprintln!(
                            "warning: annotation {} clamped to zero area on image {}",
                            annotation.id, image_id
                        );
                    }
                    clamped
                }
            };
            patches.push((pos, mapped.to_xywh()));
        }
        for (pos, bbox) in patches {
            dataset.annotations[pos].bbox = bbox;
        }

        let image = &mut dataset.images[i];
        image.width = opts.target_w;
        image.height = opts.target_h;
    }

    if let Some(category_id) = opts.collapse_category {
        collapse_categories(dataset, category_id);
    }

    Ok(ResizeSummary {
        images: dataset.images.len(),
        annotations: dataset.annotations.len(),
    })
}

/// Collapses every annotation's category to a single fixed id.
///
/// An explicit step rather than a side effect of index construction, so
/// multi-class callers can skip it.
pub fn collapse_categories(dataset: &mut CocoDataset, category_id: u64) {
    for annotation in &mut dataset.annotations {
        annotation.category_id = category_id;
    }
}

/// Verifies every image record before the run starts: positive recorded
/// dimensions and a readable file on disk. Probed on-disk dimensions that
/// disagree with the record only warn; the record stays authoritative for
/// geometry, and the raster is resized to the plan's dimensions either way,
/// so images and boxes remain mutually consistent.
fn preflight(dataset: &CocoDataset, opts: &ResizeOptions) -> Result<(), LetterboxError> {
    for image in &dataset.images {
        if image.width == 0 || image.height == 0 {
            return Err(LetterboxError::InvalidDimension {
                context: format!("image {}", image.id),
                width: i64::from(image.width),
                height: i64::from(image.height),
            });
        }

        let path = opts.images_dir.join(&image.file_name);
        if !path.is_file() {
            return Err(LetterboxError::MissingImage {
                image_id: image.id,
                path,
            });
        }

        if let Ok(size) = imagesize::size(&path) {
            if (size.width, size.height) != (image.width as usize, image.height as usize) {
                eprintln!(
                    "warning: image {} records {}x{} but {} is {}x{}",
                    image.id,
                    image.width,
                    image.height,
                    path.display(),
                    size.width,
                    size.height
                );
            }
        }
    }
    Ok(())
}
