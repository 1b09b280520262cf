//! Positional lookup structures over a dataset.

use std::collections::{HashMap, HashSet};

use crate::coco::CocoDataset;
use crate::error::LetterboxError;

/// Index from record ids to storage positions.
///
/// Built once before any processing. `by_image` lists each image's annotation
/// positions in file order; `by_annotation` gives the exact storage slot of an
/// annotation so results can be written back in place without O(n) scans.
#[derive(Debug)]
pub struct AnnotationIndex {
    by_image: HashMap<u64, Vec<usize>>,
    by_annotation: HashMap<u64, usize>,
}

impl AnnotationIndex {
    /// Builds the index, validating referential integrity on the way.
    ///
    /// # Errors
    /// - `DanglingAnnotation` if an annotation references an image id with no
    ///   image record.
    /// - `DuplicateImageId` / `DuplicateAnnotationId` on repeated ids, which
    ///   would corrupt positional writeback.
    pub fn build(dataset: &CocoDataset) -> Result<Self, LetterboxError> {
        let mut image_ids = HashSet::with_capacity(dataset.images.len());
        for image in &dataset.images {
            if !image_ids.insert(image.id) {
                return Err(LetterboxError::DuplicateImageId { image_id: image.id });
            }
        }

        let mut by_image: HashMap<u64, Vec<usize>> = HashMap::with_capacity(dataset.images.len());
        let mut by_annotation = HashMap::with_capacity(dataset.annotations.len());

        for (pos, annotation) in dataset.annotations.iter().enumerate() {
            if !image_ids.contains(&annotation.image_id) {
                return Err(LetterboxError::DanglingAnnotation {
                    annotation_id: annotation.id,
                    image_id: annotation.image_id,
                });
            }
            if by_annotation.insert(annotation.id, pos).is_some() {
                return Err(LetterboxError::DuplicateAnnotationId {
                    annotation_id: annotation.id,
                });
            }
            by_image.entry(annotation.image_id).or_default().push(pos);
        }

        Ok(Self {
            by_image,
            by_annotation,
        })
    }

    /// Positions of an image's annotations, in file order. Empty for an image
    /// with no annotations.
    pub fn annotations_for(&self, image_id: u64) -> &[usize] {
        self.by_image
            .get(&image_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Storage slot of a single annotation.
    pub fn position_of(&self, annotation_id: u64) -> Option<usize> {
        self.by_annotation.get(&annotation_id).copied()
    }
}
