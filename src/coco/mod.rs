//! COCO JSON dataset model and file I/O.
//!
//! This module defines the on-disk schema the resizer consumes and produces.
//! Only the fields the pipeline touches are typed (image dimensions and
//! annotation bounding boxes); everything else in the file is carried as
//! opaque JSON and re-emitted verbatim, so downstream tooling that relies on
//! extra COCO fields keeps working.

pub mod io;
mod model;

pub use model::{CocoAnnotation, CocoDataset, CocoImage};
