//! Check report types for structured issue reporting.

use std::fmt;

/// The result of checking a dataset.
///
/// Contains all issues found, categorized by severity.
#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    /// All issues found during the check.
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Check passed: no issues found");
        }

        writeln!(
            f,
            "Check completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single check issue (error or warning).
#[derive(Clone, Debug)]
pub struct CheckIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Context about where the issue occurred.
    pub context: IssueContext,
}

impl CheckIssue {
    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            context,
        }
    }
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// The severity of a check issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Doesn't stop a resize run but may indicate problems.
    Warning,
    /// Invalid or corrupt data; a resize run would refuse it.
    Error,
}

/// A stable code identifying the type of issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// Multiple images have the same ID.
    DuplicateImageId,
    /// Multiple annotations have the same ID.
    DuplicateAnnotationId,
    /// An annotation references a non-existent image.
    DanglingAnnotation,

    /// An image has zero width or height recorded.
    InvalidImageDimensions,
    /// An image has an empty filename.
    EmptyFileName,
    /// A referenced image file does not exist under the images directory.
    MissingImageFile,
    /// The on-disk image dimensions disagree with the record.
    DimensionMismatch,

    /// A bounding box has non-finite coordinates (NaN or Infinity).
    BBoxNotFinite,
    /// A bounding box has incorrect ordering (min > max).
    InvalidBBoxOrdering,
    /// A bounding box extends outside the image bounds.
    BBoxOutOfBounds,
    /// A bounding box has zero or negative area.
    InvalidBBoxArea,
}

/// Context about where an issue occurred.
#[derive(Clone, Debug)]
pub enum IssueContext {
    /// Issue with the dataset as a whole.
    Dataset,
    /// Issue with a specific image.
    Image { id: u64 },
    /// Issue with a specific annotation.
    Annotation { id: u64 },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Dataset => write!(f, "dataset"),
            IssueContext::Image { id } => write!(f, "image {}", id),
            IssueContext::Annotation { id } => write!(f, "annotation {}", id),
        }
    }
}
