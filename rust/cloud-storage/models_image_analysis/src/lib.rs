#![deny(missing_docs)]
//! Shared models for the image analysis pipeline.
//!
//! [DetectedLabel] is what the labeling service hands back, [Label] is the
//! normalized persistence shape and [AnalysisRecord] is the unit written to
//! the record store, keyed by `ImageName`.

use rust_decimal::Decimal;

/// Labels requested per image
pub const MAX_LABELS: i32 = 10;

/// Lowest confidence (percent) a label must reach to be returned
pub const MIN_CONFIDENCE: f32 = 75.0;

/// Fractional digits kept on a stored confidence
pub const CONFIDENCE_SCALE: u32 = 2;

/// A raw label as returned by the labeling service
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabel {
    /// the label name, e.g. `Cat`
    pub name: String,
    /// confidence in the range 0-100
    pub confidence: f32,
}

impl DetectedLabel {
    /// create a new [DetectedLabel]
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// A normalized label, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// the label name, copied verbatim from the service
    pub name: String,
    /// exact decimal confidence with [CONFIDENCE_SCALE] fractional digits
    pub confidence: Decimal,
}

/// The persisted analysis of a single object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// decoded object key, the partition key of the record
    pub image_name: String,
    /// labels in the order the service returned them
    pub labels: Vec<Label>,
    /// the bucket the object was uploaded to
    pub bucket: String,
}
