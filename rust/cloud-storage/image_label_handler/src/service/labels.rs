use std::str::FromStr;

use models_image_analysis::{CONFIDENCE_SCALE, DetectedLabel, Label};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Percent range a service confidence has to fall in
const CONFIDENCE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=100.0;

#[derive(Debug, Error)]
pub enum NormalizeErr {
    #[error("label {name} has a confidence that cannot be stored: {confidence}")]
    UnrepresentableConfidence { name: String, confidence: f32 },
}

/// Converts the service labels into their stored form, keeping their order.
/// Duplicate names are kept as they are.
pub fn normalize_labels(labels: Vec<DetectedLabel>) -> Result<Vec<Label>, NormalizeErr> {
    labels.into_iter().map(normalize_label).collect()
}

fn normalize_label(label: DetectedLabel) -> Result<Label, NormalizeErr> {
    match round_confidence(label.confidence) {
        Some(confidence) => Ok(Label {
            name: label.name,
            confidence,
        }),
        None => Err(NormalizeErr::UnrepresentableConfidence {
            name: label.name,
            confidence: label.confidence,
        }),
    }
}

/// Rounds half away from zero to [CONFIDENCE_SCALE] digits, starting from the
/// shortest decimal text of the float so `97.345` rounds to `97.35`.
/// The result always carries exactly [CONFIDENCE_SCALE] fractional digits.
/// Confidences outside of 0 to 100 are not accepted.
pub fn round_confidence(confidence: f32) -> Option<Decimal> {
    if !CONFIDENCE_RANGE.contains(&confidence) {
        return None;
    }

    let exact = Decimal::from_str(&confidence.to_string()).ok()?;
    let mut rounded =
        exact.round_dp_with_strategy(CONFIDENCE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CONFIDENCE_SCALE);
    // -0.0 comes through as a negative zero
    rounded.set_sign_positive(true);

    Some(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidences_have_two_fractional_digits() {
        let cases = [
            (97.345, "97.35"),
            (80.1, "80.10"),
            (75.0, "75.00"),
            (88.124, "88.12"),
            (99.99999, "100.00"),
            (76.555, "76.56"),
            (0.005, "0.01"),
            (100.0, "100.00"),
        ];

        for (input, expected) in cases {
            let rounded = round_confidence(input).unwrap();
            assert_eq!(rounded.scale(), 2, "input {input}");
            assert_eq!(rounded.to_string(), expected, "input {input}");
        }
    }

    #[test]
    fn non_finite_confidence_is_rejected() {
        assert_eq!(round_confidence(f32::NAN), None);
        assert_eq!(round_confidence(f32::INFINITY), None);

        let err = normalize_labels(vec![DetectedLabel::new("Cat", f32::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            NormalizeErr::UnrepresentableConfidence { ref name, .. } if name == "Cat"
        ));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        assert_eq!(round_confidence(150.0), None);
        assert_eq!(round_confidence(100.01), None);
        assert_eq!(round_confidence(-5.0), None);
        assert_eq!(round_confidence(0.0).unwrap().to_string(), "0.00");
        assert_eq!(round_confidence(-0.0).unwrap().to_string(), "0.00");

        let err = normalize_labels(vec![
            DetectedLabel::new("Cat", 97.0),
            DetectedLabel::new("Over", 150.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            NormalizeErr::UnrepresentableConfidence { ref name, .. } if name == "Over"
        ));
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let labels = normalize_labels(vec![
            DetectedLabel::new("Cat", 97.345),
            DetectedLabel::new("Animal", 80.1),
            DetectedLabel::new("Pet", 91.0),
            DetectedLabel::new("Cat", 77.777),
        ])
        .unwrap();

        let flattened: Vec<(&str, String)> = labels
            .iter()
            .map(|l| (l.name.as_str(), l.confidence.to_string()))
            .collect();

        assert_eq!(
            flattened,
            vec![
                ("Cat", "97.35".to_string()),
                ("Animal", "80.10".to_string()),
                ("Pet", "91.00".to_string()),
                ("Cat", "77.78".to_string()),
            ]
        );
    }

    #[test]
    fn empty_labels_normalize_to_empty() {
        assert!(normalize_labels(vec![]).unwrap().is_empty());
    }
}
