//! Student batches: a registration-number range plus exclusions.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// One cohort of students eligible for an exam.
///
/// `start_number` and `end_number` are kept as text because the digit
/// count of `start_number` decides the zero-padding width of every
/// generated registration number (`"0001"` pads to four digits, `"1"`
/// doesn't pad at all). JSON numbers are accepted and read as their
/// decimal text.
///
/// A batch whose bounds are missing, non-numeric, or reversed is not an
/// error: it simply has no students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Opaque identifier, stable across recomputation.
    pub id: String,

    /// Non-numeric leading part of every registration number.
    #[serde(default)]
    pub registration_prefix: String,

    #[serde(default, deserialize_with = "number_text")]
    pub start_number: String,

    #[serde(default, deserialize_with = "number_text")]
    pub end_number: String,

    /// Fully formed registration numbers removed from the roster.
    #[serde(default)]
    pub excluded_ids: BTreeSet<String>,
}

impl Batch {
    pub fn new(
        id: impl Into<String>,
        registration_prefix: impl Into<String>,
        start_number: impl Into<String>,
        end_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            registration_prefix: registration_prefix.into(),
            start_number: start_number.into(),
            end_number: end_number.into(),
            excluded_ids: BTreeSet::new(),
        }
    }

    /// Adds registration numbers to the exclusion set.
    pub fn with_exclusions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Parses the numeric bounds.
    ///
    /// Returns `None` when either bound is absent or non-numeric, or when
    /// `end < start`.
    pub fn range(&self) -> Option<RegistrationRange> {
        let start_text = self.start_number.trim();
        let start = parse_unsigned(start_text)?;
        let end = parse_unsigned(self.end_number.trim())?;
        if end < start {
            return None;
        }
        Some(RegistrationRange {
            start,
            end,
            width: start_text.len(),
        })
    }

    /// Formats the registration number for `number` in this batch's
    /// prefix and padding width.
    pub fn registration_number(&self, number: u64, width: usize) -> String {
        format!("{}{:0width$}", self.registration_prefix, number)
    }

    /// Inverse of [`registration_number`](Self::registration_number):
    /// the number that formats to exactly `registration_number` at
    /// `width`, if any.
    pub fn number_of(&self, registration_number: &str, width: usize) -> Option<u64> {
        let digits = registration_number.strip_prefix(self.registration_prefix.as_str())?;
        let number = parse_unsigned(digits)?;
        (self.registration_number(number, width) == registration_number).then_some(number)
    }

    pub fn is_excluded(&self, registration_number: &str) -> bool {
        self.excluded_ids.contains(registration_number)
    }
}

/// Inclusive numeric bounds of a well-formed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationRange {
    pub start: u64,
    pub end: u64,
    /// Zero-padding width, taken from the digit count of the start text.
    pub width: usize,
}

impl RegistrationRange {
    /// Number of registration numbers in the range, before exclusions.
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    pub fn numbers(&self) -> std::ops::RangeInclusive<u64> {
        self.start..=self.end
    }
}

fn parse_unsigned(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Accepts a string, an integer, or `null` for a range bound. Negative
/// numbers survive as text and are rejected later by [`Batch::range`].
/// Any other value (a float, a bool, an object) becomes empty text, which
/// leaves the batch without students instead of failing the whole config.
fn number_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
        Signed(i64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Number(n)) => n.to_string(),
        Some(Raw::Signed(n)) => n.to_string(),
        Some(Raw::Other(_)) | None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_takes_width_from_start_text() {
        let batch = Batch::new("b", "20CS", "0001", "120");
        let range = batch.range().unwrap();
        assert_eq!(range.start, 1);
        assert_eq!(range.end, 120);
        assert_eq!(range.width, 4);
        assert_eq!(range.len(), 120);
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        assert_eq!(Batch::new("b", "X", "10", "9").range(), None);
    }

    #[test]
    fn test_range_rejects_non_numeric_and_missing_bounds() {
        assert_eq!(Batch::new("b", "X", "abc", "9").range(), None);
        assert_eq!(Batch::new("b", "X", "1", "").range(), None);
        assert_eq!(Batch::new("b", "X", "-1", "4").range(), None);
    }

    #[test]
    fn test_range_single_student() {
        let range = Batch::new("b", "X", "7", "7").range().unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_registration_number_pads_to_width() {
        let batch = Batch::new("b", "20CS", "0001", "0004");
        assert_eq!(batch.registration_number(2, 4), "20CS0002");
        assert_eq!(batch.registration_number(12345, 4), "20CS12345");
        assert_eq!(batch.registration_number(3, 1), "20CS3");
    }

    #[test]
    fn test_with_exclusions() {
        let batch = Batch::new("b", "20CS", "0001", "0004").with_exclusions(["20CS0002"]);
        assert!(batch.is_excluded("20CS0002"));
        assert!(!batch.is_excluded("20CS0001"));
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        let json = r#"{ "id": "b1", "registration_prefix": "20CS",
                        "start_number": "0001", "end_number": 40 }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.start_number, "0001");
        assert_eq!(batch.end_number, "40");
        assert!(batch.excluded_ids.is_empty());
    }

    #[test]
    fn test_deserialize_missing_bounds_yields_empty_range() {
        let batch: Batch = serde_json::from_str(r#"{ "id": "b1", "end_number": null }"#).unwrap();
        assert_eq!(batch.start_number, "");
        assert_eq!(batch.range(), None);
    }

    #[test]
    fn test_deserialize_float_or_bool_bound_yields_empty_range() {
        let json = r#"{ "id": "b1", "start_number": 1.5, "end_number": true }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.start_number, "");
        assert_eq!(batch.end_number, "");
        assert_eq!(batch.range(), None);
    }

    #[test]
    fn test_number_of_reverses_registration_number() {
        let batch = Batch::new("b", "20CS", "0001", "0100");
        assert_eq!(batch.number_of("20CS0042", 4), Some(42));
        assert_eq!(batch.number_of("20CS12345", 4), Some(12345));
        // Same number, wrong padding: not an identifier this batch generates.
        assert_eq!(batch.number_of("20CS042", 4), None);
        assert_eq!(batch.number_of("21CS0042", 4), None);
        assert_eq!(batch.number_of("20CS", 4), None);
    }
}
