use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{InspectorError, Result};

pub type ComparisonId = i64;

/// Creation payload for `POST /api/comparisons/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComparison {
    pub model_a: String,
    pub prompt_a: String,
    pub model_b: String,
    pub prompt_b: String,
}

impl NewComparison {
    pub fn new(
        model_a: impl Into<String>,
        prompt_a: impl Into<String>,
        model_b: impl Into<String>,
        prompt_b: impl Into<String>,
    ) -> Self {
        Self {
            model_a: model_a.into(),
            prompt_a: prompt_a.into(),
            model_b: model_b.into(),
            prompt_b: prompt_b.into(),
        }
    }

    /// Names of the fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("model_a", &self.model_a),
            ("prompt_a", &self.prompt_a),
            ("model_b", &self.model_b),
            ("prompt_b", &self.prompt_b),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InspectorError::Validation(missing.join(", ")))
        }
    }
}

/// Line-level diff summary between the two outputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub added_lines: u32,
    pub removed_lines: u32,
    pub changed_lines: u32,
    pub total_changes: u32,
}

impl Analysis {
    pub fn from_counts(added_lines: u32, removed_lines: u32, changed_lines: u32) -> Self {
        Self {
            added_lines,
            removed_lines,
            changed_lines,
            total_changes: added_lines + removed_lines + changed_lines,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.total_changes == 0
    }
}

/// A persisted comparison, as returned by the comparison service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub id: ComparisonId,
    pub model_a: String,
    pub prompt_a: String,
    pub model_b: String,
    pub prompt_b: String,
    pub output_a: String,
    pub output_b: String,
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_analysis",
        skip_serializing_if = "Option::is_none"
    )]
    pub analysis: Option<Analysis>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Comparison {
    pub fn request(&self) -> NewComparison {
        NewComparison::new(
            self.model_a.clone(),
            self.prompt_a.clone(),
            self.model_b.clone(),
            self.prompt_b.clone(),
        )
    }
}

// Services are free to put other keys in `analysis`; anything that is not a
// line-count summary is treated as absent rather than failing the record.
fn lenient_analysis<'de, D>(deserializer: D) -> std::result::Result<Option<Analysis>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// RFC 3339 timestamps; naive ISO timestamps are read as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()),
        }
    }

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const RECORD: &str = r#"{
        "id": 1,
        "model_a": "gpt-4",
        "prompt_a": "hello",
        "model_b": "gpt-3.5-turbo",
        "prompt_b": "hello",
        "output_a": "Hi there",
        "output_b": "Hello",
        "similarity_score": 0.42,
        "created_at": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_deserialize_record_without_analysis() {
        let c: Comparison = serde_json::from_str(RECORD).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.output_a, "Hi there");
        assert_eq!(c.similarity_score, Some(0.42));
        assert_eq!(c.analysis, None);
        assert_eq!(c.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_deserialize_null_score_and_analysis() {
        let json = r#"{
            "id": 7, "model_a": "a", "prompt_a": "p", "model_b": "b", "prompt_b": "q",
            "output_a": "x", "output_b": "y", "similarity_score": null,
            "analysis": {"added_lines": 3, "removed_lines": 1, "changed_lines": 2, "total_changes": 6},
            "created_at": "2024-03-05T10:20:30.123456"
        }"#;
        let c: Comparison = serde_json::from_str(json).unwrap();
        assert_eq!(c.similarity_score, None);
        assert_eq!(c.analysis, Some(Analysis::from_counts(3, 1, 2)));
        assert_eq!(c.created_at.timestamp(), 1_709_634_030);
    }

    #[test]
    fn test_foreign_analysis_shape_is_ignored() {
        let json = r#"{
            "id": 2, "model_a": "a", "prompt_a": "p", "model_b": "b", "prompt_b": "q",
            "output_a": "x", "output_b": "y",
            "analysis": {"length_diff": 4, "word_count_diff": 1, "similarity": 0.3},
            "created_at": "2024-01-01T00:00:00+02:00"
        }"#;
        let c: Comparison = serde_json::from_str(json).unwrap();
        assert_eq!(c.analysis, None);
        assert_eq!(c.created_at, Utc.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_serialize_uses_rfc3339() {
        let c: Comparison = serde_json::from_str(RECORD).unwrap();
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
        assert!(value.get("analysis").is_none());
    }

    #[test]
    fn test_missing_fields_treats_whitespace_as_empty() {
        let req = NewComparison::new("gpt-4", "  ", "", "hello");
        assert_eq!(req.missing_fields(), vec!["prompt_a", "model_b"]);
        assert_eq!(
            req.validate(),
            Err(InspectorError::Validation("prompt_a, model_b".to_string()))
        );
        assert!(NewComparison::new("a", "b", "c", "d").validate().is_ok());
    }
}
