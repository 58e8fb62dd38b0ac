use crate::error::{SpectrumError, SpectrumResult};
use crate::scorer::{AnalysisResult, InputPoint, SpectrumScorer};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Wire shape of an analysis request: `{"lines": [{"x": 85.8}, ...]}`.
///
/// Records are kept untyped here so a bad entry can be reported by index.
#[derive(Deserialize, Debug, Default)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub lines: Vec<Value>,
}

impl AnalysisRequest {
    pub fn into_points(self) -> SpectrumResult<Vec<InputPoint>> {
        points_from_records(&self.lines)
    }
}

pub fn points_from_records(records: &[Value]) -> SpectrumResult<Vec<InputPoint>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let obj = record.as_object().ok_or_else(|| SpectrumError::InvalidInput {
                index,
                reason: format!("expected an object with an 'x' field, got {}", record),
            })?;
            let x = obj.get("x").ok_or_else(|| SpectrumError::InvalidInput {
                index,
                reason: "missing 'x' field".to_string(),
            })?;
            let x = x.as_f64().ok_or_else(|| SpectrumError::InvalidInput {
                index,
                reason: format!("'x' must be a number, got {}", x),
            })?;
            Ok(InputPoint::new(x))
        })
        .collect()
}

/// Rejects non-finite coordinates before they reach the scorer.
pub fn points_from_values(values: &[f64]) -> SpectrumResult<Vec<InputPoint>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &x)| {
            if x.is_finite() {
                Ok(InputPoint::new(x))
            } else {
                Err(SpectrumError::InvalidInput {
                    index,
                    reason: format!("'x' must be finite, got {}", x),
                })
            }
        })
        .collect()
}

pub fn parse_request(json: &str) -> SpectrumResult<Vec<InputPoint>> {
    let request: AnalysisRequest = serde_json::from_str(json)?;
    request.into_points()
}

pub fn load_request<P: AsRef<Path>>(path: P) -> SpectrumResult<Vec<InputPoint>> {
    let content = fs::read_to_string(path)?;
    parse_request(&content)
}

/// Service: decode a request body and score it.
pub fn analyze_request(scorer: &SpectrumScorer, json: &str) -> SpectrumResult<AnalysisResult> {
    let points = parse_request(json)?;
    Ok(scorer.analyze(&points))
}
