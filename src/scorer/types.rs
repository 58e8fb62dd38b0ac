use crate::config::REFERENCE_COUNT;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A raw transition mark, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputPoint {
    pub x: f64,
}

impl InputPoint {
    pub fn new(x: f64) -> Self {
        Self { x }
    }
}

impl From<f64> for InputPoint {
    fn from(x: f64) -> Self {
        Self { x }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeficiencyType {
    Unknown,
    Incomplete,
    PossibleProtanopia,
    PossibleDeuteranopia,
    PossibleTritanopia,
    Normal,
}

impl DeficiencyType {
    pub fn description(&self) -> &'static str {
        match self {
            DeficiencyType::Unknown => "No transitions marked",
            DeficiencyType::Incomplete => "Wrong number of transitions",
            DeficiencyType::PossibleProtanopia => "Red-blindness",
            DeficiencyType::PossibleDeuteranopia => "Green-blindness",
            DeficiencyType::PossibleTritanopia => "Blue-blindness",
            DeficiencyType::Normal => "No deficiency pattern",
        }
    }
}

/// The record handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: DeficiencyType,
}

/// Full trace of one complete analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDetails {
    pub positions: [f64; REFERENCE_COUNT],
    pub deviations: [f64; REFERENCE_COUNT],
    // Mean |deviation| per rule, in rule order
    pub group_means: Vec<(DeficiencyType, f64)>,
    pub mse: f64,
    pub result: AnalysisResult,
}
