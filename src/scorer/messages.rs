use strum_macros::{Display, EnumIter};

pub const NO_LINES_MESSAGE: &str =
    "No lines detected. Please draw lines where you see color changes.";

pub fn incomplete_message(expected: usize, got: usize) -> String {
    format!(
        "Expected {} lines, but got {}. Please mark all color transitions.",
        expected, got
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Significant,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Significant
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent color discrimination!",
            ScoreBand::Good => "Good color discrimination, minor variations detected.",
            ScoreBand::Moderate => {
                "Moderate color discrimination, possible mild color vision deficiency."
            }
            ScoreBand::Significant => {
                "Significant variations detected, consider consulting an eye care professional."
            }
        }
    }
}
