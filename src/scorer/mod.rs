pub mod classify;
pub mod messages;
pub mod metrics;
pub mod types;

pub use self::messages::ScoreBand;
pub use self::types::{AnalysisDetails, AnalysisResult, DeficiencyType, InputPoint};

use crate::config::{SpectrumConfig, REFERENCE_COUNT};
use crate::error::SpectrumResult;
use rayon::prelude::*;
use tracing::debug;

/// Scores marked spectrum transitions against a fixed reference geometry.
///
/// Holds only immutable data, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SpectrumScorer {
    config: SpectrumConfig,
}

/// Outcome of the validation steps that precede scoring.
enum Prepared {
    Done(AnalysisResult),
    Positions([f64; REFERENCE_COUNT]),
}

impl SpectrumScorer {
    pub fn new(config: SpectrumConfig) -> SpectrumResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    pub fn analyze(&self, points: &[InputPoint]) -> AnalysisResult {
        match self.prepare(points) {
            Prepared::Done(result) => result,
            Prepared::Positions(positions) => self.score_positions(positions).result,
        }
    }

    /// Like [`analyze`](Self::analyze), but returns the full trace.
    /// `None` when the input never reaches the scoring stage.
    pub fn analyze_detailed(&self, points: &[InputPoint]) -> Option<AnalysisDetails> {
        match self.prepare(points) {
            Prepared::Done(_) => None,
            Prepared::Positions(positions) => Some(self.score_positions(positions)),
        }
    }

    /// Analyzes independent sessions in parallel. Output order follows input order.
    pub fn analyze_batch<S>(&self, sessions: &[(S, Vec<InputPoint>)]) -> Vec<(S, AnalysisResult)>
    where
        S: Clone + Send + Sync,
    {
        sessions
            .par_iter()
            .map(|(id, points)| (id.clone(), self.analyze(points)))
            .collect()
    }

    fn prepare(&self, points: &[InputPoint]) -> Prepared {
        if points.is_empty() {
            return Prepared::Done(AnalysisResult {
                score: 0.0,
                message: messages::NO_LINES_MESSAGE.to_string(),
                kind: DeficiencyType::Unknown,
            });
        }

        let mut normalized: Vec<f64> = points
            .iter()
            .map(|p| metrics::normalize(p.x, self.config.axis_extent))
            .collect();

        if normalized.len() != REFERENCE_COUNT {
            return Prepared::Done(AnalysisResult {
                score: 0.0,
                message: messages::incomplete_message(REFERENCE_COUNT, normalized.len()),
                kind: DeficiencyType::Incomplete,
            });
        }

        metrics::sort_positions(&mut normalized);
        let mut positions = [0.0; REFERENCE_COUNT];
        positions.copy_from_slice(&normalized);
        Prepared::Positions(positions)
    }

    fn score_positions(&self, positions: [f64; REFERENCE_COUNT]) -> AnalysisDetails {
        let deviations = metrics::deviations(&positions, &self.config.boundaries);
        let mse = metrics::mean_squared_error(&deviations);
        let score = metrics::round2(metrics::raw_score(mse, self.config.mse_penalty));
        let kind = classify::classify(&deviations, self.config.deviation_threshold);

        debug!(mse, score, %kind, "spectrum analyzed");

        AnalysisDetails {
            positions,
            deviations,
            group_means: classify::group_means(&deviations),
            mse,
            result: AnalysisResult {
                score,
                message: ScoreBand::from_score(score).message().to_string(),
                kind,
            },
        }
    }
}
