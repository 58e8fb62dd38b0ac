use crate::error::{SpectrumError, SpectrumResult};
use crate::scorer::{AnalysisResult, DeficiencyType, InputPoint};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// One user's marks, keyed by an id from the first CSV column.
pub type Session = (String, Vec<InputPoint>);

/// Reads `session_id,x1,x2,...` rows. No header; rows may differ in length.
pub fn load_sessions<R: Read>(reader: R) -> SpectrumResult<Vec<Session>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sessions = Vec::new();

    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let Some(id) = record.get(0) else {
            continue;
        };
        if id.is_empty() {
            warn!("Skipping row {} with empty session id", row + 1);
            continue;
        }

        let mut points = Vec::with_capacity(record.len().saturating_sub(1));
        for cell in record.iter().skip(1).filter(|c| !c.is_empty()) {
            let x: f64 = cell.parse().map_err(|_| SpectrumError::InvalidInput {
                index: row,
                reason: format!("session '{}': '{}' is not a number", id, cell),
            })?;
            if !x.is_finite() {
                return Err(SpectrumError::InvalidInput {
                    index: row,
                    reason: format!("session '{}': '{}' is not finite", id, cell),
                });
            }
            points.push(InputPoint::new(x));
        }
        sessions.push((id.to_string(), points));
    }

    debug!("Loaded {} sessions", sessions.len());
    Ok(sessions)
}

#[derive(Serialize)]
struct ResultRow<'a> {
    session: &'a str,
    score: f64,
    #[serde(rename = "type")]
    kind: DeficiencyType,
    message: &'a str,
}

pub fn write_results<W: Write>(writer: W, results: &[(String, AnalysisResult)]) -> SpectrumResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (session, result) in results {
        wtr.serialize(ResultRow {
            session,
            score: result.score,
            kind: result.kind,
            message: &result.message,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
