use crate::reports;
use clap::Args;
use spectrum_scorer::config::GeometryArgs;
use spectrum_scorer::error::SpectrumResult;
use spectrum_scorer::loader;
use spectrum_scorer::scorer::SpectrumScorer;
use std::fs::File;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// CSV of sessions: session_id,x1,x2,...
    #[arg(short, long)]
    pub input: String,

    /// Write per-session results as CSV
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: BatchArgs, scorer: &SpectrumScorer) -> SpectrumResult<()> {
    info!("Loading sessions from {}", args.input);
    let sessions = loader::load_sessions(File::open(&args.input)?)?;

    let start = Instant::now();
    let results = scorer.analyze_batch(&sessions);
    info!(
        "Analyzed {} sessions in {:.2?}",
        results.len(),
        start.elapsed()
    );

    if let Some(path) = &args.output {
        loader::write_results(File::create(path)?, &results)?;
        info!("Results written to {}", path);
    }

    reports::print_batch_report(&results);
    Ok(())
}
