use crate::reports;
use clap::Args;
use spectrum_scorer::api;
use spectrum_scorer::config::GeometryArgs;
use spectrum_scorer::error::SpectrumResult;
use spectrum_scorer::scorer::SpectrumScorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Marked x coordinates, repeatable or comma separated
    #[arg(
        short = 'x',
        long = "x",
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        conflicts_with = "input"
    )]
    pub x: Vec<f64>,

    /// JSON request file: {"lines": [{"x": 85.8}, ...]}
    #[arg(short, long)]
    pub input: Option<String>,

    /// Print the response record instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, scorer: &SpectrumScorer) -> SpectrumResult<()> {
    let points = match &args.input {
        Some(path) => {
            info!("Reading request from {}", path);
            api::load_request(path)?
        }
        None => api::points_from_values(&args.x)?,
    };

    let result = scorer.analyze(&points);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match scorer.analyze_detailed(&points) {
        Some(details) => reports::print_details_report(&details, scorer.config()),
        None => reports::print_result(&result),
    }
    Ok(())
}
