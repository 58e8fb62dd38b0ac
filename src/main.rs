use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use spectrum_scorer::config::{GeometryArgs, SpectrumConfig};
use spectrum_scorer::error::SpectrumResult;
use spectrum_scorer::scorer::SpectrumScorer;
use std::process;
use tracing::{debug, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Color spectrum perception scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON geometry file; explicit flags still win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one set of marked transitions
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Score every session in a CSV file
    Batch(cmd::batch::BatchArgs),
}

fn resolve_config(
    path: Option<&str>,
    cli_geometry: &GeometryArgs,
    sub_matches: &ArgMatches,
) -> SpectrumResult<SpectrumConfig> {
    let mut config = match path {
        Some(p) => {
            info!("Loading geometry from {}", p);
            SpectrumConfig::load_from_file(p)?
        }
        None => SpectrumConfig::default(),
    };
    config.merge_from_cli(cli_geometry, sub_matches)?;
    debug!(?config, "resolved geometry");
    Ok(config)
}

fn main() {
    // Raw matches let explicit flags be told apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (geometry, sub_matches) = match &cli.command {
        Commands::Analyze(args) => (&args.geometry, matches.subcommand_matches("analyze")),
        Commands::Batch(args) => (&args.geometry, matches.subcommand_matches("batch")),
    };
    let Some(sub_matches) = sub_matches else {
        eprintln!("❌ Missing subcommand");
        process::exit(2);
    };

    let scorer = match resolve_config(cli.config.as_deref(), geometry, sub_matches)
        .and_then(SpectrumScorer::new)
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("\n❌ FATAL ERROR INITIALIZING SCORER:");
            eprintln!("   {}", e);
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
