//! # signal-cli
//!
//! Command-line interface for signal analysis.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use signal_facade::{
    format_signal, parse_signal_input, MagnitudeTrendAnalyzer, SignalAnalysis, SignalAnalyzer,
    SignalRequest,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "signal")]
#[command(about = "Signal statistics and trend CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a signal given as comma-separated integers or a JSON file
    Analyze {
        /// Comma-separated integers, e.g. "1,3,2,5"
        #[arg(
            conflicts_with = "input",
            required_unless_present = "input",
            allow_hyphen_values = true
        )]
        values: Option<String>,

        /// JSON file of the form {"data": [...]}
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_request(values: Option<&str>, input: Option<&PathBuf>) -> anyhow::Result<SignalRequest> {
    match (values, input) {
        (Some(values), _) => Ok(parse_signal_input(values)?),
        (None, Some(path)) => {
            let body = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(SignalRequest::from_json_str(&body)?)
        }
        (None, None) => bail!("Provide values or --input"),
    }
}

fn render(
    request: &SignalRequest,
    analysis: &SignalAnalysis,
    analyzer: &MagnitudeTrendAnalyzer,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
        OutputFormat::Text => {
            let movement = analyzer.movement(request.data());
            Ok(format!(
                "Signal:  {}\nAverage: {:?}\nMinimum: {}\nMaximum: {}\nRange:   {}\nTrend:   {} (up {}, down {})",
                format_signal(request.data()),
                analysis.average,
                analysis.minimum,
                analysis.maximum,
                analysis.range(),
                analysis.trend,
                movement.increasing,
                movement.decreasing
            ))
        }
    }
}

fn run_analyze(
    values: Option<String>,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let request = load_request(values.as_deref(), input.as_ref())?;
    let analyzer = MagnitudeTrendAnalyzer::new();
    let analysis = request.analyze_with(&analyzer)?;
    tracing::debug!(analyzer = analyzer.name(), len = request.len(), "analysis complete");
    render(&request, &analysis, &analyzer, format)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            values,
            input,
            format,
        } => run_analyze(values, input, format),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
