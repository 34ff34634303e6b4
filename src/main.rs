//! Graph Metrics - CLI
//!
//! Loads an edge list and prints structural metrics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use graph_metrics::graph::{EdgeListLoader, GraphAnalyzer};
use graph_metrics::{report, Config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "graph-metrics")]
#[command(about = "Structural metrics for undirected graphs")]
struct Cli {
    /// Path to a YAML config file (default: ./graph-metrics.yaml)
    #[arg(long, global = true, env = "GRAPH_METRICS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge list and print its size
    Load {
        /// Edge list file (one "u v" pair per line)
        file: PathBuf,

        /// Reject lines with more than two columns
        #[arg(long)]
        strict: bool,
    },

    /// Load an edge list and print the full analysis report
    Analyze {
        /// Edge list file (one "u v" pair per line)
        file: PathBuf,

        /// Number of nodes in the centrality ranking
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Reject lines with more than two columns
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays a clean report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,graph_metrics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Load { file, strict } => {
            let analyzer = GraphAnalyzer::new(config.analysis)
                .with_loader(EdgeListLoader::new().strict(strict));
            let graph = analyzer.load(&file)?;
            println!("{}", report::render_load_summary(&graph));
            Ok(())
        }
        Commands::Analyze {
            file,
            top_k,
            json,
            strict,
        } => {
            if let Some(k) = top_k {
                config.analysis.top_k = k;
            }
            let analyzer = GraphAnalyzer::new(config.analysis)
                .with_loader(EdgeListLoader::new().strict(strict));
            let result = analyzer.analyze_file(&file)?;

            if json {
                println!("{}", report::render_json(&result)?);
            } else {
                print!("{}", report::render_text(&result));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_analyze_accept_strict() {
        let cli = Cli::try_parse_from(["graph-metrics", "load", "--strict", "g.edges"]).unwrap();
        match cli.command {
            Commands::Load { file, strict } => {
                assert!(strict);
                assert_eq!(file, PathBuf::from("g.edges"));
            }
            _ => panic!("expected load"),
        }

        let cli = Cli::try_parse_from(["graph-metrics", "analyze", "g.edges", "--strict"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze { strict: true, .. }));
    }

    #[test]
    fn test_load_defaults_to_lenient() {
        let cli = Cli::try_parse_from(["graph-metrics", "load", "g.edges"]).unwrap();
        assert!(matches!(cli.command, Commands::Load { strict: false, .. }));
    }
}
