//! Blockfill CLI

use anyhow::Context;
use blockfill_cli::{Session, SessionConfig, SizesParser};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockfill")]
#[command(about = "Pack blocks into rows of a fixed-width container")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ContainerArgs {
    /// Container width
    #[arg(short, long)]
    width: f64,

    /// Container height (defaults to the packed height)
    #[arg(long)]
    height: Option<f64>,

    /// Never rotate blocks
    #[arg(long)]
    no_rotate: bool,

    /// Seed for block colours
    #[arg(long)]
    seed: Option<u64>,
}

impl ContainerArgs {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new(self.width).with_rotation(!self.no_rotate);
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a single block document
    Pack {
        /// Path to the JSON document (`{"sizes": [...]}`)
        file: PathBuf,

        #[command(flatten)]
        container: ContainerArgs,

        /// Output file for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Pack several documents independently
    Batch {
        /// Paths to JSON documents
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        container: ContainerArgs,
    },

    /// Show what a block document contains
    Inspect {
        /// Path to the JSON document
        file: PathBuf,
    },
}

fn pack_file(path: &Path, config: SessionConfig) -> anyhow::Result<blockfill_cli::SessionOutput> {
    let set = SizesParser::new()
        .parse_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let output = Session::new(config)
        .run(&set)
        .with_context(|| format!("packing {}", path.display()))?;
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            file,
            container,
            output,
            html,
        } => {
            let result = pack_file(&file, container.session_config())?;
            result.print_summary();

            if let Some(path) = output {
                result.save_json(&path)?;
                println!("Report saved to: {}", path.display());
            }

            if let Some(path) = html {
                result.save_html(&path)?;
                println!("Page saved to: {}", path.display());
            }
        }

        Commands::Batch { files, container } => {
            let config = container.session_config();

            let outcomes: Vec<_> = files
                .par_iter()
                .map(|file| (file, pack_file(file, config.clone())))
                .collect();

            let mut failures = 0;
            for (file, outcome) in outcomes {
                match outcome {
                    Ok(result) => {
                        let summary = result.summary();
                        println!(
                            "  {:<30} blocks={:<5} rows={:<4} fullness={}",
                            file.display(),
                            summary.total_placed,
                            summary.rows_used,
                            result.report.percent()
                        );
                    }
                    Err(e) => {
                        failures += 1;
                        eprintln!("  {:<30} failed: {:#}", file.display(), e);
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} of {} documents failed", failures, files.len());
            }
        }

        Commands::Inspect { file } => {
            let set = SizesParser::new()
                .parse_file(&file)
                .with_context(|| format!("loading {}", file.display()))?;

            println!("Document: {}", file.display());
            println!("  Blocks:     {}", set.len());
            println!("  Total area: {}", set.total_area());
        }
    }

    Ok(())
}
