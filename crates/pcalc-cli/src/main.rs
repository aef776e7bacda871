use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pcalc_cli::cmd_evaluate::{self, EvaluateArgs};
use pcalc_cli::cmd_parse;
use pcalc_cli::tracing_init::init_tracing;
use pcalc_config::{CalcConfig, OutputFormat, RowCount, SizeOverride};

#[derive(Parser)]
#[command(name = "pcalc", about = "Partition size calculator for CQL tables")]
struct Cli {
    /// Path to a pcalc.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CREATE TABLE statement and print the schema
    Parse {
        /// Path to the .cql schema file
        file: PathBuf,
    },

    /// Estimate the on-disk size of one partition
    Evaluate {
        /// Path to the .cql schema file
        file: PathBuf,

        /// Rows per partition (e.g. 5000000, 5_000_000, 5M)
        #[arg(short, long)]
        rows: Option<RowCount>,

        /// Size estimate for a variable-size column, COLUMN=SIZE (e.g. body=100, body=2KB)
        #[arg(short, long = "size")]
        sizes: Vec<SizeOverride>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, base_dir) = match &cli.config {
        Some(path) => {
            let path = path
                .canonicalize()
                .map_err(|e| anyhow::anyhow!("config path '{}': {e}", path.display()))?;
            let config = CalcConfig::load(&path)?;
            let base_dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (config, base_dir)
        }
        None => (CalcConfig::default(), PathBuf::from(".")),
    };

    let _guard = init_tracing(&config.logging, &base_dir)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let output = match cli.command {
        Commands::Parse { file } => cmd_parse::run(&file, format)?,
        Commands::Evaluate { file, rows, sizes } => {
            let args = EvaluateArgs {
                file,
                rows,
                sizes,
                format,
            };
            cmd_evaluate::run(&args, &config)?
        }
    };
    println!("{output}");

    Ok(())
}
