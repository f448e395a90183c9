use std::path::PathBuf;

use clap::Parser;

use tally_app::config::TableConfig;
use tally_app::logging::init_logging;
use tally_app::render::{DEFAULT_TOP_N, render_report};

/// Remaining-card probability counter for Phase 10 tables.
#[derive(Debug, Parser)]
#[command(
    name = "cardtally",
    author,
    version,
    about = "Phase 10 remaining-card probability counter"
)]
struct Cli {
    /// Path to the YAML table description.
    #[arg(short, long, value_name = "FILE", default_value = "table.yaml")]
    config: PathBuf,

    /// Override the configured hand size.
    #[arg(long, value_name = "CARDS")]
    hand_size: Option<u32>,

    /// Number of ranked entries to print per player.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Emit the full report as pretty-printed JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Exit after validating the configuration (nothing is computed).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = TableConfig::from_path(&cli.config)?;
    if let Some(hand_size) = cli.hand_size {
        config.hand_size = hand_size;
    }
    config.validate()?;

    if cli.validate_only {
        println!(
            "Configuration at {} is valid ({} player{}).",
            cli.config.display(),
            config.players.len(),
            if config.players.len() == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    let table = config.to_table();
    tracing::info!(
        players = table.players.len(),
        hand_size = table.hand_size,
        observed = table.global_observed.len(),
        "evaluating table"
    );
    let report = table.evaluate();

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_report(&report, cli.top));
    }

    Ok(())
}
