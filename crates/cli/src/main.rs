use anyhow::{Context, Result};
use catalog::RecordSet;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{FaultPolicy, InstallRow, TransformConfig, WhitelistTransformer};
use std::path::PathBuf;
use storage::{DirStore, JsonStore};

/// addon-etl - batch preparation of addon recommendation inputs
#[derive(Parser)]
#[command(name = "addon-etl")]
#[command(about = "Batch jobs preparing addon recommendation inputs", long_about = None)]
struct Cli {
    /// Directory backing the JSON document store
    #[arg(short, long, default_value = "data/addon_models")]
    data_dir: PathBuf,

    /// Retention date tag (YYYYMMDD); defaults to today
    #[arg(long)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the raw catalog dump into the whitelist subsets
    Whitelist {
        /// Document name of the raw catalog dump
        #[arg(long, default_value = "extended_addons_database")]
        input: String,

        /// Minimum average rating for whitelist eligibility
        #[arg(long, default_value = "3.0")]
        min_rating: f64,

        /// Minimum addon age in days for whitelist eligibility
        #[arg(long, default_value = "60")]
        min_age: i64,

        /// Log and skip unevaluable records instead of aborting the run
        #[arg(long)]
        skip_faults: bool,
    },

    /// Aggregate install-count query rows into the GUID ranking
    Ranking {
        /// Document name of the materialized query rows
        #[arg(long, default_value = "install_count_rows")]
        input: String,
    },

    /// Parse the editorial document into the curated GUID list
    Curated {
        /// Document name of the editorial discovery response
        #[arg(long, default_value = "editorial_discovery")]
        input: String,

        /// Accept a curated list shorter than the expected minimum
        #[arg(long)]
        allow_shortlist: bool,
    },

    /// Derive the external whitelist from a stored whitelist database
    Verify {
        /// Document name of the whitelist database to check
        #[arg(long, default_value = "whitelist_addons_database")]
        input: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The run's wall-clock date, captured once and stable throughout
    let now = Local::now().naive_local();
    let date_tag = cli
        .date
        .unwrap_or_else(|| now.format("%Y%m%d").to_string());

    let store = DirStore::new(&cli.data_dir);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Whitelist {
            input,
            min_rating,
            min_age,
            skip_faults,
        } => {
            let config = TransformConfig {
                min_rating,
                min_age_days: min_age,
                fault_policy: if skip_faults {
                    FaultPolicy::Skip
                } else {
                    FaultPolicy::Abort
                },
                ..TransformConfig::default()
            };
            handle_whitelist(&store, &date_tag, &input, config, now)
        }
        Commands::Ranking { input } => handle_ranking(&store, &date_tag, &input),
        Commands::Curated {
            input,
            allow_shortlist,
        } => handle_curated(&store, &date_tag, &input, allow_shortlist),
        Commands::Verify { input } => handle_verify(&store, &input),
    }
}

/// Handle the 'whitelist' command
fn handle_whitelist(
    store: &DirStore,
    date_tag: &str,
    input: &str,
    config: TransformConfig,
    now: chrono::NaiveDateTime,
) -> Result<()> {
    let raw = store
        .read_json(input)
        .with_context(|| format!("load stage failed for {input}"))?;
    let records: RecordSet = serde_json::from_value(raw)
        .context("load stage failed: catalog dump is not a GUID-keyed object")?;
    println!("{} Loaded {} catalog records", "✓".green(), records.len());

    let mut transformer = WhitelistTransformer::new(config, now);
    transformer
        .transform(&records)
        .context("classify stage failed")?;

    let outputs = [
        ("whitelist_addons_database", transformer.whitelist()),
        ("featured_addons_database", transformer.featured()),
        ("featured_whitelist_addons", transformer.featured_whitelist()),
    ];
    for (name, results) in outputs {
        let value = serde_json::to_value(results)
            .with_context(|| format!("store stage failed serializing {name}"))?;
        store
            .write_json(name, &value, date_tag)
            .with_context(|| format!("store stage failed for {name}"))?;
        println!("{} {}: {} addons", "✓".green(), name, results.len());
    }
    Ok(())
}

/// Handle the 'ranking' command
fn handle_ranking(store: &DirStore, date_tag: &str, input: &str) -> Result<()> {
    let raw = store
        .read_json(input)
        .with_context(|| format!("load stage failed for {input}"))?;
    let rows: Vec<InstallRow> = serde_json::from_value(raw)
        .context("load stage failed: rows do not match the install-count query shape")?;
    println!("{} Loaded {} query rows", "✓".green(), rows.len());

    let ranking = pipeline::rank_install_counts(&rows);
    let value = serde_json::to_value(&ranking).context("store stage failed serializing ranking")?;
    store
        .write_json("guid_install_ranking", &value, date_tag)
        .context("store stage failed for guid_install_ranking")?;
    println!("{} guid_install_ranking: {} addons", "✓".green(), ranking.len());
    Ok(())
}

/// Handle the 'curated' command
fn handle_curated(
    store: &DirStore,
    date_tag: &str,
    input: &str,
    allow_shortlist: bool,
) -> Result<()> {
    let document = store
        .read_json(input)
        .with_context(|| format!("load stage failed for {input}"))?;

    let guids =
        pipeline::parse_editorial_guids(&document, allow_shortlist).context("classify stage failed")?;

    let value = serde_json::to_value(&guids)
        .context("store stage failed serializing only_guids_top_200")?;
    store
        .write_json("only_guids_top_200", &value, date_tag)
        .context("store stage failed for only_guids_top_200")?;
    println!("{} only_guids_top_200: {} addons", "✓".green(), guids.len());
    Ok(())
}

/// Handle the 'verify' command
fn handle_verify(store: &DirStore, input: &str) -> Result<()> {
    let raw = store
        .read_json(input)
        .with_context(|| format!("load stage failed for {input}"))?;
    let records: RecordSet = serde_json::from_value(raw)
        .context("load stage failed: whitelist database is not a GUID-keyed object")?;

    let whitelist =
        catalog::derive_external_whitelist(&records).context("classify stage failed")?;
    println!(
        "{} {} of {} addons are webextension-eligible",
        "✓".green(),
        whitelist.len(),
        records.len()
    );
    Ok(())
}
