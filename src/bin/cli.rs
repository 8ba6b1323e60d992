//! Racecard CLI - rank race card entrants from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use racecard::report::{format_race_table, format_selection};
use racecard::{Entrant, EvaluatorConfig, RaceCard, RaceEvaluator};

#[derive(Parser)]
#[command(name = "racecard")]
#[command(author, version, about = "Heuristic race card evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a config file (default: ./racecard.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (per-entrant scores)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the top contenders in every race on a card
    Select {
        /// Path to race card JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format (json, table)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Contenders per race (overrides config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print the full ranked table for every race on a card
    Table {
        /// Path to race card JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Score a single entrant
    Score {
        /// Horse name
        #[arg(long, default_value = "Horse")]
        name: String,

        /// Form figures, oldest first (e.g. "1-2-F3-0")
        #[arg(long, default_value = "")]
        form: String,

        /// Official rating
        #[arg(long = "or", default_value = "60")]
        official_rating: i32,

        /// Age in years
        #[arg(long, default_value = "5")]
        age: i32,

        /// Stall number
        #[arg(long, default_value = "1")]
        stall: i32,

        /// Number of runners
        #[arg(long)]
        field: usize,

        /// Course/distance markers
        #[arg(long, default_value = "")]
        cd: String,

        #[arg(long, default_value = "")]
        trainer: String,

        #[arg(long, default_value = "")]
        jockey: String,

        /// Race class label
        #[arg(long = "class", default_value = "")]
        class_label: String,

        /// Distance in furlongs
        #[arg(long, default_value = "8")]
        distance: f64,

        #[arg(long, default_value = "")]
        track: String,
    },
}

/// Log directive used when RUST_LOG is unset
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "racecard=debug"
    } else {
        "racecard=info"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides --verbose; logs go to stderr so JSON on stdout stays clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = EvaluatorConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Select { input, format, top } => {
            let mut config = config;
            if let Some(n) = top {
                config.top_n = n;
            }
            run_select(&config, &input, &format)?;
        }
        Commands::Table { input } => {
            run_table(&config, &input)?;
        }
        Commands::Score {
            name,
            form,
            official_rating,
            age,
            stall,
            field,
            cd,
            trainer,
            jockey,
            class_label,
            distance,
            track,
        } => {
            let entrant = Entrant {
                name,
                stall,
                age,
                official_rating,
                form,
                cd,
                trainer,
                jockey,
            };
            run_score(&config, &entrant, field, distance, &track, &class_label)?;
        }
    }

    Ok(())
}

fn load_card(input: &Path) -> Result<RaceCard> {
    RaceCard::load(input).with_context(|| format!("Failed to load race card from {:?}", input))
}

fn run_select(config: &EvaluatorConfig, input: &Path, format: &str) -> Result<()> {
    let card = load_card(input)?;
    let evaluator = RaceEvaluator::from_config(config);
    let selection = evaluator
        .evaluate_card(&card.races)
        .context("Failed to evaluate race card")?;

    match format {
        "table" => {
            println!(
                "{}",
                format!("Top {} per race:", evaluator.top_n()).yellow().bold()
            );
            print!("{}", format_selection(&selection));
        }
        _ => println!("{}", serde_json::to_string_pretty(&selection)?),
    }

    Ok(())
}

fn run_table(config: &EvaluatorConfig, input: &Path) -> Result<()> {
    let card = load_card(input)?;
    let evaluator = RaceEvaluator::from_config(config);

    for (i, race) in card.races.iter().enumerate() {
        let ranked = evaluator
            .rank_race(race)
            .with_context(|| format!("Failed to rank race R{}", i + 1))?;
        println!();
        print!("{}", format_race_table(i + 1, race, &ranked).cyan());
    }

    Ok(())
}

fn run_score(
    config: &EvaluatorConfig,
    entrant: &Entrant,
    field_size: usize,
    distance: f64,
    track: &str,
    class_label: &str,
) -> Result<()> {
    let evaluator = RaceEvaluator::from_config(config);
    let scores = evaluator
        .score_entrant(entrant, field_size, distance, track, class_label)
        .with_context(|| format!("Failed to score {}", entrant.name))?;

    println!("{}", entrant.name.green().bold());
    println!("{:>14} {:.2}", "Reliability", scores.reliability);
    println!("{:>14} {:.1}", "Draw bias", scores.draw_bias);
    println!("{:>14} {:.1}", "Connections", scores.connections);
    println!("{:>14} {}", "Class/fitness", scores.class_fitness);
    println!("{:>14} {:.1}", "Primary", scores.primary);
    println!("{:>14} {}", "Total", format!("{:.1}", scores.total).bold());

    Ok(())
}
