//! `weight-dashboard` - command line client for the weight tracker API.

mod chart;
mod client;
mod log;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client::ApiClient;
use log::WeightLog;

#[derive(Parser, Debug)]
#[command(
    name = "weight-dashboard",
    about = "Command line dashboard for the weight tracker API"
)]
struct Args {
    /// Base URL of the weight tracker server.
    #[arg(
        long,
        env = "WEIGHT_TRACKER_URL",
        default_value = "http://127.0.0.1:3001"
    )]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all entries, most recent first.
    List,
    /// Record a new weight entry.
    Add {
        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,
        /// Date of the measurement (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
    },
    /// Replace the weight and date of an existing entry.
    Edit {
        /// Id of the entry to edit.
        id: i64,
        /// New weight in kilograms.
        #[arg(long)]
        weight: f64,
        /// New date of the measurement (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
    },
    /// Delete an entry.
    Remove {
        /// Id of the entry to delete.
        id: i64,
    },
    /// Render the weight chart as SVG.
    Chart {
        /// Write the SVG to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = ApiClient::new(&args.url)?;

    let records = client.list_weights().await?;
    let mut log = WeightLog::new(records);

    match args.command {
        Command::List => print_table(&log),
        Command::Add { weight, date } => {
            let created = client.create_weight(weight, date).await?;
            println!(
                "Added entry {}: {} kg on {}",
                created.id, created.weight, created.date
            );
            log.apply_created(created);
            print_table(&log);
        }
        Command::Edit { id, weight, date } => {
            let updated = client.update_weight(id, weight, date).await?;
            println!(
                "Updated entry {}: {} kg on {}",
                updated.id, updated.weight, updated.date
            );
            log.apply_updated(updated);
            print_table(&log);
        }
        Command::Remove { id } => {
            let deleted = client.delete_weight(id).await?;
            println!("{}", deleted.message);
            log.apply_deleted(id);
            print_table(&log);
        }
        Command::Chart { output } => {
            let svg = chart::render_svg(&chart::ChartConfig::from_log(&log));
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("writing chart to {}", path.display()))?;
                    println!("Chart written to {}", path.display());
                }
                None => print!("{svg}"),
            }
        }
    }

    Ok(())
}

fn print_table(log: &WeightLog) {
    if log.is_empty() {
        println!("No entries yet.");
        return;
    }

    println!("{:<12} {:>12} {:>6}", "DATE", "WEIGHT (kg)", "ID");
    for record in log.recent_first() {
        println!(
            "{:<12} {:>12} {:>6}",
            record.date.to_string(),
            record.weight,
            record.id
        );
    }
}
