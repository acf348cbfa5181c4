use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use padel_league::fetch::{self, ROUNDS_CSV_URL};
use padel_league::roster;
use padel_league::rounds;
use padel_league::sheet::{parse_csv, strip_empty_columns, RawGrid};
use padel_league::standings;

#[derive(Parser)]
#[command(name = "padel-league")]
#[command(about = "League standings from a published rounds spreadsheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the ranked standings table
    Standings {
        /// Local CSV file (fetches the published sheet when omitted)
        input: Option<PathBuf>,

        /// Published sheet URL to fetch instead of the default
        #[arg(long, env = "LEAGUE_SHEET_URL")]
        url: Option<String>,

        /// Write the standings as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the raw rounds table with win markers
    Rounds {
        /// Local CSV file (fetches the published sheet when omitted)
        input: Option<PathBuf>,

        /// Published sheet URL to fetch instead of the default
        #[arg(long, env = "LEAGUE_SHEET_URL")]
        url: Option<String>,
    },

    /// Print the roster of distinct players
    Players {
        /// Local CSV file (fetches the published sheet when omitted)
        input: Option<PathBuf>,

        /// Published sheet URL to fetch instead of the default
        #[arg(long, env = "LEAGUE_SHEET_URL")]
        url: Option<String>,

        /// Two-column CSV (name,bio) with player biographies
        #[arg(long)]
        bios: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Standings { input, url, output } => {
            let grid = load_grid(input.as_deref(), url.as_deref())?;
            print_standings(&grid, output.as_deref())?;
        }
        Commands::Rounds { input, url } => {
            let grid = load_grid(input.as_deref(), url.as_deref())?;
            print_rounds(&grid);
        }
        Commands::Players { input, url, bios } => {
            let grid = load_grid(input.as_deref(), url.as_deref())?;
            let bios = match bios {
                Some(path) => read_bios(&path)?,
                None => HashMap::new(),
            };
            print_players(&grid, &bios);
        }
    }

    Ok(())
}

/// Read the rounds grid from a local file, or fetch it through the shared
/// cache when no file is given.
fn load_grid(input: Option<&Path>, url: Option<&str>) -> Result<Arc<RawGrid>> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Arc::new(strip_empty_columns(parse_csv(&text))))
        }
        None => {
            let url = url.unwrap_or(ROUNDS_CSV_URL);
            fetch::load_rounds(url).context("Failed to fetch rounds sheet")
        }
    }
}

fn print_standings(grid: &RawGrid, output: Option<&Path>) -> Result<()> {
    let table = standings::compute_standings(grid);

    let name_width = table
        .iter()
        .map(|r| r.name.chars().count())
        .chain(["PLAYER NAME".len()])
        .max()
        .unwrap_or(0);

    println!("{:<6} {:<name_width$} {:>6}  {}", "PLACE", "PLAYER NAME", "POINTS", "SETS");
    for row in &table {
        println!(
            "{:<6} {:<name_width$} {:>6}  {}",
            row.place, row.name, row.points, row.sets_record
        );
    }

    if let Some(path) = output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        for row in &table {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!();
        println!("Wrote {} standings rows to {}", table.len(), path.display());
    }

    Ok(())
}

fn print_rounds(grid: &RawGrid) {
    let view = rounds::project_rounds(grid);
    if view.labels.is_empty() {
        println!("No rounds data");
        return;
    }

    let widths: Vec<usize> = view
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view.rows
                .iter()
                .map(|r| r[i].text.chars().count())
                .chain([label.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = view
        .labels
        .iter()
        .zip(&widths)
        .map(|(label, &w)| format!("{label:<w$}"))
        .collect();
    println!("{}", header.join("  "));

    for row in &view.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell.text))
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn print_players(grid: &RawGrid, bios: &HashMap<String, String>) {
    let cards = roster::build_roster(grid, bios);
    println!("Players: {}", cards.len());
    for card in &cards {
        match &card.image_path {
            Some(path) => println!("  [{}] {} ({})", card.initials, card.name, path),
            None => println!("  [{}] {}", card.initials, card.name),
        }
        if let Some(bio) = &card.bio {
            println!("      {bio}");
        }
    }
}

/// Load a two-column name,bio CSV. A literal "name,bio" header row is
/// skipped; everything else is data.
fn read_bios(path: &Path) -> Result<HashMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut bios = HashMap::new();
    for result in reader.records() {
        let record = result.context("Failed to read bios row")?;
        let name = record.get(0).unwrap_or("").trim();
        let bio = record.get(1).unwrap_or("").trim();
        if name.is_empty() || bio.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case("name") && bio.eq_ignore_ascii_case("bio") {
            continue; // header row
        }
        bios.insert(name.to_string(), bio.to_string());
    }
    Ok(bios)
}
