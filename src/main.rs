use adix::index::store::{index_path_for, save};
use adix::index::{build_index, stats};
use adix::output;
use adix::record::{RecordStore, SchemaConfig, normalize};
use adix::searcher::Searcher;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "adix")]
#[command(about = "Bi-gram inverted-index search over flat-file address datasets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dataset to open in interactive mode (when no subcommand is given)
    dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or rebuild the index file for a dataset
    Index {
        /// Dataset file (e.g. KEN_ALL.CSV)
        dataset: PathBuf,

        /// Force rebuild even if an index file exists
        #[arg(short, long)]
        force: bool,
    },
    /// Run a single query against a dataset
    Search {
        /// Dataset file
        dataset: PathBuf,

        /// Query text
        query: String,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show index statistics for a dataset
    Stats {
        /// Dataset file
        dataset: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Index { dataset, force }) => {
            build_command(&dataset, force)?;
        }
        Some(Commands::Search {
            dataset,
            query,
            limit,
            json,
        }) => {
            let searcher = Searcher::initialize(&dataset)
                .with_context(|| format!("failed to open {}", dataset.display()))?;
            let hits = searcher.search(&query);
            if json {
                output::print_hits_json(&hits, limit)?;
            } else {
                output::print_hits(&hits, limit, true)?;
            }
        }
        Some(Commands::Stats { dataset }) => {
            let searcher = Searcher::initialize(&dataset)
                .with_context(|| format!("failed to open {}", dataset.display()))?;
            stats::show_stats(searcher.records(), searcher.index());
        }
        None => match cli.dataset {
            Some(dataset) => interactive(&dataset)?,
            None => {
                eprintln!("usage: adix <dataset>  (or: adix index|search|stats --help)");
                std::process::exit(2);
            }
        },
    }

    Ok(())
}

/// Build the index file, replacing any existing one when forced
fn build_command(dataset: &Path, force: bool) -> Result<()> {
    let index_path = index_path_for(dataset);
    if index_path.exists() && !force {
        println!("Index already exists: {}", index_path.display());
        println!("Use --force to rebuild.");
        return Ok(());
    }

    let raw = std::fs::read_to_string(dataset)
        .with_context(|| format!("failed to read {}", dataset.display()))?;
    let schema = SchemaConfig::default();
    let records = RecordStore::new(normalize(raw.lines(), &schema)?);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Indexing {} records...", records.len()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let index = build_index(&records, &schema);
    save(&index, &index_path)?;

    spinner.finish_with_message(format!(
        "Indexed {} records, {} tokens",
        records.len(),
        index.len()
    ));
    println!("Index stored at: {}", index_path.display());

    Ok(())
}

/// Prompt loop: one query per line, empty line exits
fn interactive(dataset: &Path) -> Result<()> {
    let searcher = Searcher::initialize(dataset)
        .with_context(|| format!("failed to open {}", dataset.display()))?;
    println!(
        "Loaded {} records ({} tokens). Empty line exits.",
        searcher.records().len(),
        searcher.index().len()
    );

    let stdin = io::stdin();
    loop {
        print!("query> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let hits = searcher.search(query);
        output::print_hits(&hits, Some(20), true)?;
    }

    Ok(())
}
