//! Spacefit CLI: plan item quantities for a fixed floor area
//!
//! Loads run parameters and a catalog from a YAML/JSON file (or uses the
//! built-in showroom), runs the evolutionary search once and prints the result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use spacefit::{plan, Catalog, PlanReport, RunConfig, SelectionStrategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spacefit", version, about = "Spacefit area allocation planner")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Selection {
    Tournament,
    Roulette,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the optimizer once
    Run {
        /// YAML or JSON run configuration
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Area budget
        #[arg(long)]
        area: Option<f64>,

        #[arg(long)]
        population: Option<usize>,

        #[arg(long)]
        generations: Option<usize>,

        #[arg(long)]
        crossover: Option<f64>,

        #[arg(long)]
        mutation: Option<f64>,

        /// Number of elite individuals kept each generation (0 disables elitism)
        #[arg(long)]
        elitism: Option<usize>,

        #[arg(long)]
        selection: Option<Selection>,

        /// Tournament size
        #[arg(long)]
        tournament_k: Option<usize>,

        /// Random seed for a reproducible run (overrides SPACEFIT_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Item ids to leave out of the run
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<u64>,

        /// Evaluate fitness on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Show the catalog a run would use
    Catalog {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    spacefit::optimization::init();

    let result = match cli.command {
        Commands::Run {
            config,
            area,
            population,
            generations,
            crossover,
            mutation,
            elitism,
            selection,
            tournament_k,
            seed,
            exclude,
            parallel,
        } => load_config(config.as_ref()).and_then(|mut run| {
            if let Some(area) = area {
                run.area_maximum = area;
            }
            let solver = &mut run.solver;
            if let Some(population) = population {
                solver.population_size = population;
            }
            if let Some(generations) = generations {
                solver.generations = generations;
            }
            if let Some(crossover) = crossover {
                solver.crossover_probability = crossover;
            }
            if let Some(mutation) = mutation {
                solver.mutation_probability = mutation;
            }
            if let Some(elitism) = elitism {
                solver.elitism = elitism;
            }
            solver.selection = resolve_selection(solver.selection, selection, tournament_k);
            if seed.is_some() {
                solver.seed = seed;
            }
            solver.parallel_evaluation |= parallel;
            for id in exclude {
                if !run.catalog.set_selected(id, false) {
                    tracing::warn!("No catalog item with id {}", id);
                }
            }
            run_plan(&run, &cli.format)
        }),
        Commands::Catalog { config } => {
            load_config(config.as_ref()).and_then(|run| show_catalog(&run.catalog, &cli.format))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RunConfig> {
    let run = match path {
        Some(path) => RunConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RunConfig::default(),
    };
    Ok(run.apply_env())
}

fn resolve_selection(
    current: SelectionStrategy,
    selection: Option<Selection>,
    tournament_k: Option<usize>,
) -> SelectionStrategy {
    let current_k = match current {
        SelectionStrategy::Tournament { k } => k,
        SelectionStrategy::Roulette => spacefit::optimization::DEFAULT_TOURNAMENT_K,
    };
    match (selection, current) {
        (Some(Selection::Roulette), _) => SelectionStrategy::Roulette,
        (Some(Selection::Tournament), _) | (None, SelectionStrategy::Tournament { .. }) => {
            SelectionStrategy::Tournament {
                k: tournament_k.unwrap_or(current_k),
            }
        }
        (None, SelectionStrategy::Roulette) => SelectionStrategy::Roulette,
    }
}

fn run_plan(run: &RunConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let report = plan(run).context("optimization run failed")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("generation,best_fitness");
            for (generation, fitness) in report.history.iter().enumerate() {
                println!("{},{}", generation, fitness);
            }
        }
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &PlanReport) {
    println!("Total profit: {:.2}", report.total_profit);
    println!(
        "Area used:    {:.2} / {} ({:.2} free)",
        report.used_area, report.area_maximum, report.free_area
    );
    println!("Generations:  {}", report.generations());
    println!();

    if report.allocations.is_empty() {
        println!("(no items placed)");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "item", "units", "area", "profit", "share"]);
    for (allocation, region) in report.allocations.iter().zip(&report.regions) {
        table.add_row(vec![
            allocation.id.to_string(),
            allocation.name.clone(),
            allocation.quantity.to_string(),
            format!("{:.3}", allocation.used_area),
            format!("{:.2}", allocation.profit),
            format!("{:.1}%", region.share * 100.0),
        ]);
    }
    if let Some(free) = report.regions.iter().find(|r| r.free_space) {
        table.add_row(vec![
            String::new(),
            "Free space".to_string(),
            String::new(),
            format!("{:.3}", free.area),
            String::new(),
            format!("{:.1}%", free.share * 100.0),
        ]);
    }
    println!("{}", table);
}

fn show_catalog(catalog: &Catalog, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog)?);
        }
        OutputFormat::Csv => {
            println!("selected,id,name,area,profit,stock");
            for entry in catalog.entries() {
                let item = &entry.item;
                println!(
                    "{},{},\"{}\",{},{},{}",
                    entry.selected,
                    item.id,
                    item.name.replace('"', "\"\""),
                    item.area,
                    item.profit,
                    item.stock
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["selected", "id", "item", "area", "profit", "stock"]);
            for entry in catalog.entries() {
                let item = &entry.item;
                table.add_row(vec![
                    if entry.selected { "x" } else { "" }.to_string(),
                    item.id.to_string(),
                    item.name.clone(),
                    item.area.to_string(),
                    item.profit.to_string(),
                    item.stock.to_string(),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}
