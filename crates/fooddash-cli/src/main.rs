use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fooddash_services::{
    category_counts, load_config, read_table, resolve_config_path, CategoryCount, Dataset,
    FulfilmentCenterRecord, Histogram, MealRecord, Record, Services, Table, WeeklyDemandRecord,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fooddash")]
#[command(about = "Food demand datasets - inspect the files behind the dashboard", long_about = None)]
struct Cli {
    /// Directory holding train.csv, fulfilment_center_info.csv and meal_info.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (JSON), defaults to $FOODDASH_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the dataset files and the sidebar image exist
    Check,

    /// Print the first rows of a dataset
    Head {
        /// Dataset to show (weekly, centers, meals)
        #[arg(value_parser = parse_dataset)]
        dataset: Dataset,

        /// Number of rows to print
        #[arg(short = 'n', long, default_value = "10")]
        rows: usize,

        /// Row limit passed to the loader (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Load all datasets and print what the dashboard charts are built from
    Summary,
}

fn parse_dataset(s: &str) -> std::result::Result<Dataset, String> {
    Dataset::from_str(s).ok_or_else(|| format!("unknown dataset '{}' (weekly, centers, meals)", s))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config, |key| std::env::var(key).ok());
    let mut config = load_config(config_path.as_deref()).context("Failed to load config")?;
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }
    let services = Services::new(config);

    match cli.command {
        Commands::Check => cmd_check(&services)?,
        Commands::Head {
            dataset,
            rows,
            limit,
        } => cmd_head(&services, dataset, rows, limit)?,
        Commands::Summary => cmd_summary(&services)?,
    }

    Ok(())
}

fn cmd_check(services: &Services) -> Result<()> {
    println!();
    println!("  Data directory: {}", services.datasets.data_dir().display());
    println!();

    let absent = services.datasets.missing_files();
    let mut missing = absent.len();
    for path in &absent {
        println!("  ✗ {:<28} missing", file_label(path));
    }

    for dataset in Dataset::all() {
        let path = services.datasets.path(*dataset);
        if absent.contains(&path) {
            continue;
        }
        // Full read, bypassing the row limits and the cache
        let rows = match dataset {
            Dataset::WeeklyDemand => count_rows::<WeeklyDemandRecord>(&path),
            Dataset::FulfilmentCenters => count_rows::<FulfilmentCenterRecord>(&path),
            Dataset::Meals => count_rows::<MealRecord>(&path),
        };
        match rows {
            Ok(n) => println!("  ✓ {:<28} {} rows", dataset.file_name(), n),
            Err(e) => {
                missing += 1;
                println!("  ✗ {:<28} {}", dataset.file_name(), e);
            }
        }
    }

    match services.sidebar_image() {
        Some(path) => println!("  ✓ {:<28} found", file_label(&path)),
        None => println!(
            "  - {:<28} not found (optional)",
            file_label(&services.config.data.sidebar_image_path())
        ),
    }
    println!();

    if missing > 0 {
        anyhow::bail!("{} dataset file(s) missing or unreadable", missing);
    }
    Ok(())
}

fn count_rows<R>(path: &std::path::Path) -> fooddash_services::Result<usize>
where
    R: Record + serde::de::DeserializeOwned,
{
    read_table::<R>(path, None).map(|t| t.len())
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn cmd_head(services: &Services, dataset: Dataset, rows: usize, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or_else(|| services.config.limits.for_dataset(dataset));
    tracing::debug!(dataset = dataset.as_str(), limit, rows, "head");
    let datasets = &services.datasets;

    match dataset {
        Dataset::WeeklyDemand => print_table(&*datasets.weekly_demand(limit)?, rows),
        Dataset::FulfilmentCenters => print_table(&*datasets.fulfilment_centers(limit)?, rows),
        Dataset::Meals => print_table(&*datasets.meals(limit)?, rows),
    }
    Ok(())
}

fn print_table<R: Record>(table: &Table<R>, rows: usize) {
    let head = table.head(rows);
    let cells: Vec<Vec<String>> = head.iter().map(|r| r.cells()).collect();
    let index_width = head.len().saturating_sub(1).to_string().len();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!();
    print!("  {:>w$}", "", w = index_width);
    for (name, w) in table.columns().iter().zip(&widths) {
        print!("  {:>w$}", name, w = *w);
    }
    println!();

    for (i, row) in cells.iter().enumerate() {
        print!("  {:>w$}", i, w = index_width);
        for (cell, w) in row.iter().zip(&widths) {
            print!("  {:>w$}", cell, w = *w);
        }
        println!();
    }
    println!();
    println!(
        "  [{} of {} rows x {} columns]",
        head.len(),
        table.len(),
        table.columns().len()
    );
    println!();
}

fn cmd_summary(services: &Services) -> Result<()> {
    let data = services.load_datasets()?;
    let charts = &services.config.charts;

    println!();
    println!("  Rows loaded");
    for dataset in Dataset::all() {
        println!(
            "    {:<20} {:>6}  (limit {})",
            dataset.label(),
            data.row_count(*dataset),
            services.config.limits.for_dataset(*dataset)
        );
    }

    println!();
    println!(
        "  Weekly demand histograms (first {} rows, {} bins)",
        charts.histogram_rows.min(data.weekly.len()),
        charts.histogram_bins
    );
    let columns: [(&str, fn(&WeeklyDemandRecord) -> f64); 3] = [
        ("num_orders", |r| r.num_orders as f64),
        ("checkout_price", |r| r.checkout_price),
        ("base_price", |r| r.base_price),
    ];
    for (name, f) in columns {
        let hist = Histogram::new(
            &data.weekly.head_column(charts.histogram_rows, f),
            charts.histogram_bins,
        );
        let counts: Vec<String> = hist.bins.iter().map(|b| b.count.to_string()).collect();
        match (hist.bins.first(), hist.bins.last()) {
            (Some(first), Some(last)) => println!(
                "    {:<16} [{:.2}, {:.2}]  {}",
                name,
                first.start,
                last.end,
                counts.join(" ")
            ),
            _ => println!("    {:<16} (no rows)", name),
        }
    }

    print_counts(
        "Centers per type",
        category_counts(data.centers.rows().iter().map(|c| c.center_type.as_str())),
    );
    print_counts(
        "Centers per region",
        category_counts(data.centers.rows().iter().map(|c| c.region_code.to_string())),
    );
    print_counts(
        "Meals per category",
        category_counts(data.meals.rows().iter().map(|m| m.category.as_str())),
    );
    println!();

    Ok(())
}

fn print_counts(title: &str, counts: Vec<CategoryCount>) {
    println!();
    println!("  {}", title);
    for c in counts {
        println!("    {:<16} {:>5}", c.label, c.count);
    }
}
