use std::fs::File;
use std::path::Path;
use std::time::Instant;

use fooddash_core::{FoodDashError, Record, Result, Table};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Read the header and at most `limit` data rows of a CSV file, in file order.
/// `None` reads every row.
#[instrument(skip_all, fields(path = %path.display(), limit = ?limit))]
pub fn read_table<R>(path: &Path, limit: Option<usize>) -> Result<Table<R>>
where
    R: Record + DeserializeOwned,
{
    let started = Instant::now();
    let file = File::open(path).map_err(|e| FoodDashError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let rows = reader
        .deserialize::<R>()
        .take(limit.unwrap_or(usize::MAX))
        .collect::<std::result::Result<Vec<R>, csv::Error>>()
        .map_err(|e| FoodDashError::csv(path, e))?;

    debug!(
        rows = rows.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Read {}",
        R::DATASET.file_name()
    );
    Ok(Table::new(rows))
}
