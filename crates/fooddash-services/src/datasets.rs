use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use fooddash_core::{
    Dataset, Datasets, FulfilmentCenterRecord, LimitsConfig, MealRecord, Record, Result, Table,
    WeeklyDemandRecord,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::cache::TableCache;
use crate::loader::read_table;

/// Loads the three dataset files from one directory, memoized per row limit
pub struct DatasetService {
    data_dir: PathBuf,
    weekly: TableCache<WeeklyDemandRecord>,
    centers: TableCache<FulfilmentCenterRecord>,
    meals: TableCache<MealRecord>,
}

impl DatasetService {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            weekly: TableCache::new(),
            centers: TableCache::new(),
            meals: TableCache::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(dataset.file_name())
    }

    /// First `limit` rows of `train.csv`
    pub fn weekly_demand(&self, limit: usize) -> Result<Arc<Table<WeeklyDemandRecord>>> {
        self.load(&self.weekly, limit)
    }

    /// First `limit` rows of `fulfilment_center_info.csv`
    pub fn fulfilment_centers(&self, limit: usize) -> Result<Arc<Table<FulfilmentCenterRecord>>> {
        self.load(&self.centers, limit)
    }

    /// First `limit` rows of `meal_info.csv`
    pub fn meals(&self, limit: usize) -> Result<Arc<Table<MealRecord>>> {
        self.load(&self.meals, limit)
    }

    fn load<R>(&self, cache: &TableCache<R>, limit: usize) -> Result<Arc<Table<R>>>
    where
        R: Record + DeserializeOwned,
    {
        cache.get_or_load(limit, || {
            let path = self.path(R::DATASET);
            info!("Reading {} (limit {})", path.display(), limit);
            read_table(&path, Some(limit))
        })
    }

    /// Load all three tables with the configured limits
    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    pub fn load_all(&self, limits: &LimitsConfig) -> Result<Datasets> {
        let datasets = Datasets {
            weekly: self.weekly_demand(limits.weekly_rows)?,
            centers: self.fulfilment_centers(limits.center_rows)?,
            meals: self.meals(limits.meal_rows)?,
        };
        debug!(
            weekly = datasets.weekly.len(),
            centers = datasets.centers.len(),
            meals = datasets.meals.len(),
            "Datasets loaded"
        );
        Ok(datasets)
    }

    /// Run `load_all` on a worker thread; the result arrives on the returned receiver
    pub fn load_in_background(self: &Arc<Self>, limits: LimitsConfig) -> Receiver<Result<Datasets>> {
        let (tx, rx) = channel();
        let service = Arc::clone(self);

        thread::spawn(move || {
            let result = service.load_all(&limits);
            if let Err(e) = &result {
                error!("Failed to load datasets: {}", e);
            }
            if tx.send(result).is_err() {
                debug!("Dataset receiver dropped before load finished");
            }
        });

        rx
    }

    /// How many times a dataset file has actually been read
    pub fn reads(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::WeeklyDemand => self.weekly.loads(),
            Dataset::FulfilmentCenters => self.centers.loads(),
            Dataset::Meals => self.meals.loads(),
        }
    }

    /// Dataset files that do not exist in the data directory
    pub fn missing_files(&self) -> Vec<PathBuf> {
        Dataset::all()
            .iter()
            .map(|d| self.path(*d))
            .filter(|p| !p.is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fooddash_core::FoodDashError;
    use std::fs;

    const WEEKLY_HEADER: &str = "id,week,center_id,meal_id,checkout_price,base_price,emailer_for_promotion,homepage_featured,num_orders";
    const CENTER_TYPES: [&str; 3] = ["TYPE_A", "TYPE_B", "TYPE_C"];

    fn write_weekly(dir: &Path, rows: usize) {
        let mut csv = String::from(WEEKLY_HEADER);
        for i in 0..rows {
            csv.push_str(&format!(
                "\n{},{},{},1885,{}.5,{}.0,0,{},{}",
                1_000_000 + i,
                1 + i / 50,
                10 + i % 77,
                100 + i,
                120 + i,
                i % 2,
                i * 3
            ));
        }
        csv.push('\n');
        fs::write(dir.join("train.csv"), csv).unwrap();
    }

    fn write_centers(dir: &Path, rows: usize) {
        let mut csv = String::from("center_id,city_code,region_code,center_type,op_area");
        for i in 0..rows {
            csv.push_str(&format!(
                "\n{},{},{},{},{}.{}",
                10 + i,
                400 + i,
                [56, 85, 77, 34, 35, 71, 93, 23][i % 8],
                CENTER_TYPES[i % 3],
                2 + i % 5,
                i % 10
            ));
        }
        csv.push('\n');
        fs::write(dir.join("fulfilment_center_info.csv"), csv).unwrap();
    }

    fn write_meals(dir: &Path) {
        fs::write(
            dir.join("meal_info.csv"),
            "meal_id,category,cuisine\n1885,Beverages,Thai\n1993,Beverages,Thai\n2139,Beverages,Indian\n",
        )
        .unwrap();
    }

    fn fixture(weekly_rows: usize, center_rows: usize) -> (tempfile::TempDir, DatasetService) {
        let dir = tempfile::tempdir().unwrap();
        write_weekly(dir.path(), weekly_rows);
        write_centers(dir.path(), center_rows);
        write_meals(dir.path());
        let service = DatasetService::new(dir.path());
        (dir, service)
    }

    #[test]
    fn test_limit_returns_min_of_limit_and_rows() {
        let (_dir, service) = fixture(1500, 77);

        let weekly = service.weekly_demand(1000).unwrap();
        assert_eq!(weekly.len(), 1000);
        let ids: Vec<u64> = weekly.head(3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1_000_000, 1_000_001, 1_000_002]);
        assert_eq!(weekly.rows()[999].id, 1_000_999);

        let all = service.weekly_demand(5000).unwrap();
        assert_eq!(all.len(), 1500);
    }

    #[test]
    fn test_same_limit_served_from_cache() {
        let (dir, service) = fixture(20, 5);

        let first = service.weekly_demand(10).unwrap();
        // Removing the file proves the second call never touches the disk
        fs::remove_file(dir.path().join("train.csv")).unwrap();
        let second = service.weekly_demand(10).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(service.reads(Dataset::WeeklyDemand), 1);
    }

    #[test]
    fn test_different_limit_reads_again() {
        let (_dir, service) = fixture(20, 5);

        service.weekly_demand(10).unwrap();
        service.weekly_demand(15).unwrap();
        service.weekly_demand(10).unwrap();

        assert_eq!(service.reads(Dataset::WeeklyDemand), 2);
        assert_eq!(service.reads(Dataset::Meals), 0);
    }

    #[test]
    fn test_center_file_with_77_rows() {
        let (_dir, service) = fixture(5, 77);

        let centers = service.fulfilment_centers(10_000).unwrap();
        assert_eq!(centers.len(), 77);

        let counts = fooddash_core::category_counts(
            centers.rows().iter().map(|c| c.region_code.to_string()),
        );
        assert_eq!(counts.len(), 8);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 77);
        assert_eq!(counts[0].label, "56");
        assert_eq!(counts[0].count, 10);
    }

    #[test]
    fn test_load_all_uses_configured_limits() {
        let (_dir, service) = fixture(1200, 77);

        let data = service.load_all(&LimitsConfig::default()).unwrap();
        assert_eq!(data.weekly.len(), 1000);
        assert_eq!(data.centers.len(), 77);
        assert_eq!(data.meals.len(), 3);
        assert_eq!(data.row_count(Dataset::Meals), 3);
    }

    #[test]
    fn test_missing_file_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write_meals(dir.path());
        let service = DatasetService::new(dir.path());

        let err = service.load_all(&LimitsConfig::default()).unwrap_err();
        assert!(matches!(err, FoodDashError::Io { .. }));
        assert_eq!(err.path(), Some(dir.path().join("train.csv").as_path()));
        assert_eq!(service.missing_files().len(), 2);
    }

    #[test]
    fn test_failed_read_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let service = DatasetService::new(dir.path());

        assert!(service.meals(100).is_err());
        write_meals(dir.path());
        assert_eq!(service.meals(100).unwrap().len(), 3);
        assert_eq!(service.reads(Dataset::Meals), 2);
    }

    #[test]
    fn test_load_in_background() {
        let (_dir, service) = fixture(50, 10);
        let service = Arc::new(service);

        let rx = service.load_in_background(LimitsConfig::default());
        let data = rx.recv().unwrap().unwrap();
        assert_eq!(data.weekly.len(), 50);

        // The worker populated the shared cache
        let again = service.weekly_demand(LimitsConfig::default().weekly_rows).unwrap();
        assert!(Arc::ptr_eq(&data.weekly, &again));
        assert_eq!(service.reads(Dataset::WeeklyDemand), 1);
    }
}
