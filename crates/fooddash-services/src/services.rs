//! Service container
//!
//! Single entry point the front-ends use: resolved configuration plus the
//! shared, memoizing dataset loader.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use fooddash_core::{Datasets, FoodDashConfig, Page, PageState, Result};

use crate::DatasetService;

pub struct Services {
    pub config: FoodDashConfig,
    pub datasets: Arc<DatasetService>,
}

impl Services {
    pub fn new(config: FoodDashConfig) -> Self {
        let datasets = Arc::new(DatasetService::new(config.data.dir.clone()));
        tracing::info!("Data directory: {}", config.data.dir.display());
        Self { config, datasets }
    }

    /// Load the three tables with the configured row limits
    pub fn load_datasets(&self) -> Result<Datasets> {
        self.datasets.load_all(&self.config.limits)
    }

    pub fn load_datasets_in_background(&self) -> Receiver<Result<Datasets>> {
        self.datasets.load_in_background(self.config.limits)
    }

    pub fn build_page(&self, data: &Datasets, state: &PageState) -> Page {
        Page::build(data, &self.config.charts, state)
    }

    /// Sidebar image path, if the asset exists
    pub fn sidebar_image(&self) -> Option<PathBuf> {
        let path = self.config.data.sidebar_image_path();
        if path.is_file() {
            return Some(path);
        }
        tracing::warn!("Sidebar image not found: {}", path.display());
        None
    }
}
