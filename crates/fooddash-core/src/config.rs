use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Dataset;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDashConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub charts: ChartSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub image_dir: PathBuf,
    pub sidebar_image: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            image_dir: PathBuf::from("static_images"),
            sidebar_image: "flourish.png".to_string(),
        }
    }
}

impl DataConfig {
    pub fn sidebar_image_path(&self) -> PathBuf {
        self.image_dir.join(&self.sidebar_image)
    }
}

/// Row caps passed to the loader for each dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub weekly_rows: usize,
    pub center_rows: usize,
    pub meal_rows: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            weekly_rows: 1000,
            center_rows: 10_000,
            meal_rows: 10_000,
        }
    }
}

impl LimitsConfig {
    pub fn for_dataset(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::WeeklyDemand => self.weekly_rows,
            Dataset::FulfilmentCenters => self.center_rows,
            Dataset::Meals => self.meal_rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Weekly rows feeding the histograms and the line chart
    pub histogram_rows: usize,
    pub histogram_bins: usize,
    /// Weekly rows feeding the area chart
    pub area_rows: usize,
    /// Bin width per distplot series (center_id, region_code)
    pub distplot_bin_sizes: Vec<f64>,
    pub kde_points: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            histogram_rows: 200,
            histogram_bins: 20,
            area_rows: 40,
            distplot_bin_sizes: vec![10.0, 15.0],
            kde_points: 500,
        }
    }
}
