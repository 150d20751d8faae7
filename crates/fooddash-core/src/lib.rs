// Domain modules
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod page;
pub mod records;
pub mod table;

pub use charts::{
    category_counts, indexed_points, Bin, CategoryCount, DistSeries, Distplot, GaussianKde,
    Histogram, Series,
};
pub use config::{ChartSettings, DataConfig, FoodDashConfig, LimitsConfig};
pub use dataset::Dataset;
pub use error::{FoodDashError, Result};
pub use page::{Datasets, Page, PageState, Widget, CENTER_TOGGLE_LABEL, PAGE_TITLE};
pub use records::{FulfilmentCenterRecord, MealRecord, Record, WeeklyDemandRecord};
pub use table::Table;
