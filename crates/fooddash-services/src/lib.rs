mod cache;
pub mod config;
mod datasets;
mod loader;
mod services;

pub use cache::TableCache;
pub use config::{default_config_path, load_config, resolve_config_path};
pub use datasets::DatasetService;
pub use loader::read_table;
pub use services::Services;

// Re-export core types for the front-ends (they should only import from services)
pub use fooddash_core::{
    // Config
    ChartSettings, DataConfig, FoodDashConfig, LimitsConfig,
    // Errors
    FoodDashError, Result,
    // Records and tables
    Dataset, Datasets, FulfilmentCenterRecord, MealRecord, Record, Table, WeeklyDemandRecord,
    // Charts and page
    category_counts, Bin, CategoryCount, DistSeries, Distplot, Histogram, Page, PageState, Series, Widget,
    CENTER_TOGGLE_LABEL, PAGE_TITLE,
};
