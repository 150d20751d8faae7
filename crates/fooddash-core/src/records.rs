use serde::{Deserialize, Serialize};

use crate::Dataset;

/// A row type that can be read from one of the dataset files and shown in a table
pub trait Record: Clone + Send + Sync + 'static {
    const DATASET: Dataset;
    const COLUMNS: &'static [&'static str];

    /// Display cells, one per entry in `COLUMNS`
    fn cells(&self) -> Vec<String>;
}

// =============================================================================
// Weekly demand (train.csv)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDemandRecord {
    pub id: u64,
    pub week: u32,
    pub center_id: u32,
    pub meal_id: u32,
    pub checkout_price: f64,
    pub base_price: f64,
    pub emailer_for_promotion: u8,
    pub homepage_featured: u8,
    pub num_orders: u64,
}

impl Record for WeeklyDemandRecord {
    const DATASET: Dataset = Dataset::WeeklyDemand;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "week",
        "center_id",
        "meal_id",
        "checkout_price",
        "base_price",
        "emailer_for_promotion",
        "homepage_featured",
        "num_orders",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.week.to_string(),
            self.center_id.to_string(),
            self.meal_id.to_string(),
            format!("{:.2}", self.checkout_price),
            format!("{:.2}", self.base_price),
            self.emailer_for_promotion.to_string(),
            self.homepage_featured.to_string(),
            self.num_orders.to_string(),
        ]
    }
}

// =============================================================================
// Fulfillment centers (fulfilment_center_info.csv)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfilmentCenterRecord {
    pub center_id: u32,
    pub city_code: u32,
    pub region_code: u32,
    pub center_type: String,
    pub op_area: f64,
}

impl Record for FulfilmentCenterRecord {
    const DATASET: Dataset = Dataset::FulfilmentCenters;
    const COLUMNS: &'static [&'static str] =
        &["center_id", "city_code", "region_code", "center_type", "op_area"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.center_id.to_string(),
            self.city_code.to_string(),
            self.region_code.to_string(),
            self.center_type.clone(),
            format!("{:.1}", self.op_area),
        ]
    }
}

// =============================================================================
// Meals (meal_info.csv)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub meal_id: u32,
    pub category: String,
    pub cuisine: String,
}

impl Record for MealRecord {
    const DATASET: Dataset = Dataset::Meals;
    const COLUMNS: &'static [&'static str] = &["meal_id", "category", "cuisine"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.meal_id.to_string(),
            self.category.clone(),
            self.cuisine.clone(),
        ]
    }
}
