use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    #[default]
    WeeklyDemand,
    FulfilmentCenters,
    Meals,
}

impl Dataset {
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::WeeklyDemand => "Weekly Demand",
            Dataset::FulfilmentCenters => "Fulfillment Centers",
            Dataset::Meals => "Meals",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::WeeklyDemand => "train.csv",
            Dataset::FulfilmentCenters => "fulfilment_center_info.csv",
            Dataset::Meals => "meal_info.csv",
        }
    }

    /// Short name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::WeeklyDemand => "weekly",
            Dataset::FulfilmentCenters => "centers",
            Dataset::Meals => "meals",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weekly" | "train" => Some(Dataset::WeeklyDemand),
            "centers" | "center" => Some(Dataset::FulfilmentCenters),
            "meals" | "meal" => Some(Dataset::Meals),
            _ => None,
        }
    }

    pub fn all() -> &'static [Dataset] {
        &[
            Dataset::WeeklyDemand,
            Dataset::FulfilmentCenters,
            Dataset::Meals,
        ]
    }
}
