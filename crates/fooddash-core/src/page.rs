//! Page composition
//!
//! The dashboard is a fixed, straight-line sequence of widgets. `Page::build`
//! produces that sequence from the loaded tables so the GUI only draws it.

use std::sync::Arc;

use crate::charts::{category_counts, indexed_points, CategoryCount, Distplot, Histogram, Series};
use crate::{
    ChartSettings, Dataset, FulfilmentCenterRecord, MealRecord, Table, WeeklyDemandRecord,
};

pub const PAGE_TITLE: &str = "Food Demand Forecasting";
pub const CENTER_TOGGLE_LABEL: &str = "Show Center Information Data";

/// The three loaded tables
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub weekly: Arc<Table<WeeklyDemandRecord>>,
    pub centers: Arc<Table<FulfilmentCenterRecord>>,
    pub meals: Arc<Table<MealRecord>>,
}

impl Datasets {
    pub fn row_count(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::WeeklyDemand => self.weekly.len(),
            Dataset::FulfilmentCenters => self.centers.len(),
            Dataset::Meals => self.meals.len(),
        }
    }
}

/// UI state the page depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub show_center_table: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Title(String),
    Subheader(String),
    /// Small heading above a chart or table inside a column
    Heading(String),
    /// Side-by-side columns, each holding its own widgets
    Columns(Vec<Vec<Widget>>),
    /// Raw rows of a loaded dataset
    Table(Dataset),
    /// Checkbox bound to `PageState::show_center_table`
    CenterToggle { label: String },
    Bars { name: String, points: Vec<[f64; 2]> },
    CategoryBars { name: String, counts: Vec<CategoryCount> },
    Histogram { name: String, histogram: Histogram },
    Line { series: Vec<Series> },
    Area { series: Vec<Series> },
    Distplot(Distplot),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub widgets: Vec<Widget>,
}

impl Page {
    pub fn build(data: &Datasets, charts: &ChartSettings, state: &PageState) -> Self {
        let mut widgets = vec![Widget::Title(PAGE_TITLE.to_string())];

        weekly_section(&mut widgets, &data.weekly);
        histogram_section(&mut widgets, &data.weekly, charts);
        trend_section(&mut widgets, &data.weekly, charts);
        center_section(&mut widgets, &data.centers, charts, state);
        meal_section(&mut widgets, &data.meals);

        Self { widgets }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

fn weekly_section(widgets: &mut Vec<Widget>, weekly: &Table<WeeklyDemandRecord>) {
    widgets.push(Widget::Subheader("Weekly Demand".to_string()));
    widgets.push(Widget::Columns(vec![
        vec![
            Widget::Heading("Raw Data".to_string()),
            Widget::Table(Dataset::WeeklyDemand),
        ],
        vec![
            Widget::Heading("Number of Meal Orders Per Client".to_string()),
            Widget::Bars {
                name: "num_orders".to_string(),
                points: indexed_points(&weekly.column(|r| r.num_orders as f64)),
            },
        ],
    ]));
}

fn histogram_section(
    widgets: &mut Vec<Widget>,
    weekly: &Table<WeeklyDemandRecord>,
    charts: &ChartSettings,
) {
    let rows = charts.histogram_rows;
    let columns: [(&str, &str, fn(&WeeklyDemandRecord) -> f64); 3] = [
        ("Number of Orders", "num_orders", |r| r.num_orders as f64),
        ("Checkout Price", "checkout_price", |r| r.checkout_price),
        ("Base Price", "base_price", |r| r.base_price),
    ];

    widgets.push(Widget::Subheader("Histograms of Weekly Demand".to_string()));
    widgets.push(Widget::Columns(
        columns
            .iter()
            .map(|(heading, name, f)| {
                vec![
                    Widget::Heading(heading.to_string()),
                    Widget::Histogram {
                        name: name.to_string(),
                        histogram: Histogram::new(
                            &weekly.head_column(rows, f),
                            charts.histogram_bins,
                        ),
                    },
                ]
            })
            .collect(),
    ));
}

fn trend_section(
    widgets: &mut Vec<Widget>,
    weekly: &Table<WeeklyDemandRecord>,
    charts: &ChartSettings,
) {
    let line_rows = charts.histogram_rows;
    widgets.push(Widget::Subheader(
        "Weekly Demand - Base Price, Checkout Price, Number of Orders".to_string(),
    ));
    widgets.push(Widget::Line {
        series: vec![
            Series::indexed("num_orders", &weekly.head_column(line_rows, |r| r.num_orders as f64)),
            Series::indexed("checkout_price", &weekly.head_column(line_rows, |r| r.checkout_price)),
            Series::indexed("base_price", &weekly.head_column(line_rows, |r| r.base_price)),
        ],
    });

    let area_rows = charts.area_rows;
    widgets.push(Widget::Subheader(
        "Weekly Demand - Base Price, Number of Orders".to_string(),
    ));
    widgets.push(Widget::Area {
        series: vec![
            Series::indexed("num_orders", &weekly.head_column(area_rows, |r| r.num_orders as f64)),
            Series::indexed("base_price", &weekly.head_column(area_rows, |r| r.base_price)),
        ],
    });
}

fn center_section(
    widgets: &mut Vec<Widget>,
    centers: &Table<FulfilmentCenterRecord>,
    charts: &ChartSettings,
    state: &PageState,
) {
    widgets.push(Widget::Subheader("Fulfillment Center Information".to_string()));
    widgets.push(Widget::CenterToggle {
        label: CENTER_TOGGLE_LABEL.to_string(),
    });
    if state.show_center_table {
        widgets.push(Widget::Subheader(
            "Fulfillment Center Information Data".to_string(),
        ));
        widgets.push(Widget::Table(Dataset::FulfilmentCenters));
    }

    widgets.push(Widget::Bars {
        name: "region_code".to_string(),
        points: indexed_points(&centers.column(|c| c.region_code as f64)),
    });
    widgets.push(Widget::CategoryBars {
        name: "center_type".to_string(),
        counts: category_counts(centers.rows().iter().map(|c| c.center_type.as_str())),
    });
    widgets.push(Widget::Distplot(Distplot::new(
        vec![
            ("center_id".to_string(), centers.column(|c| c.center_id as f64)),
            ("region_code".to_string(), centers.column(|c| c.region_code as f64)),
        ],
        &charts.distplot_bin_sizes,
        charts.kde_points,
    )));
}

fn meal_section(widgets: &mut Vec<Widget>, meals: &Table<MealRecord>) {
    widgets.push(Widget::Subheader("Meal Information".to_string()));
    widgets.push(Widget::Table(Dataset::Meals));
    widgets.push(Widget::Columns(vec![
        vec![
            Widget::Heading("Meals per Category".to_string()),
            Widget::CategoryBars {
                name: "category".to_string(),
                counts: category_counts(meals.rows().iter().map(|m| m.category.as_str())),
            },
        ],
        vec![
            Widget::Heading("Meals per Cuisine".to_string()),
            Widget::CategoryBars {
                name: "cuisine".to_string(),
                counts: category_counts(meals.rows().iter().map(|m| m.cuisine.as_str())),
            },
        ],
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekly_row(i: u64) -> WeeklyDemandRecord {
        WeeklyDemandRecord {
            id: 1_000_000 + i,
            week: 1 + (i / 10) as u32,
            center_id: 10 + (i % 7) as u32,
            meal_id: 1885,
            checkout_price: 100.0 + i as f64,
            base_price: 120.0 + i as f64,
            emailer_for_promotion: 0,
            homepage_featured: (i % 2) as u8,
            num_orders: 10 * (i + 1),
        }
    }

    fn datasets(weekly_rows: u64) -> Datasets {
        let centers = (0..77u32)
            .map(|i| FulfilmentCenterRecord {
                center_id: 10 + i,
                city_code: 500 + i,
                region_code: [56, 85, 77, 34][i as usize % 4],
                center_type: ["TYPE_A", "TYPE_B", "TYPE_C"][i as usize % 3].to_string(),
                op_area: 3.0 + i as f64 / 10.0,
            })
            .collect();
        let meals = vec![
            MealRecord {
                meal_id: 1885,
                category: "Beverages".to_string(),
                cuisine: "Thai".to_string(),
            },
            MealRecord {
                meal_id: 1993,
                category: "Beverages".to_string(),
                cuisine: "Indian".to_string(),
            },
        ];

        Datasets {
            weekly: Arc::new(Table::new((0..weekly_rows).map(weekly_row).collect())),
            centers: Arc::new(Table::new(centers)),
            meals: Arc::new(Table::new(meals)),
        }
    }

    fn histograms(page: &Page) -> Vec<&Histogram> {
        page.widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Columns(cols) => Some(cols),
                _ => None,
            })
            .flatten()
            .flatten()
            .filter_map(|w| match w {
                Widget::Histogram { histogram, .. } => Some(histogram),
                _ => None,
            })
            .collect()
    }

    fn area_series(page: &Page) -> &[Series] {
        page.widgets
            .iter()
            .find_map(|w| match w {
                Widget::Area { series } => Some(series.as_slice()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_histograms_use_first_200_rows() {
        let page = Page::build(&datasets(1000), &ChartSettings::default(), &PageState::default());
        let hists = histograms(&page);
        assert_eq!(hists.len(), 3);
        for hist in hists {
            assert_eq!(hist.total(), 200);
            assert_eq!(hist.bins.len(), 20);
        }

        // num_orders over the first 200 rows spans 10..=2000
        let num_orders = histograms(&page)[0];
        assert_eq!(num_orders.bins[0].start, 10.0);
        assert_eq!(num_orders.bins[19].end, 2000.0);
    }

    #[test]
    fn test_histograms_with_short_table() {
        let page = Page::build(&datasets(50), &ChartSettings::default(), &PageState::default());
        for hist in histograms(&page) {
            assert_eq!(hist.total(), 50);
        }
    }

    #[test]
    fn test_area_chart_uses_first_40_rows() {
        let page = Page::build(&datasets(1000), &ChartSettings::default(), &PageState::default());
        let series = area_series(&page);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "num_orders");
        assert_eq!(series[0].len(), 40);
        assert_eq!(series[0].points[39], [39.0, 400.0]);
        assert_eq!(series[1].name, "base_price");
        assert_eq!(series[1].len(), 40);

        let short = Page::build(&datasets(12), &ChartSettings::default(), &PageState::default());
        assert_eq!(area_series(&short)[0].len(), 12);
    }

    #[test]
    fn test_center_toggle_only_adds_center_table() {
        let data = datasets(300);
        let charts = ChartSettings::default();
        let hidden = Page::build(&data, &charts, &PageState { show_center_table: false });
        let shown = Page::build(&data, &charts, &PageState { show_center_table: true });

        assert!(!hidden.widgets.contains(&Widget::Table(Dataset::FulfilmentCenters)));
        assert!(shown.widgets.contains(&Widget::Table(Dataset::FulfilmentCenters)));
        assert_eq!(shown.len(), hidden.len() + 2);

        let stripped: Vec<Widget> = shown
            .widgets
            .into_iter()
            .filter(|w| {
                *w != Widget::Table(Dataset::FulfilmentCenters)
                    && *w != Widget::Subheader("Fulfillment Center Information Data".to_string())
            })
            .collect();
        assert_eq!(stripped, hidden.widgets);
    }

    #[test]
    fn test_center_charts() {
        let page = Page::build(&datasets(10), &ChartSettings::default(), &PageState::default());

        let region_bars = page
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Bars { name, points } if name == "region_code" => Some(points),
                _ => None,
            })
            .unwrap();
        assert_eq!(region_bars.len(), 77);
        assert_eq!(region_bars[1], [1.0, 85.0]);

        let type_counts = page
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::CategoryBars { name, counts } if name == "center_type" => Some(counts),
                _ => None,
            })
            .unwrap();
        let total: usize = type_counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 77);
        assert_eq!(type_counts[0].label, "TYPE_A");
        assert_eq!(type_counts[0].count, 26);

        let distplot = page
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Distplot(d) => Some(d),
                _ => None,
            })
            .unwrap();
        assert_eq!(distplot.series[0].label, "center_id");
        assert_eq!(distplot.series[1].label, "region_code");
        assert_eq!(distplot.series[1].bins[0].width(), 15.0);
    }

    #[test]
    fn test_widget_order() {
        let page = Page::build(&datasets(10), &ChartSettings::default(), &PageState::default());
        let subheaders: Vec<&str> = page
            .widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Subheader(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(page.widgets[0], Widget::Title(PAGE_TITLE.to_string()));
        assert_eq!(
            subheaders,
            vec![
                "Weekly Demand",
                "Histograms of Weekly Demand",
                "Weekly Demand - Base Price, Checkout Price, Number of Orders",
                "Weekly Demand - Base Price, Number of Orders",
                "Fulfillment Center Information",
                "Meal Information",
            ]
        );
    }
}
