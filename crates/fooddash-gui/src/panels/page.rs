use eframe::egui;
use fooddash_services::{Dataset, Datasets, Page, PageState, Widget};

use super::{charts, table::render_table};

/// Draw every widget of the page in order.
///
/// Returns true when the center-table checkbox changed, in which case the
/// caller rebuilds the page.
pub fn render_page(ui: &mut egui::Ui, page: &Page, data: &Datasets, state: &mut PageState) -> bool {
    let mut toggled = false;
    for (id, widget) in page.widgets.iter().enumerate() {
        toggled |= render_widget(ui, id, widget, data, state);
    }
    toggled
}

fn render_widget(
    ui: &mut egui::Ui,
    id: usize,
    widget: &Widget,
    data: &Datasets,
    state: &mut PageState,
) -> bool {
    match widget {
        Widget::Title(text) => {
            ui.label(egui::RichText::new(text).heading().size(28.0).strong());
            ui.add_space(12.0);
        }
        Widget::Subheader(text) => {
            ui.add_space(16.0);
            ui.label(egui::RichText::new(text).heading());
            ui.add_space(6.0);
        }
        Widget::Heading(text) => {
            ui.label(egui::RichText::new(text).strong());
            ui.add_space(4.0);
        }
        Widget::Columns(columns) => {
            let mut toggled = false;
            ui.columns(columns.len(), |uis| {
                for (col, (col_ui, widgets)) in uis.iter_mut().zip(columns).enumerate() {
                    for (i, w) in widgets.iter().enumerate() {
                        // Nested ids stay clear of top-level widget indices
                        let nested = (id + 1) * 1000 + col * 100 + i;
                        toggled |= render_widget(col_ui, nested, w, data, state);
                    }
                }
            });
            return toggled;
        }
        Widget::Table(dataset) => match dataset {
            Dataset::WeeklyDemand => render_table(ui, &data.weekly),
            Dataset::FulfilmentCenters => render_table(ui, &data.centers),
            Dataset::Meals => render_table(ui, &data.meals),
        },
        Widget::CenterToggle { label } => {
            return ui.checkbox(&mut state.show_center_table, label.as_str()).changed();
        }
        Widget::Bars { name, points } => charts::bars(ui, id, name, points),
        Widget::CategoryBars { name, counts } => charts::category_bars(ui, id, name, counts),
        Widget::Histogram { name, histogram } => charts::histogram(ui, id, name, histogram),
        Widget::Line { series } => charts::line(ui, id, series),
        Widget::Area { series } => charts::area(ui, id, series),
        Widget::Distplot(distplot) => charts::distplot(ui, id, distplot),
    }
    false
}
