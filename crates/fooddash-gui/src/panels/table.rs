use eframe::egui;
use egui_extras::{Column, TableBuilder};
use fooddash_services::{Record, Table};

const ROW_HEIGHT: f32 = 18.0;
const MAX_HEIGHT: f32 = 320.0;

/// Scrollable raw-data table with a leading row index column
pub fn render_table<R: Record>(ui: &mut egui::Ui, table: &Table<R>) {
    if table.is_empty() {
        ui.label("No rows");
        return;
    }

    ui.push_id(R::DATASET.as_str(), |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(MAX_HEIGHT)
            .column(Column::auto().at_least(36.0))
            .columns(Column::auto().at_least(60.0), table.columns().len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                header.col(|_| {});
                for name in table.columns() {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let index = row.index();
                    row.col(|ui| {
                        ui.label(egui::RichText::new(index.to_string()).color(egui::Color32::GRAY));
                    });
                    for cell in table.rows()[index].cells() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });

    ui.label(
        egui::RichText::new(format!("{} rows × {} columns", table.len(), table.columns().len()))
            .small()
            .color(egui::Color32::GRAY),
    );
}
