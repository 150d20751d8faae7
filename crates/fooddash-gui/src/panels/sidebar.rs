use std::path::{Path, PathBuf};

use eframe::egui;

pub struct SidebarPanel {
    image_uri: Option<String>,
}

impl SidebarPanel {
    pub fn new(image: Option<PathBuf>) -> Self {
        Self {
            image_uri: image.map(|path| format!("file://{}", path.display())),
        }
    }

    pub fn ui(&self, ui: &mut egui::Ui, data_dir: &Path) {
        ui.add_space(8.0);
        ui.heading("Food Demand Prediction");
        ui.add_space(10.0);

        if let Some(uri) = &self.image_uri {
            ui.add(
                egui::Image::new(uri.as_str())
                    .max_width(ui.available_width())
                    .maintain_aspect_ratio(true),
            );
            ui.add_space(10.0);
        }

        ui.separator();
        ui.label(egui::RichText::new("Data directory").small().color(egui::Color32::GRAY));
        ui.label(egui::RichText::new(data_dir.display().to_string()).monospace());
    }
}
