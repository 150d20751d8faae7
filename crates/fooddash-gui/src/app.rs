use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;
use fooddash_services::{Datasets, Page, PageState, Result, Services};

use crate::panels::{page::render_page, sidebar::SidebarPanel};

enum LoadState {
    Loading(Receiver<Result<Datasets>>),
    Loaded { data: Datasets, page: Page },
    Failed(String),
}

pub struct FoodDashApp {
    services: Services,
    sidebar: SidebarPanel,
    load: LoadState,
    state: PageState,
}

impl FoodDashApp {
    pub fn new(cc: &eframe::CreationContext<'_>, services: Services) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let sidebar = SidebarPanel::new(services.sidebar_image());
        let rx = services.load_datasets_in_background();

        Self {
            services,
            sidebar,
            load: LoadState::Loading(rx),
            state: PageState::default(),
        }
    }

    fn poll_load(&mut self) {
        let LoadState::Loading(rx) = &self.load else {
            return;
        };

        self.load = match rx.try_recv() {
            Ok(Ok(data)) => {
                let page = self.services.build_page(&data, &self.state);
                tracing::info!("Page built with {} widgets", page.len());
                LoadState::Loaded { data, page }
            }
            Ok(Err(e)) => LoadState::Failed(e.to_string()),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                LoadState::Failed("Data loader stopped unexpectedly".to_string())
            }
        };
    }

    fn render_central(&mut self, ui: &mut egui::Ui) {
        match &mut self.load {
            LoadState::Loading(_) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading data...");
                });
            }
            LoadState::Failed(msg) => {
                ui.heading(fooddash_services::PAGE_TITLE);
                ui.add_space(10.0);
                ui.colored_label(egui::Color32::RED, format!("Failed to load data: {}", msg));
            }
            LoadState::Loaded { data, page } => {
                let toggled = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| render_page(ui, page, data, &mut self.state))
                    .inner;

                if toggled {
                    tracing::debug!("Center table visible: {}", self.state.show_center_table);
                    *page = self.services.build_page(data, &self.state);
                }
            }
        }
    }

    /// Data directory shown under the sidebar image
    fn data_dir(&self) -> PathBuf {
        self.services.datasets.data_dir().to_path_buf()
    }
}

impl eframe::App for FoodDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        let data_dir = self.data_dir();
        egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.sidebar.ui(ui, &data_dir);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_central(ui);
        });

        if matches!(self.load, LoadState::Loading(_)) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
