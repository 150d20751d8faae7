mod app;
mod panels;

use app::FoodDashApp;
use eframe::egui;
use fooddash_services::{load_config, resolve_config_path, Services};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Set up file logging to /tmp/fooddash.log
    let file_appender = tracing_appender::rolling::never("/tmp", "fooddash.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize tracing with both stdout and file output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("fooddash_services=debug,fooddash_gui=info")
        }))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("Food demand dashboard starting");

    let config_path = resolve_config_path(None, |key| std::env::var(key).ok());
    let config = load_config(config_path.as_deref())?;
    let services = Services::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Food Prediction"),
        ..Default::default()
    };

    eframe::run_native(
        "Food Prediction",
        options,
        Box::new(|cc| Ok(Box::new(FoodDashApp::new(cc, services)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
