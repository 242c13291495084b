// HappyHour Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use happyhour::services::clock::SystemClock;
use happyhour::services::database::Database;
use happyhour::ui::HappyHourApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting HappyHourAI");

    let db_path = database_path()?;
    let database = Database::new(&db_path)?;
    database.initialize_schema()?;

    // The database outlives the event loop; leaking gives the UI a
    // 'static handle without reference counting
    let database: &'static Database = Box::leak(Box::new(database));

    let app = HappyHourApp::new(database, Box::new(SystemClock))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HappyHourAI",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run UI: {}", e))
}

/// Resolve the favorites database path under the platform data dir
fn database_path() -> Result<String> {
    let dirs = ProjectDirs::from("com", "Ken24T", "HappyHour")
        .context("Could not determine app data directory")?;

    std::fs::create_dir_all(dirs.data_dir()).context("Failed to create app data directory")?;

    let path = dirs.data_dir().join("happyhour.db");
    Ok(path.to_string_lossy().into_owned())
}
