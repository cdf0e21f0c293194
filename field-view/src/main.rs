//! Application entry point for the debate-practice front page.
//!
//! This binary sets up logging and eframe/egui, then delegates all UI to
//! [`Viewer`] from the `viewer` module.

mod backdrop;
mod viewer;
mod widgets;

use field_core::config::FieldConfig;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Reads the particle config named on the command line, if any.
///
/// The background is decorative, so a bad config is logged and replaced by
/// the defaults instead of stopping the app.
fn load_config(path: Option<String>) -> FieldConfig {
    let Some(path) = path else {
        return FieldConfig::default();
    };

    match FieldConfig::load(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(%err, path = %path, "using default particle config");
            FieldConfig::default()
        }
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = load_config(std::env::args().nth(1));
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Debate Practice",
        options,
        Box::new(move |cc| Ok(Box::new(Viewer::new(cc.egui_ctx.clone(), cfg)))),
    )
}
