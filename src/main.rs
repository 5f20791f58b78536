// TaxDesk - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Data directory resolution and reference data loading
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use taxdesk::app;
pub use taxdesk::core;
pub use taxdesk::platform;
pub use taxdesk::ui;
pub use taxdesk::util;

use clap::Parser;
use std::path::PathBuf;

/// Apply the configured theme and body font size to the egui context.
fn configure_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}

/// TaxDesk - vehicle tax master search desk.
///
/// Search the master table by owner name or address, tag matches with an
/// office and collect them in the result file.
#[derive(Parser, Debug)]
#[command(name = "TaxDesk", version, about)]
struct Cli {
    /// Data directory holding the master, office and result CSV files.
    data_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config first: it supplies the log level and log file.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "TaxDesk starting"
    );
    for w in &config_warnings {
        tracing::warn!(warning = %w, "Config warning");
    }

    // Data directory: CLI override > config > default
    let data_dir = cli.data_dir.as_deref().unwrap_or(config.data_dir.as_path());
    let files = app::data::DataFiles::resolve(data_dir, &config);

    let mut state = app::state::AppState::new(files, cli.debug);
    for w in config_warnings {
        state.push_warning(w);
    }
    if !state.warnings.is_empty() {
        state.show_summary = true;
    }

    tracing::info!(
        master = state.master.len(),
        offices = state.offices.len(),
        saved = state.saved_count,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} - {} v{}",
                util::constants::APP_TITLE,
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_ID,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::TaxDeskApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch TaxDesk GUI: {e}");
        std::process::exit(1);
    }
}
