#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Context as _;
use offerdeck::app::config::DeckConfig;
use offerdeck::app::draft::generator::is_draft_worker;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_FILTER: &str = "offerdeck=info,eframe=info,egui=warn,reqwest=warn";

fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "offerdeck").map(|dirs| dirs.data_dir().join("logs"))
}

fn init_logging() -> anyhow::Result<PathBuf> {
    let log_dir = log_dir().context("Could not determine a data directory for logs")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join("offerdeck.log");
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    // RUST_LOG wins over the built-in filter
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => {
            tracing_subscriber::EnvFilter::try_new(directives)
                .context("Failed to parse RUST_LOG")?
        }
        _ => tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER)
            .context("Failed to parse default log filter")?,
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false), // No ANSI colors in file
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // eframe and egui log through the `log` crate
    tracing_log::LogTracer::init().context("Failed to initialize log-to-tracing bridge")?;

    Ok(log_path)
}

fn setup_panic_handler() {
    // Installed before logging so early crashes still leave a trace
    std::panic::set_hook(Box::new(|panic_info| {
        // Draft workers recover from their own panics; the request just fails
        if is_draft_worker(std::thread::current().name()) {
            tracing::warn!("Draft worker panicked: {}", panic_info);
            return;
        }

        let crash_msg = format!(
            "OfferDeck crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();

    match init_logging() {
        Ok(log_path) => tracing::info!("Logging initialized to: {:?}", log_path),
        Err(e) => eprintln!("File logging disabled: {:#}", e),
    }

    tracing::info!(
        "offerdeck {} ({}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("DECK_GIT_COMMIT")
    );

    // A broken config file must not keep the deck from opening
    let (config, config_error) = match DeckConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::error!("Configuration error, falling back to defaults: {:#}", e);
            (DeckConfig::default(), Some(format!("{:#}", e)))
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("OfferDeck")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OfferDeck",
        native_options,
        Box::new(move |cc| Ok(Box::new(offerdeck::DeckApp::new(cc, config, config_error)))),
    )?;

    Ok(())
}
