use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::{commands::BackendCommand, runtime::spawn_backend_thread};
use crate::controller::{events::UiEvent, page::PageController};
use crate::ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Single-page personal portfolio")]
struct Args {
    /// Settings file (defaults to ./portfolio.toml, then the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err:#}; continuing with default settings");
            Settings::from_env()
        }
    };
    let threshold = settings.effective_threshold();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_backend_thread(cmd_rx, ui_tx, settings.relay_endpoint.clone());

    let page = PageController::new(cmd_tx, Box::new(settings), threshold);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gaurav Nidhi — Portfolio")
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::new(page, ui_rx)))),
    )
}
