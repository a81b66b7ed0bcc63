use std::path::PathBuf;

use anyhow::Context;
use clap::{builder::RangedU64ValueParser, Parser};
use crossbeam_channel::bounded;
use eframe::egui;
use matrix_state::GRID_SIZE;
use shared::domain::CellId;
use tracing_subscriber::EnvFilter;
use url::Url;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{
    layout::{CANVAS_SIZE, MAX_GRID_SIZE},
    svg::write_svg,
    MatrixViewerApp, StartupConfig, DEFAULT_ENDPOINT,
};

/// Hover a 40x40 matrix of circles sized by cell value.
#[derive(Parser, Debug)]
struct Args {
    /// Endpoint requested once on mount; the response is only logged.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,
    /// Rows and columns of the generated matrix.
    #[arg(
        long,
        default_value_t = GRID_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_GRID_SIZE as u64)
    )]
    grid_size: usize,
    /// Seed for a reproducible matrix.
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the outbound request on mount.
    #[arg(long)]
    no_fetch: bool,
    /// Render one frame to an SVG file and exit instead of opening a window.
    #[arg(long, value_name = "PATH")]
    export_svg: Option<PathBuf>,
    /// Cell to hover before exporting, as `row-col`.
    #[arg(long, value_name = "ROW-COL", requires = "export_svg")]
    hover: Option<CellId>,
}

impl From<Args> for StartupConfig {
    fn from(args: Args) -> Self {
        let mut startup = StartupConfig::new(args.endpoint);
        startup.grid_size = args.grid_size;
        startup.seed = args.seed;
        startup.fetch_on_mount = !args.no_fetch;
        startup.export_svg = args.export_svg;
        startup.hover = args.hover;
        startup
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let startup = StartupConfig::from(Args::parse());
    match startup.export_svg.clone() {
        Some(path) => export(startup, path),
        None => run_window(startup),
    }
}

/// Headless render: mount, optionally hover, write the frame. No network call.
fn export(mut startup: StartupConfig, path: PathBuf) -> anyhow::Result<()> {
    startup.fetch_on_mount = false;
    let hover = startup.hover;
    let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
    let (_ui_tx, ui_rx) = bounded::<UiEvent>(1);

    let mut app = MatrixViewerApp::new(startup, cmd_tx, ui_rx);
    app.mount();
    if let Some(cell) = hover {
        app.hover(cell);
    }
    let commands = app.scene().to_vec();
    if let Some(err) = app.highlight_error() {
        anyhow::bail!("{err}");
    }

    write_svg(&path, &commands)?;
    tracing::info!(path = %path.display(), shapes = commands.len(), "exported svg");
    Ok(())
}

fn run_window(startup: StartupConfig) -> anyhow::Result<()> {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Matrix Hover Viewer")
            .with_inner_size([CANVAS_SIZE + 40.0, CANVAS_SIZE + 60.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Matrix Hover Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(MatrixViewerApp::new(startup, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("viewer window exited with an error")
}
