use std::{path::PathBuf, sync::Arc};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use matrix_state::{
    generate, generate_seeded, select_grid, Action, HoverPayload, MatrixState, Store, GRID_SIZE,
};
use shared::domain::CellId;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{
    layout::CANVAS_SIZE,
    painter::paint_scene,
    scene::{build_scene, hit_test, DrawCommand},
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: Url,
    pub grid_size: usize,
    /// Fixed seed for a reproducible matrix; random when absent.
    pub seed: Option<u64>,
    pub fetch_on_mount: bool,
    pub export_svg: Option<PathBuf>,
    /// Cell hovered before a headless export.
    pub hover: Option<CellId>,
}

impl StartupConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            grid_size: GRID_SIZE,
            seed: None,
            fetch_on_mount: true,
            export_svg: None,
            hover: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLifecycle {
    Unmounted,
    MountedEmpty,
    MountedWithData,
}

struct CachedScene {
    state: Arc<MatrixState>,
    commands: Vec<DrawCommand>,
}

pub struct MatrixViewerApp {
    store: Store,
    startup: StartupConfig,
    lifecycle: ViewLifecycle,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    /// Cell under the pointer as of the last frame; hover fires on entry only.
    pointer_target: Option<CellId>,
    scene: Option<CachedScene>,
    status: String,
    highlight_error: Option<String>,
}

impl MatrixViewerApp {
    pub fn new(
        startup: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            store: Store::default(),
            startup,
            lifecycle: ViewLifecycle::Unmounted,
            cmd_tx,
            ui_rx,
            pointer_target: None,
            scene: None,
            status: String::new(),
            highlight_error: None,
        }
    }

    pub fn lifecycle(&self) -> ViewLifecycle {
        self.lifecycle
    }

    pub fn state(&self) -> Arc<MatrixState> {
        self.store.state()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn highlight_error(&self) -> Option<&str> {
        self.highlight_error.as_deref()
    }

    /// Generates the matrix, queues the outbound request and loads the data.
    /// Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.lifecycle != ViewLifecycle::Unmounted {
            return;
        }
        self.lifecycle = ViewLifecycle::MountedEmpty;

        let size = self.startup.grid_size;
        let grid = match self.startup.seed {
            Some(seed) => generate_seeded(size, seed),
            None => generate(size),
        };
        tracing::info!(size, seed = ?self.startup.seed, "generated matrix");

        if self.startup.fetch_on_mount {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchGreeting {
                    url: self.startup.endpoint.clone(),
                },
                &mut self.status,
            );
        }

        self.store.dispatch(Action::load_data(grid));
        if !select_grid(&self.store.state()).is_empty() {
            self.lifecycle = ViewLifecycle::MountedWithData;
        }
    }

    /// Pointer position in canvas coordinates, `None` once it leaves the canvas.
    pub fn pointer_moved(&mut self, point: Option<[f32; 2]>) {
        if self.lifecycle != ViewLifecycle::MountedWithData {
            return;
        }

        let target = point.and_then(|p| hit_test(self.scene(), p));
        if target != self.pointer_target {
            if let (Some(cell), Some([x, y])) = (target, point) {
                let payload = HoverPayload::for_cell(cell).with_pointer(x, y);
                self.store.dispatch(Action::HoverCell(payload));
            }
            self.pointer_target = target;
        }
    }

    /// Dispatches a hover as if the pointer had entered `cell`.
    pub fn hover(&mut self, cell: CellId) {
        self.store.dispatch(Action::HoverCell(HoverPayload::for_cell(cell)));
    }

    /// Draw commands for the current snapshot, rebuilt only when it changes.
    pub fn scene(&mut self) -> &[DrawCommand] {
        let state = self.store.state();
        let stale = self
            .scene
            .as_ref()
            .map_or(true, |cached| !Arc::ptr_eq(&cached.state, &state));

        if stale {
            let highlight = match self.store.highlight() {
                Ok(highlight) => {
                    self.highlight_error = None;
                    highlight
                }
                Err(err) => {
                    self.highlight_error = Some(format!("Cannot highlight hovered cell: {err}"));
                    None
                }
            };
            let commands = build_scene(select_grid(&state), highlight);
            self.scene = Some(CachedScene { state, commands });
        }

        self.scene
            .as_ref()
            .map(|cached| cached.commands.as_slice())
            .unwrap_or_default()
    }

    /// Drains backend events. They are logged and surfaced in the status line
    /// only; matrix state is never touched.
    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::info!("{message}");
                }
                UiEvent::GreetingReceived { url, body } => {
                    tracing::info!(%url, %body, "endpoint responded");
                }
                UiEvent::GreetingFailed(err) => {
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        "outbound request failed: {}",
                        err.message()
                    );
                }
            }
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(CANVAS_SIZE, CANVAS_SIZE), egui::Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

        let pointer = response
            .hover_pos()
            .map(|pos| [pos.x - origin.x, pos.y - origin.y]);
        self.pointer_moved(pointer);

        paint_scene(&painter, origin, self.scene());
    }
}

impl eframe::App for MatrixViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.lifecycle == ViewLifecycle::Unmounted {
            let repaint = ctx.clone();
            self.store.subscribe(move |_| repaint.request_repaint());
            self.mount();
        }
        self.process_ui_events();

        if !self.status.is_empty() || self.highlight_error.is_some() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                if let Some(err) = &self.highlight_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.lifecycle != ViewLifecycle::MountedWithData {
                return;
            }
            egui::ScrollArea::both().show(ui, |ui| self.show_canvas(ui));
        });
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
