use super::*;
use crossbeam_channel::bounded;
use matrix_state::{select_hovered_id, CELL_MAX, CELL_MIN};

use crate::controller::events::{UiError, UiErrorContext};
use crate::ui::layout::cell_center;

struct Harness {
    app: MatrixViewerApp,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
}

fn harness(configure: impl FnOnce(&mut StartupConfig)) -> Harness {
    let mut startup = StartupConfig::new(Url::parse(DEFAULT_ENDPOINT).expect("url"));
    startup.seed = Some(5);
    configure(&mut startup);
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    Harness {
        app: MatrixViewerApp::new(startup, cmd_tx, ui_rx),
        cmd_rx,
        ui_tx,
    }
}

#[test]
fn mount_loads_matrix_and_queues_outbound_request() {
    let mut h = harness(|_| {});
    assert_eq!(h.app.lifecycle(), ViewLifecycle::Unmounted);
    assert!(h.app.scene().is_empty());

    h.app.mount();

    assert_eq!(h.app.lifecycle(), ViewLifecycle::MountedWithData);
    let state = h.app.state();
    let grid = select_grid(&state);
    assert_eq!(grid.row_count(), GRID_SIZE);
    assert!(grid
        .cells()
        .all(|(_, value)| (CELL_MIN..=CELL_MAX).contains(&value)));
    match h.cmd_rx.try_recv() {
        Ok(BackendCommand::FetchGreeting { url }) => assert_eq!(url.as_str(), DEFAULT_ENDPOINT),
        Err(err) => panic!("no command queued: {err}"),
    }
}

#[test]
fn second_mount_does_not_regenerate() {
    let mut h = harness(|_| {});
    h.app.mount();
    let first = h.app.state();

    h.app.mount();

    assert!(Arc::ptr_eq(&first, &h.app.state()));
    assert_eq!(h.cmd_rx.len(), 1);
}

#[test]
fn fetch_can_be_disabled() {
    let mut h = harness(|startup| startup.fetch_on_mount = false);
    h.app.mount();
    assert!(h.cmd_rx.is_empty());
}

#[test]
fn zero_sized_matrix_stays_mounted_without_data() {
    let mut h = harness(|startup| startup.grid_size = 0);
    h.app.mount();
    assert_eq!(h.app.lifecycle(), ViewLifecycle::MountedEmpty);

    h.app.pointer_moved(Some([50.0, 50.0]));
    assert_eq!(select_hovered_id(&h.app.state()), None);
}

#[test]
fn entering_a_cell_dispatches_hover_once_and_draws_ring() {
    let mut h = harness(|_| {});
    h.app.mount();
    let grid = Arc::clone(select_grid(&h.app.state()));

    let center = cell_center(3, 5);
    h.app.pointer_moved(Some(center));
    let hovered = h.app.state();
    assert_eq!(select_hovered_id(&hovered), Some("3-5"));

    // Moving inside the same circle does not dispatch again.
    h.app.pointer_moved(Some([center[0] + 0.5, center[1]]));
    assert!(Arc::ptr_eq(&hovered, &h.app.state()));

    let value = grid.get(3, 5).expect("cell");
    assert_eq!(
        h.app.scene().last(),
        Some(&DrawCommand::Ring {
            center,
            radius: (value + 2) as f32,
            stroke: crate::ui::scene::RING_STROKE,
            stroke_width: 3.0,
            opacity: 0.4,
        })
    );
    // Hover never replaces the loaded grid.
    assert!(Arc::ptr_eq(select_grid(&h.app.state()), &grid));
}

#[test]
fn leaving_the_canvas_keeps_last_hover() {
    let mut h = harness(|_| {});
    h.app.mount();

    h.app.pointer_moved(Some(cell_center(0, 0)));
    h.app.pointer_moved(None);

    assert_eq!(select_hovered_id(&h.app.state()), Some("0-0"));
}

#[test]
fn scene_is_reused_until_state_changes() {
    let mut h = harness(|_| {});
    h.app.mount();

    let first = h.app.scene().as_ptr();
    assert_eq!(h.app.scene().as_ptr(), first);

    h.app.hover(CellId::new(1, 1));
    assert_ne!(h.app.scene().as_ptr(), first);
}

#[test]
fn invalid_hover_surfaces_error_and_drops_ring() {
    let mut h = harness(|startup| startup.grid_size = 4);
    h.app.mount();

    h.app.hover(CellId::new(9, 9));
    let commands = h.app.scene().to_vec();

    assert!(!commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Ring { .. })));
    assert!(h
        .app
        .highlight_error()
        .is_some_and(|err| err.contains("outside the 4x4 grid")));

    h.app.hover(CellId::new(1, 1));
    h.app.scene();
    assert_eq!(h.app.highlight_error(), None);
}

#[test]
fn backend_events_never_touch_state() {
    let mut h = harness(|_| {});
    h.app.mount();
    let before = h.app.state();

    h.ui_tx
        .send(UiEvent::GreetingReceived {
            url: DEFAULT_ENDPOINT.to_string(),
            body: serde_json::json!({ "abc": "ddd" }),
        })
        .expect("send");
    h.ui_tx
        .send(UiEvent::GreetingFailed(UiError::from_message(
            UiErrorContext::Greeting,
            "connection refused",
        )))
        .expect("send");
    h.app.process_ui_events();

    assert!(Arc::ptr_eq(&before, &h.app.state()));
    assert!(h.app.status().is_empty());
}
