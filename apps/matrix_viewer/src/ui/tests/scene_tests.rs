use super::*;

fn uniform_grid(size: usize, value: u32) -> Grid {
    Grid::from_rows(vec![vec![value; size]; size])
}

fn count(commands: &[DrawCommand], pred: impl Fn(&DrawCommand) -> bool) -> usize {
    commands.iter().filter(|c| pred(c)).count()
}

#[test]
fn empty_grid_draws_nothing() {
    let highlight = Some(Highlight {
        x: 0,
        y: 0,
        radius: 3,
    });
    assert!(build_scene(&Grid::default(), highlight).is_empty());
}

#[test]
fn full_grid_has_labels_cells_and_no_ring_without_highlight() {
    let commands = build_scene(&uniform_grid(40, 2), None);

    assert_eq!(count(&commands, |c| matches!(c, DrawCommand::Label { .. })), 80);
    assert_eq!(count(&commands, |c| matches!(c, DrawCommand::Cell { .. })), 1600);
    assert_eq!(count(&commands, |c| matches!(c, DrawCommand::Ring { .. })), 0);
}

#[test]
fn labels_run_along_top_and_left_edges() {
    let commands = build_scene(&uniform_grid(3, 1), None);

    assert_eq!(
        commands[2],
        DrawCommand::Label {
            at: [80.0, 30.0],
            text: "2".into(),
            font_size: 8.0,
        }
    );
    assert_eq!(
        commands[4],
        DrawCommand::Label {
            at: [20.0, 65.0],
            text: "1".into(),
            font_size: 8.0,
        }
    );
}

#[test]
fn cells_are_positioned_by_index_and_sized_by_value() {
    let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let commands = build_scene(&grid, None);

    let cell = commands
        .iter()
        .find(|c| matches!(c, DrawCommand::Cell { id, .. } if *id == CellId::new(1, 0)))
        .expect("cell 1-0");
    assert_eq!(
        *cell,
        DrawCommand::Cell {
            id: CellId::new(1, 0),
            center: [65.0, 50.0],
            radius: 3.0,
            fill: CELL_FILL,
            opacity: 0.4,
        }
    );
}

#[test]
fn ring_is_drawn_last_at_highlight_geometry() {
    let highlight = Highlight {
        x: 3,
        y: 5,
        radius: 6,
    };
    let commands = build_scene(&uniform_grid(8, 4), Some(highlight));

    assert_eq!(
        commands.last(),
        Some(&DrawCommand::Ring {
            center: [95.0, 125.0],
            radius: 6.0,
            stroke: RING_STROKE,
            stroke_width: 3.0,
            opacity: 0.4,
        })
    );
}

#[test]
fn hit_test_finds_cell_under_point_only() {
    let commands = build_scene(&uniform_grid(4, 5), None);

    assert_eq!(hit_test(&commands, [95.0, 50.0]), Some(CellId::new(3, 0)));
    assert_eq!(hit_test(&commands, [98.0, 54.0]), Some(CellId::new(3, 0)));
    // Between two circles.
    assert_eq!(hit_test(&commands, [57.5, 50.0]), None);
    // Over a label.
    assert_eq!(hit_test(&commands, [50.0, 30.0]), None);
}

#[test]
fn hit_test_ignores_highlight_ring() {
    let highlight = Highlight {
        x: 0,
        y: 0,
        radius: 12,
    };
    let commands = build_scene(&uniform_grid(2, 1), Some(highlight));

    assert_eq!(hit_test(&commands, [60.0, 50.0]), None);
}

#[test]
fn rgb_renders_uppercase_hex() {
    assert_eq!(CELL_FILL.hex(), "#044B94");
    assert_eq!(RING_STROKE.hex(), "#FF0000");
}
