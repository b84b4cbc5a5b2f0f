use motion_path_editor::{
    AppCommand, AppController, AppIntent, AppState, Control, CoordinateTransform, ManualClock,
    Modifiers, Path, PathGraph, PointerButton, StateChange, Uid, Vector,
};

/// Pixel = Welt; NaN ist nicht auflösbar.
struct IdentityTransform;

impl CoordinateTransform for IdentityTransform {
    fn to_uol(&self, pixel: Vector) -> Option<Vector> {
        pixel.is_finite().then_some(pixel)
    }

    fn to_px(&self, world: Vector) -> Vector {
        world
    }
}

/// E0 (0,0) – C1 (5,5) – E1 (10,0)
fn make_test_state() -> (AppState, ManualClock) {
    let clock = ManualClock::new();
    let state = AppState::new()
        .with_clock(clock.clone())
        .with_transform(IdentityTransform)
        .with_graph(PathGraph::from_paths(vec![Path::new(
            "p",
            vec![
                Control::end("e0", Vector::new(0.0, 0.0), 0.0),
                Control::interior("c1", Vector::new(5.0, 5.0)),
                Control::end("e1", Vector::new(10.0, 0.0), 0.0),
            ],
        )]));
    (state, clock)
}

fn pos(state: &AppState, uid: &str) -> Vector {
    state
        .graph
        .control(&Uid::from(uid))
        .expect("Kontrollpunkt sollte existieren")
        .position
}

fn press(controller: &mut AppController, state: &mut AppState, uid: &str, modifiers: Modifiers) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                target: Uid::from(uid),
                button: PointerButton::Primary,
                modifiers,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, uid: &str, modifiers: Modifiers) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerClicked {
                target: Uid::from(uid),
                button: PointerButton::Primary,
                modifiers,
            },
        )
        .expect("PointerClicked sollte ohne Fehler durchlaufen");
}

fn drag(
    controller: &mut AppController,
    state: &mut AppState,
    uid: &str,
    to: Vector,
    modifiers: Modifiers,
) {
    controller
        .handle_intent(
            state,
            AppIntent::DragMoved {
                target: Uid::from(uid),
                screen_pos: to,
                modifiers,
            },
        )
        .expect("DragMoved sollte ohne Fehler durchlaufen");
}

#[test]
fn test_drag_end_control_pulls_interior_neighbour_unless_ctrl() {
    let mut controller = AppController::new();

    let (mut state, _) = make_test_state();
    press(&mut controller, &mut state, "e0", Modifiers::NONE);
    drag(&mut controller, &mut state, "e0", Vector::new(2.0, 0.0), Modifiers::NONE);
    assert_eq!(pos(&state, "e0"), Vector::new(2.0, 0.0));
    assert_eq!(pos(&state, "c1"), Vector::new(7.0, 5.0));
    assert_eq!(pos(&state, "e1"), Vector::new(10.0, 0.0));

    let (mut state, _) = make_test_state();
    press(&mut controller, &mut state, "e0", Modifiers::NONE);
    drag(&mut controller, &mut state, "e0", Vector::new(2.0, 0.0), Modifiers::CTRL);
    assert_eq!(pos(&state, "e0"), Vector::new(2.0, 0.0));
    assert_eq!(pos(&state, "c1"), Vector::new(5.0, 5.0));
}

#[test]
fn test_shift_drag_snaps_to_axis_intersection() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    press(&mut controller, &mut state, "c1", Modifiers::NONE);
    drag(&mut controller, &mut state, "c1", Vector::new(3.0, 0.4), Modifiers::SHIFT);

    // y = 0 durch E0 geschnitten mit x = 5 durch die Position vor dem Drag
    assert_eq!(pos(&state, "c1"), Vector::new(5.0, 0.0));
    assert_eq!(state.magnet.len(), 2);
    assert!(state.changes.contains(StateChange::Magnet));

    controller
        .handle_intent(&mut state, AppIntent::DragEnded { target: Uid::from("c1") })
        .expect("DragEnded sollte ohne Fehler durchlaufen");
    assert!(state.magnet.is_empty());
}

#[test]
fn test_three_drag_steps_undo_as_one() {
    let mut controller = AppController::new();
    let (mut state, clock) = make_test_state();

    press(&mut controller, &mut state, "e1", Modifiers::NONE);
    for x in [11.0, 12.0, 13.0] {
        clock.advance_ms(16);
        drag(&mut controller, &mut state, "e1", Vector::new(x, 0.0), Modifiers::CTRL);
    }
    assert_eq!(state.history.undo_len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(pos(&state, "e1"), Vector::new(10.0, 0.0));

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert_eq!(pos(&state, "e1"), Vector::new(13.0, 0.0));
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    press(&mut controller, &mut state, "e1", Modifiers::NONE);
    drag(&mut controller, &mut state, "e1", Vector::new(12.0, 0.0), Modifiers::NONE);
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert!(state.can_redo());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToggleLockRequested {
                target: Uid::from("p"),
            },
        )
        .expect("ToggleLock sollte ohne Fehler durchlaufen");

    assert!(state.graph.path(&Uid::from("p")).unwrap().lock);
    assert!(!state.can_redo());
}

#[test]
fn test_shift_click_keeps_freshly_selected_control() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();
    let e0 = Uid::from("e0");

    press(&mut controller, &mut state, "e0", Modifiers::SHIFT);
    click(&mut controller, &mut state, "e0", Modifiers::SHIFT);
    assert!(state.selection.is_selected(&e0));

    // schon selektiert → der nächste Shift-Klick wählt ab
    press(&mut controller, &mut state, "e0", Modifiers::SHIFT);
    click(&mut controller, &mut state, "e0", Modifiers::SHIFT);
    assert!(!state.selection.is_selected(&e0));
}

#[test]
fn test_drag_protects_selection_from_following_click() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();
    let e0 = Uid::from("e0");

    state.selection.select(e0.clone());
    press(&mut controller, &mut state, "e0", Modifiers::SHIFT);
    drag(&mut controller, &mut state, "e0", Vector::new(1.0, 0.0), Modifiers::NONE);
    controller
        .handle_intent(&mut state, AppIntent::DragEnded { target: e0.clone() })
        .expect("DragEnded sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, "e0", Modifiers::SHIFT);

    assert!(state.selection.is_selected(&e0));
}

#[test]
fn test_middle_button_suppresses_drag_until_release() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                target: Uid::from("e1"),
                button: PointerButton::Middle,
                modifiers: Modifiers::NONE,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    drag(&mut controller, &mut state, "e1", Vector::new(20.0, 0.0), Modifiers::NONE);
    assert_eq!(pos(&state, "e1"), Vector::new(10.0, 0.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased { target: Uid::from("e1") })
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
    press(&mut controller, &mut state, "e1", Modifiers::NONE);
    drag(&mut controller, &mut state, "e1", Vector::new(20.0, 0.0), Modifiers::NONE);
    assert_eq!(pos(&state, "e1"), Vector::new(20.0, 0.0));
}

#[test]
fn test_unresolvable_screen_position_is_skipped() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    press(&mut controller, &mut state, "e1", Modifiers::NONE);
    drag(
        &mut controller,
        &mut state,
        "e1",
        Vector::new(f64::NAN, 1.0),
        Modifiers::NONE,
    );

    assert_eq!(pos(&state, "e1"), Vector::new(10.0, 0.0));
    assert!(!state.can_undo());
}

#[test]
fn test_grab_and_move_blocks_drag() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    controller
        .handle_intent(&mut state, AppIntent::GrabAndMoveToggled { active: true })
        .expect("GrabAndMoveToggled sollte ohne Fehler durchlaufen");
    drag(&mut controller, &mut state, "e1", Vector::new(20.0, 0.0), Modifiers::NONE);

    assert_eq!(pos(&state, "e1"), Vector::new(10.0, 0.0));
}

#[test]
fn test_commands_are_logged_in_order() {
    let mut controller = AppController::new();
    let (mut state, _) = make_test_state();

    press(&mut controller, &mut state, "e1", Modifiers::NONE);
    drag(&mut controller, &mut state, "e1", Vector::new(11.0, 0.0), Modifiers::NONE);

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 2);
    assert!(matches!(entries[0], AppCommand::PressControl { shift: false, .. }));
    match &entries[1] {
        AppCommand::DragControl { world_pos, .. } => assert_eq!(*world_pos, Vector::new(11.0, 0.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
