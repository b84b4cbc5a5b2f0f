//! Motion Path Editor: Headless-Demo der Editier-Engine.
//!
//! Spielt eine kurze Sitzung ab (Drag mit Magnet, Heading per Mausrad,
//! Undo/Redo) und gibt den Anzeigezustand als JSON aus.

use motion_path_editor::app::build_view;
use motion_path_editor::{
    AppController, AppIntent, AppState, Control, CoordinateTransform, EditorOptions, Modifiers,
    Path, PathGraph, PointerButton, Uid, Vector, ViewTransform,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Motion Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let transform = ViewTransform::default();
    let mut state = AppState::with_options(options)
        .with_transform(transform.clone())
        .with_graph(sample_graph());
    let mut controller = AppController::new();

    let target = Uid::from("c1");
    let press_pos = transform.to_px(Vector::new(5.0, 5.0));
    controller.handle_intent(
        &mut state,
        AppIntent::PointerPressed {
            target: target.clone(),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        },
    )?;
    for step in 1..=4 {
        let world = Vector::new(5.0 - f64::from(step), 5.0 - 1.2 * f64::from(step));
        controller.handle_intent(
            &mut state,
            AppIntent::DragMoved {
                target: target.clone(),
                screen_pos: transform.to_px(world),
                modifiers: Modifiers::SHIFT,
            },
        )?;
    }
    log::info!(
        "Drag von {:?}: {} Magnet-Referenz(en) angewendet",
        press_pos,
        state.magnet.len()
    );
    controller.handle_intent(&mut state, AppIntent::DragEnded { target: target.clone() })?;
    controller.handle_intent(&mut state, AppIntent::PointerReleased { target })?;

    controller.handle_intent(
        &mut state,
        AppIntent::WheelOverControl {
            target: Uid::from("e1"),
            delta: Vector::new(0.0, 100.0),
            modifiers: Modifiers::NONE,
        },
    )?;

    controller.handle_intent(&mut state, AppIntent::UndoRequested)?;
    controller.handle_intent(&mut state, AppIntent::RedoRequested)?;

    log::info!("Änderungen: {:?}", state.changes.drain());
    println!("{}", serde_json::to_string_pretty(&build_view(&state))?);
    Ok(())
}

fn sample_graph() -> PathGraph {
    PathGraph::from_paths(vec![
        Path::new(
            "p1",
            vec![
                Control::end("e0", Vector::new(0.0, 0.0), 0.0),
                Control::interior("c0", Vector::new(0.0, 5.0)),
                Control::interior("c1", Vector::new(5.0, 5.0)),
                Control::end("e1", Vector::new(10.0, 5.0), 90.0),
                Control::interior("c2", Vector::new(15.0, 5.0)),
                Control::interior("c3", Vector::new(20.0, 0.0)),
                Control::end("e2", Vector::new(20.0, -5.0), 180.0),
            ],
        )
        .with_name("Runde"),
        Path::new(
            "p2",
            vec![
                Control::end("f0", Vector::new(-10.0, -10.0), 90.0),
                Control::interior("d0", Vector::new(-5.0, -10.0)),
                Control::interior("d1", Vector::new(0.0, -10.0)),
                Control::end("f1", Vector::new(5.0, -10.0), 90.0),
            ],
        ),
    ])
}
