// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lesson board replay.
//!
//! Loads a small board and a canvas config from JSON, lays out the unplaced
//! notes, then replays a scripted session (pan, zoom, drag, a cancelled drag)
//! against a headless `CanvasController`, printing each frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p corkboard_demos --example lesson_board`

use corkboard_canvas::{
    CanvasConfig, CanvasController, CapturedPointers, HitTarget, PointerButton, PointerEvent,
    PointerId, WheelEvent,
};
use corkboard_demos::Board;
use kurbo::{Point, Rect, Size};

const BOARD: &str = r#"{
  "notes": [
    { "title": "Variables", "difficulty": "Beginner" },
    { "title": "Closures", "difficulty": "Intermediate" },
    { "title": "Lifetimes", "difficulty": "advanced topics", "position": { "x": 600.0, "y": 40.0 } },
    { "title": "Loops", "difficulty": "beginner" },
    { "title": "Unsafe" }
  ]
}"#;

const CONFIG: &str = r#"{ "zoom": { "min": 0.5, "max": 2.0, "step": 0.1 }, "grid_cell": 120.0 }"#;

/// World-space size of a rendered note, used for hit testing.
const NOTE_SIZE: Size = Size::new(220.0, 150.0);

enum Step {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
    Wheel(Point, f64),
    Context(Point),
}

fn hit_test(canvas: &CanvasController, board: &Board, client: Point) -> HitTarget {
    let Some(world) = canvas.viewport().client_to_world(client) else {
        return HitTarget::Overlay;
    };
    // Topmost first.
    for (index, note) in board.notes.iter().enumerate().rev() {
        let position = note.position.unwrap_or(Point::ZERO);
        if Rect::from_origin_size(position, NOTE_SIZE).contains(world) {
            return HitTarget::Note {
                index,
                position: note.position,
            };
        }
    }
    HitTarget::Background
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config: CanvasConfig = serde_json::from_str(CONFIG)?;
    let mut board = Board::from_json(BOARD)?;
    let mut canvas = CanvasController::new(config);
    canvas.mount(Rect::new(0.0, 48.0, 1024.0, 768.0));

    let placed = board.place(&canvas);
    println!("placed {placed} notes:");
    for note in &board.notes {
        println!("  {:<10} {:?}", note.title, note.position);
    }

    let mouse = PointerId(1);
    let mut capture = CapturedPointers::new();
    let script = [
        // Pan the background.
        Step::Down(Point::new(900.0, 700.0)),
        Step::Move(Point::new(880.0, 690.0)),
        Step::Move(Point::new(850.0, 660.0)),
        Step::Up,
        // Zoom in twice about a point, then out once.
        Step::Wheel(Point::new(300.0, 300.0), -100.0),
        Step::Wheel(Point::new(300.0, 300.0), -100.0),
        Step::Wheel(Point::new(300.0, 300.0), 100.0),
        // Drag the first note.
        Step::Down(Point::new(40.0, 100.0)),
        Step::Move(Point::new(60.0, 130.0)),
        Step::Move(Point::new(140.0, 160.0)),
        Step::Up,
        // A right click does nothing.
        Step::Context(Point::new(40.0, 100.0)),
        // A drag the platform cancels halfway keeps its last position.
        Step::Down(Point::new(330.0, 100.0)),
        Step::Move(Point::new(360.0, 110.0)),
        Step::Cancel,
    ];

    for step in script {
        match step {
            Step::Down(client) => {
                let target = hit_test(&canvas, &board, client);
                let phase =
                    canvas.pointer_down(PointerEvent::primary(mouse, client), target, &mut capture);
                println!("down {client:?} on {target:?} -> {phase:?}");
            }
            Step::Context(client) => {
                let target = hit_test(&canvas, &board, client);
                let event = PointerEvent::new(mouse, PointerButton::from_dom(2), client);
                let phase = canvas.pointer_down(event, target, &mut capture);
                println!("context click {client:?} -> {phase:?}");
            }
            Step::Move(client) => {
                let outcome = canvas.pointer_move(PointerEvent::primary(mouse, client), &mut board);
                println!("move {client:?} -> {outcome:?}");
            }
            Step::Up => {
                let ended = canvas.pointer_up(mouse, &mut capture);
                println!("up -> ended {ended:?}");
            }
            Step::Cancel => {
                let ended = canvas.pointer_cancel(mouse, &mut capture);
                println!("cancel -> ended {ended:?}");
            }
            Step::Wheel(client, delta_y) => {
                let changed = canvas.wheel(WheelEvent { client, delta_y });
                println!(
                    "wheel {delta_y} at {client:?} -> changed: {changed}, scale {:.3}",
                    canvas.transform().scale()
                );
            }
        }
        let frame = canvas.render();
        println!(
            "  layer: {}  grid: {:.1} @ ({:.1}, {:.1})  cursor: {}",
            frame.layer_css,
            frame.background.tile,
            frame.background.phase.x,
            frame.background.phase.y,
            frame.cursor.css(),
        );
    }

    println!("{:#?}", canvas.viewport().debug_info());
    println!("{}", board.to_json()?);
    Ok(())
}
