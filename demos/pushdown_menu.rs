//! Pushdown Menu Flow
//!
//! Intro screen -> game -> pause, driven by a scripted stream of key
//! presses. Each screen pushes the next one over itself or pops back to the
//! screen it covered, so leaving the pause menu always returns to the game
//! that was paused.
//!
//! Run with: cargo run --example pushdown_menu
//! Set RUST_LOG=tickflow=debug to see pushes and pops.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tickflow::{PushdownMachine, PushdownResult, PushdownState};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Space,
    Escape,
    P,
    U,
    F1,
}

/// Keys pressed on each frame, `None` for frames with no input.
type Keyboard = Rc<RefCell<VecDeque<Option<Key>>>>;

fn pressed(keyboard: &Keyboard, key: Key) -> bool {
    keyboard.borrow().front().copied().flatten() == Some(key)
}

struct Intro {
    keyboard: Keyboard,
}

impl PushdownState for Intro {
    fn on_update(&mut self, _dt: f32) -> PushdownResult {
        if pressed(&self.keyboard, Key::Space) {
            return PushdownResult::push(Game {
                keyboard: Rc::clone(&self.keyboard),
                pause_reminder: 1.0,
            });
        }
        if pressed(&self.keyboard, Key::Escape) {
            return PushdownResult::Pop;
        }
        PushdownResult::NoChange
    }

    fn on_awake(&mut self) {
        println!("Welcome to a really awesome game!");
        println!("Press Space To Begin or escape to quit!");
    }

    fn name(&self) -> &str {
        "Intro"
    }
}

struct Game {
    keyboard: Keyboard,
    pause_reminder: f32,
}

impl PushdownState for Game {
    fn on_update(&mut self, dt: f32) -> PushdownResult {
        // Long frames come from loading hitches, not play time
        if dt > 0.5 {
            println!("Skipping large dt!");
            return PushdownResult::NoChange;
        }

        self.pause_reminder -= dt;
        if self.pause_reminder < 0.0 {
            println!("Coins mined: 0");
            println!("Press P to pause game, or F1 to return to main menu!");
            self.pause_reminder += 1.0;
        }

        if pressed(&self.keyboard, Key::P) {
            return PushdownResult::push(Pause {
                keyboard: Rc::clone(&self.keyboard),
            });
        }
        if pressed(&self.keyboard, Key::F1) {
            println!("Returning to main menu!");
            return PushdownResult::Pop;
        }
        PushdownResult::NoChange
    }

    fn on_awake(&mut self) {
        println!("Preparing to mine coins!");
    }

    fn on_sleep(&mut self) {
        println!("Game paused or left");
    }

    fn name(&self) -> &str {
        "Game"
    }
}

struct Pause {
    keyboard: Keyboard,
}

impl PushdownState for Pause {
    fn on_update(&mut self, _dt: f32) -> PushdownResult {
        if pressed(&self.keyboard, Key::U) {
            return PushdownResult::Pop;
        }
        PushdownResult::NoChange
    }

    fn on_awake(&mut self) {
        println!("Press U to unpause game!");
    }

    fn name(&self) -> &str {
        "Pause"
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Pushdown Menu Flow ===\n");

    let script = [
        (None, 0.1),
        (Some(Key::Space), 0.1),
        (None, 0.4),
        (None, 0.9),
        (None, 0.4),
        (None, 0.4),
        (Some(Key::P), 0.1),
        (None, 0.1),
        (Some(Key::U), 0.1),
        (None, 0.3),
        (Some(Key::F1), 0.1),
        (None, 0.1),
        (Some(Key::Escape), 0.1),
    ];
    let keyboard: Keyboard = Rc::new(RefCell::new(script.iter().map(|(key, _)| *key).collect()));

    let mut machine = PushdownMachine::new(Box::new(Intro {
        keyboard: Rc::clone(&keyboard),
    }));

    for (frame, (_, dt)) in script.iter().enumerate() {
        let running = machine.update(*dt);
        keyboard.borrow_mut().pop_front();
        println!(
            "  [frame {frame:>2}] top: {:<5} depth: {}",
            machine.active_name().unwrap_or("-"),
            machine.depth()
        );
        if !running {
            println!("\nStack emptied, exiting.");
            break;
        }
    }
}
