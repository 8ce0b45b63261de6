//! Counting State Machine
//!
//! Two states share a counter: `A` counts up, `B` counts down. Guards flip
//! between them when the counter leaves the 0..=10 band, so the value
//! oscillates forever.
//!
//! Key concepts:
//! - States declared by name through the builder
//! - Guards reading context captured by the closure
//! - One transition at most per update
//!
//! Run with: cargo run --example state_machine
//! Set RUST_LOG=tickflow=debug to see every transition.

use std::cell::Cell;
use std::rc::Rc;
use tickflow::builder::{guarded_transition, StateMachineBuilder};
use tickflow::State;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Counting State Machine ===\n");

    let data = Rc::new(Cell::new(0));
    let up = Rc::clone(&data);
    let down = Rc::clone(&data);
    let high = Rc::clone(&data);
    let low = Rc::clone(&data);

    let mut machine = StateMachineBuilder::new()
        .state(State::new("A", move |_| up.set(up.get() + 1)))
        .state(State::new("B", move |_| down.set(down.get() - 1)))
        .transition(guarded_transition("A", "B", move || high.get() > 10))
        .transition(guarded_transition("B", "A", move || low.get() < 0))
        .build()?;

    for frame in 0..100 {
        machine.update(1.0)?;
        println!(
            "frame {:>3}: state {} data {:>3}",
            frame,
            machine.active_state_name().unwrap_or("?"),
            data.get()
        );
    }

    println!("\nThe counter never leaves -1..=11:");
    println!("  A counts up until data > 10, then B takes over");
    println!("  B counts down until data < 0, then A takes over");

    Ok(())
}
