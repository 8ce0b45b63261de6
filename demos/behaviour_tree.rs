//! Adventure Behaviour Tree
//!
//! An agent finds a key, walks to a room and opens the door, then searches
//! for loot: treasure first, ordinary items if that turns up nothing. The
//! tree is run to completion five times, with a reset between runs.
//!
//! ```text
//! Root Sequence
//! ├── Room Sequence
//! │   ├── Find Key
//! │   ├── Go To Room
//! │   └── Open Door
//! └── Loot Selection
//!     ├── Look For Treasure
//!     └── Look For Items
//! ```
//!
//! Run with: cargo run --example behaviour_tree

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use tickflow::behaviour::{action, selector, sequence, BehaviourNode, BehaviourState};
use tracing_subscriber::EnvFilter;

type SharedRng = Rc<RefCell<StdRng>>;

/// Leaf that keeps going for a random number of seconds, then succeeds.
fn timed_search(name: &'static str, rng: &SharedRng) -> Box<dyn BehaviourNode> {
    let rng = Rc::clone(rng);
    let mut timer = 0.0_f32;
    action(name, move |dt, state| match state {
        BehaviourState::Initialise => {
            timer = rng.borrow_mut().gen_range(0..100) as f32;
            println!("{name}: starting ({timer} seconds)");
            BehaviourState::Ongoing
        }
        BehaviourState::Ongoing => {
            timer -= dt;
            if timer <= 0.0 {
                println!("{name}: done");
                BehaviourState::Success
            } else {
                BehaviourState::Ongoing
            }
        }
        done => done,
    })
}

/// Leaf that takes one tick and then flips a coin.
fn lucky_search(name: &'static str, rng: &SharedRng) -> Box<dyn BehaviourNode> {
    let rng = Rc::clone(rng);
    action(name, move |_, state| match state {
        BehaviourState::Initialise => {
            println!("{name}: looking...");
            BehaviourState::Ongoing
        }
        BehaviourState::Ongoing => {
            if rng.borrow_mut().gen_bool(0.5) {
                println!("{name}: found something!");
                BehaviourState::Success
            } else {
                println!("{name}: nothing here");
                BehaviourState::Failure
            }
        }
        done => done,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Adventure Behaviour Tree ===\n");

    let rng: SharedRng = Rc::new(RefCell::new(StdRng::seed_from_u64(8503)));

    let open_door = action("Open Door", |_, _| {
        println!("Open Door: opened");
        BehaviourState::Success
    });

    let mut root = sequence(
        "Root Sequence",
        vec![
            sequence(
                "Room Sequence",
                vec![
                    timed_search("Find Key", &rng),
                    timed_search("Go To Room", &rng),
                    open_door,
                ],
            ),
            selector(
                "Loot Selection",
                vec![
                    lucky_search("Look For Treasure", &rng),
                    lucky_search("Look For Items", &rng),
                ],
            ),
        ],
    );

    if let Err(violations) = root.validate() {
        for violation in violations {
            tracing::warn!(%violation, "tree has a structural problem");
        }
    }

    for run in 1..=5 {
        println!("--- Run {run} ---");
        root.reset();

        let mut ticks = 0;
        let mut state = BehaviourState::Ongoing;
        while !state.is_terminal() {
            state = root.execute(1.0);
            ticks += 1;
        }

        match state {
            BehaviourState::Success => println!("What a successful adventure! ({ticks} ticks)"),
            _ => println!("What a waste of time! ({ticks} ticks)"),
        }
        println!("{}", root.snapshot());
    }

    println!("All done!");
}
