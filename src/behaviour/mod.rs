//! Behaviour trees ticked once per frame.
//!
//! Decision logic is composed from reusable leaves:
//!
//! - [`Action`]: leaf wrapping an external `(dt, state) -> state` decision function
//! - [`Sequence`]: succeeds when every child succeeds, in order
//! - [`Selector`]: succeeds as soon as one child succeeds
//!
//! A tree is executed once per tick until its root reports a terminal
//! [`BehaviourState`]. An `Ongoing` leaf suspends its ancestors until the next
//! tick; that is the only form of suspension. Call [`BehaviourNode::reset`]
//! before reusing a tree for a new run.
//!
//! # Example
//!
//! ```rust
//! use tickflow::behaviour::{
//!     always_failure, always_success, selector, sequence, BehaviourNode, BehaviourState,
//! };
//!
//! let mut root = sequence(
//!     "Root Sequence",
//!     vec![
//!         always_success("Open Door"),
//!         selector("Loot Selection", vec![always_failure("Treasure"), always_success("Items")]),
//!     ],
//! );
//!
//! assert_eq!(root.execute(1.0), BehaviourState::Success);
//!
//! root.reset();
//! assert_eq!(root.state(), BehaviourState::Initialise);
//! ```

mod action;
mod builder;
mod composite;
mod node;
mod snapshot;
mod status;

pub use action::{Action, Decision};
pub use builder::{action, always_failure, always_success, selector, sequence};
pub use composite::{AllSucceed, Composite, FirstSuccess, Selector, Sequence, Traversal};
pub use node::{BehaviourNode, NodeKind};
pub use snapshot::NodeSnapshot;
pub use status::BehaviourState;
