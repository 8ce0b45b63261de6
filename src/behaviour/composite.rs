//! Composite behaviour nodes.
//!
//! Composites drive an ordered list of owned children with a cursor. Within
//! one tick a composite resolves as many children as resolve immediately,
//! stopping at the first `Ongoing` child, at a short-circuiting result, or at
//! the end of the list. An `Ongoing` child is driven again on the next tick;
//! the cursor never moves past it early.
//!
//! - [`Sequence`]: all children must succeed, in order (logical AND)
//! - [`Selector`]: the first child to succeed wins (logical OR)
//!
//! # Empty composites
//!
//! A composite with no children is an authoring mistake. It still resolves
//! deterministically: an empty [`Sequence`] succeeds (vacuous truth) and an
//! empty [`Selector`] fails (nothing to select). Each resolution logs a
//! warning, and [`BehaviourNode::validate`] reports it as a violation.

use crate::behaviour::{BehaviourNode, BehaviourState, NodeKind};
use std::marker::PhantomData;

/// Traversal policy of a [`Composite`].
pub trait Traversal {
    const KIND: NodeKind;

    /// Child result that moves the cursor to the next child.
    const ADVANCE_ON: BehaviourState;

    /// Result once every child has been passed over (or there are none).
    const EXHAUSTED: BehaviourState;
}

/// Policy of [`Sequence`]: advance on success, fail on the first failure.
#[derive(Debug)]
pub enum AllSucceed {}

impl Traversal for AllSucceed {
    const KIND: NodeKind = NodeKind::Sequence;
    const ADVANCE_ON: BehaviourState = BehaviourState::Success;
    const EXHAUSTED: BehaviourState = BehaviourState::Success;
}

/// Policy of [`Selector`]: advance on failure, succeed on the first success.
#[derive(Debug)]
pub enum FirstSuccess {}

impl Traversal for FirstSuccess {
    const KIND: NodeKind = NodeKind::Selector;
    const ADVANCE_ON: BehaviourState = BehaviourState::Failure;
    const EXHAUSTED: BehaviourState = BehaviourState::Failure;
}

/// Executes children in order until one fails.
///
/// ```rust
/// use tickflow::behaviour::{always_failure, always_success, BehaviourNode, BehaviourState, Sequence};
///
/// let mut seq = Sequence::with_children("Open", vec![always_success("Unlock"), always_failure("Push")]);
/// assert_eq!(seq.execute(1.0), BehaviourState::Failure);
/// ```
pub type Sequence = Composite<AllSucceed>;

/// Executes children in order until one succeeds.
///
/// ```rust
/// use tickflow::behaviour::{always_failure, always_success, BehaviourNode, BehaviourState, Selector};
///
/// let mut sel = Selector::with_children("Loot", vec![always_failure("Treasure"), always_success("Items")]);
/// assert_eq!(sel.execute(1.0), BehaviourState::Success);
/// ```
pub type Selector = Composite<FirstSuccess>;

/// Cursor-driven composite node, parameterised by its traversal policy.
pub struct Composite<T: Traversal> {
    name: String,
    state: BehaviourState,
    children: Vec<Box<dyn BehaviourNode>>,
    cursor: usize,
    _policy: PhantomData<T>,
}

impl<T: Traversal> Composite<T> {
    /// Creates a composite with no children yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_children(name, Vec::new())
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Box<dyn BehaviourNode>>) -> Self {
        Self {
            name: name.into(),
            state: BehaviourState::Initialise,
            children,
            cursor: 0,
            _policy: PhantomData,
        }
    }

    /// Append a child after the existing ones.
    pub fn add_child(&mut self, child: Box<dyn BehaviourNode>) {
        self.children.push(child);
    }

    /// Chaining form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: Box<dyn BehaviourNode>) -> Self {
        self.add_child(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn finish(&mut self, result: BehaviourState) -> BehaviourState {
        tracing::debug!(kind = %T::KIND, node = %self.name, %result, "composite resolved");
        self.state = result;
        result
    }
}

impl<T: Traversal> BehaviourNode for Composite<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        T::KIND
    }

    fn state(&self) -> BehaviourState {
        self.state
    }

    fn execute(&mut self, dt: f32) -> BehaviourState {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.state == BehaviourState::Initialise {
            self.cursor = 0;
            if self.children.is_empty() {
                tracing::warn!(
                    kind = %T::KIND,
                    node = %self.name,
                    result = %T::EXHAUSTED,
                    "empty composite resolved without children"
                );
                return self.finish(T::EXHAUSTED);
            }
        }

        while let Some(child) = self.children.get_mut(self.cursor) {
            let result = child.execute(dt);
            tracing::trace!(node = %self.name, child = self.cursor, %result, "child driven");

            match result {
                BehaviourState::Initialise | BehaviourState::Ongoing => {
                    self.state = BehaviourState::Ongoing;
                    return BehaviourState::Ongoing;
                }
                r if r == T::ADVANCE_ON => self.cursor += 1,
                r => return self.finish(r),
            }
        }

        self.finish(T::EXHAUSTED)
    }

    fn reset(&mut self) {
        self.state = BehaviourState::Initialise;
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }

    fn children(&self) -> &[Box<dyn BehaviourNode>] {
        &self.children
    }

    fn cursor(&self) -> Option<usize> {
        Some(self.cursor)
    }
}
