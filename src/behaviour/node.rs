//! Core behaviour node trait.

use crate::behaviour::{BehaviourState, NodeSnapshot};
use crate::validation::{accumulate, require, Check, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Action,
    Sequence,
    Selector,
}

impl NodeKind {
    pub fn is_composite(self) -> bool {
        !matches!(self, Self::Action)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Action => "Action",
            Self::Sequence => "Sequence",
            Self::Selector => "Selector",
        };
        f.write_str(label)
    }
}

/// A node of a behaviour tree.
///
/// Nodes are executed once per tick until they report a terminal state.
/// Composites own their children outright; dropping the root drops the tree.
pub trait BehaviourNode {
    /// Diagnostic name.
    fn name(&self) -> &str;

    fn kind(&self) -> NodeKind;

    /// State reached by the most recent `execute`, or `Initialise` after a reset.
    fn state(&self) -> BehaviourState;

    /// Drive the node for one tick.
    fn execute(&mut self, dt: f32) -> BehaviourState;

    /// Return this node and all of its descendants to `Initialise`.
    fn reset(&mut self);

    /// Owned children in traversal order. Leaves have none.
    fn children(&self) -> &[Box<dyn BehaviourNode>] {
        &[]
    }

    /// Index of the child currently being driven, for composites.
    fn cursor(&self) -> Option<usize> {
        None
    }

    /// Capture the current state of this subtree.
    fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            name: self.name().to_string(),
            kind: self.kind(),
            state: self.state(),
            cursor: self.cursor(),
            children: self.children().iter().map(|c| c.snapshot()).collect(),
        }
    }

    /// Report every structural problem in this subtree.
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut checks = Vec::new();
        collect_checks(self, &mut checks);
        accumulate(checks)
    }
}

fn collect_checks<N: BehaviourNode + ?Sized>(node: &N, checks: &mut Vec<Check>) {
    if node.kind().is_composite() {
        checks.push(require(!node.children().is_empty(), || {
            Violation::EmptyComposite {
                name: node.name().to_string(),
                kind: node.kind(),
            }
        }));
    }
    for child in node.children() {
        collect_checks(child.as_ref(), checks);
    }
}

impl fmt::Debug for dyn BehaviourNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviourNode")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("state", &self.state())
            .finish()
    }
}
