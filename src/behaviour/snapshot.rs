//! Point-in-time view of a behaviour tree for logs and debug overlays.

use crate::behaviour::{BehaviourState, NodeKind};
use serde::Serialize;
use std::fmt;

/// Serializable view of a node and its subtree.
///
/// The `Display` impl renders an indented outline, one node per line:
///
/// ```text
/// Sequence "Root Sequence" [Ongoing] @1
///   Action "Find Key" [Success]
///   Action "Go To Room" [Ongoing]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub kind: NodeKind,
    pub state: BehaviourState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Depth-first search for a node by name.
    pub fn find(&self, name: &str) -> Option<&NodeSnapshot> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(
            f,
            "{:indent$}{} {:?} [{}]",
            "",
            self.kind,
            self.name,
            self.state,
            indent = depth * 2
        )?;
        if let Some(cursor) = self.cursor {
            write!(f, " @{cursor}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for NodeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
