//! Trace steps recorded by the engine.
//!
//! Every primitive action taken by an operation appends one [`Step`] to the
//! tree's [`TraceBuffer`]. Each step carries a snapshot blob of the whole tree
//! as it stood when the step was recorded, so a consumer can replay the
//! operation without re-running it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::{Color, NodeId};

/// Kind of primitive action a step records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    Compare,
    Insert,
    RotateLeft,
    RotateRight,
    Recolor,
    Traverse,
    Found,
    NotFound,
}

impl StepKind {
    pub fn is_rotation(self) -> bool {
        matches!(self, StepKind::RotateLeft | StepKind::RotateRight)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StepKind::Compare => "COMPARE",
            StepKind::Insert => "INSERT",
            StepKind::RotateLeft => "ROTATE_LEFT",
            StepKind::RotateRight => "ROTATE_RIGHT",
            StepKind::Recolor => "RECOLOR",
            StepKind::Traverse => "TRAVERSE",
            StepKind::Found => "FOUND",
            StepKind::NotFound => "NOT_FOUND",
        };
        f.write_str(tag)
    }
}

/// What a step's primary or secondary slot points at.
///
/// Comparisons reference the searched value rather than a node, and a failed
/// search has no node to reference at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepTarget {
    Node(NodeId),
    Value(i64),
}

impl StepTarget {
    /// The node id, if this target references a node.
    pub fn node(self) -> Option<NodeId> {
        match self {
            StepTarget::Node(id) => Some(id),
            StepTarget::Value(_) => None,
        }
    }

    /// Flat integer form for consumers that only understand numbers.
    pub fn as_raw(self) -> i64 {
        match self {
            StepTarget::Node(id) => i64::try_from(id.0).unwrap_or(i64::MAX),
            StepTarget::Value(value) => value,
        }
    }
}

/// One recorded unit of algorithmic progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    kind: StepKind,
    primary: StepTarget,
    secondary: Option<StepTarget>,
    description: String,
    new_color: Option<Color>,
    snapshot: String,
}

impl Step {
    pub(crate) fn new(
        kind: StepKind,
        primary: StepTarget,
        secondary: Option<StepTarget>,
        description: String,
        new_color: Option<Color>,
        snapshot: String,
    ) -> Self {
        Self {
            kind,
            primary,
            secondary,
            description,
            new_color,
            snapshot,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn primary(&self) -> StepTarget {
        self.primary
    }

    pub fn secondary(&self) -> Option<StepTarget> {
        self.secondary
    }

    /// Human-readable text intended for direct display.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Color a RECOLOR step assigned.
    pub fn new_color(&self) -> Option<Color> {
        self.new_color
    }

    /// Snapshot blob, parseable with [`crate::snapshot::decode`].
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// Node ids a consumer should highlight while showing this step.
    pub fn highlighted(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.primary)
            .chain(self.secondary)
            .filter_map(StepTarget::node)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)
    }
}

/// Append-only step sequence, drained once by the caller.
#[derive(Debug, Default)]
pub struct TraceBuffer {
    steps: Vec<Step>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps recorded so far, without consuming them.
    pub fn pending(&self) -> &[Step] {
        &self.steps
    }

    /// Take every recorded step, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Step> {
        std::mem::take(&mut self.steps)
    }
}
