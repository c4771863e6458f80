//! Headless trace playback.
//!
//! A [`Playback`] owns steps drained from a tree and turns them, one at a
//! time, into [`Frame`]s: the step itself, a display copy of the tree
//! restored from the step's snapshot, fresh layout positions for that copy,
//! and the node ids to highlight. Pacing is left to the caller; the engine
//! has already finished the operation before the first frame is produced,
//! so cancelling playback never touches engine state.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::layout::{self, LayoutConfig, Position};
use crate::node::NodeId;
use crate::step::Step;
use crate::tree::RedBlackTree;

/// Replay pacing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between consecutive frames, in milliseconds.
    pub step_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 500,
        }
    }
}

impl PlaybackConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Everything needed to draw one step.
#[derive(Debug)]
pub struct Frame {
    pub step: Step,
    /// Display copy restored from the step's snapshot.
    pub tree: RedBlackTree,
    pub positions: BTreeMap<NodeId, Position>,
    pub highlighted: BTreeSet<NodeId>,
}

impl Frame {
    fn build(step: Step, layout: &LayoutConfig) -> Result<Self, SnapshotError> {
        let tree = RedBlackTree::restore_from_snapshot(step.snapshot())?;
        let positions = layout::positions(tree.root(), layout);
        let highlighted = step.highlighted().collect();
        Ok(Self {
            step,
            tree,
            positions,
            highlighted,
        })
    }
}

/// Queue of steps awaiting display.
#[derive(Debug, Default)]
pub struct Playback {
    queue: VecDeque<Step>,
    layout: LayoutConfig,
    shown: usize,
}

impl Playback {
    pub fn new(steps: Vec<Step>, layout: LayoutConfig) -> Self {
        Self {
            queue: steps.into(),
            layout,
            shown: 0,
        }
    }

    /// Append steps from a later operation behind the ones still queued.
    pub fn enqueue(&mut self, steps: impl IntoIterator<Item = Step>) {
        self.queue.extend(steps);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Frames produced so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop the next step and build its frame.
    pub fn next_frame(&mut self) -> Option<Result<Frame, SnapshotError>> {
        let step = self.queue.pop_front()?;
        self.shown += 1;
        debug!(kind = %step.kind(), remaining = self.queue.len(), "playback frame");
        Some(Frame::build(step, &self.layout).inspect_err(|e| warn!(error = %e, "unplayable step")))
    }

    /// Jump straight to the final step, discarding the ones before it.
    pub fn skip_to_end(&mut self) -> Option<Result<Frame, SnapshotError>> {
        let skipped = self.queue.len().saturating_sub(1);
        let last = self.queue.pop_back()?;
        self.queue.clear();
        self.shown += 1;
        debug!(skipped, "playback skipped to end");
        Some(Frame::build(last, &self.layout))
    }

    /// Drop every queued step. Returns how many were discarded.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        debug!(dropped, "playback cancelled");
        dropped
    }
}

impl Iterator for Playback {
    type Item = Result<Frame, SnapshotError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Color;
    use crate::step::StepKind;

    fn steps_for(values: &[i64]) -> Vec<Step> {
        let mut tree = RedBlackTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree.drain_steps()
    }

    #[test]
    fn test_frames_follow_step_order() {
        let steps = steps_for(&[30, 20, 10]);
        let kinds: Vec<_> = steps.iter().map(Step::kind).collect();
        let playback = Playback::new(steps, LayoutConfig::default());

        let played: Vec<_> = playback.map(|f| f.unwrap().step.kind()).collect();
        assert_eq!(played, kinds);
    }

    #[test]
    fn test_frame_restores_snapshot_and_layout() {
        let mut playback = Playback::new(steps_for(&[10]), LayoutConfig::default());

        let insert = playback.next_frame().unwrap().unwrap();
        assert_eq!(insert.step.kind(), StepKind::Insert);
        assert_eq!(insert.tree.root().unwrap().color(), Color::Red);
        assert_eq!(insert.positions.len(), 1);

        let recolor = playback.next_frame().unwrap().unwrap();
        assert_eq!(recolor.tree.root().unwrap().color(), Color::Black);
        assert!(playback.next_frame().is_none());
        assert_eq!(playback.shown(), 2);
    }

    #[test]
    fn test_highlight_covers_rotation_pair() {
        let steps = steps_for(&[30, 20, 10]);
        let playback = Playback::new(steps, LayoutConfig::default());
        let rotation = playback
            .map(Result::unwrap)
            .find(|f| f.step.kind() == StepKind::RotateRight)
            .unwrap();
        assert_eq!(rotation.highlighted.len(), 2);
    }

    #[test]
    fn test_skip_to_end_returns_final_state() {
        let mut playback = Playback::new(steps_for(&[1, 2, 3, 4]), LayoutConfig::default());
        let last = playback.skip_to_end().unwrap().unwrap();
        assert_eq!(last.tree.len(), 4);
        assert!(last.tree.check_invariants().is_ok());
        assert!(playback.is_finished());
    }

    #[test]
    fn test_cancel_drops_queue() {
        let mut playback = Playback::new(steps_for(&[1, 2]), LayoutConfig::default());
        playback.next_frame();
        let remaining = playback.remaining();
        assert_eq!(playback.cancel(), remaining);
        assert!(playback.next_frame().is_none());
    }

    #[test]
    fn test_enqueue_appends() {
        let mut playback = Playback::default();
        assert!(playback.is_finished());
        playback.enqueue(steps_for(&[5]));
        assert_eq!(playback.remaining(), 2);
    }

    #[test]
    fn test_interval() {
        let config = PlaybackConfig { step_interval_ms: 250 };
        assert_eq!(config.step_interval(), Duration::from_millis(250));
    }
}
