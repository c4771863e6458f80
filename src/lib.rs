//! rbtrace - traced red-black tree
//!
//! A red-black tree engine that records every comparison, insertion,
//! rotation and recoloring as a replayable step, together with the snapshot
//! codec and layout function a presentation layer needs to animate them.
//!
//! ```
//! use rbtrace::{layout, LayoutConfig, RedBlackTree, StepKind};
//!
//! let mut tree = RedBlackTree::new();
//! for v in [30, 20, 10] {
//!     tree.insert(v);
//! }
//! let steps = tree.drain_steps();
//! assert_eq!(steps.iter().filter(|s| s.kind() == StepKind::RotateRight).count(), 1);
//!
//! let positions = layout::positions(tree.root(), &LayoutConfig::default());
//! assert_eq!(positions.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod node;
pub mod playback;
pub mod snapshot;
pub mod step;
pub mod tree;
pub mod utils;

pub use error::{InvariantViolation, SearchError, SearchOutcome, SnapshotError};
pub use layout::{LayoutConfig, Position};
pub use node::{Color, NodeId, NodeRef};
pub use playback::{Frame, Playback, PlaybackConfig};
pub use snapshot::NodeSnapshot;
pub use step::{Step, StepKind, StepTarget, TraceBuffer};
pub use tree::{RedBlackTree, TraversalOrder};
