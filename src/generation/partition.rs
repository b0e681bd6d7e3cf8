//! # Space Partitioning
//!
//! Recursive binary splitting of the map rectangle.
//!
//! ```text
//! +-------------+        +------+------+
//! |             |        |  1   |  2   |
//! |      0      |   ->   |      +------+
//! |             |        |      |  3   |
//! +-------------+        +------+------+
//! ```
//!
//! Each split cuts one node along one axis at one coordinate, so the leaves
//! always tile the root rectangle exactly.

use crate::map::Rect;
use crate::utils::sample_half_open;
use crate::GenerationConfig;
use log::debug;
use rand::Rng;

/// A node in the partition tree. Either a leaf (may hold a room) or an
/// internal node owning exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode {
    rect: Rect,
    room: Option<Rect>,
    children: Option<Box<(PartitionNode, PartitionNode)>>,
}

/// Axis a node is cut along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut by a horizontal line: children stacked top/bottom
    Horizontal,
    /// Cut by a vertical line: children side by side
    Vertical,
}

impl PartitionNode {
    /// Creates a leaf covering `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            room: None,
            children: None,
        }
    }

    /// Builds a full partition tree over `rect`, starting at depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{GenerationConfig, PartitionNode, Rect};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let config = GenerationConfig::new(1).with_size(6, 6).with_room_sizes(4, 8);
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let tree = PartitionNode::build(Rect::new(0, 0, 6, 6), &config, &mut rng);
    /// assert!(tree.is_leaf()); // 6 < 2 * 4, never split
    /// ```
    pub fn build<R: Rng + ?Sized>(rect: Rect, config: &GenerationConfig, rng: &mut R) -> Self {
        let mut root = Self::new(rect);
        root.split(0, config, rng);
        debug!(
            "Partitioned {} into {} leaves (depth {})",
            rect,
            root.leaf_count(),
            root.depth()
        );
        root
    }

    /// Recursively splits this node until the depth or size limits stop it.
    pub fn split<R: Rng + ?Sized>(&mut self, depth: u32, config: &GenerationConfig, rng: &mut R) {
        let min_size = config.min_leaf_edge();
        if depth >= config.max_depth
            || self.rect.width < 2 * min_size
            || self.rect.height < 2 * min_size
        {
            return;
        }

        // Prefer cutting across the longer side, then flip half the time.
        let mut axis = if self.rect.width < self.rect.height {
            SplitAxis::Horizontal
        } else {
            SplitAxis::Vertical
        };
        if rng.gen_bool(0.5) {
            axis = axis.flipped();
        }

        let (left, right) = match axis {
            SplitAxis::Horizontal => {
                let split_y = sample_half_open(rng, min_size, self.rect.height - min_size);
                (
                    Rect::new(self.rect.x, self.rect.y, self.rect.width, split_y),
                    Rect::new(
                        self.rect.x,
                        self.rect.y + split_y,
                        self.rect.width,
                        self.rect.height - split_y,
                    ),
                )
            }
            SplitAxis::Vertical => {
                let split_x = sample_half_open(rng, min_size, self.rect.width - min_size);
                (
                    Rect::new(self.rect.x, self.rect.y, split_x, self.rect.height),
                    Rect::new(
                        self.rect.x + split_x,
                        self.rect.y,
                        self.rect.width - split_x,
                        self.rect.height,
                    ),
                )
            }
        };

        let mut children = Box::new((PartitionNode::new(left), PartitionNode::new(right)));
        children.0.split(depth + 1, config, rng);
        children.1.split(depth + 1, config, rng);
        self.children = Some(children);
    }

    /// Region covered by this node.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Room placed in this leaf, if any.
    pub fn room(&self) -> Option<Rect> {
        self.room
    }

    pub(crate) fn set_room(&mut self, room: Rect) {
        self.room = Some(room);
    }

    pub fn left(&self) -> Option<&PartitionNode> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&PartitionNode> {
        self.children.as_deref().map(|(_, right)| right)
    }

    pub(crate) fn children_mut(&mut self) -> Option<(&mut PartitionNode, &mut PartitionNode)> {
        self.children
            .as_deref_mut()
            .map(|(left, right)| (left, right))
    }

    /// A node is a leaf iff it has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Leaves in left-subtree-first order.
    pub fn leaves(&self) -> Vec<&PartitionNode> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a PartitionNode>) {
        match self.children.as_deref() {
            None => out.push(self),
            Some((left, right)) => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.children.as_deref() {
            None => 1,
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Height of the tree below this node; 0 for a leaf.
    pub fn depth(&self) -> u32 {
        match self.children.as_deref() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }
}

impl SplitAxis {
    fn flipped(self) -> Self {
        match self {
            SplitAxis::Horizontal => SplitAxis::Vertical,
            SplitAxis::Vertical => SplitAxis::Horizontal,
        }
    }
}
