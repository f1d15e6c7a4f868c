//! Search-tree nodes and the arena that owns them.
//!
//! Nodes refer to their parent by `NodeId`, an index into the `SearchTree` that
//! created them. The root's parent index is its own index and it carries an explicit
//! root flag; path reconstruction stops on the flag, never on a missing parent.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::engine::State;
use crate::errors::{PuzzleError, Result};
use crate::heuristics::EvaluationPolicy;

/// Position of a node inside its `SearchTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state together with its place in the search tree.
///
/// Two nodes are equal when their states are equal, wherever they sit in the tree.
#[derive(Clone, Debug)]
pub struct Node {
    state: State,
    parent: NodeId,
    depth: u32,
    is_root: bool,
}

impl Node {
    /// Builds an unattached child of `parent`, which lives at `parent_id`.
    ///
    /// The child only becomes part of a tree once passed to `SearchTree::insert`.
    pub fn new_child(parent_id: NodeId, parent: &Node, state: State) -> Node {
        Node {
            state,
            parent: parent_id,
            depth: parent.depth + 1,
            is_root: false,
        }
    }

    /// The wrapped state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Parent position. The root is its own parent.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Evaluates the wrapped state against `goal` under `policy`.
    pub fn evaluation_cost(&self, policy: EvaluationPolicy, goal: &State) -> u32 {
        self.state.cost_to_goal(policy, goal)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl fmt::Display for Node {
    /// One-line summary: depth, producing move, move cost, cumulative cost and board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {:>6} | {:>5} | move cost {:>2} | cumulative {:>6} | {}",
            self.depth,
            self.state.predecessor(),
            self.state.local_cost(),
            self.state.cumulative_cost(),
            self.state.to_text()
        )
    }
}

/// Arena holding every node a search has retained.
///
/// Created with a single root; further nodes are appended by `insert`. A `NodeId`
/// stays valid until the tree is pruned with `prune_to_root`.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Creates a tree whose only node is a root wrapping `initial`.
    ///
    /// # Examples
    /// ```
    /// use tile_search::engine::State;
    /// use tile_search::node::SearchTree;
    ///
    /// let tree = SearchTree::new("1 2 3 8 0 4 7 6 5".parse::<State>().unwrap());
    /// let root = &tree[tree.root()];
    /// assert!(root.is_root());
    /// assert_eq!(root.depth(), 0);
    /// assert_eq!(root.parent(), tree.root());
    /// ```
    pub fn new(initial: State) -> SearchTree {
        let root = Node {
            state: initial,
            parent: NodeId(0),
            depth: 0,
            is_root: true,
        };
        SearchTree { nodes: vec![root] }
    }

    /// Position of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node, returning `None` for positions outside this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Builds one unattached child node per successor of the node at `id`.
    ///
    /// # Returns
    /// * `Ok(Vec<Node>)` with children parented at `id`, one depth deeper.
    /// * `Err(PuzzleError::InvalidNodeConstruction)` if `id` is not in this tree.
    pub fn children(&self, id: NodeId) -> Result<Vec<Node>> {
        let parent = self.get(id).ok_or_else(|| {
            PuzzleError::InvalidNodeConstruction(format!("no parent node at index {}", id.index()))
        })?;
        Ok(parent
            .state
            .successors()
            .into_iter()
            .map(|state| Node::new_child(id, parent, state))
            .collect())
    }

    /// Attaches a child node built by `Node::new_child` or `SearchTree::children`.
    ///
    /// # Returns
    /// * `Ok(NodeId)` with the position of the attached node.
    /// * `Err(PuzzleError::InvalidNodeConstruction)` if the node claims to be a root,
    ///   its parent is not in this tree, or its depth disagrees with the parent's.
    pub fn insert(&mut self, node: Node) -> Result<NodeId> {
        if node.is_root {
            return Err(PuzzleError::InvalidNodeConstruction(
                "a tree has exactly one root".to_string(),
            ));
        }
        let parent = self.get(node.parent).ok_or_else(|| {
            PuzzleError::InvalidNodeConstruction(format!(
                "parent index {} is not in the tree",
                node.parent.index()
            ))
        })?;
        if node.depth != parent.depth + 1 {
            return Err(PuzzleError::InvalidNodeConstruction(format!(
                "depth {} does not follow parent depth {}",
                node.depth, parent.depth
            )));
        }
        self.nodes.push(node);
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Drops every node except the root. Positions other than `root()` become invalid.
    pub fn prune_to_root(&mut self) {
        self.nodes.truncate(1);
    }

    /// Walks parent links from `id` back to the root.
    ///
    /// # Returns
    /// The nodes on the path ordered from the root to `id`, or
    /// `Err(PuzzleError::InvalidNodeConstruction)` if `id` is not in this tree.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<&Node>> {
        let mut node = self.get(id).ok_or_else(|| {
            PuzzleError::InvalidNodeConstruction(format!("no node at index {}", id.index()))
        })?;
        let mut path = vec![node];
        while !node.is_root {
            node = &self.nodes[node.parent.0];
            path.push(node);
        }
        path.reverse();
        Ok(path)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
