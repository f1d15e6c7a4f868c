//! Frontier containers: the nodes discovered but not yet explored.
//!
//! Every frontier takes ownership of candidate nodes through `Frontier::offer`, which
//! attaches accepted nodes to the `SearchTree`, and hands back node positions from
//! `Frontier::pop` in its own removal order.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::engine::State;
use crate::errors::Result;
use crate::node::{Node, NodeId, SearchTree};

/// Interface shared by the frontier disciplines.
pub trait Frontier {
    /// Adds the tree's existing node at `id` (normally the root).
    fn seed(&mut self, tree: &SearchTree, id: NodeId, cost: u32);

    /// Offers a candidate child ranked at `cost`.
    ///
    /// Returns `Ok(true)` if the candidate was attached to `tree` and queued.
    fn offer(&mut self, tree: &mut SearchTree, node: Node, cost: u32) -> Result<bool>;

    /// Removes the next node to explore.
    fn pop(&mut self, tree: &SearchTree) -> Option<NodeId>;

    /// Number of nodes waiting.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which end of a `LinearFrontier` new nodes join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// Join at the tail, leave from the head.
    Fifo,
    /// Join at the head, leave from the head.
    Lifo,
}

/// A queue or stack of nodes. Accepts every candidate; duplicates are filtered by the
/// caller's explored set only.
#[derive(Debug)]
pub struct LinearFrontier {
    queue: VecDeque<NodeId>,
    discipline: Discipline,
}

impl LinearFrontier {
    pub fn new(discipline: Discipline) -> Self {
        LinearFrontier {
            queue: VecDeque::new(),
            discipline,
        }
    }

    fn push(&mut self, id: NodeId) {
        match self.discipline {
            Discipline::Fifo => self.queue.push_back(id),
            Discipline::Lifo => self.queue.push_front(id),
        }
    }
}

impl Frontier for LinearFrontier {
    fn seed(&mut self, _tree: &SearchTree, id: NodeId, _cost: u32) {
        self.push(id);
    }

    fn offer(&mut self, tree: &mut SearchTree, node: Node, _cost: u32) -> Result<bool> {
        let id = tree.insert(node)?;
        self.push(id);
        Ok(true)
    }

    fn pop(&mut self, _tree: &SearchTree) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Heap entry ordered by `(cost, sequence)`.
///
/// The sequence number is unique per entry, so entries with equal cost are kept
/// apart and leave in the order they arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct PriorityEntry {
    cost: u32,
    sequence: u64,
    id: NodeId,
}

/// Live frontier slot for one state.
#[derive(Clone, Copy, Debug)]
struct Slot {
    id: NodeId,
    sequence: u64,
}

/// Lowest-cost-first frontier holding at most one node per state.
///
/// When a candidate's state is already waiting, the candidate replaces it only if
/// its state is strictly cheaper (`State::cost_order`). Replaced entries stay in the
/// heap and are skipped when they surface.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<PriorityEntry>>,
    slots: HashMap<State, Slot>,
    next_sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    fn enqueue(&mut self, tree: &SearchTree, id: NodeId, cost: u32) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(PriorityEntry { cost, sequence, id }));
        self.slots.insert(tree[id].state().clone(), Slot { id, sequence });
    }

    /// Whether a node for `state` is currently waiting.
    pub fn contains(&self, state: &State) -> bool {
        self.slots.contains_key(state)
    }
}

impl Frontier for PriorityFrontier {
    fn seed(&mut self, tree: &SearchTree, id: NodeId, cost: u32) {
        self.enqueue(tree, id, cost);
    }

    fn offer(&mut self, tree: &mut SearchTree, node: Node, cost: u32) -> Result<bool> {
        if let Some(slot) = self.slots.get(node.state()) {
            let waiting = tree[slot.id].state();
            if !node.state().cost_order(waiting).is_lt() {
                return Ok(false);
            }
        }
        let id = tree.insert(node)?;
        self.enqueue(tree, id, cost);
        Ok(true)
    }

    fn pop(&mut self, tree: &SearchTree) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if let Entry::Occupied(slot) = self.slots.entry(tree[entry.id].state().clone()) {
                if slot.get().sequence == entry.sequence {
                    slot.remove();
                    return Some(entry.id);
                }
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
