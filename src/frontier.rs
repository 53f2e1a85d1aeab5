//! Open-set bookkeeping for A*: a min-priority frontier and the best-cost table.
//!
//! `BinaryHeap` has no decrease-key, so a cheaper path to a board already on
//! the frontier is pushed as a second entry. The dearer entry stays in the heap
//! and is recognised as stale when popped, because its `g` no longer matches
//! the best cost recorded for its board.
use crate::engine::Board;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

/// A frontier entry pointing at a node in the solver's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub f: u32,
    pub g: u32,
    /// Insertion counter; breaks remaining ties first-in first-out.
    pub seq: u64,
    pub node: usize,
}

impl Ord for FrontierEntry {
    // `BinaryHeap` is a max-heap, so "greater" means "popped first":
    // lowest f, then highest g, then earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of nodes awaiting expansion.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node` with the given costs.
    pub fn push(&mut self, f: u32, g: u32, node: usize) {
        self.heap.push(FrontierEntry {
            f,
            g,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes and returns the entry with the lowest `f`, stale or not.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once, stale entries included.
    pub fn peak_len(&self) -> usize {
        self.peak
    }
}

/// Lowest known path cost to every board discovered so far.
///
/// Entries are only ever lowered, never removed.
#[derive(Debug, Default)]
pub struct BestCostTable {
    best: HashMap<Board, u32>,
}

impl BestCostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `g` for `board` if the board is new or `g` is strictly cheaper.
    ///
    /// Returns `true` when the table changed, meaning the path should be queued.
    pub fn improve(&mut self, board: Board, g: u32) -> bool {
        match self.best.entry(board) {
            Entry::Vacant(slot) => {
                slot.insert(g);
                true
            }
            Entry::Occupied(mut slot) if g < *slot.get() => {
                slot.insert(g);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, board: &Board) -> Option<u32> {
        self.best.get(board).copied()
    }

    /// Whether a path reaching `board` at cost `g` has been superseded.
    pub fn is_stale(&self, board: &Board, g: u32) -> bool {
        self.get(board).map_or(false, |best| g > best)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
