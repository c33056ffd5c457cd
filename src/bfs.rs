//! A breadth-first search that stops at the first node satisfying a success predicate, in the
//! shape of [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
//! but returning the explored parent links so the caller decides what to do with the path.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::hash::Hash;
use thiserror::Error;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index stored for the start node. No entry can ever live at this index.
pub const ROOT: usize = usize::MAX;

/// Failure to walk the parent links back to the start. Only a faulty search can produce this.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BrokenChain {
    #[error("parent link points to missing entry {index}")]
    MissingLink { index: usize },
    #[error("parent links contain a cycle through entry {index}")]
    Cycle { index: usize },
}

/// The first node found that satisfies the success predicate, together with the parent links of
/// every node discovered on the way.
#[derive(Clone, Debug)]
pub struct ExitFound<N> {
    pub(crate) parents: FxIndexMap<N, usize>,
    pub(crate) exit: usize,
}

impl<N> ExitFound<N>
where
    N: Eq + Hash + Clone,
{
    /// The node that ended the search.
    pub fn exit(&self) -> Option<&N> {
        self.parents.get_index(self.exit).map(|(node, _)| node)
    }
    /// Every discovered node mapped to the index of the node that discovered it.
    pub fn parents(&self) -> &FxIndexMap<N, usize> {
        &self.parents
    }
    /// Number of nodes discovered, including the start and the exit.
    pub fn len_explored(&self) -> usize {
        self.parents.len()
    }
    /// Walks the parent links from the exit back to the start and returns the nodes in
    /// start-to-exit order.
    pub fn reconstruct(&self) -> Result<Vec<N>, BrokenChain> {
        let mut path = Vec::new();
        let mut index = self.exit;
        while index != ROOT {
            if path.len() >= self.parents.len() {
                return Err(BrokenChain::Cycle { index });
            }
            let (node, &parent) = self
                .parents
                .get_index(index)
                .ok_or(BrokenChain::MissingLink { index })?;
            path.push(node.clone());
            index = parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Explores from `start` in breadth-first order. Successors are considered in the order
/// `successors` yields them, so that order breaks ties between equally short paths. A node is
/// tested against `success` when it is first discovered and the search returns at once; the start
/// itself is tested before anything else is expanded.
pub fn bfs_exit<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<ExitFound<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), ROOT);
    if success(start) {
        return Some(ExitFound { parents, exit: 0 });
    }
    let mut to_see = VecDeque::new();
    to_see.push_back((0, start.clone()));
    while let Some((index, node)) = to_see.pop_front() {
        for successor in successors(&node) {
            match parents.entry(successor) {
                // Already discovered, either queued or expanded.
                Occupied(_) => continue,
                Vacant(e) => {
                    let n = e.index();
                    let found = success(e.key());
                    let successor = e.key().clone();
                    e.insert(index);
                    if found {
                        return Some(ExitFound { parents, exit: n });
                    }
                    to_see.push_back((n, successor));
                }
            }
        }
    }
    None
}
