//! Search tree nodes and the arena that keeps parent chains alive.

use crate::board::Board;

/// Handle of a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A board together with the handle of the node that produced it.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// `None` for roots
    pub parent: Option<NodeId>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self { board, parent: None }
    }

    pub fn child(board: Board, parent: NodeId) -> Self {
        Self {
            board,
            parent: Some(parent),
        }
    }
}

/// Append-only storage for expanded nodes.
///
/// A parent handle can only name a node pushed earlier, so every chain ends
/// at a root and no node is its own ancestor.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.map_or(true, |p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Board of the parent of `id`, if any
    pub fn parent_board(&self, id: NodeId) -> Option<&Board> {
        self.get(id).parent.map(|p| &self.get(p).board)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to its root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// Number of edges between `id` and its root
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Boards from the root down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path: Vec<Board> = self.ancestors(id).map(|node| node.board.clone()).collect();
        path.reverse();
        path
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}
