//! Seams between the search and whatever game it searches.
//!
//! The search never owns or copies a position. It walks the tree by applying
//! a move to one shared instance, recursing, and undoing the same move, so a
//! [`GameTree`] implementation must make `undo` the exact inverse of `apply`.

use std::fmt;

use crate::types::Score;

/// A game position that can be explored move by move in place.
pub trait GameTree {
    /// Opaque move handle produced by [`GameTree::legal_moves`].
    type Move: Copy + fmt::Debug;

    /// All legal moves for the side to move, in a deterministic order.
    ///
    /// Regenerated on every call; the search consumes the list once per node.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv`, which must come from `legal_moves` of the current position.
    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply(mv)`.
    fn undo(&mut self, mv: Self::Move);

    /// True when the game has ended in this position (mate, stalemate or draw).
    fn is_terminal(&self) -> bool;
}

/// Static evaluation used at the leaves of the search.
pub trait Evaluator<G: ?Sized> {
    fn evaluate(&self, tree: &G) -> Score;
}

impl<G: ?Sized, F> Evaluator<G> for F
where
    F: Fn(&G) -> Score,
{
    fn evaluate(&self, tree: &G) -> Score {
        self(tree)
    }
}
