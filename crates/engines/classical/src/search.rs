//! Minimax search with alpha-beta pruning
//!
//! The search walks one shared [`GameTree`] in place: every move is applied,
//! searched and undone before the next sibling is tried, so the tree is back
//! in its original state when a call returns.

use std::ops::{Deref, DerefMut};

use chess_core::{Evaluator, GameTree, Score};
use tracing::{debug, trace};

/// Bound beyond any reachable score. Negating it cannot overflow.
pub const INFINITY: Score = Score::MAX;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root replies and leaves included
    pub nodes: u64,
    /// Nodes whose remaining siblings were skipped by a cutoff
    pub cutoffs: u64,
}

/// A move applied to a tree, undone when the guard goes out of scope.
///
/// Undo therefore runs on every exit path of a ply: normal return, cutoff
/// `break`, and unwinding.
struct Applied<'a, G: GameTree> {
    tree: &'a mut G,
    mv: G::Move,
}

impl<'a, G: GameTree> Applied<'a, G> {
    fn new(tree: &'a mut G, mv: G::Move) -> Self {
        tree.apply(mv);
        Self { tree, mv }
    }
}

impl<G: GameTree> Deref for Applied<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        &*self.tree
    }
}

impl<G: GameTree> DerefMut for Applied<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        &mut *self.tree
    }
}

impl<G: GameTree> Drop for Applied<'_, G> {
    fn drop(&mut self) {
        self.tree.undo(self.mv);
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `maximizing` is true when the side to move at this node is the side the
/// evaluator scores for. Leaves are nodes at depth 0, terminal positions and
/// positions without legal moves; only they call the evaluator.
pub fn minimax<G, E>(
    tree: &mut G,
    eval: &E,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Score
where
    G: GameTree,
    E: Evaluator<G> + ?Sized,
{
    stats.nodes += 1;

    if depth == 0 || tree.is_terminal() {
        return eval.evaluate(tree);
    }

    let moves = tree.legal_moves();
    if moves.is_empty() {
        return eval.evaluate(tree);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let value = {
            let mut child = Applied::new(tree, mv);
            minimax(&mut *child, eval, depth - 1, alpha, beta, !maximizing, stats)
        };

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Picks the move for the side to move, or `None` if it has no legal moves.
///
/// See [`choose_move_scored`].
pub fn choose_move<G, E>(tree: &mut G, eval: &E, depth: u8) -> Option<G::Move>
where
    G: GameTree,
    E: Evaluator<G> + ?Sized,
{
    let mut stats = SearchStats::default();
    choose_move_scored(tree, eval, depth, &mut stats).map(|(mv, _)| mv)
}

/// Searches every root move and returns the best one with its score.
///
/// Each root move is scored by a full-window minimizing search of the
/// opponent's replies at `depth - 1`. The first move with the strictly
/// greatest score wins, so ties go to the earliest move in generation order.
/// A `depth` of 0 searches like a depth of 1.
pub fn choose_move_scored<G, E>(
    tree: &mut G,
    eval: &E,
    depth: u8,
    stats: &mut SearchStats,
) -> Option<(G::Move, Score)>
where
    G: GameTree,
    E: Evaluator<G> + ?Sized,
{
    let reply_depth = depth.saturating_sub(1);
    let mut best: Option<(G::Move, Score)> = None;

    for mv in tree.legal_moves() {
        let score = {
            let mut child = Applied::new(tree, mv);
            minimax(&mut *child, eval, reply_depth, -INFINITY, INFINITY, false, stats)
        };
        trace!(?mv, score, "root move");

        let improves = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => debug!(
            ?mv,
            score,
            depth,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search finished"
        ),
        None => debug!(depth, "no legal moves at root"),
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
