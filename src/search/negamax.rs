//! The negamax inner node.

use crate::board::{zobrist, Board, Move};

use super::ordering::{score_move, sort_moves, ScoredMove, TT_MOVE_BONUS};
use super::qsearch::qsearch;
use super::reductions::{extension_for, lmr_reduction};
use super::tt::{from_tt_score, Bound};
use super::{SearchState, MATE};

pub(crate) fn negamax(
    st: &mut SearchState,
    board: &mut Board,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    ply: i32,
) -> i32 {
    // Cooperative cancellation: the placeholder return is fine because
    // the root discards everything from a stopped iteration.
    if st.time_up() {
        return 0;
    }
    st.nodes += 1;

    let alpha0 = alpha;
    let key = zobrist::compute_key(board);
    let mut tt_move = Move::NULL;

    if let Some(entry) = st.tt.probe(key) {
        if entry.depth >= depth {
            tt_move = entry.best;
            let tt_score = from_tt_score(entry.score, ply);
            match entry.bound {
                Bound::Exact => return tt_score,
                Bound::Lower => alpha = alpha.max(tt_score),
                Bound::Upper => beta = beta.min(tt_score),
                Bound::Empty => {}
            }
            if alpha >= beta {
                return tt_score;
            }
        }
    }

    if depth <= 0 {
        return qsearch(st, board, alpha, beta);
    }

    let moves = board.generate_moves();
    if moves.is_empty() {
        // Mate distance depends on ply so mate scores stay consistent
        // across the tree and through the TT.
        return if board.is_in_check(board.side_to_move()) {
            -MATE + ply
        } else {
            0
        };
    }

    let mut scored: Vec<ScoredMove> = moves
        .iter()
        .map(|mv| {
            let mut score = score_move(board, &st.eval, mv);
            if mv == tt_move {
                score += TT_MOVE_BONUS;
            }
            ScoredMove { mv, score }
        })
        .collect();
    sort_moves(&mut scored);

    let mut best_move = Move::NULL;

    for (index, entry) in scored.iter().enumerate() {
        if st.stopped {
            break;
        }
        let mv = entry.mv;

        let ext = extension_for(mv);
        let red = lmr_reduction(depth, index, mv.is_tactical());

        let info = board.make_move(mv);
        st.eval.on_make_move(board, mv);

        let score = if red > 0 {
            // Try the reduced depth first; re-search at full depth only
            // if the move threatens to beat alpha.
            let reduced = -negamax(st, board, depth - 1 - red + ext, -beta, -alpha, ply + 1);
            if reduced > alpha {
                -negamax(st, board, depth - 1 + ext, -beta, -alpha, ply + 1)
            } else {
                reduced
            }
        } else {
            -negamax(st, board, depth - 1 + ext, -beta, -alpha, ply + 1)
        };

        st.eval.on_unmake_move(board, mv);
        board.unmake_move(mv, info);

        if score >= beta {
            // The actual score is more informative than beta.
            st.tt.store(key, depth, Bound::Lower, score, mv, ply);
            return beta;
        }
        if score > alpha {
            alpha = score;
            best_move = mv;
        }
    }

    let bound = if alpha > alpha0 {
        Bound::Exact
    } else {
        Bound::Upper
    };
    st.tt.store(key, depth, bound, alpha, best_move, ply);

    alpha
}
