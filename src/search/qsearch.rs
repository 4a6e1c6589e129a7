//! Quiescence search: resolve captures and promotions past the
//! horizon so the evaluation is only consulted in quiet positions.

use crate::board::Board;

use super::ordering::{score_move, sort_moves, ScoredMove};
use super::SearchState;

pub(crate) fn qsearch(st: &mut SearchState, board: &mut Board, mut alpha: i32, beta: i32) -> i32 {
    let stand_pat = st.eval.eval_stm_cp(board);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let moves = board.generate_tactical_moves();
    let mut scored: Vec<ScoredMove> = moves
        .iter()
        .map(|mv| ScoredMove {
            mv,
            score: score_move(board, &st.eval, mv),
        })
        .collect();
    sort_moves(&mut scored);

    for entry in scored {
        let mv = entry.mv;
        let info = board.make_move(mv);
        st.eval.on_make_move(board, mv);

        let score = -qsearch(st, board, -beta, -alpha);

        st.eval.on_unmake_move(board, mv);
        board.unmake_move(mv, info);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
