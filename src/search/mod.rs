//! Iterative-deepening alpha-beta search.
//!
//! The driver deepens from depth 1, re-orders the root move list from
//! the previous iteration's result, narrows the window around the
//! previous score from depth 3 (re-searching full-width if the result
//! falls outside it), and only ever commits fully completed
//! iterations. Time cancellation is cooperative: the clock is polled
//! once per node, and a stopped search unwinds with placeholder
//! scores that the root throws away.

mod negamax;
mod ordering;
mod qsearch;
mod reductions;
pub mod tt;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::debug;

use crate::board::{zobrist, Board, Move};
use crate::eval::Evaluator;

use self::ordering::{score_move, sort_moves, ScoredMove, PREV_BEST_BONUS, TT_MOVE_BONUS};
use self::tt::TranspositionTable;

/// Larger than any reachable score.
pub const INF: i32 = 1_000_000;
/// Mate score magnitude; actual mate scores are `MATE - ply`.
pub const MATE: i32 = 900_000;
/// Scores beyond this magnitude are treated as mate scores.
pub const MATE_BOUND: i32 = 800_000;

/// Aspiration half-window in centipawns.
const ASPIRATION_WINDOW: i32 = 35;

#[inline]
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score > MATE_BOUND || score < -MATE_BOUND
}

/// Search limits; both default to the façade's defaults.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Maximum iteration depth
    pub depth: u32,
    /// Time budget in milliseconds; 0 means no time cap
    pub movetime_ms: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            depth: 6,
            movetime_ms: 0,
        }
    }
}

/// The outcome of a `think` call.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// The chosen move; `None` only in terminal positions
    pub best_move: Option<Move>,
    /// Score in centipawns from the searched side's view; mate scores
    /// have magnitude above `MATE_BOUND`
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u32,
    /// Nodes visited, excluding quiescence stand-pat-only nodes
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// State owned by one search thread: evaluator, transposition table,
/// node counter and clock. Reused across searches so the table stays
/// warm; the generation counter makes old entries progressively
/// evictable without clearing.
pub struct SearchState {
    pub(crate) eval: Evaluator,
    pub(crate) tt: TranspositionTable,
    pub(crate) nodes: u64,
    start: Instant,
    time_limit_ms: u64,
    stopped: bool,
    stop: Arc<AtomicBool>,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchState {
            eval: Evaluator::new(),
            tt: TranspositionTable::new(tt_mb),
            nodes: 0,
            start: Instant::now(),
            time_limit_ms: 0,
            stopped: false,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag a front-end may set to abort the current search.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn begin_search(&mut self, board: &Board, movetime_ms: u64) {
        self.nodes = 0;
        self.start = Instant::now();
        self.time_limit_ms = movetime_ms;
        self.stopped = false;
        self.stop.store(false, Ordering::Relaxed);
        self.tt.new_search();
        self.eval.init(board);
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Polled once per node. Once it fires, it latches.
    pub(crate) fn time_up(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
            return true;
        }
        if self.time_limit_ms == 0 {
            return false;
        }
        if self.elapsed_ms() >= self.time_limit_ms {
            self.stopped = true;
            return true;
        }
        false
    }
}

/// Search `board` within `limits` and report the best move found.
pub fn think(board: &mut Board, st: &mut SearchState, limits: &Limits) -> SearchReport {
    st.begin_search(board, limits.movetime_ms);

    let mut report = SearchReport {
        best_move: None,
        score: 0,
        depth: 0,
        nodes: 0,
        elapsed_ms: 0,
    };

    let root_list = board.generate_moves();
    if root_list.is_empty() {
        report.score = if board.is_in_check(board.side_to_move()) {
            -MATE
        } else {
            0
        };
        report.elapsed_ms = st.elapsed_ms();
        return report;
    }

    let mut root: Vec<Move> = root_list.iter().collect();

    // Seed the ordering hint from a previous search of this position.
    let mut root_tt_move = Move::NULL;
    if let Some(entry) = st.tt.probe(zobrist::compute_key(board)) {
        root_tt_move = entry.best;
    }

    let mut prev_score = 0;

    for depth in 1..=limits.depth.max(1) {
        if st.time_up() {
            break;
        }

        let mut alpha = -INF;
        let mut beta = INF;
        if depth >= 3 {
            alpha = prev_score - ASPIRATION_WINDOW;
            beta = prev_score + ASPIRATION_WINDOW;
        }
        // The intended window; alpha itself moves during the search.
        let asp_alpha = alpha;
        let asp_beta = beta;

        let mut scored: Vec<ScoredMove> = root
            .iter()
            .map(|&mv| {
                let mut score = score_move(board, &st.eval, mv);
                if mv == root_tt_move {
                    score += TT_MOVE_BONUS;
                }
                if report.best_move == Some(mv) {
                    score += PREV_BEST_BONUS;
                }
                ScoredMove { mv, score }
            })
            .collect();
        sort_moves(&mut scored);

        let mut best_move = scored[0].mv;
        let mut best_score = -INF;
        search_root(st, board, &scored, depth, &mut alpha, beta, &mut best_move, &mut best_score);

        // Comparing against the live (alpha, beta) would be wrong here:
        // alpha has been raised to the best score already.
        let aspiration_failed =
            depth >= 3 && !st.stopped && (best_score <= asp_alpha || best_score >= asp_beta);
        if aspiration_failed {
            let mut alpha = -INF;
            best_move = scored[0].mv;
            best_score = -INF;
            search_root(st, board, &scored, depth, &mut alpha, INF, &mut best_move, &mut best_score);
        }

        if st.stopped {
            break;
        }

        report.best_move = Some(best_move);
        report.score = best_score;
        report.depth = depth;
        prev_score = best_score;

        // Keep the PV move first next iteration.
        if let Some(pos) = root.iter().position(|&m| m == best_move) {
            root[..=pos].rotate_right(1);
        }
        root_tt_move = best_move;

        debug!(
            "depth {} score {} best {} nodes {} time {}ms",
            depth,
            best_score,
            best_move,
            st.nodes,
            st.elapsed_ms()
        );
    }

    report.nodes = st.nodes;
    report.elapsed_ms = st.elapsed_ms();
    report
}

#[allow(clippy::too_many_arguments)]
fn search_root(
    st: &mut SearchState,
    board: &mut Board,
    scored: &[ScoredMove],
    depth: u32,
    alpha: &mut i32,
    beta: i32,
    best_move: &mut Move,
    best_score: &mut i32,
) {
    for entry in scored {
        if st.stopped {
            break;
        }
        let mv = entry.mv;

        let info = board.make_move(mv);
        st.eval.on_make_move(board, mv);

        let score = -negamax::negamax(st, board, depth as i32 - 1, -beta, -*alpha, 1);

        st.eval.on_unmake_move(board, mv);
        board.unmake_move(mv, info);

        if st.stopped {
            break;
        }

        if score > *best_score {
            *best_score = score;
            *best_move = mv;
        }
        if score > *alpha {
            *alpha = score;
        }
        if *alpha >= beta {
            break;
        }
    }
}
