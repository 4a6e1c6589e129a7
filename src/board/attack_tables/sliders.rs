//! Ray-walked slider attacks.
//!
//! Attacks are computed on the fly by walking each ray until (and
//! including) the first occupied square. Simpler than magic bitboards
//! and fast enough for the search depths this engine targets; callers
//! only see the `(square, occupancy) -> attack set` contract.

const BISHOP_RAYS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_RAYS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn ray_attacks(sq: usize, occ: u64, rays: &[(isize, isize); 4]) -> u64 {
    let r0 = (sq / 8) as isize;
    let f0 = (sq % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in rays {
        let mut r = r0 + dr;
        let mut f = f0 + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << ((r as usize) * 8 + (f as usize));
            attacks |= bit;
            if occ & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

pub(super) fn bishop_attacks_u64(sq: usize, occ: u64) -> u64 {
    ray_attacks(sq, occ, &BISHOP_RAYS)
}

pub(super) fn rook_attacks_u64(sq: usize, occ: u64) -> u64 {
    ray_attacks(sq, occ, &ROOK_RAYS)
}
