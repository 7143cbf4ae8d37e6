//! Landing resolution: which bin caught the ball, and for how much
//!
//! A landed ball pays out `value * multiplier` for the first bin (left to
//! right) whose horizontal span contains it, or nothing if it came to rest
//! in a gap between bins.

use super::board::Bin;

/// Find the bin a ball at horizontal position `x` landed in.
///
/// Bins are checked in creation order and spans are inclusive on both
/// ends, so the left bin wins a shared boundary.
pub fn find_bin(bins: &[Bin], x: f32) -> Option<&Bin> {
    bins.iter().find(|bin| bin.contains_x(x))
}

/// Winnings for a wager landing in `bin`. Exact, no rounding.
#[inline]
pub fn payout(value: f64, bin: &Bin) -> f64 {
    value * bin.multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::sim::board::Board;

    fn bin(x: f32, width: f32, multiplier: f64) -> Bin {
        Bin {
            x,
            y: 560.0,
            width,
            height: 30.0,
            multiplier,
        }
    }

    #[test]
    fn test_finds_bin_containing_x() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        let target = &board.bins[2];
        let found = find_bin(&board.bins, target.center_x()).unwrap();
        assert_eq!(found.x, target.x);
        assert_eq!(found.multiplier, target.multiplier);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let bins = [bin(100.0, 60.0, 2.0)];
        assert!(find_bin(&bins, 100.0).is_some());
        assert!(find_bin(&bins, 160.0).is_some());
        assert!(find_bin(&bins, 99.99).is_none());
        assert!(find_bin(&bins, 160.01).is_none());
    }

    #[test]
    fn test_left_bin_wins_shared_boundary() {
        // Zero spacing: 160 is both the left bin's right edge and the
        // right bin's left edge
        let bins = [bin(100.0, 60.0, 2.0), bin(160.0, 60.0, 1.5)];
        let found = find_bin(&bins, 160.0).unwrap();
        assert_eq!(found.multiplier, 2.0);
    }

    #[test]
    fn test_gap_between_bins_misses() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        // Just past the first bin's right edge, inside the 5px gap
        let gap_x = board.bins[0].x + board.bins[0].width + 1.0;
        assert!(find_bin(&board.bins, gap_x).is_none());
    }

    #[test]
    fn test_board_center_lies_in_a_gap() {
        // With 8 bins centered on the board, the exact center always falls
        // in the gap between bins 3 and 4
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        assert!(find_bin(&board.bins, BOARD_WIDTH / 2.0).is_none());
    }

    #[test]
    fn test_payout_is_exact() {
        let b = bin(0.0, 60.0, 1.5);
        assert_eq!(payout(10.0, &b), 15.0);
        let b = bin(0.0, 60.0, 0.5);
        assert_eq!(payout(10.0, &b), 5.0);
        let b = bin(0.0, 60.0, 2.0);
        assert_eq!(payout(0.25, &b), 0.5);
    }
}
