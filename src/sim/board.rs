//! Static board layout: peg grid and payout bins
//!
//! Built once at session start and never mutated. Pegs form a triangular
//! grid (one more peg per row); bins form a contiguous centered row along
//! the bottom edge, each carrying a payout multiplier.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A fixed circular obstacle the ball deflects off
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Peg {
    pub pos: Vec2,
}

/// A bottom payout receptacle with its multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub multiplier: f64,
}

impl Bin {
    /// Inclusive horizontal span check (both edges count as inside)
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    /// Horizontal midpoint of the bin
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Immutable board geometry for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    /// Pegs in creation order (row-major, top to bottom)
    pub pegs: Vec<Peg>,
    /// Bins in creation order (left to right)
    pub bins: Vec<Bin>,
}

impl Board {
    /// Build the peg grid and bin row for a board of the given dimensions.
    ///
    /// Pure and deterministic; called once at startup.
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(
            width >= PEG_COLUMNS as f32 * PEG_SPACING,
            "board too narrow for the peg column capacity"
        );

        let mut pegs = Vec::new();
        for row in 0..PEG_ROWS {
            for col in 0..=row {
                let x = width / 2.0 + (col as f32 - row as f32 / 2.0) * PEG_SPACING;
                let y = PEG_TOP_Y + row as f32 * PEG_SPACING;
                pegs.push(Peg {
                    pos: Vec2::new(x, y),
                });
            }
        }

        let n = MULTIPLIERS.len();
        let row_width = (BIN_WIDTH + BIN_SPACING) * n as f32 - BIN_SPACING;
        let x_start = (width - row_width) / 2.0;
        let y = height - FLOOR_MARGIN;
        let bins = MULTIPLIERS
            .iter()
            .enumerate()
            .map(|(i, &multiplier)| Bin {
                x: x_start + i as f32 * (BIN_WIDTH + BIN_SPACING),
                y,
                width: BIN_WIDTH,
                height: BIN_HEIGHT,
                multiplier,
            })
            .collect();

        Self {
            width,
            height,
            pegs,
            bins,
        }
    }

    /// The landing line: balls resolve once they reach this y
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - FLOOR_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_count_is_triangular() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        // 1 + 2 + ... + 10
        assert_eq!(board.pegs.len(), 55);
    }

    #[test]
    fn test_peg_grid_coordinates() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);

        // First peg: row 0, col 0 - board center, top offset
        let first = board.pegs[0];
        assert_eq!(first.pos.x, BOARD_WIDTH / 2.0);
        assert_eq!(first.pos.y, PEG_TOP_Y);

        // Row 1 starts half a spacing left of center
        let second = board.pegs[1];
        assert_eq!(second.pos.x, BOARD_WIDTH / 2.0 - PEG_SPACING / 2.0);
        assert_eq!(second.pos.y, PEG_TOP_Y + PEG_SPACING);

        // Last peg: row 9, col 9 - 4.5 spacings right of center
        let last = board.pegs[54];
        assert_eq!(last.pos.x, BOARD_WIDTH / 2.0 + 4.5 * PEG_SPACING);
        assert_eq!(last.pos.y, PEG_TOP_Y + 9.0 * PEG_SPACING);
    }

    #[test]
    fn test_bins_centered_and_contiguous() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(board.bins.len(), 8);

        let first = board.bins.first().unwrap();
        let last = board.bins.last().unwrap();
        // Centered: equal margin on both sides
        let left_margin = first.x;
        let right_margin = BOARD_WIDTH - (last.x + last.width);
        assert!((left_margin - right_margin).abs() < 1e-3);

        // Contiguous row with fixed spacing
        for pair in board.bins.windows(2) {
            assert!((pair[1].x - (pair[0].x + pair[0].width) - BIN_SPACING).abs() < 1e-3);
        }
    }

    #[test]
    fn test_bins_sit_on_landing_line() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        for bin in &board.bins {
            assert_eq!(bin.y, board.floor_y());
        }
    }

    #[test]
    fn test_multipliers_symmetric_edges_high() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        let m: Vec<f64> = board.bins.iter().map(|b| b.multiplier).collect();
        assert_eq!(m, vec![2.0, 1.5, 1.0, 0.5, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_bin_contains_x_inclusive_edges() {
        let bin = Bin {
            x: 100.0,
            y: 0.0,
            width: 60.0,
            height: 30.0,
            multiplier: 1.0,
        };
        assert!(bin.contains_x(100.0));
        assert!(bin.contains_x(160.0));
        assert!(bin.contains_x(130.0));
        assert!(!bin.contains_x(99.9));
        assert!(!bin.contains_x(160.1));
    }
}
