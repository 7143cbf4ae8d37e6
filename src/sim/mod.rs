//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick constants only
//! - Seeded RNG only
//! - Stable iteration order (pegs and bins in creation order, balls by id)
//! - No rendering or platform dependencies

pub mod board;
pub mod landing;
pub mod physics;
pub mod state;
pub mod tick;

pub use board::{Bin, Board, Peg};
pub use landing::{find_bin, payout};
pub use physics::{StepOutcome, resolve_peg_collisions, step_ball};
pub use state::{Ball, GameState, Notice};
pub use tick::{TickInput, tick};
