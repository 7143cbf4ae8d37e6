//! Plinko Miner - an idle mining / Plinko gambling browser game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board layout, physics, payouts)
//! - `ledger`: Balance ledger with LocalStorage persistence
//! - `hud`: HUD text formatting
//! - `render`: Canvas2D render sink

pub mod hud;
pub mod ledger;
pub mod render;
pub mod sim;

pub use ledger::Ledger;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per display frame at 60 Hz)
    pub const TICK_HZ: u32 = 60;
    /// Fixed tick duration in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 600.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Peg grid - triangular, one more peg per row
    pub const PEG_ROWS: u32 = 10;
    /// Widest row the board must accommodate
    pub const PEG_COLUMNS: u32 = 11;
    pub const PEG_SPACING: f32 = 50.0;
    pub const PEG_RADIUS: f32 = 5.0;
    /// Vertical offset of the first peg row
    pub const PEG_TOP_Y: f32 = 100.0;

    /// Payout bins along the bottom edge
    pub const BIN_WIDTH: f32 = 60.0;
    pub const BIN_HEIGHT: f32 = 30.0;
    pub const BIN_SPACING: f32 = 5.0;
    /// Symmetric payout multipliers: edges high, center low
    pub const MULTIPLIERS: [f64; 8] = [2.0, 1.5, 1.0, 0.5, 0.5, 1.0, 1.5, 2.0];
    /// Bins sit this far above the bottom edge; also the landing line
    pub const FLOOR_MARGIN: f32 = 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Vertical drop position of a freshly wagered ball
    pub const DROP_Y: f32 = 20.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.1;
    /// Velocity retained on a peg bounce
    pub const BOUNCE_DAMPING: f32 = 0.8;
    /// Horizontal jitter added on bounce, uniform in [-JITTER, JITTER)
    pub const JITTER: f32 = 1.0;

    /// Passive income interval (1 second of ticks)
    pub const MINING_INTERVAL_TICKS: u64 = TICK_HZ as u64;
    /// How long a notice stays on screen (3 seconds of ticks)
    pub const NOTICE_TICKS: u32 = 3 * TICK_HZ;

    /// Ledger defaults for a fresh session
    pub const DEFAULT_BALANCE: f64 = 0.0;
    pub const DEFAULT_MINING_RATE: f64 = 0.1;
    pub const DEFAULT_UPGRADE_COST: f64 = 5.0;
    pub const DEFAULT_GENERATION_SPEED: f64 = 3.0;
    /// Upgrade cost growth factor, rounded up after each purchase
    pub const UPGRADE_COST_GROWTH: f64 = 1.8;
}
