//! Session state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::*;
use crate::ledger::Ledger;

/// An in-flight wagered ball
///
/// Created when the player drops it (the wager is debited up front),
/// stepped by the physics loop, destroyed once it lands and pays out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Amount wagered at drop time; consumed exactly once at resolution
    pub value: f64,
}

/// The message line shown under the board
///
/// A posted message replaces the previous one and clears itself after a
/// fixed timeout, counted in ticks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notice {
    text: String,
    ticks_left: u32,
}

impl Notice {
    /// Display a message for the standard notice duration
    pub fn post(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.ticks_left = NOTICE_TICKS;
    }

    /// Age the notice by one tick, clearing it when the timeout expires
    pub fn tick(&mut self) {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            if self.ticks_left == 0 {
                self.text.clear();
            }
        }
    }

    /// Currently displayed message, if any
    pub fn current(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// Complete session state, owned by the host and passed to the tick driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Injected RNG; all jitter and gamble draws come from here
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Immutable peg/bin layout
    pub board: Board,
    /// Balance, mining rate, upgrade cost, generation speed
    pub ledger: Ledger,
    /// In-flight balls, in creation order
    pub balls: Vec<Ball>,
    /// Message line
    pub notice: Notice,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session over the given board and ledger with a fixed seed
    pub fn new(board: Board, ledger: Ledger, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            board,
            ledger,
            balls: Vec::new(),
            notice: Notice::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a wagered ball at the drop point with a small random
    /// horizontal speed. The wager must already be debited.
    pub fn spawn_ball(&mut self, value: f64) -> u32 {
        let id = self.next_entity_id();
        let vx = self.rng.random_range(-JITTER..JITTER);
        self.balls.push(Ball {
            id,
            pos: Vec2::new(self.board.width / 2.0, DROP_Y),
            vel: Vec2::new(vx, self.ledger.generation_speed as f32),
            radius: BALL_RADIUS,
            value,
        });
        id
    }
}
