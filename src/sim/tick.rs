//! Central tick driver
//!
//! One [`tick`] call advances the whole session by one frame: passive
//! mining income, user commands, every in-flight ball, and the notice
//! timeout. The host calls it from its frame loop; tests call it directly
//! for deterministic single-stepping.

use rand::Rng;

use super::landing;
use super::physics::{self, StepOutcome};
use super::state::GameState;
use crate::consts::*;

/// User commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop a ball wagering this amount
    pub drop_value: Option<f64>,
    /// Buy the mining upgrade
    pub upgrade: bool,
    /// Coin-flip gamble with this bet
    pub gamble: Option<f64>,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Passive income once per mining interval
    if state.time_ticks % MINING_INTERVAL_TICKS == 0 {
        state.ledger.mine();
    }

    if let Some(value) = input.drop_value {
        drop_ball(state, value);
    }
    if input.upgrade {
        upgrade_mining(state);
    }
    if let Some(bet) = input.gamble {
        gamble(state, bet);
    }

    step_balls(state);

    state.notice.tick();
}

/// Wager `value` on a new ball. Rejects bad input or short funds with a
/// notice and no state change; otherwise debits the wager and spawns the
/// ball at the drop point.
fn drop_ball(state: &mut GameState, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        state.notice.post("Please enter a valid ZNC value!");
        return;
    }
    if !state.ledger.debit(value) {
        state.notice.post("Not enough ZNC to play Plinko!");
        return;
    }
    let id = state.spawn_ball(value);
    log::debug!("ball {id} dropped for {value} ZNC");
}

fn upgrade_mining(state: &mut GameState) {
    if state.ledger.upgrade() {
        log::info!(
            "mining upgraded: rate {} ZNC/sec, next cost {} ZNC",
            state.ledger.mining_rate,
            state.ledger.upgrade_cost
        );
    } else {
        state.notice.post("Not enough ZNC to upgrade!");
    }
}

/// Coin-flip gamble: debit the bet, then win double or nothing with
/// probability one half.
fn gamble(state: &mut GameState, bet: f64) {
    if !bet.is_finite() || bet <= 0.0 {
        state.notice.post("Please enter a valid bet amount!");
        return;
    }
    if !state.ledger.debit(bet) {
        state.notice.post("Not enough ZNC!");
        return;
    }
    let win = state.rng.random_bool(0.5);
    resolve_gamble(state, bet, win);
}

/// Apply a gamble outcome to an already-debited bet.
///
/// Split out from [`tick`]'s random draw so tests can force a win or loss.
pub fn resolve_gamble(state: &mut GameState, bet: f64, win: bool) {
    if win {
        let winnings = bet * 2.0;
        state.ledger.credit(winnings);
        state.notice.post(format!("You won {winnings} ZNC!"));
    } else {
        state.notice.post("You lost! Try again.");
    }
}

/// Step every in-flight ball once; resolve and remove the ones that landed
fn step_balls(state: &mut GameState) {
    let GameState {
        board,
        ledger,
        balls,
        notice,
        rng,
        ..
    } = state;
    let floor_y = board.floor_y();

    balls.retain_mut(|ball| {
        match physics::step_ball(ball, &board.pegs, floor_y, rng) {
            StepOutcome::Falling => true,
            StepOutcome::Landed => {
                match landing::find_bin(&board.bins, ball.pos.x) {
                    Some(bin) => {
                        let winnings = landing::payout(ball.value, bin);
                        ledger.credit(winnings);
                        notice.post(format!(
                            "You won {winnings} ZNC with a x{} multiplier!",
                            bin.multiplier
                        ));
                        log::debug!("ball {} landed at x{} for {winnings} ZNC", ball.id, bin.multiplier);
                    }
                    None => {
                        notice.post("Ball missed the boxes!");
                        log::debug!("ball {} missed the bins", ball.id);
                    }
                }
                false
            }
        }
    });
}
