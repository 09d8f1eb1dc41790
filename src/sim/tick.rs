//! Intent dispatch and the per-frame simulation tick
//!
//! Intents arrive asynchronously from the host and mutate state immediately
//! (last writer wins, no queueing). `tick` advances the simulation one frame
//! and is the sole gate on phase: calling it in a non-tickable phase is a
//! no-op.

use super::collision::{
    circle_below_bottom, circle_hits_side_walls, circle_hits_top, circle_intersects_rect,
};
use super::state::{Ball, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
use crate::consts::*;

/// A normalized player action, decoupled from the input device that
/// produced it. Keyboard, pointer and touch sources all reduce to these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Begin play from Idle or GameOver (with full reinit), or resume from
    /// Paused
    Start,
    /// Suspend play; only effective while Running
    Pause,
    /// Unconditional full reinit into a fresh Running session
    Restart,
    MoveLeft,
    MoveRight,
    StopMove,
    /// Unpin the ball from the paddle
    ReleaseBall,
    /// Absolute paddle position from pointer/touch, already in board
    /// coordinates
    PointerMove(f32),
}

/// Apply a player intent to the session.
///
/// Intents that do not apply to the current phase are ignored.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::Start => match state.phase {
            GamePhase::Idle => {
                state.phase = GamePhase::Running;
                log::info!("game started (seed {})", state.seed);
            }
            GamePhase::GameOver { .. } => {
                state.reset();
                state.phase = GamePhase::Running;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
            }
            _ => {}
        },
        Intent::Pause => {
            // Not a toggle, and a level transition cannot be paused
            if state.phase == GamePhase::Running {
                state.phase = GamePhase::Paused;
                log::info!("game paused");
            }
        }
        Intent::Restart => {
            // Supersedes any pending level transition: the countdown lives in
            // the state being rebuilt, so nothing stale survives
            state.reset();
            state.phase = GamePhase::Running;
        }
        Intent::MoveLeft => state.paddle.dx = -state.paddle.speed,
        Intent::MoveRight => state.paddle.dx = state.paddle.speed,
        Intent::StopMove => state.paddle.dx = 0.0,
        Intent::ReleaseBall => {
            if state.phase == GamePhase::Running && !state.ball_released {
                state.ball_released = true;
            }
        }
        Intent::PointerMove(x) => {
            if state.phase == GamePhase::Running {
                state.paddle.x = x - state.paddle.width / 2.0;
                state.paddle.clamp_x();
            }
        }
    }
}

/// Advance the simulation by one frame.
///
/// The order of operations is load-bearing: paddle movement, pinned-ball
/// handling, ball advance, wall reflections, bottom-miss life handling,
/// paddle bounce, brick scan, level completion.
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Running => {}
        GamePhase::LevelTransition => {
            state.time_ticks += 1;
            state.transition_ticks = state.transition_ticks.saturating_sub(1);
            if state.transition_ticks == 0 {
                state.ball_released = false;
                state.ball = Ball::new(state.level, &mut state.rng);
                state.paddle = Paddle::default();
                state.bricks = BrickGrid::new();
                state.phase = GamePhase::Running;
                state.events.push(GameEvent::LevelUp);
                log::info!("level {} begins", state.level);
            }
            return;
        }
        // Idle, Paused, GameOver: the simulation is frozen
        _ => return,
    }

    state.time_ticks += 1;

    // 1. Paddle movement, clamped to the board
    state.paddle.x += state.paddle.dx;
    state.paddle.clamp_x();

    // 2. An unreleased ball rides the paddle center; nothing else moves
    if !state.ball_released {
        state.ball.pos.x = state.paddle.center_x();
        return;
    }

    // 3. Advance the ball
    state.ball.pos += state.ball.vel;

    // 4. Side walls reflect without repositioning, so the ball can sit past
    // the boundary for up to one frame of travel
    if circle_hits_side_walls(state.ball.pos.x, state.ball.radius, BOARD_WIDTH) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::Wall);
    }

    // 5. Top wall, same caveat
    if circle_hits_top(state.ball.pos.y, state.ball.radius) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::Wall);
    }

    // 6. Bottom miss costs a life
    let mut brick_check = true;
    if circle_below_bottom(state.ball.pos.y, state.ball.radius, BOARD_HEIGHT) {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost);
        log::info!("life lost, {} remaining", state.lives);

        if state.lives == 0 {
            state.phase = GamePhase::GameOver { won: false };
            state.events.push(GameEvent::GameOver);
            log::info!("game over, final score {}", state.score);
            return;
        }

        // Fresh serve at the current level's speed; the brick scan is
        // suppressed for the rest of this tick
        state.respawn_ball_and_paddle();
        brick_check = false;
    }

    // 7. Paddle bounce: angle from impact offset, velocity recomputed in
    // full from the scalar speed (wipes any drift from wall bounces)
    let paddle = state.paddle;
    if circle_intersects_rect(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
    ) {
        let hit_point = (state.ball.pos.x - paddle.center_x()) / (paddle.width / 2.0);
        let bounce_angle = hit_point * MAX_BOUNCE_ANGLE;
        state.ball.vel.y = -state.ball.speed * bounce_angle.cos();
        state.ball.vel.x = state.ball.speed * bounce_angle.sin();
        state.events.push(GameEvent::Paddle);
    }

    // 8. Brick scan, row-major. dy negates once per overlapping brick, so a
    // simultaneous two-row hit negates twice and cancels out.
    if brick_check {
        let mut destroyed_any = false;
        for brick in &mut state.bricks.bricks {
            if !brick.is_alive() {
                continue;
            }
            if circle_intersects_rect(
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.radius,
                brick.x,
                brick.y,
                BRICK_WIDTH,
                BRICK_HEIGHT,
            ) {
                state.ball.vel.y = -state.ball.vel.y;
                brick.status = super::state::BrickStatus::Destroyed;
                state.score += brick.points;
                state.events.push(GameEvent::Brick);
                destroyed_any = true;
            }
        }

        // Completion is checked once, after the whole scan
        if destroyed_any && state.bricks.alive_count() == 0 {
            complete_level(state);
        }
    }
}

/// The grid is empty: advance the level, or end the run as a win after the
/// final one.
fn complete_level(state: &mut GameState) {
    let cleared = state.level;
    state.level += 1;

    if cleared >= MAX_LEVEL {
        state.phase = GamePhase::GameOver { won: true };
        state.events.push(GameEvent::Win);
        log::info!("final level cleared, score {}", state.score);
        return;
    }

    state.transition_ticks = LEVEL_TRANSITION_TICKS;
    state.phase = GamePhase::LevelTransition;
    log::info!("level {} cleared, score {}", cleared, state.score);
}
