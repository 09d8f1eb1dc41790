//! Game state and core simulation types
//!
//! Everything the renderer reads and the physics step mutates lives here.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Brick colors by row (row 0 is the top, highest-value row)
pub const BRICK_COLORS: [u32; BRICK_ROWS] = [
    0xFF6B6B, // Red - 5 points
    0xFFD166, // Yellow - 4 points
    0x06D6A0, // Green - 3 points
    0x118AB2, // Blue - 2 points
    0x073B4C, // Navy - 1 point
];

/// Brick point values by row
pub const BRICK_POINTS: [u64; BRICK_ROWS] = [5, 4, 3, 2, 1];

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh session waiting for the first start intent
    Idle,
    /// Active gameplay (the ball may still be pinned to the paddle)
    Running,
    /// Gameplay suspended, resumable
    Paused,
    /// Between-level rest period; only the countdown advances
    LevelTransition,
    /// Run ended; terminal until a start/restart intent
    GameOver { won: bool },
}

/// Sound cue emitted by the simulation, drained by the audio collaborator.
///
/// Fire-and-forget: the simulation never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Wall,
    Paddle,
    Brick,
    LifeLost,
    LevelUp,
    Win,
    GameOver,
}

/// The ball
///
/// `speed` is the scalar magnitude used for angle-based reflections; paddle
/// bounces recompute `vel` from it, never the other way around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    /// Create a ball for the given level, resting just above the paddle.
    ///
    /// Speed scales linearly with level. The horizontal direction is a 50/50
    /// draw; both axes start at full magnitude, so the initial velocity is
    /// not yet angle-correlated the way a paddle bounce is.
    pub fn new(level: u32, rng: &mut Pcg32) -> Self {
        let multiplier = 1.0 + (level.saturating_sub(1)) as f32 * BALL_SPEED_GROWTH;
        let speed = BALL_START_SPEED * multiplier;
        let dx = if rng.random_bool(0.5) { speed } else { -speed };
        Self {
            pos: Vec2::new(
                BOARD_WIDTH / 2.0,
                BOARD_HEIGHT - PADDLE_HEIGHT - BALL_RADIUS - PADDLE_BOTTOM_MARGIN,
            ),
            vel: Vec2::new(dx, -speed),
            radius: BALL_RADIUS,
            speed,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity intent: -speed, 0 or +speed from key input
    pub dx: f32,
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (BOARD_WIDTH - PADDLE_WIDTH) / 2.0,
            y: BOARD_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dx: 0.0,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    /// Horizontal center of the paddle
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Clamp x so the paddle stays fully on the board.
    /// Every mutation path (key movement, pointer) goes through this.
    pub fn clamp_x(&mut self) {
        self.x = self.x.clamp(0.0, BOARD_WIDTH - self.width);
    }
}

/// Whether a brick is still in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// A single brick cell. Destroyed bricks are inert to collision and drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub status: BrickStatus,
    /// 0xRRGGBB, selected by row
    pub color: u32,
    /// Score value, selected by row
    pub points: u64,
}

impl Brick {
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }
}

/// The brick grid, stored row-major. Rebuilt whole at every level change,
/// never partially reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Fill all rows and columns at fixed pitch, everything alive.
    pub fn new() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                bricks.push(Brick {
                    x: col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
                    y: row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                    status: BrickStatus::Alive,
                    color: BRICK_COLORS[row],
                    points: BRICK_POINTS[row],
                });
            }
        }
        Self { bricks }
    }

    /// Number of bricks still in play
    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    /// Total score still obtainable from the grid
    pub fn remaining_points(&self) -> u64 {
        self.bricks
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| b.points)
            .sum()
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state (deterministic, serializable)
///
/// Owns exactly one ball, paddle and grid at a time; life loss and level
/// changes replace them wholesale, so the renderer never observes a partial
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (serve direction draws)
    pub rng: Pcg32,
    /// Bumped on every reinitialization; lets a host discard callbacks it
    /// scheduled against an earlier session
    pub generation: u64,
    pub score: u64,
    pub lives: u8,
    /// 1-based level counter
    pub level: u32,
    pub phase: GamePhase,
    /// Ball is pinned to the paddle center until a release intent
    pub ball_released: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Ticks remaining in the current level transition
    pub transition_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sound cues accumulated since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in the Idle phase.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(1, &mut rng);
        Self {
            seed,
            rng,
            generation: 0,
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: GamePhase::Idle,
            ball_released: false,
            ball,
            paddle: Paddle::default(),
            bricks: BrickGrid::new(),
            transition_ticks: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Full reinitialization: score 0, lives 3, level 1, fresh entities.
    /// The RNG keeps running and the generation counter advances, so a
    /// restarted session is a different session to any outside observer.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.ball_released = false;
        self.ball = Ball::new(1, &mut self.rng);
        self.paddle = Paddle::default();
        self.bricks = BrickGrid::new();
        self.transition_ticks = 0;
        self.time_ticks = 0;
        self.events.clear();
        log::info!("session reset (generation {})", self.generation);
    }

    /// Replace ball and paddle after a life loss, keeping the current level's
    /// speed multiplier.
    pub fn respawn_ball_and_paddle(&mut self) {
        self.ball_released = false;
        self.ball = Ball::new(self.level, &mut self.rng);
        self.paddle = Paddle::default();
    }

    /// Drain accumulated sound cues.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Overlay message for the renderer, keyed by phase.
    pub fn overlay_text(&self) -> Option<String> {
        match self.phase {
            GamePhase::Idle => Some("Press START to play".to_string()),
            GamePhase::Running => None,
            GamePhase::Paused => Some("Game Paused".to_string()),
            GamePhase::LevelTransition => Some(format!("Level {}!", self.level)),
            GamePhase::GameOver { won } => {
                let headline = if won { "You Win!" } else { "Game Over" };
                Some(format!("{headline}\nFinal Score: {}", self.score))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_speed_scales_with_level() {
        let mut rng = Pcg32::seed_from_u64(7);
        let b1 = Ball::new(1, &mut rng);
        let b3 = Ball::new(3, &mut rng);
        assert!((b1.speed - BALL_START_SPEED).abs() < 1e-6);
        assert!((b3.speed - BALL_START_SPEED * 1.4).abs() < 1e-6);
        // Vertical component always launches upward
        assert!(b1.vel.y < 0.0);
        assert!(b3.vel.y < 0.0);
        assert_eq!(b1.vel.x.abs(), b1.speed);
    }

    #[test]
    fn test_ball_serve_direction_is_seeded() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        assert_eq!(Ball::new(1, &mut a).vel.x, Ball::new(1, &mut b).vel.x);
    }

    #[test]
    fn test_fresh_grid_layout() {
        let grid = BrickGrid::new();
        assert_eq!(grid.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(grid.alive_count(), 45);
        // 9 * (5+4+3+2+1)
        assert_eq!(grid.remaining_points(), 135);

        // Top-left cell sits at the layout origin with row-0 attributes
        let first = &grid.bricks[0];
        assert_eq!(first.x, BRICK_OFFSET_LEFT);
        assert_eq!(first.y, BRICK_OFFSET_TOP);
        assert_eq!(first.color, BRICK_COLORS[0]);
        assert_eq!(first.points, 5);

        // Row-major order: second row starts one pitch lower
        let second_row = &grid.bricks[BRICK_COLS];
        assert_eq!(second_row.y, BRICK_OFFSET_TOP + BRICK_HEIGHT + BRICK_PADDING);
        assert_eq!(second_row.points, 4);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::default();
        paddle.x = -50.0;
        paddle.clamp_x();
        assert_eq!(paddle.x, 0.0);
        paddle.x = BOARD_WIDTH;
        paddle.clamp_x();
        assert_eq!(paddle.x, BOARD_WIDTH - paddle.width);
    }

    #[test]
    fn test_reset_bumps_generation() {
        let mut state = GameState::new(1);
        state.score = 99;
        state.lives = 1;
        state.level = 4;
        state.reset();
        assert_eq!(state.generation, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.bricks.alive_count(), 45);
        assert!(!state.ball_released);
    }

    #[test]
    fn test_overlay_text_by_phase() {
        let mut state = GameState::new(1);
        assert_eq!(state.overlay_text().as_deref(), Some("Press START to play"));
        state.phase = GamePhase::Running;
        assert!(state.overlay_text().is_none());
        state.phase = GamePhase::LevelTransition;
        state.level = 2;
        assert_eq!(state.overlay_text().as_deref(), Some("Level 2!"));
        state.phase = GamePhase::GameOver { won: true };
        assert!(state.overlay_text().unwrap().contains("You Win!"));
    }

    #[test]
    fn test_state_snapshot_round_trip() {
        let state = GameState::new(1234);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.bricks.alive_count(), state.bricks.alive_count());
        assert_eq!(back.ball.vel, state.ball.vel);
    }
}
