//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    circle_below_bottom, circle_hits_side_walls, circle_hits_top, circle_intersects_rect,
};
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, Paddle, BRICK_COLORS,
    BRICK_POINTS,
};
pub use tick::{apply_intent, tick, Intent};
