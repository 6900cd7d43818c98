//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod enemy;
pub mod events;
pub mod explosion;
pub mod player;
pub mod projectile;
pub mod ship;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Body, Hitbox, bodies_collide, collides};
pub use enemy::{Enemy, Tier};
pub use events::{Fx, GameEvent};
pub use explosion::{Explosion, ExplosionSize};
pub use player::{BossTally, ControlMode, Player};
pub use projectile::{Projectile, Side};
pub use ship::{Cooldown, Ship};
pub use sprite::{DEFAULT_ALPHA_THRESHOLD, Mask, SpriteKind, SpriteSet};
pub use state::{Banner, EndReason, GameState, SessionConfig, SessionPhase};
pub use tick::{TickInput, tick};
