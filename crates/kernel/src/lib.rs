//! World Kernel: entity model, collision rules and the per-frame simulation
//! step that spawns, moves, collides and despawns entities.
//!
//! # Invariants
//! - All world mutation happens inside [`World::step`] or explicit inserts.
//! - Positions integrate velocity by wall-clock elapsed time, not fixed steps.
//! - Hosts supply time, input and randomness; the kernel never reads them
//!   from ambient state.

pub mod clock;
pub mod collectible;
pub mod collision;
pub mod entity;
pub mod motion;
pub mod random;
pub mod scheduler;
mod step;
pub mod world;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collectible::{Behavior, Collectible, Pickup};
pub use collision::{CollisionRule, Positioned, Spherical, has_collided};
pub use entity::{Body, EntityKind, EntityRef, Ship, Sphere};
pub use motion::Motion;
pub use random::{FixedRandom, RandomSource, StdRandom, select_item};
pub use scheduler::{FrameDriver, FrameStats, GameLoop};
pub use world::{DespawnReason, GameplayState, SpawnTimer, World, WorldEvent};
