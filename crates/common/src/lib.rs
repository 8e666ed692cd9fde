//! Shared types and gameplay configuration for the starblaster workspace.
//!
//! # Invariants
//! - Positions are camera-space; negative z is further from the viewer.
//! - Timestamps are monotonic milliseconds.

pub mod config;
pub mod types;

pub use config::{ConfigError, GameConfig, ShipBounds};
pub use types::{EntityId, Millis, Rgba, TextureId};
