use glam::Vec3;
use serde::{Deserialize, Serialize};
use starblaster_common::Rgba;
use starblaster_geometry::box_mesh;
use std::fmt;

use crate::entity::Body;
use crate::random::{RandomSource, select_item};

/// Ship speed multipliers a SPEED pickup can grant.
pub const SPEED_MULTIPLIERS: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Bullet size multipliers a SIZE pickup can grant.
pub const SIZE_MULTIPLIERS: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Bullet colors a COLOR pickup can grant.
pub const PICKUP_COLORS: [Rgba; 6] = [
    Rgba::BLUE,
    Rgba::GREEN,
    Rgba::RED,
    Rgba::CYAN,
    Rgba::YELLOW,
    Rgba::MAGENTA,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Speed,
    Color,
    Size,
}

impl Behavior {
    pub const ALL: [Behavior; 3] = [Behavior::Speed, Behavior::Color, Behavior::Size];
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Behavior::Speed => "SPEED",
            Behavior::Color => "COLOR",
            Behavior::Size => "SIZE",
        };
        f.write_str(name)
    }
}

/// A collectible's behavior paired with its attribute value.
///
/// Each variant carries the attribute type its behavior needs, so a COLOR
/// pickup always holds a color and SPEED/SIZE always hold a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pickup {
    Speed(f32),
    Color(Rgba),
    Size(f32),
}

impl Pickup {
    /// Uniform behavior, then a uniform attribute from that behavior's set.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        match select_item(rng, &Behavior::ALL) {
            Behavior::Speed => Pickup::Speed(*select_item(rng, &SPEED_MULTIPLIERS)),
            Behavior::Color => Pickup::Color(*select_item(rng, &PICKUP_COLORS)),
            Behavior::Size => Pickup::Size(*select_item(rng, &SIZE_MULTIPLIERS)),
        }
    }

    pub fn behavior(&self) -> Behavior {
        match self {
            Pickup::Speed(_) => Behavior::Speed,
            Pickup::Color(_) => Behavior::Color,
            Pickup::Size(_) => Behavior::Size,
        }
    }

    /// COLOR pickups render in their own color, the rest in white.
    pub fn render_color(&self) -> Rgba {
        match self {
            Pickup::Color(color) => *color,
            Pickup::Speed(_) | Pickup::Size(_) => Rgba::WHITE,
        }
    }
}

impl fmt::Display for Pickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pickup::Speed(m) | Pickup::Size(m) => write!(f, "{} x{m}", self.behavior()),
            Pickup::Color(c) => write!(f, "{} {c}", self.behavior()),
        }
    }
}

/// Stationary box-shaped pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub body: Body,
    pub pickup: Pickup,
}

impl Collectible {
    pub fn new<R: RandomSource + ?Sized>(size: f32, origin: Vec3, rng: &mut R) -> Self {
        Self::with_pickup(size, origin, Pickup::random(rng))
    }

    pub fn with_pickup(size: f32, origin: Vec3, pickup: Pickup) -> Self {
        Self {
            body: Body::new(box_mesh(size), origin, pickup.render_color()),
            pickup,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.body.origin
    }
}
