use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Monotonic wall-clock timestamp or duration in milliseconds.
pub type Millis = u64;

/// Unique identifier for a live entity. Never reused after despawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Rgba = Rgba([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Rgba = Rgba([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Rgba = Rgba([0.0, 0.0, 1.0, 1.0]);
    pub const CYAN: Rgba = Rgba([0.0, 1.0, 1.0, 1.0]);
    pub const YELLOW: Rgba = Rgba([1.0, 1.0, 0.0, 1.0]);
    pub const MAGENTA: Rgba = Rgba([1.0, 0.0, 1.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn components(&self) -> [f32; 4] {
        self.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})")
    }
}

/// Texture slots the renderer knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextureId {
    Default,
    Size,
    Speed,
    Color,
    Planet1,
    Planet2,
    Planet3,
    Planet4,
    Ship,
}

impl TextureId {
    /// Planet texture by 1-based variant number. Out-of-range variants map to
    /// the nearest valid planet texture.
    pub fn planet(variant: u32) -> Self {
        match variant {
            0 | 1 => TextureId::Planet1,
            2 => TextureId::Planet2,
            3 => TextureId::Planet3,
            _ => TextureId::Planet4,
        }
    }

    pub fn is_planet(&self) -> bool {
        matches!(
            self,
            TextureId::Planet1 | TextureId::Planet2 | TextureId::Planet3 | TextureId::Planet4
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextureId::Default => "DEFAULT",
            TextureId::Size => "SIZE",
            TextureId::Speed => "SPEED",
            TextureId::Color => "COLOR",
            TextureId::Planet1 => "PLANET1",
            TextureId::Planet2 => "PLANET2",
            TextureId::Planet3 => "PLANET3",
            TextureId::Planet4 => "PLANET4",
            TextureId::Ship => "SHIP",
        }
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
