use glam::Vec3;
use serde::{Deserialize, Serialize};
use starblaster_common::{EntityId, Millis, Rgba, TextureId};
use starblaster_geometry::{Mesh, box_mesh, flat_colors, sphere, texture_grid};
use std::fmt;

use crate::collectible::Collectible;
use crate::motion::Motion;
use crate::random::RandomSource;

/// Positionable, renderable part shared by every entity: geometry buffers,
/// flat color, optional texture and the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub origin: Vec3,
    mesh: Mesh,
    color: Rgba,
    colors: Vec<f32>,
    tex_coords: Option<Vec<f32>>,
    texture: Option<TextureId>,
}

impl Body {
    pub fn new(mesh: Mesh, origin: Vec3, color: Rgba) -> Self {
        let colors = flat_colors(mesh.index_count(), color);
        Self {
            id: EntityId::new(),
            origin,
            mesh,
            color,
            colors,
            tex_coords: None,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: TextureId, tex_coords: Vec<f32>) -> Self {
        self.texture = Some(texture);
        self.tex_coords = Some(tex_coords);
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn vertices(&self) -> &[f32] {
        &self.mesh.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    /// One RGBA tuple per index entry.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Replace the flat color and rebuild the color buffer.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.colors = flat_colors(self.mesh.index_count(), color);
    }

    pub fn tex_coords(&self) -> Option<&[f32]> {
        self.tex_coords.as_deref()
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: TextureId) {
        self.texture = Some(texture);
    }
}

/// The player's box-shaped ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub body: Body,
    pub motion: Motion,
}

impl Ship {
    pub fn new(size: f32, origin: Vec3) -> Self {
        Self {
            body: Body::new(box_mesh(size), origin, Rgba::WHITE),
            motion: Motion::new(),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.body.origin
    }

    pub fn update_position(&mut self, now: Millis) {
        self.motion.update_position(&mut self.body.origin, now);
    }
}

/// A moving sphere: either a projectile or a planet, depending on which
/// world collection owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub body: Body,
    pub motion: Motion,
    radius: f32,
}

impl Sphere {
    /// Small flat-colored sphere fired from the ship.
    pub fn projectile(radius: f32, origin: Vec3, color: Rgba) -> Self {
        Self {
            body: Body::new(sphere(radius), origin, color),
            motion: Motion::new(),
            radius,
        }
    }

    /// Textured planet with a randomly chosen planet texture.
    pub fn planet<R: RandomSource + ?Sized>(radius: f32, origin: Vec3, rng: &mut R) -> Self {
        let variant = rng.random_range(1.0, 4.0).floor() as u32;
        let body = Body::new(sphere(radius), origin, Rgba::WHITE)
            .with_texture(TextureId::planet(variant), texture_grid());
        Self {
            body,
            motion: Motion::new(),
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn origin(&self) -> Vec3 {
        self.body.origin
    }

    /// Tint after a projectile hit. A white tint drops the planet texture
    /// back to the plain default so the tint shows.
    pub fn recolor(&mut self, color: Rgba) {
        if color == Rgba::WHITE && self.body.texture().is_some() {
            self.body.set_texture(TextureId::Default);
        }
        self.body.set_color(color);
    }

    pub fn update_position(&mut self, now: Millis) {
        self.motion.update_position(&mut self.body.origin, now);
    }
}

/// Entity kind tag, for logs and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Projectile,
    Planet,
    Collectible,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Ship => "ship",
            EntityKind::Projectile => "projectile",
            EntityKind::Planet => "planet",
            EntityKind::Collectible => "collectible",
        };
        f.pad(name)
    }
}

/// A live entity handed to the renderer, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Ship(&'a Ship),
    Projectile(&'a Sphere),
    Planet(&'a Sphere),
    Collectible(&'a Collectible),
}

impl<'a> EntityRef<'a> {
    pub fn body(&self) -> &'a Body {
        match *self {
            EntityRef::Ship(ship) => &ship.body,
            EntityRef::Projectile(sphere) | EntityRef::Planet(sphere) => &sphere.body,
            EntityRef::Collectible(collectible) => &collectible.body,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Ship(_) => EntityKind::Ship,
            EntityRef::Projectile(_) => EntityKind::Projectile,
            EntityRef::Planet(_) => EntityKind::Planet,
            EntityRef::Collectible(_) => EntityKind::Collectible,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.body().origin
    }
}
