use glam::Vec3;
use serde::{Deserialize, Serialize};
use starblaster_common::{EntityId, GameConfig, Millis, Rgba, ShipBounds};

use crate::collectible::{Collectible, Pickup};
use crate::entity::{EntityKind, EntityRef, Ship, Sphere};
use crate::random::{RandomSource, random_bullet_color};

/// Why an entity left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DespawnReason {
    /// Projectile travelled past the far bound.
    OutOfRange,
    /// Planet drifted behind the camera.
    PassedCamera,
    /// Projectile struck a planet.
    Hit,
    /// Collectible picked up by the ship.
    Consumed,
}

/// An event record produced by every lifecycle change in the world.
///
/// Hosts drain the log for logging, replay tooling or sound cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    Spawned {
        id: EntityId,
        kind: EntityKind,
        origin: Vec3,
    },
    Despawned {
        id: EntityId,
        kind: EntityKind,
        reason: DespawnReason,
    },
    /// A projectile recolored a planet.
    PlanetHit {
        projectile: EntityId,
        planet: EntityId,
        color: Rgba,
    },
    /// The ship consumed a collectible.
    PickedUp { id: EntityId, pickup: Pickup },
    /// One simulation step completed.
    Stepped { tick: u64, now: Millis },
}

/// Gameplay values changed by pickups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameplayState {
    pub bullet_color: Rgba,
    /// Projectile radius.
    pub bullet_size: f32,
    pub ship_speed: f32,
}

impl GameplayState {
    pub fn apply(&mut self, pickup: Pickup, base_ship_speed: f32) {
        match pickup {
            Pickup::Color(color) => self.bullet_color = color,
            Pickup::Size(multiplier) => self.bullet_size = multiplier,
            Pickup::Speed(multiplier) => self.ship_speed = base_ship_speed * multiplier,
        }
    }
}

/// Rate limiter for one spawner. A timer that never fired is ready at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub interval: Millis,
    last: Option<Millis>,
}

impl SpawnTimer {
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&self, now: Millis) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Millis) {
        self.last = Some(now);
    }

    pub fn last(&self) -> Option<Millis> {
        self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpawnTimers {
    pub bullet: SpawnTimer,
    pub planet: SpawnTimer,
    pub collectible: SpawnTimer,
}

/// The whole mutable game state, threaded through every frame.
///
/// Collections are unordered from the game's point of view but kept in
/// insertion order so render lists are stable.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) bounds: ShipBounds,
    pub(crate) ship: Ship,
    pub(crate) projectiles: Vec<Sphere>,
    pub(crate) planets: Vec<Sphere>,
    pub(crate) collectibles: Vec<Collectible>,
    pub(crate) gameplay: GameplayState,
    pub(crate) timers: SpawnTimers,
    pub(crate) tick: u64,
    pub(crate) event_log: Vec<WorldEvent>,
}

impl World {
    /// Fresh world with the ship at its configured origin and a random
    /// starting bullet color.
    pub fn new<R: RandomSource + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let ship = Ship::new(config.ship_size, config.ship_origin);
        let gameplay = GameplayState {
            bullet_color: random_bullet_color(rng),
            bullet_size: config.initial_bullet_size,
            ship_speed: config.base_ship_speed,
        };
        let timers = SpawnTimers {
            bullet: SpawnTimer::new(config.bullet_interval_ms),
            planet: SpawnTimer::new(config.planet_interval_ms),
            collectible: SpawnTimer::new(config.collectible_interval_ms),
        };
        let event_log = vec![WorldEvent::Spawned {
            id: ship.body.id,
            kind: EntityKind::Ship,
            origin: ship.origin(),
        }];
        Self {
            bounds: config.ship_bounds(),
            config,
            ship,
            projectiles: Vec::new(),
            planets: Vec::new(),
            collectibles: Vec::new(),
            gameplay,
            timers,
            tick: 0,
            event_log,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> ShipBounds {
        self.bounds
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn projectiles(&self) -> &[Sphere] {
        &self.projectiles
    }

    pub fn planets(&self) -> &[Sphere] {
        &self.planets
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn gameplay(&self) -> &GameplayState {
        &self.gameplay
    }

    pub fn gameplay_mut(&mut self) -> &mut GameplayState {
        &mut self.gameplay
    }

    pub fn collectible_timer(&self) -> SpawnTimer {
        self.timers.collectible
    }

    /// Ship plus every live projectile, planet and collectible.
    pub fn entity_count(&self) -> usize {
        1 + self.projectiles.len() + self.planets.len() + self.collectibles.len()
    }

    /// Render list: ship, projectiles, planets, collectibles, in that order.
    pub fn live_entities(&self) -> Vec<EntityRef<'_>> {
        let mut entities = Vec::with_capacity(self.entity_count());
        entities.push(EntityRef::Ship(&self.ship));
        entities.extend(self.projectiles.iter().map(EntityRef::Projectile));
        entities.extend(self.planets.iter().map(EntityRef::Planet));
        entities.extend(self.collectibles.iter().map(EntityRef::Collectible));
        entities
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    pub fn insert_projectile(&mut self, projectile: Sphere) -> EntityId {
        let id = projectile.body.id;
        self.log_spawn(id, EntityKind::Projectile, projectile.origin());
        self.projectiles.push(projectile);
        id
    }

    pub fn insert_planet(&mut self, planet: Sphere) -> EntityId {
        let id = planet.body.id;
        self.log_spawn(id, EntityKind::Planet, planet.origin());
        self.planets.push(planet);
        id
    }

    /// Add a collectible directly. Scarcity is the spawner's job, so this
    /// does not check for an existing one.
    pub fn insert_collectible(&mut self, collectible: Collectible) -> EntityId {
        let id = collectible.body.id;
        self.log_spawn(id, EntityKind::Collectible, collectible.origin());
        self.collectibles.push(collectible);
        id
    }

    fn log_spawn(&mut self, id: EntityId, kind: EntityKind, origin: Vec3) {
        tracing::debug!(id = %id.short(), %kind, ?origin, "spawned");
        self.event_log.push(WorldEvent::Spawned { id, kind, origin });
    }
}
