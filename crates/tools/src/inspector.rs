use std::fmt;

use glam::Vec3;
use starblaster_common::{EntityId, Rgba, TextureId};
use starblaster_kernel::{EntityKind, World};

/// Read-only queries against the world for debugging and headless runs.
pub struct WorldInspector;

impl WorldInspector {
    pub fn summary(world: &World) -> WorldSummary {
        let gameplay = world.gameplay();
        WorldSummary {
            tick: world.tick(),
            projectiles: world.projectiles().len(),
            planets: world.planets().len(),
            collectibles: world.collectibles().len(),
            bullet_color: gameplay.bullet_color,
            bullet_size: gameplay.bullet_size,
            ship_speed: gameplay.ship_speed,
            ship_origin: world.ship().origin(),
            pending_events: world.events().len(),
        }
    }

    pub fn inspect_entity(world: &World, id: EntityId) -> Option<EntityInfo> {
        world
            .live_entities()
            .into_iter()
            .find(|entity| entity.body().id == id)
            .map(|entity| {
                let body = entity.body();
                EntityInfo {
                    id,
                    kind: entity.kind(),
                    origin: body.origin,
                    color: body.color(),
                    texture: body.texture(),
                }
            })
    }

    /// Ids in render order.
    pub fn list_entities(world: &World) -> Vec<EntityId> {
        world
            .live_entities()
            .iter()
            .map(|entity| entity.body().id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldSummary {
    pub tick: u64,
    pub projectiles: usize,
    pub planets: usize,
    pub collectibles: usize,
    pub bullet_color: Rgba,
    pub bullet_size: f32,
    pub ship_speed: f32,
    pub ship_origin: Vec3,
    pub pending_events: usize,
}

impl WorldSummary {
    /// Live entities including the ship.
    pub fn entity_count(&self) -> usize {
        1 + self.projectiles + self.planets + self.collectibles
    }
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "World: tick={} entities={} (projectiles={} planets={} collectibles={}) \
             bullet_color={} bullet_size={} ship_speed={} ship=({:.2}, {:.2}, {:.2}) pending_events={}",
            self.tick,
            self.entity_count(),
            self.projectiles,
            self.planets,
            self.collectibles,
            self.bullet_color,
            self.bullet_size,
            self.ship_speed,
            self.ship_origin.x,
            self.ship_origin.y,
            self.ship_origin.z,
            self.pending_events
        )
    }
}

/// Snapshot of one live entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityInfo {
    pub id: EntityId,
    pub kind: EntityKind,
    pub origin: Vec3,
    pub color: Rgba,
    pub texture: Option<TextureId>,
}

impl fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] pos=({:.2}, {:.2}, {:.2}) color={}",
            self.kind,
            self.id.short(),
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.color
        )?;
        if let Some(texture) = self.texture {
            write!(f, " texture={texture}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starblaster_common::GameConfig;
    use starblaster_input::InputState;
    use starblaster_kernel::{Sphere, StdRandom};

    fn world() -> World {
        World::new(GameConfig::default(), &mut StdRandom::seeded(12))
    }

    #[test]
    fn summary_fresh_world() {
        let summary = WorldInspector::summary(&world());
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.entity_count(), 1);
        assert_eq!(summary.ship_speed, 50.0);
        assert_eq!(summary.pending_events, 1);
    }

    #[test]
    fn summary_after_step() {
        let mut w = world();
        w.step(0, &InputState::new(), &mut StdRandom::seeded(1));
        let summary = WorldInspector::summary(&w);
        assert_eq!(summary.tick, 1);
        assert_eq!(summary.planets, 1);
        assert_eq!(summary.entity_count(), w.entity_count());
    }

    #[test]
    fn inspect_entity_found() {
        let mut w = world();
        let id = w.insert_projectile(Sphere::projectile(2.0, Vec3::new(1.0, 2.0, 3.0), Rgba::RED));
        let info = WorldInspector::inspect_entity(&w, id).unwrap();
        assert_eq!(info.kind, EntityKind::Projectile);
        assert_eq!(info.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(info.color, Rgba::RED);
        assert!(info.to_string().starts_with("projectile"));
    }

    #[test]
    fn inspect_entity_not_found() {
        assert!(WorldInspector::inspect_entity(&world(), EntityId::new()).is_none());
    }

    #[test]
    fn list_entities_in_render_order() {
        let mut w = world();
        let id = w.insert_projectile(Sphere::projectile(2.0, Vec3::ZERO, Rgba::RED));
        let ids = WorldInspector::list_entities(&w);
        assert_eq!(ids, vec![w.ship().body.id, id]);
    }

    #[test]
    fn summary_display() {
        let s = WorldInspector::summary(&world()).to_string();
        assert!(s.contains("tick=0"));
        assert!(s.contains("ship_speed=50"));
    }
}
