use glam::Vec3;
use starblaster_common::Millis;

/// Velocity integration capability for entities that move.
///
/// Velocity is in units per second. Each axis is set independently; setters
/// overwrite and never accumulate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub velocity: Vec3,
    last_update: Option<Millis>,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity: Vec3) -> Self {
        Self {
            velocity,
            last_update: None,
        }
    }

    pub fn last_update(&self) -> Option<Millis> {
        self.last_update
    }

    /// Advance `origin` by velocity times the seconds elapsed since the
    /// previous call. The first call only records `now`.
    pub fn update_position(&mut self, origin: &mut Vec3, now: Millis) {
        let Some(last) = self.last_update else {
            self.last_update = Some(now);
            return;
        };
        let elapsed = now.saturating_sub(last) as f32 / 1000.0;
        *origin += self.velocity * elapsed;
        self.last_update = Some(now);
    }

    pub fn move_left(&mut self, speed: f32) {
        self.velocity.x = -speed;
    }

    pub fn move_right(&mut self, speed: f32) {
        self.velocity.x = speed;
    }

    pub fn stop_x_movement(&mut self) {
        self.velocity.x = 0.0;
    }

    pub fn move_up(&mut self, speed: f32) {
        self.velocity.y = speed;
    }

    pub fn move_down(&mut self, speed: f32) {
        self.velocity.y = -speed;
    }

    pub fn stop_y_movement(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Toward the camera (+z).
    pub fn move_forth(&mut self, speed: f32) {
        self.velocity.z = speed;
    }

    /// Away from the camera (-z).
    pub fn move_back(&mut self, speed: f32) {
        self.velocity.z = -speed;
    }

    pub fn stop_z_movement(&mut self) {
        self.velocity.z = 0.0;
    }
}
