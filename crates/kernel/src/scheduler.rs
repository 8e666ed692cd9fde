//! Cooperative frame loop: one simulation step per frame the host requests.

use starblaster_common::{GameConfig, Millis};
use starblaster_input::InputSource;

use crate::clock::Clock;
use crate::random::RandomSource;
use crate::world::{World, WorldEvent};

/// Frames per second, reported once a full second of clock time has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    frames: u32,
    window_start: Option<Millis>,
    last_fps: Option<u32>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a frame. Returns the frame rate when a report window closes.
    pub fn record(&mut self, now: Millis) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        if now.saturating_sub(start) < 1000 {
            return None;
        }
        let fps = self.frames;
        tracing::info!(fps, "frame rate");
        self.frames = 0;
        self.window_start = Some(now);
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recently reported frame rate.
    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}

/// Host side of the loop: requests frames, supplies input and presents.
pub trait FrameDriver<C: Clock> {
    /// Called before every frame. Returning false stops the loop. Hosts
    /// with a manual clock advance it here.
    fn next_frame(&mut self, clock: &mut C) -> bool;

    fn input(&self) -> &dyn InputSource;

    /// Receives the world after each completed step together with the
    /// events drained from it during that step.
    fn present(&mut self, world: &World, events: &[WorldEvent]);
}

/// Owns the world together with its time and randomness sources.
pub struct GameLoop<C, R> {
    world: World,
    clock: C,
    rng: R,
    stats: FrameStats,
}

impl<C: Clock, R: RandomSource> GameLoop<C, R> {
    pub fn new(config: GameConfig, clock: C, mut rng: R) -> Self {
        let world = World::new(config, &mut rng);
        tracing::info!(
            bullet_color = %world.gameplay().bullet_color,
            "game loop ready"
        );
        Self {
            world,
            clock,
            rng,
            stats: FrameStats::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Step once at the clock's current time and hand the world, with the
    /// events that step produced, to `present`.
    pub fn tick<I, F>(&mut self, input: &I, present: F) -> &World
    where
        I: InputSource + ?Sized,
        F: FnOnce(&World, &[WorldEvent]),
    {
        let events = self.advance(input);
        present(&self.world, &events);
        &self.world
    }

    /// Run frames until the driver stops requesting them. Returns the number
    /// of frames run.
    pub fn run<D: FrameDriver<C> + ?Sized>(&mut self, driver: &mut D) -> u64 {
        let mut frames = 0;
        while driver.next_frame(&mut self.clock) {
            let events = self.advance(driver.input());
            driver.present(&self.world, &events);
            frames += 1;
        }
        tracing::debug!(frames, tick = self.world.tick(), "frame loop stopped");
        frames
    }

    /// One frame: record stats, step, and drain the event log so it never
    /// outlives the frame that produced it.
    fn advance<I: InputSource + ?Sized>(&mut self, input: &I) -> Vec<WorldEvent> {
        let now = self.clock.now_ms();
        self.stats.record(now);
        self.world.step(now, input, &mut self.rng);
        self.world.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::random::StdRandom;
    use starblaster_input::{Action, InputState};

    struct Scripted {
        frames_left: u32,
        frame_ms: Millis,
        input: InputState,
        presented: Vec<usize>,
        events_seen: usize,
    }

    impl FrameDriver<ManualClock> for Scripted {
        fn next_frame(&mut self, clock: &mut ManualClock) -> bool {
            if self.frames_left == 0 {
                return false;
            }
            self.frames_left -= 1;
            clock.advance(self.frame_ms);
            true
        }

        fn input(&self) -> &dyn InputSource {
            &self.input
        }

        fn present(&mut self, world: &World, events: &[WorldEvent]) {
            self.presented.push(world.live_entities().len());
            self.events_seen += events.len();
            assert!(world.events().is_empty());
        }
    }

    fn game() -> GameLoop<ManualClock, StdRandom> {
        GameLoop::new(GameConfig::default(), ManualClock::new(0), StdRandom::seeded(21))
    }

    #[test]
    fn frame_stats_report_after_a_second() {
        let mut stats = FrameStats::new();
        let mut reports = Vec::new();
        for frame in 0..=62u64 {
            if let Some(fps) = stats.record(frame * 16) {
                reports.push(fps);
            }
        }
        // 0..=992 is 63 frames; the window closes on the 1008 ms frame
        assert!(reports.is_empty());
        assert_eq!(stats.record(1008), Some(64));
        assert_eq!(stats.last_fps(), Some(64));
    }

    #[test]
    fn tick_steps_and_presents() {
        let mut game = game();
        let mut seen = 0;
        let mut stepped = false;
        game.tick(&InputState::new(), |world, events| {
            seen = world.entity_count();
            stepped = events
                .iter()
                .any(|e| matches!(e, WorldEvent::Stepped { tick: 1, .. }));
        });
        assert_eq!(game.world().tick(), 1);
        assert_eq!(seen, game.world().entity_count());
        assert!(stepped);
        assert!(game.world().events().is_empty());
    }

    #[test]
    fn run_stops_when_driver_declines() {
        let mut game = game();
        let mut driver = Scripted {
            frames_left: 30,
            frame_ms: 16,
            input: InputState::new(),
            presented: Vec::new(),
            events_seen: 0,
        };
        driver.input.press(Action::Fire);
        let frames = game.run(&mut driver);
        assert_eq!(frames, 30);
        assert_eq!(game.world().tick(), 30);
        assert_eq!(game.clock().now_ms(), 480);
        assert_eq!(driver.presented.len(), 30);
        assert!(!game.world().projectiles().is_empty());
        // at least one Stepped event per frame reached the driver
        assert!(driver.events_seen >= 30);
    }

    #[test]
    fn event_log_stays_bounded_over_a_long_run() {
        let mut game = game();
        let mut driver = Scripted {
            frames_left: 20_000,
            frame_ms: 16,
            input: InputState::new(),
            presented: Vec::new(),
            events_seen: 0,
        };
        assert_eq!(game.run(&mut driver), 20_000);
        assert!(game.world().events().is_empty());
        assert!(driver.events_seen >= 20_000);
    }
}
