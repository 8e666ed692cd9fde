use starblaster_common::Millis;
use starblaster_input::{InputSource, InputState};
use starblaster_kernel::{FrameDriver, ManualClock, World, WorldEvent};
use starblaster_render::{DebugTextRenderer, RenderView, Renderer};

use crate::script::InputScript;

/// Drives a fixed number of frames on a manual clock, replaying a scripted
/// input timeline and printing the debug render every few frames.
pub struct HeadlessDriver {
    frames: u64,
    frame: u64,
    frame_ms: Millis,
    script: InputScript,
    input: InputState,
    renderer: DebugTextRenderer,
    view: RenderView,
    print_every: u64,
    recorded: Option<Vec<WorldEvent>>,
}

impl HeadlessDriver {
    pub fn new(
        frames: u64,
        frame_ms: Millis,
        script: InputScript,
        view: RenderView,
        print_every: u64,
    ) -> Self {
        Self {
            frames,
            frame: 0,
            frame_ms,
            script,
            input: InputState::new(),
            renderer: DebugTextRenderer::new(),
            view,
            print_every,
            recorded: None,
        }
    }

    /// Keep every event the loop hands over, for dumping after the run.
    pub fn record_events(mut self) -> Self {
        self.recorded = Some(Vec::new());
        self
    }

    pub fn recorded_events(&self) -> &[WorldEvent] {
        self.recorded.as_deref().unwrap_or_default()
    }
}

impl FrameDriver<ManualClock> for HeadlessDriver {
    fn next_frame(&mut self, clock: &mut ManualClock) -> bool {
        if self.frame >= self.frames {
            return false;
        }
        // the first frame runs at the starting time
        if self.frame > 0 {
            clock.advance(self.frame_ms);
        }
        self.script.apply(self.frame, &mut self.input);
        true
    }

    fn input(&self) -> &dyn InputSource {
        &self.input
    }

    fn present(&mut self, world: &World, events: &[WorldEvent]) {
        if let Some(recorded) = &mut self.recorded {
            recorded.extend_from_slice(events);
        }
        let frame = self.frame;
        self.frame += 1;
        if self.print_every > 0 && frame % self.print_every == 0 {
            print!("{}", self.renderer.render(world, &self.view));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starblaster_common::GameConfig;
    use starblaster_kernel::{Clock, GameLoop, StdRandom};

    #[test]
    fn runs_requested_frames_on_manual_time() {
        let script = InputScript::parse("0:Space").unwrap();
        let mut driver = HeadlessDriver::new(10, 20, script, RenderView::default(), 0);
        let mut game = GameLoop::new(GameConfig::default(), ManualClock::new(0), StdRandom::seeded(4));
        assert_eq!(game.run(&mut driver), 10);
        assert_eq!(game.clock().now_ms(), 180);
        assert_eq!(game.world().tick(), 10);
        assert!(!game.world().projectiles().is_empty());
        assert!(driver.recorded_events().is_empty());
    }

    #[test]
    fn records_events_when_asked() {
        let mut driver =
            HeadlessDriver::new(5, 16, InputScript::default(), RenderView::default(), 0).record_events();
        let mut game = GameLoop::new(GameConfig::default(), ManualClock::new(0), StdRandom::seeded(6));
        game.run(&mut driver);

        let stepped = driver
            .recorded_events()
            .iter()
            .filter(|e| matches!(e, WorldEvent::Stepped { .. }))
            .count();
        assert_eq!(stepped, 5);
        // the ship spawn logged at construction is handed over on the first frame
        assert!(matches!(driver.recorded_events().first(), Some(WorldEvent::Spawned { .. })));
        assert!(game.world().events().is_empty());
    }
}
