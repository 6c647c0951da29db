// Top-level ownership of the active game loop

use std::time::Duration;

use crate::engine::{EngineError, GameLoop, LoopHandle, Scene, Surface};

/// Builds a fresh scene from initial configuration.
///
/// The factory receives the handle of the loop that will drive the scene, so
/// nodes that stop the loop cooperatively can be wired in at build time.
pub type SceneFactory = Box<dyn Fn(&LoopHandle) -> Result<Scene, EngineError>>;

/// Exclusive owner of the active game loop.
///
/// Reset is a full reconstruction: the old loop is stopped and discarded and
/// a new one is built from the factory. No animation or position state
/// survives a reset.
pub struct Director {
    factory: SceneFactory,
    tick_interval: Duration,
    active: GameLoop,
}

impl Director {
    pub fn new(factory: SceneFactory, tick_interval: Duration) -> Result<Self, EngineError> {
        let active = Self::build(&factory, tick_interval)?;
        Ok(Self {
            factory,
            tick_interval,
            active,
        })
    }

    fn build(factory: &SceneFactory, tick_interval: Duration) -> Result<GameLoop, EngineError> {
        let handle = LoopHandle::new();
        let scene = factory(&handle)?;
        Ok(GameLoop::bound(scene, tick_interval, handle))
    }

    /// Handle for stopping the active loop.
    pub fn handle(&self) -> LoopHandle {
        self.active.handle()
    }

    pub fn active_loop(&self) -> &GameLoop {
        &self.active
    }

    pub fn active_loop_mut(&mut self) -> &mut GameLoop {
        &mut self.active
    }

    /// Run the active loop until it is stopped.
    pub fn run(&mut self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        self.active.run(surface)
    }

    pub fn stop(&mut self) {
        self.active.stop();
    }

    /// Stop the active loop and replace it wholesale with a freshly built
    /// one.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.active.stop();
        self.active = Self::build(&self.factory, self.tick_interval)?;
        log::info!("reset: fresh loop and scene constructed");
        Ok(())
    }
}
