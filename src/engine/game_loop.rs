// Tick scheduling and run/stop control
//
// The loop is cooperative: one tick runs to completion, the loop sleeps for
// the tick interval, and the running flag is checked again only at that
// rearm point. Stopping never preempts a tick in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::scene::Scene;
use super::surface::Surface;
use super::EngineError;

/// Default tick cadence, ~30 steps per second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / 30);

/// Cooperative stop control for a loop.
///
/// Handles are cheap to clone and can be held by scene nodes or external
/// callers. Stopping is edge-triggered: it prevents the next rearm, nothing
/// more.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    /// Create a handle for a loop that has not started yet.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Lower the running flag. Idempotent.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one scene at a fixed cadence.
///
/// State machine: Stopped → Running → Stopped, cyclically. One tick clears
/// the surface and iterates the scene; the next tick is scheduled only after
/// the current one returns.
pub struct GameLoop {
    scene: Scene,
    tick_interval: Duration,
    running: Arc<AtomicBool>,
    tick_count: u64,
}

impl GameLoop {
    /// Create a loop at the default ~30 ticks/second cadence.
    pub fn new(scene: Scene) -> Self {
        Self::with_interval(scene, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(scene: Scene, tick_interval: Duration) -> Self {
        Self::bound(scene, tick_interval, LoopHandle::new())
    }

    /// Create a loop controlled through an existing handle, so the handle
    /// can be wired into the scene before the loop exists.
    pub fn bound(scene: Scene, tick_interval: Duration, handle: LoopHandle) -> Self {
        Self {
            scene,
            tick_interval,
            running: handle.running,
            tick_count: 0,
        }
    }

    /// Handle through which this loop can be stopped.
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ticks completed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Execute a single tick: clear the surface, then iterate the scene.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        surface.clear();
        self.scene.iterate(surface)?;
        self.tick_count += 1;
        Ok(())
    }

    /// Run until stopped.
    ///
    /// Each pass executes one tick, sleeps `tick_interval`, and re-checks
    /// the running flag before rearming, so `stop` takes effect at the next
    /// tick boundary and never mid-tick. Calling `run` on a loop that is
    /// already running returns immediately rather than double-driving it.
    ///
    /// A tick error is fatal: the loop stops and the error propagates.
    pub fn run(&mut self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        log::info!("game loop started (interval {:?})", self.tick_interval);

        while self.running.load(Ordering::Acquire) {
            if let Err(err) = self.tick(surface) {
                self.running.store(false, Ordering::Release);
                log::error!("tick {} failed: {err}", self.tick_count);
                return Err(err);
            }
            thread::sleep(self.tick_interval);
        }

        log::info!("game loop stopped after {} ticks", self.tick_count);
        Ok(())
    }

    /// Lower the running flag. Idempotent; a tick already in flight
    /// completes before the loop winds down.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}
