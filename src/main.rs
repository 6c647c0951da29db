use anyhow::Result;
use glam::Vec2;
use image::{Rgba, RgbaImage};
use log::info;

use framewalk::{
    BoundedPatrol, Director, EngineError, FrameSet, LoopHandle, PixelCanvas, Scene, SceneFactory,
    SceneNode, Sprite, StateSet, Stationary, Surface, DEFAULT_TICK_INTERVAL,
};

/// Stops the loop through its handle once the tick budget is spent.
struct TickBudget {
    remaining: u32,
    handle: LoopHandle,
}

impl SceneNode for TickBudget {
    fn march(&mut self) -> Result<(), EngineError> {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.handle.stop();
            }
        }
        Ok(())
    }

    fn render(&self, _surface: &mut dyn Surface) -> Result<(), EngineError> {
        Ok(())
    }
}

fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting framewalk demo...");

    let mut canvas = PixelCanvas::new(160, 120, Rgba([16, 16, 24, 255]));

    // A two-frame "cruising" cycle and a static backdrop tile
    let frame_a = canvas.register_frame(solid(12, 12, Rgba([220, 80, 80, 255])));
    let frame_b = canvas.register_frame(solid(12, 12, Rgba([80, 180, 220, 255])));
    let backdrop = canvas.register_frame(solid(24, 24, Rgba([60, 120, 60, 255])));

    let factory: SceneFactory = Box::new(move |handle| {
        let mut scenery_states = StateSet::new();
        scenery_states.add_state("idle", FrameSet::new(vec![backdrop])?)?;
        let mut scenery = Sprite::from_states(scenery_states, "idle", Box::new(Stationary))?;
        scenery.set_position(Vec2::new(60.0, 80.0));

        let mut roamer_states = StateSet::new();
        roamer_states.add_state("cruising", FrameSet::new(vec![frame_a, frame_b])?)?;
        let mut roamer = Sprite::from_states(
            roamer_states,
            "cruising",
            Box::new(BoundedPatrol::new(0.0, 100.0, 2.0)),
        )?;
        roamer.set_position(Vec2::new(0.0, 40.0));

        let mut scene = Scene::new();
        scene.add_node(Box::new(scenery));
        scene.add_node(Box::new(roamer));
        scene.add_node(Box::new(TickBudget {
            remaining: 90,
            handle: handle.clone(),
        }));
        Ok(scene)
    });

    let mut director = Director::new(factory, DEFAULT_TICK_INTERVAL)?;
    director.run(&mut canvas)?;

    info!(
        "Loop finished after {} ticks",
        director.active_loop().tick_count()
    );

    canvas.save("framewalk.png")?;
    info!("Framebuffer written to framewalk.png");

    Ok(())
}
