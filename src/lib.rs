// framewalk: a minimal frame-cycling 2D animation runtime
//
// Sprites cycle through named frame sets, a scene marches and renders them
// in insertion order, and a game loop drives the scene at a fixed cadence
// against an opaque rendering surface.

pub mod engine;
pub mod game;

pub use engine::{
    BoundedPatrol, EngineError, FrameHandle, FrameSet, GameLoop, LoopHandle, MovementRule, Scene,
    SceneNode, SharedStateSet, Sprite, StateSet, Stationary, Surface, DEFAULT_TICK_INTERVAL,
};
pub use game::{Director, PixelCanvas, SceneFactory};
