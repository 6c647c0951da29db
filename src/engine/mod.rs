// Animation engine core
//
// Frame cycling, sprites, the scene graph, and the loop that drives them.

pub mod frames;
pub mod game_loop;
pub mod scene;
pub mod sprite;
pub mod surface;

pub use frames::{FrameHandle, FrameSet, StateSet};
pub use game_loop::{GameLoop, LoopHandle, DEFAULT_TICK_INTERVAL};
pub use scene::{Scene, SceneNode};
pub use sprite::{BoundedPatrol, MovementRule, SharedStateSet, Sprite, Stationary};
pub use surface::Surface;

/// Animation engine errors
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("frame set initialized with no frames")]
    EmptyFrameSet,

    #[error("unknown animation state: {0}")]
    UnknownState(String),
}
