// Game-level wiring: loop ownership and the demo surface

pub mod canvas;
pub mod director;

pub use canvas::PixelCanvas;
pub use director::{Director, SceneFactory};
