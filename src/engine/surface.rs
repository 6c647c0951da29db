// Rendering surface contract

use super::frames::FrameHandle;

/// Capability contract for a rendering target.
///
/// The engine treats the surface as an opaque sink: it clears it at the top
/// of each tick and asks it to draw frames at positions. Which concrete
/// drawing technology backs it is outside the engine's scope.
pub trait Surface {
    /// Wipe the whole surface ahead of a fresh tick's rendering.
    fn clear(&mut self);

    /// Draw the resource behind `frame` with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, frame: FrameHandle, x: f32, y: f32);
}
