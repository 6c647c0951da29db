// Frame cycling primitives

use std::collections::HashMap;

use super::EngineError;

/// Opaque handle to a drawable frame resource.
///
/// The engine never decodes or fetches image data. It stores handles and
/// passes them to the rendering surface, which resolves them to whatever the
/// backing asset pipeline loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Create a frame handle from a raw u64
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// An ordered, cyclic sequence of frames with a current-position cursor.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<FrameHandle>,
    current: usize,
}

impl FrameSet {
    /// Create a frame set. The sequence must hold at least one frame.
    pub fn new(frames: Vec<FrameHandle>) -> Result<Self, EngineError> {
        if frames.is_empty() {
            return Err(EngineError::EmptyFrameSet);
        }
        Ok(Self { frames, current: 0 })
    }

    /// Step the cursor forward, wrapping at the end.
    ///
    /// A single-frame set stays on frame 0.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.frames.len();
    }

    /// The frame under the cursor.
    pub fn current_frame(&self) -> FrameHandle {
        self.frames[self.current]
    }

    /// Append a frame to the end of the cycle. The cursor is left untouched.
    pub fn add_frame(&mut self, frame: FrameHandle) {
        self.frames.push(frame);
    }

    /// Cursor position, `0 <= cursor < len`.
    pub fn cursor(&self) -> usize {
        self.current
    }

    /// Number of frames in the cycle (always at least 1).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a frame set cannot be constructed empty. Exists to
    /// pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Named mapping from animation state label to frame set.
#[derive(Debug, Clone, Default)]
pub struct StateSet {
    states: HashMap<String, FrameSet>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame set under a state label.
    ///
    /// An existing label is silently replaced (last write wins).
    pub fn add_state(&mut self, label: &str, frame_set: FrameSet) -> Result<(), EngineError> {
        if label.is_empty() {
            return Err(EngineError::InvalidArgument("state label is empty"));
        }
        self.states.insert(label.to_string(), frame_set);
        Ok(())
    }

    /// Look up the frame set for a label.
    pub fn get(&self, label: &str) -> Option<&FrameSet> {
        self.states.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut FrameSet> {
        self.states.get_mut(label)
    }

    /// Check whether a label is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.states.contains_key(label)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(n: u64) -> Vec<FrameHandle> {
        (0..n).map(FrameHandle::from_u64).collect()
    }

    #[test]
    fn test_frame_set_requires_frames() {
        let result = FrameSet::new(Vec::new());
        assert!(matches!(result, Err(EngineError::EmptyFrameSet)));
    }

    #[test]
    fn test_cyclic_advance_returns_to_start() {
        let mut set = FrameSet::new(handles(3)).unwrap();
        assert_eq!(set.cursor(), 0);

        for _ in 0..3 {
            set.advance();
        }
        assert_eq!(set.cursor(), 0);
        assert_eq!(set.current_frame(), FrameHandle::from_u64(0));
    }

    #[test]
    fn test_advance_walks_in_order() {
        let mut set = FrameSet::new(handles(3)).unwrap();
        set.advance();
        assert_eq!(set.current_frame(), FrameHandle::from_u64(1));
        set.advance();
        assert_eq!(set.current_frame(), FrameHandle::from_u64(2));
    }

    #[test]
    fn test_single_frame_advance_is_noop() {
        let mut set = FrameSet::new(handles(1)).unwrap();
        set.advance();
        assert_eq!(set.cursor(), 0);
        assert_eq!(set.current_frame(), FrameHandle::from_u64(0));
    }

    #[test]
    fn test_add_frame_preserves_cursor() {
        let mut set = FrameSet::new(handles(2)).unwrap();
        set.advance();
        assert_eq!(set.cursor(), 1);

        set.add_frame(FrameHandle::from_u64(9));
        assert_eq!(set.cursor(), 1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.current_frame(), FrameHandle::from_u64(1));
    }

    #[test]
    fn test_state_set_rejects_empty_label() {
        let mut states = StateSet::new();
        let result = states.add_state("", FrameSet::new(handles(1)).unwrap());
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_state_set_overwrite_last_write_wins() {
        let mut states = StateSet::new();
        states
            .add_state("walk", FrameSet::new(handles(1)).unwrap())
            .unwrap();
        states
            .add_state("walk", FrameSet::new(handles(4)).unwrap())
            .unwrap();

        assert_eq!(states.len(), 1);
        assert_eq!(states.get("walk").unwrap().len(), 4);
    }

    #[test]
    fn test_state_set_lookup() {
        let mut states = StateSet::new();
        states
            .add_state("idle", FrameSet::new(handles(2)).unwrap())
            .unwrap();

        assert!(states.contains("idle"));
        assert!(!states.contains("walk"));
        assert!(states.get("walk").is_none());
    }

    #[test]
    fn test_frame_handle_roundtrip() {
        let handle = FrameHandle::from_u64(42);
        assert_eq!(handle.as_u64(), 42);
    }
}
