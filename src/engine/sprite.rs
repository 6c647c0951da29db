// Sprite entities and their movement rules

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::frames::StateSet;
use super::scene::SceneNode;
use super::surface::Surface;
use super::EngineError;

/// Per-tick movement strategy for a sprite.
///
/// Injected at construction, so distinct movement behaviors are separate
/// rule types rather than sprite subtypes.
pub trait MovementRule {
    /// Apply one tick's worth of movement.
    fn step(&mut self, position: &mut Vec2);
}

/// Rule for sprites that never move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stationary;

impl MovementRule for Stationary {
    fn step(&mut self, _position: &mut Vec2) {}
}

/// Horizontal patrol between two bounds.
///
/// Moves by `speed` along the current direction each tick and reverses once
/// the position has stepped outside `[min_x, max_x]`.
#[derive(Debug, Clone, Copy)]
pub struct BoundedPatrol {
    min_x: f32,
    max_x: f32,
    speed: f32,
    xdir: f32,
}

impl BoundedPatrol {
    pub fn new(min_x: f32, max_x: f32, speed: f32) -> Self {
        Self {
            min_x,
            max_x,
            speed,
            xdir: 1.0,
        }
    }

    /// Current travel direction (1.0 = right, -1.0 = left).
    pub fn direction(&self) -> f32 {
        self.xdir
    }
}

impl MovementRule for BoundedPatrol {
    fn step(&mut self, position: &mut Vec2) {
        position.x += self.speed * self.xdir;
        if position.x > self.max_x {
            self.xdir = -1.0;
        } else if position.x < self.min_x {
            self.xdir = 1.0;
        }
    }
}

/// Shared handle to a state set.
///
/// Sprites built from the same handle share animation cursors: marching one
/// advances what the other renders next. Use [`Sprite::from_states`] for a
/// per-sprite copy instead.
pub type SharedStateSet = Rc<RefCell<StateSet>>;

/// A positioned entity cycling through one active animation state.
pub struct Sprite {
    position: Vec2,
    states: SharedStateSet,
    active_state: String,
    movement: Box<dyn MovementRule>,
}

impl Sprite {
    /// Create a sprite sharing `states` with every other holder of the
    /// handle.
    ///
    /// Fails fast: the initial state label must already be registered.
    pub fn new(
        states: SharedStateSet,
        initial_state: &str,
        movement: Box<dyn MovementRule>,
    ) -> Result<Self, EngineError> {
        if initial_state.is_empty() {
            return Err(EngineError::InvalidArgument("initial state label is empty"));
        }
        if !states.borrow().contains(initial_state) {
            return Err(EngineError::UnknownState(initial_state.to_string()));
        }
        Ok(Self {
            position: Vec2::ZERO,
            states,
            active_state: initial_state.to_string(),
            movement,
        })
    }

    /// Create a sprite with exclusive ownership of its state set.
    pub fn from_states(
        states: StateSet,
        initial_state: &str,
        movement: Box<dyn MovementRule>,
    ) -> Result<Self, EngineError> {
        Self::new(Rc::new(RefCell::new(states)), initial_state, movement)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Label of the active animation state.
    pub fn active_state(&self) -> &str {
        &self.active_state
    }

    /// Switch the active animation state. The label must be registered.
    pub fn set_state(&mut self, label: &str) -> Result<(), EngineError> {
        if !self.states.borrow().contains(label) {
            return Err(EngineError::UnknownState(label.to_string()));
        }
        self.active_state = label.to_string();
        Ok(())
    }
}

impl SceneNode for Sprite {
    /// Movement rule first, then the active frame set's cursor. The order
    /// is fixed.
    fn march(&mut self) -> Result<(), EngineError> {
        self.movement.step(&mut self.position);

        let mut states = self.states.borrow_mut();
        let frame_set = states
            .get_mut(&self.active_state)
            .ok_or_else(|| EngineError::UnknownState(self.active_state.clone()))?;
        frame_set.advance();
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        let states = self.states.borrow();
        let frame_set = states
            .get(&self.active_state)
            .ok_or_else(|| EngineError::UnknownState(self.active_state.clone()))?;
        surface.draw_image(frame_set.current_frame(), self.position.x, self.position.y);
        Ok(())
    }
}
