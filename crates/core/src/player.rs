//! Player pose, camera and screen parameters.

use crate::types::{
    Rot2, Vec2, DEFAULT_CAMERA_DISTANCE, DEFAULT_CAMERA_WIDTH, DEFAULT_SCREEN_HEIGHT,
    DEFAULT_SCREEN_WIDTH,
};

/// Player position and unit-length facing.
///
/// Movement does not collide with walls; the player may walk through any
/// cell, or off the map entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub direction: Vec2,
}

impl Player {
    /// Facing up (towards negative y).
    pub const DEFAULT_DIRECTION: Vec2 = Vec2::new(0.0, -1.0);

    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            direction: Self::DEFAULT_DIRECTION,
        }
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    pub fn step_forward(&mut self) {
        self.position = self.position + self.direction;
    }

    pub fn step_backward(&mut self) {
        self.position = self.position - self.direction;
    }

    pub fn strafe_left(&mut self) {
        self.position = self.position + Rot2::from_degrees(90.0).apply(self.direction);
    }

    pub fn strafe_right(&mut self) {
        self.position = self.position + Rot2::from_degrees(-90.0).apply(self.direction);
    }

    /// Rotate the facing by `degrees` (positive is clockwise on screen).
    pub fn turn(&mut self, degrees: f32) {
        self.direction = Rot2::from_degrees(degrees).apply(self.direction);
    }

    /// Cell the player stands in (truncated position).
    pub fn cell(&self) -> (i32, i32) {
        self.position.trunc_cell()
    }

    /// Cell one step ahead (rounded `position + direction`).
    pub fn look_ahead_cell(&self) -> (i32, i32) {
        (self.position + self.direction).round_cell()
    }
}

/// Projection plane parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Offset of the projection plane ahead of the player.
    pub distance: f32,
    /// Total span of the projection plane in world units.
    pub width: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: DEFAULT_CAMERA_DISTANCE,
            width: DEFAULT_CAMERA_WIDTH,
        }
    }
}

/// Output size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }
}
