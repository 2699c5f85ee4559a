//! Viewport model: per-column rays from the player through the projection plane.
//!
//! The plane sits `camera.distance` ahead of the player, perpendicular to the
//! facing, and spans `camera.width` units. Column 0 starts at the plane end
//! reached by rotating the facing +90 degrees and the sweep moves towards the
//! other end as the column index grows.

use crate::player::{Camera, Player, Screen};
use crate::types::{Rot2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    origin: Vec2,
    plane_dir: Vec2,
    plane_start: Vec2,
    /// Direction the sweep travels along the plane (plane_dir rotated 180 degrees).
    sweep_dir: Vec2,
    camera_width: f32,
    screen_width: f32,
}

impl Projection {
    pub fn new(player: &Player, camera: &Camera, screen: Screen) -> Self {
        let to_plane = player.direction * camera.distance;
        let plane_dir = Rot2::from_degrees(90.0).apply(player.direction);
        let plane_start = player.position + (to_plane + plane_dir * (camera.width / 2.0));
        let sweep_dir = Rot2::from_degrees(180.0).apply(plane_dir);

        Self {
            origin: player.position,
            plane_dir,
            plane_start,
            sweep_dir,
            camera_width: camera.width,
            screen_width: screen.width as f32,
        }
    }

    /// Ray origin shared by every column (the player position).
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn plane_dir(&self) -> Vec2 {
        self.plane_dir
    }

    pub fn plane_start(&self) -> Vec2 {
        self.plane_start
    }

    /// Point on the projection plane hit by `column`.
    pub fn plane_point(&self, column: u16) -> Vec2 {
        let along = self.camera_width * column as f32 / self.screen_width;
        self.plane_start + self.sweep_dir * along
    }

    /// Unnormalized ray direction for `column`.
    ///
    /// The magnitude grows towards the plane edges; the sampler relies on that
    /// so the fixed scan step covers the projected distance.
    pub fn ray_direction(&self, column: u16) -> Vec2 {
        self.plane_point(column) - self.origin
    }
}
