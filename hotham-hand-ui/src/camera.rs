use glam::{Quat, Vec2, Vec3};

use crate::{config::EventCameraConfig, util::look_rotation, WORLD_FORWARD};

/// A virtual pinhole camera that is moved to a ray origin each raycast pass.
///
/// Fingers are projected through it into a virtual "screen", and that screen position is what
/// the UI is raycast against. The field of view is enormous (179° by default) so that nearly
/// anything in front of the camera lands on screen.
///
/// Screen space has its origin at the top left, with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCamera {
    /// Position of the camera in global space
    pub position: Vec3,
    /// Orientation of the camera in global space. The camera looks down its local -Z
    pub rotation: Quat,
    /// Vertical field of view, in radians
    pub fov_y: f32,
    /// Near clip plane
    pub near: f32,
    /// Size of the virtual screen, in pixels
    pub viewport: Vec2,
}

impl Default for EventCamera {
    fn default() -> Self {
        EventCamera::new(&Default::default())
    }
}

impl EventCamera {
    /// Create a camera at the origin, looking forward
    pub fn new(config: &EventCameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            viewport: config.viewport,
        }
    }

    /// Move the camera to `position` and point it along `forward`
    pub fn place(&mut self, position: Vec3, forward: Vec3) {
        self.position = position;
        self.rotation = look_rotation(forward, Vec3::Y);
    }

    /// The direction the camera is looking
    pub fn forward(&self) -> Vec3 {
        self.rotation * WORLD_FORWARD
    }

    /// Project a point in global space onto the screen. Returns `None` for points at or behind
    /// the camera.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let view = self.rotation.inverse() * (point - self.position);
        let depth = -view.z;
        if depth <= 0. || !depth.is_finite() {
            return None;
        }

        let (half_width, half_height) = self.half_extents();
        let ndc = Vec2::new(view.x / (depth * half_width), view.y / (depth * half_height));

        Some(Vec2::new(
            (ndc.x + 1.) * 0.5 * self.viewport.x,
            (1. - ndc.y) * 0.5 * self.viewport.y,
        ))
    }

    /// Get the ray, in global space, that passes through a point on the screen.
    /// Returns the origin and the normalised direction.
    pub fn screen_to_ray(&self, screen_position: Vec2) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            screen_position.x / self.viewport.x * 2. - 1.,
            1. - screen_position.y / self.viewport.y * 2.,
        );
        let (half_width, half_height) = self.half_extents();
        let direction = Vec3::new(ndc.x * half_width, ndc.y * half_height, -1.);

        (self.position, (self.rotation * direction).normalize())
    }

    /// Centre of the screen, in pixels
    pub fn screen_centre(&self) -> Vec2 {
        self.viewport * 0.5
    }

    // Half extents of the image plane at a depth of 1
    fn half_extents(&self) -> (f32, f32) {
        let half_height = (self.fov_y * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;
        (half_height * aspect, half_height)
    }
}
