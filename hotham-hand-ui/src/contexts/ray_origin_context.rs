use glam::{Quat, Vec3};

use crate::{components::Handedness, util::yaw_rotation, WORLD_FORWARD};

/// Where the user's head is this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    /// Position of the head in global space
    pub position: Vec3,
    /// Orientation of the head in global space
    pub rotation: Quat,
}

impl Default for HeadPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Origin and direction of a far ray for one hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayOrigin {
    /// The estimated shoulder
    pub origin: Vec3,
    /// Forward, as seen by the smoothed head yaw
    pub direction: Vec3,
}

/// Estimates where the user's shoulders are, so far rays can be cast from them.
///
/// Only the yaw of the head is used, and it's low-pass filtered: every tick the smoothed yaw
/// moves `smoothing` of the way towards the current yaw. This is per tick rather than per
/// second, so the filter is faster at higher frame rates.
#[derive(Debug, Clone)]
pub struct RayOriginContext {
    /// The filtered head yaw
    pub smoothed_yaw: Quat,
    /// Position of the head this tick
    pub head_position: Vec3,
    initialised: bool,
}

impl Default for RayOriginContext {
    fn default() -> Self {
        Self {
            smoothed_yaw: Quat::IDENTITY,
            head_position: Vec3::ZERO,
            initialised: false,
        }
    }
}

impl RayOriginContext {
    /// Feed in this tick's head pose. The first pose seeds the filter directly.
    pub fn update(&mut self, head: &HeadPose, smoothing: f32) {
        let head_yaw = yaw_rotation(head.rotation);
        self.head_position = head.position;

        if !self.initialised {
            self.smoothed_yaw = head_yaw;
            self.initialised = true;
            return;
        }

        self.smoothed_yaw = self.smoothed_yaw.slerp(head_yaw, smoothing).normalize();
    }

    /// Forward, rotated by the smoothed yaw
    pub fn forward(&self) -> Vec3 {
        self.smoothed_yaw * WORLD_FORWARD
    }

    /// Shoulder origin and forward direction for a hand. `shoulder_offset` is the right
    /// shoulder's offset from the head; the left shoulder mirrors it.
    pub fn ray_origin(&self, handedness: Handedness, shoulder_offset: Vec3) -> RayOrigin {
        let offset = match handedness {
            Handedness::Right => shoulder_offset,
            Handedness::Left => Vec3::new(-shoulder_offset.x, shoulder_offset.y, shoulder_offset.z),
        };

        RayOrigin {
            origin: self.head_position + self.smoothed_yaw * offset,
            direction: self.forward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const SHOULDER_OFFSET: Vec3 = Vec3::new(0.15, -0.2, 0.);

    #[test]
    pub fn test_shoulders() {
        let mut context = RayOriginContext::default();
        let head = HeadPose {
            position: [0., 1.6, 0.].into(),
            rotation: Quat::IDENTITY,
        };
        context.update(&head, 0.1);

        let right = context.ray_origin(Handedness::Right, SHOULDER_OFFSET);
        assert_relative_eq!(right.origin, Vec3::new(0.15, 1.4, 0.));
        assert_relative_eq!(right.direction, Vec3::NEG_Z);

        let left = context.ray_origin(Handedness::Left, SHOULDER_OFFSET);
        assert_relative_eq!(left.origin, Vec3::new(-0.15, 1.4, 0.));
    }

    #[test]
    pub fn test_only_yaw_is_used() {
        let mut context = RayOriginContext::default();
        let head = HeadPose {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_x(0.5),
        };
        context.update(&head, 0.1);

        // Looking down shouldn't move the shoulders.
        let right = context.ray_origin(Handedness::Right, SHOULDER_OFFSET);
        assert_relative_eq!(right.origin, SHOULDER_OFFSET, epsilon = 1e-6);
        assert_relative_eq!(right.direction, Vec3::NEG_Z, epsilon = 1e-6);
    }

    #[test]
    pub fn test_yaw_is_smoothed() {
        let mut context = RayOriginContext::default();
        context.update(&HeadPose::default(), 0.1);

        // Turn 90 degrees to the left.
        let turned = HeadPose {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_y(FRAC_PI_2),
        };
        context.update(&turned, 0.1);

        // One tick only gets a tenth of the way there.
        let (axis, angle) = context.smoothed_yaw.to_axis_angle();
        assert_relative_eq!(axis, Vec3::Y, epsilon = 1e-5);
        assert_relative_eq!(angle, FRAC_PI_2 * 0.1, epsilon = 1e-5);

        // But it gets there in the end.
        for _ in 0..200 {
            context.update(&turned, 0.1);
        }
        assert_relative_eq!(context.forward(), Vec3::NEG_X, epsilon = 1e-4);
    }
}
