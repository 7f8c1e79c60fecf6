use std::path::Path;

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{HandUiError, HandUiResult};

/// Everything about hand UI that can be tuned without touching code.
///
/// Every field has a default, so a partial document is fine:
///
/// ```
/// use hotham_hand_ui::HandUiConfig;
///
/// let config = HandUiConfig::from_json(r#"{ "number_of_hands": 1 }"#).unwrap();
/// assert_eq!(config.number_of_hands, 1);
/// assert_eq!(config.pinching_threshold, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandUiConfig {
    /// How many hands (and cursors) to allocate for
    pub number_of_hands: usize,
    /// Distance in metres from a surface at which interaction switches from projected to touch
    pub projective_to_tactile_transition_distance: f32,
    /// Distance in millimetres between thumb and index tips that counts as a pinch, when no
    /// pinch detector is installed for that hand
    pub pinching_threshold: f32,
    /// Prefer scrollbars, then scroll views, over any other hit
    pub override_scroll_view_clicks: bool,
    /// Record shoulders, rays and camera origins into the debug context
    pub draw_debug: bool,
    /// Smallest world size of the cursor
    pub normal_pointer_scale: f32,
    /// Cursor color over blank canvas
    pub normal_color: Vec4,
    /// Cursor color over an element
    pub hovering_color: Vec4,
    /// Cursor color while pinching an element
    pub triggering_color: Vec4,
    /// Cursor color while pinching blank canvas
    pub trigger_missed_color: Vec4,
    /// Offset of the right shoulder from the head, in head-yaw space. Mirrored for the left
    pub shoulder_offset: Vec3,
    /// Per-tick blend factor towards the current head yaw
    pub head_yaw_smoothing: f32,
    /// Per-tick blend factor towards the newly projected screen position. 1.0 disables smoothing
    pub screen_position_smoothing: f32,
    /// Multiplier applied to the change in screen position to produce the pointer delta
    pub delta_scale: f32,
    /// Per-tick blend factor for cursor colors
    pub color_lerp_rate: f32,
    /// Settings for the virtual projection camera
    pub event_camera: EventCameraConfig,
}

/// Settings for the virtual projection camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCameraConfig {
    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane, in metres
    pub near: f32,
    /// Size of the virtual screen, in pixels
    pub viewport: Vec2,
}

impl Default for HandUiConfig {
    fn default() -> Self {
        Self {
            number_of_hands: 2,
            projective_to_tactile_transition_distance: 0.12,
            pinching_threshold: 20.,
            override_scroll_view_clicks: false,
            draw_debug: false,
            normal_pointer_scale: 0.00025,
            normal_color: Vec4::ONE,
            hovering_color: Vec4::new(0., 1., 0., 1.),
            triggering_color: Vec4::new(0.5, 0.5, 0.5, 1.),
            trigger_missed_color: Vec4::new(0.5, 0.5, 0.5, 1.),
            shoulder_offset: Vec3::new(0.15, -0.2, 0.),
            head_yaw_smoothing: 0.1,
            screen_position_smoothing: 1.0,
            delta_scale: -10.,
            color_lerp_rate: 0.2,
            event_camera: Default::default(),
        }
    }
}

impl Default for EventCameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 179.,
            near: 0.01,
            viewport: Vec2::new(1920., 1080.),
        }
    }
}

impl HandUiConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> HandUiResult<Self> {
        let config: HandUiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file from disk and validate it
    pub fn load(path: impl AsRef<Path>) -> HandUiResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that the configuration makes sense
    pub fn validate(&self) -> HandUiResult<()> {
        if self.number_of_hands == 0 {
            return Err(invalid("number_of_hands must be at least 1"));
        }

        let non_negative = [
            (
                "projective_to_tactile_transition_distance",
                self.projective_to_tactile_transition_distance,
            ),
            ("pinching_threshold", self.pinching_threshold),
            ("event_camera.near", self.event_camera.near),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0. {
                return Err(invalid(&format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }

        // The cursor's transform is inverted to measure the fingertip against it.
        let scale = self.normal_pointer_scale;
        if !scale.is_finite() || scale <= 0. {
            return Err(invalid(&format!(
                "normal_pointer_scale must be a finite, positive number, got {scale}"
            )));
        }

        let blend_factors = [
            ("head_yaw_smoothing", self.head_yaw_smoothing),
            ("screen_position_smoothing", self.screen_position_smoothing),
            ("color_lerp_rate", self.color_lerp_rate),
        ];
        for (name, value) in blend_factors {
            if !(0. ..=1.).contains(&value) {
                return Err(invalid(&format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        if !self.delta_scale.is_finite() || !self.shoulder_offset.is_finite() {
            return Err(invalid("delta_scale and shoulder_offset must be finite"));
        }

        let fov = self.event_camera.fov_y_degrees;
        if !(fov > 0. && fov < 180.) {
            return Err(invalid(&format!(
                "event_camera.fov_y_degrees must be between 0 and 180, got {fov}"
            )));
        }

        let viewport = self.event_camera.viewport;
        if !(viewport.x >= 1. && viewport.y >= 1.) {
            return Err(invalid(&format!(
                "event_camera.viewport must be at least 1x1, got {viewport}"
            )));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> HandUiError {
    HandUiError::InvalidConfig(message.to_string())
}
