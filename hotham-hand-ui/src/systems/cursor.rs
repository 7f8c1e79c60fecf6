use glam::{Quat, Vec3, Vec4};
use log::warn;

use crate::{
    config::HandUiConfig,
    contexts::{CursorVisual, InteractionState, PointerRecord},
};

/// Move a cursor onto whatever its pointer hit.
///
/// The cursor sits on the hit surface, spins to face the way the pointer is moving, and grows
/// with distance from the main camera so it stays a similar size on screen. Without a hit, it's
/// hidden. Without a main camera, a distance of 1 is used and a warning logged, once.
pub fn update_cursor(
    cursor: &mut CursorVisual,
    pointer: &PointerRecord,
    main_camera_position: Option<Vec3>,
    normal_pointer_scale: f32,
    warned_missing_camera: &mut bool,
) {
    let hit = match &pointer.current_raycast {
        Some(hit) => hit,
        None => {
            cursor.visible = false;
            return;
        }
    };

    let position = match hit.screen_to_world(&pointer.event_camera, pointer.position) {
        Some(position) => position,
        None => {
            cursor.visible = false;
            return;
        }
    };
    cursor.visible = true;
    cursor.position = position;

    let angle = pointer.delta.x.atan2(pointer.delta.y);
    cursor.rotation = hit.plane_rotation() * Quat::from_rotation_z(-angle);

    let distance = match main_camera_position {
        Some(camera) => position.distance(camera),
        None => {
            if !*warned_missing_camera {
                warn!("[HAND_UI] No MainCamera in the world, cursors won't scale with distance");
                *warned_missing_camera = true;
            }
            1.
        }
    };
    let scale = (distance * normal_pointer_scale).max(normal_pointer_scale);
    cursor.scale = Vec3::splat(scale);

    cursor.line = [pointer.event_camera.position, cursor.position];
}

/// Blend a cursor's color towards the color for its state
pub fn update_cursor_color(cursor: &mut CursorVisual, state: InteractionState, config: &HandUiConfig) {
    const OPAQUE: Vec4 = Vec4::new(0., 0., 0., 1.);
    const CLEAR: Vec4 = Vec4::ZERO;
    let rate = config.color_lerp_rate;

    let steps = match state {
        InteractionState::OnCanvas => vec![(OPAQUE, rate), (config.normal_color, rate)],
        InteractionState::OnElement => vec![(OPAQUE, rate), (config.hovering_color, rate)],
        InteractionState::PinchingToCanvas => {
            vec![(OPAQUE, rate), (config.trigger_missed_color, rate)]
        }
        InteractionState::PinchingToElement => {
            vec![(OPAQUE, rate), (config.triggering_color, rate)]
        }
        InteractionState::NearCanvas => vec![(CLEAR, 1.)],
        InteractionState::TouchingElement => vec![(CLEAR, rate)],
        InteractionState::TouchingCanvas => vec![(Vec4::new(0., 0.01, 0., 0.), rate)],
        InteractionState::OffCanvas => vec![(CLEAR, rate)],
    };

    for (target, rate) in steps {
        cursor.color = lerp_color(cursor.color, target, rate);
    }
}

/// Blend `from` towards `to`, treating some channels of `to` as "leave alone".
///
/// If `to` has no color (RGB all zero) only alpha is blended. Otherwise, if `to` is fully
/// opaque, only RGB is blended. Anything else blends every channel.
pub fn lerp_color(from: Vec4, to: Vec4, rate: f32) -> Vec4 {
    let target = if to.truncate() == Vec3::ZERO {
        from.truncate().extend(to.w)
    } else if to.w == 1. {
        to.truncate().extend(from.w)
    } else {
        to
    };
    from.lerp(target, rate)
}
