use glam::{Affine3A, EulerRot, Mat3, Quat, Vec3};

#[inline]
/// Build a rotation whose forward (-Z) points along `forward`, keeping local +Y as close to `up`
/// as possible. Falls back to the shortest arc when `forward` and `up` are parallel.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let back = -forward.normalize_or_zero();
    if back == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let right = up.cross(back);
    if right.length_squared() < f32::EPSILON {
        return Quat::from_rotation_arc(Vec3::NEG_Z, -back);
    }

    let right = right.normalize();
    let up = back.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, back))
}

#[inline]
/// Extract only the yaw (rotation about +Y) from a rotation
pub fn yaw_rotation(rotation: Quat) -> Quat {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_rotation_y(yaw)
}

#[inline]
/// Decompose an [`Affine3A`] into its rotation and translation, ignoring scale
pub fn rotation_translation(transform: &Affine3A) -> (Quat, Vec3) {
    let (_, rotation, translation) = transform.to_scale_rotation_translation();
    (rotation, translation)
}
