use glam::Vec3;
use hecs::{With, World};

use crate::{
    components::{GlobalTransform, Hmd, MainCamera},
    contexts::HeadPose,
    util::rotation_translation,
};

/// Get the pose of the headset in global space. Falls back to the identity pose if there is no
/// [`Hmd`] in the world.
pub fn get_head_pose(world: &World) -> HeadPose {
    world
        .query::<With<&GlobalTransform, &Hmd>>()
        .iter()
        .next()
        .map(|(_, global_transform)| {
            let (rotation, position) = rotation_translation(&global_transform.0);
            HeadPose { position, rotation }
        })
        .unwrap_or_default()
}

/// Get the position of the [`MainCamera`] in global space, if there is one
pub fn get_main_camera_position(world: &World) -> Option<Vec3> {
    world
        .query::<With<&GlobalTransform, &MainCamera>>()
        .iter()
        .next()
        .map(|(_, global_transform)| global_transform.translation())
}
