use glam::{Affine3A, Quat, Vec2, Vec3};
use hecs::{Entity, World};
use log::trace;

use crate::{
    camera::EventCamera,
    components::{GlobalTransform, Hand, SurfaceKind, UiSurface},
    config::HandUiConfig,
    contexts::{
        event_context::ancestors, DebugContext, DebugShape, HandSlot, HeadPose, InteractionState,
        RayOrigin,
    },
};

/// A surface hit by a ray from the event camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The entity that was hit
    pub entity: Entity,
    /// What sort of surface it is
    pub kind: SurfaceKind,
    /// Distance from the camera to the hit, in metres
    pub distance: f32,
    /// Where the ray hit, in global space
    pub world_position: Vec3,
    /// Transform from surface space to global space
    pub global_from_surface: Affine3A,
    /// Width and height of the surface
    pub size: Vec2,
    /// How many ancestors the entity has
    pub depth: usize,
}

impl RaycastHit {
    /// Is this a bare container rather than something interactive?
    pub fn is_container(&self) -> bool {
        self.kind == SurfaceKind::Canvas
    }

    /// Orientation of the surface in global space
    pub fn plane_rotation(&self) -> Quat {
        let (_, rotation, _) = self.global_from_surface.to_scale_rotation_translation();
        rotation
    }

    /// Map a point on `camera`'s screen onto the plane of this surface. Returns `None` if the
    /// ray through that point never reaches the plane.
    pub fn screen_to_world(&self, camera: &EventCamera, screen_position: Vec2) -> Option<Vec3> {
        let (origin, direction) = camera.screen_to_ray(screen_position);
        let (plane_origin, normal) = plane(&self.global_from_surface);
        let t = intersect_plane(origin, direction, plane_origin, normal)?;
        (t >= 0.).then(|| origin + direction * t)
    }
}

/// The UI raycast substrate: finds every surface under a point on the event camera's screen.
pub trait UiRaycaster {
    /// Return every surface hit by the ray through `screen_position`, in any order
    fn raycast_all(
        &self,
        world: &World,
        camera: &EventCamera,
        screen_position: Vec2,
    ) -> Vec<RaycastHit>;
}

/// Raycasts against every [`UiSurface`] in the world.
///
/// Surfaces are hit only from the front, and only within their rectangle. Hits come back
/// deepest in the hierarchy first, so a control sharing a plane with its container stays ahead
/// of it once sorted by distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRaycaster;

impl UiRaycaster for SurfaceRaycaster {
    fn raycast_all(
        &self,
        world: &World,
        camera: &EventCamera,
        screen_position: Vec2,
    ) -> Vec<RaycastHit> {
        let (origin, direction) = camera.screen_to_ray(screen_position);
        let mut hits = Vec::new();

        for (entity, (surface, global_transform)) in
            world.query::<(&UiSurface, &GlobalTransform)>().iter()
        {
            if !surface.raycast_target {
                continue;
            }

            let (plane_origin, normal) = plane(&global_transform.0);

            // Reversed surfaces face away from the ray.
            if direction.dot(normal) >= 0. {
                continue;
            }

            let distance = match intersect_plane(origin, direction, plane_origin, normal) {
                Some(t) if t >= camera.near => t,
                _ => continue,
            };

            let world_position = origin + direction * distance;
            let local = global_transform.0.inverse().transform_point3(world_position);
            let half_size = surface.size * 0.5;
            if local.x.abs() > half_size.x || local.y.abs() > half_size.y {
                continue;
            }

            hits.push(RaycastHit {
                entity,
                kind: surface.kind,
                distance,
                world_position,
                global_from_surface: global_transform.0,
                size: surface.size,
                depth: ancestors(world, entity).len() - 1,
            });
        }

        hits.sort_by(|a, b| b.depth.cmp(&a.depth));
        hits
    }
}

/// Pick the hit a pointer should use from everything under it.
///
/// Hits are sorted by distance. If the nearest is a bare container and there is anything else,
/// the container is dropped. With `override_scroll_view_clicks`, the last scrollbar wins, then
/// the first scroll view, then the nearest hit.
pub fn resolve_hits(
    mut hits: Vec<RaycastHit>,
    override_scroll_view_clicks: bool,
) -> Option<RaycastHit> {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if hits.len() > 1 && hits[0].is_container() {
        hits.remove(0);
    }

    if override_scroll_view_clicks {
        let mut current: Option<RaycastHit> = None;
        for hit in &hits {
            match hit.kind {
                SurfaceKind::Scrollbar => current = Some(*hit),
                SurfaceKind::ScrollView if current.is_none() => current = Some(*hit),
                _ => {}
            }
        }
        if current.is_some() {
            return current;
        }
    }

    hits.first().copied()
}

/// Everything a raycast pass needs to know about this tick, besides the hand itself
pub struct RaycastFrame<'a> {
    pub world: &'a World,
    pub raycaster: &'a dyn UiRaycaster,
    pub config: &'a HandUiConfig,
    pub head: &'a HeadPose,
}

/// Which point of the hand a pointer is projected through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastMode {
    /// From the shoulder through the index knuckle
    Knuckle,
    /// From the head through the index distal bone
    Tip,
}

impl RaycastMode {
    /// The mode a hand starts its tick in: fingertip if it was touching or about to touch
    pub fn for_state(state: InteractionState) -> Self {
        if state.is_touch_mode() {
            RaycastMode::Tip
        } else {
            RaycastMode::Knuckle
        }
    }

    /// The other mode, used when the first cast lands nowhere
    pub fn alternate(self) -> Self {
        match self {
            RaycastMode::Knuckle => RaycastMode::Tip,
            RaycastMode::Tip => RaycastMode::Knuckle,
        }
    }
}

/// Project a hand onto its event camera's screen and raycast the UI from there.
///
/// In [`RaycastMode::Tip`] the camera sits at the head and the ray goes through the index
/// distal bone. In [`RaycastMode::Knuckle`] the camera sits at the shoulder and the ray goes
/// through the index knuckle. The result is written to the slot's pointer.
pub fn raycast_hand(
    frame: &RaycastFrame,
    hand: &Hand,
    ray_origin: &RayOrigin,
    slot: &mut HandSlot,
    mode: RaycastMode,
    debug_context: &mut DebugContext,
) {
    let tip_raycast = mode == RaycastMode::Tip;
    let (camera_origin, finger_point) = if tip_raycast {
        (frame.head.position, hand.index_distal_center())
    } else {
        (ray_origin.origin, hand.index_knuckle())
    };

    let pointer = &mut slot.pointer;
    pointer.tip_raycast = tip_raycast;
    pointer.event_camera.place(camera_origin, ray_origin.direction);

    if frame.config.draw_debug {
        debug_context.draw(DebugShape::Sphere(camera_origin));
    }

    let projected = match pointer.event_camera.world_to_screen(finger_point) {
        Some(projected) => projected,
        None => {
            trace!("[HAND_UI] Finger is behind the event camera, no hit this pass");
            pointer.current_raycast = None;
            return;
        }
    };

    pointer.position = pointer
        .previous_position
        .lerp(projected, frame.config.screen_position_smoothing);
    pointer.delta = (pointer.position - pointer.previous_position) * frame.config.delta_scale;
    pointer.previous_position = pointer.position;

    let hits = frame
        .raycaster
        .raycast_all(frame.world, &pointer.event_camera, pointer.position);
    trace!(
        "[HAND_UI] {} raycast at {} hit {} surfaces",
        if tip_raycast { "Tip" } else { "Knuckle" },
        pointer.position,
        hits.len()
    );
    pointer.current_raycast = resolve_hits(hits, frame.config.override_scroll_view_clicks);
}

fn plane(global_from_surface: &Affine3A) -> (Vec3, Vec3) {
    let origin: Vec3 = global_from_surface.translation.into();
    let normal = global_from_surface.transform_vector3(Vec3::Z).normalize_or_zero();
    (origin, normal)
}

fn intersect_plane(origin: Vec3, direction: Vec3, plane_origin: Vec3, normal: Vec3) -> Option<f32> {
    let denominator = direction.dot(normal);
    if denominator.abs() < f32::EPSILON {
        return None;
    }
    Some((plane_origin - origin).dot(normal) / denominator)
}
