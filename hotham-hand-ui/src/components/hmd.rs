/// A marker component used to indicate the player's headset, or Head Mounted Display.
///
/// The [`super::GlobalTransform`] of the entity marked with this component is used as the head
/// pose: shoulders are estimated from it, and near rays are projected from it. If there is no
/// such entity, the head is assumed to be at the origin, looking forward.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hmd {}

/// A marker component for the camera the user sees the UI through.
///
/// Cursors are scaled by their distance from this camera so they stay a similar size on screen.
/// It is usually on the same entity as [`Hmd`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MainCamera {}
