/// An optional capability for UI entities that react to how far away the fingertip is,
/// eg. buttons that "pop up" as the finger approaches.
///
/// Each tick a hand points at an entity with this component, `distance` is set to the signed
/// distance of the fingertip in front of the surface. Negative values mean the fingertip has
/// pushed through.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverDistance {
    /// The most recent fingertip distance, if a hand has pointed at this entity
    pub distance: Option<f32>,
}
