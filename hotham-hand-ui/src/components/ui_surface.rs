use glam::Vec2;

/// What sort of surface this is. Decides whether pointing at it counts as pointing at "blank
/// canvas" or at something interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// A bare container, eg. the background of a panel
    Canvas,
    /// Anything interactive: buttons, sliders, text fields..
    Element,
    /// The bar of a scroll view
    Scrollbar,
    /// A scrollable region
    ScrollView,
}

/// A component added to an entity to make it a flat, rectangular UI surface that hands can
/// point at.
///
/// The surface lies in the XY plane of the entity's [`super::GlobalTransform`], centred on its
/// origin, and faces +Z. Surfaces are only hit from the front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiSurface {
    /// Width and height of the surface, in metres
    pub size: Vec2,
    /// What sort of surface this is
    pub kind: SurfaceKind,
    /// Whether rays can hit this surface at all
    pub raycast_target: bool,
}

impl UiSurface {
    /// Shortcut helper to create a bare container
    pub fn canvas(size: Vec2) -> Self {
        Self {
            size,
            kind: SurfaceKind::Canvas,
            raycast_target: true,
        }
    }

    /// Shortcut helper to create an interactive element
    pub fn element(size: Vec2) -> Self {
        Self {
            size,
            kind: SurfaceKind::Element,
            raycast_target: true,
        }
    }
}
