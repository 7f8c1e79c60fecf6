use glam::{Affine3A, Quat, Vec2, Vec3, Vec4};
use hecs::Entity;

use crate::{camera::EventCamera, config::HandUiConfig, systems::raycast::RaycastHit};

/// What a hand is doing, decided afresh every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Pointing from afar at blank canvas
    #[default]
    OnCanvas,
    /// Pointing from afar at an element
    OnElement,
    /// Pinching from afar on blank canvas
    PinchingToCanvas,
    /// Pinching from afar on an element
    PinchingToElement,
    /// Fingertip close to a surface, but not pushing it
    NearCanvas,
    /// Fingertip pushed through blank canvas
    TouchingCanvas,
    /// Fingertip pushed through an element
    TouchingElement,
    /// Not pointing at anything
    OffCanvas,
}

impl InteractionState {
    /// Is the fingertip close enough to a surface that it's being used directly, rather than as
    /// a far pointer?
    pub fn is_touch_mode(&self) -> bool {
        matches!(
            self,
            InteractionState::NearCanvas
                | InteractionState::TouchingCanvas
                | InteractionState::TouchingElement
        )
    }
}

/// What a hand has pressed and is dragging
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressDragTarget {
    /// The entity that received the press: the press or click handler if one was found,
    /// otherwise whatever was hit
    pub pressed: Option<Entity>,
    /// The entity being dragged
    pub dragging: Option<Entity>,
    /// Was the hand triggering last tick?
    pub was_triggering: bool,
}

/// A hand's pointer, in the virtual screen space of its event camera
#[derive(Debug, Clone, PartialEq)]
pub struct PointerRecord {
    /// Where the pointer is on screen
    pub position: Vec2,
    /// How far the pointer moved since the last raycast pass, scaled by `delta_scale`
    pub delta: Vec2,
    /// Where the pointer was at the end of the last raycast pass
    pub previous_position: Vec2,
    /// What the pointer is over
    pub current_raycast: Option<RaycastHit>,
    /// Where the pointer was when it was last pressed
    pub press_position: Vec2,
    /// What the pointer was over when it was last pressed
    pub press_raycast: Option<RaycastHit>,
    /// Press and drag targets
    pub targets: PressDragTarget,
    /// The deepest entity the pointer has entered
    pub pointer_enter: Option<Entity>,
    /// Every entity the pointer is inside, deepest first
    pub hovered: Vec<Entity>,
    /// Was the last pass projected from the fingertip?
    pub tip_raycast: bool,
    /// The camera the last pass was projected through
    pub event_camera: EventCamera,
}

impl PointerRecord {
    /// Create a pointer at the middle of the screen
    pub fn new(event_camera: EventCamera) -> Self {
        let centre = event_camera.screen_centre();
        Self {
            position: centre,
            delta: Vec2::ZERO,
            previous_position: centre,
            current_raycast: None,
            press_position: Vec2::ZERO,
            press_raycast: None,
            targets: Default::default(),
            pointer_enter: None,
            hovered: Vec::new(),
            tip_raycast: false,
            event_camera,
        }
    }

    /// The entity the pointer is over, if any
    pub fn current_target(&self) -> Option<Entity> {
        self.current_raycast.as_ref().map(|h| h.entity)
    }
}

/// The sprite and line drawn for a hand. Derived from the state every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorVisual {
    /// Whether the cursor should be drawn
    pub visible: bool,
    /// Position in global space
    pub position: Vec3,
    /// Orientation in global space. Local +Z points out of the surface being pointed at
    pub rotation: Quat,
    /// Scale in global space
    pub scale: Vec3,
    /// RGBA color
    pub color: Vec4,
    /// Start and end of the line from the ray origin to the cursor
    pub line: [Vec3; 2],
}

impl Default for CursorVisual {
    fn default() -> Self {
        Self {
            visible: false,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            color: Vec4::ONE,
            line: [Vec3::ZERO; 2],
        }
    }
}

impl CursorVisual {
    /// Transform from cursor space to global space
    pub fn global_from_cursor(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Signed distance of `point` in front of the cursor. Positive on the side the surface
    /// faces, negative once the point has pushed through it.
    pub fn tip_distance(&self, point: Vec3) -> f32 {
        let cursor_from_global = self.global_from_cursor().inverse();
        cursor_from_global.transform_point3(point).z * self.scale.z
    }
}

/// Everything the module remembers about one hand slot between ticks
#[derive(Debug, Clone, PartialEq)]
pub struct HandSlot {
    /// State decided this tick
    pub state: InteractionState,
    /// State decided last tick
    pub previous_state: InteractionState,
    /// The slot's pointer
    pub pointer: PointerRecord,
    /// The slot's cursor
    pub cursor: CursorVisual,
}

impl HandSlot {
    /// Create an empty slot
    pub fn new(event_camera: EventCamera) -> Self {
        Self {
            state: Default::default(),
            previous_state: Default::default(),
            pointer: PointerRecord::new(event_camera),
            cursor: Default::default(),
        }
    }
}

/// Per-hand state, addressed by slot. Slot `n` processes the `n`th hand of each frame.
///
/// Slots are never reset when a hand is lost, so a hand that comes back picks up where the
/// slot left off.
#[derive(Debug, Clone)]
pub struct PointerContext {
    /// One slot per configured hand
    pub slots: Vec<HandSlot>,
    /// Set once the "no main camera" warning has been logged
    pub warned_missing_camera: bool,
}

impl PointerContext {
    /// Allocate a slot for every hand in the config
    pub fn new(config: &HandUiConfig) -> Self {
        let event_camera = EventCamera::new(&config.event_camera);
        Self {
            slots: vec![HandSlot::new(event_camera); config.number_of_hands],
            warned_missing_camera: false,
        }
    }

    /// Is any hand touching, or about to touch, a surface?
    pub fn any_touch_mode(&self) -> bool {
        self.slots.iter().any(|s| s.state.is_touch_mode())
    }
}

impl Default for PointerContext {
    fn default() -> Self {
        PointerContext::new(&Default::default())
    }
}
