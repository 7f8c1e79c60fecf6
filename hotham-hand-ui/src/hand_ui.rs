use hecs::World;
use log::{error, info};

use crate::{
    components::Handedness,
    config::HandUiConfig,
    contexts::{
        DebugContext, EventContext, FeedbackContext, HandFrameContext, HandFrameSource, HandSlot,
        InteractionState, PinchContext, PinchDetector, PointerCallback, PointerContext,
        RayOriginContext, TouchModeListener,
    },
    systems::{
        get_head_pose, get_main_camera_position, hand_ui_system_inner, RaycastFrame,
        SurfaceRaycaster, UiRaycaster,
    },
    HandUiError, HandUiResult,
};

/// Builder for [`HandUi`].
#[derive(Default)]
pub struct HandUiBuilder {
    config: Option<HandUiConfig>,
    hand_source: Option<Box<dyn HandFrameSource>>,
    raycaster: Option<Box<dyn UiRaycaster>>,
    pinch_detectors: Vec<(Handedness, Box<dyn PinchDetector>)>,
}

impl HandUiBuilder {
    /// Create a `HandUiBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Use this configuration instead of the default one
    pub fn config(&mut self, config: HandUiConfig) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Read hands from this source each tick
    pub fn hand_source(&mut self, source: impl HandFrameSource + 'static) -> &mut Self {
        self.hand_source = Some(Box::new(source));
        self
    }

    /// Resolve pointers against the UI with this raycaster instead of [`SurfaceRaycaster`]
    pub fn raycaster(&mut self, raycaster: impl UiRaycaster + 'static) -> &mut Self {
        self.raycaster = Some(Box::new(raycaster));
        self
    }

    /// Install a pinch detector for one hand
    pub fn pinch_detector(
        &mut self,
        handedness: Handedness,
        detector: Box<dyn PinchDetector>,
    ) -> &mut Self {
        self.pinch_detectors.push((handedness, detector));
        self
    }

    /// Build the `HandUi`.
    ///
    /// An invalid configuration is an error. A missing hand source is not: the module is built
    /// disabled and the problem is logged.
    pub fn build(&mut self) -> HandUiResult<HandUi> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;

        let hand_source = self.hand_source.take();
        let enabled = hand_source.is_some();
        if !enabled {
            error!("[HAND_UI] {}, hand UI is disabled", HandUiError::MissingHandSource);
        }

        let mut pinch_context = PinchContext::default();
        for (handedness, detector) in self.pinch_detectors.drain(..) {
            pinch_context.set_detector(handedness, detector);
        }

        info!(
            "[HAND_UI] Hand UI ready with {} hand slots",
            config.number_of_hands
        );

        Ok(HandUi {
            pointer_context: PointerContext::new(&config),
            config,
            hand_source,
            raycaster: self
                .raycaster
                .take()
                .unwrap_or_else(|| Box::new(SurfaceRaycaster)),
            enabled,
            hand_frame_context: Default::default(),
            ray_origin_context: Default::default(),
            pinch_context,
            event_context: Default::default(),
            feedback_context: Default::default(),
            debug_context: Default::default(),
        })
    }
}

/// Turns tracked hands into pointer events, once per tick.
///
/// The contexts are public so that applications can read what happened this tick (events,
/// sounds, callbacks, cursors, debug shapes) straight after calling [`HandUi::update`].
pub struct HandUi {
    config: HandUiConfig,
    hand_source: Option<Box<dyn HandFrameSource>>,
    raycaster: Box<dyn UiRaycaster>,
    enabled: bool,
    /// The hands seen this tick
    pub hand_frame_context: HandFrameContext,
    /// Smoothed head yaw, used to place the shoulders
    pub ray_origin_context: RayOriginContext,
    /// Optional per-hand pinch detectors
    pub pinch_context: PinchContext,
    /// Per-hand pointers, states and cursors
    pub pointer_context: PointerContext,
    /// Events sent this tick, plus selection and touching mode
    pub event_context: EventContext,
    /// Sounds and callbacks fired this tick
    pub feedback_context: FeedbackContext,
    /// Debug shapes recorded this tick
    pub debug_context: DebugContext,
}

impl HandUi {
    /// Run one tick against the UI in `world`. Does nothing if the module is disabled.
    pub fn update(&mut self, world: &World) {
        if !self.enabled {
            return;
        }

        self.feedback_context.clear();
        self.event_context.clear();
        self.debug_context.clear();

        let hand_source = match self.hand_source.as_mut() {
            Some(hand_source) => hand_source,
            None => return,
        };
        self.hand_frame_context.update(hand_source.as_mut());

        let head = get_head_pose(world);
        let main_camera_position = get_main_camera_position(world);
        self.ray_origin_context
            .update(&head, self.config.head_yaw_smoothing);
        self.pinch_context.update(&self.hand_frame_context.frame);

        let frame = RaycastFrame {
            world,
            raycaster: self.raycaster.as_ref(),
            config: &self.config,
            head: &head,
        };
        hand_ui_system_inner(
            &frame,
            main_camera_position,
            &self.hand_frame_context,
            &self.ray_origin_context,
            &self.pinch_context,
            &mut self.pointer_context,
            &mut self.event_context,
            &mut self.feedback_context,
            &mut self.debug_context,
        );
    }

    /// Is the module running? It is disabled when built without a hand source.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The configuration in use
    pub fn config(&self) -> &HandUiConfig {
        &self.config
    }

    /// Get a hand slot by index
    pub fn slot(&self, index: usize) -> Option<&HandSlot> {
        self.pointer_context.slots.get(index)
    }

    /// Get the interaction state of a hand slot by index
    pub fn state(&self, index: usize) -> Option<InteractionState> {
        self.slot(index).map(|s| s.state)
    }

    /// Is any hand touching, or about to touch, a surface?
    pub fn touching_mode(&self) -> bool {
        self.event_context.touching_mode
    }

    /// Be told when touching mode starts and stops
    pub fn register_touch_mode_listener(&mut self, listener: Box<dyn TouchModeListener>) {
        self.event_context.add_touch_mode_listener(listener);
    }

    /// Be called with the cursor position whenever `callback` fires
    pub fn add_feedback_listener(
        &mut self,
        callback: PointerCallback,
        listener: impl FnMut(glam::Vec3) + 'static,
    ) {
        self.feedback_context.add_listener(callback, listener);
    }
}

impl std::fmt::Debug for HandUi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandUi")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("has_hand_source", &self.hand_source.is_some())
            .field("pointer_context", &self.pointer_context)
            .field("event_context", &self.event_context)
            .finish()
    }
}
