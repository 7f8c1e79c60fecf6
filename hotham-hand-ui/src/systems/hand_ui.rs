use glam::Vec3;
use log::debug;

use crate::{
    components::Hand,
    contexts::{
        DebugContext, DebugShape, EventContext, FeedbackContext, HandFrameContext, HandSlot,
        InteractionState, PinchContext, PointerContext, RayOrigin, RayOriginContext,
    },
    systems::{
        cursor::{update_cursor, update_cursor_color},
        event_dispatch::{dispatch_pointer_events, update_hover_distance},
        interaction::{apply_transition_feedback, classify, is_triggering},
        raycast::{raycast_hand, RaycastFrame, RaycastMode},
    },
};

/// Run one tick of hand UI for every hand slot.
///
/// Slots are processed in order. Each one is raycast and classified, retrying in the other
/// [`RaycastMode`] if the first attempt lands nowhere, then its feedback, events and cursor are
/// updated. Touching mode is only decided once every slot is done.
#[allow(clippy::too_many_arguments)]
pub fn hand_ui_system_inner(
    frame: &RaycastFrame,
    main_camera_position: Option<Vec3>,
    hand_frame_context: &HandFrameContext,
    ray_origin_context: &RayOriginContext,
    pinch_context: &PinchContext,
    pointer_context: &mut PointerContext,
    event_context: &mut EventContext,
    feedback_context: &mut FeedbackContext,
    debug_context: &mut DebugContext,
) {
    let config = frame.config;
    let world = frame.world;

    event_context.send_update_to_selected(world);

    let PointerContext {
        slots,
        warned_missing_camera,
    } = &mut *pointer_context;

    for (index, slot) in slots.iter_mut().enumerate() {
        let hand = match hand_frame_context.frame.hands.get(index) {
            Some(hand) => hand,
            None => {
                slot.cursor.visible = false;
                continue;
            }
        };

        let ray_origin = ray_origin_context.ray_origin(hand.handedness, config.shoulder_offset);
        if config.draw_debug {
            debug_context.draw(DebugShape::Sphere(ray_origin.origin));
            debug_context.draw(DebugShape::Ray(ray_origin.origin, ray_origin.direction * 5.));
        }

        slot.previous_state = slot.state;
        let mut pass = HandPass {
            frame,
            hand,
            ray_origin: &ray_origin,
            pinch_context,
            main_camera_position,
            warned_missing_camera: &mut *warned_missing_camera,
        };

        let mode = RaycastMode::for_state(slot.state);
        pass.run(slot, mode, debug_context);
        if slot.state == InteractionState::OffCanvas {
            pass.run(slot, mode.alternate(), debug_context);
        }

        if slot.state != slot.previous_state {
            debug!(
                "[HAND_UI] Hand {index} went from {:?} to {:?}",
                slot.previous_state, slot.state
            );
        }
        apply_transition_feedback(
            slot.previous_state,
            slot.state,
            slot.cursor.position,
            feedback_context,
        );

        let tip_distance = slot.cursor.tip_distance(hand.index_tip());
        update_hover_distance(world, slot, tip_distance);

        let triggering = is_triggering(
            hand,
            slot.state,
            &slot.cursor,
            pinch_context,
            config.pinching_threshold,
        );
        dispatch_pointer_events(
            world,
            index,
            slot,
            triggering,
            event_context,
            feedback_context,
        );

        update_cursor_color(&mut slot.cursor, slot.state, config);
    }

    event_context.set_touching_mode(pointer_context.any_touch_mode());
}

// One raycast and classification attempt for a hand
struct HandPass<'a> {
    frame: &'a RaycastFrame<'a>,
    hand: &'a Hand,
    ray_origin: &'a RayOrigin,
    pinch_context: &'a PinchContext,
    main_camera_position: Option<Vec3>,
    warned_missing_camera: &'a mut bool,
}

impl HandPass<'_> {
    fn run(&mut self, slot: &mut HandSlot, mode: RaycastMode, debug_context: &mut DebugContext) {
        let config = self.frame.config;
        raycast_hand(
            self.frame,
            self.hand,
            self.ray_origin,
            slot,
            mode,
            debug_context,
        );
        update_cursor(
            &mut slot.cursor,
            &slot.pointer,
            self.main_camera_position,
            config.normal_pointer_scale,
            self.warned_missing_camera,
        );

        // The state from before this pass decides how triggering is measured.
        let triggering = is_triggering(
            self.hand,
            slot.state,
            &slot.cursor,
            self.pinch_context,
            config.pinching_threshold,
        );
        slot.state = classify(
            slot.pointer.current_raycast.as_ref(),
            slot.cursor.tip_distance(self.hand.index_tip()),
            slot.pointer.tip_raycast,
            triggering,
            config.projective_to_tactile_transition_distance,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{
            hand::FingerType, EventHandlers, Finger, GlobalTransform, HandFrame, Handedness, Hmd,
            HoverDistance, Info, MainCamera, Parent, UiSurface,
        },
        config::HandUiConfig,
        contexts::{
            PointerCallback, SoundEffect, TouchModeListener, UiEventKind,
        },
        systems::{raycast::SurfaceRaycaster, tracking::get_head_pose},
        INDEX_FINGER,
    };
    use glam::Quat;
    use hecs::{Entity, World};
    use approx::assert_relative_eq;
    use crate::contexts::InteractionState::*;
    use std::{cell::RefCell, rc::Rc};

    struct TestScene {
        world: World,
        canvas: Entity,
        button: Entity,
        config: HandUiConfig,
        hand_frame_context: HandFrameContext,
        ray_origin_context: RayOriginContext,
        pinch_context: PinchContext,
        pointer_context: PointerContext,
        event_context: EventContext,
        feedback_context: FeedbackContext,
        debug_context: DebugContext,
    }

    impl TestScene {
        fn new() -> Self {
            let mut world = World::new();
            world.spawn((
                Hmd {},
                MainCamera {},
                GlobalTransform::from_translation([0., 1.6, 0.].into()),
            ));
            let canvas = world.spawn((
                Info::new("Canvas"),
                UiSurface::canvas([2., 1.].into()),
                GlobalTransform::from_translation([0., 1.4, -1.].into()),
            ));
            let button = world.spawn((
                Info::new("Button"),
                UiSurface::element([0.2, 0.2].into()),
                GlobalTransform::from_translation([0.15, 1.4, -1.].into()),
                Parent(canvas),
                EventHandlers::BUTTON | EventHandlers::BEGIN_DRAG | EventHandlers::DRAG,
                HoverDistance::default(),
            ));

            let config = HandUiConfig::default();
            Self {
                world,
                canvas,
                button,
                pointer_context: PointerContext::new(&config),
                config,
                hand_frame_context: Default::default(),
                ray_origin_context: Default::default(),
                pinch_context: Default::default(),
                event_context: Default::default(),
                feedback_context: Default::default(),
                debug_context: Default::default(),
            }
        }

        fn tick(&mut self, hands: Vec<Hand>) -> InteractionState {
            self.feedback_context.clear();
            self.event_context.clear();
            self.debug_context.clear();

            let mut source = move || HandFrame::new(hands.clone());
            self.hand_frame_context.update(&mut source);

            let head = get_head_pose(&self.world);
            self.ray_origin_context
                .update(&head, self.config.head_yaw_smoothing);
            self.pinch_context.update(&self.hand_frame_context.frame);

            let frame = RaycastFrame {
                world: &self.world,
                raycaster: &SurfaceRaycaster,
                config: &self.config,
                head: &head,
            };
            hand_ui_system_inner(
                &frame,
                Some(head.position),
                &self.hand_frame_context,
                &self.ray_origin_context,
                &self.pinch_context,
                &mut self.pointer_context,
                &mut self.event_context,
                &mut self.feedback_context,
                &mut self.debug_context,
            );

            self.pointer_context.slots[0].state
        }

        fn slot(&self) -> &HandSlot {
            &self.pointer_context.slots[0]
        }

        fn sounds(&self) -> Vec<SoundEffect> {
            self.feedback_context.sounds_this_frame.clone()
        }

        fn callbacks(&self) -> Vec<PointerCallback> {
            self.feedback_context
                .callbacks_this_frame
                .iter()
                .map(|(c, _)| *c)
                .collect()
        }

        fn events(&self) -> Vec<(UiEventKind, Entity)> {
            self.event_context
                .events_this_frame
                .iter()
                .map(|e| (e.kind, e.target))
                .collect()
        }
    }

    /// A right hand pointing forward, with its index knuckle and fingertip at the given points
    fn hand(knuckle: Vec3, tip: Vec3, pinch_distance: f32) -> Hand {
        let mut hand = Hand::new(1, Handedness::Right);
        hand.pinch_distance = pinch_distance;
        hand.fingers[INDEX_FINGER] = Finger::from_joints(
            FingerType::Index,
            [
                knuckle + Vec3::new(0., 0., 0.04),
                knuckle - Vec3::new(0., 0., 0.04),
                tip + Vec3::new(0., 0., 0.04),
                tip + Vec3::new(0., 0., 0.02),
                tip,
            ],
        );
        hand
    }

    const OPEN: f32 = 60.;
    const PINCHED: f32 = 10.;

    fn far_over_canvas(pinch_distance: f32) -> Hand {
        hand([0.3, 1.4, -0.3].into(), [0.3, 1.4, -0.4].into(), pinch_distance)
    }

    fn far_over_button(pinch_distance: f32) -> Hand {
        hand([0.15, 1.4, -0.3].into(), [0.15, 1.4, -0.4].into(), pinch_distance)
    }

    fn near_button() -> Hand {
        hand([0.15, 1.4, -0.85].into(), [0.15, 1.4, -0.95].into(), OPEN)
    }

    fn touching_button() -> Hand {
        hand([0.15, 1.4, -0.91].into(), [0.15, 1.4, -1.01].into(), OPEN)
    }

    fn pointing_away() -> Hand {
        hand([1.5, 1.4, -0.3].into(), [1.6, 1.4, -0.4].into(), OPEN)
    }

    #[test]
    pub fn test_far_hover_and_pinch_on_canvas() {
        let mut scene = TestScene::new();

        assert_eq!(scene.tick(vec![far_over_canvas(OPEN)]), OnCanvas);
        assert_eq!(
            scene.slot().pointer.current_target(),
            Some(scene.canvas)
        );
        assert!(scene.slot().cursor.visible);
        assert!(scene.sounds().is_empty());

        // Pinching on blank canvas misses.
        assert_eq!(scene.tick(vec![far_over_canvas(PINCHED)]), PinchingToCanvas);
        assert_eq!(scene.sounds(), vec![SoundEffect::Missed]);
        assert!(!scene.callbacks().contains(&PointerCallback::ClickDown));
        assert!(!scene.callbacks().contains(&PointerCallback::ClickUp));

        // Holding the pinch does nothing new.
        assert_eq!(scene.tick(vec![far_over_canvas(PINCHED)]), PinchingToCanvas);
        assert!(scene.sounds().is_empty());
    }

    #[test]
    pub fn test_far_hover_and_click_on_button() {
        let mut scene = TestScene::new();
        let button = scene.button;

        scene.tick(vec![far_over_canvas(OPEN)]);
        assert_eq!(scene.tick(vec![far_over_button(OPEN)]), OnElement);
        assert_eq!(scene.sounds(), vec![SoundEffect::Hover]);
        assert_eq!(scene.callbacks(), vec![PointerCallback::Hover]);
        assert_eq!(scene.events(), vec![(UiEventKind::PointerEnter, button)]);

        assert_eq!(scene.tick(vec![far_over_button(PINCHED)]), PinchingToElement);
        assert_eq!(scene.sounds(), vec![SoundEffect::Trigger]);
        assert_eq!(
            scene.callbacks(),
            vec![PointerCallback::ClickDown, PointerCallback::WhileClickHeld]
        );
        assert_eq!(
            scene.events(),
            vec![
                (UiEventKind::PointerDown, button),
                (UiEventKind::PointerClick, button),
                (UiEventKind::BeginDrag, button),
                (UiEventKind::Drag, button),
            ]
        );

        assert_eq!(scene.tick(vec![far_over_button(OPEN)]), OnElement);
        assert_eq!(scene.callbacks(), vec![PointerCallback::ClickUp]);
        assert_eq!(scene.events(), vec![(UiEventKind::PointerUp, button)]);
        assert_eq!(scene.slot().pointer.targets, Default::default());
    }

    #[test]
    pub fn test_touch_press_and_release() {
        let mut scene = TestScene::new();
        let button = scene.button;

        assert_eq!(scene.tick(vec![near_button()]), NearCanvas);
        assert!(scene.event_context.touching_mode);
        let hover_distance = scene.world.get::<&HoverDistance>(button).unwrap().distance;
        assert!(hover_distance.unwrap() > 0.);

        // Staying near projects through the fingertip.
        assert_eq!(scene.tick(vec![near_button()]), NearCanvas);
        assert!(scene.slot().pointer.tip_raycast);

        assert_eq!(scene.tick(vec![touching_button()]), TouchingElement);
        assert_eq!(scene.sounds(), vec![SoundEffect::Trigger]);
        assert!(scene.callbacks().contains(&PointerCallback::ClickDown));
        assert_eq!(scene.slot().pointer.targets.pressed, Some(button));
        assert_eq!(scene.slot().pointer.targets.dragging, Some(button));
        let hover_distance = scene.world.get::<&HoverDistance>(button).unwrap().distance;
        assert!(hover_distance.unwrap() < 0.);

        assert_eq!(scene.tick(vec![near_button()]), NearCanvas);
        assert_eq!(scene.callbacks(), vec![PointerCallback::ClickUp]);
        assert_eq!(scene.slot().pointer.targets.pressed, None);
        assert_eq!(scene.slot().pointer.targets.dragging, None);
        assert!(scene.events().contains(&(UiEventKind::PointerUp, button)));
    }

    #[test]
    pub fn test_retry_through_fingertip() {
        let mut scene = TestScene::new();
        scene.world.spawn((
            UiSurface::canvas([0.2, 0.2].into()),
            GlobalTransform::from_translation([-1.6, 1.6, -1.].into()),
        ));

        // The knuckle ray from the shoulder misses everything, but seen from the head the
        // fingertip is right in front of the small canvas.
        let hand = hand([-1.5, 1.0, -0.9].into(), [-1.5, 1.6, -0.95].into(), OPEN);
        assert_eq!(scene.tick(vec![hand]), NearCanvas);
        assert!(scene.slot().pointer.tip_raycast);
        assert!(scene.slot().cursor.visible);

        // Both passes miss.
        assert_eq!(scene.tick(vec![pointing_away()]), OffCanvas);
        assert!(scene.slot().pointer.current_raycast.is_none());
        assert!(!scene.slot().cursor.visible);
        assert!(!scene.event_context.touching_mode);
    }

    #[test]
    pub fn test_pulling_back_from_touch_keeps_hover() {
        let mut scene = TestScene::new();
        let button = scene.button;

        scene.tick(vec![far_over_button(OPEN)]);
        assert_eq!(scene.tick(vec![near_button()]), NearCanvas);
        assert_eq!(scene.tick(vec![near_button()]), NearCanvas);

        // The fingertip cast from the head now lands far from the finger, so the knuckle takes
        // over in the same tick and the button stays hovered.
        assert_eq!(scene.tick(vec![far_over_button(OPEN)]), OnElement);
        assert!(!scene.slot().pointer.tip_raycast);
        assert_eq!(scene.slot().pointer.current_target(), Some(button));
        assert!(scene.events().is_empty());
        assert!(scene.slot().cursor.visible);
        assert!(!scene.event_context.touching_mode);

        assert_eq!(scene.tick(vec![far_over_button(OPEN)]), OnElement);
        assert!(scene.events().is_empty());
    }

    #[test]
    pub fn test_missing_hand_keeps_slot() {
        let mut scene = TestScene::new();
        scene.config.number_of_hands = 2;
        scene.pointer_context = PointerContext::new(&scene.config);

        scene.tick(vec![far_over_button(OPEN), far_over_canvas(OPEN)]);
        assert_eq!(scene.pointer_context.slots[1].state, OnCanvas);
        assert!(scene.pointer_context.slots[1].cursor.visible);

        scene.tick(vec![far_over_button(OPEN)]);
        assert!(!scene.pointer_context.slots[1].cursor.visible);
        assert_eq!(scene.pointer_context.slots[1].state, OnCanvas);
        assert_eq!(scene.slot().state, OnElement);

        // No hands at all.
        scene.tick(vec![]);
        assert!(!scene.slot().cursor.visible);
        assert_eq!(scene.slot().state, OnElement);
    }

    struct Expander(Rc<RefCell<Vec<bool>>>);

    impl TouchModeListener for Expander {
        fn expand(&mut self) {
            self.0.borrow_mut().push(true);
        }

        fn retract(&mut self) {
            self.0.borrow_mut().push(false);
        }
    }

    #[test]
    pub fn test_touching_mode_edges() {
        let mut scene = TestScene::new();
        let edges = Rc::new(RefCell::new(Vec::new()));
        scene
            .event_context
            .add_touch_mode_listener(Box::new(Expander(edges.clone())));

        scene.tick(vec![far_over_button(OPEN)]);
        scene.tick(vec![near_button()]);
        scene.tick(vec![near_button()]);
        scene.tick(vec![touching_button()]);
        scene.tick(vec![pointing_away()]);
        scene.tick(vec![pointing_away()]);

        assert_eq!(*edges.borrow(), vec![true, false]);
    }

    #[test]
    pub fn test_selected_gets_updates() {
        let mut scene = TestScene::new();
        let field = scene.button;
        scene
            .world
            .insert_one(
                field,
                EventHandlers::POINTER_CLICK | EventHandlers::SELECT | EventHandlers::UPDATE_SELECTED,
            )
            .unwrap();

        scene.tick(vec![far_over_button(OPEN)]);
        scene.tick(vec![far_over_button(PINCHED)]);
        assert_eq!(scene.event_context.selected, Some(field));

        // Every tick after that starts with an update, whatever the hands are doing.
        scene.tick(vec![]);
        assert_eq!(scene.events(), vec![(UiEventKind::UpdateSelected, field)]);
    }

    #[test]
    pub fn test_debug_shapes() {
        let mut scene = TestScene::new();
        scene.config.draw_debug = true;

        scene.tick(vec![far_over_canvas(OPEN)]);
        let shoulder = Vec3::new(0.15, 1.4, 0.);
        match scene.debug_context.shapes_this_frame.as_slice() {
            [DebugShape::Sphere(a), DebugShape::Ray(b, direction), DebugShape::Sphere(camera)] => {
                assert_relative_eq!(*a, shoulder, epsilon = 1e-6);
                assert_relative_eq!(*b, shoulder, epsilon = 1e-6);
                assert_relative_eq!(*direction, Vec3::NEG_Z * 5., epsilon = 1e-6);
                assert_relative_eq!(*camera, shoulder, epsilon = 1e-6);
            }
            shapes => panic!("Unexpected shapes: {shapes:?}"),
        }

        scene.config.draw_debug = false;
        scene.tick(vec![far_over_canvas(OPEN)]);
        assert!(scene.debug_context.shapes_this_frame.is_empty());
    }

    #[test]
    pub fn test_shoulders_follow_head_yaw() {
        let mut scene = TestScene::new();
        let hmd = scene
            .world
            .query::<&Hmd>()
            .iter()
            .map(|(e, _)| e)
            .next()
            .unwrap();

        scene.tick(vec![]);
        scene
            .world
            .insert_one(
                hmd,
                GlobalTransform::from_rotation_translation(
                    Quat::from_rotation_y(1.),
                    [0., 1.6, 0.].into(),
                ),
            )
            .unwrap();
        scene.tick(vec![]);

        let head = get_head_pose(&scene.world);
        assert_relative_eq!(head.position, Vec3::new(0., 1.6, 0.));
        assert_relative_eq!(head.rotation, Quat::from_rotation_y(1.), epsilon = 1e-6);
        let (_, angle) = scene.ray_origin_context.smoothed_yaw.to_axis_angle();
        assert!(angle > 0.05 && angle < 0.15);
    }
}
