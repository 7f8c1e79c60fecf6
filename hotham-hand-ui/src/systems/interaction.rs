use glam::Vec3;

use crate::{
    components::Hand,
    contexts::{
        CursorVisual, FeedbackContext, InteractionState, PinchContext, PointerCallback,
        SoundEffect,
    },
    systems::raycast::RaycastHit,
};

/// Is the hand "clicking"?
///
/// An installed pinch detector that reports a pinch always wins. Otherwise, in a touch state
/// the fingertip has to have pushed through the cursor's surface; in any other state the thumb
/// and index tips have to be closer than `pinching_threshold`.
pub fn is_triggering(
    hand: &Hand,
    state: InteractionState,
    cursor: &CursorVisual,
    pinch_context: &PinchContext,
    pinching_threshold: f32,
) -> bool {
    if pinch_context.is_pinching(hand.handedness) == Some(true) {
        return true;
    }

    if state.is_touch_mode() {
        return cursor.tip_distance(hand.index_tip()) < 0.;
    }

    hand.pinch_distance < pinching_threshold
}

/// Decide which state a hand is in, given what its pointer hit.
///
/// `tip_distance` is how far the fingertip is in front of the cursor, and `tip_raycast` is
/// whether the pointer was projected through the fingertip. A fingertip ray that only finds
/// something far away is rejected.
pub fn classify(
    hit: Option<&RaycastHit>,
    tip_distance: f32,
    tip_raycast: bool,
    triggering: bool,
    transition_distance: f32,
) -> InteractionState {
    let hit = match hit {
        Some(hit) => hit,
        None => return InteractionState::OffCanvas,
    };

    if tip_distance < transition_distance {
        return match (triggering, hit.is_container()) {
            (false, _) => InteractionState::NearCanvas,
            (true, false) => InteractionState::TouchingElement,
            (true, true) => InteractionState::TouchingCanvas,
        };
    }

    if tip_raycast {
        return InteractionState::OffCanvas;
    }

    match (triggering, hit.is_container()) {
        (false, false) => InteractionState::OnElement,
        (false, true) => InteractionState::OnCanvas,
        (true, false) => InteractionState::PinchingToElement,
        (true, true) => InteractionState::PinchingToCanvas,
    }
}

/// Play the sounds and fire the callbacks for a change of state. Unchanged states, and changes
/// not listed here, do nothing.
pub fn apply_transition_feedback(
    previous: InteractionState,
    current: InteractionState,
    cursor_position: Vec3,
    feedback_context: &mut FeedbackContext,
) {
    use InteractionState::*;

    match (previous, current) {
        (OnCanvas, OnElement) => {
            feedback_context.play_one_shot(SoundEffect::Hover);
            feedback_context.invoke(PointerCallback::Hover, cursor_position);
        }
        (OnCanvas, PinchingToCanvas) | (NearCanvas, TouchingCanvas) => {
            feedback_context.play_one_shot(SoundEffect::Missed);
        }
        (OnElement, OnCanvas) => {
            feedback_context.play_one_shot(SoundEffect::Hover);
        }
        (OnElement, PinchingToElement) | (NearCanvas, TouchingElement) => {
            feedback_context.play_one_shot(SoundEffect::Trigger);
            feedback_context.invoke(PointerCallback::ClickDown, cursor_position);
        }
        (PinchingToElement, OnElement)
        | (PinchingToElement, OnCanvas)
        | (TouchingElement, NearCanvas) => {
            feedback_context.invoke(PointerCallback::ClickUp, cursor_position);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{Handedness, SurfaceKind},
        contexts::DistancePinchDetector,
    };
    use glam::{Affine3A, Vec2};
    use crate::contexts::InteractionState::*;
    use hecs::Entity;

    const ALL_STATES: [InteractionState; 8] = [
        OnCanvas,
        OnElement,
        PinchingToCanvas,
        PinchingToElement,
        NearCanvas,
        TouchingCanvas,
        TouchingElement,
        OffCanvas,
    ];

    fn hit(kind: SurfaceKind) -> RaycastHit {
        RaycastHit {
            entity: Entity::DANGLING,
            kind,
            distance: 1.,
            world_position: Vec3::ZERO,
            global_from_surface: Affine3A::IDENTITY,
            size: Vec2::ONE,
            depth: 0,
        }
    }

    #[test]
    pub fn test_classify() {
        let canvas = hit(SurfaceKind::Canvas);
        let element = hit(SurfaceKind::Element);
        let near = 0.05;
        let far = 0.5;

        assert_eq!(classify(None, near, true, true, 0.12), OffCanvas);
        assert_eq!(classify(None, far, false, false, 0.12), OffCanvas);

        assert_eq!(classify(Some(&element), near, true, false, 0.12), NearCanvas);
        assert_eq!(classify(Some(&element), -0.01, true, true, 0.12), TouchingElement);
        assert_eq!(classify(Some(&canvas), -0.01, true, true, 0.12), TouchingCanvas);

        assert_eq!(classify(Some(&canvas), far, false, false, 0.12), OnCanvas);
        assert_eq!(classify(Some(&element), far, false, false, 0.12), OnElement);
        assert_eq!(classify(Some(&canvas), far, false, true, 0.12), PinchingToCanvas);
        assert_eq!(classify(Some(&element), far, false, true, 0.12), PinchingToElement);

        // A fingertip ray that only finds something far away.
        assert_eq!(classify(Some(&element), far, true, false, 0.12), OffCanvas);

        // Scrollbars and scroll views are elements.
        assert_eq!(
            classify(Some(&hit(SurfaceKind::Scrollbar)), far, false, false, 0.12),
            OnElement
        );
    }

    #[test]
    pub fn test_is_triggering() {
        let mut hand = Hand::new(0, Handedness::Right);
        hand.pinch_distance = 10.;
        let cursor = CursorVisual::default();
        let mut pinch_context = PinchContext::default();

        // Far: raw pinch distance.
        assert!(is_triggering(&hand, OnElement, &cursor, &pinch_context, 20.));
        assert!(!is_triggering(&hand, OnElement, &cursor, &pinch_context, 5.));

        // Touch: the fingertip (at the origin, on the cursor's plane) hasn't pushed through.
        assert!(!is_triggering(&hand, NearCanvas, &cursor, &pinch_context, 20.));
        let pushed = CursorVisual {
            position: Vec3::new(0., 0., 0.01),
            ..Default::default()
        };
        assert!(is_triggering(&hand, NearCanvas, &pushed, &pinch_context, 20.));

        // A detector that says pinching wins everywhere.
        let mut detector = DistancePinchDetector::new(50., 60.);
        crate::contexts::PinchDetector::update(&mut detector, &hand);
        pinch_context.set_detector(Handedness::Right, Box::new(detector));
        assert!(is_triggering(&hand, NearCanvas, &cursor, &pinch_context, 20.));

        // A detector that says not pinching falls through to the usual tests.
        pinch_context.set_detector(Handedness::Right, Box::new(DistancePinchDetector::new(1., 2.)));
        assert!(is_triggering(&hand, OnElement, &cursor, &pinch_context, 20.));
        assert!(!is_triggering(&hand, NearCanvas, &cursor, &pinch_context, 20.));
    }

    fn feedback_for(
        previous: InteractionState,
        current: InteractionState,
    ) -> (Vec<SoundEffect>, Vec<PointerCallback>) {
        let mut feedback_context = FeedbackContext::default();
        apply_transition_feedback(previous, current, Vec3::ONE, &mut feedback_context);
        (
            feedback_context.sounds_this_frame.clone(),
            feedback_context
                .callbacks_this_frame
                .iter()
                .map(|(c, _)| *c)
                .collect(),
        )
    }

    #[test]
    pub fn test_transition_feedback() {
        use PointerCallback::*;

        assert_eq!(
            feedback_for(OnCanvas, OnElement),
            (vec![SoundEffect::Hover], vec![Hover])
        );
        assert_eq!(
            feedback_for(OnCanvas, PinchingToCanvas),
            (vec![SoundEffect::Missed], vec![])
        );
        assert_eq!(feedback_for(OnElement, OnCanvas), (vec![SoundEffect::Hover], vec![]));
        assert_eq!(
            feedback_for(OnElement, PinchingToElement),
            (vec![SoundEffect::Trigger], vec![ClickDown])
        );
        assert_eq!(feedback_for(PinchingToElement, OnElement), (vec![], vec![ClickUp]));
        assert_eq!(feedback_for(PinchingToElement, OnCanvas), (vec![], vec![ClickUp]));
        assert_eq!(
            feedback_for(NearCanvas, TouchingElement),
            (vec![SoundEffect::Trigger], vec![ClickDown])
        );
        assert_eq!(
            feedback_for(NearCanvas, TouchingCanvas),
            (vec![SoundEffect::Missed], vec![])
        );
        assert_eq!(feedback_for(TouchingElement, NearCanvas), (vec![], vec![ClickUp]));

        // Nothing for unchanged states, or for pairs that aren't listed.
        for state in ALL_STATES {
            assert_eq!(feedback_for(state, state), (vec![], vec![]));
        }
        assert_eq!(feedback_for(PinchingToElement, PinchingToCanvas), (vec![], vec![]));
        assert_eq!(feedback_for(OffCanvas, OnElement), (vec![], vec![]));
        assert_eq!(feedback_for(TouchingCanvas, NearCanvas), (vec![], vec![]));
    }

    #[test]
    pub fn test_classification_is_idempotent() {
        let element = hit(SurfaceKind::Element);
        for tip_raycast in [false, true] {
            for triggering in [false, true] {
                for distance in [-0.01, 0.05, 0.5] {
                    let first = classify(Some(&element), distance, tip_raycast, triggering, 0.12);
                    let second = classify(Some(&element), distance, tip_raycast, triggering, 0.12);
                    assert_eq!(first, second);
                    assert_eq!(feedback_for(first, second), (vec![], vec![]));
                }
            }
        }
    }
}
