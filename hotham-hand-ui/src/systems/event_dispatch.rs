use hecs::World;
use log::debug;

use crate::{
    components::HoverDistance,
    contexts::{
        event_context::{describe, get_event_handler},
        EventContext, FeedbackContext, HandSlot, InteractionState, PointerCallback,
        PointerEventData, UiEventKind,
    },
};

/// Drive the UI's event handlers from a hand's pointer.
///
/// Presses happen on the tick a hand starts triggering while pointing at something, releases
/// on the tick it stops. Drags continue every tick in between.
pub fn dispatch_pointer_events(
    world: &World,
    hand: usize,
    slot: &mut HandSlot,
    triggering: bool,
    event_context: &mut EventContext,
    feedback_context: &mut FeedbackContext,
) {
    let target = match slot.state {
        InteractionState::OffCanvas => None,
        _ => slot.pointer.current_target(),
    };

    event_context.handle_pointer_exit_and_enter(world, hand, &mut slot.pointer, target);

    let pointer = &mut slot.pointer;
    if let Some(target) = target {
        if !pointer.targets.was_triggering && triggering {
            pointer.targets.was_triggering = true;
            let data = PointerEventData::from_pointer(hand, pointer);

            event_context.set_selected(world, None, data);
            pointer.press_position = pointer.position;
            pointer.press_raycast = pointer.current_raycast;

            // Click on press rather than release, so small targets are easier to hit.
            let handler = match event_context.execute_hierarchy(
                world,
                target,
                UiEventKind::PointerDown,
                data,
            ) {
                Some(handler) => {
                    event_context.execute(world, handler, UiEventKind::PointerClick, data);
                    Some(handler)
                }
                None => {
                    event_context.execute_hierarchy(world, target, UiEventKind::PointerClick, data)
                }
            };

            let pressed = handler.unwrap_or(target);
            if handler.is_some()
                && get_event_handler(world, pressed, UiEventKind::Select).is_some()
            {
                event_context.set_selected(world, Some(pressed), data);
            }

            debug!(
                "[HAND_UI] Hand {hand} pressed {}",
                describe(world, pressed)
            );
            event_context.execute(world, pressed, UiEventKind::BeginDrag, data);
            pointer.targets.pressed = Some(pressed);
            pointer.targets.dragging = Some(pressed);
        }
    }

    if pointer.targets.was_triggering && !triggering {
        pointer.targets.was_triggering = false;
        let data = PointerEventData::from_pointer(hand, pointer);

        if let Some(dragging) = pointer.targets.dragging.take() {
            event_context.execute(world, dragging, UiEventKind::EndDrag, data);
            if let Some(target) = target {
                if let Some(dropped_on) =
                    event_context.execute_hierarchy(world, target, UiEventKind::Drop, data)
                {
                    debug!(
                        "[HAND_UI] Hand {hand} dropped {} on {}",
                        describe(world, dragging),
                        describe(world, dropped_on)
                    );
                }
            }
        }

        if let Some(pressed) = pointer.targets.pressed.take() {
            debug!(
                "[HAND_UI] Hand {hand} released {}",
                describe(world, pressed)
            );
            event_context.execute(world, pressed, UiEventKind::PointerUp, data);
        }
    }

    if let Some(dragging) = pointer.targets.dragging {
        let data = PointerEventData::from_pointer(hand, pointer);
        event_context.execute(world, dragging, UiEventKind::Drag, data);
        feedback_context.invoke(PointerCallback::WhileClickHeld, slot.cursor.position);
    }
}

/// Tell whatever the pointer is over how far away the fingertip is, if it wants to know
pub fn update_hover_distance(world: &World, slot: &HandSlot, tip_distance: f32) {
    let target = match slot.pointer.current_target() {
        Some(target) => target,
        None => return,
    };

    if let Ok(mut hover_distance) = world.get::<&mut HoverDistance>(target) {
        hover_distance.distance = Some(tip_distance);
    }
}
