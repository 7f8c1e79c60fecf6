use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info};

use crate::{
    components::{EventHandlers, Info, Parent},
    contexts::pointer_context::PointerRecord,
};

/// A UI event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    PointerEnter,
    PointerExit,
    PointerDown,
    PointerUp,
    PointerClick,
    BeginDrag,
    Drag,
    EndDrag,
    Drop,
    Select,
    Deselect,
    UpdateSelected,
}

impl UiEventKind {
    /// The handler an entity must declare to receive this event
    pub fn handler(&self) -> EventHandlers {
        match self {
            UiEventKind::PointerEnter => EventHandlers::POINTER_ENTER,
            UiEventKind::PointerExit => EventHandlers::POINTER_EXIT,
            UiEventKind::PointerDown => EventHandlers::POINTER_DOWN,
            UiEventKind::PointerUp => EventHandlers::POINTER_UP,
            UiEventKind::PointerClick => EventHandlers::POINTER_CLICK,
            UiEventKind::BeginDrag => EventHandlers::BEGIN_DRAG,
            UiEventKind::Drag => EventHandlers::DRAG,
            UiEventKind::EndDrag => EventHandlers::END_DRAG,
            UiEventKind::Drop => EventHandlers::DROP,
            UiEventKind::Select => EventHandlers::SELECT,
            UiEventKind::Deselect => EventHandlers::DESELECT,
            UiEventKind::UpdateSelected => EventHandlers::UPDATE_SELECTED,
        }
    }
}

/// An event delivered to an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiEvent {
    /// The hand slot that caused the event. Selection updates don't come from a hand
    pub hand: Option<usize>,
    /// What happened
    pub kind: UiEventKind,
    /// The entity that handled it
    pub target: Entity,
    /// Pointer position on the virtual screen
    pub position: Vec2,
    /// Pointer delta on the virtual screen
    pub delta: Vec2,
}

/// Where an event came from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventData {
    /// The hand slot, if any
    pub hand: Option<usize>,
    /// Pointer position on the virtual screen
    pub position: Vec2,
    /// Pointer delta on the virtual screen
    pub delta: Vec2,
}

impl PointerEventData {
    /// Event data for a hand's pointer
    pub fn from_pointer(hand: usize, pointer: &PointerRecord) -> Self {
        Self {
            hand: Some(hand),
            position: pointer.position,
            delta: pointer.delta,
        }
    }
}

/// Something that wants to know when hands start or stop touching the UI, eg. a panel that
/// spreads its buttons out for fingers.
pub trait TouchModeListener {
    /// A hand came close to a surface, and nothing else was close already
    fn expand(&mut self);
    /// No hand is close to any surface any more
    fn retract(&mut self);
}

/// Delivers UI events, and remembers which entity is selected.
///
/// Delivered events are recorded in `events_this_frame` for the application to act on.
#[derive(Default)]
pub struct EventContext {
    /// Events delivered this tick, in order
    pub events_this_frame: Vec<UiEvent>,
    /// The selected entity
    pub selected: Option<Entity>,
    /// Is any hand touching, or about to touch, a surface?
    pub touching_mode: bool,
    touch_mode_listeners: Vec<Box<dyn TouchModeListener>>,
}

impl EventContext {
    /// Deliver an event to `target`, if it handles it. Returns whether it was delivered.
    pub fn execute(
        &mut self,
        world: &World,
        target: Entity,
        kind: UiEventKind,
        data: PointerEventData,
    ) -> bool {
        if !handles(world, target, kind) {
            return false;
        }

        self.events_this_frame.push(UiEvent {
            hand: data.hand,
            kind,
            target,
            position: data.position,
            delta: data.delta,
        });
        true
    }

    /// Deliver an event to the first entity from `target` up that handles it, and return that
    /// entity.
    pub fn execute_hierarchy(
        &mut self,
        world: &World,
        target: Entity,
        kind: UiEventKind,
        data: PointerEventData,
    ) -> Option<Entity> {
        let handler = get_event_handler(world, target, kind)?;
        self.execute(world, handler, kind, data);
        Some(handler)
    }

    /// Change the selected entity, sending deselect and select as needed
    pub fn set_selected(&mut self, world: &World, entity: Option<Entity>, data: PointerEventData) {
        if self.selected == entity {
            return;
        }

        if let Some(previous) = self.selected.take() {
            self.execute(world, previous, UiEventKind::Deselect, data);
        }

        self.selected = entity;
        if let Some(entity) = entity {
            debug!("[HAND_UI] Selected {}", describe(world, entity));
            self.execute(world, entity, UiEventKind::Select, data);
        }
    }

    /// Send the per-tick update to the selected entity, if there is one
    pub fn send_update_to_selected(&mut self, world: &World) -> bool {
        match self.selected {
            Some(selected) => self.execute(
                world,
                selected,
                UiEventKind::UpdateSelected,
                Default::default(),
            ),
            None => false,
        }
    }

    /// Move a pointer onto `new_target`: everything it has left gets an exit, everything it
    /// has newly entered gets an enter. Entities under both the old and new target are left
    /// alone.
    pub fn handle_pointer_exit_and_enter(
        &mut self,
        world: &World,
        hand: usize,
        pointer: &mut PointerRecord,
        new_target: Option<Entity>,
    ) {
        let data = PointerEventData::from_pointer(hand, pointer);

        let new_target = match (new_target, pointer.pointer_enter) {
            (Some(new_target), Some(_)) => new_target,
            (Some(new_target), None) => {
                for entity in ancestors(world, new_target) {
                    self.execute(world, entity, UiEventKind::PointerEnter, data);
                    pointer.hovered.push(entity);
                }
                pointer.pointer_enter = Some(new_target);
                return;
            }
            (None, _) => {
                for entity in pointer.hovered.drain(..) {
                    self.execute(world, entity, UiEventKind::PointerExit, data);
                }
                pointer.pointer_enter = None;
                return;
            }
        };

        if pointer.pointer_enter == Some(new_target) {
            return;
        }

        let new_chain = ancestors(world, new_target);
        let common_root = pointer
            .hovered
            .iter()
            .copied()
            .find(|e| new_chain.contains(e));

        // Leave everything below the common root.
        let mut still_hovered = Vec::new();
        let mut below_root = true;
        for entity in pointer.hovered.drain(..) {
            if Some(entity) == common_root {
                below_root = false;
            }
            if below_root {
                self.execute(world, entity, UiEventKind::PointerExit, data);
            } else {
                still_hovered.push(entity);
            }
        }

        // Enter everything from the new target up to the common root.
        let entered: Vec<Entity> = new_chain
            .into_iter()
            .take_while(|e| Some(*e) != common_root)
            .collect();
        for entity in &entered {
            self.execute(world, *entity, UiEventKind::PointerEnter, data);
        }

        pointer.hovered = entered;
        pointer.hovered.append(&mut still_hovered);
        pointer.pointer_enter = Some(new_target);
    }

    /// Register something to be told when touching mode starts or stops
    pub fn add_touch_mode_listener(&mut self, listener: Box<dyn TouchModeListener>) {
        self.touch_mode_listeners.push(listener);
    }

    /// Update touching mode, notifying listeners if it changed
    pub fn set_touching_mode(&mut self, touching_mode: bool) {
        if touching_mode == self.touching_mode {
            return;
        }

        self.touching_mode = touching_mode;
        if touching_mode {
            info!("[HAND_UI] Touching mode started");
            self.touch_mode_listeners.iter_mut().for_each(|l| l.expand());
        } else {
            info!("[HAND_UI] Touching mode finished");
            self.touch_mode_listeners
                .iter_mut()
                .for_each(|l| l.retract());
        }
    }

    /// Forget the previous tick's events
    pub fn clear(&mut self) {
        self.events_this_frame.clear();
    }
}

impl std::fmt::Debug for EventContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventContext")
            .field("events_this_frame", &self.events_this_frame)
            .field("selected", &self.selected)
            .field("touching_mode", &self.touching_mode)
            .field("touch_mode_listeners", &self.touch_mode_listeners.len())
            .finish()
    }
}

/// Find the first entity, starting at `target` and walking up its parents, that handles `kind`
pub fn get_event_handler(world: &World, target: Entity, kind: UiEventKind) -> Option<Entity> {
    ancestors(world, target)
        .into_iter()
        .find(|e| handles(world, *e, kind))
}

/// `entity` followed by its parent, grandparent and so on
pub fn ancestors(world: &World, entity: Entity) -> Vec<Entity> {
    let mut chain = vec![entity];
    let mut current = entity;
    while let Ok(parent) = world.get::<&Parent>(current) {
        let parent = parent.0;
        if chain.contains(&parent) {
            break;
        }
        chain.push(parent);
        current = parent;
    }
    chain
}

/// A human readable name for an entity, for log messages
pub fn describe(world: &World, entity: Entity) -> String {
    match world.get::<&Info>(entity) {
        Ok(info) => format!("{} ({entity:?})", info.name),
        Err(_) => format!("{entity:?}"),
    }
}

fn handles(world: &World, entity: Entity, kind: UiEventKind) -> bool {
    world
        .get::<&EventHandlers>(entity)
        .map(|h| h.contains(kind.handler()))
        .unwrap_or(false)
}
