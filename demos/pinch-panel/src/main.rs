use std::{cell::RefCell, rc::Rc};

use hotham_hand_ui::{
    components::{
        hand::FingerType, EventHandlers, Finger, GlobalTransform, Hmd, HoverDistance, Info,
        MainCamera, Parent, UiSurface,
    },
    contexts::{PointerCallback, TouchModeListener, UiEventKind},
    glam::Vec3,
    hecs::{Entity, World},
    Hand, HandFrame, HandUi, HandUiBuilder, HandUiConfig, HandUiResult, Handedness,
    INDEX_FINGER,
};
use log::{error, info, LevelFilter};

const TICKS: usize = 100;
const OPEN: f32 = 60.;
const PINCHED: f32 = 8.;

pub fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    info!("[PINCH_PANEL] MAIN!");
    if let Err(e) = real_main() {
        error!("[PINCH_PANEL] Error running demo: {e:?}");
        std::process::exit(1);
    }
    info!("[PINCH_PANEL] FINISHED! Goodbye!");
}

pub fn real_main() -> HandUiResult<()> {
    let (world, button) = init();
    let hands = Rc::new(RefCell::new(Vec::new()));

    let source_hands = hands.clone();
    let mut hand_ui = HandUiBuilder::new()
        .config(HandUiConfig {
            number_of_hands: 1,
            ..Default::default()
        })
        .hand_source(move || HandFrame::new(source_hands.borrow().clone()))
        .build()?;

    hand_ui.register_touch_mode_listener(Box::new(PanelLogger));
    hand_ui.add_feedback_listener(PointerCallback::ClickDown, |position| {
        info!("[PINCH_PANEL] Click down at {position}")
    });

    let mut clicks = 0;
    for tick_number in 0..TICKS {
        *hands.borrow_mut() = vec![scripted_hand(tick_number)];
        tick(tick_number, &world, &mut hand_ui);

        clicks += hand_ui
            .event_context
            .events_this_frame
            .iter()
            .filter(|e| e.kind == UiEventKind::PointerClick && e.target == button)
            .count();
    }

    info!("[PINCH_PANEL] The button was clicked {clicks} times");
    Ok(())
}

fn init() -> (World, Entity) {
    let mut world = World::default();
    world.spawn((
        Info::new("Head"),
        Hmd {},
        MainCamera {},
        GlobalTransform::from_translation([0., 1.6, 0.].into()),
    ));

    let panel = world.spawn((
        Info::new("Panel"),
        UiSurface::canvas([2., 1.].into()),
        GlobalTransform::from_translation([0., 1.4, -1.].into()),
    ));

    let button = world.spawn((
        Info::new("Button"),
        UiSurface::element([0.2, 0.2].into()),
        GlobalTransform::from_translation([0.15, 1.4, -1.].into()),
        Parent(panel),
        EventHandlers::BUTTON | EventHandlers::DRAG | EventHandlers::SELECT,
        HoverDistance::default(),
    ));

    (world, button)
}

fn tick(tick_number: usize, world: &World, hand_ui: &mut HandUi) {
    hand_ui.update(world);

    let slot = match hand_ui.slot(0) {
        Some(slot) => slot,
        None => return,
    };
    info!(
        "[PINCH_PANEL] Tick {tick_number}: {:?}, cursor at {}",
        slot.state, slot.cursor.position
    );

    let feedback = &hand_ui.feedback_context;
    for sound in &feedback.sounds_this_frame {
        info!("[PINCH_PANEL]   Sound: {sound:?}");
    }
    for (callback, position) in &feedback.callbacks_this_frame {
        info!("[PINCH_PANEL]   Callback: {callback:?} at {position}");
    }
    for event in &hand_ui.event_context.events_this_frame {
        let name = world
            .get::<&Info>(event.target)
            .map(|i| i.name.clone())
            .unwrap_or_else(|_| format!("{:?}", event.target));
        info!("[PINCH_PANEL]   Event: {:?} -> {name}", event.kind);
    }
}

// Far hover from the panel onto the button, a pinch click, then a poke at the button.
fn scripted_hand(tick_number: usize) -> Hand {
    match tick_number {
        0..=19 => {
            let t = tick_number as f32 / 19.;
            let x = 0.5 + (0.15 - 0.5) * t;
            far_hand(x, OPEN)
        }
        20..=34 => far_hand(0.15, PINCHED),
        35..=44 => far_hand(0.15, OPEN),
        45..=79 => {
            let t = (tick_number - 45) as f32 / 34.;
            near_hand(-0.6 + (-1.01 + 0.6) * t)
        }
        _ => {
            let t = (tick_number - 80) as f32 / 19.;
            near_hand(-1.01 + (-0.9 + 1.01) * t)
        }
    }
}

fn far_hand(x: f32, pinch_distance: f32) -> Hand {
    pointing_hand([x, 1.4, -0.3].into(), [x, 1.4, -0.4].into(), pinch_distance)
}

fn near_hand(tip_z: f32) -> Hand {
    pointing_hand(
        [0.15, 1.4, tip_z + 0.1].into(),
        [0.15, 1.4, tip_z].into(),
        OPEN,
    )
}

fn pointing_hand(knuckle: Vec3, tip: Vec3, pinch_distance: f32) -> Hand {
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

struct PanelLogger;

impl TouchModeListener for PanelLogger {
    fn expand(&mut self) {
        info!("[PINCH_PANEL] A finger is close, expanding the panel");
    }

    fn retract(&mut self) {
        info!("[PINCH_PANEL] No fingers nearby, retracting the panel");
    }
}
