#![allow(missing_docs)]
pub mod cursor;
pub mod event_dispatch;
pub mod hand_ui;
pub mod interaction;
pub mod raycast;
pub mod tracking;

pub use cursor::{lerp_color, update_cursor, update_cursor_color};
pub use event_dispatch::{dispatch_pointer_events, update_hover_distance};
pub use hand_ui::hand_ui_system_inner;
pub use interaction::{apply_transition_feedback, classify, is_triggering};
pub use raycast::{
    raycast_hand, resolve_hits, RaycastFrame, RaycastHit, RaycastMode, SurfaceRaycaster,
    UiRaycaster,
};
pub use tracking::{get_head_pose, get_main_camera_position};
