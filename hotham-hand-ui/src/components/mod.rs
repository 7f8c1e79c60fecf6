#![allow(missing_docs)]
pub mod event_handlers;
pub mod global_transform;
pub mod hand;
pub mod hmd;
pub mod hover_distance;
pub mod info;
pub mod parent;
pub mod ui_surface;

pub use event_handlers::EventHandlers;
pub use global_transform::GlobalTransform;
pub use hand::{Bone, BoneType, Finger, FingerType, Hand, HandFrame, Handedness};
pub use hmd::{Hmd, MainCamera};
pub use hover_distance::HoverDistance;
pub use info::Info;
pub use parent::Parent;
pub use ui_surface::{SurfaceKind, UiSurface};
