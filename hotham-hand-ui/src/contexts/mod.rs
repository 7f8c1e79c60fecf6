#![allow(missing_docs)]
pub mod debug_context;
pub mod event_context;
pub mod feedback_context;
pub mod hand_frame_context;
pub mod pinch_context;
pub mod pointer_context;
pub mod ray_origin_context;

pub use debug_context::{DebugContext, DebugShape};
pub use event_context::{
    EventContext, PointerEventData, TouchModeListener, UiEvent, UiEventKind,
};
pub use feedback_context::{FeedbackContext, PointerCallback, SoundEffect};
pub use hand_frame_context::{HandFrameContext, HandFrameSource};
pub use pinch_context::{DistancePinchDetector, PinchContext, PinchDetector};
pub use pointer_context::{
    CursorVisual, HandSlot, InteractionState, PointerContext, PointerRecord, PressDragTarget,
};
pub use ray_origin_context::{HeadPose, RayOrigin, RayOriginContext};
