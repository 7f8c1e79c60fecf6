#![deny(missing_docs)]

//! G'day! `hotham-hand-ui` turns tracked hands into pointer events for world-space UI. 👋
//!
//! Every tick each tracked hand is given a virtual pointer ray, that ray is resolved against
//! the UI surfaces in a [`hecs::World`] and the hand is sorted into one of eight
//! [`InteractionState`]s. Changes in state drive the usual pointer events (enter, exit, down,
//! click, drag, drop, up), one-shot sound and callback feedback, and a cursor for each hand.
//!
//! Two styles of interaction are supported at the same time:
//!
//! - **Far**: a ray is projected from an estimated shoulder through the index knuckle, and a
//!   pinch of the thumb and index finger acts as a click.
//! - **Near**: once the fingertip comes close to a surface the ray is projected from the head
//!   through the fingertip, and pushing the fingertip through the surface acts as a click.
//!
//! # Getting started
//! Build a [`HandUi`] with a [`HandFrameSource`], spawn some [`components::UiSurface`]s into
//! your world and call [`HandUi::update`] once per tick:
//!
//! ```ignore
//! let mut hand_ui = HandUiBuilder::new()
//!     .hand_source(my_hand_source)
//!     .build()?;
//!
//! loop {
//!     hand_ui.update(&world);
//!     for event in &hand_ui.event_context.events_this_frame {
//!         // react to clicks, drags, etc.
//!     }
//! }
//! ```

pub use glam;
pub use hand_ui::{HandUi, HandUiBuilder};
pub use hand_ui_error::HandUiError;
pub use hecs;

pub use camera::EventCamera;
pub use components::hand::{Hand, HandFrame, Handedness};
pub use contexts::hand_frame_context::HandFrameSource;
pub use config::HandUiConfig;
pub use contexts::pointer_context::InteractionState;

/// The virtual camera used to project fingers into screen space
pub mod camera;
/// Components are data attached to UI entities that the module reads or writes
pub mod components;
/// Configuration for the module
pub mod config;
/// Contexts hold the state the module carries between ticks
pub mod contexts;
mod hand_ui;
mod hand_ui_error;
/// Systems are functions called each tick to update the interaction state
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// Hand UI result type
pub type HandUiResult<T> = std::result::Result<T, HandUiError>;

/// Index of the index finger in [`components::hand::Hand::fingers`]
pub const INDEX_FINGER: usize = 1;

/// The direction the user faces when their head has no rotation
pub const WORLD_FORWARD: glam::Vec3 = glam::Vec3::NEG_Z;
