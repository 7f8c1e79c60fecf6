use crate::components::HandFrame;

/// Anything that can supply a snapshot of the tracked hands once per tick.
///
/// Closures work too, which is handy for tests and simulators:
///
/// ```
/// use hotham_hand_ui::{contexts::HandFrameContext, HandFrame};
///
/// let mut source = || HandFrame::default();
/// let mut hand_frame_context = HandFrameContext::default();
/// hand_frame_context.update(&mut source);
/// assert!(hand_frame_context.frame.hands.is_empty());
/// ```
pub trait HandFrameSource {
    /// Get every hand that is tracked right now
    fn current_frame(&mut self) -> HandFrame;
}

impl<F> HandFrameSource for F
where
    F: FnMut() -> HandFrame,
{
    fn current_frame(&mut self) -> HandFrame {
        self()
    }
}

/// Holds the hands seen this tick. Hands are addressed by their position in the frame, which is
/// also the slot they're processed in.
#[derive(Debug, Clone, Default)]
pub struct HandFrameContext {
    /// The snapshot taken at the start of this tick
    pub frame: HandFrame,
}

impl HandFrameContext {
    /// Take a fresh snapshot from the source. Called by `HandUi` at the start of each tick.
    pub fn update(&mut self, source: &mut dyn HandFrameSource) {
        self.frame = source.current_frame();
    }

    /// How many hands are tracked this tick
    pub fn hand_count(&self) -> usize {
        self.frame.hands.len()
    }
}
