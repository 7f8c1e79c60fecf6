use glam::Vec3;

/// A one-shot sound the UI would like played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// The pointer moved onto or off an element
    Hover,
    /// An element was pressed
    Trigger,
    /// A pinch or touch landed on blank canvas
    Missed,
}

/// One of the named callback channels. Each receives the cursor's position in global space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerCallback {
    /// An element was pressed
    ClickDown,
    /// An element was released
    ClickUp,
    /// The pointer moved onto an element
    Hover,
    /// Something is being dragged. Fires every tick while the drag lasts
    WhileClickHeld,
}

type Listener = Box<dyn FnMut(Vec3)>;

/// Collects the sounds and callbacks requested this tick.
///
/// Whatever owns the audio device can drain `sounds_this_frame` after each update. Callbacks are
/// recorded too, and any listeners registered for a channel are invoked immediately.
#[derive(Default)]
pub struct FeedbackContext {
    /// Sounds requested this tick, in order
    pub sounds_this_frame: Vec<SoundEffect>,
    /// Callbacks fired this tick, in order, with the cursor position they were fired with
    pub callbacks_this_frame: Vec<(PointerCallback, Vec3)>,
    listeners: Vec<(PointerCallback, Listener)>,
}

impl FeedbackContext {
    /// Request a sound
    pub fn play_one_shot(&mut self, sound: SoundEffect) {
        self.sounds_this_frame.push(sound);
    }

    /// Fire a callback channel
    pub fn invoke(&mut self, callback: PointerCallback, position: Vec3) {
        self.callbacks_this_frame.push((callback, position));
        for (channel, listener) in self.listeners.iter_mut() {
            if *channel == callback {
                listener(position);
            }
        }
    }

    /// Register a function to be called whenever `callback` fires
    pub fn add_listener(&mut self, callback: PointerCallback, listener: impl FnMut(Vec3) + 'static) {
        self.listeners.push((callback, Box::new(listener)));
    }

    /// Forget everything requested in the previous tick. Listeners stay registered.
    pub fn clear(&mut self) {
        self.sounds_this_frame.clear();
        self.callbacks_this_frame.clear();
    }
}

impl std::fmt::Debug for FeedbackContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackContext")
            .field("sounds_this_frame", &self.sounds_this_frame)
            .field("callbacks_this_frame", &self.callbacks_this_frame)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
