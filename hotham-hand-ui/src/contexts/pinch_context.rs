use crate::components::{Hand, HandFrame, Handedness};

/// Something that decides whether a hand is pinching, eg. a gesture classifier.
///
/// When a detector is installed for a hand, its answer replaces the raw pinch distance test.
pub trait PinchDetector {
    /// Feed in this tick's snapshot of the hand
    fn update(&mut self, hand: &Hand);

    /// Is the hand pinching right now?
    fn is_pinching(&self) -> bool;
}

/// A pinch detector with hysteresis on the thumb to index distance, so a pinch that hovers
/// around a single threshold doesn't flicker on and off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistancePinchDetector {
    /// Pinching starts below this distance, in millimetres
    pub activate_distance: f32,
    /// Pinching stops above this distance, in millimetres
    pub deactivate_distance: f32,
    pinching: bool,
}

impl DistancePinchDetector {
    /// Create a detector. `deactivate_distance` should be larger than `activate_distance`.
    pub fn new(activate_distance: f32, deactivate_distance: f32) -> Self {
        Self {
            activate_distance,
            deactivate_distance,
            pinching: false,
        }
    }
}

impl Default for DistancePinchDetector {
    fn default() -> Self {
        Self::new(20., 30.)
    }
}

impl PinchDetector for DistancePinchDetector {
    fn update(&mut self, hand: &Hand) {
        if self.pinching {
            if hand.pinch_distance > self.deactivate_distance {
                self.pinching = false;
            }
        } else if hand.pinch_distance < self.activate_distance {
            self.pinching = true;
        }
    }

    fn is_pinching(&self) -> bool {
        self.pinching
    }
}

/// The optional pinch detectors, one per handedness
#[derive(Default)]
pub struct PinchContext {
    /// Detector for the left hand, if any
    pub left: Option<Box<dyn PinchDetector>>,
    /// Detector for the right hand, if any
    pub right: Option<Box<dyn PinchDetector>>,
}

impl PinchContext {
    /// Install a detector for one hand, replacing any previous one
    pub fn set_detector(&mut self, handedness: Handedness, detector: Box<dyn PinchDetector>) {
        match handedness {
            Handedness::Left => self.left = Some(detector),
            Handedness::Right => self.right = Some(detector),
        }
    }

    /// Update every installed detector with the matching hand from this tick's frame.
    /// Detectors whose hand isn't tracked keep their previous answer.
    pub fn update(&mut self, frame: &HandFrame) {
        for hand in &frame.hands {
            if let Some(detector) = self.detector_mut(hand.handedness) {
                detector.update(hand);
            }
        }
    }

    /// What the detector for this hand says, or `None` if there is no detector installed
    pub fn is_pinching(&self, handedness: Handedness) -> Option<bool> {
        let detector = match handedness {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        };
        detector.map(|d| d.is_pinching())
    }

    fn detector_mut(&mut self, handedness: Handedness) -> Option<&mut Box<dyn PinchDetector>> {
        match handedness {
            Handedness::Left => self.left.as_mut(),
            Handedness::Right => self.right.as_mut(),
        }
    }
}

impl std::fmt::Debug for PinchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinchContext")
            .field("left", &self.left.as_ref().map(|d| d.is_pinching()))
            .field("right", &self.right.as_ref().map(|d| d.is_pinching()))
            .finish()
    }
}
