use glam::{Quat, Vec3};

use crate::INDEX_FINGER;

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by `Hand` and the pinch detectors to identify which hand they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash)]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

/// Which finger
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum FingerType {
    /// Thumb
    Thumb,
    /// Index finger
    Index,
    /// Middle finger
    Middle,
    /// Ring finger
    Ring,
    /// Pinky
    Pinky,
}

impl FingerType {
    /// All fingers, in the order they're stored on a [`Hand`]
    pub const ALL: [FingerType; 5] = [
        FingerType::Thumb,
        FingerType::Index,
        FingerType::Middle,
        FingerType::Ring,
        FingerType::Pinky,
    ];
}

/// Which bone of a finger, from the wrist outwards
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum BoneType {
    /// Bone inside the palm. For the index finger its centre is the "knuckle" used for far rays
    Metacarpal,
    /// First bone outside the palm
    Proximal,
    /// Middle bone
    Intermediate,
    /// Bone that ends at the fingertip
    Distal,
}

/// A single finger bone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bone {
    /// Joint closest to the wrist
    pub prev_joint: Vec3,
    /// Joint furthest from the wrist. For a distal bone, this is the fingertip
    pub next_joint: Vec3,
    /// Midpoint between the two joints
    pub center: Vec3,
    /// Orientation of the bone
    pub rotation: Quat,
}

impl Default for Bone {
    fn default() -> Self {
        Bone::from_joints(Vec3::ZERO, Vec3::ZERO)
    }
}

impl Bone {
    /// Create a bone that runs between two joints
    pub fn from_joints(prev_joint: Vec3, next_joint: Vec3) -> Self {
        let direction = next_joint - prev_joint;
        let rotation = if direction.length_squared() > f32::EPSILON {
            Quat::from_rotation_arc(crate::WORLD_FORWARD, direction.normalize())
        } else {
            Quat::IDENTITY
        };

        Bone {
            prev_joint,
            next_joint,
            center: prev_joint.lerp(next_joint, 0.5),
            rotation,
        }
    }
}

/// A finger, made up of four bones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finger {
    /// Which finger this is
    pub finger_type: FingerType,
    /// Bones ordered metacarpal, proximal, intermediate, distal
    pub bones: [Bone; 4],
}

impl Finger {
    /// Build a finger from its five joints, wrist first
    pub fn from_joints(finger_type: FingerType, joints: [Vec3; 5]) -> Self {
        Finger {
            finger_type,
            bones: [
                Bone::from_joints(joints[0], joints[1]),
                Bone::from_joints(joints[1], joints[2]),
                Bone::from_joints(joints[2], joints[3]),
                Bone::from_joints(joints[3], joints[4]),
            ],
        }
    }

    /// Get one of the finger's bones
    pub fn bone(&self, bone_type: BoneType) -> &Bone {
        &self.bones[bone_type as usize]
    }
}

/// A single tracked hand, as reported by the hand tracking source this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Identifier that is stable only while the hand stays tracked
    pub id: i32,
    /// Which hand this is
    pub handedness: Handedness,
    /// Distance between the thumb and index fingertips, in millimetres
    pub pinch_distance: f32,
    /// Fingers ordered thumb, index, middle, ring, pinky
    pub fingers: [Finger; 5],
}

impl Hand {
    /// Create a hand with every joint at the origin
    pub fn new(id: i32, handedness: Handedness) -> Self {
        let fingers = FingerType::ALL.map(|finger_type| Finger {
            finger_type,
            bones: Default::default(),
        });

        Hand {
            id,
            handedness,
            pinch_distance: f32::MAX,
            fingers,
        }
    }

    /// Is this the right hand?
    pub fn is_right(&self) -> bool {
        self.handedness == Handedness::Right
    }

    /// Get one of the hand's fingers
    pub fn finger(&self, finger_type: FingerType) -> &Finger {
        &self.fingers[finger_type as usize]
    }

    /// The index finger
    pub fn index_finger(&self) -> &Finger {
        &self.fingers[INDEX_FINGER]
    }

    /// Centre of the index metacarpal. Far rays are projected through this point.
    pub fn index_knuckle(&self) -> Vec3 {
        self.index_finger().bone(BoneType::Metacarpal).center
    }

    /// Centre of the index distal bone. Near rays are projected through this point.
    pub fn index_distal_center(&self) -> Vec3 {
        self.index_finger().bone(BoneType::Distal).center
    }

    /// The index fingertip
    pub fn index_tip(&self) -> Vec3 {
        self.index_finger().bone(BoneType::Distal).next_joint
    }
}

/// Every hand the tracking source could see this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandFrame {
    /// Tracked hands, in the order the source reported them
    pub hands: Vec<Hand>,
}

impl HandFrame {
    /// Create a frame from a list of hands
    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }
}
