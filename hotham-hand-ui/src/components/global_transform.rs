use glam::{Affine3A, Quat, Vec3};

/// Component used to place an entity (eg. a UI surface or the headset) in global space.
/// This is the transformation from local to global space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Create a transform from a rotation and translation
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self(Affine3A::from_rotation_translation(rotation, translation))
    }

    /// Create a transform from a translation alone
    pub fn from_translation(translation: Vec3) -> Self {
        Self(Affine3A::from_translation(translation))
    }

    /// Convenience function to decompose the [`GlobalTransform`] into its components
    pub fn to_scale_rotation_translation(&self) -> (Vec3, Quat, Vec3) {
        self.0.to_scale_rotation_translation()
    }

    /// Position of the entity in global space
    pub fn translation(&self) -> Vec3 {
        self.0.translation.into()
    }
}
