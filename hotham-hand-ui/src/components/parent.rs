use hecs::Entity;

/// Component added to indicate that an entity has a parent
/// Used to walk up the UI hierarchy when looking for event handlers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parent(pub Entity);
