/// Component that adds some information about the entity
/// Useful for debugging - used to name targets in log messages
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
}

impl Info {
    /// Create a new `Info` with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
