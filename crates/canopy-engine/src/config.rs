use serde::{Deserialize, Serialize};

/// Configuration for the routing engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Route items through organizing containers on creation.
    pub organize_creates: bool,
    /// Re-route items through organizing containers when they are moved.
    pub organize_moves: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            organize_creates: true,
            organize_moves: true,
        }
    }
}

impl RouterConfig {
    /// A configuration with both event hooks switched off.
    ///
    /// Useful while bulk-importing content that must keep its authored
    /// tree positions.
    pub fn disabled() -> Self {
        Self {
            organize_creates: false,
            organize_moves: false,
        }
    }
}
