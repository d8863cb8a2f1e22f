use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local objects a node holds before it tries to split.
    pub max_objects: usize,
    /// Deepest level a node may split to. The root is level 0.
    pub max_levels: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 10,
            max_levels: 4,
        }
    }
}
