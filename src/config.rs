use serde::Deserialize;

use crate::driver::{Lineup, ShapeKind};
use crate::error::Result;

/// Which shapes a lineup holds, and in what order.
///
/// ```toml
/// shapes = ["triangle", "hexagon", "arbitrary"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineupConfig {
    #[serde(default = "default_shapes")]
    pub shapes: Vec<ShapeKind>,
}

fn default_shapes() -> Vec<ShapeKind> {
    ShapeKind::ALL.to_vec()
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            shapes: default_shapes(),
        }
    }
}

impl LineupConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn lineup(&self) -> Lineup {
        Lineup::from_kinds(&self.shapes)
    }
}
