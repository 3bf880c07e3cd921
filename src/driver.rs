use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{PolygonError, Result};
use crate::polygon::Sides;
use crate::shapes::{Arbitrary, Hexagon, Triangle};

/// Lowercase names only, the same for `parse` and for lineup configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ShapeKind {
    Triangle,
    Hexagon,
    Arbitrary,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Hexagon, ShapeKind::Arbitrary];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Arbitrary => "arbitrary",
        }
    }

    pub fn build(&self) -> Box<dyn Sides> {
        match self {
            ShapeKind::Triangle => Box::new(Triangle),
            ShapeKind::Hexagon => Box::new(Hexagon),
            ShapeKind::Arbitrary => Box::new(Arbitrary),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = PolygonError;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PolygonError::unknown_shape(s))
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = PolygonError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

/// An ordered sequence of shapes, walked front to back.
pub struct Lineup {
    shapes: Vec<Box<dyn Sides>>,
}

impl Lineup {
    pub fn new(shapes: Vec<Box<dyn Sides>>) -> Self {
        Self { shapes }
    }

    /// Triangle, Hexagon, Arbitrary.
    pub fn standard() -> Self {
        Self::from_kinds(&ShapeKind::ALL)
    }

    pub fn from_kinds(kinds: &[ShapeKind]) -> Self {
        Self::new(kinds.iter().map(ShapeKind::build).collect())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.shapes.iter().map(|shape| shape.shape_name()).collect()
    }

    /// Asks every shape, in order, to report its sides. Stops at the first
    /// write that fails.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for (position, shape) in self.shapes.iter().enumerate() {
            debug!(position, shape = shape.shape_name(), "reporting sides");
            shape
                .report_sides(out)
                .map_err(|err| PolygonError::write(shape.shape_name(), err))?;
        }
        out.flush()
            .map_err(|err| PolygonError::write("lineup", err))?;

        info!(shapes = self.shapes.len(), "lineup finished");
        Ok(())
    }
}

impl Default for Lineup {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
