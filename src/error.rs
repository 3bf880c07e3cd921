use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolygonError {
    #[error("Failed to report sides for {shape}: {source}")]
    Write {
        shape: String,
        #[source]
        source: io::Error,
    },

    #[error("Unknown shape '{0}' (expected one of: triangle, hexagon, arbitrary)")]
    UnknownShape(String),

    #[error("Invalid lineup config: {0}")]
    Config(#[from] toml::de::Error),
}

impl PolygonError {
    pub fn write(shape: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            shape: shape.into(),
            source,
        }
    }

    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape(name.into())
    }
}

pub type Result<T> = std::result::Result<T, PolygonError>;
