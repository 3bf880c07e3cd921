//! # Polygons
//!
//! Polymorphic dispatch over a mixed lineup of shapes.
//!
//! - [`Polygon`]: the declared contract, checked by the compiler
//! - [`Triangle`] and [`Hexagon`]: declared polygons
//! - [`Arbitrary`]: never declares `Polygon`, but has a method of the same
//!   shape and joins the lineup through [`quacks_like_polygon!`]
//! - [`Lineup`]: walks the shapes in order, asking each for its sides
//!
//! ```
//! let mut out = Vec::new();
//! polygons::Lineup::standard().run(&mut out).unwrap();
//! assert_eq!(out, b"3\n6\nhehehe\n");
//! ```
//!
//! Run the demo with: `cargo run --bin polygons`

pub mod polygon;

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod shapes;

pub use config::LineupConfig;
pub use driver::{Lineup, ShapeKind};
pub use error::{PolygonError, Result};
pub use polygon::{Polygon, Sides};
pub use shapes::{Arbitrary, Hexagon, Triangle};
