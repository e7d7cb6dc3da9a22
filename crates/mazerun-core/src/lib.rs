//! **mazerun-core** provides core types for facing-aware maze search.
//!
//! This crate provides the data side of the *mazerun* workspace: geometry
//! primitives ([`Cell`], [`Facing`], [`Range`]), terrain classification, an
//! immutable [`Grid`] parsed from text, and a renderer that overlays a set of
//! tiles on the map.

pub mod error;
pub mod geom;
pub mod grid;
pub mod render;
pub mod terrain;

pub use error::GridError;
pub use geom::{Cell, Facing, Range};
pub use grid::Grid;
pub use render::{TILE_RUNE, render_with_tiles};
pub use terrain::Terrain;
