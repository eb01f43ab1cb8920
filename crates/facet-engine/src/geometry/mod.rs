//! Geometry tables for the five Platonic solids.
//!
//! Index data is generated from each solid's combinatorial structure instead
//! of hand-written tables:
//! - triangle-faced solids connect every vertex triple at edge length
//! - the dodecahedron is the dual of the icosahedron
//! - every face is wound outward before triangulation
//!
//! `Mesh` is the GPU-ready form: interleaved `Vertex` records plus a `u16`
//! triangle list and a `u16` edge list.

mod error;
mod mesh;
mod palette;
mod polyhedron;
mod solid;
mod vertex;

pub use error::GeometryError;
pub use mesh::Mesh;
pub use palette::Palette;
pub use polyhedron::Polyhedron;
pub use solid::{Solid, UnknownSolid};
pub use vertex::Vertex;
