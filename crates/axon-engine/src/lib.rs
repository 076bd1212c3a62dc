//! Axon engine crate.
//!
//! Declarative scene model for vector graphics: matrix algebra, 3D shapes and
//! paths, a recursive `Drawing` tree, and the interpreter that projects it onto
//! a 2D [`render::Renderer`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
