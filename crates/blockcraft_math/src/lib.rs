//! Matrix math for the Blockcraft transform pipeline.
//!
//! [`Matrix4x4`] is a row-major 4x4 matrix of `f32` used for model, camera
//! and projection transforms. Vectors are treated as row vectors multiplied
//! from the left, so the factory functions in [`transform`] lay out their
//! matrices accordingly.

#[macro_use]
mod macros;

pub mod angle;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use matrix::Matrix4x4;
pub use transform::focal_scale_from_vertical_fov;
pub use vector::Vector4;
