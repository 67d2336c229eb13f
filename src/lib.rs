//! Signed distance fields wrapped around cylinders.
//!
//! The centerpiece is [`wrap::wrap_around_cylinder`], which takes a planar
//! (2D) distance field such as engraved text or a relief pattern and bends
//! it around the lateral surface of a hollow cylindrical shell.
//!
//! ```rust,no_run
//! use cylwrap::shape::{Rect2d, Sdf};
//! use cylwrap::wrap::wrap_around_cylinder;
//! use nalgebra::{Vector2, Vector3};
//!
//! let band = Rect2d::new(Vector2::new(0.0, 5.0), Vector2::new(3.0, 5.0));
//! let wrapped = wrap_around_cylinder(&band, 10.0, 2.0, 0.0, 0.5)?;
//! let _d = wrapped.evaluate(Vector3::new(0.0, -11.0, 5.0));
//! # Ok::<(), cylwrap::error::SdfError>(())
//! ```

pub mod blend;
pub mod csg;
pub mod error;
pub mod position;
pub mod primitives;
pub mod shape;
pub mod types;
pub mod voxel;
pub mod wrap;
