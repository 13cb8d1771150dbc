//! Extraction of **elevation contours** from polygonal meshes: slice a mesh with a
//! stack of horizontal planes, weld the resulting intersection curves clean, and hand
//! the ordered polylines to a host's curve builder.
//!
//! The pipeline per level is *bisect* (keep only the planar intersection curve),
//! *weld* (merge vertices within a distance tolerance), *name* (template with
//! `{object}`, `{position}`, `{index}` keys), and the whole stack is driven by
//! [`build_contours`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to compute contour levels concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod contour;
pub mod emit;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use contour::{ContourLevel, ContourParams, build_contours, slice_and_weld};
pub use emit::{EmitCurves, Polyline, emit_stack, polylines};
pub use mesh::{ClearMode, Mesh, plane::Plane, vertex::Vertex};
