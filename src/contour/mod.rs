//! Contour stack building: repeated slicing of one source mesh at a fixed
//! vertical interval, one welded contour mesh per level.

use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::{ClearMode, Mesh};
use std::fmt::Debug;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod naming;

use naming::NameContext;

/// Parameters for one contour stack run.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourParams {
    /// Height of the lowest cutting plane ("sea level").
    pub sea_level: Real,
    /// Vertical spacing between planes. Must be non-zero; its absolute
    /// value is used, so a negative interval still walks upward.
    pub interval: Real,
    /// Weld tolerance applied to every level; larger values simplify the
    /// contour polylines.
    pub weld_distance: Real,
    /// Vertical extent to cover. `None` measures the source mesh.
    pub height: Option<Real>,
    /// Per-level name template over `{object}`, `{position}`, `{index}`.
    pub name_template: String,
    /// Concatenate all emitted curves into one entity after emission.
    pub join: bool,
}

impl Default for ContourParams {
    fn default() -> Self {
        ContourParams {
            sea_level: 0.0,
            interval: 1.0,
            weld_distance: 0.0,
            height: None,
            name_template: "{object}_Contour_{position}m".to_string(),
            join: false,
        }
    }
}

/// One contour: a height, the sliced-and-welded mesh, and a generated name.
#[derive(Debug, Clone)]
pub struct ContourLevel<S: Clone + Send + Sync + Debug> {
    /// Zero-based level index; levels are always ordered by it.
    pub index: usize,
    /// Height of the cutting plane that produced this level.
    pub height: Real,
    /// Name rendered from the template (or the generated fallback).
    pub name: String,
    /// The planar intersection curve(s) at this height. May be empty when
    /// the plane missed the mesh — a valid, zero-geometry level.
    pub mesh: Mesh<S>,
}

/// Slice `mesh` by `plane`, keep only the cut curve, and weld it with
/// `distance`. The source is left untouched; the section is returned as an
/// independent mesh.
pub fn slice_and_weld<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
    plane: &Plane,
    distance: Real,
) -> Mesh<S> {
    let mut section = mesh.clone();
    section.bisect(plane, ClearMode::ClearBoth);
    section.weld(distance);
    section
}

/// Number of levels covering `height` at the given spacing:
/// `floor(height / |interval|) + 1`.
///
/// When the height is an exact multiple of the interval this generates one
/// level at the very top of the extent — over-generation is preferred to
/// under-coverage.
///
/// # Panics
/// If `interval` is zero or `height` is negative.
pub fn level_count(height: Real, interval: Real) -> usize {
    assert!(interval != 0.0, "contour interval must be non-zero");
    assert!(height >= 0.0, "contour height must be non-negative");
    (height / interval.abs()).floor() as usize + 1
}

/// Build the full contour stack for `mesh`.
///
/// Each level clones the source, bisects it at
/// `height_i = i * interval + sea_level` keeping only the cut curve, welds
/// it, and names it from the template — falling back to
/// [`naming::generated_name`] when the template fails. Returns levels in
/// ascending index order (ascending height for a positive interval), empty
/// levels included.
pub fn build_contours<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
    object_name: &str,
    params: &ContourParams,
) -> Vec<ContourLevel<S>> {
    if mesh.vertices.is_empty() {
        return Vec::new();
    }

    let height = params.height.unwrap_or_else(|| mesh.height());
    let count = level_count(height, params.interval);
    info!(
        levels = count,
        height = format!("{height:.2}"),
        interval = params.interval,
        "building contour stack"
    );

    let build = |index: usize| {
        let position = index as Real * params.interval + params.sea_level;
        let section = slice_and_weld(mesh, &Plane::horizontal(position), params.weld_distance);
        debug!(
            index,
            position,
            vertices = section.vertices.len(),
            "sliced contour level"
        );

        let ctx = NameContext {
            object: object_name,
            position,
            index,
        };
        let name = match naming::render(&params.name_template, &ctx) {
            Ok(name) => name,
            Err(error) => {
                debug!(%error, "name template failed, using generated name");
                naming::generated_name(position)
            },
        };

        ContourLevel {
            index,
            height: position,
            name,
            mesh: section,
        }
    };

    // Levels share nothing but the read-only source mesh; with rayon the
    // collect still yields ascending index order.
    #[cfg(feature = "parallel")]
    let levels = (0..count).into_par_iter().map(build).collect();

    #[cfg(not(feature = "parallel"))]
    let levels = (0..count).map(build).collect();

    levels
}
