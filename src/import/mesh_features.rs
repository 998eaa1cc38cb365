use tracing::{debug, warn};

use crate::error::{ImportError, Result};
use crate::math::polygon_2d::open_ring;
use crate::math::Point2;
use crate::tessellation::{
    RibbonStyle, TessellateRibbon, TessellateWithHoles, TriangleMesh, TriangulatePolygon,
};

use super::feature::{FeatureGeometry, FeatureKind, FeatureMesh, LonLat};
use super::params::ImportParams;

/// Meshes produced by [`MeshFeatures`].
#[derive(Debug, Clone, Default)]
pub struct ImportOutput {
    /// Generated meshes in input order. `meshes[i].sequence == i`.
    pub meshes: Vec<FeatureMesh>,
    /// Number of lines, polygons or holes dropped for having too few points.
    pub skipped: usize,
}

impl ImportOutput {
    /// Number of meshes generated.
    #[must_use]
    pub fn count(&self) -> usize {
        self.meshes.len()
    }

    fn push(&mut self, feature: usize, kind: FeatureKind, mesh: TriangleMesh, complete: bool) {
        let sequence = self.meshes.len();
        self.meshes.push(FeatureMesh {
            sequence,
            feature,
            kind,
            mesh,
            complete,
        });
    }
}

/// Projects and meshes a batch of map features.
///
/// Lines become ribbons of `road_width`. Polygons without holes are ear
/// clipped; polygons with holes go through the constrained triangulation.
/// Every mesh is finally scaled by `scale`. Parts that are too short to mesh
/// are skipped and counted rather than reported as errors.
#[derive(Debug, Default)]
pub struct MeshFeatures {
    params: ImportParams,
}

impl MeshFeatures {
    /// Creates a new feature meshing operation.
    #[must_use]
    pub fn new(params: ImportParams) -> Self {
        Self { params }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a polygon with holes
    /// contains coordinates the triangulation cannot accept.
    pub fn execute(&self, features: &[FeatureGeometry]) -> Result<ImportOutput> {
        let style = self.params.validate()?;
        let mut output = ImportOutput::default();

        for (index, feature) in features.iter().enumerate() {
            match feature {
                FeatureGeometry::LineString(line) => {
                    self.mesh_line(index, line, style, &mut output);
                }
                FeatureGeometry::MultiLineString(lines) => {
                    for line in lines {
                        self.mesh_line(index, line, style, &mut output);
                    }
                }
                FeatureGeometry::Polygon(rings) => {
                    self.mesh_polygon(index, rings, &mut output)?;
                }
                FeatureGeometry::MultiPolygon(polygons) => {
                    for rings in polygons {
                        self.mesh_polygon(index, rings, &mut output)?;
                    }
                }
            }
        }

        debug!(
            features = features.len(),
            meshes = output.count(),
            skipped = output.skipped,
            "features meshed"
        );
        Ok(output)
    }

    fn mesh_line(&self, index: usize, line: &[LonLat], style: RibbonStyle, out: &mut ImportOutput) {
        let points = self.params.origin.project_lon_lat(line);
        if points.len() < 2 {
            warn!(feature = index, points = points.len(), "skipping short line");
            out.skipped += 1;
            return;
        }
        let mesh = TessellateRibbon::new(&points, style).execute();
        out.push(index, FeatureKind::Road, mesh.scaled(self.params.scale), true);
    }

    fn mesh_polygon(
        &self,
        index: usize,
        rings: &[Vec<LonLat>],
        out: &mut ImportOutput,
    ) -> Result<()> {
        let Some((outer, holes)) = rings.split_first() else {
            out.skipped += 1;
            return Ok(());
        };
        let outer = self.project_ring(outer);
        if outer.len() < 3 {
            warn!(feature = index, points = outer.len(), "skipping degenerate polygon");
            out.skipped += 1;
            return Ok(());
        }

        let mut kept_holes = Vec::with_capacity(holes.len());
        for hole in holes {
            let hole = self.project_ring(hole);
            if hole.len() < 3 {
                warn!(feature = index, points = hole.len(), "dropping degenerate hole");
                out.skipped += 1;
            } else {
                kept_holes.push(hole);
            }
        }

        let (mesh, complete) = if kept_holes.is_empty() {
            let triangulation = TriangulatePolygon::new(&outer).execute();
            if !triangulation.is_complete() {
                warn!(feature = index, "polygon only partially triangulated");
            }
            (
                TriangleMesh::from_polygon(&outer, &triangulation),
                triangulation.is_complete(),
            )
        } else {
            let mesh = TessellateWithHoles::new(&outer, &kept_holes)
                .execute()
                .map_err(|e| ImportError::Feature {
                    feature: index,
                    source: Box::new(e),
                })?;
            (mesh, true)
        };

        if mesh.is_empty() {
            out.skipped += 1;
            return Ok(());
        }
        out.push(index, FeatureKind::Footprint, mesh.scaled(self.params.scale), complete);
        Ok(())
    }

    /// Projects a ring and drops its closing coordinate.
    fn project_ring(&self, ring: &[LonLat]) -> Vec<Point2> {
        open_ring(&self.params.origin.project_lon_lat(ring)).to_vec()
    }
}
