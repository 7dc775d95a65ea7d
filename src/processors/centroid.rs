use geo::{Centroid, Point};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::models::MunicipalityFeature;
use crate::processors::Reprojector;
use crate::utils::constants::{OUTPUT_CRS, PROJECTED_CRS};
use crate::utils::ProgressReporter;

/// Computes representative center points for municipal polygons.
///
/// Centroids are taken in a metric CRS and only then brought back to
/// geographic degrees: an area-weighted centroid computed directly on
/// lat/lon values is planar-incorrect for large or high-latitude shapes.
pub struct CentroidTransformer {
    to_metric: Reprojector,
    to_geographic: Reprojector,
}

impl CentroidTransformer {
    /// `source_crs` is the CRS the dataset currently declares.
    pub fn new(source_crs: &str) -> Result<Self> {
        Ok(Self {
            to_metric: Reprojector::new(source_crs, PROJECTED_CRS)?,
            to_geographic: Reprojector::new(PROJECTED_CRS, OUTPUT_CRS)?,
        })
    }

    /// Returns one WGS 84 centroid per feature, in input order.
    pub fn centroids(
        &self,
        features: &[MunicipalityFeature],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<Point<f64>>> {
        let mut points = Vec::with_capacity(features.len());

        for feature in features {
            let projected = self.to_metric.transform_multi_polygon(&feature.geometry)?;
            let centroid = projected.centroid().ok_or_else(|| {
                PipelineError::EmptyGeometry {
                    code: feature.code.clone(),
                }
            })?;
            points.push(self.to_geographic.transform_point(&centroid)?);

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        debug!("computed {} centroids", points.len());
        Ok(points)
    }
}
