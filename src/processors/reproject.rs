use geo::{Coord, LineString, MultiPolygon, Point, Polygon};
use proj::Proj;

use crate::error::Result;

/// Coordinate transformation between two CRS definitions.
///
/// A definition is anything PROJ understands: an "EPSG:nnnn" code or the
/// WKT body of a .prj sidecar.
pub struct Reprojector {
    proj: Proj,
}

impl Reprojector {
    pub fn new(source: &str, target: &str) -> Result<Self> {
        let proj = Proj::new_known_crs(source, target, None)?;
        Ok(Self { proj })
    }

    pub fn transform_point(&self, point: &Point<f64>) -> Result<Point<f64>> {
        let (x, y) = self.proj.convert((point.x(), point.y()))?;
        Ok(Point::new(x, y))
    }

    pub fn transform_multi_polygon(&self, geometry: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
        let polygons = geometry
            .0
            .iter()
            .map(|polygon| self.transform_polygon(polygon))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPolygon::new(polygons))
    }

    fn transform_polygon(&self, polygon: &Polygon<f64>) -> Result<Polygon<f64>> {
        let exterior = self.transform_ring(polygon.exterior())?;
        let interiors = polygon
            .interiors()
            .iter()
            .map(|ring| self.transform_ring(ring))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }

    // Batch conversion: one PROJ call per ring instead of one per vertex.
    fn transform_ring(&self, ring: &LineString<f64>) -> Result<LineString<f64>> {
        let mut coords: Vec<(f64, f64)> = ring.0.iter().map(|c| (c.x, c.y)).collect();
        self.proj.convert_array(&mut coords)?;
        Ok(LineString::new(
            coords.into_iter().map(|(x, y)| Coord { x, y }).collect(),
        ))
    }
}
