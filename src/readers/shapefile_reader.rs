use std::fs;
use std::path::{Path, PathBuf};

use shapefile::dbase::{FieldValue, Record};
use shapefile::Shape;
use tracing::{debug, info, warn};

use crate::error::{PipelineError, Result};
use crate::models::{MunicipalityDataset, MunicipalityFeature};
use crate::utils::constants::{
    FIELD_AREA_KM2, FIELD_CODE, FIELD_NAME, FIELD_REGION_ABBR, FIELD_REGION_CODE,
    FIELD_REGION_NAME, FIELD_STATE_ABBR, FIELD_STATE_CODE, FIELD_STATE_NAME,
    SHAPEFILE_EXTENSION,
};

/// Finds the boundary shapefile inside `dir`.
///
/// Candidates are sorted by path so the choice is stable across platforms;
/// when several exist the first one is used and the rest are reported.
pub fn locate_shapefile(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(PipelineError::ShapefileNotFound(dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case(SHAPEFILE_EXTENSION))
        })
        .collect();

    candidates.sort();

    match candidates.len() {
        0 => Err(PipelineError::ShapefileNotFound(dir.to_path_buf())),
        1 => Ok(candidates.remove(0)),
        n => {
            warn!(
                "{} .shp files in {}, using {}",
                n,
                dir.display(),
                candidates[0].display()
            );
            Ok(candidates.remove(0))
        }
    }
}

/// Reads a .shp (and its .dbf sidecar) into an in-memory dataset,
/// preserving file order.
pub struct ShapefileReader;

impl ShapefileReader {
    pub fn read(path: &Path) -> Result<MunicipalityDataset> {
        let crs = read_prj_sidecar(path)?;
        let mut reader = shapefile::Reader::from_path(path)?;

        let mut features = Vec::new();
        for (index, pair) in reader.iter_shapes_and_records().enumerate() {
            let (shape, record) = pair?;
            features.push(Self::parse_feature(index, shape, &record)?);
        }

        info!("loaded {} features from {}", features.len(), path.display());
        Ok(MunicipalityDataset { crs, features })
    }

    fn parse_feature(index: usize, shape: Shape, record: &Record) -> Result<MunicipalityFeature> {
        let geometry = match shape {
            Shape::Polygon(polygon) => geo::MultiPolygon::<f64>::try_from(polygon).map_err(|_| {
                PipelineError::UnsupportedGeometry {
                    kind: "Polygon".to_string(),
                    index,
                }
            })?,
            other => {
                return Err(PipelineError::UnsupportedGeometry {
                    kind: shape_kind(&other).to_string(),
                    index,
                })
            }
        };

        Ok(MunicipalityFeature {
            code: string_field(record, FIELD_CODE, index)?,
            name: string_field(record, FIELD_NAME, index)?,
            state_code: string_field(record, FIELD_STATE_CODE, index)?,
            state_name: string_field(record, FIELD_STATE_NAME, index)?,
            state_abbr: string_field(record, FIELD_STATE_ABBR, index)?,
            region_code: string_field(record, FIELD_REGION_CODE, index)?,
            region_name: string_field(record, FIELD_REGION_NAME, index)?,
            region_abbr: string_field(record, FIELD_REGION_ABBR, index)?,
            area_km2: numeric_field(record, FIELD_AREA_KM2, index)?,
            geometry,
        })
    }
}

/// The CRS travels in a .prj sidecar that the shapefile reader itself does
/// not open. Returns the raw WKT, which PROJ accepts as a CRS definition.
fn read_prj_sidecar(shp_path: &Path) -> Result<Option<String>> {
    let prj_path = shp_path.with_extension("prj");
    if !prj_path.exists() {
        debug!("no .prj sidecar next to {}", shp_path.display());
        return Ok(None);
    }

    let wkt = fs::read_to_string(&prj_path)?;
    let wkt = wkt.trim();
    if wkt.is_empty() {
        Ok(None)
    } else {
        Ok(Some(wkt.to_string()))
    }
}

fn string_field(record: &Record, field: &'static str, index: usize) -> Result<String> {
    match record.get(field) {
        Some(FieldValue::Character(Some(value))) => Ok(value.trim().to_string()),
        Some(FieldValue::Numeric(Some(value))) => Ok(format_code(*value)),
        Some(FieldValue::Integer(value)) => Ok(value.to_string()),
        _ => Err(PipelineError::MissingAttribute { field, index }),
    }
}

fn numeric_field(record: &Record, field: &'static str, index: usize) -> Result<f64> {
    match record.get(field) {
        Some(FieldValue::Numeric(Some(value))) => Ok(*value),
        Some(FieldValue::Float(Some(value))) => Ok(f64::from(*value)),
        Some(FieldValue::Integer(value)) => Ok(f64::from(*value)),
        Some(FieldValue::Character(Some(value))) => {
            value.trim().parse::<f64>().map_err(|_| {
                PipelineError::InvalidFormat(format!(
                    "non-numeric {} value '{}' in feature {}",
                    field, value, index
                ))
            })
        }
        _ => Err(PipelineError::MissingAttribute { field, index }),
    }
}

/// IBGE codes are digit strings; when a DBF stores them as numerics they
/// come back as floats and must not grow a ".0" suffix.
fn format_code(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::NullShape => "NullShape",
        Shape::Point(_) => "Point",
        Shape::PointM(_) => "PointM",
        Shape::PointZ(_) => "PointZ",
        Shape::Polyline(_) => "Polyline",
        Shape::PolylineM(_) => "PolylineM",
        Shape::PolylineZ(_) => "PolylineZ",
        Shape::Polygon(_) => "Polygon",
        Shape::PolygonM(_) => "PolygonM",
        Shape::PolygonZ(_) => "PolygonZ",
        Shape::Multipoint(_) => "Multipoint",
        Shape::MultipointM(_) => "MultipointM",
        Shape::MultipointZ(_) => "MultipointZ",
        Shape::Multipatch(_) => "Multipatch",
    }
}
