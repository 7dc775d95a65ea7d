use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No .shp file found in {}", .0.display())]
    ShapefileNotFound(PathBuf),

    #[error("Shapefile read error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("Feature {index}: missing attribute '{field}'")]
    MissingAttribute { field: &'static str, index: usize },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Feature {index}: unsupported geometry '{kind}', expected Polygon")]
    UnsupportedGeometry { kind: String, index: usize },

    #[error("Municipality {code}: empty geometry has no centroid")]
    EmptyGeometry { code: String },

    #[error("CRS definition error: {0}")]
    CrsDefinition(#[from] proj::ProjCreateError),

    #[error("Coordinate transformation error: {0}")]
    Transform(#[from] proj::ProjError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
