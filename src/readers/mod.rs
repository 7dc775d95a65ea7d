pub mod shapefile_reader;

pub use shapefile_reader::{locate_shapefile, ShapefileReader};
