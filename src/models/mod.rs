pub mod municipality;

pub use municipality::{MunicipalityDataset, MunicipalityFeature, MunicipalityRecord};
