use tracing::{debug, info};

use crate::models::MunicipalityDataset;
use crate::utils::constants::DEFAULT_GEOGRAPHIC_CRS;

/// Assigns the SIRGAS 2000 geographic CRS when the dataset carries no CRS
/// metadata. An existing CRS is left untouched, whatever it declares.
pub fn normalize_crs(dataset: &mut MunicipalityDataset) {
    match dataset.crs {
        Some(_) => debug!("dataset already declares a CRS"),
        None => {
            info!(
                "shapefile has no CRS metadata, assuming {}",
                DEFAULT_GEOGRAPHIC_CRS
            );
            dataset.crs = Some(DEFAULT_GEOGRAPHIC_CRS.to_string());
        }
    }
}
