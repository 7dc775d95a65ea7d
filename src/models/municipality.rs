use geo::{MultiPolygon, Point};
use serde::{Serialize, Serializer};
use validator::Validate;

use crate::utils::constants::{
    BRAZIL_MAX_LAT, BRAZIL_MAX_LON, BRAZIL_MIN_LAT, BRAZIL_MIN_LON,
};

/// One feature from the boundary shapefile: the administrative attributes
/// plus the municipal polygon, attribute names still the IBGE originals
/// (CD_MUN, NM_MUN, ...).
#[derive(Debug, Clone)]
pub struct MunicipalityFeature {
    pub code: String,
    pub name: String,
    pub state_code: String,
    pub state_name: String,
    pub state_abbr: String,
    pub region_code: String,
    pub region_name: String,
    pub region_abbr: String,
    pub area_km2: f64,
    pub geometry: MultiPolygon<f64>,
}

/// The loaded table, in file order, with the CRS read from the .prj sidecar
/// (None when the sidecar is missing).
#[derive(Debug, Clone)]
pub struct MunicipalityDataset {
    pub crs: Option<String>,
    pub features: Vec<MunicipalityFeature>,
}

/// One output row. Field order is the column order of the exported file;
/// serde field names are the exported header labels.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct MunicipalityRecord {
    pub codigo_municipio: String,
    pub municipio: String,
    pub codigo_uf: String,
    pub estado: String,
    pub sigla_uf: String,
    pub codigo_regiao: String,
    pub regiao: String,
    pub sigla_regiao: String,
    #[serde(serialize_with = "serialize_decimal_comma")]
    pub area_km2: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(serialize_with = "serialize_decimal_comma")]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(serialize_with = "serialize_decimal_comma")]
    pub longitude: f64,
}

impl MunicipalityRecord {
    /// Maps a feature's attributes to their output labels and reads the
    /// centroid's planar coordinates: latitude is the north-south axis (y),
    /// longitude the east-west axis (x). No rounding is applied.
    pub fn from_feature(feature: &MunicipalityFeature, centroid: Point<f64>) -> Self {
        Self {
            codigo_municipio: feature.code.clone(),
            municipio: feature.name.clone(),
            codigo_uf: feature.state_code.clone(),
            estado: feature.state_name.clone(),
            sigla_uf: feature.state_abbr.clone(),
            codigo_regiao: feature.region_code.clone(),
            regiao: feature.region_name.clone(),
            sigla_regiao: feature.region_abbr.clone(),
            area_km2: feature.area_km2,
            latitude: centroid.y(),
            longitude: centroid.x(),
        }
    }

    /// Whether the centroid falls inside the Brazilian territory bounding box.
    pub fn is_within_brazil_bounds(&self) -> bool {
        self.latitude >= BRAZIL_MIN_LAT
            && self.latitude <= BRAZIL_MAX_LAT
            && self.longitude >= BRAZIL_MIN_LON
            && self.longitude <= BRAZIL_MAX_LON
    }
}

/// Formats a float with a comma decimal separator, full precision.
pub fn decimal_comma(value: f64) -> String {
    value.to_string().replace('.', ",")
}

fn serialize_decimal_comma<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&decimal_comma(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn sao_paulo_feature() -> MunicipalityFeature {
        MunicipalityFeature {
            code: "3550308".to_string(),
            name: "São Paulo".to_string(),
            state_code: "35".to_string(),
            state_name: "São Paulo".to_string(),
            state_abbr: "SP".to_string(),
            region_code: "3".to_string(),
            region_name: "Sudeste".to_string(),
            region_abbr: "SE".to_string(),
            area_km2: 1521.11,
            geometry: MultiPolygon::new(vec![polygon![
                (x: -46.8, y: -23.8),
                (x: -46.4, y: -23.8),
                (x: -46.4, y: -23.4),
                (x: -46.8, y: -23.4),
                (x: -46.8, y: -23.8),
            ]]),
        }
    }

    #[test]
    fn test_record_from_feature() {
        let feature = sao_paulo_feature();
        let record = MunicipalityRecord::from_feature(&feature, Point::new(-46.6, -23.6));

        assert_eq!(record.codigo_municipio, "3550308");
        assert_eq!(record.municipio, "São Paulo");
        assert_eq!(record.sigla_regiao, "SE");
        assert_eq!(record.latitude, -23.6);
        assert_eq!(record.longitude, -46.6);
    }

    #[test]
    fn test_record_validation_ranges() {
        let feature = sao_paulo_feature();

        let record = MunicipalityRecord::from_feature(&feature, Point::new(-46.6, -23.6));
        assert!(record.validate().is_ok());

        let record = MunicipalityRecord::from_feature(&feature, Point::new(-46.6, -91.0));
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_brazil_bounds() {
        let feature = sao_paulo_feature();

        let inside = MunicipalityRecord::from_feature(&feature, Point::new(-46.6, -23.6));
        assert!(inside.is_within_brazil_bounds());

        // Lisbon: valid coordinates, but not in Brazil.
        let outside = MunicipalityRecord::from_feature(&feature, Point::new(-9.14, 38.72));
        assert!(outside.validate().is_ok());
        assert!(!outside.is_within_brazil_bounds());
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(decimal_comma(1521.11), "1521,11");
        assert_eq!(decimal_comma(-23.55065), "-23,55065");
        assert_eq!(decimal_comma(5.0), "5");
    }
}
