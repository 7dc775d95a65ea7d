/// Default project layout, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "BR_Municipios_2024";
pub const DEFAULT_OUTPUT_FILE: &str = "Dados/GeoMunicipios.csv";

/// Extension scanned for in the input directory
pub const SHAPEFILE_EXTENSION: &str = "shp";

/// CRS assigned when the shapefile has no .prj sidecar (SIRGAS 2000, geographic)
pub const DEFAULT_GEOGRAPHIC_CRS: &str = "EPSG:4674";
/// Metric CRS used for centroid computation (SIRGAS 2000 / Brazil Polyconic)
pub const PROJECTED_CRS: &str = "EPSG:5880";
/// CRS of the exported coordinates (WGS 84)
pub const OUTPUT_CRS: &str = "EPSG:4326";

/// Attribute names in the IBGE boundary DBF
pub const FIELD_CODE: &str = "CD_MUN";
pub const FIELD_NAME: &str = "NM_MUN";
pub const FIELD_STATE_CODE: &str = "CD_UF";
pub const FIELD_STATE_NAME: &str = "NM_UF";
pub const FIELD_STATE_ABBR: &str = "SIGLA_UF";
pub const FIELD_REGION_CODE: &str = "CD_REGIA";
pub const FIELD_REGION_NAME: &str = "NM_REGIA";
pub const FIELD_REGION_ABBR: &str = "SIGLA_RG";
pub const FIELD_AREA_KM2: &str = "AREA_KM2";

/// Output column labels, in export order
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "codigo_municipio",
    "municipio",
    "codigo_uf",
    "estado",
    "sigla_uf",
    "codigo_regiao",
    "regiao",
    "sigla_regiao",
    "area_km2",
    "latitude",
    "longitude",
];

/// Brazilian territory bounds (degrees), islands included
pub const BRAZIL_MIN_LAT: f64 = -34.0;
pub const BRAZIL_MAX_LAT: f64 = 6.0;
pub const BRAZIL_MIN_LON: f64 = -74.5;
pub const BRAZIL_MAX_LON: f64 = -28.0;

/// CSV conventions
pub const CSV_DELIMITER: u8 = b';';
